use eframe::egui::{self, Color32, RichText, Ui};

use sales_dashboard::assets::AVATAR_URI;
use sales_dashboard::color;
use sales_dashboard::data::filter::filter_options;
use sales_dashboard::data::model::FilterDimension;
use sales_dashboard::format::format_count;
use sales_dashboard::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(12.0);
        ui.label(RichText::new("📊").size(26.0));
        ui.label(RichText::new("Sales Dashboard").strong().size(16.0));
        ui.label(RichText::new("ANALYTICS 2022–2024").small().color(color::MUTED));
        ui.add_space(12.0);
    });

    ui.heading("Filters");
    ui.separator();

    // Collect the pick first; applying it re-runs the whole pipeline.
    let mut picked: Option<(FilterDimension, String)> = None;

    for dim in FilterDimension::ALL {
        let current = state.filters.selected_label(dim);
        let options = filter_options(state.dataset, dim);

        ui.add_space(8.0);
        ui.label(
            RichText::new(dim.label().to_uppercase())
                .small()
                .strong()
                .color(color::MUTED),
        );
        egui::ComboBox::from_id_salt(dim.label())
            .selected_text(&current)
            .width(ui.available_width())
            .show_ui(ui, |ui: &mut Ui| {
                for opt in &options {
                    if ui.selectable_label(current == *opt, opt).clicked() {
                        picked = Some((dim, opt.clone()));
                    }
                }
            });
    }

    if let Some((dim, label)) = picked {
        state.set_filter(dim, &label);
    }

    ui.add_space(12.0);
    if ui
        .add_enabled(state.filters.is_active(), egui::Button::new("Reset filters"))
        .clicked()
    {
        state.reset_filters();
    }

    ui.separator();
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new("Built with egui + egui_plot\nSynthetic Superstore-style data")
                .small()
                .color(color::MUTED),
        );
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export filtered…").clicked() {
                export_dialog(state);
                ui.close_menu();
            }
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        ui.label(format!(
            "{} records loaded, {} visible",
            format_count(state.dataset.len()),
            format_count(state.visible_indices.len())
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            let c = if msg.starts_with("Error") { Color32::RED } else { color::GREEN };
            ui.label(RichText::new(msg).color(c));
        }
    });
}

// ---------------------------------------------------------------------------
// Page header / footer
// ---------------------------------------------------------------------------

pub fn page_header(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.label(RichText::new("Sales & Revenue Dashboard").strong().size(24.0));
            ui.label(
                RichText::new("Business performance analytics · Superstore-style dataset")
                    .color(color::MUTED),
            );
        });
        if state.filters.is_active() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
                ui.label(RichText::new("● LIVE FILTERS ACTIVE").monospace().small().color(color::BLUE));
            });
        }
    });
    ui.add_space(12.0);
}

pub fn footer(ui: &mut Ui, state: &AppState) {
    ui.add_space(32.0);
    ui.separator();
    ui.horizontal(|ui: &mut Ui| {
        if let Some(bytes) = &state.avatar {
            ui.add(
                egui::Image::from_bytes(AVATAR_URI, bytes.clone())
                    .fit_to_exact_size(egui::vec2(44.0, 44.0))
                    .rounding(22.0),
            );
        }
        ui.vertical(|ui: &mut Ui| {
            ui.label(RichText::new("Sales & Revenue Dashboard").strong());
            ui.label(RichText::new("ANALYTICS · DATA SCIENCE").small().color(color::MUTED));
        });
    });
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new(format!(
                "Built with egui & egui_plot · {} synthetic records (seed {})",
                format_count(state.dataset.len()),
                state.config.seed
            ))
            .small()
            .color(color::MUTED),
        );
    });
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export filtered records")
        .set_file_name("sales_filtered.csv")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .save_file();

    if let Some(path) = file {
        match state.export_filtered(&path) {
            Ok(n) => {
                log::info!("Exported {n} records to {}", path.display());
                state.status_message = Some(format!("Exported {n} records to {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to export: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
