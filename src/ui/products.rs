use eframe::egui::{self, Grid, RichText, Sense, Ui};

use sales_dashboard::color;
use sales_dashboard::data::aggregate::RankedEntry;
use sales_dashboard::format::{format_compact_currency, truncate_label};

use super::{card, section_header};

/// Longest product name shown before truncation.
const NAME_CHARS: usize = 22;
const BAR_WIDTH: f32 = 90.0;

/// Ranked list with a bar scaled to the leader.
pub fn top_products(ui: &mut Ui, entries: &[RankedEntry]) {
    section_header(ui, "Top Products by Sales");
    card(ui, |ui| {
        if entries.is_empty() {
            ui.label(RichText::new("No products match the current filters.").color(color::MUTED));
            return;
        }
        Grid::new("top_products")
            .num_columns(4)
            .spacing([10.0, 12.0])
            .show(ui, |ui| {
                for e in entries {
                    ui.label(RichText::new(format!("#{}", e.rank)).monospace().small().color(color::MUTED));
                    ui.label(truncate_label(&e.key, NAME_CHARS)).on_hover_text(e.key.as_str());

                    let (rect, _) = ui.allocate_exact_size(egui::vec2(BAR_WIDTH, 6.0), Sense::hover());
                    let painter = ui.painter();
                    painter.rect_filled(rect, 3.0, egui::Color32::from_rgb(0xf0, 0xf0, 0xf5));
                    let mut filled = rect;
                    filled.set_width(BAR_WIDTH * e.bar_pct as f32 / 100.0);
                    painter.rect_filled(filled, 3.0, color::BLUE);

                    ui.label(
                        RichText::new(format_compact_currency(e.value))
                            .monospace()
                            .strong()
                            .color(color::BLUE),
                    );
                    ui.end_row();
                }
            });
    });
}
