use eframe::egui::{self, CollapsingHeader, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use sales_dashboard::color;
use sales_dashboard::format::format_amount;
use sales_dashboard::state::AppState;

const HEADERS: [&str; 10] = [
    "Order Date",
    "Category",
    "Sub-Category",
    "Region",
    "Segment",
    "Product",
    "Sales",
    "Revenue",
    "Profit",
    "Quantity",
];

// ---------------------------------------------------------------------------
// Raw data (collapsed by default)
// ---------------------------------------------------------------------------

/// Most recent filtered records, newest first.
pub fn raw_data(ui: &mut Ui, state: &AppState) {
    let snap = &state.snapshot;
    CollapsingHeader::new(RichText::new("📋 View Raw Data").strong())
        .id_salt("raw_data")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto().at_least(90.0))
                .columns(Column::auto().at_least(70.0), HEADERS.len() - 1)
                .min_scrolled_height(0.0)
                .max_scroll_height(320.0)
                .header(20.0, |mut header| {
                    for h in HEADERS {
                        header.col(|ui| {
                            ui.strong(h);
                        });
                    }
                })
                .body(|body| {
                    body.rows(18.0, snap.raw_indices.len(), |mut row| {
                        let r = &state.dataset.records[snap.raw_indices[row.index()]];
                        let cells = [
                            r.display_date(),
                            r.category.to_string(),
                            r.sub_category.to_string(),
                            r.region.to_string(),
                            r.segment.to_string(),
                            r.product.to_string(),
                            format_amount(r.sales),
                            format_amount(r.revenue),
                            format_amount(r.profit),
                            r.quantity.to_string(),
                        ];
                        for text in cells {
                            row.col(|ui| {
                                ui.label(text);
                            });
                        }
                    });
                });
            ui.label(RichText::new(snap.raw_caption()).small().color(color::MUTED));
        });
}
