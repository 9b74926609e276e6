use eframe::egui::{self, RichText, Ui};

use sales_dashboard::color;

pub mod charts;
pub mod kpi;
pub mod panels;
pub mod products;
pub mod table;

/// Bold section title with an accent underline.
pub fn section_header(ui: &mut Ui, title: &str) {
    ui.label(RichText::new(title).strong().size(16.0));
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width().min(180.0), 2.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 0.0, color::BLUE);
    ui.add_space(6.0);
}

/// White rounded card around `add_contents`.
pub fn card<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::group(ui.style())
        .fill(egui::Color32::WHITE)
        .inner_margin(egui::Margin::same(12))
        .show(ui, add_contents)
        .inner
}
