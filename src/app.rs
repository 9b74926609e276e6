use eframe::egui::{self, ScrollArea, Ui};

use sales_dashboard::state::AppState;

use crate::ui::{charts, kpi, panels, products, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalesDashboardApp {
    pub state: AppState,
}

impl SalesDashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SalesDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: KPIs, charts, raw data ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| dashboard(ui, &self.state));
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState) {
    let snap = &state.snapshot;

    panels::page_header(ui, state);
    kpi::kpi_row(ui, &snap.kpis);
    ui.add_space(16.0);

    // Row 1: revenue over time + sales by category
    ui.columns(2, |cols| {
        charts::revenue_over_time(&mut cols[0], &snap.monthly);
        charts::sales_by_category(&mut cols[1], &snap.category_sales, &state.category_colors);
    });
    ui.add_space(16.0);

    // Row 2: region donut + category trends + top products
    ui.columns(3, |cols| {
        charts::sales_by_region(&mut cols[0], &snap.region_sales);
        charts::category_trends(&mut cols[1], &snap.category_trends, &state.category_colors);
        products::top_products(&mut cols[2], &snap.top_products);
    });
    ui.add_space(16.0);

    // Row 3: margin by sub-category + revenue by segment
    ui.columns(2, |cols| {
        charts::margin_by_sub_category(&mut cols[0], &snap.sub_category_margins);
        charts::revenue_by_segment(&mut cols[1], &snap.segment_revenue);
    });
    ui.add_space(16.0);

    table::raw_data(ui, state);
    panels::footer(ui, state);
}
