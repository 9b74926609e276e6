mod app;
mod ui;

use app::SalesDashboardApp;
use eframe::egui;
use sales_dashboard::assets;
use sales_dashboard::config::DashboardConfig;
use sales_dashboard::data::generator;
use sales_dashboard::state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_env();
    let dataset = generator::cached(config.seed, config.record_count);
    let avatar = assets::load_avatar(&config.avatar_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sales & Revenue Dashboard",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can decode the avatar bytes.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(SalesDashboardApp::new(AppState::new(
                dataset, config, avatar,
            ))))
        }),
    )
}
