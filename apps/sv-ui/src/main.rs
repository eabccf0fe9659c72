#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod run_worker;
mod views;

use app::SteamVesselApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("SteamVessel"),
        ..Default::default()
    };

    eframe::run_native(
        "SteamVessel",
        options,
        Box::new(|cc| Ok(Box::new(SteamVesselApp::new(cc)))),
    )
}
