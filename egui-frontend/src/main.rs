use eframe::egui;
use log::{error, info};

mod config;
mod ui;

use config::AppConfig;
use ui::MassAttendanceApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging; verbosity comes from RUST_LOG
    env_logger::init();
    info!("Starting Mass Attendance egui application");

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        }
    };

    // Sized like a phone-ish column, matching the single-card layout
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([420.0, 640.0])
            .with_title(config.window_title.clone())
            .with_resizable(true),
        ..Default::default()
    };

    let app_name = config.window_title.clone();
    info!("Launching egui window");
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |_cc| {
            let app = MassAttendanceApp::new(config);
            info!("Successfully initialized Mass Attendance app");
            Ok(Box::new(app))
        }),
    )
}
