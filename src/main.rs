//! AgriTech desktop client built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime for REST calls
//! - Communication via crossbeam channels (lock-free, sync-safe)

use anyhow::anyhow;
use eframe::egui;

use agritech_client::app::AgriApp;
use agritech_client::config;
use agritech_client::logging;

fn main() -> anyhow::Result<()> {
    let settings = config::load_settings();
    logging::init_logging(&settings.log_filter);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("AgriTech")
            .with_inner_size([1024.0, 680.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "AgriTech",
        options,
        Box::new(move |cc| Ok(Box::new(AgriApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow!("failed to start the UI: {}", e))
}
