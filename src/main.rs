mod app;
mod config;
mod entry;
mod input;
mod io;
mod preview;
mod rule;
mod state;
mod style;
mod view;

use app::Henkan;
use config::Config;
use eframe::egui;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("henkan=info")))
        .init();

    if let Err(e) = Config::create_default() {
        tracing::warn!("Could not write default config: {}", e);
    }
    let config = Config::load();

    // Optional folder to open on startup
    let start_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Henkan Bulk Rename"),
        ..Default::default()
    };

    eframe::run_native(
        "Henkan",
        options,
        Box::new(move |cc| Ok(Box::new(Henkan::new(cc, config, start_path)))),
    )
}
