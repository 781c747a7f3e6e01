//! GUI entry point for the CRSP catalog browser

mod app;
mod browse_panel;
mod detail_panel;
mod motorcycle_panel;

use app::CrspApp;
use eframe::egui;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() -> eframe::Result<()> {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CRSP Catalog",
        options,
        Box::new(|cc| Ok(Box::new(CrspApp::new(cc)))),
    )
}
