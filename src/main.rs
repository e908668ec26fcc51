mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::LaunchBoardApp;
use eframe::egui;

/// The dataset file, read once from the working directory at startup.
const DATA_FILE: &str = "spacex_launch_dash.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let dataset = match data::loader::load_file(Path::new(DATA_FILE)) {
        Ok(dataset) => dataset,
        Err(err) => {
            log::error!("cannot start without launch data: {err}");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} launch records from {} sites",
        dataset.len(),
        dataset.sites.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchBoardApp::new(dataset)))),
    )
}
