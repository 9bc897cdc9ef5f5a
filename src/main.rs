mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::{anyhow, Result};
use app::TimingCompareApp;
use eframe::egui;
use state::AppState;

/// Written by the benchmark next to where the viewer is started.
const DATA_FILE: &str = "data.txt";

fn main() -> Result<()> {
    env_logger::init();

    // A missing or malformed data file is fatal: no window is opened.
    let state = AppState::open(Path::new(DATA_FILE))?;
    log::info!(
        "Loaded {} samples ({} cpu, {} gpu) from {DATA_FILE}",
        state.series.len(),
        state.series.cpu.len(),
        state.series.gpu.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Timing Compare – CPU vs GPU",
        options,
        Box::new(move |_cc| Ok(Box::new(TimingCompareApp::new(state)))),
    )
    .map_err(|e| anyhow!("running viewer: {e}"))
}
