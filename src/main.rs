mod app;
mod camera;
mod color;
mod data;
mod scene;
mod state;
mod ui;

use std::path::Path;

use anyhow::Result;
use app::Scatter3dApp;
use eframe::egui;

use crate::data::loader::read_and_print;
use crate::data::samples::{build_line_samples, build_scatter_samples};
use crate::scene::Scene;
use crate::state::AppState;

/// Input file, relative to the working directory.
const DATA_PATH: &str = "data.csv";

fn main() -> Result<()> {
    env_logger::init();

    // Fail before any window exists if the CSV is missing or malformed.
    let rows = read_and_print(Path::new(DATA_PATH)).inspect_err(|e| {
        log::error!("Failed to read {DATA_PATH}: {e:#}");
    })?;
    log::info!("Printed {rows} rows from {DATA_PATH}");

    let line = build_line_samples();
    let scatters = build_scatter_samples();
    log::debug!(
        "Built {} line samples and scatter sets of {} / {} points",
        line.points.len(),
        scatters[0].points.len(),
        scatters[1].points.len()
    );
    let state = AppState::new(Scene::new(line, scatters), rows);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([500.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Scatter3D – data.csv",
        options,
        Box::new(|_cc| Ok(Box::new(Scatter3dApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("display failed: {e}"))
}
