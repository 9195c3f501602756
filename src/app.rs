use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct Scatter3dApp {
    pub state: AppState,
}

impl Scatter3dApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for Scatter3dApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status + view reset ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: legend + camera ----
        egui::SidePanel::left("layer_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: 3D axes ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scene_plot(ui, &mut self.state);
        });
    }
}
