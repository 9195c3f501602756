use eframe::egui::{self, Color32, RichText, Sense, Ui};

use crate::color::ColorMap;
use crate::state::AppState;

const SWATCH_SIZE: egui::Vec2 = egui::vec2(60.0, 12.0);
const RAMP_STEPS: usize = 24;

// ---------------------------------------------------------------------------
// Left side panel – legend and camera
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Layers");
    ui.separator();

    let line = &state.scene.line;
    ui.horizontal(|ui: &mut Ui| {
        solid_swatch(ui, line.color);
        ui.label(format!("{}  ({} pts, line)", line.name, line.points.len()));
    });

    for layer in &state.scene.scatters {
        ui.horizontal(|ui: &mut Ui| {
            ramp_swatch(ui, layer.color_map);
            ui.label(format!("{}  ({} pts)", layer.name, layer.points.len()))
                .on_hover_text(format!("coloured by z, {}", layer.color_map.name()));
        });
    }

    ui.add_space(8.0);
    ui.heading("View");
    ui.separator();

    ui.add(
        egui::Slider::new(&mut state.camera.azimuth_deg, -180.0..=180.0)
            .text("azimuth")
            .suffix("°"),
    );
    ui.add(
        egui::Slider::new(&mut state.camera.elevation_deg, -90.0..=90.0)
            .text("elevation")
            .suffix("°"),
    );
    ui.checkbox(&mut state.show_box, "Axes box");

    ui.add_space(8.0);
    ui.label(RichText::new("Drag the plot to rotate.").weak());
}

fn solid_swatch(ui: &mut Ui, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(SWATCH_SIZE, Sense::hover());
    let mid = rect.center().y;
    ui.painter().line_segment(
        [egui::pos2(rect.left(), mid), egui::pos2(rect.right(), mid)],
        egui::Stroke::new(2.0, color),
    );
}

fn ramp_swatch(ui: &mut Ui, color_map: ColorMap) {
    let (rect, _) = ui.allocate_exact_size(SWATCH_SIZE, Sense::hover());
    let step = rect.width() / RAMP_STEPS as f32;
    for i in 0..RAMP_STEPS {
        let t = i as f64 / (RAMP_STEPS - 1) as f64;
        let left = rect.left() + step * i as f32;
        let slice = egui::Rect::from_min_max(
            egui::pos2(left, rect.top()),
            egui::pos2(left + step, rect.bottom()),
        );
        ui.painter().rect_filled(slice, 0.0, color_map.sample(t));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(format!("{} CSV rows printed", state.rows_printed));

        ui.separator();

        if ui.button("Reset view").clicked() {
            log::debug!("Camera reset");
            state.camera.reset();
        }

        ui.separator();

        ui.label(format!(
            "azim {:.0}°  elev {:.0}°",
            state.camera.azimuth_deg, state.camera.elevation_deg
        ));
    });
}
