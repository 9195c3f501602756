use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::state::AppState;

const BOX_COLOR: Color32 = Color32::from_gray(140);
const AXIS_NAMES: [&str; 3] = ["x", "y", "z"];
const MARKER_RADIUS: f32 = 4.0;
/// Half-extent of the visible area; the projected unit cube never exceeds 0.87.
const VIEW_EXTENT: f64 = 0.95;

/// One projected scatter point.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Marker {
    depth: f64,
    pos: [f64; 2],
    color: Color32,
}

/// Every scatter point of every layer, far points first (painter's algorithm).
fn depth_sorted_markers(view: &AppState) -> Vec<Marker> {
    let mut markers: Vec<Marker> = view
        .scene
        .scatters
        .iter()
        .flat_map(|layer| {
            layer
                .points
                .points()
                .zip(&layer.colors)
                .map(move |(p, &color)| Marker {
                    depth: view.depth_of(p),
                    pos: view.to_screen(p),
                    color,
                })
        })
        .collect();
    markers.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    markers
}

// ---------------------------------------------------------------------------
// 3D scene (central panel)
// ---------------------------------------------------------------------------

/// Render the projected scene. Dragging inside the plot orbits the camera.
pub fn scene_plot(ui: &mut Ui, state: &mut AppState) {
    let view: &AppState = state;

    let response = Plot::new("scene_plot")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .include_x(-VIEW_EXTENT)
        .include_x(VIEW_EXTENT)
        .include_y(-VIEW_EXTENT)
        .include_y(VIEW_EXTENT)
        .show(ui, |plot_ui| {
            if view.show_box && !view.bounds.is_empty() {
                let corners = view.bounds.corners();
                for i in 0..corners.len() {
                    for bit in [1, 2, 4] {
                        if i & bit != 0 {
                            continue;
                        }
                        let edge: PlotPoints = [corners[i], corners[i | bit]]
                            .into_iter()
                            .map(|p| view.to_screen(p))
                            .collect();
                        plot_ui.line(Line::new(edge).color(BOX_COLOR).width(0.5));
                    }
                }

                // Label each axis along the edges leaving the min corner.
                for (axis, bit) in [1usize, 2, 4].into_iter().enumerate() {
                    let (a, b) = (corners[0], corners[bit]);
                    let mid = [
                        (a[0] + b[0]) / 2.0,
                        (a[1] + b[1]) / 2.0,
                        (a[2] + b[2]) / 2.0,
                    ];
                    let [sx, sy] = view.to_screen(mid);
                    let label = format!(
                        "{} [{:.2}, {:.2}]",
                        AXIS_NAMES[axis], view.bounds.min[axis], view.bounds.max[axis]
                    );
                    plot_ui.text(Text::new(PlotPoint::new(sx, sy), label).color(BOX_COLOR));
                }
            }

            let line = &view.scene.line;
            if !line.points.is_empty() {
                let points: PlotPoints =
                    line.points.points().map(|p| view.to_screen(p)).collect();
                plot_ui.line(Line::new(points).name(&line.name).color(line.color).width(1.5));
            }

            // Markers stay out of the legend; the side panel shows each
            // layer's colour ramp.
            for marker in depth_sorted_markers(view) {
                plot_ui.points(
                    Points::new(vec![marker.pos])
                        .color(marker.color)
                        .radius(MARKER_RADIUS)
                        .filled(true),
                );
            }
        })
        .response;

    if response.dragged() {
        let delta = response.drag_delta();
        state.camera.rotate(delta.x as f64, delta.y as f64);
        ui.ctx().request_repaint();
    }
}
