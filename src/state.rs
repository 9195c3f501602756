use crate::camera::Camera;
use crate::scene::{Bounds, Scene};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Layers to draw; fixed for the lifetime of the window.
    pub scene: Scene,

    /// Bounding box of `scene` (cached).
    pub bounds: Bounds,

    /// Current view direction.
    pub camera: Camera,

    /// Number of CSV rows printed before the window opened.
    pub rows_printed: usize,

    /// Whether the wireframe box around the data is drawn.
    pub show_box: bool,
}

impl AppState {
    pub fn new(scene: Scene, rows_printed: usize) -> Self {
        let bounds = scene.bounds();
        log::debug!(
            "Scene has {} points within {:?}..{:?}",
            scene.point_count(),
            bounds.min,
            bounds.max
        );
        Self {
            scene,
            bounds,
            camera: Camera::default(),
            rows_printed,
            show_box: true,
        }
    }

    /// Normalise and project a data point to plot coordinates.
    pub fn to_screen(&self, p: [f64; 3]) -> [f64; 2] {
        self.camera.project(self.bounds.normalize(p))
    }

    /// Depth of a data point in normalised scene space.
    pub fn depth_of(&self, p: [f64; 3]) -> f64 {
        self.camera.depth(self.bounds.normalize(p))
    }
}
