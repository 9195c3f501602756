use eframe::egui::Color32;

use crate::color::ColorMap;
use crate::data::model::{LineSamples, ScatterSamples, Series3};

pub const LINE_COLOR: Color32 = Color32::from_rgb(0x00, 0x00, 0xff);

// ---------------------------------------------------------------------------
// Layers
// ---------------------------------------------------------------------------

/// A connected polyline through its points.
#[derive(Debug, Clone)]
pub struct LineLayer {
    pub name: String,
    pub points: Series3,
    pub color: Color32,
}

/// Unconnected points, each coloured through `color_map`.
#[derive(Debug, Clone)]
pub struct ScatterLayer {
    pub name: String,
    pub points: Series3,
    pub color_map: ColorMap,
    /// One colour per point, already mapped.
    pub colors: Vec<Color32>,
}

impl ScatterLayer {
    pub fn new(name: &str, samples: ScatterSamples, color_map: ColorMap) -> Self {
        let colors = color_map.colors_for(&samples.values);
        Self {
            name: name.to_string(),
            points: samples.points,
            color_map,
            colors,
        }
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: [f64::INFINITY; 3],
            max: [f64::NEG_INFINITY; 3],
        }
    }
}

impl Bounds {
    pub fn include(&mut self, p: [f64; 3]) {
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(p[axis]);
            self.max[axis] = self.max[axis].max(p[axis]);
        }
    }

    pub fn is_empty(&self) -> bool {
        (0..3).any(|axis| self.min[axis] > self.max[axis])
    }

    /// Map `p` into the unit cube centred on the origin. Each axis is scaled
    /// on its own; a flat axis collapses to 0.
    pub fn normalize(&self, p: [f64; 3]) -> [f64; 3] {
        let mut out = [0.0; 3];
        for axis in 0..3 {
            let span = self.max[axis] - self.min[axis];
            if span.abs() >= f64::EPSILON {
                out[axis] = (p[axis] - self.min[axis]) / span - 0.5;
            }
        }
        out
    }

    /// The eight corners, indexed by bit pattern (bit 0 = x, 1 = y, 2 = z).
    pub fn corners(&self) -> [[f64; 3]; 8] {
        std::array::from_fn(|i| {
            [
                if i & 1 == 0 { self.min[0] } else { self.max[0] },
                if i & 2 == 0 { self.min[1] } else { self.max[1] },
                if i & 4 == 0 { self.min[2] } else { self.max[2] },
            ]
        })
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Everything drawn in the 3D axes.
#[derive(Debug, Clone)]
pub struct Scene {
    pub line: LineLayer,
    pub scatters: Vec<ScatterLayer>,
}

impl Scene {
    /// The line in blue, the uniform cloud in Blues, the helix in viridis.
    pub fn new(line: LineSamples, [cloud, helix]: [ScatterSamples; 2]) -> Self {
        Self {
            line: LineLayer {
                name: "sin(z)".to_string(),
                points: line.points,
                color: LINE_COLOR,
            },
            scatters: vec![
                ScatterLayer::new("uniform", cloud, ColorMap::Blues),
                ScatterLayer::new("sin/cos + noise", helix, ColorMap::Viridis),
            ],
        }
    }

    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::default();
        for p in self.line.points.points() {
            bounds.include(p);
        }
        for layer in &self.scatters {
            for p in layer.points.points() {
                bounds.include(p);
            }
        }
        bounds
    }

    /// Total number of points across all layers.
    pub fn point_count(&self) -> usize {
        self.line.points.len() + self.scatters.iter().map(|s| s.points.len()).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::samples::{build_line_samples, build_scatter_samples_with};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scene() -> Scene {
        Scene::new(
            build_line_samples(),
            build_scatter_samples_with(&mut StdRng::seed_from_u64(3)),
        )
    }

    #[test]
    fn builds_one_line_and_two_scatter_layers() {
        let scene = scene();
        assert_eq!(scene.line.color, LINE_COLOR);
        assert_eq!(scene.scatters.len(), 2);
        assert_eq!(scene.scatters[0].color_map, ColorMap::Blues);
        assert_eq!(scene.scatters[1].color_map, ColorMap::Viridis);
        assert_eq!(scene.point_count(), 30 + 10 + 10);
        for layer in &scene.scatters {
            assert_eq!(layer.colors.len(), layer.points.len());
        }
    }

    #[test]
    fn highest_z_gets_darkest_blue() {
        let scene = scene();
        let layer = &scene.scatters[0];
        let top = layer
            .points
            .z
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(layer.colors[top], ColorMap::Blues.sample(1.0));
    }

    #[test]
    fn bounds_cover_line_range() {
        let b = scene().bounds();
        assert!(!b.is_empty());
        assert_eq!(b.min[0].min(0.0), b.min[0]);
        assert_eq!(b.max[2], 10.0);
        assert!(b.max[1] <= 1.5 && b.min[1] >= -1.5);
    }

    #[test]
    fn normalize_maps_into_unit_cube() {
        let b = scene().bounds();
        for corner in b.corners() {
            for v in b.normalize(corner) {
                assert!((v.abs() - 0.5).abs() < 1e-12);
            }
        }
        let scene = scene();
        for p in scene.line.points.points() {
            assert!(b.normalize(p).iter().all(|v| v.abs() <= 0.5 + 1e-12));
        }
    }

    #[test]
    fn flat_axis_collapses_to_zero() {
        let mut b = Bounds::default();
        assert!(b.is_empty());
        b.include([0.0, 1.0, 2.0]);
        b.include([4.0, 1.0, 6.0]);
        assert_eq!(b.normalize([2.0, 1.0, 6.0]), [0.0, 0.0, 0.5]);
    }
}
