use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Continuous colour maps
// ---------------------------------------------------------------------------

const BLUES: [[u8; 3]; 9] = [
    [0xf7, 0xfb, 0xff],
    [0xde, 0xeb, 0xf7],
    [0xc6, 0xdb, 0xef],
    [0x9e, 0xca, 0xe1],
    [0x6b, 0xae, 0xd6],
    [0x42, 0x92, 0xc6],
    [0x21, 0x71, 0xb5],
    [0x08, 0x51, 0x9c],
    [0x08, 0x30, 0x6b],
];

const VIRIDIS: [[u8; 3]; 9] = [
    [0x44, 0x01, 0x54],
    [0x47, 0x2d, 0x7b],
    [0x3b, 0x52, 0x8b],
    [0x2c, 0x72, 0x8e],
    [0x21, 0x91, 0x8c],
    [0x28, 0xae, 0x80],
    [0x5e, 0xc9, 0x62],
    [0xad, 0xdc, 0x30],
    [0xfd, 0xe7, 0x25],
];

/// Maps a scalar in `[0, 1]` to a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMap {
    /// White to dark blue.
    Blues,
    /// Purple through green to yellow.
    Viridis,
}

impl ColorMap {
    pub fn name(self) -> &'static str {
        match self {
            ColorMap::Blues => "Blues",
            ColorMap::Viridis => "viridis",
        }
    }

    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            ColorMap::Blues => &BLUES,
            ColorMap::Viridis => &VIRIDIS,
        }
    }

    /// Colour at `t`, clamped to `[0, 1]`. Neighbouring stops are mixed in
    /// linear RGB.
    pub fn sample(self, t: f64) -> Color32 {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let pos = t as f32 * (stops.len() - 1) as f32;
        let lo = (pos.floor() as usize).min(stops.len() - 2);
        let frac = pos - lo as f32;

        let a = to_linear(stops[lo]);
        let b = to_linear(stops[lo + 1]);
        let rgb: Srgb<u8> = Srgb::from_linear(a.mix(b, frac));
        Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
    }

    /// Colour each value after min-max normalisation.
    pub fn colors_for(self, values: &[f64]) -> Vec<Color32> {
        normalize(values)
            .into_iter()
            .map(|t| self.sample(t))
            .collect()
    }
}

fn to_linear([r, g, b]: [u8; 3]) -> LinSrgb {
    Srgb::new(r, g, b).into_linear()
}

/// Min-max scale `values` onto `[0, 1]`. A constant slice maps to `0.5`.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range.abs() < f64::EPSILON {
        vec![0.5; values.len()]
    } else {
        values.iter().map(|&v| (v - min) / range).collect()
    }
}
