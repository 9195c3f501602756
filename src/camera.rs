// ---------------------------------------------------------------------------
// Orbit camera with orthographic projection
// ---------------------------------------------------------------------------

pub const DEFAULT_AZIMUTH_DEG: f64 = -60.0;
pub const DEFAULT_ELEVATION_DEG: f64 = 30.0;

/// Degrees of rotation per dragged point.
const DRAG_SENSITIVITY: f64 = 0.4;

/// Viewing direction given as spherical angles around the scene centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            azimuth_deg: DEFAULT_AZIMUTH_DEG,
            elevation_deg: DEFAULT_ELEVATION_DEG,
        }
    }
}

impl Camera {
    fn angles(&self) -> ((f64, f64), (f64, f64)) {
        (
            self.azimuth_deg.to_radians().sin_cos(),
            self.elevation_deg.to_radians().sin_cos(),
        )
    }

    /// Screen coordinates of `p`; screen y points up.
    pub fn project(&self, [x, y, z]: [f64; 3]) -> [f64; 2] {
        let ((sa, ca), (se, ce)) = self.angles();
        // Right vector: (-sin a, cos a, 0)
        let sx = -x * sa + y * ca;
        // Up vector: (-cos a sin e, -sin a sin e, cos e)
        let sy = -x * ca * se - y * sa * se + z * ce;
        [sx, sy]
    }

    /// Distance along the viewing direction. Larger is further away.
    pub fn depth(&self, [x, y, z]: [f64; 3]) -> f64 {
        let ((sa, ca), (se, ce)) = self.angles();
        -(x * ce * ca + y * ce * sa + z * se)
    }

    /// Orbit by a drag of `(dx, dy)` screen points.
    pub fn rotate(&mut self, dx: f64, dy: f64) {
        self.azimuth_deg = wrap_degrees(self.azimuth_deg - dx * DRAG_SENSITIVITY);
        self.elevation_deg = (self.elevation_deg + dy * DRAG_SENSITIVITY).clamp(-90.0, 90.0);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Wrap an angle into `(-180, 180]`.
fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn vertical_axis_projects_straight_up() {
        let cam = Camera::default();
        let [sx, sy] = cam.project([0.0, 0.0, 1.0]);
        assert!(close(sx, 0.0));
        assert!(close(sy, 30f64.to_radians().cos()));
    }

    #[test]
    fn top_down_view_flattens_z() {
        let cam = Camera {
            azimuth_deg: 0.0,
            elevation_deg: 90.0,
        };
        let [sx, sy] = cam.project([0.0, 0.0, 5.0]);
        assert!(close(sx, 0.0));
        assert!(close(sy, 0.0));
        // Looking down, the top of the scene is nearest.
        assert!(cam.depth([0.0, 0.0, 1.0]) < cam.depth([0.0, 0.0, -1.0]));
    }

    #[test]
    fn projection_is_linear() {
        let cam = Camera {
            azimuth_deg: 23.0,
            elevation_deg: -11.0,
        };
        let a = cam.project([1.0, 2.0, 3.0]);
        let b = cam.project([2.0, 4.0, 6.0]);
        assert!(close(b[0], 2.0 * a[0]));
        assert!(close(b[1], 2.0 * a[1]));
    }

    #[test]
    fn elevation_is_clamped() {
        let mut cam = Camera::default();
        cam.rotate(0.0, 10_000.0);
        assert_eq!(cam.elevation_deg, 90.0);
        cam.rotate(0.0, -10_000.0);
        assert_eq!(cam.elevation_deg, -90.0);
    }

    #[test]
    fn azimuth_wraps() {
        assert_eq!(wrap_degrees(190.0), -170.0);
        assert_eq!(wrap_degrees(-180.0), 180.0);
        assert_eq!(wrap_degrees(540.0), 180.0);
        let mut cam = Camera::default();
        cam.rotate(1000.0, 0.0);
        assert!(cam.azimuth_deg > -180.0 && cam.azimuth_deg <= 180.0);
    }

    #[test]
    fn reset_restores_default_view() {
        let mut cam = Camera::default();
        cam.rotate(12.0, -7.0);
        assert_ne!(cam, Camera::default());
        cam.reset();
        assert_eq!(cam, Camera::default());
    }
}
