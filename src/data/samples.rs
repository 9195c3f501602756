use rand::Rng;
use rand_distr::StandardNormal;

use super::model::{LineSamples, ScatterSamples, Series3};

/// Number of samples along the line.
pub const LINE_SAMPLES: usize = 30;
/// Number of points in each scatter layer.
pub const SCATTER_POINTS: usize = 10;

const LINE_START: f64 = 0.0;
const LINE_STOP: f64 = 10.0;
const NOISE_SCALE: f64 = 0.1;

/// `n` evenly spaced values from `start` to `stop`, both ends included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

// ---------------------------------------------------------------------------
// Line
// ---------------------------------------------------------------------------

/// A sine curve climbing along x and z.
pub fn build_line_samples() -> LineSamples {
    let z = linspace(LINE_START, LINE_STOP, LINE_SAMPLES);
    let x = linspace(LINE_START, LINE_STOP, LINE_SAMPLES);
    let y = z.iter().map(|v| v.sin()).collect();
    LineSamples {
        points: Series3 { x, y, z },
    }
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

/// Two fresh scatter layers from the thread-local RNG; every call differs.
pub fn build_scatter_samples() -> [ScatterSamples; 2] {
    build_scatter_samples_with(&mut rand::thread_rng())
}

/// Build both scatter layers from `rng`:
/// * a uniform cloud in the unit cube,
/// * points scattered around `(sin z, cos z, z)`.
///
/// Both layers are coloured by their z coordinate.
pub fn build_scatter_samples_with<R: Rng>(rng: &mut R) -> [ScatterSamples; 2] {
    [uniform_cloud(rng), noisy_helix(rng)]
}

fn uniform<R: Rng>(rng: &mut R, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen::<f64>()).collect()
}

fn uniform_cloud<R: Rng>(rng: &mut R) -> ScatterSamples {
    let z = uniform(rng, SCATTER_POINTS);
    let x = uniform(rng, SCATTER_POINTS);
    let y = uniform(rng, SCATTER_POINTS);
    ScatterSamples {
        values: z.clone(),
        points: Series3 { x, y, z },
    }
}

fn noisy_helix<R: Rng>(rng: &mut R) -> ScatterSamples {
    let z = uniform(rng, SCATTER_POINTS);
    let x = z
        .iter()
        .map(|v| v.sin() + NOISE_SCALE * rng.sample::<f64, _>(StandardNormal))
        .collect();
    let y = z
        .iter()
        .map(|v| v.cos() + NOISE_SCALE * rng.sample::<f64, _>(StandardNormal))
        .collect();
    ScatterSamples {
        values: z.clone(),
        points: Series3 { x, y, z },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn line_has_thirty_samples() {
        let line = build_line_samples();
        assert_eq!(line.points.x.len(), LINE_SAMPLES);
        assert_eq!(line.points.y.len(), LINE_SAMPLES);
        assert_eq!(line.points.z.len(), LINE_SAMPLES);
    }

    #[test]
    fn line_y_is_sine_of_x() {
        let line = build_line_samples();
        for (x, y) in line.points.x.iter().zip(&line.points.y) {
            assert_eq!(*y, x.sin());
        }
        assert_eq!(line.points.x.first(), Some(&0.0));
        assert_eq!(line.points.x.last(), Some(&10.0));
    }

    #[test]
    fn line_is_deterministic() {
        assert_eq!(build_line_samples().points, build_line_samples().points);
    }

    #[test]
    fn scatter_sets_have_ten_points_per_axis() {
        for set in build_scatter_samples() {
            assert_eq!(set.points.x.len(), SCATTER_POINTS);
            assert_eq!(set.points.y.len(), SCATTER_POINTS);
            assert_eq!(set.points.z.len(), SCATTER_POINTS);
            assert_eq!(set.values, set.points.z);
        }
    }

    #[test]
    fn uniform_cloud_stays_in_unit_cube() {
        let [cloud, _] = build_scatter_samples_with(&mut StdRng::seed_from_u64(7));
        assert!(cloud.points.points().flatten().all(|v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn helix_tracks_sine_and_cosine() {
        let [_, helix] = build_scatter_samples_with(&mut StdRng::seed_from_u64(7));
        for [x, y, z] in helix.points.points() {
            // 0.1 * N(0, 1) stays within 0.6 with overwhelming probability
            assert!((x - z.sin()).abs() < 0.6);
            assert!((y - z.cos()).abs() < 0.6);
        }
    }

    #[test]
    fn seeded_builds_repeat() {
        let a = build_scatter_samples_with(&mut StdRng::seed_from_u64(42));
        let b = build_scatter_samples_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a[0].points, b[0].points);
        assert_eq!(a[1].points, b[1].points);
    }

    #[test]
    fn unseeded_builds_differ() {
        let a = build_scatter_samples();
        let b = build_scatter_samples();
        assert_ne!(a[0].points, b[0].points);
    }

    #[test]
    fn linspace_edge_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    proptest! {
        #[test]
        fn linspace_hits_both_ends(start in -1e3f64..1e3, stop in -1e3f64..1e3, n in 2usize..200) {
            let v = linspace(start, stop, n);
            prop_assert_eq!(v.len(), n);
            prop_assert_eq!(v[0], start);
            prop_assert_eq!(v[n - 1], stop);
        }

        #[test]
        fn linspace_steps_evenly(start in -1e3f64..1e3, stop in -1e3f64..1e3, n in 3usize..200) {
            let v = linspace(start, stop, n);
            let step = (stop - start) / (n - 1) as f64;
            for w in v.windows(2) {
                prop_assert!(((w[1] - w[0]) - step).abs() < 1e-9);
            }
        }
    }
}
