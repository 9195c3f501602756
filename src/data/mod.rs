/// Data layer: CSV printing, sample generation, and core types.
///
/// Architecture:
/// ```text
///   data.csv              linspace / rand
///      │                        │
///      ▼                        ▼
///   ┌────────┐            ┌──────────┐
///   │ loader │ → stdout   │ samples  │  LineSamples, [ScatterSamples; 2]
///   └────────┘            └──────────┘
///                               │
///                               ▼
///                          crate::scene
/// ```

pub mod loader;
pub mod model;
pub mod samples;
