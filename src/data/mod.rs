/// Data layer: sample sets, loading, and binning.
///
/// Architecture:
/// ```text
///  path_1 / path_2  (whitespace separated numbers)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse text → SampleSet
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ SampleSet  │  label, source path, Vec<f64>
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ histogram  │  fixed range, equal-width bins → counts
///   └───────────┘
/// ```

pub mod histogram;
pub mod loader;
pub mod model;
