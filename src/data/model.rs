use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// SampleSet – one loaded input file
// ---------------------------------------------------------------------------

/// An ordered, immutable sequence of samples read from one text file.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    label: String,
    source: PathBuf,
    values: Vec<f64>,
}

impl SampleSet {
    pub fn new(label: impl Into<String>, source: impl Into<PathBuf>, values: Vec<f64>) -> Self {
        SampleSet {
            label: label.into(),
            source: source.into(),
            values,
        }
    }

    /// Legend label, e.g. `pure` or `mixed`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// File the samples were read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
