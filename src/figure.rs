use crate::color::{ColorError, SeriesColor};
use crate::data::histogram::Histogram;
use crate::data::model::SampleSet;

// ---------------------------------------------------------------------------
// Histogram configuration
// ---------------------------------------------------------------------------

/// How a histogram series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistType {
    /// One continuous filled outline per series.
    StepFilled,
}

/// Fixed rendering parameters for the comparison chart.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramConfig {
    pub bins: usize,
    pub range: (f64, f64),
    pub hist_type: HistType,
    /// One colour per series, in argument order.
    pub colors: [&'static str; 2],
    pub alpha: f32,
    /// Counts are drawn on a linear axis; this is never set.
    pub log: bool,
    pub labels: [&'static str; 2],
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub title: &'static str,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bins: 100,
            range: (0.0, 500.0),
            hist_type: HistType::StepFilled,
            colors: ["#ed0dd9", "#448ee4"],
            alpha: 0.35,
            log: false,
            labels: ["pure", "mixed"],
            x_label: "Distance from 1000",
            y_label: "Games",
            title: "Pure only VS mixed strategy",
        }
    }
}

// ---------------------------------------------------------------------------
// Figure – everything a renderer needs, built once
// ---------------------------------------------------------------------------

/// One binned sample set with its style.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: SeriesColor,
    pub histogram: Histogram,
}

/// An immutable chart description handed to a [`crate::render::Renderer`].
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub range: (f64, f64),
    pub hist_type: HistType,
    pub log: bool,
    pub legend: bool,
    pub series: Vec<Series>,
}

impl Figure {
    /// Bin every sample set with `config` and attach labels and colours.
    ///
    /// Series are named after the sample set labels and coloured in order.
    pub fn histogram(config: &HistogramConfig, sets: &[SampleSet; 2]) -> Result<Self, ColorError> {
        let mut series = Vec::with_capacity(sets.len());

        for (set, hex) in sets.iter().zip(config.colors) {
            let histogram = Histogram::new(set.values(), config.bins, config.range);
            log::debug!(
                "{}: {} of {} samples binned, {} outside [{}, {}]",
                set.label(),
                histogram.total(),
                set.len(),
                histogram.excluded(),
                config.range.0,
                config.range.1
            );
            if histogram.excluded() > 0 {
                log::warn!(
                    "{} has {} samples outside the plotted range",
                    set.source().display(),
                    histogram.excluded()
                );
            }

            series.push(Series {
                name: set.label().to_string(),
                color: SeriesColor::from_hex(hex, config.alpha)?,
                histogram,
            });
        }

        Ok(Figure {
            title: config.title.to_string(),
            x_label: config.x_label.to_string(),
            y_label: config.y_label.to_string(),
            range: config.range,
            hist_type: config.hist_type,
            log: config.log,
            legend: true,
            series,
        })
    }

    /// Largest bin count over all series.
    pub fn max_count(&self) -> u64 {
        self.series
            .iter()
            .map(|s| s.histogram.max_count())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets() -> [SampleSet; 2] {
        [
            SampleSet::new("pure", "a.txt", vec![10.0, 20.0, 30.0]),
            SampleSet::new("mixed", "b.txt", vec![15.0, 25.0, 35.0, 600.0]),
        ]
    }

    #[test]
    fn default_config_matches_chart() {
        let cfg = HistogramConfig::default();
        assert_eq!(cfg.bins, 100);
        assert_eq!(cfg.range, (0.0, 500.0));
        assert_eq!(cfg.hist_type, HistType::StepFilled);
        assert!(!cfg.log);
        assert_eq!(cfg.labels, ["pure", "mixed"]);
    }

    #[test]
    fn figure_carries_labels_and_styles() {
        let fig = Figure::histogram(&HistogramConfig::default(), &sets()).unwrap();

        assert_eq!(fig.title, "Pure only VS mixed strategy");
        assert_eq!(fig.x_label, "Distance from 1000");
        assert_eq!(fig.y_label, "Games");
        assert!(fig.legend);
        assert!(!fig.log);

        let names: Vec<&str> = fig.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["pure", "mixed"]);
        assert_eq!(fig.series[0].color.rgb(), [0xed, 0x0d, 0xd9]);
        assert_eq!(fig.series[1].color.rgb(), [0x44, 0x8e, 0xe4]);
        assert_eq!(fig.series[1].color.alpha(), 0.35);
    }

    #[test]
    fn series_are_binned_independently() {
        let fig = Figure::histogram(&HistogramConfig::default(), &sets()).unwrap();

        assert_eq!(fig.series[0].histogram.total(), 3);
        assert_eq!(fig.series[1].histogram.total(), 3);
        assert_eq!(fig.series[1].histogram.excluded(), 1);
        assert_eq!(fig.max_count(), 1);
    }

    #[test]
    fn bad_colour_fails_construction() {
        let cfg = HistogramConfig {
            colors: ["#ed0dd9", "blue-ish"],
            ..HistogramConfig::default()
        };
        assert!(Figure::histogram(&cfg, &sets()).is_err());
    }
}
