// ---------------------------------------------------------------------------
// Fixed-range equal-width histogram
// ---------------------------------------------------------------------------

/// Counts of samples per equal-width bin over a closed range `[lo, hi]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<u64>,
    excluded: usize,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning `range`.
    ///
    /// Every bin is half-open except the last, which also holds `hi`.
    /// Values outside the range and NaN are counted in [`Histogram::excluded`].
    pub fn new(values: &[f64], bins: usize, range: (f64, f64)) -> Self {
        let (lo, hi) = range;
        debug_assert!(bins > 0, "histogram needs at least one bin");
        debug_assert!(lo < hi, "histogram range must be increasing");

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + i as f64 * width).collect();
        let mut counts = vec![0u64; bins];
        let mut excluded = 0;

        for &v in values {
            // NaN fails both comparisons.
            if !(v >= lo && v <= hi) {
                excluded += 1;
                continue;
            }

            let mut idx = (((v - lo) / width) as usize).min(bins - 1);
            // Rounding can land one bin off the stored edges.
            if v < edges[idx] {
                idx -= 1;
            } else if idx + 1 < bins && v >= edges[idx + 1] {
                idx += 1;
            }
            counts[idx] += 1;
        }

        Histogram {
            edges,
            counts,
            excluded,
        }
    }

    /// Bin boundaries, one more than the number of bins.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// Number of samples that landed in some bin.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of samples outside the range (or NaN).
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `(left edge, right edge, count)` for each bin.
    pub fn iter_bins(&self) -> impl Iterator<Item = (f64, f64, u64)> + '_ {
        self.edges
            .windows(2)
            .zip(self.counts.iter())
            .map(|(e, &c)| (e[0], e[1], c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nonzero_bins(h: &Histogram) -> Vec<usize> {
        h.counts()
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn values_land_in_floor_of_width() {
        let a = Histogram::new(&[10.0, 20.0, 30.0], 100, (0.0, 500.0));
        let b = Histogram::new(&[15.0, 25.0, 35.0], 100, (0.0, 500.0));

        assert_eq!(a.width(), 5.0);
        assert_eq!(nonzero_bins(&a), vec![2, 4, 6]);
        assert_eq!(nonzero_bins(&b), vec![3, 5, 7]);
        assert_eq!(a.total(), 3);
        assert_eq!(b.total(), 3);
        assert_eq!(a.excluded(), 0);
    }

    #[test]
    fn upper_bound_goes_to_last_bin() {
        let h = Histogram::new(&[500.0], 100, (0.0, 500.0));
        assert_eq!(h.counts()[99], 1);
        assert_eq!(h.total(), 1);
    }

    #[test]
    fn out_of_range_and_nan_are_excluded() {
        let values = [500.0001, -0.5, f64::NAN, f64::INFINITY, 0.0];
        let h = Histogram::new(&values, 100, (0.0, 500.0));
        assert_eq!(h.total(), 1);
        assert_eq!(h.counts()[0], 1);
        assert_eq!(h.excluded(), 4);
    }

    #[test]
    fn edges_span_range() {
        let h = Histogram::new(&[], 100, (0.0, 500.0));
        assert_eq!(h.edges().len(), 101);
        assert_eq!(h.edges()[0], 0.0);
        assert_eq!(h.edges()[100], 500.0);
        assert_eq!(h.max_count(), 0);
    }

    #[test]
    fn bins_agree_with_stored_edges() {
        // 0.3 sits just below the stored edge 3 * 0.1, 0.1 * 3.0 equals it.
        let values = [0.3, 0.1 * 3.0, 0.7, 0.9999];
        for &v in &values {
            let h = Histogram::new(&[v], 10, (0.0, 1.0));
            let (left, right, _) = h.iter_bins().find(|&(_, _, c)| c == 1).unwrap();
            assert!(left <= v && v < right, "{v} placed in [{left}, {right})");
        }

        let h = Histogram::new(&values, 10, (0.0, 1.0));
        assert_eq!(h.counts()[2], 1);
        assert_eq!(h.counts()[3], 1);
    }
}
