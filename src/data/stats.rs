// ---------------------------------------------------------------------------
// Summary statistics over the filtered sales column
// ---------------------------------------------------------------------------

/// The three key metrics shown above the charts.
///
/// The mean is truncated toward zero to a whole unit for display; max and
/// min are reported as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub mean: i64,
    pub max: f64,
    pub min: f64,
}

/// Compute mean/max/min of a sales slice.
///
/// An empty slice reports `(0, 0, 0)` instead of failing or producing NaN.
/// The zeros are a display substitution for the degenerate case, not a
/// statistical result.
pub fn summarize(sales: &[f64]) -> SummaryStats {
    if sales.is_empty() {
        return SummaryStats {
            mean: 0,
            max: 0.0,
            min: 0.0,
        };
    }
    let sum: f64 = sales.iter().sum();
    let mean = (sum / sales.len() as f64).trunc() as i64;
    let max = sales.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = sales.iter().copied().fold(f64::INFINITY, f64::min);
    SummaryStats { mean, max, min }
}

// ---------------------------------------------------------------------------
// Histogram binning for the distribution chart
// ---------------------------------------------------------------------------

/// One equal-width histogram bin: `[lo, hi)` except the last bin, which is
/// closed at the top so the maximum value is counted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

impl HistogramBin {
    /// Bin midpoint, where the frequency bar is drawn.
    pub fn center(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }

    /// Bin width.
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }
}

/// Bin a sales slice into `bin_count` equal-width bins spanning
/// `[min, max]` of the input.
///
/// Empty input (or a zero bin count) yields no bins; the chart then renders
/// an empty frame. A constant series has zero spread, so the range is
/// widened by ±0.5 to keep the bins well-formed.
pub fn histogram(sales: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    if sales.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let mut min = sales.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = sales.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max - min <= 0.0 {
        min -= 0.5;
        max += 0.5;
    }
    let width = (max - min) / bin_count as f64;

    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            lo: min + i as f64 * width,
            hi: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for &v in sales {
        let i = (((v - min) / width) as usize).min(bin_count - 1);
        bins[i].count += 1;
    }
    bins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_empty_reports_zeros() {
        let stats = summarize(&[]);
        assert_eq!(stats, SummaryStats { mean: 0, max: 0.0, min: 0.0 });
    }

    #[test]
    fn summarize_filtered_scenario() {
        // Filtered view [(Jan, 100), (Feb, 200)].
        let stats = summarize(&[100.0, 200.0]);
        assert_eq!(stats.mean, 150);
        assert_eq!(stats.max, 200.0);
        assert_eq!(stats.min, 100.0);
    }

    #[test]
    fn summarize_mean_truncates_toward_zero() {
        let stats = summarize(&[100.0, 101.0]);
        assert_eq!(stats.mean, 100);
    }

    #[test]
    fn mean_sits_between_min_and_max() {
        let sales = [310.0, 95.0, 240.0, 180.0, 410.0];
        let stats = summarize(&sales);
        assert!(stats.min <= stats.mean as f64);
        assert!((stats.mean as f64) <= stats.max);
    }

    #[test]
    fn histogram_counts_every_value_once() {
        let sales = [100.0, 150.0, 200.0, 250.0, 300.0, 300.0];
        let bins = histogram(&sales, 5);
        assert_eq!(bins.len(), 5);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, sales.len());
    }

    #[test]
    fn histogram_maximum_lands_in_last_bin() {
        let bins = histogram(&[0.0, 10.0], 5);
        assert_eq!(bins[4].count, 1);
        assert_eq!(bins[0].count, 1);
    }

    #[test]
    fn histogram_empty_input_yields_no_bins() {
        assert!(histogram(&[], 5).is_empty());
    }

    #[test]
    fn histogram_constant_series_still_bins() {
        let bins = histogram(&[42.0, 42.0, 42.0], 5);
        assert_eq!(bins.len(), 5);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 3);
    }
}
