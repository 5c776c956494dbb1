//! Per-window threshold search
//!
//! For each candidate threshold `t`, intensities `<= t` form the black class
//! and intensities `> t` the white class. The cost of `t` is the sum of the
//! two class standard deviations weighted by the fraction of pixels in each
//! class. The candidate with the lowest cost wins.
//!
//! This is a local variant of Otsu's method: instead of maximizing
//! between-class variance it minimizes the weighted within-class spread,
//! and the minimum itself is kept as a measure of how much contrast the
//! window contains.

use std::ops::Range;
use winthresh_core::{HISTOGRAM_BINS, Histogram};

/// Threshold assigned to windows whose best split has zero spread
pub const FLAT_WINDOW_THRESHOLD: u8 = 128;

/// Initial "best cost" for the search, larger than any reachable cost
const COST_CEILING: f64 = 1e9;

/// Result of the threshold search on one histogram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowThreshold {
    /// Chosen threshold
    pub threshold: u8,
    /// Weighted within-class standard deviation at the chosen threshold
    pub spread: f64,
}

/// Find the threshold minimizing weighted within-class spread.
///
/// Candidates are scanned from 0 to 255 and only a strictly lower cost
/// replaces the current best, so the lowest threshold wins ties. If the
/// minimum cost is exactly zero (a single intensity, or two perfectly
/// separated single intensities) the threshold is forced to
/// [`FLAT_WINDOW_THRESHOLD`].
///
/// # Arguments
/// * `hist` - Histogram of the window
/// * `total` - Pixel count used to weight the classes, normally the window
///   area. A total of 0 gives every class a weight of 0.
pub fn solve(hist: &Histogram, total: u64) -> WindowThreshold {
    let mut best_cost = COST_CEILING;
    let mut best_threshold = 0u8;

    for t in 0..HISTOGRAM_BINS {
        let black = 0..t + 1;
        let white = t + 1..HISTOGRAM_BINS;

        let cost = class_fraction(hist, black.clone(), total) * class_std_dev(hist, black)
            + class_fraction(hist, white.clone(), total) * class_std_dev(hist, white);

        if cost < best_cost {
            best_cost = cost;
            best_threshold = t as u8;
        }
    }

    if best_cost == 0.0 {
        best_threshold = FLAT_WINDOW_THRESHOLD;
    }

    WindowThreshold {
        threshold: best_threshold,
        spread: best_cost,
    }
}

/// Number of pixels with intensity in `range`
pub fn class_count(hist: &Histogram, range: Range<usize>) -> u64 {
    hist.count_in(range)
}

/// Share of `total` falling in `range`, 0 when `total` is 0
fn class_fraction(hist: &Histogram, range: Range<usize>, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    class_count(hist, range) as f64 / total as f64
}

/// Mean intensity of the pixels in `range`, 0 if the range is empty
pub fn class_mean(hist: &Histogram, range: Range<usize>) -> f64 {
    let bins = hist.bins();
    let end = range.end.min(HISTOGRAM_BINS);
    let start = range.start.min(end);

    let mut sum = 0.0;
    let mut count = 0.0;
    for (i, &n) in bins[start..end].iter().enumerate() {
        sum += (start + i) as f64 * f64::from(n);
        count += f64::from(n);
    }

    if count > 0.0 { sum / count } else { 0.0 }
}

/// Population standard deviation of the intensities in `range`
///
/// Returns 0 for an empty range or a range holding a single intensity.
pub fn class_std_dev(hist: &Histogram, range: Range<usize>) -> f64 {
    let bins = hist.bins();
    let end = range.end.min(HISTOGRAM_BINS);
    let start = range.start.min(end);
    let mean = class_mean(hist, start..end);

    let mut squared = 0.0;
    let mut count = 0u64;
    for (i, &n) in bins[start..end].iter().enumerate() {
        if n == 0 {
            continue;
        }
        let diff = (start + i) as f64 - mean;
        squared += f64::from(n) * diff * diff;
        count += u64::from(n);
    }

    if count > 0 {
        (squared / count as f64).sqrt()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hist_of(values: &[(u8, u32)]) -> Histogram {
        let mut bins = [0u32; HISTOGRAM_BINS];
        for &(v, n) in values {
            bins[v as usize] += n;
        }
        Histogram::from_bins(bins)
    }

    #[test]
    fn test_mean_and_std_dev() {
        let hist = hist_of(&[(2, 1), (4, 1), (6, 2)]);
        assert!((class_mean(&hist, 0..256) - 4.5).abs() < 1e-12);
        // deviations: -2.5, -0.5, 1.5, 1.5 -> variance (6.25+0.25+2.25+2.25)/4
        let expected = (11.0f64 / 4.0).sqrt();
        assert!((class_std_dev(&hist, 0..256) - expected).abs() < 1e-12);
        assert_eq!(class_count(&hist, 3..7), 3);
    }

    #[test]
    fn test_empty_and_single_value_ranges() {
        let hist = hist_of(&[(10, 5), (200, 3)]);
        assert_eq!(class_mean(&hist, 11..200), 0.0);
        assert_eq!(class_std_dev(&hist, 11..200), 0.0);
        assert_eq!(class_std_dev(&hist, 0..11), 0.0);
        assert_eq!(class_std_dev(&hist, 300..400), 0.0);
    }

    #[test]
    fn test_constant_window_forces_128() {
        let hist = hist_of(&[(37, 16)]);
        let result = solve(&hist, 16);
        assert_eq!(result.threshold, FLAT_WINDOW_THRESHOLD);
        assert_eq!(result.spread, 0.0);
    }

    #[test]
    fn test_two_spikes_have_zero_spread() {
        let hist = hist_of(&[(10, 4), (200, 12)]);
        let result = solve(&hist, 16);
        assert_eq!(result.spread, 0.0);
        assert_eq!(result.threshold, FLAT_WINDOW_THRESHOLD);
    }

    #[test]
    fn test_bimodal_threshold_separates_clusters() {
        let hist = hist_of(&[(20, 3), (22, 4), (24, 3), (200, 5), (204, 5)]);
        let result = solve(&hist, 20);
        // first minimum sits at the top of the dark cluster
        assert_eq!(result.threshold, 24);
        assert!(result.spread > 0.0);

        // dark class sd = sqrt(2.4), bright class sd = 2, equal weights
        let expected = 0.5 * 2.4f64.sqrt() + 0.5 * 2.0;
        assert!((result.spread - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total() {
        let hist = hist_of(&[(50, 2), (60, 2)]);
        let result = solve(&hist, 0);
        assert_eq!(result.spread, 0.0);
        assert_eq!(result.threshold, FLAT_WINDOW_THRESHOLD);
    }
}
