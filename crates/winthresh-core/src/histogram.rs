//! Intensity histograms
//!
//! A [`Histogram`] is a 256-bin frequency table of 8-bit intensities.
//! It is built from a region of a [`Pix`](crate::Pix) with
//! [`Pix::gray_histogram_in_region`](crate::Pix::gray_histogram_in_region)
//! and consumed by the per-window threshold search.

use std::ops::{Index, Range};

/// Number of bins in an 8-bit intensity histogram
pub const HISTOGRAM_BINS: usize = 256;

/// 256-bin intensity histogram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: [u32; HISTOGRAM_BINS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    /// Create an empty histogram (all counts zero).
    pub fn new() -> Self {
        Self {
            bins: [0; HISTOGRAM_BINS],
        }
    }

    /// Create a histogram from explicit bin counts.
    pub fn from_bins(bins: [u32; HISTOGRAM_BINS]) -> Self {
        Self { bins }
    }

    /// Record one occurrence of `value`.
    #[inline]
    pub fn add(&mut self, value: u8) {
        self.bins[value as usize] += 1;
    }

    /// Get all bin counts.
    #[inline]
    pub fn bins(&self) -> &[u32; HISTOGRAM_BINS] {
        &self.bins
    }

    /// Total number of samples in the histogram.
    pub fn total(&self) -> u64 {
        self.count_in(0..HISTOGRAM_BINS)
    }

    /// Number of samples whose intensity lies in `range`.
    ///
    /// The range is clipped to `0..256`; an empty range counts zero.
    pub fn count_in(&self, range: Range<usize>) -> u64 {
        let end = range.end.min(HISTOGRAM_BINS);
        let start = range.start.min(end);
        self.bins[start..end].iter().map(|&c| u64::from(c)).sum()
    }

    /// Number of distinct intensities with a non-zero count.
    pub fn occupied_bins(&self) -> usize {
        self.bins.iter().filter(|&&c| c > 0).count()
    }
}

impl Index<usize> for Histogram {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.bins[index]
    }
}
