//! Histogram generation for Pix images

use super::Pix;
use super::access::check_region;
use crate::error::Result;
use crate::{Histogram, Region};

impl Pix {
    /// Get the intensity histogram of the whole image.
    ///
    /// # Example
    ///
    /// ```
    /// use winthresh_core::Pix;
    ///
    /// let pix = Pix::filled(10, 10, 42).unwrap();
    /// let hist = pix.gray_histogram();
    /// assert_eq!(hist[42], 100);
    /// ```
    pub fn gray_histogram(&self) -> Histogram {
        let mut histogram = Histogram::new();
        for &val in self.data() {
            histogram.add(val);
        }
        histogram
    }

    /// Get the intensity histogram of a rectangular region.
    ///
    /// Counts the occurrences of each intensity in
    /// `[region.x, region.right()) × [region.y, region.bottom())`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter)
    /// if the region extends past the image.
    pub fn gray_histogram_in_region(&self, region: &Region) -> Result<Histogram> {
        check_region(self.region(), region)?;

        let mut histogram = Histogram::new();
        for y in region.ys() {
            let line = self.row_data(y);
            for &val in &line[region.x as usize..region.right() as usize] {
                histogram.add(val);
            }
        }
        Ok(histogram)
    }
}
