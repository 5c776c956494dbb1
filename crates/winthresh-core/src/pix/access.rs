//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels and
//! filling rectangular regions.

use super::{Pix, PixMut};
use crate::Region;
use crate::error::{Error, Result};

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset lies outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.inner.data[self.inner.index(x, y)]
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.inner.width {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.inner.width as usize,
            });
        }
        if y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.inner.height as usize,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u8) {
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
    }

    /// Set every pixel of `region` to `val`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the region extends past the image.
    pub fn fill_region(&mut self, region: &Region, val: u8) -> Result<()> {
        check_region(self.region(), region)?;
        for y in region.ys() {
            let row = self.row_data_mut(y);
            row[region.x as usize..region.right() as usize].fill(val);
        }
        Ok(())
    }

}

/// Ensure `region` lies inside `bounds`.
pub(crate) fn check_region(bounds: Region, region: &Region) -> Result<()> {
    if !bounds.contains_region(region) {
        return Err(Error::InvalidParameter(format!(
            "region {}x{} at ({}, {}) exceeds image {}x{}",
            region.w, region.h, region.x, region.y, bounds.w, bounds.h
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_pixel() {
        let mut pm = Pix::new(5, 4).unwrap().to_mut();
        pm.set_pixel(4, 3, 200).unwrap();
        assert_eq!(pm.get_pixel(4, 3), Some(200));
        assert_eq!(pm.get_pixel(5, 3), None);
        assert!(pm.set_pixel(5, 0, 1).is_err());
        assert!(pm.set_pixel(0, 4, 1).is_err());

        let pix: Pix = pm.into();
        assert_eq!(pix.get_pixel(4, 3), Some(200));
        assert_eq!(pix.get_pixel(0, 4), None);
    }

    #[test]
    fn test_fill_region() {
        let mut pm = Pix::new(6, 6).unwrap().to_mut();
        pm.fill_region(&Region::new(2, 1, 3, 2), 9).unwrap();
        let pix: Pix = pm.into();
        for y in 0..6 {
            for x in 0..6 {
                let inside = (2..5).contains(&x) && (1..3).contains(&y);
                assert_eq!(pix.get_pixel_unchecked(x, y), if inside { 9 } else { 0 });
            }
        }
    }

    #[test]
    fn test_fill_region_out_of_bounds() {
        let mut pm = Pix::new(4, 4).unwrap().to_mut();
        assert!(pm.fill_region(&Region::new(2, 2, 3, 1), 1).is_err());
    }

}
