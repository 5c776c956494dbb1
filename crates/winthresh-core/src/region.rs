//! Region - Rectangular pixel extents
//!
//! A `Region` is the half-open rectangle `[x, x + w) × [y, y + h)` in pixel
//! coordinates. Windows of the threshold grid, histogram areas and fill
//! targets are all expressed as regions.

use std::ops::Range;

/// A rectangular pixel region
///
/// This is a small `Copy` type; pass it by value or reference freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Region {
    /// Create a new region
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// Column range covered by the region
    #[inline]
    pub fn xs(&self) -> Range<u32> {
        self.x..self.right()
    }

    /// Row range covered by the region
    #[inline]
    pub fn ys(&self) -> Range<u32> {
        self.y..self.bottom()
    }

    /// Get the area in pixels
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.w) * u64::from(self.h)
    }

    /// Check if the region is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check if a point is inside the region
    #[inline]
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this region contains another region
    pub fn contains_region(&self, other: &Region) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}
