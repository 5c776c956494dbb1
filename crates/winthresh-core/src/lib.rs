//! winthresh Core - Basic data structures for adaptive binarization
//!
//! This crate provides the fundamental data structures used throughout
//! the winthresh workspace:
//!
//! - [`Pix`] / [`PixMut`] - 8-bit greyscale intensity grid (immutable / mutable)
//! - [`Region`] - Rectangular pixel extent
//! - [`Histogram`] - 256-bin intensity histogram

pub mod error;
pub mod histogram;
pub mod pix;
pub mod region;

pub use error::{Error, Result};
pub use histogram::{HISTOGRAM_BINS, Histogram};
pub use pix::{Pix, PixMut};
pub use region::Region;

/// Intensity written for "white" pixels.
pub const WHITE: u8 = 255;

/// Intensity written for "black" pixels.
pub const BLACK: u8 = 0;
