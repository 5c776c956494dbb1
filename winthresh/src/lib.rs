//! winthresh - Window-based adaptive binarization for Rust
//!
//! Splits a greyscale image into a grid of windows, picks a threshold per
//! window by minimizing the weighted within-class spread, optionally repairs
//! low-contrast windows and smooths the result, then binarizes the image
//! against the resulting threshold surface.
//!
//! # Overview
//!
//! - [`Pix`] / [`PixMut`]: greyscale intensity grids
//! - [`io`]: PGM and PNG reading and writing
//! - [`surface`]: threshold surface construction and binarization
//!
//! # Example
//!
//! ```
//! use winthresh::Pix;
//! use winthresh::surface::{SurfaceOptions, adaptive_threshold};
//!
//! // 4x4 image: dark top-left block on a bright field
//! let pix = Pix::from_fn(4, 4, |x, y| if x < 2 && y < 2 { 10 } else { 200 }).unwrap();
//! let (binary, surface) = adaptive_threshold(&pix, &SurfaceOptions::with_divisions(2)).unwrap();
//!
//! assert_eq!(surface.windows.len(), 4);
//! assert_eq!(binary.get_pixel(0, 0), Some(0));
//! assert_eq!(binary.get_pixel(3, 3), Some(255));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use winthresh_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use winthresh_io as io;
pub use winthresh_surface as surface;
