//! winthresh-surface - Adaptive threshold surfaces
//!
//! Computes a spatially varying binarization threshold for a greyscale
//! image. The image is divided into an `N x N` grid of windows and each
//! window gets the threshold that minimizes its weighted within-class
//! spread. The resulting per-pixel threshold surface can then be:
//!
//! - **Validated** ([`validity`]): low-contrast windows are marked invalid
//!   and repaired from their valid neighbors
//! - **Smoothed** ([`smooth`](mod@smooth)): bilinear interpolation between window centers
//!
//! and finally applied to the image ([`binarize`](mod@binarize)).
//!
//! # Example
//!
//! ```ignore
//! use winthresh_surface::{SurfaceOptions, adaptive_threshold};
//!
//! let options = SurfaceOptions {
//!     enable_smoothing: true,
//!     ..SurfaceOptions::with_divisions(8)
//! };
//! let (binary, surface) = adaptive_threshold(&pix, &options)?;
//! ```

pub mod binarize;
mod error;
pub mod options;
pub mod smooth;
pub mod solver;
pub mod surface;
pub mod validity;
pub mod window;

pub use binarize::{adaptive_threshold, binarize, binarize_region};
pub use error::{SurfaceError, SurfaceResult};
pub use options::{DEFAULT_DIVISIONS, DEFAULT_TOLERANCE, SurfaceOptions};
pub use smooth::smooth;
pub use solver::{
    FLAT_WINDOW_THRESHOLD, WindowThreshold, class_count, class_mean, class_std_dev, solve,
};
pub use surface::{ThresholdSurface, build_surface};
pub use validity::{CorrectionStats, classify, correct};
pub use window::{Window, WindowGrid};
