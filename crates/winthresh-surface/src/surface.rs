//! Threshold surface construction
//!
//! The surface is an image of the input's size whose covered pixels hold
//! the threshold of the window they belong to. It starts as a copy of the
//! input, so pixels in the uncovered edge strip keep their intensity.
//!
//! # Example
//!
//! ```ignore
//! use winthresh_surface::{SurfaceOptions, build_surface};
//!
//! let options = SurfaceOptions {
//!     enable_validation: true,
//!     tolerance: 4.0,
//!     ..SurfaceOptions::with_divisions(16)
//! };
//! let surface = build_surface(&pix, &options)?;
//! ```

use crate::SurfaceResult;
use crate::options::SurfaceOptions;
use crate::smooth::smooth;
use crate::solver::solve;
use crate::validity::{CorrectionStats, classify, correct};
use crate::window::WindowGrid;
use log::debug;
use winthresh_core::Pix;

/// A computed threshold surface together with the data it was built from
#[derive(Debug, Clone)]
pub struct ThresholdSurface {
    /// Per-pixel thresholds, same size as the input image
    pub surface: Pix,
    /// The window grid after correction
    pub windows: WindowGrid,
    /// Validity visualization, present when validation ran
    pub validity: Option<Pix>,
    /// Correction summary, present when validation ran
    pub correction: Option<CorrectionStats>,
}

/// Build the threshold surface of a greyscale image.
///
/// Windows are solved in row-major order; each window's threshold is
/// broadcast over its extent. Validation and correction run next when
/// enabled, then smoothing.
///
/// # Arguments
/// * `pix` - Input greyscale image
/// * `options` - Grid size, tolerance and stage switches
///
/// # Errors
/// - [`SurfaceError::InvalidParameters`](crate::SurfaceError::InvalidParameters)
///   for a negative or non-finite tolerance
/// - [`SurfaceError::InvalidDimensions`](crate::SurfaceError::InvalidDimensions)
///   if the grid leaves windows without pixels
pub fn build_surface(pix: &Pix, options: &SurfaceOptions) -> SurfaceResult<ThresholdSurface> {
    options.validate()?;
    let mut grid = WindowGrid::new(pix.width(), pix.height(), options.divisions)?;
    let mut surface = pix.to_mut();

    for window in grid.iter_mut() {
        let hist = pix.gray_histogram_in_region(&window.region)?;
        let solved = solve(&hist, window.region.area());
        window.threshold = solved.threshold;
        window.spread = solved.spread;
        debug!(
            "window ({:02}, {:02}) spread {:.3} threshold {}",
            window.gx, window.gy, window.spread, window.threshold
        );
        surface.fill_region(&window.region, window.threshold)?;
    }

    let (validity, correction) = if options.enable_validation {
        let validity = classify(&mut grid, options.tolerance, pix)?;
        let stats = correct(&mut grid, &mut surface)?;
        (Some(validity), Some(stats))
    } else {
        (None, None)
    };

    if options.enable_smoothing {
        smooth(&grid, &mut surface)?;
    }

    Ok(ThresholdSurface {
        surface: surface.into(),
        windows: grid,
        validity,
        correction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SurfaceError;

    /// 8x8 image: left half dark text-like noise, right half flat
    fn split_image() -> Pix {
        Pix::from_fn(8, 8, |x, y| {
            if x < 4 {
                if (x + y) % 2 == 0 { 30 } else { 220 }
            } else {
                180
            }
        })
        .unwrap()
    }

    #[test]
    fn test_broadcast_thresholds() {
        let pix = split_image();
        let result = build_surface(&pix, &SurfaceOptions::with_divisions(2)).unwrap();

        let left = &result.windows[(0, 0)];
        let right = &result.windows[(1, 0)];
        // two spikes split cleanly, so the cost is 0 and the threshold is forced
        assert_eq!(left.spread, 0.0);
        assert_eq!(left.threshold, 128);
        assert_eq!(right.spread, 0.0);
        assert_eq!(right.threshold, 128);
        assert!(result.surface.data().iter().all(|&v| v == 128));
        assert!(result.validity.is_none());
        assert!(result.correction.is_none());
    }

    #[test]
    fn test_uncovered_strip_keeps_input() {
        let pix = Pix::from_fn(7, 5, |x, y| (x * 10 + y) as u8).unwrap();
        let result = build_surface(&pix, &SurfaceOptions::with_divisions(2)).unwrap();
        // cells are 3x2, coverage is 6x4
        for y in 0..5 {
            assert_eq!(result.surface.get_pixel(6, y), pix.get_pixel(6, y));
        }
        for x in 0..7 {
            assert_eq!(result.surface.get_pixel(x, 4), pix.get_pixel(x, 4));
        }
    }

    #[test]
    fn test_validation_reports_stats() {
        let pix = Pix::from_fn(9, 9, |x, y| {
            // only the top-left window has more than two intensities
            if x < 3 && y < 3 { (x * 40 + y * 3) as u8 } else { 90 }
        })
        .unwrap();
        let options = SurfaceOptions {
            enable_validation: true,
            ..SurfaceOptions::with_divisions(3)
        };
        let result = build_surface(&pix, &options).unwrap();
        let stats = result.correction.unwrap();
        assert!(stats.converged);
        assert_eq!(stats.repaired, 8);
        assert_eq!(result.windows.invalid_count(), 0);

        let donor = result.windows[(0, 0)].threshold;
        assert!(result.windows.iter().all(|w| w.threshold == donor));
        assert!(result.surface.data().iter().all(|&v| v == donor));

        let validity = result.validity.unwrap();
        assert_eq!(validity.get_pixel(1, 1), Some(255));
        assert_eq!(validity.get_pixel(5, 5), Some(0));
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let pix = Pix::new(4, 4).unwrap();
        assert!(matches!(
            build_surface(&pix, &SurfaceOptions::with_divisions(0)),
            Err(SurfaceError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            build_surface(&pix, &SurfaceOptions::with_divisions(5)),
            Err(SurfaceError::InvalidDimensions { .. })
        ));
        let options = SurfaceOptions {
            tolerance: -1.0,
            ..SurfaceOptions::with_divisions(2)
        };
        assert!(matches!(
            build_surface(&pix, &options),
            Err(SurfaceError::InvalidParameters(_))
        ));
    }
}
