//! Applying a threshold surface
//!
//! A pixel becomes [`BLACK`] when its intensity is strictly below the
//! threshold at the same position and [`WHITE`] otherwise. Only pixels
//! inside the window coverage are binarized; the rest of the output is a
//! copy of the input.

use crate::surface::{ThresholdSurface, build_surface};
use crate::{SurfaceError, SurfaceOptions, SurfaceResult};
use winthresh_core::{BLACK, Error, Pix, Region, WHITE};

/// Binarize `pix` with a surface built from it.
///
/// # Errors
/// [`SurfaceError::Core`] with [`Error::DimensionMismatch`] if the surface
/// was built for an image of a different size.
pub fn binarize(pix: &Pix, surface: &ThresholdSurface) -> SurfaceResult<Pix> {
    binarize_region(pix, &surface.surface, &surface.windows.coverage())
}

/// Binarize the pixels of `pix` inside `region` against `thresholds`.
///
/// # Arguments
/// * `pix` - Greyscale input
/// * `thresholds` - Per-pixel thresholds, same size as `pix`
/// * `region` - Area to binarize; pixels outside it are copied
pub fn binarize_region(pix: &Pix, thresholds: &Pix, region: &Region) -> SurfaceResult<Pix> {
    if !pix.sizes_equal(thresholds) {
        return Err(Error::DimensionMismatch {
            expected: (pix.width(), pix.height()),
            actual: (thresholds.width(), thresholds.height()),
        }
        .into());
    }
    if !pix.region().contains_region(region) {
        return Err(SurfaceError::InvalidParameters(format!(
            "binarization region {:?} exceeds {}x{} image",
            region,
            pix.width(),
            pix.height()
        )));
    }

    let mut out = pix.to_mut();
    for y in region.ys() {
        let src = pix.row_data(y);
        let thr = thresholds.row_data(y);
        let dst = out.row_data_mut(y);
        for x in region.xs() {
            let x = x as usize;
            dst[x] = if src[x] < thr[x] { BLACK } else { WHITE };
        }
    }

    Ok(out.into())
}

/// Build a threshold surface and binarize the image with it.
///
/// Returns the binarized image together with the surface.
pub fn adaptive_threshold(
    pix: &Pix,
    options: &SurfaceOptions,
) -> SurfaceResult<(Pix, ThresholdSurface)> {
    let surface = build_surface(pix, options)?;
    let binary = binarize(pix, &surface)?;
    Ok((binary, surface))
}
