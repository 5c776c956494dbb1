//! Bilinear smoothing of the threshold surface
//!
//! Broadcasting one threshold per window leaves visible steps at window
//! borders. Smoothing replaces the surface between each 2x2 block of window
//! centers with a bilinear blend of the four window thresholds.
//!
//! For the block anchored at window `(x, y)` the interpolated pixels start one
//! past its center and run `distance_x` columns and `distance_y` rows, the
//! distances between that center and the centers of its right and lower
//! neighbors. The first interpolated pixel has weight 0 and takes the
//! threshold of `(x, y)`; the weight grows by `1 / distance` per pixel.
//!
//! Interpolation is done in `f32`. The two vertical blends are truncated to
//! integers before the horizontal blend, and the result is truncated again.

use crate::SurfaceResult;
use crate::window::WindowGrid;
use winthresh_core::PixMut;

/// Interpolate the surface between neighboring window centers.
///
/// Pixels outside every 2x2 block of centers, including the uncovered edge
/// strip, are left untouched. With a single division there are no blocks
/// and the surface is unchanged.
pub fn smooth(grid: &WindowGrid, surface: &mut PixMut) -> SurfaceResult<()> {
    let n = grid.divisions();
    if n < 2 {
        return Ok(());
    }
    let coverage = grid.coverage();

    for y in 0..n - 1 {
        for x in 0..n - 1 {
            let w00 = &grid[(x, y)];
            let w10 = &grid[(x + 1, y)];
            let w01 = &grid[(x, y + 1)];
            let w11 = &grid[(x + 1, y + 1)];

            let distance_x = w10.center_x - w00.center_x;
            let distance_y = w01.center_y - w00.center_y;
            let x_start = w00.center_x + 1;
            let y_start = w00.center_y + 1;

            let t00 = f32::from(w00.threshold);
            let t10 = f32::from(w10.threshold);
            let t01 = f32::from(w01.threshold);
            let t11 = f32::from(w11.threshold);

            for py in y_start..y_start + distance_y {
                let fy = (py - y_start) as f32 / distance_y as f32;
                let left = (t00 + fy * (t01 - t00)) as i32;
                let right = (t10 + fy * (t11 - t10)) as i32;
                for px in x_start..x_start + distance_x {
                    // 1-pixel cells put the last block past the coverage
                    if !coverage.contains_point(px, py) {
                        continue;
                    }
                    let fx = (px - x_start) as f32 / distance_x as f32;
                    let value = left as f32 + fx * (right - left) as f32;
                    surface.set_pixel(px, py, value as u8)?;
                }
            }
        }
    }

    Ok(())
}
