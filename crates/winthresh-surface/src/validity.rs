//! Validity classification and neighbor-based correction
//!
//! A window whose spread score does not exceed the tolerance has too little
//! contrast for its own threshold to be trusted. Such windows are marked
//! invalid and then repaired round by round: each invalid window takes the
//! rounded mean threshold of its currently valid 8-connected neighbors.
//!
//! Repairs made during a round are flagged `was_repaired` but the window
//! only becomes valid, and so able to donate, at the start of the next
//! round.

use crate::SurfaceResult;
use crate::window::WindowGrid;
use log::{debug, info, warn};
use winthresh_core::{BLACK, Pix, PixMut, WHITE};

/// Summary of a correction run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CorrectionStats {
    /// Number of rounds executed, including the final check round
    pub iterations: u32,
    /// Number of windows whose threshold was replaced
    pub repaired: u32,
    /// False when the loop stopped because every window was invalid
    pub converged: bool,
}

/// Mark windows with `spread <= tolerance` as invalid.
///
/// Returns a validity image of the same size as `pix`: [`WHITE`] over valid
/// windows, [`BLACK`] over invalid ones and a copy of `pix` outside the
/// window coverage.
pub fn classify(grid: &mut WindowGrid, tolerance: f64, pix: &Pix) -> SurfaceResult<Pix> {
    let mut validity = pix.to_mut();

    for window in grid.iter_mut() {
        if window.spread <= tolerance {
            window.is_valid = false;
            validity.fill_region(&window.region, BLACK)?;
        } else {
            validity.fill_region(&window.region, WHITE)?;
        }
    }

    Ok(validity.into())
}

/// Repair invalid windows from their valid neighbors.
///
/// Each round first promotes windows repaired in the previous round, then
/// visits every still-invalid window in row-major order. A window with at
/// least one valid neighbor gets the mean of their thresholds, rounded half
/// away from zero, and its extent in `surface` is rewritten. Windows with
/// no valid neighbor are left for a later round.
///
/// The loop ends when a round finds no invalid window, or when every window
/// is invalid, in which case nothing can ever be repaired and a warning is
/// logged.
pub fn correct(grid: &mut WindowGrid, surface: &mut PixMut) -> SurfaceResult<CorrectionStats> {
    let total = grid.len();
    let divisions = grid.divisions();
    let mut stats = CorrectionStats::default();

    loop {
        stats.iterations += 1;

        for window in grid.iter_mut() {
            if !window.is_valid && window.was_repaired {
                window.is_valid = true;
            }
        }

        let mut invalid = 0usize;
        for gy in 0..divisions {
            for gx in 0..divisions {
                if grid[(gx, gy)].is_valid {
                    continue;
                }
                invalid += 1;

                let Some(threshold) = valid_neighbor_mean(grid, gx, gy) else {
                    continue;
                };
                let window = &mut grid[(gx, gy)];
                window.threshold = threshold;
                window.was_repaired = true;
                stats.repaired += 1;
                debug!(
                    "correction iteration {}: window ({:02}, {:02}) new threshold {}",
                    stats.iterations, gx, gy, threshold
                );
                grid.broadcast(gx, gy, surface)?;
            }
        }

        if invalid == 0 {
            stats.converged = true;
            break;
        }
        if invalid == total {
            warn!(
                "all {} windows are invalid, threshold correction cannot proceed",
                total
            );
            break;
        }
    }

    info!(
        "threshold correction: {} iterations, {} windows repaired, converged: {}",
        stats.iterations, stats.repaired, stats.converged
    );
    Ok(stats)
}

/// Rounded mean threshold of the valid neighbors of `(gx, gy)`
fn valid_neighbor_mean(grid: &WindowGrid, gx: u32, gy: u32) -> Option<u8> {
    let mut sum = 0.0;
    let mut count = 0u32;
    for (nx, ny) in grid.neighbors(gx, gy) {
        let neighbor = &grid[(nx, ny)];
        if neighbor.is_valid {
            sum += f64::from(neighbor.threshold);
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }
    Some((sum / f64::from(count)).round() as u8)
}
