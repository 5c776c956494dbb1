//! Parameters for threshold surface construction

use crate::{SurfaceError, SurfaceResult};

/// Default number of windows along each image axis
pub const DEFAULT_DIVISIONS: u32 = 8;

/// Default spread tolerance used by validity classification
pub const DEFAULT_TOLERANCE: f64 = 0.0;

/// Options for building a threshold surface
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceOptions {
    /// Number of windows along each axis (the grid is `divisions x divisions`)
    pub divisions: u32,
    /// Windows whose spread score is `<= tolerance` are classified invalid
    pub tolerance: f64,
    /// Classify windows and repair invalid ones from their neighbors
    pub enable_validation: bool,
    /// Bilinearly interpolate thresholds between window centers
    pub enable_smoothing: bool,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            divisions: DEFAULT_DIVISIONS,
            tolerance: DEFAULT_TOLERANCE,
            enable_validation: false,
            enable_smoothing: false,
        }
    }
}

impl SurfaceOptions {
    /// Create options with the given number of divisions and defaults otherwise
    pub fn with_divisions(divisions: u32) -> Self {
        Self {
            divisions,
            ..Self::default()
        }
    }

    /// Check the parameters that do not depend on the image.
    ///
    /// Divisions are checked against the image size when the window grid
    /// is laid out, since only then is the cell size known.
    ///
    /// # Errors
    /// [`SurfaceError::InvalidParameters`] if the tolerance is negative or
    /// not finite.
    pub fn validate(&self) -> SurfaceResult<()> {
        if !self.tolerance.is_finite() {
            return Err(SurfaceError::InvalidParameters(format!(
                "tolerance must be finite, got {}",
                self.tolerance
            )));
        }
        if self.tolerance < 0.0 {
            return Err(SurfaceError::InvalidParameters(format!(
                "tolerance must be >= 0, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
