//! Error types for winthresh-surface

use thiserror::Error;

/// Errors that can occur while building or applying a threshold surface
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] winthresh_core::Error),

    /// The window grid does not fit the image
    #[error(
        "invalid dimensions: {divisions} divisions on a {width}x{height} image leave empty windows"
    )]
    InvalidDimensions {
        width: u32,
        height: u32,
        divisions: u32,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for surface operations
pub type SurfaceResult<T> = Result<T, SurfaceError>;
