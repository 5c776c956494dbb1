//! Errors raised while reading or writing greymaps
//!
//! The PNM and PNG codecs report through the single [`IoError`] type, so a
//! caller that loads an image never needs to know which codec ran.

use thiserror::Error;

/// Failure while decoding, encoding or locating an image file.
#[derive(Error, Debug)]
pub enum IoError {
    /// The file could not be opened, read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No codec for this format, or its cargo feature is off
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Malformed header or truncated raster
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// A decoder could not produce an image from the stream
    #[error("decode error: {0}")]
    DecodeError(String),

    /// An encoder could not write the image
    #[error("encode error: {0}")]
    EncodeError(String),

    /// A decoded sample did not fit an intensity grid
    #[error("core error: {0}")]
    Core(#[from] winthresh_core::Error),
}

/// Result of an image read or write.
pub type IoResult<T> = Result<T, IoError>;
