//! PNG image format support
//!
//! Only greyscale PNGs are accepted. Low bit depths are expanded and
//! 16-bit samples are stripped to 8 bits by the decoder.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};
use winthresh_core::Pix;

/// Read a greyscale PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    if color_type != ColorType::Grayscale || bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "only greyscale PNG is supported, got {:?} {:?}",
            color_type, bit_depth
        )));
    }

    let info = reader.info();
    let width = info.width;
    let height = info.height;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let pix = Pix::new(width, height)?;
    let mut pix_mut = pix
        .try_into_mut()
        .map_err(|_| IoError::DecodeError("freshly created image is shared".to_string()))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        pix_mut
            .row_data_mut(y)
            .copy_from_slice(&data[row_start..row_start + width as usize]);
    }

    Ok(pix_mut.into())
}

/// Write a PNG image as 8-bit greyscale
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(pix.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
