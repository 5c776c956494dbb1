//! PNM (portable greymap) format support
//!
//! Reads PGM in both the ASCII (P2) and binary (P5) variants and writes
//! binary P5. Only 8-bit greymaps (maxval 1..=255) are accepted; sample
//! values are stored as-is, so a greymap with maxval 15 keeps intensities
//! in `0..=15`.

use crate::{IoError, IoResult};
use std::io::{BufRead, Write};
use winthresh_core::{Error, Pix};

/// Which PGM encoding the header announced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PgmKind {
    Ascii,
    Binary,
}

/// Parsed PGM header
#[derive(Debug)]
struct PgmHeader {
    kind: PgmKind,
    width: u32,
    height: u32,
    maxval: u32,
}

/// Read a PGM image (P2/P5) from a reader.
///
/// # Arguments
/// * `reader` - A buffered reader positioned at the `P2`/`P5` magic
///
/// # Errors
/// - [`IoError::UnsupportedFormat`] for other PNM variants or maxval > 255
/// - [`IoError::InvalidData`] for malformed headers or truncated data
/// - [`IoError::Core`] wrapping [`Error::InvalidIntensity`] when a sample
///   exceeds the declared maxval
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Pix> {
    let header = read_header(&mut reader)?;
    let pix = Pix::new(header.width, header.height)?;
    let mut pix_mut = pix
        .try_into_mut()
        .map_err(|_| IoError::DecodeError("freshly created image is shared".to_string()))?;

    match header.kind {
        PgmKind::Binary => {
            let mut row = vec![0u8; header.width as usize];
            for y in 0..header.height {
                reader.read_exact(&mut row).map_err(|e| {
                    IoError::InvalidData(format!("truncated PGM raster at row {y}: {e}"))
                })?;
                for (x, &val) in row.iter().enumerate() {
                    check_sample(x as u32, y, u32::from(val), header.maxval)?;
                }
                pix_mut.row_data_mut(y).copy_from_slice(&row);
            }
        }
        PgmKind::Ascii => {
            for y in 0..header.height {
                for x in 0..header.width {
                    let token = next_token(&mut reader)?.ok_or_else(|| {
                        IoError::InvalidData(format!("truncated PGM raster at ({x}, {y})"))
                    })?;
                    let val: u32 = token.parse().map_err(|_| {
                        IoError::InvalidData(format!("bad PGM sample '{token}' at ({x}, {y})"))
                    })?;
                    check_sample(x, y, val, header.maxval)?;
                    pix_mut.set_pixel_unchecked(x, y, val as u8);
                }
            }
        }
    }

    Ok(pix_mut.into())
}

/// Write a `Pix` as binary PGM (P5) to a writer.
///
/// # Arguments
/// * `pix`    - The image to encode
/// * `writer` - Destination writer
pub fn write_pnm<W: Write>(pix: &Pix, mut writer: W) -> IoResult<()> {
    write!(writer, "P5\n{} {}\n255\n", pix.width(), pix.height())?;
    for y in 0..pix.height() {
        writer.write_all(pix.row_data(y))?;
    }
    writer.flush()?;
    Ok(())
}

/// Reject samples above the declared maxval.
fn check_sample(x: u32, y: u32, val: u32, maxval: u32) -> IoResult<()> {
    if val > maxval {
        return Err(Error::InvalidIntensity {
            x,
            y,
            value: i64::from(val),
        }
        .into());
    }
    Ok(())
}

fn read_header<R: BufRead>(reader: &mut R) -> IoResult<PgmHeader> {
    let mut magic = [0u8; 2];
    reader
        .read_exact(&mut magic)
        .map_err(|_| IoError::InvalidData("missing PNM magic".to_string()))?;
    let kind = match &magic {
        b"P2" => PgmKind::Ascii,
        b"P5" => PgmKind::Binary,
        b"P1" | b"P3" | b"P4" | b"P6" | b"P7" => {
            return Err(IoError::UnsupportedFormat(format!(
                "only greymaps (P2/P5) are supported, got {}",
                String::from_utf8_lossy(&magic)
            )));
        }
        _ => return Err(IoError::InvalidData("not a PNM file".to_string())),
    };

    let width = header_value(reader, "width")?;
    let height = header_value(reader, "height")?;
    let maxval = header_value(reader, "maxval")?;

    if width == 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "invalid PGM dimensions {width}x{height}"
        )));
    }
    if maxval == 0 {
        return Err(IoError::InvalidData("PGM maxval must be positive".to_string()));
    }
    if maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "16-bit greymaps are not supported (maxval {maxval})"
        )));
    }

    Ok(PgmHeader {
        kind,
        width,
        height,
        maxval,
    })
}

fn header_value<R: BufRead>(reader: &mut R, name: &str) -> IoResult<u32> {
    let token = next_token(reader)?
        .ok_or_else(|| IoError::InvalidData(format!("PGM header ends before {name}")))?;
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("bad PGM {name} '{token}'")))
}

/// Read the next whitespace-delimited token, skipping `#` comments.
///
/// Consumes exactly one whitespace byte after the token, which is where
/// the P5 raster starts once the maxval has been read.
fn next_token<R: BufRead>(reader: &mut R) -> IoResult<Option<String>> {
    let mut token = String::new();
    let mut in_comment = false;
    loop {
        let Some(byte) = read_byte(reader)? else {
            break;
        };
        if in_comment {
            if byte == b'\n' || byte == b'\r' {
                in_comment = false;
            }
            continue;
        }
        if byte == b'#' && token.is_empty() {
            in_comment = true;
            continue;
        }
        if byte.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            break;
        }
        token.push(byte as char);
    }
    Ok(if token.is_empty() { None } else { Some(token) })
}

fn read_byte<R: BufRead>(reader: &mut R) -> IoResult<Option<u8>> {
    let buf = reader.fill_buf()?;
    let Some(&byte) = buf.first() else {
        return Ok(None);
    };
    reader.consume(1);
    Ok(Some(byte))
}
