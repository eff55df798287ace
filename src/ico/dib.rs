//! Reconstruction of the legacy bitmap-in-icon payload.
//!
//! An ICO DIB is a BITMAPINFOHEADER followed by bottom-up XOR pixel rows and
//! a 1bpp AND mask. The header height counts both, so it is twice the image
//! height. Only 32bpp `BI_RGB` data is decoded; the AND mask is ignored and
//! transparency comes from the alpha channel.

use enough::Stop;
use image::RgbaImage;

use super::MAX_ICON_DIMENSION;
use super::reader::Cursor;
use crate::error::IcoError;
use crate::limits::{self, Limits};

const BITMAPINFOHEADER_LEN: u32 = 40;
const BI_RGB: u32 = 0;

/// Fields of the info header that matter for decoding, already corrected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DibHeader {
    pub header_size: u32,
    pub width: u32,
    /// Real image height (`biHeight / 2`).
    pub height: u32,
}

fn short_header(len: usize) -> IcoError {
    IcoError::InvalidDibHeader(format!("header truncated at {len} bytes"))
}

/// Read and validate the info header without touching pixel data.
pub(crate) fn parse_dib_header(raw: &[u8]) -> Result<DibHeader, IcoError> {
    let mut cursor = Cursor::new(raw);
    let header_size = cursor.read_u32_le().ok_or_else(|| short_header(raw.len()))?;
    let width = cursor.read_i32_le().ok_or_else(|| short_header(raw.len()))?;
    let bi_height = cursor.read_i32_le().ok_or_else(|| short_header(raw.len()))?;
    let actual_height = bi_height / 2;

    if header_size as usize > raw.len() {
        return Err(IcoError::InvalidDibHeader(format!(
            "header size {header_size} exceeds payload of {} bytes",
            raw.len()
        )));
    }
    if header_size < BITMAPINFOHEADER_LEN {
        return Err(IcoError::UnsupportedDibFormat(format!(
            "{header_size}-byte core header"
        )));
    }
    if width <= 0 || actual_height <= 0 {
        return Err(IcoError::InvalidDibHeader(format!(
            "dimensions {width}x{actual_height} (stored height {bi_height})"
        )));
    }
    if width as u32 > MAX_ICON_DIMENSION || actual_height as u32 > MAX_ICON_DIMENSION {
        return Err(IcoError::InvalidDibHeader(format!(
            "dimensions {width}x{actual_height} exceed {MAX_ICON_DIMENSION}px"
        )));
    }

    let _planes = cursor.read_u16_le().ok_or_else(|| short_header(raw.len()))?;
    let bit_count = cursor.read_u16_le().ok_or_else(|| short_header(raw.len()))?;
    let compression = cursor.read_u32_le().ok_or_else(|| short_header(raw.len()))?;

    if bit_count != 32 {
        return Err(IcoError::UnsupportedDibFormat(format!(
            "{bit_count} bits per pixel"
        )));
    }
    if compression != BI_RGB {
        return Err(IcoError::UnsupportedDibFormat(format!(
            "compression type {compression}"
        )));
    }

    Ok(DibHeader {
        header_size,
        width: width as u32,
        height: actual_height as u32,
    })
}

/// Decode a 32bpp icon DIB into a top-down RGBA image.
///
/// Pixel data shorter than `width * height * 4` is zero-filled; since rows are
/// stored bottom-up, the missing rows end up at the top of the output.
pub(crate) fn decode_dib(
    raw: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<RgbaImage, IcoError> {
    let header = parse_dib_header(raw)?;
    let (width, height) = (header.width, header.height);
    let expected = limits::check_rgba_output(limits, width, height)?;
    stop.check()?;

    let pixel_data = &raw[header.header_size as usize..];
    let available = pixel_data.len().min(expected);
    if available < expected {
        log::warn!(
            "DIB pixel data short: {available} of {expected} bytes, zero-filling the rest"
        );
    }
    let source = &pixel_data[..available];
    log::trace!("DIB {width}x{height}, {available} pixel bytes");

    let stride = width as usize * 4;
    let mut image = RgbaImage::new(width, height);
    let out: &mut [u8] = &mut image;

    for (row, dst) in out.chunks_exact_mut(stride).enumerate() {
        if row % 16 == 0 {
            stop.check()?;
        }
        let start = (height as usize - 1 - row) * stride;
        if start >= source.len() {
            continue;
        }
        let src = &source[start..(start + stride).min(source.len())];
        for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks(4)) {
            let mut bgra = [0u8; 4];
            bgra[..s.len()].copy_from_slice(s);
            d.copy_from_slice(&[bgra[2], bgra[1], bgra[0], bgra[3]]);
        }
    }

    Ok(image)
}
