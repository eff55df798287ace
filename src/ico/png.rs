//! Embedded PNG payloads, handed to the `image` crate's PNG decoder.

use std::io::Cursor;

use enough::Stop;
use image::codecs::png::PngDecoder;
use image::{DynamicImage, ImageDecoder, RgbaImage};

use super::MAX_ICON_DIMENSION;
use crate::error::IcoError;
use crate::limits::{self, Limits};

fn unsupported(e: image::ImageError) -> IcoError {
    IcoError::UnsupportedPngPayload(e.to_string())
}

/// Decode a PNG payload to RGBA8, whatever its color type.
///
/// The IHDR size is checked against the ICO maximum before any pixel
/// buffer exists, and the codec runs with `image`'s default allocation cap.
pub(crate) fn decode_png(
    bytes: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<RgbaImage, IcoError> {
    let decoder = PngDecoder::with_limits(Cursor::new(bytes), image::Limits::default())
        .map_err(unsupported)?;
    let (width, height) = decoder.dimensions();
    if width > MAX_ICON_DIMENSION || height > MAX_ICON_DIMENSION {
        return Err(IcoError::UnsupportedPngPayload(format!(
            "dimensions {width}x{height} exceed {MAX_ICON_DIMENSION}px"
        )));
    }
    limits::check_rgba_output(limits, width, height)?;
    log::trace!("PNG payload {width}x{height}, {:?}", decoder.color_type());
    stop.check()?;

    let image = DynamicImage::from_decoder(decoder).map_err(unsupported)?;
    Ok(image.into_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use enough::Unstoppable;
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    fn encode(pixels: &[u8], w: u32, h: u32, color: ExtendedColorType) -> Vec<u8> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(pixels, w, h, color)
            .unwrap();
        out
    }

    #[test]
    fn decodes_rgba() {
        let pixels = [255, 0, 0, 255, 0, 255, 0, 128];
        let png = encode(&pixels, 2, 1, ExtendedColorType::Rgba8);
        let img = decode_png(&png, None, &Unstoppable).unwrap();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.as_raw().as_slice(), &pixels);
    }

    #[test]
    fn expands_rgb_to_opaque_rgba() {
        let png = encode(&[10, 20, 30], 1, 1, ExtendedColorType::Rgb8);
        let img = decode_png(&png, None, &Unstoppable).unwrap();
        assert_eq!(img.as_raw().as_slice(), &[10, 20, 30, 255]);
    }

    #[test]
    fn garbage_after_signature_is_unsupported() {
        let mut bytes = crate::ico::payload::PNG_SIGNATURE.to_vec();
        bytes.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        assert!(matches!(
            decode_png(&bytes, None, &Unstoppable),
            Err(IcoError::UnsupportedPngPayload(_))
        ));
    }

    fn crc32(data: &[u8]) -> u32 {
        let mut crc = 0xffff_ffffu32;
        for &b in data {
            crc ^= u32::from(b);
            for _ in 0..8 {
                crc = if crc & 1 != 0 { (crc >> 1) ^ 0xedb8_8320 } else { crc >> 1 };
            }
        }
        !crc
    }

    /// Rewrite the IHDR size of an encoded PNG, keeping its CRC valid.
    fn with_ihdr_size(mut png: Vec<u8>, width: u32, height: u32) -> Vec<u8> {
        png[16..20].copy_from_slice(&width.to_be_bytes());
        png[20..24].copy_from_slice(&height.to_be_bytes());
        let crc = crc32(&png[12..29]);
        png[29..33].copy_from_slice(&crc.to_be_bytes());
        png
    }

    #[test]
    fn rejects_ihdr_beyond_icon_maximum() {
        let png = encode(&[1, 2, 3, 4], 1, 1, ExtendedColorType::Rgba8);
        let huge = with_ihdr_size(png.clone(), 60_000, 60_000);
        assert!(matches!(
            decode_png(&huge, None, &Unstoppable),
            Err(IcoError::UnsupportedPngPayload(_))
        ));

        let wide = encode(&[0u8; 300 * 4], 300, 1, ExtendedColorType::Rgba8);
        assert!(matches!(
            decode_png(&wide, None, &Unstoppable),
            Err(IcoError::UnsupportedPngPayload(_))
        ));

        // untouched header still decodes
        let same = with_ihdr_size(png, 1, 1);
        assert_eq!(decode_png(&same, None, &Unstoppable).unwrap().dimensions(), (1, 1));
    }

    #[test]
    fn limits_apply() {
        let png = encode(&[0u8; 4 * 16], 4, 4, ExtendedColorType::Rgba8);
        let limits = Limits {
            max_width: Some(2),
            ..Default::default()
        };
        assert!(matches!(
            decode_png(&png, Some(&limits), &Unstoppable),
            Err(IcoError::LimitExceeded(_))
        ));
    }
}
