//! Synthetic ICO builders for integration tests.

#![allow(dead_code)]

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

/// One image to place in a synthetic ICO.
pub struct Image {
    /// Directory width/height (256 is written as 0).
    pub width: u32,
    pub height: u32,
    pub payload: Vec<u8>,
}

/// 32bpp icon DIB: 40-byte header with doubled height, the given bottom-up
/// BGRA rows, then an all-zero AND mask.
pub fn dib_payload(width: u32, height: u32, bottom_up_bgra: &[u8]) -> Vec<u8> {
    assert_eq!(bottom_up_bgra.len(), (width * height * 4) as usize);
    let mut v = Vec::new();
    v.extend_from_slice(&40u32.to_le_bytes());
    v.extend_from_slice(&(width as i32).to_le_bytes());
    v.extend_from_slice(&(height as i32 * 2).to_le_bytes());
    v.extend_from_slice(&1u16.to_le_bytes());
    v.extend_from_slice(&32u16.to_le_bytes());
    v.extend_from_slice(&0u32.to_le_bytes());
    v.extend_from_slice(&[0u8; 20]);
    v.extend_from_slice(bottom_up_bgra);
    let mask_stride = (width as usize).div_ceil(32) * 4;
    v.extend(std::iter::repeat_n(0u8, mask_stride * height as usize));
    v
}

/// Build a DIB entry from top-down RGBA, doing the flip and swizzle an
/// encoder would.
pub fn dib_from_rgba(width: u32, height: u32, top_down_rgba: &[u8]) -> Vec<u8> {
    let stride = width as usize * 4;
    let mut bgra = Vec::with_capacity(top_down_rgba.len());
    for row in top_down_rgba.chunks_exact(stride).rev() {
        for px in row.chunks_exact(4) {
            bgra.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
        }
    }
    dib_payload(width, height, &bgra)
}

/// PNG entry from top-down RGBA.
pub fn png_payload(width: u32, height: u32, rgba: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(rgba, width, height, ExtendedColorType::Rgba8)
        .unwrap();
    out
}

/// Solid-color DIB entry.
pub fn solid_dib(size: u32, rgba: [u8; 4]) -> Image {
    let pixels: Vec<u8> = rgba.iter().copied().cycle().take((size * size * 4) as usize).collect();
    Image {
        width: size,
        height: size,
        payload: dib_from_rgba(size, size, &pixels),
    }
}

/// Solid-color PNG entry.
pub fn solid_png(size: u32, rgba: [u8; 4]) -> Image {
    let pixels: Vec<u8> = rgba.iter().copied().cycle().take((size * size * 4) as usize).collect();
    Image {
        width: size,
        height: size,
        payload: png_payload(size, size, &pixels),
    }
}

/// Assemble a complete ICO file, payloads laid out after the directory in order.
pub fn build_ico(images: &[Image]) -> Vec<u8> {
    let mut out = vec![0, 0, 1, 0];
    out.extend_from_slice(&(images.len() as u16).to_le_bytes());
    let mut offset = 6 + 16 * images.len() as u32;
    for img in images {
        out.push((img.width % 256) as u8);
        out.push((img.height % 256) as u8);
        out.extend_from_slice(&[0, 0]);
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&32u16.to_le_bytes());
        out.extend_from_slice(&(img.payload.len() as u32).to_le_bytes());
        out.extend_from_slice(&offset.to_le_bytes());
        offset += img.payload.len() as u32;
    }
    for img in images {
        out.extend_from_slice(&img.payload);
    }
    out
}

/// PNG chunk CRC (ISO 3309, reflected 0xEDB88320).
pub fn crc32(data: &[u8]) -> u32 {
    let mut crc = 0xffff_ffffu32;
    for &b in data {
        crc ^= u32::from(b);
        for _ in 0..8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ 0xedb8_8320 } else { crc >> 1 };
        }
    }
    !crc
}

/// Encoded PNG whose IHDR claims `width` x `height`, CRC kept valid.
pub fn png_with_ihdr_size(mut png: Vec<u8>, width: u32, height: u32) -> Vec<u8> {
    png[16..20].copy_from_slice(&width.to_be_bytes());
    png[20..24].copy_from_slice(&height.to_be_bytes());
    let crc = crc32(&png[12..29]);
    png[29..33].copy_from_slice(&crc.to_be_bytes());
    png
}

pub fn checkerboard(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * 4];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * 4;
            let px: [u8; 4] = if (x + y) % 2 == 0 {
                [200, 220, 240, 255]
            } else {
                [10, 40, 70, 128]
            };
            pixels[off..off + 4].copy_from_slice(&px);
        }
    }
    pixels
}

pub fn noise_pattern(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * 4];
    let mut state: u32 = 0xDEAD_BEEF;
    for p in pixels.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    pixels
}
