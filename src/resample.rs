//! Square bicubic resampling of decoded icons.

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::decode::DecodedBitmap;

/// Scale `bitmap` to exactly `target` x `target` with a Catmull-Rom filter.
///
/// Aspect ratio is not preserved. A zero `target` yields an empty bitmap.
pub fn resample(bitmap: &DecodedBitmap, target: u32) -> DecodedBitmap {
    let image = if target == 0 {
        RgbaImage::new(0, 0)
    } else {
        imageops::resize(bitmap.as_rgba_image(), target, target, FilterType::CatmullRom)
    };
    log::debug!(
        "resampled {}x{} icon to {target}x{target}",
        bitmap.width(),
        bitmap.height()
    );
    DecodedBitmap::new(image, bitmap.source_kind())
}
