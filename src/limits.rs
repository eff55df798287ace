use crate::IcoError;

/// Caller-supplied caps on decoded output, on top of the format's own.
///
/// All fields default to `None`. Payload dimensions never exceed 256x256
/// whatever the headers claim, so an unlimited decode at native size tops out
/// at 256 KiB of RGBA. What stays unbounded is the resample target: with
/// `scale_to_target`, a caller passing sizes it did not choose itself should
/// set `max_width`/`max_height` or `max_memory_bytes`, which are checked
/// before the resampled buffer is allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum memory bytes for output buffer allocation.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check dimensions against limits. Returns Ok(()) or LimitExceeded error.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), IcoError> {
        if let Some(max_w) = self.max_width {
            if u64::from(width) > max_w {
                return Err(IcoError::LimitExceeded(format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if u64::from(height) > max_h {
                return Err(IcoError::LimitExceeded(format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(IcoError::LimitExceeded(format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    /// Check that an allocation size is within memory limits.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), IcoError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes as u64 > max_mem {
                return Err(IcoError::LimitExceeded(format!(
                    "allocation {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}

/// Apply optional limits to an RGBA8 output of `width` x `height`.
pub(crate) fn check_rgba_output(
    limits: Option<&Limits>,
    width: u32,
    height: u32,
) -> Result<usize, IcoError> {
    let out_bytes = (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(4))
        .ok_or(IcoError::DimensionsTooLarge { width, height })?;
    if let Some(limits) = limits {
        limits.check(width, height)?;
        limits.check_memory(out_bytes)?;
    }
    Ok(out_bytes)
}
