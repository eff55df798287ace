//! ICO container decoding (internal).
//!
//! Use [`crate::get_icon_by_size`] or [`crate::DecodeRequest`].

pub(crate) mod dib;
pub(crate) mod dir;
pub(crate) mod payload;
pub(crate) mod png;
mod reader;
pub(crate) mod select;

use enough::Stop;

use crate::decode::DecodedBitmap;
use crate::error::IcoError;
use crate::limits::{self, Limits};
use dir::DirectoryEntry;
use payload::RawPayload;

/// Largest width or height an ICO entry can describe (a stored 0 byte).
pub(crate) const MAX_ICON_DIMENSION: u32 = 256;

/// Decode the entry that best fits `target`, optionally resampled to exactly
/// `target` x `target`.
pub(crate) fn decode_best(
    data: &[u8],
    target: u32,
    scale_to_target: bool,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodedBitmap, IcoError> {
    if target == 0 {
        return Err(IcoError::InvalidTargetSize(target));
    }
    let directory = dir::parse_directory(data)?;
    let entry = select::select_entry(&directory.entries, target)
        .ok_or_else(|| IcoError::MalformedContainer("directory declares no images".into()))?;
    let bitmap = decode_payload(data, entry, limits, stop)?;

    if !scale_to_target {
        return Ok(bitmap);
    }
    limits::check_rgba_output(limits, target, target)?;
    stop.check()?;
    Ok(bitmap.resample(target))
}

/// Decode the entry at directory position `index`, at its native size.
pub(crate) fn decode_index(
    data: &[u8],
    index: usize,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodedBitmap, IcoError> {
    let directory = dir::parse_directory(data)?;
    let entry = directory.entries.get(index).ok_or_else(|| {
        IcoError::MalformedContainer(format!(
            "entry {index} requested, directory has {}",
            directory.entries.len()
        ))
    })?;
    decode_payload(data, entry, limits, stop)
}

fn decode_payload(
    data: &[u8],
    entry: &DirectoryEntry,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodedBitmap, IcoError> {
    let payload = payload::extract_payload(data, entry)?;
    let image = match payload {
        RawPayload::Png(bytes) => png::decode_png(bytes, limits, stop)?,
        RawPayload::Dib(bytes) => dib::decode_dib(bytes, limits, stop)?,
    };
    Ok(DecodedBitmap::new(image, payload.kind()))
}
