//! Payload slicing and PNG/DIB classification.

use super::dir::DirectoryEntry;
use crate::error::IcoError;

/// The 8-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// How an entry's image is stored.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// A complete embedded PNG stream (Vista-era icons, usually the 256px entry).
    Png,
    /// A BITMAPINFOHEADER-prefixed bitmap with doubled height and AND mask.
    Dib,
}

/// An entry's bytes, tagged by encoding. Borrows from the ICO buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawPayload<'a> {
    Png(&'a [u8]),
    Dib(&'a [u8]),
}

impl<'a> RawPayload<'a> {
    /// Classify by the PNG signature; anything else is treated as a DIB.
    pub fn classify(bytes: &'a [u8]) -> Self {
        if bytes.starts_with(&PNG_SIGNATURE) {
            Self::Png(bytes)
        } else {
            Self::Dib(bytes)
        }
    }

    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::Png(_) => PayloadKind::Png,
            Self::Dib(_) => PayloadKind::Dib,
        }
    }

    pub fn bytes(&self) -> &'a [u8] {
        match *self {
            Self::Png(b) | Self::Dib(b) => b,
        }
    }
}

/// Slice `entry`'s payload out of `data` and classify it.
pub fn extract_payload<'a>(
    data: &'a [u8],
    entry: &DirectoryEntry,
) -> Result<RawPayload<'a>, IcoError> {
    let truncated = || IcoError::TruncatedPayload {
        offset: entry.byte_offset,
        size: entry.byte_size,
        len: data.len(),
    };
    let start = usize::try_from(entry.byte_offset).map_err(|_| truncated())?;
    let size = usize::try_from(entry.byte_size).map_err(|_| truncated())?;
    let end = start.checked_add(size).ok_or_else(truncated)?;
    let bytes = data.get(start..end).ok_or_else(truncated)?;

    let payload = RawPayload::classify(bytes);
    log::debug!(
        "ICO entry {} payload: {:?}, {} bytes",
        entry.index,
        payload.kind(),
        bytes.len()
    );
    Ok(payload)
}
