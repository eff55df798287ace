//! ICONDIR header and ICONDIRENTRY records.

use super::reader::Cursor;
use crate::error::IcoError;

pub(crate) const HEADER_LEN: usize = 6;
pub(crate) const ENTRY_LEN: usize = 16;

/// Resource type from the ICONDIR `type` field.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceType {
    /// Type 1, `.ico`.
    Icon,
    /// Type 2, `.cur`. Decoded the same way; planes/bit count hold the hotspot.
    Cursor,
    /// Any other value. Tolerated, since producers in the wild get this wrong.
    Other(u16),
}

impl ResourceType {
    fn from_u16(v: u16) -> Self {
        match v {
            1 => Self::Icon,
            2 => Self::Cursor,
            other => Self::Other(other),
        }
    }
}

/// One directory record describing an embedded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Position in the directory, starting at 0.
    pub index: usize,
    /// Width in pixels, 1..=256 (a stored 0 means 256).
    pub width: u16,
    /// Height in pixels, 1..=256 (a stored 0 means 256).
    pub height: u16,
    /// Palette size, 0 for true-color images.
    pub color_count: u8,
    pub planes: u16,
    pub bit_count: u16,
    /// Length of the image payload in bytes.
    pub byte_size: u32,
    /// Offset of the image payload from the start of the buffer.
    pub byte_offset: u32,
}

impl DirectoryEntry {
    /// `width * height`, the key used for best-fit selection.
    pub fn area(&self) -> u32 {
        u32::from(self.width) * u32::from(self.height)
    }

    /// Exclusive end of the payload, computed without overflow.
    pub(crate) fn end(&self) -> u64 {
        u64::from(self.byte_offset) + u64::from(self.byte_size)
    }
}

/// Parsed ICONDIR.
#[derive(Clone, Debug)]
pub(crate) struct Directory {
    pub resource_type: ResourceType,
    pub entries: Vec<DirectoryEntry>,
}

fn dimension(byte: u8) -> u16 {
    if byte == 0 { 256 } else { u16::from(byte) }
}

fn short_directory() -> IcoError {
    IcoError::MalformedContainer("directory truncated".into())
}

/// Parse the ICO header and every directory entry.
///
/// Validates that each entry's payload lies inside `data`, so later stages
/// can slice without re-deriving bounds.
pub(crate) fn parse_directory(data: &[u8]) -> Result<Directory, IcoError> {
    if data.len() < HEADER_LEN {
        return Err(IcoError::MalformedContainer(format!(
            "need {HEADER_LEN} header bytes, got {}",
            data.len()
        )));
    }

    let mut cursor = Cursor::new(data);
    let reserved = cursor.read_u16_le().ok_or_else(short_directory)?;
    let resource_type = ResourceType::from_u16(cursor.read_u16_le().ok_or_else(short_directory)?);
    let count = cursor.read_u16_le().ok_or_else(short_directory)?;

    if reserved != 0 {
        log::warn!("ICO reserved header field is {reserved:#06x}, expected 0");
    }
    if count == 0 {
        return Err(IcoError::MalformedContainer(
            "directory declares no images".into(),
        ));
    }

    let needed = HEADER_LEN + ENTRY_LEN * usize::from(count);
    if data.len() < needed {
        return Err(IcoError::MalformedContainer(format!(
            "directory of {count} entries needs {needed} bytes, got {}",
            data.len()
        )));
    }

    let mut entries = Vec::with_capacity(usize::from(count));
    for index in 0..usize::from(count) {
        let width = dimension(cursor.read_u8().ok_or_else(short_directory)?);
        let height = dimension(cursor.read_u8().ok_or_else(short_directory)?);
        let color_count = cursor.read_u8().ok_or_else(short_directory)?;
        cursor.skip(1).ok_or_else(short_directory)?;
        let planes = cursor.read_u16_le().ok_or_else(short_directory)?;
        let bit_count = cursor.read_u16_le().ok_or_else(short_directory)?;
        let byte_size = cursor.read_u32_le().ok_or_else(short_directory)?;
        let byte_offset = cursor.read_u32_le().ok_or_else(short_directory)?;

        let entry = DirectoryEntry {
            index,
            width,
            height,
            color_count,
            planes,
            bit_count,
            byte_size,
            byte_offset,
        };
        if entry.end() > data.len() as u64 {
            return Err(IcoError::MalformedContainer(format!(
                "entry {index} payload {byte_offset}+{byte_size} exceeds buffer of {} bytes",
                data.len()
            )));
        }
        log::trace!(
            "ICO entry {index}: {width}x{height} {bit_count}bpp, {byte_size} bytes at {byte_offset}"
        );
        entries.push(entry);
    }

    debug_assert_eq!(cursor.position(), needed);
    log::debug!("ICO directory: {resource_type:?}, {count} entries");

    Ok(Directory {
        resource_type,
        entries,
    })
}
