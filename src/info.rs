use crate::error::IcoError;
use crate::ico::dir::{self, DirectoryEntry, ResourceType};
use crate::ico::select;

/// ICO directory contents, read without decoding any pixels.
#[derive(Clone, Debug)]
pub struct IconInfo {
    pub resource_type: ResourceType,
    /// Entries in directory order.
    pub entries: Vec<DirectoryEntry>,
}

impl IconInfo {
    /// Parse the header and directory.
    ///
    /// Fails with [`IcoError::MalformedContainer`] on an empty or truncated
    /// directory, or an entry whose payload runs past the end of `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self, IcoError> {
        let directory = dir::parse_directory(data)?;
        Ok(Self {
            resource_type: directory.resource_type,
            entries: directory.entries,
        })
    }

    /// The entry [`crate::get_icon_by_size`] would decode for `target`.
    pub fn best_entry(&self, target: u32) -> Option<&DirectoryEntry> {
        select::select_entry(&self.entries, target)
    }

    /// Largest entry by area, first in directory order on ties.
    pub fn largest_entry(&self) -> Option<&DirectoryEntry> {
        select::select_entry(&self.entries, u32::MAX)
    }
}
