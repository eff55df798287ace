//! # zenico
//!
//! Windows ICO container decoder.
//!
//! Given the bytes of an `.ico` (or `.cur`) file, pick the embedded image that
//! best fits a requested size and decode it to top-down RGBA8.
//!
//! ## Selection
//!
//! The smallest entry at least as large as the target on both sides wins.
//! If no entry is large enough, the largest one is used. Ties go to the entry
//! listed first. Selection never upscales when a big-enough entry exists, and
//! the decoded bitmap keeps its native size unless resampling is requested.
//!
//! ## Supported payloads
//!
//! - **PNG**: decoded with the `image` crate, any PNG color type
//! - **DIB**: 32-bit `BI_RGB` with BITMAPINFOHEADER or later; the AND mask is
//!   ignored and the alpha channel is taken as-is
//!
//! Palette, 24-bit and compressed DIBs fail with
//! [`IcoError::UnsupportedDibFormat`].
//!
//! ## Non-Goals
//!
//! - Encoding ICO/CUR files
//! - Applying the AND mask to alpha-less legacy icons
//!
//! ## Usage
//!
//! ```no_run
//! use zenico::{IconInfo, Unstoppable};
//!
//! let data: &[u8] = &[]; // your ICO bytes
//!
//! // Probe the directory without decoding
//! let info = IconInfo::from_bytes(data)?;
//! for entry in &info.entries {
//!     println!("{}x{} {}bpp", entry.width, entry.height, entry.bit_count);
//! }
//!
//! // Decode the best entry for a 32px window icon, at its native size
//! let icon = zenico::get_icon_by_size(data, 32, false)?;
//!
//! // Or scale to exactly 256px and inline into HTML
//! let large = zenico::get_icon_by_size(data, 256, true)?;
//! let uri = large.to_png_data_uri()?;
//! # let _ = (icon, uri);
//! # Ok::<(), zenico::IcoError>(())
//! ```

#![forbid(unsafe_code)]

mod decode;
mod error;
mod ico;
mod info;
mod limits;
mod resample;

// Re-exports
pub use decode::{DecodeRequest, DecodedBitmap};
pub use enough::{Stop, Unstoppable};
pub use error::IcoError;
pub use ico::dir::{DirectoryEntry, ResourceType};
pub use ico::payload::{PNG_SIGNATURE, PayloadKind, RawPayload, extract_payload};
pub use ico::select::select_entry;
pub use info::IconInfo;
pub use limits::Limits;
pub use resample::resample;

/// Decode the entry of `data` that best fits `target_size`.
///
/// With `scale_to_target`, the result is resampled to exactly
/// `target_size` x `target_size`; otherwise it keeps the entry's native size.
/// A zero `target_size` fails with [`IcoError::InvalidTargetSize`].
pub fn get_icon_by_size(
    data: &[u8],
    target_size: u32,
    scale_to_target: bool,
) -> Result<DecodedBitmap, IcoError> {
    DecodeRequest::new(data)
        .scale_to_target(scale_to_target)
        .decode(target_size, Unstoppable)
}

/// Decode the entry of `data` at directory position `index`.
pub fn decode_entry(
    data: &[u8],
    index: usize,
    stop: impl Stop,
) -> Result<DecodedBitmap, IcoError> {
    DecodeRequest::new(data).decode_entry(index, stop)
}
