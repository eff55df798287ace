//! Best-fit entry selection.

use super::dir::DirectoryEntry;

/// Pick the entry to decode for a `target` x `target` request.
///
/// Prefers the smallest entry at least `target` on both sides; when none is
/// large enough, falls back to the largest entry overall. Ties go to the
/// entry listed first in the directory. Returns `None` only for an empty
/// slice.
pub fn select_entry(entries: &[DirectoryEntry], target: u32) -> Option<&DirectoryEntry> {
    let fits = |e: &&DirectoryEntry| u32::from(e.width) >= target && u32::from(e.height) >= target;

    // min_by_key keeps the first of equal minima
    if let Some(best) = entries.iter().filter(fits).min_by_key(|e| e.area()) {
        log::debug!(
            "selected ICO entry {} ({}x{}) for target {target}",
            best.index,
            best.width,
            best.height
        );
        return Some(best);
    }

    // max_by_key would keep the last of equal maxima
    let largest = entries
        .iter()
        .reduce(|best, e| if e.area() > best.area() { e } else { best })?;
    log::debug!(
        "no ICO entry covers {target}px, falling back to largest entry {} ({}x{})",
        largest.index,
        largest.width,
        largest.height
    );
    Some(largest)
}
