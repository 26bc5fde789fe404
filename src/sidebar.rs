use crate::subtitle::DualSubtitleEntry;

// @module: Display windowing for the scrolling subtitle list

/// How many entries of lookback to keep above the active cue.
pub const LOOKBACK: usize = 2;

/// Compute the visible window of entries for the sidebar.
///
/// With no active (or previously active) entry the full sequence is
/// shown. Otherwise the window starts `LOOKBACK` entries above the
/// active one, clamped to the start, and runs to the end of the
/// sequence - the UI scrolls within the slice, so there is no upper
/// bound. This keeps the active cue near the top of a small lookback
/// as playback advances.
pub fn window(entries: &[DualSubtitleEntry], active_index: Option<usize>) -> &[DualSubtitleEntry] {
    match active_index {
        Some(index) => {
            let start = index.saturating_sub(LOOKBACK).min(entries.len());
            &entries[start..]
        }
        None => entries,
    }
}
