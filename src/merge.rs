use log::warn;

use crate::subtitle::{DualSubtitleEntry, SubtitleEntry};

// @module: Positional merge of two language tracks into one timeline

/// Align two independently parsed subtitle sequences into one sequence
/// of dual-language entries.
///
/// The merge is positional: entry `i` of the output takes its timing and
/// first-language text from `primary[i]`, and its second-language text
/// from `secondary[i]` when that track has an entry there, else the
/// empty string. The output length always equals the primary length -
/// the primary track is authoritative for timing. This assumes both
/// tracks share cue boundaries; timestamp-based alignment of tracks
/// re-segmented by translation is out of scope.
///
/// Never fails: a mismatched secondary length is absorbed, not reported.
pub fn merge_tracks(
    primary: &[SubtitleEntry],
    secondary: &[SubtitleEntry],
) -> Vec<DualSubtitleEntry> {
    if primary.len() != secondary.len() {
        warn!(
            "Track lengths differ ({} primary vs {} secondary); trailing entries will have empty secondary text",
            primary.len(),
            secondary.len()
        );
    }

    primary
        .iter()
        .enumerate()
        .map(|(i, entry)| DualSubtitleEntry {
            start_time: entry.start_time,
            end_time: entry.end_time,
            text_en: entry.text.clone(),
            text_vi: secondary.get(i).map_or(String::new(), |s| s.text.clone()),
        })
        .collect()
}
