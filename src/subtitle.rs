use std::fmt;

use serde::{Deserialize, Serialize};

use crate::timecode;

// @module: Subtitle entry types shared by the whole pipeline

/// Playback/cue time as a non-negative fractional count of seconds,
/// precise to the millisecond.
pub type Timecode = f64;

/// Single time-coded subtitle entry for one language track.
///
/// Entries are immutable once produced by the parser; re-parsing a raw
/// subtitle source yields a wholly new sequence replacing the old one.
/// Serialized field names are camelCase to match the JSON form the
/// hosting application stores per language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleEntry {
    /// 1-based position among surviving entries (original cue numbers
    /// in the file are not trusted)
    pub index: usize,

    /// Start time in seconds
    pub start_time: Timecode,

    /// End time in seconds, >= start_time for well-formed cues
    pub end_time: Timecode,

    /// Cue text with markup stripped and common entities decoded
    pub text: String,
}

impl SubtitleEntry {
    pub fn new(index: usize, start_time: Timecode, end_time: Timecode, text: String) -> Self {
        SubtitleEntry {
            index,
            start_time,
            end_time,
            text,
        }
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(
            f,
            "{} --> {}",
            timecode::format_timecode(self.start_time),
            timecode::format_timecode(self.end_time)
        )?;
        writeln!(f, "{}", self.text)
    }
}

/// One entry of the merged dual-language timeline.
///
/// Timing always comes from the primary (source-language) track; the
/// secondary text is empty when that track had no cue at this position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DualSubtitleEntry {
    /// Start time in seconds
    pub start_time: Timecode,

    /// End time in seconds
    pub end_time: Timecode,

    /// Source-language (English) text
    pub text_en: String,

    /// Target-language (Vietnamese) text, possibly empty
    pub text_vi: String,
}

impl DualSubtitleEntry {
    /// Whether `time` falls inside this entry's interval.
    ///
    /// The interval is closed at both ends: an entry is still active at
    /// its exact end boundary, and an overlapping successor only wins
    /// once this entry no longer matches.
    pub fn contains(&self, time: Timecode) -> bool {
        time >= self.start_time && time <= self.end_time
    }
}
