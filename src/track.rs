use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::SubtitleError;
use crate::parser;
use crate::subtitle::SubtitleEntry;

// @module: Per-language subtitle track container

/// The full ordered sequence of cues for one language, tagged with its
/// language code.
///
/// A track is an immutable snapshot: loading a new raw source produces a
/// new track replacing the old, never an in-place update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtitleTrack {
    /// Language code ("en", "vi", ...)
    pub language: String,

    /// Ordered subtitle entries
    pub entries: Vec<SubtitleEntry>,
}

impl SubtitleTrack {
    /// Create an empty track for a language.
    pub fn new(language: impl Into<String>) -> Self {
        SubtitleTrack {
            language: language.into(),
            entries: Vec::new(),
        }
    }

    /// Parse raw SRT/VTT text into a track.
    ///
    /// Parsing is best-effort and never fails; a non-empty source that
    /// yields zero cues is logged as a warning, since it usually means
    /// the wrong file was loaded rather than an empty track.
    pub fn from_raw(language: impl Into<String>, raw: &str) -> Self {
        let language = language.into();
        let entries = parser::parse(raw);

        if entries.is_empty() && !raw.trim().is_empty() {
            warn!(
                "No valid subtitle entries found in non-empty input for language {}",
                language
            );
        }
        Self::warn_on_overlaps(&language, &entries);

        SubtitleTrack { language, entries }
    }

    /// Read and parse a subtitle file.
    pub fn from_file(language: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read subtitle file: {}", path.display()))?;
        Ok(Self::from_raw(language, &raw))
    }

    /// Serialize the entries as the camelCase JSON array the hosting
    /// application stores as a subtitle content column.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.entries).context("Failed to serialize subtitle entries")
    }

    /// Rebuild a track from a stored JSON entry array.
    pub fn from_json(language: impl Into<String>, json: &str) -> Result<Self> {
        let entries: Vec<SubtitleEntry> =
            serde_json::from_str(json).context("Failed to parse stored subtitle entries")?;
        Ok(SubtitleTrack {
            language: language.into(),
            entries,
        })
    }

    /// Fail with [`SubtitleError::NoEntries`] if the track is empty.
    /// Callers that treat an empty track as acceptable simply skip this.
    pub fn require_entries(&self) -> std::result::Result<(), SubtitleError> {
        if self.entries.is_empty() {
            return Err(SubtitleError::NoEntries);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Overlapping cues are tolerated (the resolver picks the earliest
    // match) but worth surfacing in the log.
    fn warn_on_overlaps(language: &str, entries: &[SubtitleEntry]) {
        let overlap_count = entries
            .windows(2)
            .filter(|pair| pair[0].end_time > pair[1].start_time)
            .count();

        if overlap_count > 0 {
            warn!(
                "Found {} overlapping subtitle entries in {} track",
                overlap_count, language
            );
        }
    }
}

impl fmt::Display for SubtitleTrack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Track")?;
        writeln!(f, "Language: {}", self.language)?;
        writeln!(f, "Entries: {}", self.entries.len())?;
        Ok(())
    }
}
