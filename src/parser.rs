/*!
 * Best-effort SRT/VTT parsing.
 *
 * Raw subtitle text is split into candidate cue blocks, then each block
 * is reduced to a time range plus cleaned cue text. Real-world subtitle
 * files are often slightly non-conformant, so the parser never raises
 * for a malformed block: it drops the block and moves on. Callers that
 * care about "nothing parsed at all" check the returned sequence.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::subtitle::{SubtitleEntry, Timecode};
use crate::timecode;

// One or more blank lines separate cue blocks in both SRT and VTT.
static BLOCK_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

// VTT comment lines, dropped before block splitting. NOTE must be the
// whole line or be followed by whitespace, so cue text that merely
// starts with the letters NOTE survives.
static NOTE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^NOTE(\s[^\n]*)?$\n?").unwrap()
});

// Inline markup such as <b>, <i>, <c.classname>, positioning tags.
static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Split raw subtitle text into candidate cue blocks.
///
/// Tolerates both SRT and VTT framing: a leading `WEBVTT` header line is
/// dropped, `NOTE` comment lines are removed, and the remainder is split
/// on blank-line boundaries. Blocks that trim to nothing are dropped.
pub fn split_blocks(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();

    let body = if trimmed.starts_with("WEBVTT") {
        trimmed.split_once('\n').map_or("", |(_, rest)| rest)
    } else {
        trimmed
    };

    let body = NOTE_LINE.replace_all(body, "");

    BLOCK_SEPARATOR
        .split(&body)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(String::from)
        .collect()
}

/// Parse raw SRT/VTT text into an ordered sequence of subtitle entries.
///
/// A pure function of its input: re-parsing produces a wholly new
/// sequence. Blocks without a usable `-->` line, with unparseable
/// timecodes, or with no text left after markup stripping are omitted
/// silently. `index` is assigned as the 1-based position among surviving
/// entries - cue numbers in the file itself can be missing or duplicated
/// and are not trusted.
///
/// Empty input, or input with zero valid cues, yields an empty sequence
/// rather than an error.
pub fn parse(raw: &str) -> Vec<SubtitleEntry> {
    let mut entries = Vec::new();

    for block in split_blocks(raw) {
        match parse_block(&block) {
            Some((start_time, end_time, text)) => {
                entries.push(SubtitleEntry::new(entries.len() + 1, start_time, end_time, text));
            }
            None => {
                debug!(
                    "Skipping malformed cue block: {:?}",
                    block.lines().next().unwrap_or("")
                );
            }
        }
    }

    entries
}

/// Reduce one cue block to (start, end, cleaned text), or None if the
/// block is unusable.
fn parse_block(block: &str) -> Option<(Timecode, Timecode, String)> {
    let lines: Vec<&str> = block.lines().map(str::trim).collect();

    // An SRT block starts with a bare numeric index; a VTT block may start
    // directly with the time-range line. Searching for the delimiter
    // handles both.
    let time_idx = lines.iter().position(|line| line.contains("-->"))?;
    let (start_str, end_str) = lines[time_idx].split_once("-->")?;

    let start_time = match timecode::to_seconds(start_str) {
        Ok(t) => t,
        Err(e) => {
            debug!("Dropping cue block: {}", e);
            return None;
        }
    };
    let end_time = match timecode::to_seconds(end_str) {
        Ok(t) => t,
        Err(e) => {
            debug!("Dropping cue block: {}", e);
            return None;
        }
    };

    // Everything after the delimiter line is cue text, up to the next
    // blank line, the next delimiter line, or the next index+delimiter
    // pair (malformed files sometimes omit the blank line between cues).
    let mut text_lines = Vec::new();
    for (offset, line) in lines[time_idx + 1..].iter().enumerate() {
        if line.is_empty() || line.contains("-->") {
            break;
        }
        if is_bare_index(line)
            && lines
                .get(time_idx + 1 + offset + 1)
                .is_some_and(|next| next.contains("-->"))
        {
            break;
        }

        let cleaned = clean_cue_text(line);
        if !cleaned.is_empty() {
            text_lines.push(cleaned);
        }
    }

    let text = text_lines.join(" ");
    if text.is_empty() {
        return None;
    }

    Some((start_time, end_time, text))
}

/// Strip inline markup and decode the five common HTML entities.
fn clean_cue_text(line: &str) -> String {
    MARKUP_TAG
        .replace_all(line, "")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .trim()
        .to_string()
}

fn is_bare_index(line: &str) -> bool {
    line.parse::<usize>().is_ok()
}
