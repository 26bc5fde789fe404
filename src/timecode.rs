/*!
 * Timecode parsing and formatting.
 *
 * Subtitle sources use two near-identical textual conventions for
 * timestamps: SRT (`HH:MM:SS,mmm`) and VTT (`HH:MM:SS.mmm`, with an
 * optional shortened `MM:SS.mmm` form). Everything downstream works in
 * fractional seconds, so this module is the single place where text
 * becomes numbers and back.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;
use crate::subtitle::Timecode;

// Accepts HH:MM:SS,mmm / HH:MM:SS.mmm and the hour-less MM:SS variant.
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d{1,2}):)?(\d{1,2}):(\d{1,2})[.,](\d{1,3})$").unwrap()
});

/// Convert a textual timestamp into fractional seconds.
///
/// Both `,` (SRT) and `.` (VTT) are accepted as the fractional separator.
/// When only two colon-delimited groups precede the fraction they are
/// treated as minutes:seconds with hours = 0. The result is rounded to
/// millisecond precision to avoid binary floating-point drift.
pub fn to_seconds(text: &str) -> Result<Timecode, SubtitleError> {
    let caps = TIMECODE_REGEX
        .captures(text.trim())
        .ok_or_else(|| SubtitleError::MalformedTimecode(text.to_string()))?;

    let group = |idx: usize| -> f64 {
        caps.get(idx)
            .map_or(0.0, |m| m.as_str().parse::<f64>().unwrap_or(0.0))
    };

    let hours = group(1);
    let minutes = group(2);
    let seconds = group(3);

    // Fraction digits are a decimal fraction of a second, so "5" is 500ms.
    let frac_str = caps.get(4).map_or("0", |m| m.as_str());
    let frac = frac_str.parse::<f64>().unwrap_or(0.0)
        / 10_f64.powi(frac_str.len() as i32);

    let total = hours * 3600.0 + minutes * 60.0 + seconds + frac;
    Ok(round_millis(total))
}

/// Round a seconds value to millisecond precision.
pub fn round_millis(seconds: Timecode) -> Timecode {
    (seconds * 1000.0).round() / 1000.0
}

/// Format fractional seconds as an SRT timestamp (`HH:MM:SS,mmm`).
pub fn format_timecode(seconds: Timecode) -> String {
    let ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let secs = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Format fractional seconds as `MM:SS` for the sidebar time labels.
pub fn format_display(seconds: Timecode) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
