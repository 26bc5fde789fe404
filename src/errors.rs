/*!
 * Error types for the dualsub library.
 *
 * This module contains custom error types for subtitle processing,
 * using the thiserror crate for ergonomic error definitions.
 *
 * Note that the parsing layer itself never raises for partially malformed
 * input: blocks that cannot be understood are dropped entry by entry.
 * These types exist for the few places where a caller opts into an
 * explicit failure (a timecode that matches no accepted pattern, or a
 * track that parsed to zero entries from non-empty input).
 */

use thiserror::Error;

/// Errors that can occur during subtitle processing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubtitleError {
    /// A timecode string matched neither `HH:MM:SS[.,]mmm` nor `MM:SS[.,]mmm`
    #[error("Malformed timecode: {0:?}")]
    MalformedTimecode(String),

    /// Non-empty subtitle text produced zero usable cues
    #[error("No subtitle entries could be parsed from non-empty input")]
    NoEntries,
}
