/*!
 * # dualsub - dual-language subtitle ingestion and playback sync
 *
 * A Rust library for parsing SRT/VTT subtitle text, merging two
 * independently-timed language tracks into one dual-language timeline,
 * and keeping a playback UI synchronized with a video clock.
 *
 * ## Features
 *
 * - Tolerant SRT/VTT parsing (best-effort, malformed cues are skipped)
 * - Timecode conversion for both `,` and `.` fractional separators
 * - Positional merge of a primary and secondary language track
 * - Active-cue resolution against a continuously advancing playback time,
 *   with a cached index so ordinary forward playback stays O(1)
 * - Sidebar windowing with a small lookback above the active cue
 * - JSON serialization of entries in the camelCase form used for storage
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timecode`: Timestamp parsing and formatting
 * - `subtitle`: Entry types (`SubtitleEntry`, `DualSubtitleEntry`)
 * - `parser`: Cue block splitting and subtitle text parsing
 * - `track`: Per-language track container with file/JSON loading
 * - `merge`: Dual-track positional merge
 * - `resolver`: Active-cue resolution against playback time
 * - `sidebar`: Display windowing for the scrolling subtitle list
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod errors;
pub mod merge;
pub mod parser;
pub mod resolver;
pub mod sidebar;
pub mod subtitle;
pub mod timecode;
pub mod track;

// Re-export main types for easier usage
pub use errors::SubtitleError;
pub use merge::merge_tracks;
pub use resolver::ActiveCueResolver;
pub use subtitle::{DualSubtitleEntry, SubtitleEntry, Timecode};
pub use track::SubtitleTrack;
