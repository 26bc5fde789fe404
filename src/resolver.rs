/*!
 * Active-cue resolution against a continuously advancing playback time.
 *
 * The playback surface fires a time update several times per second, so
 * resolution has to be cheap. During normal play the clock moves mostly
 * forward, which makes the previously resolved index an excellent first
 * guess: when time has not moved backward the resolver probes that index
 * and its close neighbors before falling back to a full scan, keeping
 * the average tick O(1) instead of O(n).
 *
 * Gaps between cues are common. When no entry contains the current time
 * the resolver reports "no active entry" but retains the last resolved
 * index, so the display layer can keep its window anchored instead of
 * blanking the list between cues.
 */

use crate::subtitle::{DualSubtitleEntry, Timecode};

// How many entries past the cached index to probe before a full scan.
const FORWARD_PROBE: usize = 3;

/// Resolves the currently active entry for a playback time, carrying the
/// last resolved index and time as session state.
///
/// One resolver instance belongs to one playback session over one merged
/// sequence; call [`ActiveCueResolver::reset`] when the sequence is
/// replaced wholesale.
#[derive(Debug, Default)]
pub struct ActiveCueResolver {
    last_index: Option<usize>,
    last_time: Timecode,
}

impl ActiveCueResolver {
    pub fn new() -> Self {
        ActiveCueResolver {
            last_index: None,
            last_time: 0.0,
        }
    }

    /// Resolve the active entry for `time`, if any.
    ///
    /// "Active" means the lowest-index entry whose closed interval
    /// `[start_time, end_time]` contains `time`. Returns `None` when no
    /// entry contains `time` (a gap between cues); the previously
    /// resolved index stays available via [`Self::display_index`].
    ///
    /// The cached index is only trusted while time moves forward. A
    /// backward jump goes straight to the scan: with entries ordered by
    /// start time, an entry below the cached one that stopped matching
    /// can only match again at an earlier time, so forward probing from
    /// the cache preserves the lowest-index rule while a backward seek
    /// does not. Whatever time value arrives next is authoritative.
    pub fn resolve(&mut self, entries: &[DualSubtitleEntry], time: Timecode) -> Option<usize> {
        let found = if time >= self.last_time {
            self.probe_near_cached(entries, time)
                .or_else(|| Self::scan(entries, time))
        } else {
            Self::scan(entries, time)
        };

        self.last_time = time;
        if let Some(index) = found {
            self.last_index = Some(index);
        }
        found
    }

    /// The last successfully resolved index, retained across gaps.
    pub fn display_index(&self) -> Option<usize> {
        self.last_index
    }

    /// Forget the cached state. Call when a new merged sequence replaces
    /// the old one.
    pub fn reset(&mut self) {
        self.last_index = None;
        self.last_time = 0.0;
    }

    /// Fast path for forward motion: check the cached index and the few
    /// entries after it, in order, so the first hit is the lowest match
    /// in the probed window. Entries below the cache already stopped
    /// containing an earlier time and cannot contain a later one.
    fn probe_near_cached(&self, entries: &[DualSubtitleEntry], time: Timecode) -> Option<usize> {
        let last = self.last_index.filter(|&i| i < entries.len())?;

        (last..entries.len().min(last + FORWARD_PROBE + 1))
            .find(|&candidate| entries[candidate].contains(time))
    }

    /// Slow path: linear scan from the start, first match wins.
    fn scan(entries: &[DualSubtitleEntry], time: Timecode) -> Option<usize> {
        entries.iter().position(|entry| entry.contains(time))
    }
}

/// The seek time to request when the user clicks a displayed entry:
/// that entry's start time. Out-of-range indices yield no seek.
pub fn seek_target(entries: &[DualSubtitleEntry], index: usize) -> Option<Timecode> {
    entries.get(index).map(|entry| entry.start_time)
}
