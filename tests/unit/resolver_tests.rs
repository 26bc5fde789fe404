/*!
 * Tests for active-cue resolution
 */

use dualsub::ActiveCueResolver;
use dualsub::resolver::seek_target;
use dualsub::subtitle::DualSubtitleEntry;

use crate::common::generate_dual_entries;

/// Test basic containment resolution
#[test]
fn test_resolve_withTimeInsideEntry_shouldReturnItsIndex() {
    let entries = generate_dual_entries(10);
    let mut resolver = ActiveCueResolver::new();

    // entry 4 covers [12.0, 14.5]
    assert_eq!(resolver.resolve(&entries, 13.0), Some(4));
}

/// Test the interval is closed at the exact end boundary
#[test]
fn test_resolve_withTimeAtExactEnd_shouldStillBeActive() {
    let entries = generate_dual_entries(10);
    let mut resolver = ActiveCueResolver::new();

    // entry 2 covers [6.0, 8.5]
    assert_eq!(resolver.resolve(&entries, 8.5), Some(2));
}

/// Test a gap returns None while the display index is retained
#[test]
fn test_resolve_withGapAfterHit_shouldRetainDisplayIndex() {
    let entries = generate_dual_entries(10);
    let mut resolver = ActiveCueResolver::new();

    assert_eq!(resolver.resolve(&entries, 7.0), Some(2));

    // 8.7 falls in the gap between entry 2 (ends 8.5) and entry 3 (starts 9.0)
    assert_eq!(resolver.resolve(&entries, 8.7), None);
    assert_eq!(resolver.display_index(), Some(2));
}

/// Test a gap before any successful resolution keeps the display empty
#[test]
fn test_resolve_withGapBeforeAnyHit_shouldHaveNoDisplayIndex() {
    let entries = generate_dual_entries(10);
    let mut resolver = ActiveCueResolver::new();

    assert_eq!(resolver.resolve(&entries, 2.7), None);
    assert_eq!(resolver.display_index(), None);
}

/// Test monotonically advancing ticks track the timeline
#[test]
fn test_resolve_withSequentialTicks_shouldFollowPlayback() {
    let entries = generate_dual_entries(100);
    let mut resolver = ActiveCueResolver::new();

    let mut time = 0.0;
    while time < 150.0 {
        let resolved = resolver.resolve(&entries, time);
        let expected = entries.iter().position(|e| e.contains(time));
        assert_eq!(resolved, expected, "diverged at t={}", time);
        time += 0.25;
    }
}

/// Test a backward seek far behind the cached index resolves correctly
#[test]
fn test_resolve_withBackwardSeek_shouldFallBackToScan() {
    let entries = generate_dual_entries(100);
    let mut resolver = ActiveCueResolver::new();

    assert_eq!(resolver.resolve(&entries, 250.0), Some(83));
    assert_eq!(resolver.resolve(&entries, 4.0), Some(1));
}

/// Test a forward seek far ahead of the cached index resolves correctly
#[test]
fn test_resolve_withForwardSeek_shouldFallBackToScan() {
    let entries = generate_dual_entries(100);
    let mut resolver = ActiveCueResolver::new();

    assert_eq!(resolver.resolve(&entries, 1.0), Some(0));
    assert_eq!(resolver.resolve(&entries, 280.0), Some(93));
}

/// Test overlapping entries resolve to the lowest index
#[test]
fn test_resolve_withOverlappingEntries_shouldPickEarliest() {
    let entries = vec![
        DualSubtitleEntry {
            start_time: 0.0,
            end_time: 5.0,
            text_en: "first".to_string(),
            text_vi: String::new(),
        },
        DualSubtitleEntry {
            start_time: 4.0,
            end_time: 8.0,
            text_en: "second".to_string(),
            text_vi: String::new(),
        },
    ];
    let mut resolver = ActiveCueResolver::new();

    assert_eq!(resolver.resolve(&entries, 4.5), Some(0));

    // Past the first entry's end the second one takes over, and a return
    // into the overlap must yield the earliest match again.
    assert_eq!(resolver.resolve(&entries, 6.0), Some(1));
    assert_eq!(resolver.resolve(&entries, 4.5), Some(0));
}

/// Test a backward jump into a long earlier cue that overlaps later
/// short ones resolves to the lowest index, exactly like a fresh scan
#[test]
fn test_resolve_withBackwardJumpIntoLongEarlierCue_shouldPickLowest() {
    let cue = |start: f64, end: f64| DualSubtitleEntry {
        start_time: start,
        end_time: end,
        text_en: String::new(),
        text_vi: String::new(),
    };
    // A long cue spanning two later short ones; time-ordered input with
    // overlaps is tolerated, so the lowest-index rule must still hold.
    let entries = vec![cue(0.0, 20.0), cue(1.0, 2.0), cue(3.0, 30.0)];
    let mut resolver = ActiveCueResolver::new();

    assert_eq!(resolver.resolve(&entries, 25.0), Some(2));

    // 10.0 is contained by entries 0 and 2 but not the one between
    // them; the cached index must not shadow the earlier match.
    assert_eq!(resolver.resolve(&entries, 10.0), Some(0));
    assert_eq!(resolver.resolve(&entries, 1.5), Some(0));
}

/// Test reset forgets the cached index
#[test]
fn test_reset_afterResolution_shouldClearDisplayIndex() {
    let entries = generate_dual_entries(10);
    let mut resolver = ActiveCueResolver::new();

    resolver.resolve(&entries, 7.0);
    assert!(resolver.display_index().is_some());

    resolver.reset();
    assert_eq!(resolver.display_index(), None);
}

/// Test resolution against an empty timeline
#[test]
fn test_resolve_withNoEntries_shouldReturnNone() {
    let mut resolver = ActiveCueResolver::new();
    assert_eq!(resolver.resolve(&[], 1.0), None);
    assert_eq!(resolver.display_index(), None);
}

/// Test a stale cached index beyond a shorter replacement sequence is
/// harmless even without an explicit reset
#[test]
fn test_resolve_withStaleCacheBeyondEntries_shouldNotPanic() {
    let long = generate_dual_entries(100);
    let short = generate_dual_entries(3);
    let mut resolver = ActiveCueResolver::new();

    assert_eq!(resolver.resolve(&long, 250.0), Some(83));
    assert_eq!(resolver.resolve(&short, 1.0), Some(0));
}

/// Test clicking an entry requests a seek to its start time
#[test]
fn test_seekTarget_withValidIndex_shouldReturnStartTime() {
    let entries = generate_dual_entries(10);

    assert_eq!(seek_target(&entries, 4), Some(12.0));
    assert_eq!(seek_target(&entries, 40), None);
}
