//! Intersect two parties' free time into candidate meeting windows.
//!
//! Performs pairwise comparison between two free-interval lists. Unlike busy
//! conflict detection, touching intervals (one ends exactly when the other
//! starts) do count as overlapping; the resulting zero-length window is then
//! dropped by the duration filter unless the requested duration is zero.

use tracing::{debug, trace};

use crate::duration::meets_duration;
use crate::time::Interval;

/// Find every overlap between `free_a` and `free_b` at least `duration_minutes` long.
///
/// Two intervals overlap when `b.end >= a.start && a.end >= b.start`; the
/// window is `max(a.start, b.start)..min(a.end, b.end)`.
///
/// Output follows nested iteration order: all windows for the first entry of
/// `free_a`, then the second, and so on. Use
/// [`find_meeting_possibilities_sorted`] for chronological output.
pub fn find_meeting_possibilities(
    free_a: &[Interval],
    free_b: &[Interval],
    duration_minutes: u32,
) -> Vec<Interval> {
    let mut candidates = Vec::new();

    for a in free_a {
        for b in free_b {
            if b.end >= a.start && a.end >= b.start {
                let window = Interval {
                    start: a.start.max(b.start),
                    end: a.end.min(b.end),
                };
                trace!(%a, %b, %window, "candidate window");
                candidates.push(window);
            }
        }
    }

    let total = candidates.len();
    candidates.retain(|window| meets_duration(window, duration_minutes));

    debug!(
        candidates = total,
        kept = candidates.len(),
        duration_minutes,
        "intersected free time"
    );
    candidates
}

/// Same windows as [`find_meeting_possibilities`], sorted by start then end,
/// with exact duplicates removed.
pub fn find_meeting_possibilities_sorted(
    free_a: &[Interval],
    free_b: &[Interval],
    duration_minutes: u32,
) -> Vec<Interval> {
    let mut windows = find_meeting_possibilities(free_a, free_b, duration_minutes);
    windows.sort();
    windows.dedup();
    windows
}
