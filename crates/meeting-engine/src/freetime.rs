//! Derive free time from one party's busy intervals.
//!
//! Sorts a working copy of the schedule by start time, walks it with a cursor
//! starting at the beginning of the day range, and emits the gaps the cursor
//! jumps over. Busy intervals are not merged; overlapping or nested blocks are
//! absorbed by never letting the cursor move backward.

use tracing::{debug, trace};

use crate::error::{Result, SchedulerError};
use crate::time::Interval;

/// What to do when a party has no busy intervals at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptySchedulePolicy {
    /// Fail with [`SchedulerError::EmptySchedule`].
    #[default]
    Reject,
    /// Treat the whole day range as free.
    WholeRangeFree,
}

/// Compute the free intervals of `schedule` inside `range`.
///
/// Uses [`EmptySchedulePolicy::Reject`]; see [`derive_free_time_with`].
///
/// # Errors
/// Returns `SchedulerError::EmptySchedule` if `schedule` is empty.
/// Returns `SchedulerError::InvalidInterval` if `range` or any busy interval has
/// its start after its end.
pub fn derive_free_time(schedule: &[Interval], range: Interval) -> Result<Vec<Interval>> {
    derive_free_time_with(schedule, range, EmptySchedulePolicy::Reject)
}

/// Compute the free intervals of `schedule` inside `range` under an explicit
/// empty-schedule policy.
///
/// The returned intervals are sorted by start, pairwise non-overlapping and lie
/// within `range`. The caller's slice is never reordered.
pub fn derive_free_time_with(
    schedule: &[Interval],
    range: Interval,
    policy: EmptySchedulePolicy,
) -> Result<Vec<Interval>> {
    range.validate()?;
    for busy in schedule {
        busy.validate()?;
    }

    if schedule.is_empty() {
        return match policy {
            EmptySchedulePolicy::Reject => Err(SchedulerError::EmptySchedule),
            EmptySchedulePolicy::WholeRangeFree if range.start < range.end => Ok(vec![range]),
            EmptySchedulePolicy::WholeRangeFree => Ok(Vec::new()),
        };
    }

    let mut busy_sorted = schedule.to_vec();
    busy_sorted.sort_by_key(|b| b.start);

    let mut free = Vec::new();
    let mut cursor = range.start;

    for busy in &busy_sorted {
        let gap_end = busy.start.min(range.end);
        if cursor < gap_end {
            trace!(start = %cursor, end = %gap_end, "free gap");
            free.push(Interval {
                start: cursor,
                end: gap_end,
            });
        }
        cursor = cursor.max(busy.end);
    }

    // Trailing gap after the last busy interval.
    if cursor < range.end {
        trace!(start = %cursor, end = %range.end, "trailing free gap");
        free.push(Interval {
            start: cursor,
            end: range.end,
        });
    }

    free.sort_by_key(|f| f.start);

    debug!(
        range = %range,
        busy = schedule.len(),
        free = free.len(),
        "derived free time"
    );
    Ok(free)
}
