//! One party's calendar and the two-party meeting search built on it.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::freetime::{derive_free_time_with, EmptySchedulePolicy};
use crate::intersect::find_meeting_possibilities;
use crate::time::Interval;

/// A party's busy intervals together with the day range they will meet in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    /// Booked intervals, in any order.
    #[serde(default)]
    pub busy: Vec<Interval>,
    /// Earliest and latest time the party is available at all.
    pub range: Interval,
}

impl Calendar {
    pub fn new(busy: Vec<Interval>, range: Interval) -> Self {
        Calendar { busy, range }
    }

    /// Free intervals of this calendar; see [`derive_free_time_with`].
    pub fn free_time(&self, policy: EmptySchedulePolicy) -> Result<Vec<Interval>> {
        derive_free_time_with(&self.busy, self.range, policy)
    }
}

/// Derive both parties' free time and intersect it.
///
/// # Errors
/// Propagates `SchedulerError::InvalidInterval` and `SchedulerError::EmptySchedule`
/// from either calendar.
pub fn find_meeting_windows(
    first: &Calendar,
    second: &Calendar,
    duration_minutes: u32,
    policy: EmptySchedulePolicy,
) -> Result<Vec<Interval>> {
    let free_first = first.free_time(policy)?;
    let free_second = second.free_time(policy)?;
    Ok(find_meeting_possibilities(
        &free_first,
        &free_second,
        duration_minutes,
    ))
}
