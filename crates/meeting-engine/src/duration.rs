//! Minimum-duration check for candidate windows.

use crate::time::Interval;

/// True when `interval` is at least `duration_minutes` long.
///
/// The boundary is inclusive. Malformed intervals (`start > end`) have a
/// negative length and are always rejected rather than raising.
pub fn meets_duration(interval: &Interval, duration_minutes: u32) -> bool {
    interval.length_minutes() >= i64::from(duration_minutes)
}
