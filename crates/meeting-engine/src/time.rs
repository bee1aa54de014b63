//! Wall-clock value types: [`TimePoint`] and [`Interval`].
//!
//! Times are stored as minutes since midnight so ordering never depends on how a
//! time was written (`9:00` and `09:00` are the same point). Text parsing goes
//! through `chrono`, which accepts both padded and unpadded hours; minutes are
//! always two digits.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time within a single day, at minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimePoint(u16);

impl TimePoint {
    /// Build a time from hour (0–23) and minute (0–59) components.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(SchedulerError::InvalidTime(format!(
                "{}:{:02} is outside 00:00-23:59",
                hour, minute
            )));
        }
        Ok(TimePoint((hour * 60 + minute) as u16))
    }

    /// Build a time from a count of minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(SchedulerError::InvalidTime(format!(
                "{} minutes is past the end of the day",
                minutes
            )));
        }
        Ok(TimePoint(minutes))
    }

    /// Total minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u32 {
        u32::from(self.0 / 60)
    }

    pub fn minute(self) -> u32 {
        u32::from(self.0 % 60)
    }

    pub fn to_naive_time(self) -> NaiveTime {
        // Components are range-checked on construction.
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or(NaiveTime::MIN)
    }
}

/// Seconds and sub-seconds are truncated.
impl From<NaiveTime> for TimePoint {
    fn from(time: NaiveTime) -> Self {
        TimePoint((time.hour() * 60 + time.minute()) as u16)
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimePoint {
    type Err = SchedulerError;

    /// Parse `H:MM` or `HH:MM`. Minutes must always have two digits.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let two_digit_minutes = trimmed
            .split_once(':')
            .is_some_and(|(_, minute)| minute.len() == 2);
        if !two_digit_minutes {
            let message = format!("'{}': expected H:MM or HH:MM", trimmed);
            return Err(SchedulerError::InvalidTime(message));
        }
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .map(TimePoint::from)
            .map_err(|e| SchedulerError::InvalidTime(format!("'{}': {}", trimmed, e)))
    }
}

impl TryFrom<String> for TimePoint {
    type Error = SchedulerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimePoint> for String {
    fn from(time: TimePoint) -> Self {
        time.to_string()
    }
}

/// A span of time between two [`TimePoint`]s.
///
/// The same shape serves as a busy block, a free block, a day range and a
/// candidate meeting window. Fields are public so malformed values
/// (`start > end`) can be represented; [`Interval::new`] rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: TimePoint,
    pub end: TimePoint,
}

impl Interval {
    /// Build an interval, rejecting `start > end`.
    pub fn new(start: TimePoint, end: TimePoint) -> Result<Self> {
        let interval = Interval { start, end };
        interval.validate()?;
        Ok(interval)
    }

    /// Check `start <= end`.
    ///
    /// # Errors
    /// Returns `SchedulerError::InvalidInterval` when the start lies after the end.
    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(SchedulerError::InvalidInterval {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Signed length in minutes; negative when `start > end`.
    pub fn length_minutes(&self) -> i64 {
        i64::from(self.end.minutes()) - i64::from(self.start.minutes())
    }

    /// True when `other` lies entirely within `self` (bounds inclusive).
    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for Interval {
    type Err = SchedulerError;

    /// Parse `HH:MM-HH:MM`; the result is validated.
    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s.split_once('-').ok_or_else(|| {
            SchedulerError::InvalidTime(format!("'{}': expected START-END", s.trim()))
        })?;
        Interval::new(start.parse()?, end.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_does_not_affect_ordering() {
        let unpadded: TimePoint = "9:00".parse().unwrap();
        let padded: TimePoint = "09:00".parse().unwrap();
        let later: TimePoint = "10:00".parse().unwrap();
        assert_eq!(unpadded, padded);
        assert!(unpadded < later);
    }

    #[test]
    fn display_is_zero_padded() {
        let t = TimePoint::new(9, 5).unwrap();
        assert_eq!(t.to_string(), "09:05");
        assert_eq!(t.minutes(), 545);
    }

    #[test]
    fn out_of_range_components_rejected() {
        assert!(TimePoint::new(24, 0).is_err());
        assert!(TimePoint::new(12, 60).is_err());
        assert!(TimePoint::from_minutes(1440).is_err());
        assert!("25:00".parse::<TimePoint>().is_err());
        assert!("noon".parse::<TimePoint>().is_err());
    }

    #[test]
    fn minutes_need_two_digits() {
        assert!("9:5".parse::<TimePoint>().is_err());
        assert!("09:5".parse::<TimePoint>().is_err());
        assert!("9:005".parse::<TimePoint>().is_err());
        assert!("9:00:30".parse::<TimePoint>().is_err());
        assert_eq!("9:05".parse::<TimePoint>().unwrap().to_string(), "09:05");
    }

    #[test]
    fn naive_time_conversion_truncates_seconds() {
        let naive = NaiveTime::from_hms_opt(14, 30, 59).unwrap();
        let t = TimePoint::from(naive);
        assert_eq!(t.to_string(), "14:30");
        assert_eq!(
            t.to_naive_time(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap()
        );
    }

    #[test]
    fn interval_new_rejects_reversed_bounds() {
        let a = TimePoint::new(10, 0).unwrap();
        let b = TimePoint::new(9, 0).unwrap();
        assert_eq!(
            Interval::new(a, b),
            Err(SchedulerError::InvalidInterval { start: a, end: b })
        );
        assert!(Interval::new(b, b).is_ok());
    }

    #[test]
    fn interval_parse_and_display() {
        let interval: Interval = "9:00-10:30".parse().unwrap();
        assert_eq!(interval.to_string(), "09:00-10:30");
        assert_eq!(interval.length_minutes(), 90);
        assert!("10:30-9:00".parse::<Interval>().is_err());
        assert!("10:30".parse::<Interval>().is_err());
    }

    #[test]
    fn malformed_interval_has_negative_length() {
        let interval = Interval {
            start: TimePoint::new(11, 0).unwrap(),
            end: TimePoint::new(10, 0).unwrap(),
        };
        assert_eq!(interval.length_minutes(), -60);
    }

    #[test]
    fn serde_uses_clock_strings() {
        let json = r#"{"start":"9:00","end":"10:30"}"#;
        let interval: Interval = serde_json::from_str(json).unwrap();
        assert_eq!(interval.start, TimePoint::new(9, 0).unwrap());
        assert_eq!(
            serde_json::to_string(&interval).unwrap(),
            r#"{"start":"09:00","end":"10:30"}"#
        );
        assert!(serde_json::from_str::<TimePoint>(r#""7:75""#).is_err());
    }
}
