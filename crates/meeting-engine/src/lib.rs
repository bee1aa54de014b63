//! # meeting-engine
//!
//! Find windows where two people are both free for a meeting of a given length.
//!
//! Each party supplies busy intervals within one day and the range of the day
//! they are willing to meet in. Free time is derived per party, then the two
//! free-time lists are intersected and filtered by minimum duration.
//!
//! ```rust
//! use meeting_engine::{derive_free_time, find_meeting_possibilities, Interval};
//!
//! let busy: Vec<Interval> = vec!["9:00-10:30".parse().unwrap()];
//! let free_a = derive_free_time(&busy, "9:00-12:00".parse().unwrap()).unwrap();
//! let free_b: Vec<Interval> = vec!["11:00-13:00".parse().unwrap()];
//!
//! let windows = find_meeting_possibilities(&free_a, &free_b, 30);
//! assert_eq!(windows, vec!["11:00-12:00".parse::<Interval>().unwrap()]);
//! ```
//!
//! ## Modules
//!
//! - [`time`] — `TimePoint` and `Interval` value types
//! - [`freetime`] — Busy intervals + day range → free intervals
//! - [`duration`] — Minimum-duration check
//! - [`intersect`] — Two free-time lists → candidate meeting windows
//! - [`calendar`] — Per-party `Calendar` and the two-party search
//! - [`error`] — Error types

pub mod calendar;
pub mod duration;
pub mod error;
pub mod freetime;
pub mod intersect;
pub mod time;

pub use calendar::{find_meeting_windows, Calendar};
pub use duration::meets_duration;
pub use error::SchedulerError;
pub use freetime::{derive_free_time, derive_free_time_with, EmptySchedulePolicy};
pub use intersect::{find_meeting_possibilities, find_meeting_possibilities_sorted};
pub use time::{Interval, TimePoint};
