//! Error types for meeting-engine operations.

use thiserror::Error;

use crate::time::TimePoint;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// An interval whose start lies after its end.
    #[error("Invalid interval: start {start} is after end {end}")]
    InvalidInterval { start: TimePoint, end: TimePoint },

    /// The free-time deriver was handed no busy intervals under the `Reject` policy.
    #[error("Empty schedule: at least one busy interval is required")]
    EmptySchedule,

    #[error("Invalid time: {0}")]
    InvalidTime(String),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
