//! Time interval type used for availability scheduling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// A `(start, end)` pair representing a span of time.
///
/// Whether the calendar date participates in overlap comparison is decided
/// by the slot checker, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Inclusive start of the interval.
    pub start: DateTime<Utc>,
    /// Exclusive end of the interval.
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    /// Creates a new interval without validating its bounds.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Checks the `start < end` precondition callers must enforce before
    /// handing an interval to the overlap checker.
    pub fn validate(&self) -> AppResult<()> {
        if self.start >= self.end {
            return Err(AppError::validation("end must be after start"));
        }
        Ok(())
    }
}
