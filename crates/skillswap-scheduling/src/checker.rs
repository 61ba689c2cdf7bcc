//! Pure overlap detection for time intervals.

use chrono::{DateTime, Timelike, Utc};
use tracing::warn;

use skillswap_core::config::scheduling::SchedulingConfig;
use skillswap_core::types::TimeInterval;

/// How interval bounds are compared.
///
/// Date handling is an explicit choice here, not a side effect of the
/// comparison: `TimeOfDay` models recurring weekly availability, where two
/// slots on different dates but identical clock times conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapMode {
    /// Reduce bounds to fractional hour-of-day and discard the calendar
    /// date entirely.
    TimeOfDay,
    /// Compare full timestamps.
    Absolute,
}

/// Decides whether a candidate interval conflicts with existing ones.
#[derive(Debug, Clone, Copy)]
pub struct SlotChecker {
    mode: OverlapMode,
}

impl SlotChecker {
    /// Creates a checker with the given comparison mode.
    pub fn new(mode: OverlapMode) -> Self {
        Self { mode }
    }

    /// Creates a checker from the scheduling configuration.
    ///
    /// Unknown mode strings fall back to `time_of_day`, the historical
    /// behavior.
    pub fn from_config(config: &SchedulingConfig) -> Self {
        let mode = match config.overlap_mode.as_str() {
            "time_of_day" => OverlapMode::TimeOfDay,
            "absolute" => OverlapMode::Absolute,
            other => {
                warn!(mode = other, "Unknown overlap mode, using time_of_day");
                OverlapMode::TimeOfDay
            }
        };
        Self::new(mode)
    }

    /// Returns `true` when the candidate conflicts with no existing interval.
    ///
    /// Order-independent; assumes nothing about interval validity
    /// (`start < end` is a caller precondition). Intervals that exactly
    /// touch do not conflict; identical intervals do.
    pub fn is_available(&self, existing: &[TimeInterval], candidate: &TimeInterval) -> bool {
        !existing.iter().any(|slot| self.conflicts(slot, candidate))
    }

    /// Strict half-open overlap test:
    /// `candidate.start < existing.end && candidate.end > existing.start`.
    fn conflicts(&self, existing: &TimeInterval, candidate: &TimeInterval) -> bool {
        match self.mode {
            OverlapMode::TimeOfDay => {
                hour_of_day(&candidate.start) < hour_of_day(&existing.end)
                    && hour_of_day(&candidate.end) > hour_of_day(&existing.start)
            }
            OverlapMode::Absolute => {
                candidate.start < existing.end && candidate.end > existing.start
            }
        }
    }
}

/// Fractional hour-of-day: `hours + minutes/60`, date discarded.
fn hour_of_day(t: &DateTime<Utc>) -> f64 {
    t.hour() as f64 + t.minute() as f64 / 60.0
}
