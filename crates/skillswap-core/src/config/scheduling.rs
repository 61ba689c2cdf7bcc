//! Availability scheduling configuration.

use serde::{Deserialize, Serialize};

/// Configuration for availability slot validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// How interval bounds are compared when detecting overlaps:
    /// `"time_of_day"` discards the calendar date (recurring weekly
    /// availability), `"absolute"` compares full timestamps.
    #[serde(default = "default_overlap_mode")]
    pub overlap_mode: String,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            overlap_mode: default_overlap_mode(),
        }
    }
}

fn default_overlap_mode() -> String {
    "time_of_day".to_string()
}
