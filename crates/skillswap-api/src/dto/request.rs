//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use skillswap_core::error::AppError;
use skillswap_core::result::AppResult;
use skillswap_core::types::TimeInterval;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Plaintext password. The minimum length is enforced by the handler
    /// from `AuthConfig::password_min_length`.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Availability slot creation body.
///
/// Bounds are optional at the serde level so a missing field produces a
/// field-level validation error rather than a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAvailabilityRequest {
    /// Slot start.
    pub start: Option<DateTime<Utc>>,
    /// Slot end.
    pub end: Option<DateTime<Utc>>,
}

impl CreateAvailabilityRequest {
    /// Converts the body into an interval, rejecting missing bounds.
    pub fn into_interval(self) -> AppResult<TimeInterval> {
        let start = self
            .start
            .ok_or_else(|| AppError::validation("start: start is required"))?;
        let end = self
            .end
            .ok_or_else(|| AppError::validation("end: end is required"))?;
        Ok(TimeInterval::new(start, end))
    }
}
