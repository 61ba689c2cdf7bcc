//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use skillswap_core::types::AvailabilitySlot;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Login/registration response. The tokens are also set as cookies; the
/// body copy exists for non-cookie clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
    /// Member info.
    pub member: MemberResponse,
}

/// Refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    /// The freshly minted access token.
    pub access_token: String,
    /// Its expiration.
    pub expires_at: DateTime<Utc>,
}

/// Member summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    /// Member ID.
    pub id: Uuid,
    /// Login email.
    pub email: String,
}

/// Availability slot for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResponse {
    /// Slot ID.
    pub id: Uuid,
    /// Owning member.
    pub member_id: Uuid,
    /// Slot start.
    pub start: DateTime<Utc>,
    /// Slot end.
    pub end: DateTime<Utc>,
}

impl From<AvailabilitySlot> for SlotResponse {
    fn from(slot: AvailabilitySlot) -> Self {
        Self {
            id: slot.id,
            member_id: slot.member_id,
            start: slot.interval.start,
            end: slot.interval.end,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}
