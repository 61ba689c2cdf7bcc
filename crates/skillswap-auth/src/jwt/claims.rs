//! JWT claims structure used in access and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity payload embedded in every token. Immutable once signed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the member ID.
    pub sub: Uuid,
    /// Login email at the time of issuance.
    pub email: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token type: "access" or "refresh".
    pub token_type: TokenType,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived access token presented on every protected call.
    Access,
    /// Long-lived refresh token used only to mint a new access token.
    Refresh,
}

impl Claims {
    /// Returns the member ID from the subject claim.
    pub fn member_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_expiring_in(seconds: i64) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            sub: Uuid::new_v4(),
            email: "member@example.com".to_string(),
            iat: now,
            exp: now + seconds,
            token_type: TokenType::Access,
        }
    }

    #[test]
    fn test_is_expired() {
        assert!(!claims_expiring_in(60).is_expired());
        assert!(claims_expiring_in(-60).is_expired());
    }

    #[test]
    fn test_token_type_serde_form() {
        let json = serde_json::to_string(&TokenType::Refresh).expect("serialize");
        assert_eq!(json, "\"refresh\"");
    }
}
