//! Member account type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered member of the platform.
///
/// Persistence is behind the [`MemberDirectory`](crate::traits::MemberDirectory)
/// port; this type carries only what the auth subsystem needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Member ID.
    pub id: Uuid,
    /// Login email, stored lowercase.
    pub email: String,
    /// Opaque one-way password hash.
    pub password_hash: String,
    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Creates a new member with a fresh ID.
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}
