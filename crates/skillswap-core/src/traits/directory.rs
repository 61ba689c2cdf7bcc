//! Member lookup and creation port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;
use crate::types::Member;

/// Port to wherever member accounts are persisted.
///
/// Emails are expected to be stored and queried lowercase.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Finds a member by login email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>>;

    /// Finds a member by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Member>>;

    /// Persists a new member.
    async fn insert(&self, member: Member) -> AppResult<Member>;
}
