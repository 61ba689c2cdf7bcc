//! In-memory member directory.
//!
//! Default [`MemberDirectory`] implementation used for wiring and tests
//! until a database-backed directory is plugged in.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use skillswap_core::result::AppResult;
use skillswap_core::traits::MemberDirectory;
use skillswap_core::types::Member;

/// Members keyed by ID, guarded by a single read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryMemberStore {
    members: RwLock<HashMap<Uuid, Member>>,
}

impl InMemoryMemberStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberDirectory for InMemoryMemberStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        let members = self.members.read().await;
        Ok(members.values().find(|m| m.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Member>> {
        let members = self.members.read().await;
        Ok(members.get(&id).cloned())
    }

    async fn insert(&self, member: Member) -> AppResult<Member> {
        let mut members = self.members.write().await;
        members.insert(member.id, member.clone());
        Ok(member)
    }
}
