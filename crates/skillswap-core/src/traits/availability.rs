//! Availability slot persistence port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;
use crate::types::AvailabilitySlot;

/// Port to wherever availability slots are persisted.
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Returns every slot owned by the given member.
    async fn list_for_member(&self, member_id: Uuid) -> AppResult<Vec<AvailabilitySlot>>;

    /// Persists a new slot.
    async fn insert(&self, slot: AvailabilitySlot) -> AppResult<AvailabilitySlot>;
}
