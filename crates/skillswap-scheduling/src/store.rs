//! In-memory availability repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use skillswap_core::result::AppResult;
use skillswap_core::traits::AvailabilityRepository;
use skillswap_core::types::AvailabilitySlot;

/// Default [`AvailabilityRepository`] implementation used for wiring and
/// tests until a database-backed repository is plugged in.
#[derive(Debug, Default)]
pub struct InMemoryAvailabilityStore {
    slots: RwLock<Vec<AvailabilitySlot>>,
}

impl InMemoryAvailabilityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AvailabilityRepository for InMemoryAvailabilityStore {
    async fn list_for_member(&self, member_id: Uuid) -> AppResult<Vec<AvailabilitySlot>> {
        let slots = self.slots.read().await;
        Ok(slots
            .iter()
            .filter(|slot| slot.member_id == member_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, slot: AvailabilitySlot) -> AppResult<AvailabilitySlot> {
        let mut slots = self.slots.write().await;
        slots.push(slot.clone());
        Ok(slot)
    }
}
