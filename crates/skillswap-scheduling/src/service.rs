//! Availability slot creation with overlap validation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use skillswap_core::error::AppError;
use skillswap_core::result::AppResult;
use skillswap_core::traits::AvailabilityRepository;
use skillswap_core::types::{AvailabilitySlot, TimeInterval};

use crate::checker::SlotChecker;

/// Validates candidate slots against a member's existing ones before they
/// are persisted.
#[derive(Clone)]
pub struct AvailabilityService {
    repository: Arc<dyn AvailabilityRepository>,
    checker: SlotChecker,
}

impl std::fmt::Debug for AvailabilityService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvailabilityService")
            .field("checker", &self.checker)
            .finish()
    }
}

impl AvailabilityService {
    /// Creates a new availability service.
    pub fn new(repository: Arc<dyn AvailabilityRepository>, checker: SlotChecker) -> Self {
        Self {
            repository,
            checker,
        }
    }

    /// Validates and persists a new availability slot.
    ///
    /// Rejects intervals with reversed bounds and intervals that overlap
    /// one of the member's existing slots.
    pub async fn add_slot(
        &self,
        member_id: Uuid,
        candidate: TimeInterval,
    ) -> AppResult<AvailabilitySlot> {
        candidate.validate()?;

        let existing = self.repository.list_for_member(member_id).await?;
        let intervals: Vec<TimeInterval> = existing.iter().map(|slot| slot.interval).collect();

        if !self.checker.is_available(&intervals, &candidate) {
            return Err(AppError::validation(
                "start: slot overlaps an existing availability",
            ));
        }

        let slot = self
            .repository
            .insert(AvailabilitySlot::new(member_id, candidate))
            .await?;

        info!(member_id = %member_id, slot_id = %slot.id, "Availability slot added");
        Ok(slot)
    }

    /// Lists a member's availability slots.
    pub async fn list_slots(&self, member_id: Uuid) -> AppResult<Vec<AvailabilitySlot>> {
        self.repository.list_for_member(member_id).await
    }
}
