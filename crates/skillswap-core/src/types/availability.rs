//! Availability slot type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::interval::TimeInterval;

/// A stored availability slot belonging to one member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    /// Slot ID.
    pub id: Uuid,
    /// Owning member.
    pub member_id: Uuid,
    /// The time span the member is available.
    pub interval: TimeInterval,
}

impl AvailabilitySlot {
    /// Creates a new slot with a fresh ID.
    pub fn new(member_id: Uuid, interval: TimeInterval) -> Self {
        Self {
            id: Uuid::new_v4(),
            member_id,
            interval,
        }
    }
}
