//! # skillswap-scheduling
//!
//! Availability slot validation: the pure overlap-detection algorithm and
//! the service that applies it before a slot is persisted.

pub mod checker;
pub mod service;
pub mod store;

pub use checker::{OverlapMode, SlotChecker};
pub use service::AvailabilityService;
pub use store::InMemoryAvailabilityStore;
