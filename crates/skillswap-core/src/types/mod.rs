//! Shared domain types.

pub mod availability;
pub mod interval;
pub mod member;
pub mod response;

pub use availability::AvailabilitySlot;
pub use interval::TimeInterval;
pub use member::Member;
pub use response::ApiErrorResponse;
