//! Session flows: register, login, refresh.
//!
//! There is no server-side session record. Logout is purely a client-side
//! store clear, handled at the HTTP layer.

pub mod service;
pub mod store;

pub use service::{AuthenticatedMember, SessionService};
pub use store::InMemoryMemberStore;
