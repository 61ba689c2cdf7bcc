//! # skillswap-client
//!
//! Client-side session plumbing for SkillSwap. Protected calls go through
//! the [`RefreshCoordinator`], which gives arbitrarily many concurrent
//! callers the illusion of an always-valid session while performing at
//! most one token refresh at a time.

pub mod api;
pub mod coordinator;
pub mod response;
pub mod transport;

pub use api::ApiClient;
pub use coordinator::RefreshCoordinator;
pub use response::ClientResponse;
pub use transport::{HttpSessionTransport, SessionTransport};
