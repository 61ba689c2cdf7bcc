//! # skillswap-api
//!
//! Axum HTTP surface for SkillSwap: routing, handlers, the session guard
//! extractor, cookie construction, and middleware.

pub mod cookies;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
