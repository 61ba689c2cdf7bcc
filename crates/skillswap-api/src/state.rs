//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use skillswap_auth::jwt::TokenCodec;
use skillswap_auth::session::SessionService;
use skillswap_core::config::AppConfig;
use skillswap_scheduling::AvailabilityService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Token codec; the session guard re-verifies every protected call
    /// with it, never trusting a previously decoded payload.
    pub token_codec: Arc<TokenCodec>,
    /// Register/login/refresh flows.
    pub session_service: Arc<SessionService>,
    /// Availability slot validation and persistence.
    pub availability_service: Arc<AvailabilityService>,
}
