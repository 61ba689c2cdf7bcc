//! Session transport port and its reqwest-backed implementation.

use async_trait::async_trait;

use skillswap_core::error::AppError;
use skillswap_core::result::AppResult;

/// Port to the session endpoints the refresh coordinator depends on.
///
/// Injected rather than reached for ambiently so the coordinator can be
/// exercised against a test double.
#[async_trait]
pub trait SessionTransport: Send + Sync {
    /// Calls the refresh endpoint. On success the new access token has
    /// landed in the shared token store (cookie jar).
    async fn refresh(&self) -> AppResult<()>;

    /// Clears the local session store; the logout equivalent. Best-effort,
    /// never fails the caller.
    async fn clear_session(&self);
}

/// Reqwest-backed transport. The client's cookie store carries the
/// access/refresh tokens, so refreshing is a bare POST.
#[derive(Debug, Clone)]
pub struct HttpSessionTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSessionTransport {
    /// Creates a transport sharing the given client (and thus its cookie
    /// store) with the rest of the API client.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SessionTransport for HttpSessionTransport {
    async fn refresh(&self) -> AppResult<()> {
        let url = format!("{}/api/auth/refresh", self.base_url);
        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|e| AppError::transport(format!("Refresh request failed: {e}")))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AppError::session_expired("Refresh token rejected"))
        }
    }

    async fn clear_session(&self) {
        let url = format!("{}/api/auth/logout", self.base_url);
        if let Err(e) = self.http.post(&url).send().await {
            tracing::debug!(error = %e, "Logout during session clear failed");
        }
    }
}
