//! `CurrentUser` extractor — the per-request session guard.
//!
//! Stateless, one-shot per call: pull the access token from the request's
//! cookie store, verify it, and inject the decoded claims. Missing or
//! invalid tokens reject with a 401. Signature and expiry are re-checked
//! on every call; a previously seen decoded payload is never trusted.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use skillswap_auth::jwt::Claims;
use skillswap_core::error::AppError;

use crate::cookies::ACCESS_COOKIE;
use crate::state::AppState;

/// Verified identity claims available to protected handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Claims);

impl std::ops::Deref for CurrentUser {
    type Target = Claims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = access_token(&parts.headers)
            .ok_or_else(|| AppError::unauthenticated("Authentication required"))?;

        let claims = state.token_codec.verify_access(&token)?;
        Ok(CurrentUser(claims))
    }
}

/// Reads the access token from the cookie store, falling back to a Bearer
/// header for non-cookie clients.
pub fn access_token(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(ACCESS_COOKIE) {
        return Some(cookie.value().to_string());
    }

    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(String::from)
}
