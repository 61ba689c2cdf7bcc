//! Blanket authentication middleware for protected route groups.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use skillswap_core::error::AppError;

use crate::extractors::auth::access_token;
use crate::state::AppState;

/// Rejects requests without a valid access token before they reach a
/// handler. Handlers that need the claims still use the `CurrentUser`
/// extractor, which re-verifies the token.
pub async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = access_token(request.headers())
        .ok_or_else(|| AppError::unauthenticated("Authentication required"))?;

    state.token_codec.verify_access(&token)?;

    Ok(next.run(request).await)
}
