//! Auth handlers — register, login, refresh, logout, me.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use skillswap_auth::session::AuthenticatedMember;
use skillswap_core::error::AppError;

use crate::cookies::{self, ACCESS_COOKIE, REFRESH_COOKIE};
use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{
    AccessTokenResponse, ApiResponse, MemberResponse, MessageResponse, SessionResponse,
};
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<ApiResponse<SessionResponse>>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let min_length = state.config.auth.password_min_length;
    if req.password.chars().count() < min_length {
        return Err(AppError::validation(format!(
            "password: Password must be at least {min_length} characters"
        )));
    }

    let auth = state
        .session_service
        .register(&req.email, &req.password)
        .await?;

    respond_with_session(&state, jar, auth)
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<SessionResponse>>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let auth = state
        .session_service
        .login(&req.email, &req.password)
        .await?;

    respond_with_session(&state, jar, auth)
}

/// POST /api/auth/refresh
///
/// Reads the refresh token from the cookie store and resets only the
/// access cookie; the refresh token is not rotated.
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<AccessTokenResponse>>), AppError> {
    let refresh_token = jar
        .get(REFRESH_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or_else(|| AppError::unauthenticated("Invalid or expired token"))?;

    let (access_token, expires_at) = state.session_service.refresh(&refresh_token).await?;

    let jar = jar.add(cookies::access_cookie(
        &state.config.auth,
        access_token.clone(),
    ));

    Ok((
        jar,
        Json(ApiResponse::ok(AccessTokenResponse {
            access_token,
            expires_at,
        })),
    ))
}

/// POST /api/auth/logout
///
/// Clears both session cookies. There is no server-side session record to
/// destroy, which also makes this idempotent.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    let jar = jar
        .remove(cookies::removal_cookie(ACCESS_COOKIE))
        .remove(cookies::removal_cookie(REFRESH_COOKIE));

    (
        jar,
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out".to_string(),
        })),
    )
}

/// GET /api/auth/me
pub async fn me(user: CurrentUser) -> Json<ApiResponse<MemberResponse>> {
    Json(ApiResponse::ok(MemberResponse {
        id: user.sub,
        email: user.email.clone(),
    }))
}

fn respond_with_session(
    state: &AppState,
    jar: CookieJar,
    auth: AuthenticatedMember,
) -> Result<(CookieJar, Json<ApiResponse<SessionResponse>>), AppError> {
    let jar = jar
        .add(cookies::access_cookie(
            &state.config.auth,
            auth.tokens.access_token.clone(),
        ))
        .add(cookies::refresh_cookie(
            &state.config.auth,
            auth.tokens.refresh_token.clone(),
        ));

    Ok((
        jar,
        Json(ApiResponse::ok(SessionResponse {
            access_token: auth.tokens.access_token,
            refresh_token: auth.tokens.refresh_token,
            access_expires_at: auth.tokens.access_expires_at,
            refresh_expires_at: auth.tokens.refresh_expires_at,
            member: MemberResponse {
                id: auth.member.id,
                email: auth.member.email,
            },
        })),
    ))
}
