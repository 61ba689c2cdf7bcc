//! Session cookie construction.
//!
//! Both tokens travel in `HttpOnly` cookies with `SameSite=None` so
//! browser clients on other origins can carry the session. `Secure` is
//! configurable only to permit plain-HTTP local development.

use axum_extra::extract::cookie::{Cookie, SameSite};

use skillswap_core::config::auth::AuthConfig;

/// Cookie carrying the short-lived access token.
pub const ACCESS_COOKIE: &str = "access_token";
/// Cookie carrying the long-lived refresh token.
pub const REFRESH_COOKIE: &str = "refresh_token";

/// Builds the access token cookie (max age = access TTL).
pub fn access_cookie(config: &AuthConfig, token: String) -> Cookie<'static> {
    session_cookie(
        ACCESS_COOKIE,
        token,
        time::Duration::minutes(config.access_ttl_minutes as i64),
        config.cookie_secure,
    )
}

/// Builds the refresh token cookie (max age = refresh TTL).
pub fn refresh_cookie(config: &AuthConfig, token: String) -> Cookie<'static> {
    session_cookie(
        REFRESH_COOKIE,
        token,
        time::Duration::days(config.refresh_ttl_days as i64),
        config.cookie_secure,
    )
}

/// Builds a removal cookie matching the attributes of the session cookies.
pub fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::new(name, "");
    cookie.set_path("/");
    cookie
}

fn session_cookie(
    name: &'static str,
    value: String,
    max_age: time::Duration,
    secure: bool,
) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::None)
        .max_age(max_age)
        .build()
}
