//! CORS layer configuration.
//!
//! Sessions ride in `SameSite=None` cookies, so the layer must allow
//! credentials; credentialed CORS forbids wildcard origins, hence the
//! explicit allow-list.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

use skillswap_core::config::app::CorsConfig;

/// Builds a credentialed CORS tower layer from configuration.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(config.max_age_seconds))
}
