//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use skillswap_api::state::AppState;
use skillswap_auth::jwt::TokenCodec;
use skillswap_auth::password::PasswordHasher;
use skillswap_auth::session::{InMemoryMemberStore, SessionService};
use skillswap_core::config::AppConfig;
use skillswap_scheduling::{AvailabilityService, InMemoryAvailabilityStore, SlotChecker};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a new test application with in-memory stores
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a test application from an explicit config
    pub fn with_config(config: AppConfig) -> Self {
        let token_codec = Arc::new(TokenCodec::new(&config.auth).expect("codec init"));
        let session_service = Arc::new(SessionService::new(
            Arc::clone(&token_codec),
            Arc::new(InMemoryMemberStore::new()),
            PasswordHasher::new(),
        ));
        let availability_service = Arc::new(AvailabilityService::new(
            Arc::new(InMemoryAvailabilityStore::new()),
            SlotChecker::from_config(&config.scheduling),
        ));

        let state = AppState {
            config: Arc::new(config),
            token_codec,
            session_service,
            availability_service,
        };

        Self {
            router: skillswap_api::router::build_router(state),
        }
    }

    /// Register a member and return the session cookies
    pub async fn register(&self, email: &str, password: &str) -> Vec<(String, String)> {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({ "email": email, "password": password })),
                &[],
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Registration failed: {:?}",
            response.body
        );

        response.cookies
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookies: &[(String, String)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if !cookies.is_empty() {
            let header = cookies
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("; ");
            req = req.header("Cookie", header);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();

        let set_cookies = response
            .headers()
            .get_all("set-cookie")
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(parse_set_cookie)
            .collect();

        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            cookies: set_cookies,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Cookies set by the response, as (name, value) pairs
    pub cookies: Vec<(String, String)>,
}

impl TestResponse {
    /// Value of a response cookie, if set
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The `message` field of an error body
    pub fn message(&self) -> &str {
        self.body
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }

    /// The `data` field of a success body
    pub fn data(&self) -> &Value {
        self.body.get("data").unwrap_or(&Value::Null)
    }
}

fn parse_set_cookie(header: &str) -> Option<(String, String)> {
    let pair = header.split(';').next()?;
    let (name, value) = pair.split_once('=')?;
    Some((name.trim().to_string(), value.trim().to_string()))
}

/// Config for tests: fixed secret, plain HTTP cookies
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = "integration-test-secret".to_string();
    config.auth.cookie_secure = false;
    config
}
