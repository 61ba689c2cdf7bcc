//! High-level API client routing protected calls through the coordinator.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{Value, json};

use skillswap_core::error::AppError;
use skillswap_core::result::AppResult;

use crate::coordinator::RefreshCoordinator;
use crate::response::ClientResponse;
use crate::transport::HttpSessionTransport;

/// JSON API client with cookie-backed sessions.
///
/// Session tokens live in the underlying reqwest cookie store; protected
/// calls go through the refresh coordinator, so callers never see the 401
/// of an expired access token unless the refresh itself fails.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    coordinator: Arc<RefreshCoordinator>,
}

impl ApiClient {
    /// Creates a client for the given server base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let base_url = base_url.into();
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        let transport = HttpSessionTransport::new(http.clone(), base_url.clone());
        Ok(Self {
            http,
            base_url,
            coordinator: Arc::new(RefreshCoordinator::new(Arc::new(transport))),
        })
    }

    /// Registers a new account; the session cookies land in the store.
    pub async fn register(&self, email: &str, password: &str) -> AppResult<Value> {
        let url = self.url("/api/auth/register");
        let body = json!({ "email": email, "password": password });
        send_json(self.http.clone(), Method::POST, url, Some(body))
            .await?
            .into_result()
    }

    /// Logs in; the session cookies land in the store.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Value> {
        let url = self.url("/api/auth/login");
        let body = json!({ "email": email, "password": password });
        send_json(self.http.clone(), Method::POST, url, Some(body))
            .await?
            .into_result()
    }

    /// Logs out, clearing the session cookies. Idempotent.
    pub async fn logout(&self) -> AppResult<()> {
        let url = self.url("/api/auth/logout");
        send_json(self.http.clone(), Method::POST, url, None)
            .await?
            .into_result()
            .map(|_| ())
    }

    /// GET on a protected endpoint, with transparent session refresh.
    pub async fn get(&self, path: &str) -> AppResult<ClientResponse> {
        let http = self.http.clone();
        let url = self.url(path);
        self.coordinator
            .execute(move || send_json(http.clone(), Method::GET, url.clone(), None))
            .await
    }

    /// POST on a protected endpoint, with transparent session refresh.
    pub async fn post(&self, path: &str, body: Value) -> AppResult<ClientResponse> {
        let http = self.http.clone();
        let url = self.url(path);
        self.coordinator
            .execute(move || {
                send_json(http.clone(), Method::POST, url.clone(), Some(body.clone()))
            })
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Sends one JSON request and decodes the response without interpreting
/// its status; that is the coordinator's job.
async fn send_json(
    http: reqwest::Client,
    method: Method,
    url: String,
    body: Option<Value>,
) -> AppResult<ClientResponse> {
    let mut request = http.request(method, &url);
    if let Some(body) = body {
        request = request.json(&body);
    }

    let response = request
        .send()
        .await
        .map_err(|e| AppError::transport(format!("Request failed: {e}")))?;

    let status = response.status().as_u16();
    let body = response.json::<Value>().await.unwrap_or(Value::Null);
    Ok(ClientResponse { status, body })
}
