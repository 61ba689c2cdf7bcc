//! Raw API response seen by the refresh coordinator.

use serde_json::Value;

use skillswap_core::error::AppError;
use skillswap_core::result::AppResult;

/// Status and decoded JSON body of one API call.
///
/// Kept raw so the coordinator can inspect the status before callers
/// interpret the body.
#[derive(Debug, Clone)]
pub struct ClientResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded JSON body; `Null` when the body was empty or not JSON.
    pub body: Value,
}

impl ClientResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether this is the authorization failure that triggers a refresh.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// The server's `message` field, when present.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// Converts the response into a result, mapping any non-2xx status to
    /// a transport error carrying the body's `message` field when present.
    pub fn into_result(self) -> AppResult<Value> {
        if self.is_success() {
            Ok(self.body)
        } else {
            let message = self.message().unwrap_or("Request failed").to_string();
            Err(AppError::transport(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use skillswap_core::error::ErrorKind;

    #[test]
    fn test_success_passes_body_through() {
        let response = ClientResponse {
            status: 200,
            body: json!({"id": 7}),
        };
        assert_eq!(response.into_result().expect("ok"), json!({"id": 7}));
    }

    #[test]
    fn test_failure_uses_message_field() {
        let response = ClientResponse {
            status: 409,
            body: json!({"error": "CONFLICT", "message": "Email already registered"}),
        };
        let err = response.into_result().expect_err("err");
        assert_eq!(err.kind, ErrorKind::Transport);
        assert_eq!(err.message, "Email already registered");
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let response = ClientResponse {
            status: 500,
            body: Value::Null,
        };
        let err = response.into_result().expect_err("err");
        assert_eq!(err.message, "Request failed");
    }
}
