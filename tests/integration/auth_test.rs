//! Integration tests for the authentication flow.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_sets_session_cookies() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "alice@example.com",
                "password": "password123",
            })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data().get("access_token").is_some());
    assert!(response.data().get("refresh_token").is_some());
    assert_eq!(
        response.data()["member"]["email"].as_str().unwrap(),
        "alice@example.com"
    );
    assert!(response.cookie("access_token").is_some());
    assert!(response.cookie("refresh_token").is_some());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new();
    app.register("bob@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "bob@example.com",
                "password": "password123",
            })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "short@example.com",
                "password": "short",
            })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    app.register("carol@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "carol@example.com",
                "password": "password123",
            })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data().get("access_token").is_some());
    assert!(response.cookie("access_token").is_some());
    assert!(response.cookie("refresh_token").is_some());
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let app = TestApp::new();
    app.register("dave@example.com", "password123").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "dave@example.com",
                "password": "not-the-password",
            })),
            &[],
        )
        .await;

    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": "password123",
            })),
            &[],
        )
        .await;

    // Neither failure shape may reveal whether the account exists.
    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.message(), unknown_email.message());
}

#[tokio::test]
async fn test_me_with_session_cookie() {
    let app = TestApp::new();
    let cookies = app.register("erin@example.com", "password123").await;

    let response = app.request("GET", "/api/auth/me", None, &cookies).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data()["email"].as_str().unwrap(),
        "erin@example.com"
    );
}

#[tokio::test]
async fn test_me_without_session() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/auth/me", None, &[]).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_rejects_tampered_token() {
    let app = TestApp::new();
    let mut cookies = app.register("frank@example.com", "password123").await;

    for (name, value) in cookies.iter_mut() {
        if name == "access_token" {
            value.push('x');
        }
    }

    let response = app.request("GET", "/api/auth/me", None, &cookies).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_resets_only_access_cookie() {
    let app = TestApp::new();
    let cookies = app.register("grace@example.com", "password123").await;

    let refresh_only: Vec<(String, String)> = cookies
        .iter()
        .filter(|(name, _)| name == "refresh_token")
        .cloned()
        .collect();

    let response = app
        .request("POST", "/api/auth/refresh", None, &refresh_only)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data().get("access_token").is_some());
    assert!(response.cookie("access_token").is_some());
    // The refresh token is not rotated.
    assert!(response.cookie("refresh_token").is_none());

    // The fresh access token opens a protected route.
    let access = response.data()["access_token"].as_str().unwrap();
    let me = app
        .request(
            "GET",
            "/api/auth/me",
            None,
            &[("access_token".to_string(), access.to_string())],
        )
        .await;
    assert_eq!(me.status, StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_without_cookie() {
    let app = TestApp::new();

    let response = app.request("POST", "/api/auth/refresh", None, &[]).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = TestApp::new();
    let cookies = app.register("heidi@example.com", "password123").await;

    let access = cookies
        .iter()
        .find(|(name, _)| name == "access_token")
        .map(|(_, value)| value.clone())
        .unwrap();

    // An access token presented in the refresh cookie slot must not refresh.
    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            None,
            &[("refresh_token".to_string(), access)],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookies() {
    let app = TestApp::new();
    let cookies = app.register("ivan@example.com", "password123").await;

    let response = app
        .request("POST", "/api/auth/logout", None, &cookies)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.cookie("access_token"), Some(""));
    assert_eq!(response.cookie("refresh_token"), Some(""));

    // Logout without a session is still fine.
    let again = app.request("POST", "/api/auth/logout", None, &[]).await;
    assert_eq!(again.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let app = TestApp::new();
    app.register("Judy@Example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "judy@example.com",
                "password": "password123",
            })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}
