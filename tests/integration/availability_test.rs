//! Integration tests for availability slots.

use http::StatusCode;

use crate::helpers::TestApp;

async fn create_slot(
    app: &TestApp,
    cookies: &[(String, String)],
    start: &str,
    end: &str,
) -> crate::helpers::TestResponse {
    app.request(
        "POST",
        "/api/availabilities",
        Some(serde_json::json!({ "start": start, "end": end })),
        cookies,
    )
    .await
}

#[tokio::test]
async fn test_create_slot() {
    let app = TestApp::new();
    let cookies = app.register("host@example.com", "password123").await;

    let response = create_slot(
        &app,
        &cookies,
        "2026-09-01T15:00:00Z",
        "2026-09-01T16:00:00Z",
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.data().get("id").is_some());
    assert_eq!(
        response.data()["start"].as_str().unwrap(),
        "2026-09-01T15:00:00Z"
    );
}

#[tokio::test]
async fn test_create_slot_requires_auth() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/availabilities",
            Some(serde_json::json!({
                "start": "2026-09-01T15:00:00Z",
                "end": "2026-09-01T16:00:00Z",
            })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_overlapping_slot_rejected() {
    let app = TestApp::new();
    let cookies = app.register("busy@example.com", "password123").await;

    create_slot(
        &app,
        &cookies,
        "2026-09-01T15:00:00Z",
        "2026-09-01T16:00:00Z",
    )
    .await;

    let response = create_slot(
        &app,
        &cookies,
        "2026-09-01T15:30:00Z",
        "2026-09-01T16:30:00Z",
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.message().contains("overlaps"));
}

#[tokio::test]
async fn test_touching_slots_do_not_conflict() {
    let app = TestApp::new();
    let cookies = app.register("packed@example.com", "password123").await;

    create_slot(
        &app,
        &cookies,
        "2026-09-01T15:00:00Z",
        "2026-09-01T16:00:00Z",
    )
    .await;

    // A slot starting exactly where the other ends is allowed.
    let response = create_slot(
        &app,
        &cookies,
        "2026-09-01T16:00:00Z",
        "2026-09-01T18:00:00Z",
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_time_of_day_overlap_ignores_date() {
    // Default mode compares wall-clock time only, so the same hours on a
    // different day still conflict.
    let app = TestApp::new();
    let cookies = app.register("daily@example.com", "password123").await;

    create_slot(
        &app,
        &cookies,
        "2026-09-01T15:00:00Z",
        "2026-09-01T16:00:00Z",
    )
    .await;

    let response = create_slot(
        &app,
        &cookies,
        "2026-09-02T15:30:00Z",
        "2026-09-02T16:30:00Z",
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_absolute_mode_allows_other_dates() {
    let mut config = crate::helpers::test_config();
    config.scheduling.overlap_mode = "absolute".to_string();
    let app = TestApp::with_config(config);
    let cookies = app.register("calendar@example.com", "password123").await;

    create_slot(
        &app,
        &cookies,
        "2026-09-01T15:00:00Z",
        "2026-09-01T16:00:00Z",
    )
    .await;

    let response = create_slot(
        &app,
        &cookies,
        "2026-09-02T15:30:00Z",
        "2026-09-02T16:30:00Z",
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_slots_are_scoped_per_member() {
    let app = TestApp::new();
    let first = app.register("one@example.com", "password123").await;
    let second = app.register("two@example.com", "password123").await;

    create_slot(
        &app,
        &first,
        "2026-09-01T15:00:00Z",
        "2026-09-01T16:00:00Z",
    )
    .await;

    // Another member may hold the same hours.
    let response = create_slot(
        &app,
        &second,
        "2026-09-01T15:00:00Z",
        "2026-09-01T16:00:00Z",
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let list = app.request("GET", "/api/availabilities", None, &second).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.data().as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_reversed_interval_rejected() {
    let app = TestApp::new();
    let cookies = app.register("upside@example.com", "password123").await;

    let response = create_slot(
        &app,
        &cookies,
        "2026-09-01T16:00:00Z",
        "2026-09-01T15:00:00Z",
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_bound_rejected() {
    let app = TestApp::new();
    let cookies = app.register("partial@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/availabilities",
            Some(serde_json::json!({ "start": "2026-09-01T15:00:00Z" })),
            &cookies,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.message().contains("end"));
}

#[tokio::test]
async fn test_list_empty_for_new_member() {
    let app = TestApp::new();
    let cookies = app.register("fresh@example.com", "password123").await;

    let list = app
        .request("GET", "/api/availabilities", None, &cookies)
        .await;

    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.data().as_array().unwrap().len(), 0);
}
