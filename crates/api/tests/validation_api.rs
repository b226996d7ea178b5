//! Integration tests for payload validation on the mutating
//! endpoints. Each request uses its own `x-user-id` so the guard
//! never interferes.

mod common;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use common::{body_json, build_test_app, post_json, test_config};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn progress_without_card_id_is_rejected() {
    let app = build_test_app(test_config());
    let response = post_json(app, "/api/progress", "v1", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "MISSING_CARD_ID");
    assert_eq!(body["message"], "Card ID is required");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn blank_card_id_counts_as_missing() {
    let app = build_test_app(test_config());
    let response = post_json(app, "/api/progress", "v2", json!({ "cardId": "   " })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "MISSING_CARD_ID");
}

#[tokio::test]
async fn level_up_without_card_id_is_rejected() {
    let app = build_test_app(test_config());
    let response = post_json(app, "/api/level-up", "v3", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "MISSING_CARD_ID");
}

#[tokio::test]
async fn zero_clicks_is_an_invalid_request() {
    let app = build_test_app(test_config());
    let response = post_json(
        app,
        "/api/batch-progress",
        "v4",
        json!({ "cardId": "1", "clicks": 0 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "INVALID_REQUEST");
    assert_eq!(body["message"], "Clicks must be a positive number");
}

#[tokio::test]
async fn fractional_clicks_are_an_invalid_request() {
    let app = build_test_app(test_config());
    let response = post_json(
        app,
        "/api/batch-progress",
        "v5",
        json!({ "cardId": "1", "clicks": 2.5 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn oversized_batch_is_rejected_without_state_changes() {
    let app = build_test_app(test_config());
    let response = post_json(
        app,
        "/api/batch-progress",
        "v6",
        json!({ "cardId": "1", "clicks": 15 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "BATCH_LIMIT_EXCEEDED");
    assert_eq!(body["message"], "Maximum 10 clicks allowed per request");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn null_body_counts_as_missing_card_id() {
    let app = build_test_app(test_config());
    let response = post_json(app, "/api/progress", "v7", json!(null)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "MISSING_CARD_ID");
}

#[tokio::test]
async fn empty_body_is_an_invalid_request() {
    let app = build_test_app(test_config());
    let request = Request::builder()
        .method("POST")
        .uri("/api/progress")
        .header(CONTENT_TYPE, "application/json")
        .header("x-user-id", "v8")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "INVALID_REQUEST");
    assert_eq!(body["message"], "Request body is required");
}

#[tokio::test]
async fn string_clicks_are_an_invalid_request() {
    let app = build_test_app(test_config());
    let response = post_json(
        app,
        "/api/batch-progress",
        "v9",
        json!({ "cardId": "1", "clicks": "5" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REQUEST");
}
