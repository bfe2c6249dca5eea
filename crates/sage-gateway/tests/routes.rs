// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route-level tests driving the router without a socket.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use sage_gateway::handlers::{AskResponse, HealthResponse};
use sage_gateway::{router, GatewayState};
use sage_test_utils::TestHarness;

async fn app() -> Router {
    let harness = TestHarness::builder()
        .with_greeting("hi", "Hello!")
        .with_knowledge("What is a goroutine?", "A lightweight thread.")
        .build()
        .await;
    router(GatewayState::new(harness.engine()))
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn ai_answers_greeting() {
    let response = app()
        .await
        .oneshot(json_request(Method::POST, "/ai", serde_json::json!({"text": "Hi"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: AskResponse = body_json(response).await;
    assert_eq!(body.answer, "Hello!");
}

#[tokio::test]
async fn ai_rejects_malformed_json() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/ai")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app().await.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn ai_rejects_missing_text_field() {
    let response = app()
        .await
        .oneshot(json_request(Method::POST, "/ai", serde_json::json!({"question": "Hi"})))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn learned_answer_is_served_by_ai() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/learn",
            serde_json::json!({"question": "hello?", "answer": "Taught answer."}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(json_request(Method::POST, "/ai", serde_json::json!({"text": "hello?"})))
        .await
        .unwrap();
    let body: AskResponse = body_json(response).await;
    assert_eq!(body.answer, "Taught answer.");
}

#[tokio::test]
async fn health_reports_engine_counters() {
    let app = app().await;
    app.clone()
        .oneshot(json_request(
            Method::POST,
            "/learn",
            serde_json::json!({"question": "q", "answer": "a"}),
        ))
        .await
        .unwrap();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthResponse = body_json(response).await;
    assert_eq!(health.status, "ok");
    assert_eq!(health.entries, 1);
    assert_eq!(health.learned, 1);
    assert_eq!(health.interactions, 0);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();
    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
