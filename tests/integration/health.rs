use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_reports_store_counts() {
    let app = TestApp::new();
    app.put("/books/978-1-2345-6789-0", json!({ "title": "The Shadow in the Attic" }))
        .await;

    let response = app.get("/ready").await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["backend"], "memory");
    assert_eq!(body["books"], 1);
    assert_eq!(body["authors"], 0);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = TestApp::new();

    let response = app.get("/api-docs/openapi.json").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json()["paths"]["/books/{isbn}"]["put"].is_object());
}
