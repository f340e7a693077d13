use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{TestApp, ISBN, TITLE};

async fn create_agatha(app: &TestApp) -> Value {
    let response = app
        .post("/authors", json!({ "name": "Agatha Christie", "age": 80 }))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn test_create_author_returns_201_with_assigned_id() {
    let app = TestApp::new();

    let body = create_agatha(&app).await;
    assert!(body["id"].is_number());
    assert_eq!(body["name"], "Agatha Christie");
    assert_eq!(body["age"], 80);
}

#[tokio::test]
async fn test_create_author_ignores_body_id() {
    let app = TestApp::new();
    let first = create_agatha(&app).await;

    let response = app
        .post(
            "/authors",
            json!({ "id": first["id"], "name": "Thomas Cronin", "age": 44 }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_ne!(response.json()["id"], first["id"]);

    let original = app.get(&format!("/authors/{}", first["id"])).await.json();
    assert_eq!(original["name"], "Agatha Christie");
}

#[tokio::test]
async fn test_list_authors() {
    let app = TestApp::new();
    assert_eq!(app.get("/authors").await.json(), json!([]));

    create_agatha(&app).await;
    let response = app.get("/authors").await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert!(body[0]["id"].is_number());
    assert_eq!(body[0]["name"], "Agatha Christie");
    assert_eq!(body[0]["age"], 80);
}

#[tokio::test]
async fn test_list_authors_by_age() {
    let app = TestApp::new();
    for (name, age) in [("Agatha Christie", 80), ("Thomas Cronin", 44), ("Jesse A Casey", 24)] {
        app.post("/authors", json!({ "name": name, "age": age })).await;
    }

    let older = app.get("/authors?older_than=44").await.json();
    assert_eq!(older.as_array().unwrap().len(), 1);
    assert_eq!(older[0]["name"], "Agatha Christie");

    let younger = app.get("/authors?younger_than=80").await.json();
    assert_eq!(younger.as_array().unwrap().len(), 2);

    let between = app.get("/authors?older_than=24&younger_than=80").await.json();
    assert_eq!(between.as_array().unwrap().len(), 1);
    assert_eq!(between[0]["name"], "Thomas Cronin");
}

#[tokio::test]
async fn test_get_author() {
    let app = TestApp::new();
    let created = create_agatha(&app).await;

    let response = app.get(&format!("/authors/{}", created["id"])).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), created);
}

#[tokio::test]
async fn test_get_unknown_author_returns_404() {
    let app = TestApp::new();
    create_agatha(&app).await;

    let response = app.get("/authors/999999").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.text.is_empty());
}

#[tokio::test]
async fn test_update_unknown_author_returns_404() {
    let app = TestApp::new();

    let response = app
        .put("/authors/999", json!({ "name": "Agatha Christie", "age": 80 }))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.get("/authors").await.json(), json!([]));
}

#[tokio::test]
async fn test_update_author_both_fields() {
    let app = TestApp::new();
    let created = create_agatha(&app).await;
    let path = format!("/authors/{}", created["id"]);

    let response = app
        .put(&path, json!({ "id": created["id"], "name": "Thomas Cronin", "age": 44 }))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({ "id": created["id"], "name": "Thomas Cronin", "age": 44 })
    );
}

#[tokio::test]
async fn test_update_author_name_only_keeps_age() {
    let app = TestApp::new();
    let created = create_agatha(&app).await;
    let path = format!("/authors/{}", created["id"]);

    let response = app.put(&path, json!({ "name": "Dame Agatha" })).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["age"], 80);

    let stored = app.get(&path).await.json();
    assert_eq!(stored["name"], "Dame Agatha");
    assert_eq!(stored["age"], 80);
}

#[tokio::test]
async fn test_patch_author_behaves_like_put() {
    let app = TestApp::new();
    let created = create_agatha(&app).await;
    let path = format!("/authors/{}", created["id"]);

    let response = app.patch(&path, json!({ "age": 81 })).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["name"], "Agatha Christie");
    assert_eq!(response.json()["age"], 81);

    let missing = app.patch("/authors/999", json!({ "age": 81 })).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_author_path_id_wins() {
    let app = TestApp::new();
    let created = create_agatha(&app).await;

    let response = app
        .put(
            &format!("/authors/{}", created["id"]),
            json!({ "id": 777, "name": "Thomas Cronin" }),
        )
        .await;
    assert_eq!(response.json()["id"], created["id"]);
    assert_eq!(app.get("/authors/777").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_author() {
    let app = TestApp::new();
    let created = create_agatha(&app).await;
    let path = format!("/authors/{}", created["id"]);

    assert_eq!(app.delete(&path).await.status, StatusCode::NO_CONTENT);
    assert_eq!(app.get(&path).await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.delete(&path).await.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_author_unlinks_their_books() {
    let app = TestApp::new();
    let author = create_agatha(&app).await;
    let book_path = format!("/books/{}", ISBN);

    let response = app
        .put(&book_path, json!({ "title": TITLE, "author_id": author["id"] }))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app.delete(&format!("/authors/{}", author["id"])).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let fetched = app.get(&book_path).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json(), json!({ "isbn": ISBN, "title": TITLE }));

    // The body GET returned can be written back unchanged
    let response = app.put(&book_path, fetched.json()).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_non_numeric_author_id_is_rejected() {
    let app = TestApp::new();

    let response = app.get("/authors/abc").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
