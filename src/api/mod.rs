//! API handlers for SimpleLib REST endpoints

pub mod authors;
pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books", get(books::list_books))
        .route(
            "/books/:isbn",
            put(books::upsert_book)
                .get(books::get_book)
                .patch(books::partial_update_book)
                .delete(books::delete_book),
        )
        // Authors
        .route("/authors", post(authors::create_author).get(authors::list_authors))
        .route(
            "/authors/:id",
            get(authors::get_author)
                .put(authors::update_author)
                .patch(authors::update_author)
                .delete(authors::delete_author),
        )
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
