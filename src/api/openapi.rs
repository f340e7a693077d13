//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SimpleLib API",
        version = "0.1.0",
        description = "Library catalog REST API for books and authors"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::upsert_book,
        books::list_books,
        books::get_book,
        books::partial_update_book,
        books::delete_book,
        // Authors
        authors::create_author,
        authors::list_authors,
        authors::get_author,
        authors::update_author,
        authors::delete_author,
    ),
    components(
        schemas(
            crate::models::BookDto,
            crate::models::AuthorDto,
            books::BookPage,
            health::HealthResponse,
            health::ReadinessResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog, keyed by ISBN"),
        (name = "authors", description = "Author management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
