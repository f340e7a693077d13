//! Health check endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    /// `ready` or `unavailable`
    pub status: String,
    pub version: String,
    /// Record store in use (`postgres` or `memory`)
    pub backend: String,
    /// Stored book count, when the store answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<i64>,
    /// Stored author count, when the store answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<i64>,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check endpoint (queries the record store)
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse),
        (status = 503, description = "Record store unavailable", body = ReadinessResponse)
    )
)]
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let counts = async {
        let books = state.services.books.count().await?;
        let authors = state.services.authors.count().await?;
        Ok::<_, crate::error::AppError>((books, authors))
    }
    .await;

    let backend = format!("{:?}", state.config.database.backend).to_lowercase();
    match counts {
        Ok((books, authors)) => (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "ready".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                backend,
                books: Some(books),
                authors: Some(authors),
            }),
        ),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "unavailable".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    backend,
                    books: None,
                    authors: None,
                }),
            )
        }
    }
}
