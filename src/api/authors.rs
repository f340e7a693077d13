//! Author endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    mappers::{AuthorMapper, Mapper},
    models::{AuthorDto, AuthorQuery},
    AppState,
};

/// Create an author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = AuthorDto,
    responses(
        (status = 201, description = "Author created", body = AuthorDto)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    Json(dto): Json<AuthorDto>,
) -> AppResult<(StatusCode, Json<AuthorDto>)> {
    let author = AuthorMapper.map_from(dto);
    let created = state.services.authors.create(author).await?;
    Ok((StatusCode::CREATED, Json(AuthorMapper.map_to(created))))
}

/// List authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    params(
        ("older_than" = Option<i32>, Query, description = "Strictly older than this age"),
        ("younger_than" = Option<i32>, Query, description = "Strictly younger than this age")
    ),
    responses(
        (status = 200, description = "List of authors", body = Vec<AuthorDto>)
    )
)]
pub async fn list_authors(
    State(state): State<AppState>,
    Query(query): Query<AuthorQuery>,
) -> AppResult<Json<Vec<AuthorDto>>> {
    let authors = state.services.authors.list_filtered(&query).await?;
    Ok(Json(
        authors
            .into_iter()
            .map(|author| AuthorMapper.map_to(author))
            .collect(),
    ))
}

/// Get an author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = AuthorDto),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AuthorDto>> {
    let author = state
        .services
        .authors
        .find_one(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))?;
    Ok(Json(AuthorMapper.map_to(author)))
}

/// Update an author.
///
/// Serves both PUT and PATCH: only the fields present in the body change.
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    request_body = AuthorDto,
    responses(
        (status = 200, description = "Author updated", body = AuthorDto),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<AuthorDto>,
) -> AppResult<Json<AuthorDto>> {
    let patch = AuthorMapper.map_patch(dto);
    let updated = state.services.authors.partial_update(id, patch).await?;
    Ok(Json(AuthorMapper.map_to(updated)))
}

/// Delete an author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deleted, or never existed")
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.authors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
