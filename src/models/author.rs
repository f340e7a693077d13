//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Author record as persisted.
///
/// `id` is `None` until the store assigns one on first insert.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Author {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub age: Option<i32>,
}

/// Author as exchanged over HTTP
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

/// Fields a partial author update may overwrite
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
}

/// Age filters for listing authors (strict bounds)
#[derive(Debug, Default, Deserialize)]
pub struct AuthorQuery {
    /// Only authors strictly older than this
    pub older_than: Option<i32>,
    /// Only authors strictly younger than this
    pub younger_than: Option<i32>,
}

impl Author {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            age: Some(age),
        }
    }

    /// Overwrite only the fields present in `patch`
    pub fn apply(&mut self, patch: AuthorPatch) {
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        if let Some(age) = patch.age {
            self.age = Some(age);
        }
    }
}
