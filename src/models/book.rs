//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book record as persisted, keyed by ISBN
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Book {
    pub isbn: String,
    pub title: Option<String>,
    pub author_id: Option<i64>,
}

/// Book as exchanged over HTTP
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookDto {
    /// ISBN; the value in the request path always wins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// ID of the book's author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
}

/// Fields a partial book update may overwrite
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author_id: Option<i64>,
}

impl Book {
    /// Overwrite only the fields present in `patch`
    pub fn apply(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(author_id) = patch.author_id {
            self.author_id = Some(author_id);
        }
    }
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author_id.is_none()
    }
}
