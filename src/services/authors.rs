//! Author service

use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorPatch, AuthorQuery},
    repository::{AuthorRepository, CrudRepository, Repository},
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Insert when `author.id` is unset, otherwise overwrite that id
    pub async fn save(&self, author: Author) -> AppResult<Author> {
        let saved = self.repository.authors.save(author).await?;
        tracing::info!(id = ?saved.id, "Author stored");
        Ok(saved)
    }

    /// Always insert a new author with a store-assigned id
    pub async fn create(&self, mut author: Author) -> AppResult<Author> {
        author.id = None;
        self.save(author).await
    }

    pub async fn list_all(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.find_all().await
    }

    /// List authors within the (strict) age bounds of `query`
    pub async fn list_filtered(&self, query: &AuthorQuery) -> AppResult<Vec<Author>> {
        let authors = &self.repository.authors;
        match (query.older_than, query.younger_than) {
            (None, None) => authors.find_all().await,
            (Some(min), None) => authors.find_by_age_greater_than(min).await,
            (None, Some(max)) => authors.find_by_age_less_than(max).await,
            (Some(min), Some(max)) => {
                let mut rows = authors.find_by_age_greater_than(min).await?;
                rows.retain(|author| author.age.is_some_and(|age| age < max));
                Ok(rows)
            }
        }
    }

    pub async fn find_one(&self, id: i64) -> AppResult<Option<Author>> {
        self.repository.authors.find_by_id(&id).await
    }

    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        self.repository.authors.exists_by_id(&id).await
    }

    pub async fn count(&self) -> AppResult<i64> {
        self.repository.authors.count().await
    }

    /// Copy `name` and `age` from `patch` when present; other fields keep their values
    pub async fn partial_update(&self, id: i64, patch: AuthorPatch) -> AppResult<Author> {
        let mut author = self
            .repository
            .authors
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))?;

        author.apply(patch);
        author.id = Some(id);
        let saved = self.repository.authors.save(author).await?;
        tracing::info!(id = id, "Author updated");
        Ok(saved)
    }

    /// Delete an author; an unknown id is a no-op
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.authors.delete_by_id(&id).await?;
        tracing::debug!(id = id, "Author deleted");
        Ok(())
    }
}
