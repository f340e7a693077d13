//! Book catalog service

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookPatch, Page, PageRequest},
    repository::{CrudRepository, PagingRepository, Repository},
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create or replace the book stored under `isbn`.
    ///
    /// The path ISBN is pinned onto the record, whatever the payload carried.
    /// Whether this created or replaced is for the caller to find out beforehand.
    pub async fn upsert(&self, isbn: &str, mut book: Book) -> AppResult<Book> {
        validate_isbn(isbn)?;
        self.check_author(book.author_id).await?;

        book.isbn = isbn.to_string();
        let saved = self.repository.books.save(book).await?;
        tracing::info!(isbn = %saved.isbn, "Book stored");
        Ok(saved)
    }

    /// List books one page at a time, ordered by ISBN
    pub async fn list_all(&self, request: PageRequest) -> AppResult<Page<Book>> {
        self.repository.books.find_page(request).await
    }

    pub async fn find_one(&self, isbn: &str) -> AppResult<Option<Book>> {
        self.repository.books.find_by_id(isbn).await
    }

    pub async fn exists(&self, isbn: &str) -> AppResult<bool> {
        self.repository.books.exists_by_id(isbn).await
    }

    pub async fn count(&self) -> AppResult<i64> {
        self.repository.books.count().await
    }

    /// Merge the present fields of `patch` into the stored book
    pub async fn partial_update(&self, isbn: &str, patch: BookPatch) -> AppResult<Book> {
        let mut book = self
            .repository
            .books
            .find_by_id(isbn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", isbn)))?;

        if patch.is_empty() {
            return Ok(book);
        }
        self.check_author(patch.author_id).await?;

        book.apply(patch);
        book.isbn = isbn.to_string();
        let saved = self.repository.books.save(book).await?;
        tracing::info!(isbn = %saved.isbn, "Book partially updated");
        Ok(saved)
    }

    /// Delete a book; an unknown ISBN is a no-op
    pub async fn delete(&self, isbn: &str) -> AppResult<()> {
        self.repository.books.delete_by_id(isbn).await?;
        tracing::debug!(isbn = %isbn, "Book deleted");
        Ok(())
    }

    async fn check_author(&self, author_id: Option<i64>) -> AppResult<()> {
        if let Some(id) = author_id {
            if !self.repository.authors.exists_by_id(&id).await? {
                return Err(AppError::Validation(format!("Author {} does not exist", id)));
            }
        }
        Ok(())
    }
}

fn validate_isbn(isbn: &str) -> AppResult<()> {
    if isbn.trim().is_empty() {
        return Err(AppError::Validation("ISBN cannot be empty".to_string()));
    }
    Ok(())
}
