//! Books repository (PostgreSQL)

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::{BookRepository, CrudRepository, PagingRepository};
use crate::{
    error::AppResult,
    models::{Book, Page, PageRequest},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for BooksRepository {
    type Entity = Book;
    type Id = str;

    async fn find_by_id(&self, isbn: &str) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT isbn, title, author_id FROM books WHERE isbn = $1",
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    async fn save(&self, book: Book) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (isbn, title, author_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (isbn) DO UPDATE
                SET title = EXCLUDED.title,
                    author_id = EXCLUDED.author_id
            RETURNING isbn, title, author_id
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(book.author_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_by_id(&self, isbn: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE isbn = $1")
            .bind(isbn)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn exists_by_id(&self, isbn: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE isbn = $1)")
                .bind(isbn)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT isbn, title, author_id FROM books ORDER BY isbn",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*)::bigint FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl PagingRepository for BooksRepository {
    async fn find_page(&self, request: PageRequest) -> AppResult<Page<Book>> {
        let total = self.count().await?;

        let rows = sqlx::query_as::<_, Book>(
            "SELECT isbn, title, author_id FROM books ORDER BY isbn LIMIT $1 OFFSET $2",
        )
        .bind(request.per_page)
        .bind(request.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(rows, total, request))
    }
}

impl BookRepository for BooksRepository {}
