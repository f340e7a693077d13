//! Authors repository (PostgreSQL)

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::{AuthorRepository, CrudRepository};
use crate::{error::AppResult, models::Author};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Keep the id sequence ahead of ids written explicitly
    async fn sync_id_sequence(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            SELECT setval(
                pg_get_serial_sequence('authors', 'id'),
                GREATEST((SELECT MAX(id) FROM authors), 1)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl CrudRepository for AuthorsRepository {
    type Entity = Author;
    type Id = i64;

    async fn find_by_id(&self, id: &i64) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>("SELECT id, name, age FROM authors WHERE id = $1")
            .bind(*id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(author)
    }

    async fn save(&self, author: Author) -> AppResult<Author> {
        let row = match author.id {
            None => {
                sqlx::query_as::<_, Author>(
                    "INSERT INTO authors (name, age) VALUES ($1, $2) RETURNING id, name, age",
                )
                .bind(&author.name)
                .bind(author.age)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                let row = sqlx::query_as::<_, Author>(
                    r#"
                    INSERT INTO authors (id, name, age)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (id) DO UPDATE
                        SET name = EXCLUDED.name,
                            age = EXCLUDED.age
                    RETURNING id, name, age
                    "#,
                )
                .bind(id)
                .bind(&author.name)
                .bind(author.age)
                .fetch_one(&self.pool)
                .await?;
                self.sync_id_sequence().await?;
                row
            }
        };
        Ok(row)
    }

    async fn delete_by_id(&self, id: &i64) -> AppResult<()> {
        sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(*id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn exists_by_id(&self, id: &i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM authors WHERE id = $1)")
            .bind(*id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn find_all(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>("SELECT id, name, age FROM authors ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*)::bigint FROM authors")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl AuthorRepository for AuthorsRepository {
    async fn find_by_age_less_than(&self, age: i32) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>(
            "SELECT id, name, age FROM authors WHERE age < $1 ORDER BY id",
        )
        .bind(age)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_age_greater_than(&self, age: i32) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>(
            "SELECT id, name, age FROM authors WHERE age > $1 ORDER BY id",
        )
        .bind(age)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
