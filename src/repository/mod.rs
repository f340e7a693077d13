//! Repository layer: record stores for books and authors

pub mod authors;
pub mod books;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use crate::{
    config::{DatabaseBackend, DatabaseConfig},
    error::{AppError, AppResult},
    models::{Author, Book, Page, PageRequest},
};

/// Key-based persistence for one record kind
#[async_trait]
pub trait CrudRepository: Send + Sync {
    type Entity: Send + Sync + 'static;
    type Id: ?Sized + Send + Sync;

    async fn find_by_id(&self, id: &Self::Id) -> AppResult<Option<Self::Entity>>;

    /// Insert or overwrite, returning the record as stored
    async fn save(&self, entity: Self::Entity) -> AppResult<Self::Entity>;

    /// Deleting an absent key is not an error
    async fn delete_by_id(&self, id: &Self::Id) -> AppResult<()>;

    async fn exists_by_id(&self, id: &Self::Id) -> AppResult<bool>;

    async fn find_all(&self) -> AppResult<Vec<Self::Entity>>;

    async fn count(&self) -> AppResult<i64>;
}

#[async_trait]
pub trait PagingRepository: CrudRepository {
    async fn find_page(&self, request: PageRequest) -> AppResult<Page<Self::Entity>>;
}

/// Books keyed by ISBN, ordered by ISBN
pub trait BookRepository: PagingRepository + CrudRepository<Entity = Book, Id = str> {}

/// Authors keyed by store-assigned id, ordered by id
#[async_trait]
pub trait AuthorRepository: CrudRepository<Entity = Author, Id = i64> {
    async fn find_by_age_less_than(&self, age: i32) -> AppResult<Vec<Author>>;

    async fn find_by_age_greater_than(&self, age: i32) -> AppResult<Vec<Author>>;
}

/// Main repository struct holding one store per record kind
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookRepository>,
    pub authors: Arc<dyn AuthorRepository>,
}

impl Repository {
    /// Create a repository over the given PostgreSQL pool
    pub fn postgres(pool: Pool<Postgres>) -> Self {
        Self {
            books: Arc::new(books::BooksRepository::new(pool.clone())),
            authors: Arc::new(authors::AuthorsRepository::new(pool)),
        }
    }

    /// Create an empty, process-local repository
    pub fn in_memory() -> Self {
        let books = memory::InMemoryBooksRepository::default();
        let authors = memory::InMemoryAuthorsRepository::new(&books);
        Self {
            books: Arc::new(books),
            authors: Arc::new(authors),
        }
    }

    /// Build the repository selected by configuration
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.backend {
            DatabaseBackend::Memory => {
                tracing::warn!("Using in-memory record store; data is lost on shutdown");
                Ok(Self::in_memory())
            }
            DatabaseBackend::Postgres => {
                let pool = PgPoolOptions::new()
                    .max_connections(config.max_connections)
                    .min_connections(config.min_connections)
                    .connect(&config.url)
                    .await?;
                tracing::info!("Connected to database");

                if config.run_migrations {
                    sqlx::migrate!("./migrations")
                        .run(&pool)
                        .await
                        .map_err(|e| AppError::Internal(format!("Migration failed: {}", e)))?;
                    tracing::info!("Database migrations completed");
                }

                Ok(Self::postgres(pool))
            }
        }
    }
}
