//! In-process record stores.
//!
//! Each store keeps its rows in a `BTreeMap` behind a `tokio::sync::RwLock`,
//! so listings come out in key order like the SQL queries. The author store
//! shares the book map so deleting an author clears `author_id` on its books,
//! matching `ON DELETE SET NULL` in the PostgreSQL schema.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AuthorRepository, BookRepository, CrudRepository, PagingRepository};
use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, Page, PageRequest},
};

#[derive(Clone, Default)]
pub struct InMemoryBooksRepository {
    books: Arc<RwLock<BTreeMap<String, Book>>>,
}

#[async_trait]
impl CrudRepository for InMemoryBooksRepository {
    type Entity = Book;
    type Id = str;

    async fn find_by_id(&self, isbn: &str) -> AppResult<Option<Book>> {
        Ok(self.books.read().await.get(isbn).cloned())
    }

    async fn save(&self, book: Book) -> AppResult<Book> {
        self.books.write().await.insert(book.isbn.clone(), book.clone());
        Ok(book)
    }

    async fn delete_by_id(&self, isbn: &str) -> AppResult<()> {
        self.books.write().await.remove(isbn);
        Ok(())
    }

    async fn exists_by_id(&self, isbn: &str) -> AppResult<bool> {
        Ok(self.books.read().await.contains_key(isbn))
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.books.read().await.len() as i64)
    }
}

#[async_trait]
impl PagingRepository for InMemoryBooksRepository {
    async fn find_page(&self, request: PageRequest) -> AppResult<Page<Book>> {
        let books = self.books.read().await;
        let items = books
            .values()
            .skip(usize::try_from(request.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(request.per_page).unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(Page::new(items, books.len() as i64, request))
    }
}

impl BookRepository for InMemoryBooksRepository {}

struct AuthorTable {
    rows: BTreeMap<i64, Author>,
    next_id: i64,
}

impl Default for AuthorTable {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryAuthorsRepository {
    table: Arc<RwLock<AuthorTable>>,
    books: Arc<RwLock<BTreeMap<String, Book>>>,
}

impl InMemoryAuthorsRepository {
    /// Author store whose deletes unlink the matching books in `books`
    pub fn new(books: &InMemoryBooksRepository) -> Self {
        Self {
            table: Arc::default(),
            books: Arc::clone(&books.books),
        }
    }

    async fn filter_by_age(&self, keep: impl Fn(i32) -> bool) -> Vec<Author> {
        self.table
            .read()
            .await
            .rows
            .values()
            .filter(|author| author.age.is_some_and(&keep))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CrudRepository for InMemoryAuthorsRepository {
    type Entity = Author;
    type Id = i64;

    async fn find_by_id(&self, id: &i64) -> AppResult<Option<Author>> {
        Ok(self.table.read().await.rows.get(id).cloned())
    }

    async fn save(&self, mut author: Author) -> AppResult<Author> {
        let mut table = self.table.write().await;
        let id = match author.id {
            Some(id) => id,
            None => table.next_id,
        };
        let following = id
            .checked_add(1)
            .ok_or_else(|| AppError::Validation(format!("Author id {} is out of range", id)))?;
        table.next_id = table.next_id.max(following);
        author.id = Some(id);
        table.rows.insert(id, author.clone());
        Ok(author)
    }

    async fn delete_by_id(&self, id: &i64) -> AppResult<()> {
        let mut table = self.table.write().await;
        if table.rows.remove(id).is_some() {
            let mut books = self.books.write().await;
            for book in books.values_mut().filter(|book| book.author_id == Some(*id)) {
                book.author_id = None;
            }
        }
        Ok(())
    }

    async fn exists_by_id(&self, id: &i64) -> AppResult<bool> {
        Ok(self.table.read().await.rows.contains_key(id))
    }

    async fn find_all(&self) -> AppResult<Vec<Author>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.table.read().await.rows.len() as i64)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorsRepository {
    async fn find_by_age_less_than(&self, age: i32) -> AppResult<Vec<Author>> {
        Ok(self.filter_by_age(|a| a < age).await)
    }

    async fn find_by_age_greater_than(&self, age: i32) -> AppResult<Vec<Author>> {
        Ok(self.filter_by_age(|a| a > age).await)
    }
}
