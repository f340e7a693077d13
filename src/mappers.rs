//! Conversions between persisted records and their HTTP representations

use crate::models::{Author, AuthorDto, AuthorPatch, Book, BookDto, BookPatch};

/// Bidirectional, field-for-field conversion between a record and its DTO
pub trait Mapper<E, D> {
    fn map_to(&self, entity: E) -> D;
    fn map_from(&self, dto: D) -> E;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BookMapper;

impl Mapper<Book, BookDto> for BookMapper {
    fn map_to(&self, book: Book) -> BookDto {
        BookDto {
            isbn: Some(book.isbn),
            title: book.title,
            author_id: book.author_id,
        }
    }

    /// A DTO without an ISBN maps to an empty key; the service pins the real one.
    fn map_from(&self, dto: BookDto) -> Book {
        Book {
            isbn: dto.isbn.unwrap_or_default(),
            title: dto.title,
            author_id: dto.author_id,
        }
    }
}

impl BookMapper {
    /// The ISBN is never patchable, so it is dropped here
    pub fn map_patch(&self, dto: BookDto) -> BookPatch {
        BookPatch {
            title: dto.title,
            author_id: dto.author_id,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorMapper;

impl Mapper<Author, AuthorDto> for AuthorMapper {
    fn map_to(&self, author: Author) -> AuthorDto {
        AuthorDto {
            id: author.id,
            name: author.name,
            age: author.age,
        }
    }

    fn map_from(&self, dto: AuthorDto) -> Author {
        Author {
            id: dto.id,
            name: dto.name,
            age: dto.age,
        }
    }
}

impl AuthorMapper {
    pub fn map_patch(&self, dto: AuthorDto) -> AuthorPatch {
        AuthorPatch {
            name: dto.name,
            age: dto.age,
        }
    }
}
