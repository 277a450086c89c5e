pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // appends a new book, assigning one more than the highest stored id (1 when empty)
    async fn add(&self, title: &str, author: &str) -> LibraryResult<BookEntity>;

    // replaces the supplied fields of a stored book in one step
    async fn patch(&self, id: i64, title: Option<&str>, author: Option<&str>) -> LibraryResult<BookEntity>;
}
