pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDto, BookFieldsDto};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn add_book(&self, book: &BookFieldsDto) -> LibraryResult<BookDto>;
    async fn update_book(&self, id: &str, changes: &BookFieldsDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: &str) -> LibraryResult<()>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
}
