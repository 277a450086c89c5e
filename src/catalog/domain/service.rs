use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::{parse_book_id, Book, BOOK_NOT_FOUND, TITLE_AND_AUTHOR_REQUIRED};
use crate::books::dto::{BookDto, BookFieldsDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct CatalogServiceImpl {
    stage: String,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            stage: config.stage.to_string(),
            book_repository,
        }
    }
}

// a path id that is not a number can never match a stored book
fn book_id(id: &str) -> LibraryResult<i64> {
    parse_book_id(id).ok_or_else(|| LibraryError::not_found(BOOK_NOT_FOUND))
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.list().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn add_book(&self, book: &BookFieldsDto) -> LibraryResult<BookDto> {
        let (title, author) = match (book.title(), book.author()) {
            (Some(title), Some(author)) => (title, author),
            _ => {
                warn!(stage = %self.stage, "rejected book without title or author");
                return Err(LibraryError::validation(TITLE_AND_AUTHOR_REQUIRED, None));
            }
        };
        let added = BookDto::from(&self.book_repository.add(title, author).await?);
        info!(stage = %self.stage, book_id = added.id(), title = added.title(), "added book");
        Ok(added)
    }

    async fn update_book(&self, id: &str, changes: &BookFieldsDto) -> LibraryResult<BookDto> {
        let id = book_id(id)?;
        let updated = self.book_repository.patch(id, changes.title(), changes.author()).await?;
        info!(stage = %self.stage, book_id = updated.id(), "updated book");
        Ok(BookDto::from(&updated))
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<()> {
        let id = book_id(id)?;
        let _ = self.book_repository.delete(id).await?;
        info!(stage = %self.stage, book_id = id, "removed book");
        Ok(())
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        let id = book_id(id)?;
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }
}
