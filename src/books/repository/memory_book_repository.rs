use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::books::domain::BOOK_NOT_FOUND;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

/// Process-lifetime book collection kept in insertion order.
///
/// Every mutation runs under a single write lock, so id allocation and the append that follows
/// it cannot interleave with another request.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<BookEntity>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

fn next_id(books: &[BookEntity]) -> i64 {
    books.iter().map(|b| b.id).max().map_or(1, |max| max + 1)
}

fn not_found(id: i64) -> LibraryError {
    debug!(book_id = id, "book not found");
    LibraryError::not_found(BOOK_NOT_FOUND)
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn get(&self, id: i64) -> LibraryResult<BookEntity> {
        let books = self.books.read().await;
        books.iter().find(|b| b.id == id).cloned().ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        let before = books.len();
        books.retain(|b| b.id != id);
        let removed = before - books.len();
        if removed == 0 {
            return Err(not_found(id));
        }
        Ok(removed)
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.clone())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn add(&self, title: &str, author: &str) -> LibraryResult<BookEntity> {
        let mut books = self.books.write().await;
        let book = BookEntity::new(next_id(&books), title, author);
        books.push(book.clone());
        Ok(book)
    }

    async fn patch(&self, id: i64, title: Option<&str>, author: Option<&str>) -> LibraryResult<BookEntity> {
        let mut books = self.books.write().await;
        let book = books.iter_mut().find(|b| b.id == id).ok_or_else(|| not_found(id))?;
        book.patch(title, author);
        Ok(book.clone())
    }
}
