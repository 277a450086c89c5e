use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;

pub fn seed_books() -> Vec<BookEntity> {
    vec![
        BookEntity::new(1, "The Lord of the Rings", "J.R.R. Tolkien"),
        BookEntity::new(2, "Pride and Prejudice", "Jane Austen"),
        BookEntity::new(3, "To Kill a Mockingbird", "Harper Lee"),
    ]
}

pub(crate) fn create_book_repository(config: &Configuration) -> Box<dyn BookRepository> {
    if config.seed_books {
        Box::new(MemoryBookRepository::with_books(seed_books()))
    } else {
        Box::new(MemoryBookRepository::new())
    }
}
