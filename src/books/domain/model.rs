use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is the stored form of a book in the in-memory collection.
#[derive(Debug, Clone, PartialEq)]
pub struct BookEntity {
    pub id: i64,
    pub title: String,
    pub author: String,
}

impl BookEntity {
    pub fn new(id: i64, title: &str, author: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    // applies the supplied fields and leaves the others and the id alone
    pub fn patch(&mut self, title: Option<&str>, author: Option<&str>) {
        if let Some(title) = title {
            self.title = title.to_string();
        }
        if let Some(author) = author {
            self.author = author.to_string();
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }
}
