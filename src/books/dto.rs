use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

// BookDto is the wire shape of a book: `{ "id", "title", "author" }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
}

impl BookDto {
    pub fn new(id: i64, title: &str, author: &str) -> BookDto {
        BookDto {
            id,
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.to_string(),
        }
    }
}

/// Caller-supplied book fields for create and update. Fields are read by truthiness: a
/// missing field, `null`, `false`, `0` or `""` counts as not supplied. Any other non-string
/// value is kept as its JSON text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BookFieldsDto {
    #[serde(default, deserialize_with = "truthy_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub author: Option<String>,
}

fn truthy_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value: Option<Value> = Deserialize::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

impl BookFieldsDto {
    pub fn new(title: Option<&str>, author: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            author: author.map(str::to_string),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|s| !s.is_empty())
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref().filter(|s| !s.is_empty())
    }
}
