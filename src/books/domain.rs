use crate::core::domain::Identifiable;

pub mod model;

pub const BOOK_NOT_FOUND: &str = "Book not found.";
pub const TITLE_AND_AUTHOR_REQUIRED: &str = "Title and author are required.";

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
}

/// Reads a book id out of a path segment the way a lenient integer parser does: leading
/// whitespace is skipped, a sign is accepted, and the longest run of digits that follows is
/// used. Returns `None` when no digits are found or the value does not fit.
pub fn parse_book_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value = rest[..digits_len].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}
