use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for catalog queries; presentation
// shells only ever see these clones, never the store-owned entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub available: bool,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str, genre: &str) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            available: true,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn from_json(data: String) -> Option<BookDto> {
        if let Ok(book) = serde_json::from_str(data.as_str()) {
            Some(book)
        } else {
            None
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn genre(&self) -> &str {
        self.genre.as_str()
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} [{}]", self.title, self.author,
               if self.available { "Available" } else { "Borrowed" })
    }
}
