use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity abstracts a physical book in the catalog, keyed by isbn.
// The descriptive fields never change after creation; only availability
// flips as the book is borrowed and returned, and only the Library
// store is allowed to flip it.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub available: bool,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str, genre: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            available: true,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
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

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;

    #[test]
    fn test_should_build_books() {
        let book = BookEntity::new("11111", "Effective Java", "Joshua Bloch", "Programming");
        assert_eq!("11111", book.isbn.as_str());
        assert_eq!("Effective Java", book.title.as_str());
        assert_eq!("Joshua Bloch", book.author.as_str());
        assert_eq!("Programming", book.genre.as_str());
        assert!(book.available);
    }
}
