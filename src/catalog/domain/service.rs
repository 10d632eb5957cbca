use std::collections::HashMap;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::dto::PatronDto;

// Library is the authoritative catalog-and-roster store. It owns every
// book and patron; patrons reference books by catalog key only, and all
// state changes flow through the operations below so the availability
// and limit invariants cannot be bypassed.
#[derive(Debug)]
pub struct Library {
    catalog: HashMap<String, BookEntity>,
    borrow_counts: HashMap<String, u64>,
    patrons: Vec<PatronEntity>,
}

impl Library {
    pub fn new() -> Self {
        Self {
            catalog: HashMap::new(),
            borrow_counts: HashMap::new(),
            patrons: Vec::new(),
        }
    }

    // inserts or overwrites by isbn; an existing borrow count is never
    // reset. If some patron already holds the isbn the overwritten
    // entry stays checked out.
    pub fn add_book(&mut self, book: &BookDto) {
        let mut entity = BookEntity::from(book);
        entity.available = self.holder_of(book.isbn.as_str()).is_none();
        self.borrow_counts.entry(entity.isbn.to_string()).or_insert(0);
        self.catalog.insert(entity.isbn.to_string(), entity);
    }

    // removes the book and its counter, force-returning it from the
    // holder first so that patron's capacity is restored
    pub fn remove_book(&mut self, isbn: &str) -> bool {
        if self.catalog.remove(isbn).is_none() {
            return false;
        }
        self.borrow_counts.remove(isbn);
        for patron in self.patrons.iter_mut() {
            if let Some(pos) = patron.borrowed.iter().position(|held| held == isbn) {
                patron.borrowed.remove(pos);
                break;
            }
        }
        true
    }

    // appends to the roster; ids are unique by caller convention
    pub fn register_patron(&mut self, patron: &PatronDto) {
        self.patrons.push(PatronEntity::from(patron));
    }

    pub fn find_patron(&self, id: &str) -> Option<PatronDto> {
        self.patrons.iter()
            .find(|patron| patron.patron_id == id)
            .map(PatronDto::from)
    }

    // roster in registration order
    pub fn patrons(&self) -> Vec<PatronDto> {
        self.patrons.iter().map(PatronDto::from).collect()
    }

    // case-insensitive exact match; with duplicate titles the winner is
    // whichever the catalog map yields first (an unordered tie)
    pub fn search_book_by_title(&self, title: &str) -> Option<BookDto> {
        let wanted = title.to_lowercase();
        self.catalog.values()
            .find(|book| book.title.to_lowercase() == wanted)
            .map(BookDto::from)
    }

    // case-insensitive exact match, all hits, map iteration order
    pub fn search_books_by_author(&self, author: &str) -> Vec<BookDto> {
        let wanted = author.to_lowercase();
        self.catalog.values()
            .filter(|book| book.author.to_lowercase() == wanted)
            .map(BookDto::from)
            .collect()
    }

    pub fn search_books_by_genre(&self, genre: &str) -> Vec<BookDto> {
        let wanted = genre.to_lowercase();
        self.catalog.values()
            .filter(|book| book.genre.to_lowercase() == wanted)
            .map(BookDto::from)
            .collect()
    }

    // fails without mutating on unknown isbn, unknown patron,
    // unavailable book, or a patron at their role limit
    pub fn borrow_book(&mut self, patron_id: &str, isbn: &str) -> bool {
        if self.claim(patron_id, isbn) {
            *self.borrow_counts.entry(isbn.to_string()).or_insert(0) += 1;
            true
        } else {
            false
        }
    }

    // fails on unknown isbn or when the patron does not hold that exact
    // book; borrow counts are cumulative and stay untouched
    pub fn return_book(&mut self, patron_id: &str, isbn: &str) -> bool {
        if !self.catalog.contains_key(isbn) {
            return false;
        }
        let patron = match self.patrons.iter_mut().find(|p| p.patron_id == patron_id) {
            Some(patron) => patron,
            None => return false,
        };
        let pos = match patron.borrowed.iter().position(|held| held == isbn) {
            Some(pos) => pos,
            None => return false,
        };
        patron.borrowed.remove(pos);
        if let Some(book) = self.catalog.get_mut(isbn) {
            book.available = true;
        }
        true
    }

    pub fn all_books(&self) -> Vec<BookDto> {
        self.catalog.values().map(BookDto::from).collect()
    }

    pub fn available_books(&self) -> Vec<BookDto> {
        self.catalog.values()
            .filter(|book| book.available)
            .map(BookDto::from)
            .collect()
    }

    pub fn book_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn borrow_count(&self, isbn: &str) -> u64 {
        self.borrow_counts.get(isbn).copied().unwrap_or(0)
    }

    // assigns the book without bumping the counter; used by the
    // persistence adapter to rebuild open loans, where a reload is not
    // a new borrow
    pub(crate) fn restore_loan(&mut self, patron_id: &str, isbn: &str) -> bool {
        self.claim(patron_id, isbn)
    }

    pub(crate) fn book_entity(&self, isbn: &str) -> Option<&BookEntity> {
        self.catalog.get(isbn)
    }

    pub(crate) fn book_entities(&self) -> impl Iterator<Item = &BookEntity> {
        self.catalog.values()
    }

    pub(crate) fn patron_entities(&self) -> &[PatronEntity] {
        self.patrons.as_slice()
    }

    pub(crate) fn borrow_counts(&self) -> &HashMap<String, u64> {
        &self.borrow_counts
    }

    pub(crate) fn borrow_counts_mut(&mut self) -> &mut HashMap<String, u64> {
        &mut self.borrow_counts
    }

    fn holder_of(&self, isbn: &str) -> Option<&PatronEntity> {
        self.patrons.iter().find(|patron| patron.holds(isbn))
    }

    fn claim(&mut self, patron_id: &str, isbn: &str) -> bool {
        let available = match self.catalog.get(isbn) {
            Some(book) => book.available,
            None => return false,
        };
        if !available {
            return false;
        }
        let patron = match self.patrons.iter_mut().find(|p| p.patron_id == patron_id) {
            Some(patron) => patron,
            None => return false,
        };
        if patron.at_limit() {
            return false;
        }
        patron.borrowed.push(isbn.to_string());
        if let Some(book) = self.catalog.get_mut(isbn) {
            book.available = false;
        }
        true
    }
}

impl Default for Library {
    fn default() -> Self {
        Library::new()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> BookDto {
        BookDto {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            available: other.available,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> BookEntity {
        BookEntity {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            available: other.available,
        }
    }
}

impl From<&PatronEntity> for PatronDto {
    fn from(other: &PatronEntity) -> PatronDto {
        PatronDto {
            patron_id: other.patron_id.to_string(),
            name: other.name.to_string(),
            role: other.role,
            borrowed: other.borrowed.clone(),
        }
    }
}

impl From<&PatronDto> for PatronEntity {
    fn from(other: &PatronDto) -> PatronEntity {
        PatronEntity {
            patron_id: other.patron_id.to_string(),
            name: other.name.to_string(),
            role: other.role,
            borrowed: other.borrowed.clone(),
        }
    }
}
