use lazy_static::lazy_static;
use crate::books::dto::BookDto;
use crate::catalog::domain::service::Library;
use crate::core::library::Role;
use crate::patrons::dto::PatronDto;

lazy_static! {
    static ref SAMPLE_BOOKS: Vec<BookDto> = vec![
        BookDto::new("11111", "Effective Java", "Joshua Bloch", "Programming"),
        BookDto::new("22222", "Clean Code", "Robert C. Martin", "Programming"),
        BookDto::new("33333", "Design Patterns", "GoF", "Programming"),
        BookDto::new("44444", "Dune", "Frank Herbert", "Science Fiction"),
        BookDto::new("55555", "Neuromancer", "William Gibson", "Science Fiction"),
        BookDto::new("66666", "Sapiens", "Yuval Noah Harari", "History"),
        BookDto::new("77777", "Educated", "Tara Westover", "Memoir"),
        BookDto::new("88888", "The Hobbit", "J.R.R. Tolkien", "Fantasy"),
        BookDto::new("99999", "Atomic Habits", "James Clear", "Self-Help"),
    ];
    static ref SAMPLE_PATRONS: Vec<PatronDto> = vec![
        PatronDto::with_id("S001", "Alice", Role::Student),
        PatronDto::with_id("T001", "Dr. Bob", Role::Teacher),
        PatronDto::with_id("A001", "Charlie (Admin)", Role::Admin),
    ];
}

// first-run convenience: fills the store with a browsable catalog and a
// small roster. Shells decide when to call it (typically when a load
// produced an empty catalog).
pub fn seed_sample_library(library: &mut Library) {
    for book in SAMPLE_BOOKS.iter() {
        library.add_book(book);
    }
    for patron in SAMPLE_PATRONS.iter() {
        library.register_patron(patron);
    }
}
