use std::cmp::Reverse;
use std::collections::HashMap;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::service::Library;

// RecommendationEngine ranks available books for a patron by content
// affinity and popularity. It is a pure read over the store: no state
// of its own, no side effects.
pub struct RecommendationEngine<'a> {
    library: &'a Library,
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(library: &'a Library) -> Self {
        Self { library }
    }

    // Affinity comes from the genres the patron holds right now, not
    // their full borrow history. Preferred genres rank by held count,
    // ties broken lexically so the ordering is deterministic; books in
    // genres the patron does not hold sort last. Within a genre rank
    // the order is popularity descending, then title ascending
    // (case-insensitive). An unknown patron or an empty shelf falls
    // back to the popularity/title baseline alone.
    pub fn recommend_for(&self, patron_id: &str, limit: usize) -> Vec<BookDto> {
        let genre_counts = self.tally_held_genres(patron_id);

        let mut candidates: Vec<&BookEntity> = self.library.book_entities()
            .filter(|book| book.available)
            .collect();

        if genre_counts.is_empty() {
            candidates.sort_by_key(|book| self.baseline_key(book));
        } else {
            let preference = genre_preference_ranks(genre_counts);
            candidates.sort_by_key(|book| {
                let rank = preference.get(book.genre.as_str()).copied().unwrap_or(usize::MAX);
                let (popularity, title) = self.baseline_key(book);
                (rank, popularity, title)
            });
        }

        candidates.truncate(limit);
        candidates.into_iter().map(BookDto::from).collect()
    }

    fn tally_held_genres(&self, patron_id: &str) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        if let Some(patron) = self.library.find_patron(patron_id) {
            for isbn in patron.borrowed.iter() {
                if let Some(book) = self.library.book_entity(isbn.as_str()) {
                    *counts.entry(book.genre.to_string()).or_insert(0) += 1;
                }
            }
        }
        counts
    }

    fn baseline_key(&self, book: &BookEntity) -> (Reverse<u64>, String) {
        (Reverse(self.library.borrow_count(book.isbn.as_str())), book.title.to_lowercase())
    }
}

// most-held genre gets rank 0; equal counts rank lexically
fn genre_preference_ranks(genre_counts: HashMap<String, usize>) -> HashMap<String, usize> {
    let mut ranked: Vec<(String, usize)> = genre_counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter()
        .enumerate()
        .map(|(rank, (genre, _))| (genre, rank))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::domain::service::Library;
    use crate::core::library::Role;
    use crate::patrons::dto::PatronDto;
    use crate::recommend::domain::service::RecommendationEngine;

    fn bump_borrow_count(library: &mut Library, isbn: &str, times: u64) {
        if library.find_patron("bumper").is_none() {
            library.register_patron(&PatronDto::with_id("bumper", "Bumper", Role::Admin));
        }
        for _ in 0..times {
            assert!(library.borrow_book("bumper", isbn));
            assert!(library.return_book("bumper", isbn));
        }
    }

    #[test]
    fn test_should_prefer_genres_the_patron_holds() {
        let mut library = Library::new();
        library.add_book(&BookDto::new("1", "Dune", "Frank Herbert", "Science Fiction"));
        library.add_book(&BookDto::new("2", "Neuromancer", "William Gibson", "Science Fiction"));
        library.add_book(&BookDto::new("3", "Hyperion", "Dan Simmons", "Science Fiction"));
        library.add_book(&BookDto::new("4", "Sapiens", "Yuval Noah Harari", "History"));
        bump_borrow_count(&mut library, "3", 2);
        bump_borrow_count(&mut library, "4", 5);

        library.register_patron(&PatronDto::with_id("S001", "Alice", Role::Student));
        assert!(library.borrow_book("S001", "1"));
        assert!(library.borrow_book("S001", "2"));

        let recs = RecommendationEngine::new(&library).recommend_for("S001", 5);
        // the held genre wins even against a more popular history title
        assert_eq!(2, recs.len());
        assert_eq!("Hyperion", recs[0].title.as_str());
        assert_eq!("Sapiens", recs[1].title.as_str());
    }

    #[test]
    fn test_should_rank_by_popularity_when_holding_nothing() {
        let mut library = Library::new();
        library.add_book(&BookDto::new("1", "Educated", "Tara Westover", "Memoir"));
        library.add_book(&BookDto::new("2", "Sapiens", "Yuval Noah Harari", "History"));
        library.add_book(&BookDto::new("3", "atomic habits", "James Clear", "Self-Help"));
        bump_borrow_count(&mut library, "2", 3);
        library.register_patron(&PatronDto::with_id("S001", "Alice", Role::Student));

        let recs = RecommendationEngine::new(&library).recommend_for("S001", 5);
        assert_eq!(3, recs.len());
        assert_eq!("Sapiens", recs[0].title.as_str());
        // equal popularity falls back to case-insensitive title order
        assert_eq!("atomic habits", recs[1].title.as_str());
        assert_eq!("Educated", recs[2].title.as_str());
    }

    #[test]
    fn test_should_break_genre_count_ties_lexically() {
        let mut library = Library::new();
        library.add_book(&BookDto::new("1", "The Hobbit", "J.R.R. Tolkien", "Fantasy"));
        library.add_book(&BookDto::new("2", "Sapiens", "Yuval Noah Harari", "History"));
        library.add_book(&BookDto::new("3", "Elantris", "Brandon Sanderson", "Fantasy"));
        library.add_book(&BookDto::new("4", "Educated", "Tara Westover", "History"));
        bump_borrow_count(&mut library, "2", 4);

        library.register_patron(&PatronDto::with_id("T001", "Dr. Bob", Role::Teacher));
        assert!(library.borrow_book("T001", "1"));
        assert!(library.borrow_book("T001", "4"));

        // Fantasy and History are both held once; Fantasy sorts first
        let recs = RecommendationEngine::new(&library).recommend_for("T001", 5);
        assert_eq!(2, recs.len());
        assert_eq!("Elantris", recs[0].title.as_str());
        assert_eq!("Sapiens", recs[1].title.as_str());
    }

    #[test]
    fn test_should_exclude_unavailable_books() {
        let mut library = Library::new();
        library.add_book(&BookDto::new("1", "Dune", "Frank Herbert", "Science Fiction"));
        library.add_book(&BookDto::new("2", "Neuromancer", "William Gibson", "Science Fiction"));
        library.register_patron(&PatronDto::with_id("S001", "Alice", Role::Student));
        assert!(library.borrow_book("S001", "1"));

        let recs = RecommendationEngine::new(&library).recommend_for("S001", 5);
        assert_eq!(1, recs.len());
        assert_eq!("Neuromancer", recs[0].title.as_str());
    }

    #[test]
    fn test_should_truncate_to_limit() {
        let mut library = Library::new();
        for (isbn, title) in [("1", "A"), ("2", "B"), ("3", "C")] {
            library.add_book(&BookDto::new(isbn, title, "Author", "Genre"));
        }
        library.register_patron(&PatronDto::with_id("S001", "Alice", Role::Student));

        let engine = RecommendationEngine::new(&library);
        assert_eq!(2, engine.recommend_for("S001", 2).len());
        assert!(engine.recommend_for("S001", 0).is_empty());
        assert_eq!(3, engine.recommend_for("S001", 10).len());
    }

    #[test]
    fn test_should_fall_back_to_baseline_for_unknown_patron() {
        let mut library = Library::new();
        library.add_book(&BookDto::new("1", "Educated", "Tara Westover", "Memoir"));
        library.add_book(&BookDto::new("2", "Sapiens", "Yuval Noah Harari", "History"));
        bump_borrow_count(&mut library, "1", 1);

        let recs = RecommendationEngine::new(&library).recommend_for("ghost", 5);
        assert_eq!(2, recs.len());
        assert_eq!("Educated", recs[0].title.as_str());
    }
}
