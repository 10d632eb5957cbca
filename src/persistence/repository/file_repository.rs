use std::fs;
use std::path::PathBuf;
use tracing::{error, warn};
use crate::books::dto::BookDto;
use crate::catalog::domain::service::Library;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryResult, Role};
use crate::patrons::dto::PatronDto;
use crate::persistence::repository::{LibraryRepository, LoadReport, SaveReport};

const BOOKS_FILE: &str = "books.csv";
const PATRONS_FILE: &str = "patrons.csv";
const LOANS_FILE: &str = "loans.csv";
const COUNTERS_FILE: &str = "counters.csv";
const DELIMITER: &str = ",";

// FileLibraryRepository persists the store as four comma-delimited
// tables under a data directory:
//   books.csv    => isbn,title,author,genre,available
//   patrons.csv  => id,role,name
//   loans.csv    => patronId,isbn   (currently open loans only)
//   counters.csv => isbn,cumulativeBorrowCount
// Every save rewrites all four tables in full; loans and counters are
// regenerated from the live store, never appended.
#[derive(Debug)]
pub struct FileLibraryRepository {
    data_dir: PathBuf,
}

impl FileLibraryRepository {
    pub fn new(config: &Configuration) -> Self {
        Self {
            data_dir: PathBuf::from(config.data_dir.as_str()),
        }
    }

    fn ensure_dir(&self) -> LibraryResult<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(self.data_dir.as_path())?;
        }
        Ok(())
    }

    // a missing table reads as empty; blank lines are not records
    fn read_rows(&self, file: &str) -> LibraryResult<Vec<String>> {
        let path = self.data_dir.join(file);
        if !path.exists() {
            return Ok(vec![]);
        }
        let contents = fs::read_to_string(path.as_path())?;
        Ok(contents.lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn write_rows(&self, file: &str, lines: Vec<String>) -> LibraryResult<()> {
        let mut contents = lines.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        fs::write(self.data_dir.join(file), contents)?;
        Ok(())
    }

    fn load_into(&self, library: &mut Library, report: &mut LoadReport) -> LibraryResult<()> {
        self.ensure_dir()?;
        self.load_books(library, report)?;
        self.load_patrons(library, report)?;
        self.load_counters(library, report)?;
        self.load_loans(library, report)?;
        Ok(())
    }

    fn load_books(&self, library: &mut Library, report: &mut LoadReport) -> LibraryResult<()> {
        for line in self.read_rows(BOOKS_FILE)? {
            let fields = match split_row(line.as_str(), 5) {
                Some(fields) => fields,
                None => {
                    skip_row(report, BOOKS_FILE, line.as_str());
                    continue;
                }
            };
            // the persisted availability flag is advisory: every book
            // starts available and only the loans table marks it held
            library.add_book(&BookDto::new(fields[0], fields[1], fields[2], fields[3]));
            report.books += 1;
        }
        Ok(())
    }

    fn load_patrons(&self, library: &mut Library, report: &mut LoadReport) -> LibraryResult<()> {
        for line in self.read_rows(PATRONS_FILE)? {
            let fields = match split_row(line.as_str(), 3) {
                Some(fields) => fields,
                None => {
                    skip_row(report, PATRONS_FILE, line.as_str());
                    continue;
                }
            };
            let role = match Role::from_tag(fields[1]) {
                Some(role) => role,
                None => {
                    skip_row(report, PATRONS_FILE, line.as_str());
                    continue;
                }
            };
            library.register_patron(&PatronDto::with_id(fields[0], fields[2], role));
            report.patrons += 1;
        }
        Ok(())
    }

    fn load_counters(&self, library: &mut Library, report: &mut LoadReport) -> LibraryResult<()> {
        for line in self.read_rows(COUNTERS_FILE)? {
            let fields = match split_row(line.as_str(), 2) {
                Some(fields) => fields,
                None => {
                    skip_row(report, COUNTERS_FILE, line.as_str());
                    continue;
                }
            };
            let count: u64 = match fields[1].parse() {
                Ok(count) => count,
                Err(_) => {
                    skip_row(report, COUNTERS_FILE, line.as_str());
                    continue;
                }
            };
            // loaded values overwrite the zeros installed by add_book
            library.borrow_counts_mut().insert(fields[0].to_string(), count);
            report.counters += 1;
        }
        Ok(())
    }

    fn load_loans(&self, library: &mut Library, report: &mut LoadReport) -> LibraryResult<()> {
        for line in self.read_rows(LOANS_FILE)? {
            let fields = match split_row(line.as_str(), 2) {
                Some(fields) => fields,
                None => {
                    skip_row(report, LOANS_FILE, line.as_str());
                    continue;
                }
            };
            // first writer wins: a row loses when its patron or book is
            // unknown, the book is already claimed by an earlier row,
            // or the patron is at their limit
            if library.restore_loan(fields[0], fields[1]) {
                report.loans += 1;
            } else {
                warn!("dropping unrestorable loan row {:?} in {}", line, LOANS_FILE);
                report.skipped_rows += 1;
            }
        }
        Ok(())
    }

    fn save_from(&self, library: &Library) -> LibraryResult<()> {
        self.ensure_dir()?;
        self.save_books(library)?;
        self.save_patrons(library)?;
        self.save_loans(library)?;
        self.save_counters(library)?;
        Ok(())
    }

    fn save_books(&self, library: &Library) -> LibraryResult<()> {
        let lines = library.book_entities()
            .map(|book| [
                sanitize(book.isbn.as_str()),
                sanitize(book.title.as_str()),
                sanitize(book.author.as_str()),
                sanitize(book.genre.as_str()),
                book.available.to_string(),
            ].join(DELIMITER))
            .collect();
        self.write_rows(BOOKS_FILE, lines)
    }

    fn save_patrons(&self, library: &Library) -> LibraryResult<()> {
        let lines = library.patron_entities().iter()
            .map(|patron| [
                sanitize(patron.patron_id.as_str()),
                patron.role.to_string(),
                sanitize(patron.name.as_str()),
            ].join(DELIMITER))
            .collect();
        self.write_rows(PATRONS_FILE, lines)
    }

    fn save_loans(&self, library: &Library) -> LibraryResult<()> {
        let mut lines = vec![];
        for patron in library.patron_entities() {
            for isbn in patron.borrowed.iter() {
                lines.push([
                    sanitize(patron.patron_id.as_str()),
                    sanitize(isbn.as_str()),
                ].join(DELIMITER));
            }
        }
        self.write_rows(LOANS_FILE, lines)
    }

    fn save_counters(&self, library: &Library) -> LibraryResult<()> {
        let lines = library.borrow_counts().iter()
            .map(|(isbn, count)| format!("{}{}{}", sanitize(isbn.as_str()), DELIMITER, count))
            .collect();
        self.write_rows(COUNTERS_FILE, lines)
    }
}

impl LibraryRepository for FileLibraryRepository {
    fn load(&self, library: &mut Library) -> LoadReport {
        let mut report = LoadReport::default();
        if let Err(err) = self.load_into(library, &mut report) {
            error!("load from {:?} failed: {}", self.data_dir, err);
            report.failure = Some(err.to_string());
        }
        report
    }

    fn save(&self, library: &Library) -> SaveReport {
        let mut report = SaveReport::default();
        if let Err(err) = self.save_from(library) {
            error!("save to {:?} failed: {}", self.data_dir, err);
            report.failure = Some(err.to_string());
        }
        report
    }
}

fn split_row(line: &str, expected: usize) -> Option<Vec<&str>> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() == expected {
        Some(fields)
    } else {
        None
    }
}

fn skip_row(report: &mut LoadReport, file: &str, line: &str) {
    warn!("skipping malformed row {:?} in {}", line, file);
    report.skipped_rows += 1;
}

// the format cannot carry the delimiter or line breaks; they degrade
// to spaces on the way out
fn sanitize(value: &str) -> String {
    value.replace(['\n', '\r'], " ")
        .replace(DELIMITER, " ")
        .trim()
        .to_string()
}
