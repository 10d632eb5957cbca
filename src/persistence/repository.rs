pub mod file_repository;

use serde::{Deserialize, Serialize};
use crate::catalog::domain::service::Library;

// LibraryRepository abstracts durable storage for the whole store.
// Load and save never fail upward; they make best-effort progress and
// describe the outcome in the returned report so callers can tell a
// clean round-trip from a degraded one.
pub trait LibraryRepository {
    fn load(&self, library: &mut Library) -> LoadReport;
    fn save(&self, library: &Library) -> SaveReport;
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    // records restored per table
    pub books: usize,
    pub patrons: usize,
    pub counters: usize,
    pub loans: usize,
    // malformed or unrestorable rows dropped along the way
    pub skipped_rows: usize,
    // set when load aborted partway; the store keeps what it got
    pub failure: Option<String>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failure.is_none() && self.skipped_rows == 0
    }
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct SaveReport {
    pub failure: Option<String>,
}

impl SaveReport {
    pub fn is_clean(&self) -> bool {
        self.failure.is_none()
    }
}
