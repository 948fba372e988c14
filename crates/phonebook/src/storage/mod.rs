//! Storage layer for phonebook.
//!
//! Records are raw `name,number` lines kept in insertion order. The
//! [`RecordStore`] trait is the seam between the session logic and the
//! backing medium: [`FileStore`] keeps a flat text file, [`MemoryStore`]
//! keeps a vector and is used in tests.
//!
//! Stores are append-only. Nothing here rewrites or removes a line once it
//! has been written.

mod file;
mod memory;

use serde::Serialize;

use crate::contact::Contact;
use crate::error::{Error, Result};

pub use file::{FileStore, DEFAULT_STORE_FILE};
pub use memory::MemoryStore;

/// An append-only, line-oriented contact store.
pub trait RecordStore {
    /// Human-readable location of the store, for diagnostics.
    fn location(&self) -> String;

    /// Append one contact as a new record.
    ///
    /// Either the whole line is written or the call fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreWrite`] if the record cannot be written.
    fn append(&mut self, contact: &Contact) -> Result<()>;

    /// Visit every raw record line in insertion order.
    ///
    /// A store that does not exist yet has no lines. If reading fails part
    /// way, the lines already passed to `visit` stay visited and the error is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreRead`] if the records cannot be read.
    fn scan(&self, visit: &mut dyn FnMut(&str)) -> Result<()>;

    /// Summary figures for the store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreRead`] if the records cannot be read.
    fn stats(&self) -> Result<StoreStats>;

    /// Collect every record line in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreRead`] if the records cannot be read.
    fn scan_all(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        self.scan(&mut |line| lines.push(line.to_string()))?;
        Ok(lines)
    }

    /// Find every record whose line contains `query`, ignoring case.
    ///
    /// The match runs against the whole raw line, not just the name. Results
    /// keep file order and are not deduplicated. A read failure does not
    /// discard matches collected before it; see [`SearchResults::error`].
    fn search(&self, query: &str) -> SearchResults {
        let needle = query.to_lowercase();
        let mut matches = Vec::new();
        let error = self
            .scan(&mut |line| {
                if line.to_lowercase().contains(&needle) {
                    matches.push(line.to_string());
                }
            })
            .err();

        SearchResults { matches, error }
    }
}

/// Outcome of a [`RecordStore::search`].
#[derive(Debug)]
pub struct SearchResults {
    /// Matching raw lines, in store order.
    pub matches: Vec<String>,
    /// The failure that cut the scan short, if any.
    pub error: Option<Error>,
}

impl SearchResults {
    /// Whether nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Statistics about a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Where the records live.
    pub location: String,
    /// Whether the backing medium exists yet.
    pub exists: bool,
    /// Number of record lines.
    pub records: usize,
    /// Size of the stored data in bytes, terminators included.
    pub size_bytes: u64,
}
