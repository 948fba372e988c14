//! In-memory record store.

use super::{RecordStore, StoreStats};
use crate::contact::Contact;
use crate::error::Result;

/// A store that keeps its records in a vector.
///
/// Follows the same contract as [`super::FileStore`] without touching disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    lines: Vec<String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with raw record lines.
    #[must_use]
    pub fn with_records<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn location(&self) -> String {
        ":memory:".to_string()
    }

    fn append(&mut self, contact: &Contact) -> Result<()> {
        self.lines.push(contact.to_record());
        Ok(())
    }

    fn scan(&self, visit: &mut dyn FnMut(&str)) -> Result<()> {
        for line in &self.lines {
            visit(line.as_str());
        }
        Ok(())
    }

    fn stats(&self) -> Result<StoreStats> {
        let size: usize = self.lines.iter().map(|line| line.len() + 1).sum();
        Ok(StoreStats {
            location: self.location(),
            exists: true,
            records: self.lines.len(),
            size_bytes: size as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.scan_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_n_records() {
        let mut store = MemoryStore::new();
        for i in 0..5 {
            let number = i.to_string();
            store.append(&Contact::new("Same Name", &number).unwrap()).unwrap();
        }
        assert_eq!(store.len(), 5);
        assert_eq!(
            store.scan_all().unwrap(),
            vec![
                "Same Name,0",
                "Same Name,1",
                "Same Name,2",
                "Same Name,3",
                "Same Name,4",
            ]
        );
    }

    #[test]
    fn test_stats() {
        let store = MemoryStore::with_records(["Al,1", "Bo,22"]);
        let stats = store.stats().unwrap();
        assert_eq!(stats.records, 2);
        assert_eq!(stats.size_bytes, ("Al,1\n".len() + "Bo,22\n".len()) as u64);
        assert_eq!(stats.size_bytes, 11);
        assert_eq!(stats.location, ":memory:");
    }
}
