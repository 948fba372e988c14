//! Flat-file record store.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::{RecordStore, StoreStats};
use crate::contact::Contact;
use crate::error::{Error, Result};

/// Default store file, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "phoneNums.csv";

/// A store backed by a plain text file, one `name,number` line per record.
///
/// Every operation opens the file, does its work and closes it again before
/// returning, on success and failure alike. The file is created by the first
/// append; its parent directory must already exist. There is no cross-process
/// locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    /// Path to the store file.
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the file at `path`. Nothing is touched on disk.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()
    }

    fn read_error(&self, source: std::io::Error) -> Error {
        Error::StoreRead {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

impl RecordStore for FileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn append(&mut self, contact: &Contact) -> Result<()> {
        // One buffer, one write: the record and its terminator land together.
        let mut line = contact.to_record();
        line.push('\n');

        self.write_line(&line).map_err(|source| Error::StoreWrite {
            path: self.path.clone(),
            source,
        })?;

        debug!("Appended record to {}", self.path.display());
        Ok(())
    }

    fn scan(&self, visit: &mut dyn FnMut(&str)) -> Result<()> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Store {} does not exist yet", self.path.display());
                return Ok(());
            }
            Err(source) => return Err(self.read_error(source)),
        };

        let mut visited = 0usize;
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| self.read_error(source))?;
            visit(line.as_str());
            visited += 1;
        }

        trace!("Scanned {} records from {}", visited, self.path.display());
        Ok(())
    }

    fn stats(&self) -> Result<StoreStats> {
        let size_bytes = match std::fs::metadata(&self.path) {
            Ok(meta) => Some(meta.len()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(source) => return Err(self.read_error(source)),
        };

        let mut records = 0usize;
        self.scan(&mut |_| records += 1)?;

        Ok(StoreStats {
            location: self.location(),
            exists: size_bytes.is_some(),
            records,
            size_bytes: size_bytes.unwrap_or(0),
        })
    }
}
