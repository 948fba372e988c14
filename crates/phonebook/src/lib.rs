//! `phonebook` - A minimal flat-file contact book
//!
//! This library provides validation of contact fields, an append-only
//! line-oriented record store, and the interactive create-or-search session
//! that ties them together over injected console streams.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod contact;
pub mod error;
pub mod logging;
pub mod session;
pub mod storage;
pub mod validation;

pub use config::Config;
pub use console::{Console, Prompt, StdConsole};
pub use contact::{Contact, FieldKind};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use session::{Outcome, Session, SessionState};
pub use storage::{FileStore, MemoryStore, RecordStore, SearchResults, StoreStats};
pub use validation::validate;
