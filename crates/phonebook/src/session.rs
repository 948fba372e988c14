//! The interactive session.
//!
//! A session asks once whether to create or search, performs that one
//! action against a [`RecordStore`], and finishes:
//!
//! ```text
//! AwaitingChoice --"C"--> Creating  --> Done
//!  |    ^        --"S"--> Searching --> Done
//!  +----+ anything else
//! ```
//!
//! Store failures are reported on the console's error stream and end the
//! action; they are not returned as errors. Only console failures (including
//! closed input) escape [`Session::run`].

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, info};

use crate::console::{Console, Prompt};
use crate::contact::Contact;
use crate::error::{Error, Result};
use crate::storage::RecordStore;

/// The menu question.
pub const MENU_PROMPT: &str = "[S]earch for existing contact, or [C]reate a new contact? (S/C)";

/// Printed when the menu answer is neither `S` nor `C`.
pub const INVALID_CHOICE: &str = "INVALID INPUT. Please enter [S] or [C].";

/// Printed after a successful append.
pub const CREATED: &str = "Success! Contact added.";

/// Header printed before search results.
pub const MATCHES_FOUND: &str = "Matches found:";

/// Printed when a search finds nothing.
pub const NO_MATCHES: &str = "No matches found.";

/// States of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for `S` or `C`.
    AwaitingChoice,
    /// Collecting and appending a new contact.
    Creating,
    /// Collecting a query and scanning the store.
    Searching,
    /// Finished.
    Done,
}

/// The action picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Add a contact.
    Create,
    /// Look up contacts.
    Search,
}

impl FromStr for Choice {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "C" => Ok(Self::Create),
            "S" => Ok(Self::Search),
            _ => Err(()),
        }
    }
}

impl From<Choice> for SessionState {
    fn from(choice: Choice) -> Self {
        match choice {
            Choice::Create => Self::Creating,
            Choice::Search => Self::Searching,
        }
    }
}

/// What a finished session did.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The contact was appended.
    Created(Contact),
    /// The contact was valid but could not be written.
    CreateFailed(Contact),
    /// A search ran; `matches` holds whatever was found before any failure.
    Searched {
        /// Query as entered.
        query: String,
        /// Matching raw lines, in store order.
        matches: Vec<String>,
        /// Whether a read failure cut the scan short.
        interrupted: bool,
    },
}

/// One pass through the menu and the chosen action.
#[derive(Debug)]
pub struct Session<'a, S: ?Sized> {
    store: &'a mut S,
    state: SessionState,
}

impl<'a, S: RecordStore + ?Sized> Session<'a, S> {
    /// Start a session against `store`.
    pub fn new(store: &'a mut S) -> Self {
        Self {
            store,
            state: SessionState::AwaitingChoice,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run the session to completion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] if input ends before the action
    /// completes, or an I/O error if the console streams fail.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        console: &mut Console<R, W, E>,
    ) -> Result<Outcome> {
        let choice = Self::await_choice(console)?;
        self.state = choice.into();
        debug!(state = ?self.state, "Menu choice accepted");

        let outcome = match choice {
            Choice::Create => self.create(console)?,
            Choice::Search => self.search(console)?,
        };
        self.state = SessionState::Done;
        Ok(outcome)
    }

    fn await_choice<R: BufRead, W: Write, E: Write>(
        console: &mut Console<R, W, E>,
    ) -> Result<Choice> {
        loop {
            console.say(MENU_PROMPT)?;
            match console.read_line()?.parse::<Choice>() {
                Ok(choice) => return Ok(choice),
                Err(()) => console.say(INVALID_CHOICE)?,
            }
        }
    }

    fn create<R: BufRead, W: Write, E: Write>(
        &mut self,
        console: &mut Console<R, W, E>,
    ) -> Result<Outcome> {
        let name = console.read_field(Prompt::NewName)?;
        let number = console.read_field(Prompt::NewNumber)?;
        let contact = Contact::new(&name, &number)?;

        match self.store.append(&contact) {
            Ok(()) => {
                info!(store = %self.store.location(), "Contact added");
                console.say(CREATED)?;
                Ok(Outcome::Created(contact))
            }
            Err(err) => {
                debug!(error = %err, "Append failed");
                console.report(&format!(
                    "An error occurred while writing to the file: {}",
                    cause(&err)
                ))?;
                Ok(Outcome::CreateFailed(contact))
            }
        }
    }

    fn search<R: BufRead, W: Write, E: Write>(
        &mut self,
        console: &mut Console<R, W, E>,
    ) -> Result<Outcome> {
        let query = console.read_field(Prompt::SearchName)?;
        let results = self.store.search(&query);

        let interrupted = results.error.is_some();
        if let Some(err) = &results.error {
            debug!(error = %err, "Search interrupted");
            console.report(&format!(
                "An error occurred while reading the file: {}",
                cause(err)
            ))?;
        }

        if results.is_empty() {
            console.say(NO_MATCHES)?;
        } else {
            console.say(MATCHES_FOUND)?;
            for line in &results.matches {
                console.say(line)?;
            }
        }

        debug!(query = %query, matches = results.matches.len(), "Search finished");
        Ok(Outcome::Searched {
            query,
            matches: results.matches,
            interrupted,
        })
    }
}

fn cause(err: &Error) -> String {
    err.io_cause()
        .map_or_else(|| err.to_string(), ToString::to_string)
}
