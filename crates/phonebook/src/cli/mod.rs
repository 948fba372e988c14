//! Command-line interface for phonebook.
//!
//! This module provides the CLI structure for the `phonebook` binary.
//! Running without a subcommand starts the interactive session.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{AddCommand, ConfigCommand, OutputFormat, SearchCommand, StatusCommand};

/// phonebook - A tiny flat-file contact book
///
/// With no command, asks whether to search for or create a contact,
/// performs that one action, and exits.
#[derive(Debug, Parser)]
#[command(name = "phonebook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the contact file (overrides configuration)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute; omit for the interactive session
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a contact without prompting
    Add(AddCommand),

    /// Search contacts without prompting
    Search(SearchCommand),

    /// Show store location and record count
    Status(StatusCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "phonebook");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_is_interactive() {
        let cli = parse(&["phonebook"]);
        assert!(cli.command.is_none());
        assert!(cli.store.is_none());
    }

    #[test]
    fn test_verbosity_levels() {
        use crate::logging::Verbosity;

        assert_eq!(parse(&["phonebook", "-q"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["phonebook"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["phonebook", "-v"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["phonebook", "-vv"]).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_add() {
        let cli = parse(&["phonebook", "add", "Jane Doe", "555-1234"]);
        match cli.command {
            Some(Command::Add(cmd)) => {
                assert_eq!(cmd.name, "Jane Doe");
                assert_eq!(cmd.number, "555-1234");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_add_requires_number() {
        assert!(Cli::try_parse_from(["phonebook", "add", "Jane"]).is_err());
    }

    #[test]
    fn test_parse_search_with_format() {
        let cli = parse(&["phonebook", "search", "smith", "--format", "json"]);
        match cli.command {
            Some(Command::Search(cmd)) => {
                assert_eq!(cmd.query, "smith");
                assert_eq!(cmd.format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_status() {
        let cli = parse(&["phonebook", "status", "--json"]);
        assert!(matches!(
            cli.command,
            Some(Command::Status(StatusCommand { json: true }))
        ));
    }

    #[test]
    fn test_parse_config_path() {
        let cli = parse(&["phonebook", "config", "path"]);
        assert!(matches!(
            cli.command,
            Some(Command::Config(ConfigCommand::Path))
        ));
    }

    #[test]
    fn test_parse_global_store_after_subcommand() {
        let cli = parse(&["phonebook", "search", "a", "--store", "/tmp/book.csv"]);
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/book.csv")));
    }

    #[test]
    fn test_parse_with_config() {
        let cli = parse(&["phonebook", "-c", "/custom/config.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
