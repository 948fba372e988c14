//! `phonebook` - CLI for the phonebook contact store
//!
//! Without a subcommand this runs the interactive create-or-search session.
//! The subcommands offer the same operations for scripts.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use phonebook::cli::{AddCommand, Cli, Command, ConfigCommand, OutputFormat, SearchCommand};
use phonebook::session::{MATCHES_FOUND, NO_MATCHES};
use phonebook::{init_logging, Config, Contact, FieldKind, FileStore, RecordStore, Session};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration, letting --store win over file and environment
    let config = Config::load_from(cli.config.clone())
        .context("could not load configuration")?
        .with_store_path(cli.store.clone());
    config.validate()?;

    let mut store = FileStore::new(config.store_path());
    let mut out = std::io::stdout();

    match cli.command {
        None => handle_interactive(&mut store),
        Some(Command::Add(cmd)) => handle_add(&mut store, &cmd, &mut out),
        Some(Command::Search(cmd)) => handle_search(&store, &cmd, &mut out),
        Some(Command::Status(cmd)) => handle_status(&store, cmd.json, &mut out),
        Some(Command::Config(cmd)) => handle_config(&config, cmd, &mut out),
    }
}

fn handle_interactive(store: &mut FileStore) -> Result<()> {
    let mut console = phonebook::StdConsole::stdio();
    let outcome = Session::new(store)
        .run(&mut console)
        .context("interactive session ended early")?;
    tracing::debug!(?outcome, "Session finished");
    Ok(())
}

fn handle_add<S: RecordStore>(
    store: &mut S,
    cmd: &AddCommand,
    out: &mut impl Write,
) -> Result<()> {
    let contact = Contact::new(&cmd.name, &cmd.number)?;
    store
        .append(&contact)
        .with_context(|| format!("could not add contact to {}", store.location()))?;
    writeln!(out, "{}", phonebook::session::CREATED)?;
    Ok(())
}

fn handle_search<S: RecordStore>(
    store: &S,
    cmd: &SearchCommand,
    out: &mut impl Write,
) -> Result<()> {
    let query = cmd.query.trim();
    if !phonebook::validate(FieldKind::Name, query) {
        return Err(phonebook::Error::invalid_field(FieldKind::Name, query).into());
    }

    let results = store.search(query);
    match cmd.format {
        OutputFormat::Plain => {
            if results.is_empty() {
                writeln!(out, "{NO_MATCHES}")?;
            } else {
                writeln!(out, "{MATCHES_FOUND}")?;
                for line in &results.matches {
                    writeln!(out, "{line}")?;
                }
            }
        }
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = results
                .matches
                .iter()
                .map(|line| match Contact::from_record(line) {
                    Some(contact) => serde_json::json!(contact),
                    None => serde_json::Value::String(line.clone()),
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        }
    }

    // Partial matches are already printed; the failure still fails the command
    if let Some(err) = results.error {
        return Err(err).context("search was interrupted");
    }
    Ok(())
}

fn handle_status<S: RecordStore>(store: &S, json: bool, out: &mut impl Write) -> Result<()> {
    let stats = store.stats()?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
    } else {
        writeln!(out, "phonebook status")?;
        writeln!(out, "----------------")?;
        writeln!(out, "Store:         {}", stats.location)?;
        writeln!(
            out,
            "Exists:        {}",
            if stats.exists { "yes" } else { "no" }
        )?;
        writeln!(out, "Records:       {}", stats.records)?;
        writeln!(out, "Size (bytes):  {}", stats.size_bytes)?;
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand, out: &mut impl Write) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
            } else {
                writeln!(out, "Current Configuration")?;
                writeln!(out, "=====================")?;
                writeln!(out)?;
                writeln!(out, "[Store]")?;
                writeln!(out, "  Path:               {}", config.store_path().display())?;
            }
        }
        ConfigCommand::Path => {
            writeln!(out, "{}", Config::default_config_path().display())?;
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            writeln!(out, "Validating configuration: {}", path.display())?;
            match Config::load_from(Some(path)) {
                Ok(_) => writeln!(out, "Configuration is valid.")?,
                Err(e) => writeln!(out, "Configuration error: {e}")?,
            }
        }
    }
    Ok(())
}
