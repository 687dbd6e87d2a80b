//! This module is where all the commands are stored.
//!
//! Wordlist command line syntax:
//!
//! - wordlist --help | Command Line Help
//! - wordlist lists | Print the available word lists.
//! - wordlist query <list> <pattern> | Print the matches as JSON.
//! - wordlist client | Run the interactive shell.
//!
//! Inside the shell the commands are parsed by
//! [`crate::cli::parsers::ShellCommand`].

use crate::cli::messages::{query_error_message, system_message};
use crate::query::{QueryEngine, QueryResult};

/// Why a one-shot command did not produce output.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandFailure {
    /// The arguments were rejected before reaching the engine.
    Usage(String),
    /// The engine refused the query.
    Query(String),
}

impl CommandFailure {
    pub fn message(&self) -> &str {
        match self {
            CommandFailure::Usage(message) | CommandFailure::Query(message) => message,
        }
    }
}

pub fn validate_arguments(list_name: &str, pattern: &str) -> Result<(), CommandFailure> {
    //! The engine expects both values to be present; empty ones never get
    //! that far.

    if list_name.is_empty() {
        return Err(CommandFailure::Usage(system_message(
            "query",
            "Need to specify a word list name".to_string(),
        )));
    }
    if pattern.is_empty() {
        return Err(CommandFailure::Usage(system_message(
            "query",
            "Need to specify a regex".to_string(),
        )));
    }
    Ok(())
}

pub fn render_result(result: &QueryResult, pretty: bool) -> String {
    //! Serialize a result as `{"matches": [...]}`.

    let rendered = if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    };

    // A map of strings always serializes.
    rendered.unwrap_or_else(|_| String::from("{\"matches\":[]}"))
}

pub fn run_query_command(
    engine: &QueryEngine,
    list_name: &str,
    pattern: &str,
    pretty: bool,
) -> Result<String, CommandFailure> {
    //! Validate, run and render one query.
    //!
    //! Returns the JSON text to print, or the formatted failure message.

    validate_arguments(list_name, pattern)?;

    engine
        .query(list_name, pattern)
        .map(|result| render_result(&result, pretty))
        .map_err(|error| CommandFailure::Query(query_error_message(&error)))
}

pub fn list_names_command(engine: &QueryEngine) -> String {
    //! One list name per line, sorted.

    engine.registry().list_names().join("\n")
}
