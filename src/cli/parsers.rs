//! The place where the command line and shell parsers are defined.
//!
//! When the functionality becomes extensive, they will
//! each have their own files.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wordlist")]
#[command(version, about = "Search tab-delimited word lists with a regex", long_about = None)]
pub struct CliParser {
    /// Directory holding the word list files. Overrides WORDLIST_DIR.
    #[arg(long, global = true)]
    pub lists_dir: Option<PathBuf>,

    /// Largest compiled pattern allowed, in bytes. Overrides
    /// WORDLIST_PATTERN_SIZE_LIMIT.
    #[arg(long, global = true)]
    pub pattern_size_limit: Option<usize>,

    #[command(subcommand)]
    pub mode: CliMode,
}

#[derive(Subcommand)]
pub enum CliMode {
    /// Print the name of every loaded word list.
    Lists,

    /// Run one query and print the matches as JSON.
    Query {
        list_name: String,
        pattern: String,

        #[arg(long)]
        pretty: bool,
    },

    /// Start an interactive shell.
    Client,
}

/// A single line typed into the interactive shell.
#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    Help,
    Lists,
    History,
    Quit,
    Use(String),
    Find { list_name: String, pattern: String },
    Pattern(String),
    Invalid(String),
}

const RECALL_MARKER: char = '!';

impl ShellCommand {
    pub fn parse(line: &str) -> ShellCommand {
        //! Parse one shell line.
        //!
        //! Anything that is not a known keyword is taken as a pattern for the
        //! active list, exactly as typed. Only the line ending is dropped, so
        //! leading and trailing spaces stay part of the pattern.

        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim();
        let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim_start()),
            None => (trimmed, ""),
        };

        match (keyword, rest) {
            ("", _) => ShellCommand::Empty,
            ("help", "") => ShellCommand::Help,
            ("lists", "") => ShellCommand::Lists,
            ("history", "") => ShellCommand::History,
            ("quit", "") | ("exit", "") => ShellCommand::Quit,
            ("use", "") => ShellCommand::Invalid("usage: use <list>".to_string()),
            ("use", list_name) => ShellCommand::Use(list_name.to_string()),
            ("find", _) => parse_find(line),
            _ => ShellCommand::Pattern(line.to_string()),
        }
    }

    pub fn recall_depth(line: &str) -> Option<usize> {
        //! How many commands back a line made only of `!`s reaches.
        //!
        //! Returns [`None`] for any other line, so patterns such as `!x` or
        //! `a!` are left alone.

        let trimmed = line.trim();

        if !trimmed.is_empty() && trimmed.chars().all(|c| c == RECALL_MARKER) {
            Some(trimmed.len())
        } else {
            None
        }
    }
}

fn parse_find(line: &str) -> ShellCommand {
    //! `find <list> <pattern>`: the pattern is everything after the single
    //! separator following the list name.

    let line = line.trim_start();
    let arguments = line.strip_prefix("find").unwrap_or(line).trim_start();

    match arguments.split_once(char::is_whitespace) {
        Some((list_name, pattern)) if !pattern.is_empty() => ShellCommand::Find {
            list_name: list_name.to_string(),
            pattern: pattern.to_string(),
        },
        _ => ShellCommand::Invalid("usage: find <list> <pattern>".to_string()),
    }
}
