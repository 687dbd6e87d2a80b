//! General message formatting functions for prettifying the CLI.
//! Includes basic utility functions such as:
//!
//! - Highlight Text (make the text teal but not bold)
//! - System message formatting functions that produce the same
//! format messages.
//! - Query error rendering for the one-shot and interactive modes.

use colored::Colorize;

use crate::cli::colors::WORDLIST_TEAL;
use crate::errors::QueryError;

pub fn highlight_argument(argument: &str) -> String {
    //! Highlight a piece of text in the theme color to make it obvious.
    //!
    //! Returns a formatted string.

    format!("{}", argument.color(WORDLIST_TEAL))
}

pub fn system_message(source_name: &str, message: String) -> String {
    //! Write a system message on the command line, properly
    //! formatted, according to the command line theme.
    //!
    //! Takes in a source name (like 'system') as [`String`] and
    //! the message as a formatted text; output of [`format!`].

    let source_formatted = format!("{:6}", source_name.color(WORDLIST_TEAL).bold());

    format!("[{}] {}", source_formatted, message)
}

pub fn query_error_message(error: &QueryError) -> String {
    match error {
        QueryError::UnknownList {
            requested,
            available,
        } => system_message(
            "query",
            format!(
                "Invalid word list '{}'. Try one of: {}",
                highlight_argument(requested),
                highlight_argument(&available.join(", "))
            ),
        ),
        QueryError::InvalidPattern { pattern, message } => system_message(
            "query",
            format!(
                "Invalid regex: {}. Input was: '{}'",
                message,
                highlight_argument(pattern)
            ),
        ),
    }
}
