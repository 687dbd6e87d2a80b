//! Typed failures of the engine.
//!
//! Row-level problems are not errors here; see
//! [`crate::persistence::MalformedRow`].

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures of a single query. Both are recoverable and leave the registry
/// untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid word list '{requested}'. Try one of: {available:?}")]
    UnknownList {
        requested: String,
        available: Vec<String>,
    },

    /// `pattern` is the input exactly as given, `message` is the regex
    /// compiler's diagnostic.
    #[error("invalid regex: {message}. Input was: '{pattern}'")]
    InvalidPattern { pattern: String, message: String },
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("cannot open word list directory {}: {source}", path.display())]
    SourceDirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: expected a positive number of bytes")]
    InvalidSizeLimit { key: String, value: String },
}
