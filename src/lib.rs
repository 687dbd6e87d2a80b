//! Regex lookups over named, tab-delimited word lists held in memory.
//!
//! The word lists are parsed once into a [`persistence::WordListRegistry`];
//! queries then run against it read-only through [`query::QueryEngine`].

pub mod cli;
pub mod config;
pub mod errors;
pub mod persistence;
pub mod query;
pub mod sessions;
