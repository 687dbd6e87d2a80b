use std::sync::Arc;

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::errors::QueryError;
use crate::persistence::WordListRegistry;

use super::projector::{QueryResult, project};

/// Upper bound on the compiled size of a user pattern, in bytes.
pub const DEFAULT_PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Answers regex queries against a shared [`WordListRegistry`].
///
/// Patterns are compiled per query by the `regex` crate, which matches in
/// time linear to the searched text. Patterns still come from users, so the
/// compiled program size is capped as well.
///
/// A [`QueryEngine`] is cheap to clone and every clone reads the same
/// registry; queries may run from any number of threads at once.
#[derive(Clone, Debug)]
pub struct QueryEngine {
    registry: Arc<WordListRegistry>,
    pattern_size_limit: usize,
}

impl QueryEngine {
    pub fn new(registry: Arc<WordListRegistry>) -> QueryEngine {
        QueryEngine {
            registry,
            pattern_size_limit: DEFAULT_PATTERN_SIZE_LIMIT,
        }
    }

    pub fn with_pattern_size_limit(mut self, limit: usize) -> QueryEngine {
        self.pattern_size_limit = limit;
        self
    }

    pub fn registry(&self) -> &WordListRegistry {
        &self.registry
    }

    pub fn query(&self, list_name: &str, pattern: &str) -> Result<QueryResult, QueryError> {
        //! Find the rows of `list_name` whose key column matches `pattern`
        //! anywhere. See [`query`].

        run_query(&self.registry, list_name, pattern, self.pattern_size_limit)
    }
}

pub fn compile_pattern(pattern: &str, size_limit: usize) -> Result<Regex, QueryError> {
    //! Compile a user pattern with default flags: unanchored and
    //! single-line.

    RegexBuilder::new(pattern)
        .size_limit(size_limit)
        .build()
        .map_err(|error| QueryError::InvalidPattern {
            pattern: pattern.to_string(),
            message: error.to_string(),
        })
}

pub fn query(
    registry: &WordListRegistry,
    list_name: &str,
    pattern: &str,
) -> Result<QueryResult, QueryError> {
    //! Run one query against `registry`.
    //!
    //! - An unknown `list_name` fails with [`QueryError::UnknownList`], even if
    //! the pattern is also bad.
    //! - A pattern that does not compile fails with
    //! [`QueryError::InvalidPattern`].
    //! - Otherwise the rows whose first field contains a match are returned in
    //! list order. No match is an empty, successful result.

    run_query(registry, list_name, pattern, DEFAULT_PATTERN_SIZE_LIMIT)
}

fn run_query(
    registry: &WordListRegistry,
    list_name: &str,
    pattern: &str,
    size_limit: usize,
) -> Result<QueryResult, QueryError> {
    let table = registry
        .lookup(list_name)
        .ok_or_else(|| QueryError::UnknownList {
            requested: list_name.to_string(),
            available: registry.list_names(),
        })?;

    let regex = compile_pattern(pattern, size_limit)?;

    let matched = table.filter(|row| regex.is_match(row.key()));

    debug!(
        "query {:?} on {}: {} of {} row(s) matched",
        pattern,
        list_name,
        matched.len(),
        table.rows()
    );

    Ok(project(table.header(), matched))
}
