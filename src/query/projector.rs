use indexmap::IndexMap;
use serde::Serialize;

use crate::persistence::{Header, Row};

/// One matched row keyed by column name, in header order.
///
/// If the header repeats a column name, the later field wins and keeps the
/// position of the first one.
pub type MatchRecord = IndexMap<String, String>;

/// The records a query produced, in the order their rows appear in the list.
///
/// Serializes as `{"matches": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub matches: Vec<MatchRecord>,
}

impl QueryResult {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

pub fn project<'a, I>(header: &Header, rows: I) -> QueryResult
where
    I: IntoIterator<Item = &'a Row>,
{
    //! Pair `header[i]` with `row[i]` for every matched row.
    //!
    //! Purely structural, fields are neither renamed nor dropped.

    let matches = rows
        .into_iter()
        .map(|row| {
            header
                .columns()
                .iter()
                .cloned()
                .zip(row.0.iter().cloned())
                .collect::<MatchRecord>()
        })
        .collect();

    QueryResult { matches }
}
