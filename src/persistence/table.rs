use super::row::Row;
use super::schema::Header;

use std::fmt::Display;

use log::{debug, warn};

const COMMENT_MARKER: char = '#';
const FIELD_DELIMITER: char = '\t';

/// A data line that was dropped while parsing a word list because its field
/// count did not match the header.
///
/// Rejections never fail a parse. They are kept on the [`Table`] so callers
/// can report them after loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MalformedRow {
    pub list_name: String,
    pub line_number: usize,
    pub fields: Vec<String>,
    pub expected: usize,
}

impl Display for MalformedRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid line {} in list {}: {:?} has {} field(s), header has {}",
            self.line_number,
            self.list_name,
            self.fields,
            self.fields.len(),
            self.expected
        )
    }
}

/// A single word list held in memory.
///
/// A [`Table`] is built once from the text of its source file and is never
/// mutated afterwards, so any number of readers can scan it at the same time
/// without locking.
#[derive(Clone, Debug)]
pub struct Table {
    name: String,
    header: Header,
    rows: Vec<Row>,
    rejected: Vec<MalformedRow>,
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(FIELD_DELIMITER).map(str::to_string).collect()
}

impl Table {
    pub fn parse(name: &str, source: &str) -> Table {
        //! Parse the tab-delimited `source` text of the list called `name`.
        //!
        //! - Leading lines starting with `#` are skipped.
        //! - The first other line is the header.
        //! - Every following line is a row and is kept only if it has as many
        //! fields as the header. A `#` past the header is an ordinary field.
        //!
        //! A source without any header line gives a table with an empty header
        //! and no rows.

        // `lines` strips both "\n" and "\r\n" so the last field stays clean.
        let mut lines = source.lines().enumerate();

        let header = lines
            .by_ref()
            .find(|(_, line)| !line.starts_with(COMMENT_MARKER))
            .map(|(_, line)| Header::new(split_fields(line)))
            .unwrap_or_default();

        if header.is_empty() {
            debug!("word list {} has no header line", name);
        }

        let mut rows = Vec::new();
        let mut rejected = Vec::new();

        for (index, line) in lines {
            let fields = split_fields(line);

            if fields.len() == header.len() {
                rows.push(Row(fields));
            } else {
                let malformed = MalformedRow {
                    list_name: name.to_string(),
                    line_number: index + 1,
                    fields,
                    expected: header.len(),
                };
                warn!("{}", malformed);
                rejected.push(malformed);
            }
        }

        Table {
            name: name.to_string(),
            header,
            rows,
            rejected,
        }
    }

    pub fn empty(name: &str) -> Table {
        //! A table with no header and no rows. Used in place of a source file
        //! that could not be read.

        Table {
            name: name.to_string(),
            header: Header::default(),
            rows: vec![],
            rejected: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn scan(&self) -> &[Row] {
        //! All rows of the table, in source order.

        &self.rows
    }

    pub fn filter<F>(&self, filter: F) -> Vec<&Row>
    where
        F: Fn(&Row) -> bool,
    {
        //! Runs a filter over the rows.
        //!
        //! Returns references to the matching rows, in source order.

        self.scan().iter().filter(|row| filter(row)).collect()
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn rejected(&self) -> &[MalformedRow] {
        //! Lines dropped while parsing this table.

        &self.rejected
    }
}
