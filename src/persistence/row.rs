/// One data line of a word list, split on tabs.
///
/// A [`Row`] that lives inside a [`super::Table`] always has exactly as many
/// fields as the table's header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row(pub Vec<String>);

impl Row {
    pub fn key(&self) -> &str {
        //! The first field of the row. This is the only field the query
        //! engine ever searches.
        //!
        //! Returns an empty string for a zero-width row.

        self.0.first().map(String::as_str).unwrap_or("")
    }
}
