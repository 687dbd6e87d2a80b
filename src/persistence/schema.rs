/// The ordered column names of a word list.
///
/// The header defines both the number of fields every row must have and the
/// names those fields take when a row is projected into a record. The first
/// column is the key column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Header(Vec<String>);

impl Header {
    pub fn new(columns: Vec<String>) -> Header {
        Header(columns)
    }

    pub fn columns(&self) -> &[String] {
        self.0.as_ref()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
