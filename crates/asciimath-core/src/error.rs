use std::fmt;

/// An error raised while building a symbol table or a color table.
///
/// Parsing itself never fails; this is the only hard failure of the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// An entry was registered without any spelling.
    NoSpelling,
    /// One of the spellings of an entry was the empty string.
    EmptySpelling,
    /// The spelling is already registered and overwriting is disallowed.
    DuplicateSpelling(String),
    /// The name does not refer to a predefined symbol.
    UnknownSymbolId(String),
    /// A configured symbol has neither a predefined id nor a custom value.
    MissingValue,
    /// The color value is neither `#RRGGBB` nor `#RGB`.
    InvalidColor(String),
}

impl TableError {
    /// Returns the error message as a string.
    pub fn string(&self) -> String {
        match self {
            TableError::NoSpelling => "Symbol entry has no spelling.".to_string(),
            TableError::EmptySpelling => "Symbol spellings must not be empty.".to_string(),
            TableError::DuplicateSpelling(spelling) => {
                "Spelling \"".to_string() + spelling + "\" is already defined."
            }
            TableError::UnknownSymbolId(name) => "Unknown symbol id \"".to_string() + name + "\".",
            TableError::MissingValue => {
                "Custom symbol needs either an `id` or a `value`.".to_string()
            }
            TableError::InvalidColor(value) => {
                "Invalid color \"".to_string() + value + "\", expected #RRGGBB or #RGB."
            }
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string())
    }
}

impl std::error::Error for TableError {}
