//! JSON array output.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::BookFormatter;
use crate::error::BookError;
use crate::models::Book;

/// Default indentation width in spaces
pub const DEFAULT_INDENT: usize = 2;

/// Writes books as a pretty-printed JSON array
///
/// Fields use their public names. Non-ASCII text is written as-is rather than
/// `\u` escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFormatter {
    indent: usize,
}

impl JsonFormatter {
    /// Create a formatter with the given indentation width
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    /// Indentation width in spaces
    pub fn indent(&self) -> usize {
        self.indent
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}

impl BookFormatter for JsonFormatter {
    fn format(&self, books: &[Book]) -> Result<String, BookError> {
        let indent = " ".repeat(self.indent);
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        books.serialize(&mut serializer)?;

        String::from_utf8(buf).map_err(|e| BookError::Format(e.to_string()))
    }

    fn file_extension(&self) -> &str {
        ".json"
    }
}
