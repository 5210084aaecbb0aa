//! CSV table output.

use super::{BookFormatter, COLUMNS};
use crate::error::BookError;
use crate::models::Book;

/// Separator used to flatten list fields into one cell
const LIST_SEPARATOR: &str = "; ";

/// Writes books as CSV with a header row
///
/// List fields are joined with `"; "`. Unknown years and page counts are
/// written as empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    fn row(book: &Book) -> [String; 6] {
        [
            book.title.clone(),
            book.authors_display(),
            book.first_publish_year
                .map(|y| y.to_string())
                .unwrap_or_default(),
            book.publishers.join(LIST_SEPARATOR),
            book.languages.join(LIST_SEPARATOR),
            book.number_of_pages
                .map(|p| p.to_string())
                .unwrap_or_default(),
        ]
    }
}

impl BookFormatter for CsvFormatter {
    fn format(&self, books: &[Book]) -> Result<String, BookError> {
        let mut writer = ::csv::Writer::from_writer(Vec::new());
        writer.write_record(COLUMNS)?;
        for book in books {
            writer.write_record(Self::row(book))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| BookError::Format(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| BookError::Format(e.to_string()))
    }

    fn file_extension(&self) -> &str {
        ".csv"
    }
}
