//! Output formatters that serialize book lists and persist them.
//!
//! This module defines the [`BookFormatter`] trait. A formatter turns a slice
//! of [`Book`]s into text and, through the provided
//! [`write_to_file`](BookFormatter::write_to_file) method, writes that text to
//! disk. New output formats are added by implementing the trait; the
//! [`BookFetcher`](crate::fetcher::BookFetcher) only ever sees a
//! `Box<dyn BookFormatter>`.
//!
//! # Implementing a New Formatter
//!
//! 1. Create a struct holding any format options
//! 2. Implement `format` (pure, no IO) and `file_extension`
//! 3. Override `write_to_file` only if the format needs something other than a
//!    plain UTF-8 text write

mod csv;
mod json;

pub use self::csv::CsvFormatter;
pub use self::json::{JsonFormatter, DEFAULT_INDENT};

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::BookError;
use crate::models::Book;

/// Column order shared by tabular formats, using the public field names
pub const COLUMNS: [&str; 6] = [
    "title",
    "author_names",
    "first_publish_year",
    "publishers",
    "languages",
    "number_of_pages",
];

/// Strategy for serializing books to text and saving the result
pub trait BookFormatter: Send + Sync + std::fmt::Debug {
    /// Serialize `books` in input order. Must not touch the filesystem.
    fn format(&self, books: &[Book]) -> Result<String, BookError>;

    /// Canonical file extension including the leading dot (e.g. ".json")
    ///
    /// Informational only; callers may write to any path.
    fn file_extension(&self) -> &str;

    /// Format `books` and write the text to `path`, creating or truncating it
    ///
    /// The file handle is closed when this returns, whether the write succeeded
    /// or not. A failed write may leave a partially written file behind.
    fn write_to_file(&self, books: &[Book], path: &Path) -> Result<(), BookError> {
        let content = self.format(books)?;

        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        tracing::debug!(
            "Wrote {} books ({} bytes) to {}",
            books.len(),
            content.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookBuilder;
    use tempfile::tempdir;

    #[derive(Debug)]
    struct TitleLines;

    impl BookFormatter for TitleLines {
        fn format(&self, books: &[Book]) -> Result<String, BookError> {
            Ok(books
                .iter()
                .map(|b| format!("{}\n", b.title))
                .collect())
        }

        fn file_extension(&self) -> &str {
            ".txt"
        }
    }

    #[test]
    fn test_default_write_uses_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("titles.txt");
        let books = vec![
            BookBuilder::new("Dune").build(),
            BookBuilder::new("Solaris").build(),
        ];

        TitleLines.write_to_file(&books, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Dune\nSolaris\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("titles.txt");
        std::fs::write(&path, "stale content that is longer than the new one").unwrap();

        TitleLines
            .write_to_file(&[BookBuilder::new("Emma").build()], &path)
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Emma\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = TitleLines.write_to_file(&[], &path).unwrap_err();
        assert!(matches!(err, BookError::Io(_)));
    }

    #[test]
    fn test_formatters_are_object_safe() {
        let formatters: Vec<Box<dyn BookFormatter>> = vec![
            Box::new(JsonFormatter::default()),
            Box::new(CsvFormatter::default()),
            Box::new(TitleLines),
        ];
        let extensions: Vec<&str> = formatters.iter().map(|f| f.file_extension()).collect();
        assert_eq!(extensions, vec![".json", ".csv", ".txt"]);
    }
}
