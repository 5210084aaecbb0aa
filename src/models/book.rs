//! Book model representing one Open Library search result.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::fields::{Fields, BOOK_FIELD_ALIASES};
use crate::error::ValidationError;

/// A single book entry as returned by the search API
///
/// Serializes with its public field names. Deserializing accepts either the
/// public names or the Open Library source names listed in
/// [`BOOK_FIELD_ALIASES`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    /// Book title
    pub title: String,

    /// Author names, in the order the API lists them
    pub author_names: Vec<String>,

    /// Year of first publication, when known
    pub first_publish_year: Option<i32>,

    /// Publisher names
    pub publishers: Vec<String>,

    /// Language codes (e.g. "eng")
    pub languages: Vec<String>,

    /// Median page count across editions
    pub number_of_pages: Option<u32>,
}

impl Book {
    /// Create a new book with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author_names: Vec::new(),
            first_publish_year: None,
            publishers: Vec::new(),
            languages: Vec::new(),
            number_of_pages: None,
        }
    }

    /// Validate one decoded JSON object into a book
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::new(value, "book", BOOK_FIELD_ALIASES)?;

        Ok(Self {
            title: fields.required_str("title")?,
            author_names: fields.string_list("author_names")?,
            first_publish_year: fields.optional_int("first_publish_year")?,
            publishers: fields.string_list("publishers")?,
            languages: fields.string_list("languages")?,
            number_of_pages: fields.optional_int("number_of_pages")?,
        })
    }

    /// Authors joined for display
    pub fn authors_display(&self) -> String {
        self.author_names.join("; ")
    }
}

impl<'de> Deserialize<'de> for Book {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Book::from_value(&value).map_err(serde::de::Error::custom)
    }
}

/// Builder for constructing Book objects
#[derive(Debug, Clone)]
pub struct BookBuilder {
    book: Book,
}

impl BookBuilder {
    /// Create a new builder with the required title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            book: Book::new(title),
        }
    }

    /// Add an author
    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.book.author_names.push(name.into());
        self
    }

    /// Set the first publication year
    pub fn first_publish_year(mut self, year: i32) -> Self {
        self.book.first_publish_year = Some(year);
        self
    }

    /// Add a publisher
    pub fn publisher(mut self, name: impl Into<String>) -> Self {
        self.book.publishers.push(name.into());
        self
    }

    /// Add a language code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.book.languages.push(code.into());
        self
    }

    /// Set the page count
    pub fn number_of_pages(mut self, pages: u32) -> Self {
        self.book.number_of_pages = Some(pages);
        self
    }

    /// Build the Book
    pub fn build(self) -> Book {
        self.book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_api_payload() {
        let raw = json!({
            "title": "Fluent Python",
            "author_name": ["Luciano Ramalho"],
            "first_publish_year": 2014,
            "publisher": ["O'Reilly Media"],
            "language": ["eng", "por"],
            "number_of_pages_median": 766,
            "key": "/works/OL17075811W",
            "edition_count": 9
        });

        let book = Book::from_value(&raw).unwrap();
        assert_eq!(book.title, "Fluent Python");
        assert_eq!(book.author_names, vec!["Luciano Ramalho"]);
        assert_eq!(book.first_publish_year, Some(2014));
        assert_eq!(book.publishers, vec!["O'Reilly Media"]);
        assert_eq!(book.languages, vec!["eng", "por"]);
        assert_eq!(book.number_of_pages, Some(766));
    }

    #[test]
    fn test_from_public_names() {
        let raw = json!({
            "title": "Programming Rust",
            "author_names": ["Jim Blandy", "Jason Orendorff"],
            "number_of_pages": 622
        });

        let book = Book::from_value(&raw).unwrap();
        assert_eq!(book.author_names, vec!["Jim Blandy", "Jason Orendorff"]);
        assert_eq!(book.number_of_pages, Some(622));
    }

    #[test]
    fn test_missing_fields_default() {
        let book = Book::from_value(&json!({"title": "Untitled Notes"})).unwrap();
        assert!(book.author_names.is_empty());
        assert!(book.publishers.is_empty());
        assert!(book.languages.is_empty());
        assert_eq!(book.first_publish_year, None);
        assert_eq!(book.number_of_pages, None);
    }

    #[test]
    fn test_null_year_is_unknown() {
        let book =
            Book::from_value(&json!({"title": "Draft", "first_publish_year": null})).unwrap();
        assert_eq!(book.first_publish_year, None);
    }

    #[test]
    fn test_missing_title() {
        let err = Book::from_value(&json!({"author_name": ["Nobody"]})).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField("title")));
    }

    #[test]
    fn test_title_wrong_type() {
        let err = Book::from_value(&json!({"title": 42})).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidType { field: "title", .. }
        ));
    }

    #[test]
    fn test_author_list_with_non_string() {
        let err = Book::from_value(&json!({"title": "X", "author_name": ["A", 7]})).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidType {
                field: "author_names",
                ..
            }
        ));
    }

    #[test]
    fn test_serialize_uses_public_names() {
        let book = BookBuilder::new("Rust in Action")
            .author("Tim McNamara")
            .first_publish_year(2021)
            .number_of_pages(456)
            .build();

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["author_names"], json!(["Tim McNamara"]));
        assert_eq!(value["number_of_pages"], json!(456));
        assert!(value.get("author_name").is_none());
        assert!(value.get("number_of_pages_median").is_none());
    }

    #[test]
    fn test_deserialize_round_trip() {
        let book = BookBuilder::new("Zero To Production")
            .author("Luca Palmieri")
            .publisher("Self-published")
            .language("eng")
            .first_publish_year(2022)
            .build();

        let json = serde_json::to_string(&book).unwrap();
        let back: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }

    #[test]
    fn test_authors_display() {
        let book = BookBuilder::new("Test")
            .author("John Doe")
            .author("Jane Smith")
            .build();
        assert_eq!(book.authors_display(), "John Doe; Jane Smith");
    }
}
