//! Title and publication-year filtering for book lists.

use crate::models::Book;

/// Filter criteria applied to a list of books
///
/// Every criterion is optional. When several are set a book must satisfy all
/// of them. Filtering never reorders or mutates its input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Case-insensitive substring the title must contain
    pub title_contains: Option<String>,

    /// Inclusive lower bound on the first publication year
    pub min_year: Option<i32>,
}

impl BookFilter {
    /// Create a filter with no criteria
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the title to contain `keyword` (case-insensitive)
    pub fn title_contains(mut self, keyword: impl Into<String>) -> Self {
        self.title_contains = Some(keyword.into());
        self
    }

    /// Require a known first publication year of at least `year`
    pub fn min_year(mut self, year: i32) -> Self {
        self.min_year = Some(year);
        self
    }

    /// Whether no criterion is active
    pub fn is_empty(&self) -> bool {
        self.keyword().is_none() && self.min_year.is_none()
    }

    /// Return the books that satisfy every criterion, in their original order
    pub fn apply(&self, books: &[Book]) -> Vec<Book> {
        let keyword = self.keyword().map(|k| k.to_lowercase());

        books
            .iter()
            .filter(|book| self.keeps(book, keyword.as_deref()))
            .cloned()
            .collect()
    }

    // An empty keyword is treated as no keyword.
    fn keyword(&self) -> Option<&str> {
        self.title_contains.as_deref().filter(|k| !k.is_empty())
    }

    // `lowered_keyword` is already case-folded by the caller.
    fn keeps(&self, book: &Book, lowered_keyword: Option<&str>) -> bool {
        let title_ok = lowered_keyword.map_or(true, |k| book.title.to_lowercase().contains(k));
        let year_ok = self
            .min_year
            .map_or(true, |min| book.first_publish_year.is_some_and(|year| year >= min));
        title_ok && year_ok
    }
}

/// Filter `books` by an optional title keyword and an optional minimum year
pub fn filter_books(books: &[Book], title_contains: Option<&str>, min_year: Option<i32>) -> Vec<Book> {
    BookFilter {
        title_contains: title_contains.map(str::to_owned),
        min_year,
    }
    .apply(books)
}
