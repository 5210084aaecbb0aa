//! Core data models for books and search operations.

mod book;
mod fields;
mod search;

pub use book::{Book, BookBuilder};
pub use fields::{alias_for, AliasTable, BOOK_FIELD_ALIASES, RESPONSE_FIELD_ALIASES};
pub use search::{SearchQuery, SearchResponse, DEFAULT_LIMIT};
