//! # Book Fetcher
//!
//! Queries the Open Library search API, validates and filters the returned
//! books, and writes them to disk in a structured format.
//!
//! ## Architecture
//!
//! - [`models`]: Book and search response models, including field alias tables
//! - [`utils`]: Filtering and HTTP client helpers
//! - [`formatters`]: The [`BookFormatter`] trait with JSON and CSV implementations
//! - [`fetcher`]: [`BookFetcher`], which ties fetching, filtering and saving together
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod fetcher;
pub mod formatters;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use error::{BookError, ValidationError};
pub use fetcher::BookFetcher;
pub use formatters::{BookFormatter, CsvFormatter, JsonFormatter};
pub use models::{Book, BookBuilder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
