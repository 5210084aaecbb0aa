//! Utility modules supporting fetch operations.
//!
//! - [`BookFilter`] / [`filter_books`]: title and year filtering over book lists
//! - [`HttpClient`]: reqwest client built from the API configuration
//!
//! # Filtering
//!
//! ```rust
//! use book_fetcher::models::BookBuilder;
//! use book_fetcher::utils::BookFilter;
//!
//! let books = vec![
//!     BookBuilder::new("Python Crash Course").first_publish_year(2015).build(),
//!     BookBuilder::new("Learning Go").first_publish_year(2009).build(),
//! ];
//!
//! let recent = BookFilter::new().title_contains("python").min_year(2010).apply(&books);
//! assert_eq!(recent.len(), 1);
//! ```

mod filter;
mod http;

pub use filter::{filter_books, BookFilter};
pub use http::HttpClient;
