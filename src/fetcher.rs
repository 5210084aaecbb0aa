//! Open Library search client that fetches, filters and saves books.

use std::path::Path;

use crate::config::Config;
use crate::error::{BookError, ValidationError};
use crate::formatters::{BookFormatter, JsonFormatter};
use crate::models::{Book, SearchQuery, SearchResponse};
use crate::utils::{filter_books, HttpClient};

/// Fetches books from the search endpoint and hands them to a formatter
///
/// A fetch is a single GET with no retry. Any non-success status, transport
/// failure or malformed body fails the whole call.
#[derive(Debug)]
pub struct BookFetcher {
    http: HttpClient,
    base_url: String,
    formatter: Box<dyn BookFormatter>,
}

impl BookFetcher {
    /// Create a fetcher for the public Open Library endpoint, writing JSON
    pub fn new() -> Result<Self, BookError> {
        Self::from_config(&Config::default())
    }

    /// Create a fetcher from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, BookError> {
        Ok(Self {
            http: HttpClient::from_config(&config.api)?,
            base_url: config.api.base_url.clone(),
            formatter: Box::new(JsonFormatter::new(config.output.indent)),
        })
    }

    /// Replace the output formatter
    pub fn with_formatter(mut self, formatter: impl BookFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Point the fetcher at a different search endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The formatter used by [`save_books`](Self::save_books)
    pub fn formatter(&self) -> &dyn BookFormatter {
        self.formatter.as_ref()
    }

    /// The search endpoint in use
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, query: &SearchQuery) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.base_url, separator, query.to_query_string())
    }

    /// Search for `query` and return the validated records in server order
    pub async fn fetch_books(&self, query: &str, limit: usize) -> Result<Vec<Book>, BookError> {
        let response = self
            .fetch_response(&SearchQuery::new(query).limit(limit))
            .await?;
        Ok(response.docs)
    }

    async fn fetch_response(&self, query: &SearchQuery) -> Result<SearchResponse, BookError> {
        let url = self.build_url(query);
        tracing::debug!("Requesting {}", url);

        let response = self
            .http
            .client()
            .get(&url)
            .send()
            .await
            .map_err(|e| BookError::Network(format!("Failed to search Open Library: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BookError::Status { status, url });
        }

        let body = response
            .text()
            .await
            .map_err(|e| BookError::Network(format!("Failed to read response body: {}", e)))?;

        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| ValidationError::MalformedJson(e.to_string()))?;
        let parsed = SearchResponse::from_value(&value)?;

        tracing::info!(
            "Open Library reported {} matches for '{}', received {}",
            parsed.num_found,
            query.query,
            parsed.docs.len()
        );
        if parsed.has_more() {
            tracing::debug!("Response truncated to the requested limit of {}", query.limit);
        }
        Ok(parsed)
    }

    /// Keep books whose title contains `title_contains` and whose first
    /// publication year is at least `min_year`
    pub fn filter_books(
        &self,
        books: &[Book],
        title_contains: Option<&str>,
        min_year: Option<i32>,
    ) -> Vec<Book> {
        let filtered = filter_books(books, title_contains, min_year);
        tracing::debug!("Filter kept {} of {} books", filtered.len(), books.len());
        filtered
    }

    /// Write `books` to `path` using the configured formatter
    pub fn save_books(&self, books: &[Book], path: &Path) -> Result<(), BookError> {
        self.formatter.write_to_file(books, path)?;
        tracing::info!("Saved {} books to {}", books.len(), path.display());
        Ok(())
    }
}
