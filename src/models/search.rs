//! Search request and response models.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::fields::{Fields, RESPONSE_FIELD_ALIASES};
use super::Book;
use crate::error::ValidationError;

/// Default number of results requested per search
pub const DEFAULT_LIMIT: usize = 100;

/// Search query parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query sent as `q`
    pub query: String,

    /// Maximum number of results, sent as `limit`
    pub limit: usize,
}

impl SearchQuery {
    /// Create a new search query with the default limit
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Set the result limit
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Encode as a URL query string (`q=...&limit=...`)
    pub fn to_query_string(&self) -> String {
        format!(
            "q={}&limit={}",
            urlencoding::encode(&self.query),
            self.limit
        )
    }
}

/// One reply from the search endpoint
///
/// `docs` may hold fewer entries than `num_found`; the server truncates to the
/// requested limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResponse {
    /// Total number of matches reported by the server
    pub num_found: u64,

    /// Records returned in this page
    pub docs: Vec<Book>,
}

impl SearchResponse {
    /// Validate a decoded response body
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::new(value, "search response", RESPONSE_FIELD_ALIASES)?;

        let num_found = fields.required_int("num_found")?;
        let docs = fields
            .required_array("docs")?
            .iter()
            .enumerate()
            .map(|(index, doc)| {
                Book::from_value(doc).map_err(|e| ValidationError::InvalidRecord {
                    index,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { num_found, docs })
    }

    /// Whether the server reported more matches than were returned
    pub fn has_more(&self) -> bool {
        self.num_found > self.docs.len() as u64
    }
}

impl<'de> Deserialize<'de> for SearchResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        SearchResponse::from_value(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_string_is_encoded() {
        let query = SearchQuery::new("python programming").limit(50);
        assert_eq!(query.to_query_string(), "q=python%20programming&limit=50");
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(SearchQuery::new("rust").limit, 100);
    }

    #[test]
    fn test_response_from_api_payload() {
        let raw = json!({
            "numFound": 1234,
            "start": 0,
            "docs": [
                {"title": "Python Crash Course", "first_publish_year": 2015},
                {"title": "Learning Go", "first_publish_year": 2009}
            ]
        });

        let response = SearchResponse::from_value(&raw).unwrap();
        assert_eq!(response.num_found, 1234);
        assert_eq!(response.docs.len(), 2);
        assert_eq!(response.docs[0].title, "Python Crash Course");
        assert_eq!(response.docs[1].title, "Learning Go");
        assert!(response.has_more());
    }

    #[test]
    fn test_response_accepts_public_name() {
        let raw = json!({"num_found": 0, "docs": []});
        let response = SearchResponse::from_value(&raw).unwrap();
        assert_eq!(response.num_found, 0);
        assert!(!response.has_more());
    }

    #[test]
    fn test_missing_docs_fails() {
        let err = SearchResponse::from_value(&json!({"numFound": 3})).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField("docs")));
    }

    #[test]
    fn test_missing_num_found_fails() {
        let err = SearchResponse::from_value(&json!({"docs": []})).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField("num_found")));
    }

    #[test]
    fn test_bad_record_reports_index() {
        let raw = json!({
            "numFound": 2,
            "docs": [{"title": "Fine"}, {"author_name": ["No Title"]}]
        });

        match SearchResponse::from_value(&raw).unwrap_err() {
            ValidationError::InvalidRecord { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(*source, ValidationError::MissingField("title")));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_deserialize_via_serde() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"numFound": 1, "docs": [{"title": "Dune"}]}"#).unwrap();
        assert_eq!(response.docs[0].title, "Dune");

        let err = serde_json::from_str::<SearchResponse>(r#"{"numFound": 1}"#);
        assert!(err.is_err());
    }
}
