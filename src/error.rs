//! Error types shared across the crate.

/// Errors raised while turning a decoded JSON value into a model type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The value is not a JSON object
    #[error("Expected an object for {0}")]
    NotAnObject(&'static str),

    /// A required field is absent under every accepted name
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A field is present but has the wrong JSON type
    #[error("Invalid type for field '{field}': expected {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// An integer field does not fit the target type
    #[error("Value out of range for field '{field}': {value}")]
    OutOfRange { field: &'static str, value: String },

    /// One element of the `docs` array failed validation
    #[error("Invalid record at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },

    /// The response body is not JSON at all
    #[error("Malformed JSON body: {0}")]
    MalformedJson(String),
}

/// Errors that can occur while fetching, formatting or saving books
#[derive(Debug, thiserror::Error)]
pub enum BookError {
    /// Network or transport failure, including timeouts
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP {status} returned by {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The response did not match the expected shape
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO error (file system)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializer failure while formatting output
    #[error("Format error: {0}")]
    Format(String),
}

impl BookError {
    /// Whether this error came from the transport layer (network or HTTP status)
    pub fn is_transport(&self) -> bool {
        matches!(self, BookError::Network(_) | BookError::Status { .. })
    }
}

impl From<reqwest::Error> for BookError {
    fn from(err: reqwest::Error) -> Self {
        BookError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for BookError {
    fn from(err: serde_json::Error) -> Self {
        BookError::Format(format!("JSON: {}", err))
    }
}

impl From<csv::Error> for BookError {
    fn from(err: csv::Error) -> Self {
        BookError::Format(format!("CSV: {}", err))
    }
}
