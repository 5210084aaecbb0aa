//! HTTP client construction.

use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::BookError;

/// Shared HTTP client with a fixed request timeout
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Arc<Client>,
}

impl HttpClient {
    /// Create a client honouring the configured user agent and timeout
    pub fn from_config(config: &ApiConfig) -> Result<Self, BookError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.timeout_secs.min(10)))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Get the underlying client
    pub fn client(&self) -> &Client {
        &self.client
    }
}
