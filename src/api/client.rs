//! HTTP client for the character endpoint.
//!
//! One `GET`, no query parameters, no custom headers, no timeout and no
//! retry. Whatever goes wrong comes back as a `FetchError`.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::CharacterPage;
use crate::core::state::Character;

pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/api/character";

/// Errors that can occur while fetching characters.
#[derive(Debug)]
pub enum FetchError {
    /// Request could not be sent or the body could not be read.
    Network(String),
    /// Server answered with a non-success status.
    Status { status: u16 },
    /// Body was not the expected `{ "results": [...] }` JSON.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status { status } => write!(f, "HTTP {status}"),
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can produce the character list.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Returns a human readable name for the source (shown in the title bar).
    fn name(&self) -> &str;

    /// Fetches the full list, in the order the source returns it.
    async fn fetch_characters(&self) -> Result<Vec<Character>, FetchError>;
}

/// `CharacterSource` backed by a single HTTP endpoint.
pub struct HttpCharacterSource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpCharacterSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpCharacterSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl CharacterSource for HttpCharacterSource {
    fn name(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_characters(&self) -> Result<Vec<Character>, FetchError> {
        info!("GET {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Character endpoint status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Character endpoint returned HTTP {}", status);
            return Err(FetchError::Status { status });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let page: CharacterPage =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        let characters = page.into_characters();
        info!("Fetched {} characters", characters.len());
        Ok(characters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::Network("dns".to_string()).to_string(),
            "network error: dns"
        );
        assert_eq!(FetchError::Status { status: 503 }.to_string(), "HTTP 503");
        assert_eq!(
            FetchError::Parse("expected value".to_string()).to_string(),
            "parse error: expected value"
        );
    }

    #[test]
    fn test_default_source_uses_default_endpoint() {
        let source = HttpCharacterSource::default();
        assert_eq!(source.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(source.name(), DEFAULT_ENDPOINT);
    }
}
