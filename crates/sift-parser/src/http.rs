//! HTTP Parser Implementation
//!
//! Talks to a parse service that wraps a spaCy pipeline (or anything else that
//! answers in the same JSON layout, see [`crate::spacy`]).
//!
//! # Service contract
//!
//! - `GET {endpoint}/models/{model}`: 200 when the model is loaded, 404 when not
//! - `POST {endpoint}/parse` with `{"text": ..., "model": ...}`: a `SpacyDoc`
//!
//! # Features
//!
//! - Blocking client, so it fits the synchronous extraction path
//! - Model availability checked once, at construction
//! - No retries: a failed call is reported and the caller decides
//!
//! The blocking client must not be driven from inside an async runtime; wrap
//! calls in `spawn_blocking` there.
//!
//! # Examples
//!
//! ```no_run
//! use sift_parser::HttpParser;
//!
//! let parser = HttpParser::connect("http://localhost:8090", "en_core_web_md");
//! assert!(parser.is_ok() || parser.is_err());
//! ```

use crate::spacy::SpacyDoc;
use crate::ParserError;
use serde::Serialize;
use sift_domain::traits::DocumentParser;
use sift_domain::Document;
use std::time::Duration;
use tracing::{debug, info};

/// Default parse service endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8090";

/// Default model requested from the service
pub const DEFAULT_MODEL: &str = "en_core_web_md";

/// Default timeout for a single HTTP request (10 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Parser backed by a remote parse service
#[derive(Debug, Clone)]
pub struct HttpParser {
    endpoint: String,
    model: String,
    client: reqwest::blocking::Client,
}

/// Request body for the parse endpoint
#[derive(Serialize)]
struct ParseRequest<'a> {
    text: &'a str,
    model: &'a str,
}

impl HttpParser {
    /// Create a parser without contacting the service
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, ParserError> {
        Self::with_timeout(endpoint, model, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a parser with a custom per-request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ParserError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ParserError::Unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client,
        })
    }

    /// Create a parser and verify the service has the model loaded
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The service is not running
    /// - The model is not loaded
    /// - The service answers with an unexpected status
    pub fn connect(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, ParserError> {
        let parser = Self::new(endpoint, model)?;
        parser.check_model()?;
        info!("Parse service ready at {} (model {})", parser.endpoint, parser.model);
        Ok(parser)
    }

    /// Connect to the default endpoint with the default model
    pub fn connect_default() -> Result<Self, ParserError> {
        Self::connect(DEFAULT_ENDPOINT, DEFAULT_MODEL)
    }

    /// Service endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Requested model
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Check that the service has the model loaded
    pub fn check_model(&self) -> Result<(), ParserError> {
        let url = format!("{}/models/{}", self.endpoint, self.model);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ParserError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status == reqwest::StatusCode::NOT_FOUND {
            Err(ParserError::ModelNotAvailable(self.model.clone()))
        } else {
            Err(ParserError::Communication(format!("HTTP {} from {}", status, url)))
        }
    }

    fn request_parse(&self, text: &str) -> Result<Document, ParserError> {
        let url = format!("{}/parse", self.endpoint);
        let response = self
            .client
            .post(&url)
            .json(&ParseRequest {
                text,
                model: &self.model,
            })
            .send()
            .map_err(|e| ParserError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ParserError::ModelNotAvailable(self.model.clone()));
        }
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ParserError::Communication(format!("HTTP {}: {}", status, body)));
        }

        let wire: SpacyDoc = response
            .json()
            .map_err(|e| ParserError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
        debug!("Parse service returned {} tokens", wire.tokens.len());
        wire.into_document()
    }
}

impl DocumentParser for HttpParser {
    type Error = ParserError;

    fn parse(&self, text: &str) -> Result<Document, Self::Error> {
        self.request_parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_parser_creation() {
        let parser = HttpParser::new("http://localhost:8090/", "en_core_web_sm").unwrap();
        assert_eq!(parser.endpoint(), "http://localhost:8090");
        assert_eq!(parser.model(), "en_core_web_sm");
    }

    #[test]
    fn test_http_parser_connect_failure() {
        // Nothing listens on port 1
        let result = HttpParser::connect("http://127.0.0.1:1", DEFAULT_MODEL);

        match result {
            Err(ParserError::Communication(_)) => {} // Expected
            other => panic!("Expected Communication error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_parse_request_body() {
        let body = serde_json::to_value(ParseRequest {
            text: "hi",
            model: "m",
        })
        .unwrap();
        assert_eq!(body["text"], "hi");
        assert_eq!(body["model"], "m");
    }

    // Integration test (requires a running parse service)
    #[test]
    #[ignore]
    fn test_http_parse_integration() {
        let parser = HttpParser::connect_default().unwrap();
        let doc = parser.parse("I love pizza").unwrap();
        assert!(!doc.is_empty());
    }
}
