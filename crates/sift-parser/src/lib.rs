//! Sift Parser Layer
//!
//! Pluggable parser integrations implementing `DocumentParser` from
//! `sift-domain`. The extraction core never tokenizes or tags text itself; it
//! consumes whatever one of these produces.
//!
//! # Parsers
//!
//! - `MockParser`: Deterministic canned documents for testing
//! - `HttpParser`: Blocking client for a spaCy-style parse service
//!
//! # Building documents by hand
//!
//! `DocumentBuilder` assembles a parse tree from token rows, computing
//! character offsets from the source text:
//!
//! ```
//! use sift_parser::{DocumentBuilder, MockParser};
//! use sift_domain::traits::DocumentParser;
//!
//! let doc = DocumentBuilder::new("Mark loves pizza")
//!     .token("Mark", "Mark", "PROPN", "nsubj", 1)
//!     .token("loves", "love", "VERB", "ROOT", 1)
//!     .token("pizza", "pizza", "NOUN", "dobj", 1)
//!     .entity("Mark", "PERSON")
//!     .build()
//!     .unwrap();
//!
//! let parser = MockParser::new().with_document("Mark loves pizza", doc);
//! let parsed = parser.parse("Mark loves pizza").unwrap();
//! assert_eq!(parsed.token_count(), 3);
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod http;
pub mod spacy;

use sift_domain::traits::DocumentParser;
use sift_domain::Document;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

pub use builder::DocumentBuilder;
pub use http::HttpParser;
pub use spacy::SpacyDoc;

/// Errors that can occur during parser construction or parsing
#[derive(Error, Debug)]
pub enum ParserError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response could not be turned into a document
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Requested model is not loaded by the parse service
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Parser backend could not be constructed
    #[error("Parser unavailable: {0}")]
    Unavailable(String),

    /// Generic error
    #[error("Parser error: {0}")]
    Other(String),
}

/// Mock parser for deterministic testing
///
/// Returns pre-registered documents keyed by the exact input text. Unknown
/// text parses to an empty document carrying that text. Every call is
/// recorded so tests can check what the extractor actually sent.
///
/// # Examples
///
/// ```
/// use sift_parser::MockParser;
/// use sift_domain::traits::DocumentParser;
///
/// let mut parser = MockParser::new();
/// parser.add_error("boom");
///
/// assert!(parser.parse("hello").unwrap().is_empty());
/// assert!(parser.parse("boom").is_err());
/// assert_eq!(parser.calls(), vec!["hello".to_string(), "boom".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockParser {
    documents: Arc<HashMap<String, Document>>,
    errors: Arc<Vec<String>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockParser {
    /// Create a parser with no registered documents
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document for a given text (builder style)
    pub fn with_document(mut self, text: impl Into<String>, document: Document) -> Self {
        self.add_document(text, document);
        self
    }

    /// Register a document for a given text
    pub fn add_document(&mut self, text: impl Into<String>, document: Document) {
        Arc::make_mut(&mut self.documents).insert(text.into(), document);
    }

    /// Configure to return an error for a specific text
    pub fn add_error(&mut self, text: impl Into<String>) {
        Arc::make_mut(&mut self.errors).push(text.into());
    }

    /// Texts passed to `parse`, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get the number of times parse was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Reset the call log
    pub fn reset_calls(&self) {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl DocumentParser for MockParser {
    type Error = ParserError;

    fn parse(&self, text: &str) -> Result<Document, Self::Error> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());

        if self.errors.iter().any(|e| e == text) {
            return Err(ParserError::Other("Mock error".to_string()));
        }

        Ok(self.documents.get(text).cloned().unwrap_or_else(|| Document {
            text: text.to_string(),
            ..Document::default()
        }))
    }
}
