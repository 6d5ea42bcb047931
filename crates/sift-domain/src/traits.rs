//! Trait definitions for external interactions
//!
//! These traits define the boundary between the extraction core and whatever
//! tagger/parser/NER produces the parse. Implementations live in other crates.

use crate::Document;

/// Trait for turning raw text into a parsed [`Document`]
///
/// Implemented by the infrastructure layer (sift-parser). Implementations
/// must be reentrant: the extractor calls `parse` from any thread without
/// locking.
pub trait DocumentParser: Send + Sync {
    /// Error type for parse operations
    type Error: std::fmt::Display;

    /// Parse text into sentences, tokens, entities and noun chunks
    fn parse(&self, text: &str) -> Result<Document, Self::Error>;
}
