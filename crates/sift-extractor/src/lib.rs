//! Sift Extractor
//!
//! Turns free text into structured linguistic signals for a downstream
//! preference-extraction prompt.
//!
//! # Overview
//!
//! The extractor never tokenizes or tags text itself. A `DocumentParser`
//! supplies the parse; from that single parse the extractor derives
//! subject-verb-object relationships with negation state, named entities,
//! attitude pattern matches, preference indicators, noun phrases and
//! part-of-speech counts.
//!
//! # Architecture
//!
//! ```text
//! Text → FeatureExtractor → DocumentParser → Document
//!                         → relations / matcher / indicators → FeatureBundle
//!                         → ContextPrefixRenderer → prompt prefix
//! ```
//!
//! # Key Features
//!
//! - **Never fails**: unavailable parser, empty input and parse errors all
//!   yield the empty bundle; `try_extract_all` reports the reason
//! - **Bounded**: input is truncated to `max_text_length` characters
//! - **Negation propagation**: "I don't want to visit Paris" marks both
//!   `want` and `visit` as negated
//! - **Shared rules**: one `PatternMatcher` behind an `Arc` serves every
//!   extractor and thread
//!
//! # Example Usage
//!
//! ```
//! use sift_extractor::{ExtractorConfig, FeatureExtractor, PatternMatcher};
//! use sift_parser::{DocumentBuilder, MockParser};
//! use std::sync::Arc;
//!
//! let text = "I really love hiking";
//! let doc = DocumentBuilder::new(text)
//!     .token("I", "I", "PRON", "nsubj", 2)
//!     .token("really", "really", "ADV", "advmod", 2)
//!     .token("love", "love", "VERB", "ROOT", 2)
//!     .token("hiking", "hiking", "NOUN", "dobj", 2)
//!     .build()
//!     .unwrap();
//!
//! let parser = MockParser::new().with_document(text, doc);
//! let matcher = Arc::new(PatternMatcher::new());
//! let extractor = FeatureExtractor::new(parser, matcher, ExtractorConfig::default());
//!
//! let bundle = extractor.extract_all(text);
//! assert_eq!(bundle.relationships[0].arrow(), "I -love-> hiking");
//!
//! let prefix = extractor.build_context_prefix(text);
//! assert!(prefix.contains("Strong preferences"));
//! ```

#![warn(missing_docs)]

mod adapter;
mod config;
mod error;
mod extractor;
pub mod matcher;
pub mod relations;
pub mod render;
mod scaffold;


pub use adapter::{normalize_document, normalize_token, DocumentAdapter};
pub use config::{ExtractorConfig, DEFAULT_MAX_SCAFFOLD_TOPICS, DEFAULT_MAX_TEXT_LENGTH};
pub use error::ExtractorError;
pub use extractor::FeatureExtractor;
pub use matcher::PatternMatcher;
pub use render::{render_scaffold, ContextPrefixRenderer};
pub use scaffold::build_scaffold;
