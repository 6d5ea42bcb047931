//! Sift Domain Layer
//!
//! This crate contains the data model shared by every Sift crate: the uniform
//! parse shape the core consumes, the signals it produces, and the trait a
//! concrete parser integration implements.
//!
//! ## Key Concepts
//!
//! - **Document**: One parse of one input text (sentences, tokens, entities, noun chunks)
//! - **Token**: A word with lemma, part of speech, and a labeled edge to its head
//! - **Relationship**: A shallow subject-verb-object triple with negation state
//! - **PatternMatch**: A hit for one of the five fixed attitude patterns
//! - **FeatureBundle**: Everything derived from a single parse
//!
//! ## Architecture
//!
//! - No I/O and no logging
//! - `serde` is the only dependency, so bundles can be handed downstream as JSON
//! - Parser implementations live in `sift-parser`, extraction in `sift-extractor`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bundle;
pub mod document;
pub mod pattern;
pub mod relationship;
pub mod token;
pub mod traits;

// Re-exports for convenience
pub use bundle::{FeatureBundle, PreferenceIndicators, SummaryScaffold};
pub use document::{Document, EntitySpan, NounChunk, Sentence};
pub use pattern::{PatternCategory, PatternGroups, PatternMatch};
pub use relationship::{ClauseType, Relationship, UNKNOWN};
pub use token::{Dep, Pos, Token};
pub use traits::DocumentParser;
