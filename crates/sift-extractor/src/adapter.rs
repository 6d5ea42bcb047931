//! Parsed document adapter
//!
//! Wraps an optional parser behind a fixed interface. A parser that could not
//! be constructed leaves the adapter permanently unavailable; that is logged
//! once here and never raised per call.

use crate::error::ExtractorError;
use sift_domain::traits::DocumentParser;
use sift_domain::{Dep, Document, Token};
use tracing::{info, warn};

/// Lemma some parser versions emit for every pronoun
const PRONOUN_PLACEHOLDER: &str = "-PRON-";

/// Adapter over an optional upstream parser
pub struct DocumentAdapter<P> {
    parser: Option<P>,
}

impl<P: DocumentParser> DocumentAdapter<P> {
    /// Wrap a parser known to be usable
    pub fn new(parser: P) -> Self {
        Self {
            parser: Some(parser),
        }
    }

    /// Wrap the outcome of constructing a parser
    ///
    /// A construction error is logged once and makes the adapter unavailable
    /// for its whole lifetime.
    pub fn from_result<E: std::fmt::Display>(parser: Result<P, E>) -> Self {
        match parser {
            Ok(parser) => {
                info!("Parser available; feature extraction active");
                Self::new(parser)
            }
            Err(e) => {
                warn!("Parser not available: {}. Feature extraction will be inactive.", e);
                Self::unavailable()
            }
        }
    }

    /// An adapter with no parser
    pub fn unavailable() -> Self {
        Self { parser: None }
    }

    /// Whether a parser is present
    pub fn is_available(&self) -> bool {
        self.parser.is_some()
    }

    /// Parse text and normalize the result into the uniform token schema
    pub fn parse(&self, text: &str) -> Result<Document, ExtractorError> {
        let parser = self.parser.as_ref().ok_or_else(|| {
            ExtractorError::ParserUnavailable("no parser configured".to_string())
        })?;

        let mut doc = parser
            .parse(text)
            .map_err(|e| ExtractorError::Parse(e.to_string()))?;
        normalize_document(&mut doc);
        Ok(doc)
    }
}

/// Absorb upstream tokenizer quirks in place
pub fn normalize_document(doc: &mut Document) {
    for sentence in &mut doc.sentences {
        for token in &mut sentence.tokens {
            normalize_token(token);
        }
    }
}

/// Normalize one token
///
/// - typographic apostrophes become `'`
/// - placeholder or empty lemmas fall back to the lowercased text
/// - the contracted negation `n't` gets lemma `not`
/// - UD subtype labels for particles and passive subjects are folded in
/// - `is_particle` follows the dependency label
pub fn normalize_token(token: &mut Token) {
    token.text = normalize_apostrophes(&token.text);
    token.lemma = normalize_apostrophes(&token.lemma);

    if token.lemma.is_empty() || token.lemma == PRONOUN_PLACEHOLDER {
        token.lemma = token.text.to_lowercase();
    }
    if token.text.eq_ignore_ascii_case("n't") {
        token.lemma = "not".to_string();
    }

    let folded = match &token.dep {
        Dep::Other(label) if label == "compound:prt" => Some(Dep::Prt),
        Dep::Other(label) if label == "nsubj:pass" => Some(Dep::NsubjPass),
        _ => None,
    };
    if let Some(dep) = folded {
        token.dep = dep;
    }

    token.is_particle = token.is_particle || token.dep == Dep::Prt;
}

fn normalize_apostrophes(s: &str) -> String {
    if s.contains(['\u{2019}', '\u{2018}', '\u{02bc}']) {
        s.replace(['\u{2019}', '\u{2018}', '\u{02bc}'], "'")
    } else {
        s.to_string()
    }
}
