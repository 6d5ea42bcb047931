//! Core FeatureExtractor implementation

use crate::adapter::DocumentAdapter;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::matcher::PatternMatcher;
use crate::relations::extract_relationships;
use crate::render::ContextPrefixRenderer;
use crate::scaffold::build_scaffold;
use sift_domain::traits::DocumentParser;
use sift_domain::{
    Document, EntitySpan, FeatureBundle, PatternGroups, Pos, PreferenceIndicators, Relationship,
    SummaryScaffold,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// The linguistic feature extractor
///
/// Every public operation parses its input exactly once and derives the
/// requested feature groups from that parse. None of them fail: an
/// unavailable parser, empty input or a parse error all yield the empty
/// shape. Use [`FeatureExtractor::try_extract_all`] to learn the reason.
pub struct FeatureExtractor<P> {
    adapter: DocumentAdapter<P>,
    matcher: Option<Arc<PatternMatcher>>,
    config: ExtractorConfig,
}

impl<P: DocumentParser> FeatureExtractor<P> {
    /// Create a new extractor around a working parser
    ///
    /// The config is assumed valid; see [`FeatureExtractor::try_new`].
    pub fn new(parser: P, matcher: Arc<PatternMatcher>, config: ExtractorConfig) -> Self {
        Self::with_adapter(DocumentAdapter::new(parser), matcher, config)
    }

    /// Create a new extractor, rejecting an invalid config
    pub fn try_new(
        parser: P,
        matcher: Arc<PatternMatcher>,
        config: ExtractorConfig,
    ) -> Result<Self, ExtractorError> {
        config.validate()?;
        Ok(Self::new(parser, matcher, config))
    }

    /// Create an extractor from the outcome of constructing a parser
    ///
    /// A failed construction is logged once; the extractor then stays
    /// unavailable and returns empty results.
    pub fn connect<E: std::fmt::Display>(
        parser: Result<P, E>,
        matcher: Arc<PatternMatcher>,
        config: ExtractorConfig,
    ) -> Self {
        Self::with_adapter(DocumentAdapter::from_result(parser), matcher, config)
    }

    /// Create an extractor with no parser at all
    pub fn unavailable(config: ExtractorConfig) -> Self {
        warn!("No parser configured. Feature extraction will be inactive.");
        Self {
            adapter: DocumentAdapter::unavailable(),
            matcher: None,
            config,
        }
    }

    fn with_adapter(
        adapter: DocumentAdapter<P>,
        matcher: Arc<PatternMatcher>,
        config: ExtractorConfig,
    ) -> Self {
        let matcher = config.enable_patterns.then_some(matcher);
        Self {
            adapter,
            matcher,
            config,
        }
    }

    /// Whether a parser is present
    pub fn is_available(&self) -> bool {
        self.adapter.is_available()
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract every feature group from one parse
    pub fn extract_all(&self, text: &str) -> FeatureBundle {
        self.try_extract_all(text).unwrap_or_default()
    }

    /// Extract every feature group, reporting why nothing was produced
    pub fn try_extract_all(&self, text: &str) -> Result<FeatureBundle, ExtractorError> {
        let doc = self.parse(text)?;
        let bundle = FeatureBundle {
            relationships: extract_relationships(&doc),
            patterns: self.patterns_of(&doc),
            entities: doc.entities.clone(),
            indicators: indicators_of(&doc),
            noun_chunks: noun_chunks_of(&doc),
            pos_tag_counts: pos_tag_counts_of(&doc),
        };

        debug!(
            "Extracted {} relationships, {} entities, {} pattern matches",
            bundle.relationships.len(),
            bundle.entities.len(),
            bundle.patterns.total()
        );
        Ok(bundle)
    }

    /// Named entities in document order
    pub fn extract_entities(&self, text: &str) -> Vec<EntitySpan> {
        self.parse(text).map(|doc| doc.entities).unwrap_or_default()
    }

    /// Subject-verb-object relationships
    pub fn extract_relationships(&self, text: &str) -> Vec<Relationship> {
        self.parse(text)
            .map(|doc| extract_relationships(&doc))
            .unwrap_or_default()
    }

    /// Names, locations, pronoun counts and question sentences
    pub fn extract_preference_indicators(&self, text: &str) -> PreferenceIndicators {
        self.parse(text)
            .map(|doc| indicators_of(&doc))
            .unwrap_or_default()
    }

    /// Attitude pattern matches grouped by category
    pub fn extract_preference_patterns(&self, text: &str) -> PatternGroups {
        self.parse(text)
            .map(|doc| self.patterns_of(&doc))
            .unwrap_or_default()
    }

    /// Scaffold for summarization prompts
    pub fn build_summary_scaffold(&self, text: &str) -> SummaryScaffold {
        self.parse(text)
            .map(|doc| build_scaffold(&doc, self.config.max_scaffold_topics))
            .unwrap_or_default()
    }

    /// Compact text block to prepend to a prompt
    ///
    /// Empty when the parser is unavailable, the input is blank or the parse
    /// fails; otherwise the fixed layout, with `[]` for empty groups.
    pub fn build_context_prefix(&self, text: &str) -> String {
        match self.try_extract_all(text) {
            Ok(bundle) => {
                ContextPrefixRenderer::new(self.config.include_patterns_in_prefix).render(&bundle)
            }
            Err(_) => String::new(),
        }
    }

    /// Validate, truncate and parse one input
    ///
    /// Every public operation goes through here exactly once.
    fn parse(&self, text: &str) -> Result<Document, ExtractorError> {
        if !self.adapter.is_available() {
            return Err(ExtractorError::ParserUnavailable(
                "no parser configured".to_string(),
            ));
        }
        if text.trim().is_empty() {
            debug!("Empty input; skipping extraction");
            return Err(ExtractorError::EmptyInput);
        }

        let text = self.truncate(text);
        self.adapter.parse(text).inspect_err(|e| {
            if let ExtractorError::Parse(_) = e {
                warn!("Feature extraction failed: {}", e);
            }
        })
    }

    fn truncate<'a>(&self, text: &'a str) -> &'a str {
        let max = self.config.max_text_length;
        match text.char_indices().nth(max) {
            Some((cut, _)) => {
                let length = text.chars().count();
                warn!(
                    "{}; truncating to first {} characters",
                    ExtractorError::TextTooLong(length, max),
                    max
                );
                &text[..cut]
            }
            None => text,
        }
    }

    fn patterns_of(&self, doc: &Document) -> PatternGroups {
        self.matcher
            .as_ref()
            .map(|matcher| matcher.find_all(doc))
            .unwrap_or_default()
    }
}

fn indicators_of(doc: &Document) -> PreferenceIndicators {
    let mut indicators = PreferenceIndicators::default();

    for entity in doc.entities() {
        match entity.label.as_str() {
            "PERSON" => indicators.names.push(entity.text.clone()),
            "GPE" | "LOC" => indicators.locations.push(entity.text.clone()),
            _ => {}
        }
    }

    for token in doc.tokens() {
        if token.pos == Pos::Pron {
            *indicators.pronoun_counts.entry(token.lower()).or_default() += 1;
        }
    }

    for sentence in doc.sentences() {
        let trimmed = sentence.text.trim();
        if trimmed.ends_with('?') {
            indicators.question_sentences.push(trimmed.to_string());
        }
    }

    indicators
}

fn noun_chunks_of(doc: &Document) -> Vec<String> {
    doc.noun_chunks()
        .iter()
        .filter(|chunk| chunk.token_count > 1)
        .map(|chunk| chunk.text.clone())
        .collect()
}

fn pos_tag_counts_of(doc: &Document) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for token in doc.tokens() {
        *counts.entry(token.pos.as_str().to_string()).or_default() += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_parser::{DocumentBuilder, MockParser, ParserError};

    fn extractor(parser: MockParser, config: ExtractorConfig) -> FeatureExtractor<MockParser> {
        FeatureExtractor::new(parser, Arc::new(PatternMatcher::new()), config)
    }

    fn question_doc() -> Document {
        DocumentBuilder::new("Did Sarah visit London? She loves it.")
            .token("Did", "do", "AUX", "aux", 2)
            .token("Sarah", "Sarah", "PROPN", "nsubj", 2)
            .token("visit", "visit", "VERB", "ROOT", 2)
            .token("London", "London", "PROPN", "dobj", 2)
            .token("?", "?", "PUNCT", "punct", 2)
            .end_sentence()
            .token("She", "she", "PRON", "nsubj", 1)
            .token("loves", "love", "VERB", "ROOT", 1)
            .token("it", "it", "PRON", "dobj", 1)
            .token(".", ".", "PUNCT", "punct", 1)
            .entity("Sarah", "PERSON")
            .entity("London", "GPE")
            .noun_chunk("Sarah")
            .build()
            .unwrap()
    }

    #[test]
    fn test_indicators() {
        let text = "Did Sarah visit London? She loves it.";
        let parser = MockParser::new().with_document(text, question_doc());
        let indicators =
            extractor(parser, ExtractorConfig::default()).extract_preference_indicators(text);

        assert_eq!(indicators.names, vec!["Sarah"]);
        assert_eq!(indicators.locations, vec!["London"]);
        assert_eq!(indicators.pronoun_counts.get("she"), Some(&1));
        assert_eq!(indicators.pronoun_counts.get("it"), Some(&1));
        assert_eq!(indicators.question_sentences, vec!["Did Sarah visit London?"]);
    }

    #[test]
    fn test_pos_counts_and_single_token_chunks() {
        let text = "Did Sarah visit London? She loves it.";
        let parser = MockParser::new().with_document(text, question_doc());
        let bundle = extractor(parser, ExtractorConfig::default()).extract_all(text);

        assert_eq!(bundle.pos_tag_counts.get("VERB"), Some(&2));
        assert_eq!(bundle.pos_tag_counts.get("PUNCT"), Some(&2));
        assert!(bundle.noun_chunks.is_empty());
        assert_eq!(bundle.relationships.len(), 2);
    }

    #[test]
    fn test_disabled_matcher_keeps_all_categories() {
        let text = "Did Sarah visit London? She loves it.";
        let parser = MockParser::new().with_document(text, question_doc());
        let extractor = extractor(parser, ExtractorConfig::without_patterns());

        let patterns = extractor.extract_preference_patterns(text);
        assert!(patterns.is_empty());
        assert_eq!(patterns.iter().count(), 5);
    }

    #[test]
    fn test_try_new_rejects_invalid_config() {
        let result = FeatureExtractor::try_new(
            MockParser::new(),
            Arc::new(PatternMatcher::new()),
            ExtractorConfig::default().with_max_text_length(0),
        );
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_try_extract_all_reports_reasons() {
        let mut parser = MockParser::new();
        parser.add_error("broken");
        let extractor = extractor(parser, ExtractorConfig::default());

        assert!(matches!(extractor.try_extract_all("  \n"), Err(ExtractorError::EmptyInput)));
        assert!(matches!(extractor.try_extract_all("broken"), Err(ExtractorError::Parse(_))));
        assert!(extractor.extract_all("broken").is_empty());

        let unavailable: FeatureExtractor<MockParser> = FeatureExtractor::connect(
            Err(ParserError::Unavailable("offline".to_string())),
            Arc::new(PatternMatcher::new()),
            ExtractorConfig::default(),
        );
        assert!(matches!(
            unavailable.try_extract_all("hello"),
            Err(ExtractorError::ParserUnavailable(_))
        ));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let parser = MockParser::new();
        let extractor = extractor(
            parser.clone(),
            ExtractorConfig::default().with_max_text_length(3),
        );

        extractor.extract_all("ééééé");
        assert_eq!(parser.calls(), vec!["ééé".to_string()]);
    }

    #[test]
    fn test_text_at_limit_is_untouched() {
        let parser = MockParser::new();
        let extractor = extractor(
            parser.clone(),
            ExtractorConfig::default().with_max_text_length(5),
        );

        extractor.extract_all("hello");
        assert_eq!(parser.calls(), vec!["hello".to_string()]);
    }
}
