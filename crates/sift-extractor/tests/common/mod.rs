//! Hand-built parses shared by the integration tests

use sift_extractor::{ExtractorConfig, FeatureExtractor, PatternMatcher};
use sift_parser::{DocumentBuilder, MockParser};
use std::sync::Arc;

pub const DONT_WANT_PARIS: &str = "I don't want to visit Paris";
pub const MEET_UP: &str = "Let's meet up tomorrow";
pub const REALLY_LOVE: &str = "I really love hiking";
pub const USED_TO_LOVE: &str = "I used to love running";
pub const SARAH_LONDON: &str = "Did Sarah visit London? She loves the old bridge.";

/// A mock parser that knows every fixture sentence
pub fn fixture_parser() -> MockParser {
    let mut parser = MockParser::new();

    parser.add_document(
        DONT_WANT_PARIS,
        DocumentBuilder::new(DONT_WANT_PARIS)
            .token("I", "I", "PRON", "nsubj", 3)
            .token("do", "do", "AUX", "aux", 3)
            .token("n't", "not", "PART", "neg", 3)
            .token("want", "want", "VERB", "ROOT", 3)
            .token("to", "to", "PART", "aux", 5)
            .token("visit", "visit", "VERB", "xcomp", 3)
            .token("Paris", "Paris", "PROPN", "dobj", 5)
            .entity("Paris", "GPE")
            .noun_chunk("Paris")
            .build()
            .unwrap(),
    );

    parser.add_document(
        MEET_UP,
        DocumentBuilder::new(MEET_UP)
            .token("Let", "let", "VERB", "ROOT", 0)
            .token("'s", "us", "PRON", "nsubj", 2)
            .token("meet", "meet", "VERB", "ccomp", 0)
            .token("up", "up", "ADP", "prt", 2)
            .token("tomorrow", "tomorrow", "NOUN", "npadvmod", 2)
            .entity("tomorrow", "DATE")
            .build()
            .unwrap(),
    );

    parser.add_document(
        REALLY_LOVE,
        DocumentBuilder::new(REALLY_LOVE)
            .token("I", "I", "PRON", "nsubj", 2)
            .token("really", "really", "ADV", "advmod", 2)
            .token("love", "love", "VERB", "ROOT", 2)
            .token("hiking", "hiking", "NOUN", "dobj", 2)
            .build()
            .unwrap(),
    );

    parser.add_document(
        USED_TO_LOVE,
        DocumentBuilder::new(USED_TO_LOVE)
            .token("I", "I", "PRON", "nsubj", 1)
            .token("used", "use", "VERB", "ROOT", 1)
            .token("to", "to", "PART", "aux", 3)
            .token("love", "love", "VERB", "xcomp", 1)
            .token("running", "running", "NOUN", "dobj", 3)
            .build()
            .unwrap(),
    );

    parser.add_document(
        SARAH_LONDON,
        DocumentBuilder::new(SARAH_LONDON)
            .token("Did", "do", "AUX", "aux", 2)
            .token("Sarah", "Sarah", "PROPN", "nsubj", 2)
            .token("visit", "visit", "VERB", "ROOT", 2)
            .token("London", "London", "PROPN", "dobj", 2)
            .token("?", "?", "PUNCT", "punct", 2)
            .end_sentence()
            .token("She", "she", "PRON", "nsubj", 1)
            .token("loves", "love", "VERB", "ROOT", 1)
            .token("the", "the", "DET", "det", 4)
            .token("old", "old", "ADJ", "amod", 4)
            .token("bridge", "bridge", "NOUN", "dobj", 1)
            .token(".", ".", "PUNCT", "punct", 1)
            .entity("Sarah", "PERSON")
            .entity("London", "GPE")
            .noun_chunk("Sarah")
            .noun_chunk("London")
            .noun_chunk("the old bridge")
            .build()
            .unwrap(),
    );

    parser
}

/// Every fixture text, for properties that hold on all of them
pub fn all_texts() -> [&'static str; 5] {
    [DONT_WANT_PARIS, MEET_UP, REALLY_LOVE, USED_TO_LOVE, SARAH_LONDON]
}

/// An extractor over the fixture parser with the given config
pub fn extractor(config: ExtractorConfig) -> FeatureExtractor<MockParser> {
    FeatureExtractor::new(fixture_parser(), Arc::new(PatternMatcher::new()), config)
}
