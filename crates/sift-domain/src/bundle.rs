//! Bundle module - everything derived from one parse

use crate::document::EntitySpan;
use crate::pattern::PatternGroups;
use crate::relationship::Relationship;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Signals that help a prompt builder spot preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceIndicators {
    /// PERSON entity texts
    pub names: Vec<String>,

    /// GPE and LOC entity texts
    pub locations: Vec<String>,

    /// Lowercased pronoun → occurrence count
    pub pronoun_counts: BTreeMap<String, usize>,

    /// Sentences (trimmed) that end with a question mark
    pub question_sentences: Vec<String>,
}

impl PreferenceIndicators {
    /// Whether no indicator was found
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
            && self.locations.is_empty()
            && self.pronoun_counts.is_empty()
            && self.question_sentences.is_empty()
    }
}

/// All feature groups derived from a single parse
///
/// `FeatureBundle::default()` is the documented empty shape: every field is
/// present and the pattern groups hold all five categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureBundle {
    /// Subject-verb-object relations in token order
    pub relationships: Vec<Relationship>,

    /// Attitude pattern matches by category
    pub patterns: PatternGroups,

    /// Named entities in document order
    pub entities: Vec<EntitySpan>,

    /// Preference indicators
    pub indicators: PreferenceIndicators,

    /// Multi-token noun phrases in document order
    pub noun_chunks: Vec<String>,

    /// Part-of-speech tag → token count
    pub pos_tag_counts: BTreeMap<String, usize>,
}

impl FeatureBundle {
    /// Whether no signal at all was produced
    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
            && self.patterns.is_empty()
            && self.entities.is_empty()
            && self.indicators.is_empty()
            && self.noun_chunks.is_empty()
            && self.pos_tag_counts.is_empty()
    }
}

/// Structured summary scaffolding for summarization prompts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryScaffold {
    /// Entity texts grouped by label, in document order within a label
    pub entities: BTreeMap<String, Vec<String>>,

    /// Unique lemmas of root and conjunct verbs, first occurrence order
    pub main_actions: Vec<String>,

    /// Unique multi-token noun chunks, first occurrence order
    pub topics: Vec<String>,
}

impl SummaryScaffold {
    /// Entity texts for one label
    pub fn entities_labeled(&self, label: &str) -> &[String] {
        self.entities.get(label).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternCategory;

    #[test]
    fn test_default_bundle_is_empty_but_complete() {
        let bundle = FeatureBundle::default();
        assert!(bundle.is_empty());
        assert_eq!(bundle.patterns.iter().count(), PatternCategory::ALL.len());
    }

    #[test]
    fn test_empty_bundle_json_has_every_field() {
        let json = serde_json::to_value(FeatureBundle::default()).unwrap();
        for field in [
            "relationships",
            "patterns",
            "entities",
            "indicators",
            "noun_chunks",
            "pos_tag_counts",
        ] {
            assert!(!json[field].is_null(), "missing field {}", field);
        }
        assert_eq!(json["patterns"].as_object().unwrap().len(), 5);
        assert!(json["patterns"]["NEGATED_PREFERENCE"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_scaffold_label_lookup() {
        let mut scaffold = SummaryScaffold::default();
        scaffold
            .entities
            .insert("PERSON".to_string(), vec!["Alice".to_string()]);
        assert_eq!(scaffold.entities_labeled("PERSON"), ["Alice".to_string()]);
        assert!(scaffold.entities_labeled("ORG").is_empty());
    }
}
