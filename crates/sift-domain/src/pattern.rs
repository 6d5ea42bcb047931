//! Pattern module - attitude pattern categories and their matches

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The five fixed attitude-pattern categories
///
/// The declaration order is the canonical order used for iteration and
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatternCategory {
    /// "don't like", "didn't enjoy"
    NegatedPreference,

    /// "really love", "absolutely hate"
    StrongPreference,

    /// "used to like"
    TemporalChange,

    /// "maybe like", "kind of prefer"
    Hedging,

    /// "if I could", "would prefer"
    Conditional,
}

impl PatternCategory {
    /// All categories in canonical order
    pub const ALL: [PatternCategory; 5] = [
        PatternCategory::NegatedPreference,
        PatternCategory::StrongPreference,
        PatternCategory::TemporalChange,
        PatternCategory::Hedging,
        PatternCategory::Conditional,
    ];

    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternCategory::NegatedPreference => "NEGATED_PREFERENCE",
            PatternCategory::StrongPreference => "STRONG_PREFERENCE",
            PatternCategory::TemporalChange => "TEMPORAL_CHANGE",
            PatternCategory::Hedging => "HEDGING",
            PatternCategory::Conditional => "CONDITIONAL",
        }
    }

    /// Parse a category from its string name
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PatternCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern category: {}", s))
    }
}

/// One occurrence of an attitude pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatch {
    /// Category that matched
    pub category: PatternCategory,

    /// Surface text of the matched span
    pub text: String,

    /// Lemmas of the matched tokens joined by single spaces
    pub lemma: String,

    /// Start character offset
    pub start: usize,

    /// End character offset (exclusive)
    pub end: usize,
}

/// Matches grouped by category
///
/// Always holds exactly the five category keys; a category with no matches
/// maps to an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<PatternCategory, Vec<PatternMatch>>")]
pub struct PatternGroups(BTreeMap<PatternCategory, Vec<PatternMatch>>);

impl PatternGroups {
    /// Create groups with every category present and empty
    pub fn new() -> Self {
        Self(
            PatternCategory::ALL
                .into_iter()
                .map(|category| (category, Vec::new()))
                .collect(),
        )
    }

    /// Matches for one category
    pub fn get(&self, category: PatternCategory) -> &[PatternMatch] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append a match to its category
    pub fn push(&mut self, found: PatternMatch) {
        self.0.entry(found.category).or_default().push(found);
    }

    /// Replace the matches of one category
    pub fn set(&mut self, category: PatternCategory, matches: Vec<PatternMatch>) {
        self.0.insert(category, matches);
    }

    /// Iterate categories in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (PatternCategory, &[PatternMatch])> {
        self.0.iter().map(|(category, matches)| (*category, matches.as_slice()))
    }

    /// Categories with at least one match, in canonical order
    pub fn detected(&self) -> impl Iterator<Item = PatternCategory> + '_ {
        self.iter()
            .filter(|(_, matches)| !matches.is_empty())
            .map(|(category, _)| category)
    }

    /// Whether a category has at least one match
    pub fn has(&self, category: PatternCategory) -> bool {
        !self.get(category).is_empty()
    }

    /// Whether no category has any match
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    /// Total number of matches across categories
    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl Default for PatternGroups {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BTreeMap<PatternCategory, Vec<PatternMatch>>> for PatternGroups {
    fn from(map: BTreeMap<PatternCategory, Vec<PatternMatch>>) -> Self {
        let mut groups = Self::new();
        for (category, matches) in map {
            groups.set(category, matches);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(category: PatternCategory, text: &str) -> PatternMatch {
        PatternMatch {
            category,
            text: text.to_string(),
            lemma: text.to_string(),
            start: 0,
            end: text.chars().count(),
        }
    }

    #[test]
    fn test_new_groups_have_all_keys() {
        let groups = PatternGroups::new();
        assert_eq!(groups.iter().count(), 5);
        assert!(groups.is_empty());
        assert_eq!(groups.total(), 0);
    }

    #[test]
    fn test_iteration_order_is_canonical() {
        let categories: Vec<_> = PatternGroups::new().iter().map(|(c, _)| c).collect();
        assert_eq!(categories, PatternCategory::ALL.to_vec());
    }

    #[test]
    fn test_push_and_detected() {
        let mut groups = PatternGroups::new();
        groups.push(hit(PatternCategory::Hedging, "maybe like"));
        groups.push(hit(PatternCategory::NegatedPreference, "don't like"));

        let detected: Vec<_> = groups.detected().collect();
        assert_eq!(
            detected,
            vec![PatternCategory::NegatedPreference, PatternCategory::Hedging]
        );
        assert!(groups.has(PatternCategory::Hedging));
        assert!(!groups.has(PatternCategory::Conditional));
    }

    #[test]
    fn test_partial_json_still_yields_all_keys() {
        let json = r#"{"HEDGING": []}"#;
        let groups: PatternGroups = serde_json::from_str(json).unwrap();
        assert_eq!(groups.iter().count(), 5);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(PatternCategory::TemporalChange.as_str(), "TEMPORAL_CHANGE");
        assert_eq!(
            "conditional".parse::<PatternCategory>().unwrap(),
            PatternCategory::Conditional
        );
        assert!("SARCASM".parse::<PatternCategory>().is_err());
    }
}
