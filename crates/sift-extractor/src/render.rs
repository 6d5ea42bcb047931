//! Prompt-ready text rendering
//!
//! # Context prefix format
//!
//! ```text
//! Pre-identified signals:
//! - Entities: [Paris:GPE, Alice:PERSON]
//! - Relationships: [✗ I -visit-> Paris; I -love-> pizza]
//! - Preference Patterns: Negated preferences, Strong preferences
//!
//! ```
//!
//! The entity and relationship lines are always present (as `[]` when
//! empty); the pattern line only when enabled and some category matched. The
//! prefix always ends with a blank line so it can be prepended to a prompt
//! as-is.

use sift_domain::{FeatureBundle, PatternCategory, SummaryScaffold};

/// First line of every non-empty context prefix
pub const HEADER: &str = "Pre-identified signals:";

/// Prepended to negated relationships
pub const NEGATION_MARK: &str = "✗";

/// Human-readable indicator for a pattern category
pub fn pattern_indicator(category: PatternCategory) -> &'static str {
    match category {
        PatternCategory::NegatedPreference => "Negated preferences",
        PatternCategory::StrongPreference => "Strong preferences",
        PatternCategory::TemporalChange => "Past preference changes",
        PatternCategory::Hedging => "Uncertain/hedged preferences",
        PatternCategory::Conditional => "Conditional preferences",
    }
}

/// Renders feature bundles into the compact context prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextPrefixRenderer {
    include_patterns: bool,
}

impl ContextPrefixRenderer {
    /// Create a renderer; `include_patterns` controls the pattern line
    pub fn new(include_patterns: bool) -> Self {
        Self { include_patterns }
    }

    /// Render a bundle
    ///
    /// The header, entity and relationship lines are always written, even
    /// when their groups are empty.
    pub fn render(&self, bundle: &FeatureBundle) -> String {
        let mut entities: Vec<String> = Vec::new();
        for entity in &bundle.entities {
            let pair = format!("{}:{}", entity.text, entity.label);
            if !entities.contains(&pair) {
                entities.push(pair);
            }
        }

        let relationships: Vec<String> = bundle
            .relationships
            .iter()
            .map(|r| {
                if r.is_negated {
                    format!("{} {}", NEGATION_MARK, r.arrow())
                } else {
                    r.arrow()
                }
            })
            .collect();

        let mut lines = vec![
            HEADER.to_string(),
            format!("- Entities: [{}]", entities.join(", ")),
            format!("- Relationships: [{}]", relationships.join("; ")),
        ];

        if self.include_patterns {
            let indicators: Vec<&str> = bundle
                .patterns
                .detected()
                .map(pattern_indicator)
                .collect();
            if !indicators.is_empty() {
                lines.push(format!("- Preference Patterns: {}", indicators.join(", ")));
            }
        }

        format!("{}\n\n", lines.join("\n"))
    }
}

impl Default for ContextPrefixRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Render a summary scaffold as labeled lines
///
/// All five groups are always listed. Each is capped: people, places and
/// organizations at 5, actions and topics at 8.
pub fn render_scaffold(scaffold: &SummaryScaffold) -> String {
    let groups: [(&str, &[String], usize); 5] = [
        ("Key People", scaffold.entities_labeled("PERSON"), 5),
        ("Places Mentioned", scaffold.entities_labeled("GPE"), 5),
        ("Organizations", scaffold.entities_labeled("ORG"), 5),
        ("Main Actions", scaffold.main_actions.as_slice(), 8),
        ("Topics", scaffold.topics.as_slice(), 8),
    ];

    groups
        .iter()
        .map(|(label, items, cap)| {
            let shown: Vec<&str> = items.iter().take(*cap).map(String::as_str).collect();
            format!("{}: [{}]", label, shown.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
