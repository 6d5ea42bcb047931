//! Relationship module - shallow subject-verb-object triples

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for a subject or object the parse did not supply
///
/// Kept as a plain string so existing prompt consumers can read bundles
/// unchanged; use [`Relationship::has_subject`] / [`Relationship::has_object`]
/// instead of comparing against it.
pub const UNKNOWN: &str = "unknown";

/// Which clause a relationship was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClauseType {
    /// A sentence root verb or a conjunct of one
    Root,

    /// An infinitival complement ("want *to visit*")
    Xcomp,

    /// A finite complement ("think *that you should try*")
    Ccomp,
}

impl ClauseType {
    /// Get the clause type as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ClauseType::Root => "root",
            ClauseType::Xcomp => "xcomp",
            ClauseType::Ccomp => "ccomp",
        }
    }
}

impl fmt::Display for ClauseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A subject-verb-object relation recovered from a dependency tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Subject surface text, or [`UNKNOWN`]
    pub subject: String,

    /// Verb lemma, particle-fused for phrasal verbs ("meet_up")
    pub verb: String,

    /// Object surface text, or [`UNKNOWN`]
    pub object: String,

    /// Whether the verb is negated locally or by a governing verb
    pub is_negated: bool,

    /// Surface text of the negation marker ("n't", "never")
    pub negation_marker: Option<String>,

    /// Whether particles were fused onto the verb
    pub has_particles: bool,

    /// Clause the verb heads
    pub clause_type: ClauseType,
}

impl Relationship {
    /// Whether the subject slot holds a real token
    pub fn has_subject(&self) -> bool {
        self.subject != UNKNOWN
    }

    /// Whether the object slot holds a real token
    pub fn has_object(&self) -> bool {
        self.object != UNKNOWN
    }

    /// The triple in `subject -verb-> object` form
    pub fn arrow(&self) -> String {
        format!("{} -{}-> {}", self.subject, self.verb, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relation(subject: &str, object: &str) -> Relationship {
        Relationship {
            subject: subject.to_string(),
            verb: "visit".to_string(),
            object: object.to_string(),
            is_negated: false,
            negation_marker: None,
            has_particles: false,
            clause_type: ClauseType::Xcomp,
        }
    }

    #[test]
    fn test_sentinel_helpers() {
        let rel = relation(UNKNOWN, "Paris");
        assert!(!rel.has_subject());
        assert!(rel.has_object());
    }

    #[test]
    fn test_arrow_format() {
        assert_eq!(relation("I", "Paris").arrow(), "I -visit-> Paris");
    }

    #[test]
    fn test_clause_type_serializes_lowercase() {
        let json = serde_json::to_value(relation("I", "Paris")).unwrap();
        assert_eq!(json["clause_type"], "xcomp");
        assert_eq!(json["negation_marker"], serde_json::Value::Null);
    }
}
