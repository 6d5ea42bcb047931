//! Rule-based attitude pattern matcher
//!
//! Each category is a list of token patterns. A pattern is a sequence of
//! steps; a step constrains one token's part of speech, lowercase text and/or
//! lemma, and carries a repetition quantifier.
//!
//! # Matching policy
//!
//! - Every category is scanned independently over the whole document
//! - At each position the longest match among the category's patterns wins,
//!   then scanning resumes after it (non-overlapping within a category)
//! - Matches from different categories may overlap and are all kept
//!
//! The registry is built once in [`PatternMatcher::new`] and never mutated;
//! share one instance (behind an `Arc`) across every extractor and thread.

use sift_domain::{Document, PatternCategory, PatternGroups, PatternMatch, Pos, Token};
use tracing::debug;

/// How many consecutive tokens a step may consume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// Exactly one token
    One,
    /// Zero or more tokens
    ZeroOrMore,
    /// Zero or one token
    ZeroOrOne,
}

/// Constraints on a single token
#[derive(Debug, Clone)]
pub struct TokenStep {
    pos: Option<Vec<Pos>>,
    lower: Option<Vec<&'static str>>,
    lemma: Option<Vec<&'static str>>,
    quantifier: Quantifier,
}

impl TokenStep {
    fn unconstrained() -> Self {
        Self {
            pos: None,
            lower: None,
            lemma: None,
            quantifier: Quantifier::One,
        }
    }

    /// Token whose lowercase text is one of `words`
    pub fn lower(words: &[&'static str]) -> Self {
        Self {
            lower: Some(words.to_vec()),
            ..Self::unconstrained()
        }
    }

    /// Token whose lemma is one of `lemmas`
    pub fn lemma(lemmas: &[&'static str]) -> Self {
        Self {
            lemma: Some(lemmas.to_vec()),
            ..Self::unconstrained()
        }
    }

    /// Token with the given part of speech
    pub fn pos(pos: Pos) -> Self {
        Self {
            pos: Some(vec![pos]),
            ..Self::unconstrained()
        }
    }

    /// Allow zero or one occurrence
    pub fn optional(mut self) -> Self {
        self.quantifier = Quantifier::ZeroOrOne;
        self
    }

    /// Allow any number of occurrences, including none
    pub fn repeated(mut self) -> Self {
        self.quantifier = Quantifier::ZeroOrMore;
        self
    }

    /// Whether a token satisfies every constraint of this step
    pub fn accepts(&self, token: &Token) -> bool {
        if let Some(pos) = &self.pos {
            if !pos.contains(&token.pos) {
                return false;
            }
        }
        if let Some(words) = &self.lower {
            let lower = token.lower();
            if !words.contains(&lower.as_str()) {
                return false;
            }
        }
        if let Some(lemmas) = &self.lemma {
            let lemma = token.lemma.to_lowercase();
            if !lemmas.contains(&lemma.as_str()) {
                return false;
            }
        }
        true
    }
}

/// An ordered sequence of token steps
#[derive(Debug, Clone)]
pub struct TokenPattern {
    steps: Vec<TokenStep>,
}

impl TokenPattern {
    /// Create a pattern from its steps
    pub fn new(steps: Vec<TokenStep>) -> Self {
        Self { steps }
    }

    /// End (exclusive) of the longest non-empty match starting at `start`
    pub fn longest_match(&self, tokens: &[&Token], start: usize) -> Option<usize> {
        self.match_from(tokens, 0, start).filter(|end| *end > start)
    }

    fn match_from(&self, tokens: &[&Token], step_index: usize, position: usize) -> Option<usize> {
        let Some(step) = self.steps.get(step_index) else {
            return Some(position);
        };

        let max_count = match step.quantifier {
            Quantifier::One | Quantifier::ZeroOrOne => 1,
            Quantifier::ZeroOrMore => tokens.len().saturating_sub(position),
        };
        let consumable = tokens[position.min(tokens.len())..]
            .iter()
            .take(max_count)
            .take_while(|token| step.accepts(token))
            .count();
        let min_count = match step.quantifier {
            Quantifier::One => 1,
            Quantifier::ZeroOrOne | Quantifier::ZeroOrMore => 0,
        };
        if consumable < min_count {
            return None;
        }

        // Longest overall wins, so try every admissible count
        (min_count..=consumable)
            .rev()
            .filter_map(|count| self.match_from(tokens, step_index + 1, position + count))
            .max()
    }
}

/// The five-category attitude pattern matcher
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    rules: Vec<(PatternCategory, Vec<TokenPattern>)>,
}

impl PatternMatcher {
    /// Build the rule registry
    pub fn new() -> Self {
        let rules = vec![
            (
                PatternCategory::NegatedPreference,
                vec![
                    TokenPattern::new(vec![
                        TokenStep::lower(&["do", "does", "did"]),
                        TokenStep::lower(&["n't", "not"]),
                        TokenStep::pos(Pos::Verb),
                    ]),
                    TokenPattern::new(vec![
                        TokenStep::lower(&["don't", "doesn't", "didn't", "dont", "doesnt", "didnt"]),
                        TokenStep::pos(Pos::Verb),
                    ]),
                ],
            ),
            (
                PatternCategory::StrongPreference,
                vec![TokenPattern::new(vec![
                    TokenStep::lower(&["really", "absolutely", "totally", "extremely"]),
                    TokenStep::pos(Pos::Verb),
                ])],
            ),
            (
                PatternCategory::TemporalChange,
                vec![TokenPattern::new(vec![
                    TokenStep::lower(&["used"]),
                    TokenStep::lower(&["to"]),
                    TokenStep::pos(Pos::Adv).repeated(),
                    TokenStep::pos(Pos::Verb),
                ])],
            ),
            (
                PatternCategory::Hedging,
                vec![
                    TokenPattern::new(vec![
                        TokenStep::lower(&["maybe", "perhaps", "possibly", "might"]),
                        TokenStep::pos(Pos::Verb).optional(),
                    ]),
                    TokenPattern::new(vec![
                        TokenStep::lower(&["kind", "sort"]),
                        TokenStep::lower(&["of"]),
                        TokenStep::pos(Pos::Verb),
                    ]),
                ],
            ),
            (
                PatternCategory::Conditional,
                vec![
                    TokenPattern::new(vec![
                        TokenStep::lower(&["if"]),
                        TokenStep::pos(Pos::Pron).optional(),
                        TokenStep::pos(Pos::Aux).optional(),
                    ]),
                    TokenPattern::new(vec![
                        TokenStep::lemma(&["would", "could", "should"]),
                        TokenStep::pos(Pos::Verb),
                    ]),
                ],
            ),
        ];

        Self { rules }
    }

    /// Patterns registered for a category
    pub fn patterns(&self, category: PatternCategory) -> &[TokenPattern] {
        self.rules
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, patterns)| patterns.as_slice())
            .unwrap_or(&[])
    }

    /// Scan the document for every category
    pub fn find_all(&self, doc: &Document) -> PatternGroups {
        let tokens: Vec<&Token> = doc.tokens().collect();
        let mut groups = PatternGroups::new();
        for (category, patterns) in &self.rules {
            groups.set(*category, scan(doc, &tokens, *category, patterns));
        }
        debug!("Pattern matcher found {} matches", groups.total());
        groups
    }

    /// Scan the document for one category
    pub fn find(&self, doc: &Document, category: PatternCategory) -> Vec<PatternMatch> {
        let tokens: Vec<&Token> = doc.tokens().collect();
        scan(doc, &tokens, category, self.patterns(category))
    }
}

impl Default for PatternMatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn scan(
    doc: &Document,
    tokens: &[&Token],
    category: PatternCategory,
    patterns: &[TokenPattern],
) -> Vec<PatternMatch> {
    let mut matches = Vec::new();
    let mut position = 0;
    while position < tokens.len() {
        let longest = patterns
            .iter()
            .filter_map(|pattern| pattern.longest_match(tokens, position))
            .max();

        match longest {
            Some(end) => {
                let found = build_match(doc, &tokens[position..end], category);
                debug!("{} matched '{}'", category, found.text);
                matches.push(found);
                position = end;
            }
            None => position += 1,
        }
    }
    matches
}

fn build_match(doc: &Document, span: &[&Token], category: PatternCategory) -> PatternMatch {
    let start = span.first().map(|t| t.start).unwrap_or(0);
    let end = span.last().map(|t| t.end).unwrap_or(start);
    PatternMatch {
        category,
        text: doc.slice_chars(start, end),
        lemma: span
            .iter()
            .map(|t| t.lemma.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        start,
        end,
    }
}
