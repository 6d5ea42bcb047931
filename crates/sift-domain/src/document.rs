//! Document module - the uniform shape of one parse

use crate::token::Token;
use serde::{Deserialize, Serialize};

/// A named entity span recognized by the upstream parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Entity text
    pub text: String,

    /// Category label (PERSON, GPE, ORG, ...)
    pub label: String,

    /// Start character offset
    pub start: usize,

    /// End character offset (exclusive)
    pub end: usize,
}

/// A noun phrase span ("spicy food", "my best friend")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounChunk {
    /// Chunk text
    pub text: String,

    /// Start character offset
    pub start: usize,

    /// End character offset (exclusive)
    pub end: usize,

    /// Number of tokens in the chunk
    pub token_count: usize,
}

/// An ordered sequence of tokens forming one sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text
    pub text: String,

    /// Start character offset
    pub start: usize,

    /// End character offset (exclusive)
    pub end: usize,

    /// Tokens in order; `Token::head` indexes into this vector
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Indices of the direct dependents of token `index`, in token order
    pub fn children(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .filter(move |(i, token)| *i != index && token.head == index)
            .map(|(i, _)| i)
    }

    /// Token at `index`
    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }
}

/// One parse of one input text
///
/// Created fresh for every extraction call and never shared between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The text that was parsed
    pub text: String,

    /// Sentences in order
    pub sentences: Vec<Sentence>,

    /// Named entities in order
    pub entities: Vec<EntitySpan>,

    /// Noun chunks in order
    pub noun_chunks: Vec<NounChunk>,
}

impl Document {
    /// Sentences in order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Named entities in order
    pub fn entities(&self) -> &[EntitySpan] {
        &self.entities
    }

    /// Noun chunks in order
    pub fn noun_chunks(&self) -> &[NounChunk] {
        &self.noun_chunks
    }

    /// All tokens in document order, across sentence boundaries
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flat_map(|s| s.tokens.iter())
    }

    /// Total number of tokens
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(|s| s.tokens.len()).sum()
    }

    /// Whether the parse produced no tokens at all
    pub fn is_empty(&self) -> bool {
        self.token_count() == 0
    }

    /// Slice the document text by character offsets (half-open)
    ///
    /// Out-of-range offsets are clamped to the text.
    pub fn slice_chars(&self, start: usize, end: usize) -> String {
        self.text
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }
}
