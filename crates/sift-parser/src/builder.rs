//! Hand-assembled parse trees
//!
//! Used for fixtures and for parser backends that emit token rows without
//! offsets. Each token, entity and noun chunk is located in the source text by
//! searching forward from the previous one, so rows must be given in text
//! order.

use crate::ParserError;
use sift_domain::{Dep, Document, EntitySpan, NounChunk, Pos, Sentence, Token};

/// Incremental text search that tracks byte and character positions together
#[derive(Debug, Clone, Default)]
struct Cursor {
    byte: usize,
    chars: usize,
}

impl Cursor {
    /// Find `needle` at or after the cursor and advance past it
    fn locate(&mut self, text: &str, needle: &str) -> Option<(usize, usize)> {
        let rest = &text[self.byte..];
        let offset = rest.find(needle)?;
        let start = self.chars + rest[..offset].chars().count();
        let end = start + needle.chars().count();
        self.byte += offset + needle.len();
        self.chars = end;
        Some((start, end))
    }
}

/// Builds a [`Document`] from token rows
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    text: String,
    sentences: Vec<Vec<Token>>,
    current: Vec<Token>,
    entities: Vec<EntitySpan>,
    chunks: Vec<(usize, usize)>,
    token_cursor: Cursor,
    entity_cursor: Cursor,
    chunk_cursor: Cursor,
    error: Option<String>,
}

impl DocumentBuilder {
    /// Start a document for the given source text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sentences: Vec::new(),
            current: Vec::new(),
            entities: Vec::new(),
            chunks: Vec::new(),
            token_cursor: Cursor::default(),
            entity_cursor: Cursor::default(),
            chunk_cursor: Cursor::default(),
            error: None,
        }
    }

    /// Append a token to the current sentence
    ///
    /// `head` is the sentence-local index of the head token; a root points to
    /// itself.
    pub fn token(mut self, text: &str, lemma: &str, pos: &str, dep: &str, head: usize) -> Self {
        match self.token_cursor.locate(&self.text, text) {
            Some((start, end)) => {
                let dep = Dep::parse(dep);
                self.current.push(Token {
                    text: text.to_string(),
                    lemma: lemma.to_string(),
                    pos: Pos::parse(pos),
                    is_particle: dep == Dep::Prt,
                    dep,
                    head,
                    start,
                    end,
                });
            }
            None => self.fail(format!("token '{}' not found in text", text)),
        }
        self
    }

    /// Close the current sentence; the next token starts a new one
    pub fn end_sentence(mut self) -> Self {
        if !self.current.is_empty() {
            self.sentences.push(std::mem::take(&mut self.current));
        }
        self
    }

    /// Mark the next occurrence of `text` as a named entity
    pub fn entity(mut self, text: &str, label: &str) -> Self {
        match self.entity_cursor.locate(&self.text, text) {
            Some((start, end)) => self.entities.push(EntitySpan {
                text: text.to_string(),
                label: label.to_string(),
                start,
                end,
            }),
            None => self.fail(format!("entity '{}' not found in text", text)),
        }
        self
    }

    /// Mark the next occurrence of `text` as a noun chunk
    pub fn noun_chunk(mut self, text: &str) -> Self {
        match self.chunk_cursor.locate(&self.text, text) {
            Some(span) => self.chunks.push(span),
            None => self.fail(format!("noun chunk '{}' not found in text", text)),
        }
        self
    }

    /// Finish the document
    pub fn build(self) -> Result<Document, ParserError> {
        let builder = self.end_sentence();
        if let Some(message) = builder.error {
            return Err(ParserError::InvalidResponse(message));
        }

        let mut doc = Document {
            text: builder.text,
            sentences: Vec::with_capacity(builder.sentences.len()),
            entities: builder.entities,
            noun_chunks: Vec::new(),
        };

        for tokens in builder.sentences {
            if let Some(bad) = tokens.iter().find(|t| t.head >= tokens.len()) {
                return Err(ParserError::InvalidResponse(format!(
                    "token '{}' has head {} outside its sentence",
                    bad.text, bad.head
                )));
            }
            let start = tokens.first().map(|t| t.start).unwrap_or(0);
            let end = tokens.last().map(|t| t.end).unwrap_or(0);
            let text = doc.slice_chars(start, end);
            doc.sentences.push(Sentence {
                text,
                start,
                end,
                tokens,
            });
        }

        for (start, end) in builder.chunks {
            let token_count = doc
                .tokens()
                .filter(|t| t.start >= start && t.end <= end)
                .count();
            let text = doc.slice_chars(start, end);
            doc.noun_chunks.push(NounChunk {
                text,
                start,
                end,
                token_count,
            });
        }

        Ok(doc)
    }

    fn fail(&mut self, message: String) {
        if self.error.is_none() {
            self.error = Some(message);
        }
    }
}
