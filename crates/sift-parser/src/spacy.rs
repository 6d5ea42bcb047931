//! spaCy JSON wire format
//!
//! Parse services built on spaCy return `Doc.to_json()`, optionally extended
//! with a `noun_chunks` array. Offsets in that layout are character offsets and
//! `head` is a document-wide token id; the conversion below rebases heads onto
//! sentence-local indices.

use crate::ParserError;
use serde::{Deserialize, Serialize};
use sift_domain::{Dep, Document, EntitySpan, NounChunk, Pos, Sentence, Token};

/// A character span with an optional label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacySpan {
    /// Start character offset
    pub start: usize,

    /// End character offset (exclusive)
    pub end: usize,

    /// Entity label (only present on `ents`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// One token row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacyToken {
    /// Document-wide token id
    pub id: usize,

    /// Start character offset
    pub start: usize,

    /// End character offset (exclusive)
    pub end: usize,

    /// Universal part-of-speech tag
    pub pos: String,

    /// Lemma
    #[serde(default)]
    pub lemma: String,

    /// Dependency label
    pub dep: String,

    /// Document-wide id of the head token
    pub head: usize,
}

/// `Doc.to_json()` plus noun chunks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacyDoc {
    /// Source text
    pub text: String,

    /// Named entities
    #[serde(default)]
    pub ents: Vec<SpacySpan>,

    /// Sentence spans
    #[serde(default)]
    pub sents: Vec<SpacySpan>,

    /// Tokens in document order
    pub tokens: Vec<SpacyToken>,

    /// Noun chunk spans
    #[serde(default)]
    pub noun_chunks: Vec<SpacySpan>,
}

impl SpacyDoc {
    /// Parse the wire JSON
    pub fn from_json(json: &str) -> Result<Self, ParserError> {
        serde_json::from_str(json)
            .map_err(|e| ParserError::InvalidResponse(format!("JSON parse error: {}", e)))
    }

    /// Convert into the uniform document shape
    pub fn into_document(self) -> Result<Document, ParserError> {
        let chars: Vec<char> = self.text.chars().collect();
        let slice = |start: usize, end: usize| -> Result<String, ParserError> {
            if start > end || end > chars.len() {
                return Err(ParserError::InvalidResponse(format!(
                    "span {}..{} outside text of {} chars",
                    start,
                    end,
                    chars.len()
                )));
            }
            Ok(chars[start..end].iter().collect())
        };

        let mut tokens = self.tokens;
        tokens.sort_by_key(|t| t.id);
        if let Some(bad) = tokens.iter().find(|t| t.start > t.end || t.end > chars.len()) {
            return Err(ParserError::InvalidResponse(format!(
                "token {} span {}..{} outside text of {} chars",
                bad.id,
                bad.start,
                bad.end,
                chars.len()
            )));
        }

        // No sentence spans means the whole text is one sentence
        let sents = if self.sents.is_empty() {
            vec![SpacySpan {
                start: 0,
                end: chars.len(),
                label: None,
            }]
        } else {
            self.sents
        };

        let mut sentences = Vec::with_capacity(sents.len());
        for sent in &sents {
            let rows: Vec<&SpacyToken> = tokens
                .iter()
                .filter(|t| t.start >= sent.start && t.end <= sent.end)
                .collect();
            let first_id = rows.first().map(|t| t.id).unwrap_or(0);

            let mut sentence_tokens = Vec::with_capacity(rows.len());
            for (local, row) in rows.iter().enumerate() {
                let head = row
                    .head
                    .checked_sub(first_id)
                    .filter(|h| *h < rows.len())
                    .unwrap_or(local);
                let dep = Dep::parse(&row.dep);
                sentence_tokens.push(Token {
                    text: slice(row.start, row.end)?,
                    lemma: row.lemma.clone(),
                    pos: Pos::parse(&row.pos),
                    is_particle: dep == Dep::Prt,
                    dep,
                    head,
                    start: row.start,
                    end: row.end,
                });
            }

            sentences.push(Sentence {
                text: slice(sent.start, sent.end)?,
                start: sent.start,
                end: sent.end,
                tokens: sentence_tokens,
            });
        }

        let entities = self
            .ents
            .iter()
            .map(|ent| {
                Ok(EntitySpan {
                    text: slice(ent.start, ent.end)?,
                    label: ent.label.clone().unwrap_or_default(),
                    start: ent.start,
                    end: ent.end,
                })
            })
            .collect::<Result<Vec<_>, ParserError>>()?;

        let noun_chunks = self
            .noun_chunks
            .iter()
            .map(|chunk| {
                Ok(NounChunk {
                    text: slice(chunk.start, chunk.end)?,
                    start: chunk.start,
                    end: chunk.end,
                    token_count: tokens
                        .iter()
                        .filter(|t| t.start >= chunk.start && t.end <= chunk.end)
                        .count(),
                })
            })
            .collect::<Result<Vec<_>, ParserError>>()?;

        Ok(Document {
            text: self.text,
            sentences,
            entities,
            noun_chunks,
        })
    }
}

impl TryFrom<SpacyDoc> for Document {
    type Error = ParserError;

    fn try_from(doc: SpacyDoc) -> Result<Self, Self::Error> {
        doc.into_document()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS: &str = r#"{
        "text": "I love Paris. Do you?",
        "ents": [{"start": 7, "end": 12, "label": "GPE"}],
        "sents": [{"start": 0, "end": 13}, {"start": 14, "end": 21}],
        "tokens": [
            {"id": 0, "start": 0, "end": 1, "pos": "PRON", "lemma": "I", "dep": "nsubj", "head": 1},
            {"id": 1, "start": 2, "end": 6, "pos": "VERB", "lemma": "love", "dep": "ROOT", "head": 1},
            {"id": 2, "start": 7, "end": 12, "pos": "PROPN", "lemma": "Paris", "dep": "dobj", "head": 1},
            {"id": 3, "start": 12, "end": 13, "pos": "PUNCT", "lemma": ".", "dep": "punct", "head": 1},
            {"id": 4, "start": 14, "end": 16, "pos": "AUX", "lemma": "do", "dep": "ROOT", "head": 4},
            {"id": 5, "start": 17, "end": 20, "pos": "PRON", "lemma": "you", "dep": "nsubj", "head": 4},
            {"id": 6, "start": 20, "end": 21, "pos": "PUNCT", "lemma": "?", "dep": "punct", "head": 4}
        ],
        "noun_chunks": [{"start": 7, "end": 12}]
    }"#;

    #[test]
    fn test_convert_sentences_and_heads() {
        let doc = SpacyDoc::from_json(PARIS).unwrap().into_document().unwrap();

        assert_eq!(doc.sentences.len(), 2);
        assert_eq!(doc.sentences[0].text, "I love Paris.");
        assert_eq!(doc.sentences[1].text, "Do you?");

        // Second sentence heads are rebased to local indices
        let second = &doc.sentences[1];
        assert_eq!(second.tokens[1].head, 0);
        assert_eq!(second.tokens[0].dep, Dep::Root);
    }

    #[test]
    fn test_convert_entities_and_chunks() {
        let doc = Document::try_from(SpacyDoc::from_json(PARIS).unwrap()).unwrap();

        assert_eq!(doc.entities.len(), 1);
        assert_eq!(doc.entities[0].text, "Paris");
        assert_eq!(doc.entities[0].label, "GPE");
        assert_eq!(doc.noun_chunks[0].token_count, 1);
    }

    #[test]
    fn test_missing_sents_is_single_sentence() {
        let json = r#"{
            "text": "hello",
            "tokens": [{"id": 0, "start": 0, "end": 5, "pos": "INTJ", "dep": "ROOT", "head": 0}]
        }"#;
        let doc = SpacyDoc::from_json(json).unwrap().into_document().unwrap();
        assert_eq!(doc.sentences.len(), 1);
        assert_eq!(doc.sentences[0].tokens[0].text, "hello");
        assert_eq!(doc.sentences[0].tokens[0].lemma, "");
    }

    #[test]
    fn test_span_outside_text_is_error() {
        let json = r#"{
            "text": "hi",
            "tokens": [{"id": 0, "start": 0, "end": 9, "pos": "INTJ", "dep": "ROOT", "head": 0}]
        }"#;
        let result = SpacyDoc::from_json(json).unwrap().into_document();
        assert!(matches!(result, Err(ParserError::InvalidResponse(_))));
    }

    #[test]
    fn test_invalid_json() {
        assert!(SpacyDoc::from_json("not json").is_err());
    }
}
