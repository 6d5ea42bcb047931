//! Summary scaffold construction

use crate::relations::is_start_verb;
use sift_domain::{Document, SummaryScaffold};

/// Build a summary scaffold from a parsed document
///
/// Topics are multi-token noun chunks, deduplicated in first-occurrence order
/// and capped at `max_topics`.
pub fn build_scaffold(doc: &Document, max_topics: usize) -> SummaryScaffold {
    let mut scaffold = SummaryScaffold::default();

    for entity in doc.entities() {
        scaffold
            .entities
            .entry(entity.label.clone())
            .or_default()
            .push(entity.text.clone());
    }

    for sentence in doc.sentences() {
        for (index, token) in sentence.tokens.iter().enumerate() {
            if is_start_verb(sentence, index) && !scaffold.main_actions.contains(&token.lemma) {
                scaffold.main_actions.push(token.lemma.clone());
            }
        }
    }

    for chunk in doc.noun_chunks() {
        if scaffold.topics.len() >= max_topics {
            break;
        }
        if chunk.token_count > 1 && !scaffold.topics.contains(&chunk.text) {
            scaffold.topics.push(chunk.text.clone());
        }
    }

    scaffold
}
