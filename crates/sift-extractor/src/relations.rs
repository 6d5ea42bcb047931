//! Subject-verb-object extraction over dependency trees
//!
//! Traversal starts at every verb that is a sentence root or a conjunct of
//! one. From each start verb it walks clausal complements (`xcomp`, `ccomp`)
//! with an explicit worklist, carrying negation downward: once a verb is
//! negated, everything it governs is negated too and reports the same marker.
//!
//! Relationships come out in depth-first pre-order: start verbs in token
//! order, and under each verb its complements in token order.

use sift_domain::{ClauseType, Dep, Document, Pos, Relationship, Sentence, Token, UNKNOWN};

/// Lemmas that negate the verb they modify as an adverb
const NEGATION_LEMMAS: [&str; 9] = [
    "not", "no", "never", "neither", "nor", "none", "nobody", "nothing", "nowhere",
];

/// State handed down from a governing verb
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Sentence-local index of the verb to visit
    pub index: usize,

    /// Whether an ancestor was negated
    pub negated: bool,

    /// The ancestor's negation marker
    pub marker: Option<String>,

    /// Clause type of the verb to visit
    pub clause_type: ClauseType,
}

impl Frame {
    /// Frame for a start verb
    pub fn root(index: usize) -> Self {
        Self {
            index,
            negated: false,
            marker: None,
            clause_type: ClauseType::Root,
        }
    }
}

/// Extract relationships from every sentence of a document
pub fn extract_relationships(doc: &Document) -> Vec<Relationship> {
    doc.sentences().iter().flat_map(extract_from_sentence).collect()
}

/// Extract relationships from one sentence
pub fn extract_from_sentence(sentence: &Sentence) -> Vec<Relationship> {
    (0..sentence.tokens.len())
        .filter(|&index| is_start_verb(sentence, index))
        .flat_map(|index| walk(sentence, Frame::root(index)))
        .collect()
}

/// Whether a token is a root verb or a conjunct chained to the root
pub fn is_start_verb(sentence: &Sentence, index: usize) -> bool {
    match sentence.token(index) {
        Some(token) if token.pos == Pos::Verb => reaches_root(sentence, index),
        _ => false,
    }
}

fn reaches_root(sentence: &Sentence, index: usize) -> bool {
    let mut current = index;
    // A well-formed chain is never longer than the sentence
    for _ in 0..=sentence.tokens.len() {
        let Some(token) = sentence.token(current) else {
            return false;
        };
        match token.dep {
            Dep::Root => return true,
            Dep::Conj if token.head != current => current = token.head,
            _ => return false,
        }
    }
    false
}

/// Walk the complement tree under one verb
///
/// Each verb is visited at most once, so malformed parses with head cycles
/// terminate.
pub fn walk(sentence: &Sentence, start: Frame) -> Vec<Relationship> {
    let mut relationships = Vec::new();
    let mut visited = vec![false; sentence.tokens.len()];
    let mut stack = vec![start];

    while let Some(frame) = stack.pop() {
        match visited.get_mut(frame.index) {
            Some(seen) if !*seen => *seen = true,
            _ => continue,
        }
        let Some(verb) = sentence.token(frame.index) else {
            continue;
        };

        let mut subject = None;
        let mut object = None;
        let mut local_marker = None;
        let mut particles = Vec::new();
        let mut complements = Vec::new();

        for child_index in sentence.children(frame.index) {
            let child = &sentence.tokens[child_index];
            // Later subject and object children replace earlier ones
            if child.dep.is_subject() {
                subject = Some(child.text.clone());
            }
            if child.dep.is_object() {
                object = Some(child.text.clone());
            }
            if local_marker.is_none() && is_negation(child) {
                local_marker = Some(child.text.clone());
            }
            if child.is_particle {
                particles.push(child.lemma.clone());
            }
            if child.dep.is_clausal_complement() {
                complements.push(child_index);
            }
        }

        let negated = frame.negated || local_marker.is_some();
        let marker = local_marker.or(frame.marker);

        if subject.is_some() || object.is_some() {
            relationships.push(Relationship {
                subject: subject.unwrap_or_else(|| UNKNOWN.to_string()),
                verb: verb_label(verb, &particles),
                object: object.unwrap_or_else(|| UNKNOWN.to_string()),
                is_negated: negated,
                negation_marker: if negated { marker.clone() } else { None },
                has_particles: !particles.is_empty(),
                clause_type: frame.clause_type,
            });
        }

        let mut next = Vec::new();
        for index in complements {
            let child = &sentence.tokens[index];
            match child.pos {
                Pos::Verb => next.push(index),
                // Modal-headed complements: the content verb sits one level down
                Pos::Aux => next.extend(sentence.children(index).filter(|&grandchild| {
                    let token = &sentence.tokens[grandchild];
                    token.pos == Pos::Verb && token.dep.is_clausal_complement()
                })),
                _ => {}
            }
        }

        // Reverse so the first complement is popped first
        stack.extend(next.into_iter().rev().map(|index| Frame {
            index,
            negated,
            marker: marker.clone(),
            clause_type: clause_type_of(&sentence.tokens[index].dep),
        }));
    }

    relationships
}

fn is_negation(token: &Token) -> bool {
    token.dep == Dep::Neg
        || (token.dep == Dep::Advmod
            && NEGATION_LEMMAS.contains(&token.lemma.to_lowercase().as_str()))
}

fn verb_label(verb: &Token, particles: &[String]) -> String {
    if particles.is_empty() {
        verb.lemma.clone()
    } else {
        format!("{}_{}", verb.lemma, particles.join("_"))
    }
}

fn clause_type_of(dep: &Dep) -> ClauseType {
    match dep {
        Dep::Xcomp => ClauseType::Xcomp,
        Dep::Ccomp => ClauseType::Ccomp,
        _ => ClauseType::Root,
    }
}
