//! Token module - one word of a parsed sentence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Universal part-of-speech tag
///
/// Only the tags the extractor inspects get their own variant; anything else an
/// upstream tagger emits is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Pos {
    /// Main verb
    Verb,
    /// Auxiliary or modal verb
    Aux,
    /// Adverb
    Adv,
    /// Pronoun
    Pron,
    /// Proper noun
    Propn,
    /// Common noun
    Noun,
    /// Adjective
    Adj,
    /// Adposition
    Adp,
    /// Determiner
    Det,
    /// Particle
    Part,
    /// Punctuation
    Punct,
    /// Numeral
    Num,
    /// Coordinating conjunction
    Cconj,
    /// Subordinating conjunction
    Sconj,
    /// Interjection
    Intj,
    /// Any other tag, as emitted by the tagger
    Other(String),
}

impl Pos {
    /// Get the tag as a string
    pub fn as_str(&self) -> &str {
        match self {
            Pos::Verb => "VERB",
            Pos::Aux => "AUX",
            Pos::Adv => "ADV",
            Pos::Pron => "PRON",
            Pos::Propn => "PROPN",
            Pos::Noun => "NOUN",
            Pos::Adj => "ADJ",
            Pos::Adp => "ADP",
            Pos::Det => "DET",
            Pos::Part => "PART",
            Pos::Punct => "PUNCT",
            Pos::Num => "NUM",
            Pos::Cconj => "CCONJ",
            Pos::Sconj => "SCONJ",
            Pos::Intj => "INTJ",
            Pos::Other(tag) => tag,
        }
    }

    /// Parse a tag, case-insensitively
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "VERB" => Pos::Verb,
            "AUX" => Pos::Aux,
            "ADV" => Pos::Adv,
            "PRON" => Pos::Pron,
            "PROPN" => Pos::Propn,
            "NOUN" => Pos::Noun,
            "ADJ" => Pos::Adj,
            "ADP" => Pos::Adp,
            "DET" => Pos::Det,
            "PART" => Pos::Part,
            "PUNCT" => Pos::Punct,
            "NUM" => Pos::Num,
            "CCONJ" => Pos::Cconj,
            "SCONJ" => Pos::Sconj,
            "INTJ" => Pos::Intj,
            _ => Pos::Other(s.to_string()),
        }
    }
}

impl From<String> for Pos {
    fn from(s: String) -> Self {
        Pos::parse(&s)
    }
}

impl From<Pos> for String {
    fn from(pos: Pos) -> Self {
        pos.as_str().to_string()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dependency label on the edge from a token to its head
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Dep {
    /// Sentence root
    Root,
    /// Nominal subject
    Nsubj,
    /// Passive nominal subject
    NsubjPass,
    /// Direct object
    Dobj,
    /// Object (UD style)
    Obj,
    /// Object of a preposition
    Pobj,
    /// Negation modifier
    Neg,
    /// Adverbial modifier
    Advmod,
    /// Verb particle
    Prt,
    /// Open clausal complement (infinitival)
    Xcomp,
    /// Clausal complement (finite)
    Ccomp,
    /// Conjunct
    Conj,
    /// Auxiliary
    Aux,
    /// Any other label, as emitted by the parser
    Other(String),
}

impl Dep {
    /// Get the label as a string
    pub fn as_str(&self) -> &str {
        match self {
            Dep::Root => "ROOT",
            Dep::Nsubj => "nsubj",
            Dep::NsubjPass => "nsubjpass",
            Dep::Dobj => "dobj",
            Dep::Obj => "obj",
            Dep::Pobj => "pobj",
            Dep::Neg => "neg",
            Dep::Advmod => "advmod",
            Dep::Prt => "prt",
            Dep::Xcomp => "xcomp",
            Dep::Ccomp => "ccomp",
            Dep::Conj => "conj",
            Dep::Aux => "aux",
            Dep::Other(label) => label,
        }
    }

    /// Parse a label; `ROOT` is matched case-insensitively
    pub fn parse(s: &str) -> Self {
        match s {
            "nsubj" => Dep::Nsubj,
            "nsubjpass" => Dep::NsubjPass,
            "dobj" => Dep::Dobj,
            "obj" => Dep::Obj,
            "pobj" => Dep::Pobj,
            "neg" => Dep::Neg,
            "advmod" => Dep::Advmod,
            "prt" => Dep::Prt,
            "xcomp" => Dep::Xcomp,
            "ccomp" => Dep::Ccomp,
            "conj" => Dep::Conj,
            "aux" => Dep::Aux,
            _ if s.eq_ignore_ascii_case("root") => Dep::Root,
            _ => Dep::Other(s.to_string()),
        }
    }

    /// Whether this label marks the subject of its head
    pub fn is_subject(&self) -> bool {
        matches!(self, Dep::Nsubj | Dep::NsubjPass)
    }

    /// Whether this label marks an object of its head
    pub fn is_object(&self) -> bool {
        matches!(self, Dep::Dobj | Dep::Obj | Dep::Pobj)
    }

    /// Whether this label marks a clausal complement
    pub fn is_clausal_complement(&self) -> bool {
        matches!(self, Dep::Xcomp | Dep::Ccomp)
    }
}

impl From<String> for Dep {
    fn from(s: String) -> Self {
        Dep::parse(&s)
    }
}

impl From<Dep> for String {
    fn from(dep: Dep) -> Self {
        dep.as_str().to_string()
    }
}

impl fmt::Display for Dep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single token in the uniform parse shape
///
/// Offsets are character (not byte) offsets into the document text, half-open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text
    pub text: String,

    /// Lemma (base form)
    pub lemma: String,

    /// Part-of-speech tag
    pub pos: Pos,

    /// Dependency label on the edge to `head`
    pub dep: Dep,

    /// Sentence-local index of the head token (a root points to itself)
    pub head: usize,

    /// Whether this token is a verb particle ("up" in "meet up")
    pub is_particle: bool,

    /// Start character offset
    pub start: usize,

    /// End character offset (exclusive)
    pub end: usize,
}

impl Token {
    /// Lowercased surface text
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}
