//! Boundary with the CCG semantic parser.
//!
//! The parser, its supertagger and its logical-form language live outside
//! this crate. This module only fixes the shapes that cross the boundary:
//!
//! ```text
//!   MentionTaggedSentence ──► SentenceParser ──► Option<CcgParse>
//!   (words, POS, mentions)                        │
//!                                                 ▼
//!                                 SpannedExpression { span, LogicalForm }
//!                                                 │
//!                                                 ▼
//!                                 entailed_relation_instances()
//! ```
//!
//! Index conventions at this boundary differ from the host document model;
//! see [`crate::span`].

pub mod supertagging;

use crate::span::{ExpressionSpan, MentionSpan};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

pub use supertagging::SupertaggingParser;

/// A binary relation applied to two mentions, e.g. `locatedIn(Paris, France)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MentionRelationInstance {
    /// Relation predicate name.
    pub relation: String,
    /// First argument mention.
    pub first: String,
    /// Second argument mention.
    pub second: String,
}

impl MentionRelationInstance {
    /// Create a relation instance.
    #[must_use]
    pub fn new(
        relation: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self {
            relation: relation.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}

impl fmt::Display for MentionRelationInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.relation, self.first, self.second)
    }
}

/// A logical-form expression produced by the parser.
///
/// `Display` is the textual rendering emitted as the annotation value.
pub trait LogicalForm: fmt::Display {
    /// Relation instances entailed by this expression.
    fn entailed_relation_instances(&self) -> BTreeSet<MentionRelationInstance>;
}

/// A logical form paired with the parser span it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpannedExpression<E> {
    /// Span in parser coordinates (0-based, inclusive end).
    pub span: ExpressionSpan,
    /// The expression.
    pub expression: E,
}

impl<E> SpannedExpression<E> {
    /// Pair an expression with the inclusive parser span `[start, end]`.
    #[must_use]
    pub fn new(start: usize, end: usize, expression: E) -> Self {
        Self {
            span: ExpressionSpan::new(start, end),
            expression,
        }
    }
}

/// A successful parse.
pub trait CcgParse {
    /// Expression type carried by the parse.
    type Expression: LogicalForm;

    /// Spanned logical forms in the parser's enumeration order.
    ///
    /// `include_subspans` is forwarded untouched; its exact reading belongs
    /// to the parser.
    fn spanned_logical_forms(
        &self,
        include_subspans: bool,
    ) -> Vec<SpannedExpression<Self::Expression>>;
}

/// A noun phrase the parser should treat as an entity of the given types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypedMention {
    /// Mention surface: the span's tokens joined with single spaces.
    pub text: String,
    /// Type labels, e.g. `{"concept:city"}`.
    pub categories: BTreeSet<String>,
    /// Span in parser coordinates (1-based, inclusive end).
    pub span: MentionSpan,
}

impl TypedMention {
    /// Create a typed mention.
    #[must_use]
    pub fn new(text: impl Into<String>, categories: BTreeSet<String>, span: MentionSpan) -> Self {
        Self {
            text: text.into(),
            categories,
            span,
        }
    }
}

/// A candidate CCG category for one token with its tagger probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedSupertag {
    /// Syntactic category, e.g. `(S\NP)/NP`.
    pub category: String,
    /// Tagger probability.
    pub probability: f64,
}

impl WeightedSupertag {
    /// Create a weighted supertag.
    #[must_use]
    pub fn new(category: impl Into<String>, probability: f64) -> Self {
        Self {
            category: category.into(),
            probability,
        }
    }
}

/// Words and POS tags, optionally with per-token supertags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupertaggedSentence {
    /// Token surfaces.
    pub words: Vec<String>,
    /// POS-tag names, one per token.
    pub pos_tags: Vec<String>,
    /// Per-token supertags, `None` while unobserved.
    pub supertags: Option<Vec<Vec<WeightedSupertag>>>,
}

impl SupertaggedSentence {
    /// A sentence whose supertags have not been assigned yet.
    #[must_use]
    pub fn with_unobserved_supertags(words: Vec<String>, pos_tags: Vec<String>) -> Self {
        Self {
            words,
            pos_tags,
            supertags: None,
        }
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the sentence has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Parser input: a (possibly supertagged) sentence plus typed mentions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentionTaggedSentence {
    /// Words, POS tags and supertags.
    pub sentence: SupertaggedSentence,
    /// Typed mentions in parser coordinates.
    pub mentions: Vec<TypedMention>,
}

impl MentionTaggedSentence {
    /// Create a mention-tagged sentence.
    #[must_use]
    pub fn new(sentence: SupertaggedSentence, mentions: Vec<TypedMention>) -> Self {
        Self { sentence, mentions }
    }

    /// Copy of this sentence with supertags filled in.
    #[must_use]
    pub fn with_supertags(&self, supertags: Vec<Vec<WeightedSupertag>>) -> Self {
        Self {
            sentence: SupertaggedSentence {
                supertags: Some(supertags),
                ..self.sentence.clone()
            },
            mentions: self.mentions.clone(),
        }
    }
}

/// Search limits for a single chart-parser call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartBudget {
    /// Beam size; `None` leaves the parser's default.
    pub beam_size: Option<usize>,
    /// Wall-clock limit; `None` is unbounded.
    pub max_parse_time: Option<Duration>,
    /// Maximum number of chart entries.
    pub max_chart_size: usize,
}

impl Default for ChartBudget {
    fn default() -> Self {
        Self {
            beam_size: None,
            max_parse_time: None,
            max_chart_size: usize::MAX,
        }
    }
}

/// Assigns candidate CCG categories to tokens.
pub trait Supertagger {
    /// Per-token supertags whose probability is at least `threshold` times
    /// the best category's probability for that token.
    fn multitag(
        &self,
        sentence: &SupertaggedSentence,
        threshold: f64,
    ) -> Result<Vec<Vec<WeightedSupertag>>>;
}

/// A mention-aware CCG chart parser over supertagged input.
pub trait MentionCcgParser {
    /// Parse type produced.
    type Parse: CcgParse;

    /// Best parse within `budget`, or `Ok(None)` if there is none.
    fn parse(
        &self,
        sentence: &MentionTaggedSentence,
        budget: &ChartBudget,
    ) -> Result<Option<Self::Parse>>;
}

/// What the annotator calls: parse one sentence whose supertags are unobserved.
pub trait SentenceParser {
    /// Parse type produced.
    type Parse: CcgParse;

    /// Parse `sentence`; `Ok(None)` means no parse was found.
    fn parse_sentence(&self, sentence: &MentionTaggedSentence) -> Result<Option<Self::Parse>>;
}
