//! Deterministic stand-ins for the parser-side collaborators.
//!
//! Provided so tests (here and downstream) can drive the annotator without
//! trained models:
//!
//! - [`MockParser`]: scripted [`SentenceParser`] that records its inputs
//! - [`MockParse`] / [`MockExpression`]: hand-built parse results
//! - [`MockSupertagger`] / [`MockCcgParser`]: serializable collaborators for
//!   exercising [`SupertaggingParser`](crate::SupertaggingParser) and the
//!   model loader
//!
//! # Example
//!
//! ```rust
//! use semparse::mock::{MockExpression, MockParse, MockParser};
//! use semparse::SemparseAnnotator;
//! use semparse_core::{Document, TokenSpanAnnotator};
//!
//! let parse = MockParse::new().with_expression(
//!     0,
//!     3,
//!     MockExpression::new("locatedIn(Paris,France)")
//!         .with_relation("locatedIn", "Paris", "France"),
//! );
//! let annotator = SemparseAnnotator::new(MockParser::new().with_default(parse));
//!
//! let doc = Document::builder("d")
//!     .tagged_sentence(&["Paris", "is", "in", "France"], &["NNP", "VBZ", "IN", "NNP"])
//!     .unwrap()
//!     .build();
//! let annotations = annotator.annotate(&doc);
//! assert_eq!(annotations[0].value, "locatedIn(Paris,France)");
//! ```

use crate::parser::{
    CcgParse, ChartBudget, LogicalForm, MentionCcgParser, MentionRelationInstance,
    MentionTaggedSentence, SentenceParser, SpannedExpression, SupertaggedSentence, Supertagger,
    WeightedSupertag,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A logical form with a fixed rendering and fixed entailed relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockExpression {
    text: String,
    relations: BTreeSet<MentionRelationInstance>,
}

impl MockExpression {
    /// An expression rendering as `text` that entails nothing.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            relations: BTreeSet::new(),
        }
    }

    /// Add an entailed relation instance.
    #[must_use]
    pub fn with_relation(
        mut self,
        relation: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        self.relations
            .insert(MentionRelationInstance::new(relation, first, second));
        self
    }
}

impl fmt::Display for MockExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl LogicalForm for MockExpression {
    fn entailed_relation_instances(&self) -> BTreeSet<MentionRelationInstance> {
        self.relations.clone()
    }
}

/// A parse holding a fixed list of spanned expressions.
///
/// With `include_subspans == false` only the expressions over the widest
/// span are returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MockParse {
    expressions: Vec<SpannedExpression<MockExpression>>,
}

impl MockParse {
    /// An empty parse.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expression over the inclusive parser span `[start, end]`.
    #[must_use]
    pub fn with_expression(mut self, start: usize, end: usize, expression: MockExpression) -> Self {
        self.expressions
            .push(SpannedExpression::new(start, end, expression));
        self
    }
}

impl CcgParse for MockParse {
    type Expression = MockExpression;

    fn spanned_logical_forms(
        &self,
        include_subspans: bool,
    ) -> Vec<SpannedExpression<MockExpression>> {
        if include_subspans {
            return self.expressions.clone();
        }
        let widest = self
            .expressions
            .iter()
            .map(|e| e.span.end.saturating_sub(e.span.start))
            .max();
        self.expressions
            .iter()
            .filter(|e| Some(e.span.end.saturating_sub(e.span.start)) == widest)
            .cloned()
            .collect()
    }
}

/// What [`MockParser`] does for a sentence.
#[derive(Debug, Clone, PartialEq)]
pub enum MockResponse {
    /// Return this parse.
    Parse(MockParse),
    /// Return no parse.
    NoParse,
    /// Fail with [`Error::Inference`].
    Fail(String),
}

/// Scripted sentence parser keyed by token sequence.
///
/// Sentences without a script get the default response ([`MockResponse::NoParse`]
/// unless changed). Every input is recorded and can be read back with
/// [`MockParser::received`].
#[derive(Debug)]
pub struct MockParser {
    scripted: HashMap<Vec<String>, MockResponse>,
    default: MockResponse,
    received: Mutex<Vec<MentionTaggedSentence>>,
}

impl Default for MockParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MockParser {
    /// A parser that finds no parse for anything.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scripted: HashMap::new(),
            default: MockResponse::NoParse,
            received: Mutex::new(Vec::new()),
        }
    }

    /// Return `parse` for every unscripted sentence.
    #[must_use]
    pub fn with_default(mut self, parse: MockParse) -> Self {
        self.default = MockResponse::Parse(parse);
        self
    }

    /// Script the response for the sentence with exactly these tokens.
    #[must_use]
    pub fn on_sentence(mut self, tokens: &[&str], response: MockResponse) -> Self {
        self.scripted.insert(
            tokens.iter().map(|t| (*t).to_string()).collect(),
            response,
        );
        self
    }

    /// Inputs received so far, in call order.
    #[must_use]
    pub fn received(&self) -> Vec<MentionTaggedSentence> {
        self.received
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of calls so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.received.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl SentenceParser for MockParser {
    type Parse = MockParse;

    fn parse_sentence(&self, sentence: &MentionTaggedSentence) -> Result<Option<MockParse>> {
        self.received
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(sentence.clone());
        let response = self
            .scripted
            .get(&sentence.sentence.words)
            .unwrap_or(&self.default);
        match response {
            MockResponse::Parse(parse) => Ok(Some(parse.clone())),
            MockResponse::NoParse => Ok(None),
            MockResponse::Fail(msg) => Err(Error::inference(msg.clone())),
        }
    }
}

/// Lexicon-backed supertagger.
///
/// Keeps, per token, every category whose probability is at least
/// `threshold` times that token's best probability. Unknown words get no
/// categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MockSupertagger {
    lexicon: HashMap<String, Vec<WeightedSupertag>>,
}

impl MockSupertagger {
    /// An empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add lexicon entries for `word`.
    #[must_use]
    pub fn with_entry(mut self, word: impl Into<String>, tags: Vec<WeightedSupertag>) -> Self {
        self.lexicon.insert(word.into(), tags);
        self
    }
}

impl Supertagger for MockSupertagger {
    fn multitag(
        &self,
        sentence: &SupertaggedSentence,
        threshold: f64,
    ) -> Result<Vec<Vec<WeightedSupertag>>> {
        Ok(sentence
            .words
            .iter()
            .map(|word| {
                let entries = self.lexicon.get(word).map(Vec::as_slice).unwrap_or(&[]);
                let best = entries
                    .iter()
                    .map(|t| t.probability)
                    .fold(0.0_f64, f64::max);
                entries
                    .iter()
                    .filter(|t| t.probability >= best * threshold)
                    .cloned()
                    .collect()
            })
            .collect())
    }
}

/// Chart parser that succeeds once every token has enough supertags.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MockCcgParser {
    parse: MockParse,
    #[serde(default)]
    min_tags_per_token: usize,
    #[serde(skip)]
    calls: AtomicUsize,
}

impl MockCcgParser {
    /// A parser returning `parse` whenever supertags are present.
    #[must_use]
    pub fn new(parse: MockParse) -> Self {
        Self {
            parse,
            min_tags_per_token: 0,
            calls: AtomicUsize::new(0),
        }
    }

    /// Only succeed when each token has at least `n` supertags.
    #[must_use]
    pub fn requiring_tags_per_token(mut self, n: usize) -> Self {
        self.min_tags_per_token = n;
        self
    }

    /// Number of parse calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl MentionCcgParser for MockCcgParser {
    type Parse = MockParse;

    fn parse(
        &self,
        sentence: &MentionTaggedSentence,
        _budget: &ChartBudget,
    ) -> Result<Option<MockParse>> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let supertags = sentence
            .sentence
            .supertags
            .as_ref()
            .ok_or_else(|| Error::inference("chart parser called without supertags"))?;
        if supertags.iter().all(|tags| tags.len() >= self.min_tags_per_token) {
            Ok(Some(self.parse.clone()))
        } else {
            Ok(None)
        }
    }
}
