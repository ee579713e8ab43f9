//! # semparse
//!
//! Logical-form annotation for pre-tokenized documents.
//!
//! Given a document with POS tags and noun-phrase category labels, the
//! [`SemparseAnnotator`] runs a supertagging CCG semantic parser over each
//! sentence and emits `(token span, logical form, confidence)` for every
//! parsed sub-expression that entails at least one binary relation.
//!
//! ```text
//! ┌──────────────┐   ┌───────────┐   ┌──────────┐   ┌───────────────┐
//! │ Document     │──►│ projector │──►│  runner  │──►│    filter     │──► annotations
//! │ tokens, POS, │   │ mentions  │   │ composite│   │ relation-     │
//! │ categories   │   │ (1-based) │   │ parser   │   │ bearing only  │
//! └──────────────┘   └───────────┘   └──────────┘   └───────────────┘
//! ```
//!
//! The parser, supertagger and logical-form language are external; this
//! crate consumes them through the traits in [`parser`].
//!
//! ## Quick Start
//!
//! ```rust
//! use semparse::mock::{MockExpression, MockParse, MockParser};
//! use semparse::prelude::*;
//!
//! let parse = MockParse::new().with_expression(
//!     0,
//!     3,
//!     MockExpression::new("locatedIn(Paris,France)")
//!         .with_relation("locatedIn", "Paris", "France"),
//! );
//! let annotator = SemparseAnnotator::new(MockParser::new().with_default(parse));
//!
//! let doc = Document::builder("example")
//!     .tagged_sentence(&["Paris", "is", "in", "France"], &["NNP", "VBZ", "IN", "NNP"])?
//!     .category(0, 0, 1, "city")?
//!     .category(0, 3, 4, "country")?
//!     .build();
//!
//! let annotations = annotator.annotate(&doc);
//! assert_eq!(annotations.len(), 1);
//! assert_eq!(annotations[0].span, TokenSpan::new(0, 0, 4));
//! # Ok::<(), semparse_core::Error>(())
//! ```
//!
//! ## Loading Pre-trained Models
//!
//! ```rust,ignore
//! use semparse::{SemparseAnnotator, SupertaggingParser};
//!
//! type Annotator = SemparseAnnotator<SupertaggingParser<MyParser, MyTagger>>;
//!
//! let annotator =
//!     Annotator::from_serialized_models("models/parser.ser", "models/supertagger.ser")?;
//! ```

#![warn(missing_docs)]

mod annotator;
pub mod config;
mod error;
pub mod filter;
pub mod loader;
pub mod mock;
pub mod parser;
pub mod projector;
pub mod runner;
pub mod span;

pub use annotator::{SemparseAnnotator, ANNOTATOR_NAME, LOGICAL_FORM};
pub use config::{
    DecodingConfig, ModelPaths, SemparseConfig, DEFAULT_MULTITAG_THRESHOLDS,
    DEFAULT_PARSER_MODEL_PATH, DEFAULT_SUPERTAGGER_MODEL_PATH,
};
pub use error::{Error, Result};
pub use parser::{
    CcgParse, ChartBudget, LogicalForm, MentionCcgParser, MentionRelationInstance,
    MentionTaggedSentence, SentenceParser, SpannedExpression, SupertaggedSentence, Supertagger,
    SupertaggingParser, TypedMention, WeightedSupertag,
};
pub use runner::ParseOutcome;
pub use span::{ExpressionSpan, MentionSpan};

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    pub use crate::parser::{CcgParse, LogicalForm, SentenceParser};
    pub use crate::{DecodingConfig, Error, Result, SemparseAnnotator, LOGICAL_FORM};
    pub use semparse_core::{
        Confidence, Document, PosTag, Sentence, SpanAnnotation, TokenSpan, TokenSpanAnnotator,
    };
}
