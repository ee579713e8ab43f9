//! Annotation types and the span-annotator contract.
//!
//! An annotator declares what it [`produces`](TokenSpanAnnotator::produces)
//! and what it [`requires`](TokenSpanAnnotator::requires) as
//! [`AnnotationType`]s, so a pipeline can order annotators and refuse to run
//! one on a document that lacks its inputs.

use crate::confidence::Confidence;
use crate::document::{Document, TokenSpan};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity an annotation attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationTarget {
    /// Whole document.
    Document,
    /// Whole sentence.
    Sentence,
    /// Arbitrary token span within a sentence.
    TokenSpan,
    /// Single token.
    Token,
}

/// Payload carried by an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayloadType {
    /// Free-form string.
    String,
    /// Part-of-speech tag.
    PosTag,
}

/// A named annotation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AnnotationType {
    /// Stable identifier.
    pub name: &'static str,
    /// Payload type.
    pub payload: PayloadType,
    /// Target granularity.
    pub target: AnnotationTarget,
}

impl AnnotationType {
    /// Declare an annotation type.
    #[must_use]
    pub const fn new(name: &'static str, payload: PayloadType, target: AnnotationTarget) -> Self {
        Self {
            name,
            payload,
            target,
        }
    }
}

impl fmt::Display for AnnotationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Per-token part-of-speech tags.
pub const POS: AnnotationType =
    AnnotationType::new("pos", PayloadType::PosTag, AnnotationTarget::Token);

/// Knowledge-base category labels on noun-phrase spans.
pub const NELL_CATEGORY: AnnotationType =
    AnnotationType::new("nell-category", PayloadType::String, AnnotationTarget::TokenSpan);

/// One annotation emitted by a span annotator: `(span, value, confidence)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanAnnotation<T> {
    /// Annotated span, in document coordinates.
    pub span: TokenSpan,
    /// Annotation payload.
    pub value: T,
    /// Confidence in [0, 1].
    pub confidence: Confidence,
}

impl<T> SpanAnnotation<T> {
    /// Create a span annotation.
    #[must_use]
    pub fn new(span: TokenSpan, value: T, confidence: Confidence) -> Self {
        Self {
            span,
            value,
            confidence,
        }
    }
}

/// An annotator that labels token spans with values of type `T`.
pub trait TokenSpanAnnotator<T> {
    /// Annotator name.
    fn name(&self) -> &str;

    /// Annotation type this annotator emits.
    fn produces(&self) -> AnnotationType;

    /// Annotation types that must be present on input documents.
    fn requires(&self) -> &[AnnotationType];

    /// Whether emitted confidences carry information.
    fn measures_confidence(&self) -> bool;

    /// Annotate a document.
    fn annotate(&self, document: &Document) -> Vec<SpanAnnotation<T>>;
}
