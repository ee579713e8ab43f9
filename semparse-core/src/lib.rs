//! # semparse-core
//!
//! Host-side types shared by semparse annotators:
//!
//! - **Document model**: [`Document`], [`Sentence`], [`PosTag`], [`TokenSpan`],
//!   [`CategoryAnnotation`]
//! - **Annotation contract**: [`AnnotationType`], [`SpanAnnotation`],
//!   [`TokenSpanAnnotator`]
//! - **Scores**: [`Confidence`]
//!
//! The annotator crate depends on this one so that documents built by a host
//! pipeline and annotations read back by it share one set of types.

pub mod annotation;
pub mod confidence;
pub mod document;
pub mod error;

pub use annotation::{
    AnnotationTarget, AnnotationType, PayloadType, SpanAnnotation, TokenSpanAnnotator,
    NELL_CATEGORY, POS,
};
pub use confidence::{Confidence, ConfidenceError};
pub use document::{CategoryAnnotation, Document, DocumentBuilder, PosTag, Sentence, TokenSpan};
pub use error::{Error, Result};
