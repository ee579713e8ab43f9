//! The `semparse` annotator.
//!
//! # Pipeline
//!
//! ```text
//! Document
//!   │  group category annotations by sentence
//!   ▼
//! for each sentence i (ascending):
//!   project ──► MentionTaggedSentence
//!   run     ──► Parsed(parse) | NoParse
//!   filter  ──► (span, logical form, 1.0) for relation-bearing expressions
//! ```
//!
//! Nothing is kept between sentences or between documents.
//!
//! # Thread safety
//!
//! `SemparseAnnotator<P>` is `Send`/`Sync` exactly when `P` is. Whether the
//! underlying parser tolerates concurrent calls is up to the parser.

use crate::config::{ModelPaths, SemparseConfig};
use crate::filter::relation_bearing_annotations;
use crate::parser::{MentionCcgParser, SentenceParser, Supertagger, SupertaggingParser};
use crate::projector::{project_sentence, SentenceCategories};
use crate::runner::{run_parser, ParseOutcome};
use crate::{DecodingConfig, Result};
use semparse_core::{
    AnnotationTarget, AnnotationType, Document, PayloadType, SpanAnnotation, TokenSpanAnnotator,
    NELL_CATEGORY, POS,
};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Logical-form strings over token spans.
pub const LOGICAL_FORM: AnnotationType = AnnotationType::new(
    "logical_form",
    PayloadType::String,
    AnnotationTarget::TokenSpan,
);

/// Annotator name.
pub const ANNOTATOR_NAME: &str = "semparse";

const REQUIRES: [AnnotationType; 2] = [NELL_CATEGORY, POS];

/// Attaches logical forms that entail relations to token spans.
///
/// # Example
///
/// ```rust,no_run
/// use semparse::mock::{MockCcgParser, MockSupertagger};
/// use semparse::{SemparseAnnotator, SupertaggingParser};
///
/// type Annotator = SemparseAnnotator<SupertaggingParser<MockCcgParser, MockSupertagger>>;
///
/// let annotator =
///     Annotator::from_serialized_models("models/parser.ser", "models/supertagger.ser")?;
/// # Ok::<(), semparse::Error>(())
/// ```
#[derive(Debug)]
pub struct SemparseAnnotator<P> {
    parser: P,
}

impl<P: SentenceParser> SemparseAnnotator<P> {
    /// Wrap an already-built parser.
    #[must_use]
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// The wrapped parser.
    #[must_use]
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Annotations for sentence `index` of `document`.
    fn annotate_sentence(
        &self,
        document: &Document,
        index: usize,
        categories: &SentenceCategories<'_>,
    ) -> Vec<SpanAnnotation<String>> {
        let projected = project_sentence(document, index, categories);
        log::debug!(
            "[semparse] Sentence {}: {} tokens, {} mentions",
            index,
            projected.sentence.len(),
            projected.mentions.len()
        );
        match run_parser(&self.parser, &projected) {
            ParseOutcome::Parsed(parse) => {
                let annotations =
                    relation_bearing_annotations(&parse, index, projected.sentence.len());
                log::debug!(
                    "[semparse] Sentence {}: {} relation-bearing logical forms",
                    index,
                    annotations.len()
                );
                annotations
            }
            ParseOutcome::NoParse => {
                log::debug!("[semparse] Sentence {}: no parse", index);
                Vec::new()
            }
        }
    }
}

impl<P, T> SemparseAnnotator<SupertaggingParser<P, T>>
where
    P: MentionCcgParser + DeserializeOwned,
    T: Supertagger + DeserializeOwned,
{
    /// Load both models with the default decoding settings.
    ///
    /// # Errors
    /// Returns [`crate::Error::ModelLoad`] if either artifact is missing,
    /// unreadable, or malformed.
    pub fn from_serialized_models(
        parser_path: impl AsRef<Path>,
        supertagger_path: impl AsRef<Path>,
    ) -> Result<Self> {
        SupertaggingParser::from_serialized_models(
            parser_path,
            supertagger_path,
            &DecodingConfig::default(),
        )
        .map(Self::new)
    }

    /// Load both models from the default locations.
    ///
    /// # Errors
    /// See [`Self::from_serialized_models`].
    pub fn from_default_models() -> Result<Self> {
        let paths = ModelPaths::default();
        Self::from_serialized_models(&paths.parser, &paths.supertagger)
    }

    /// Load models and decoding settings from a configuration.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidInput`] for invalid decoding settings
    /// and [`crate::Error::ModelLoad`] for unreadable artifacts.
    pub fn from_config(config: &SemparseConfig) -> Result<Self> {
        SupertaggingParser::from_serialized_models(
            &config.models.parser,
            &config.models.supertagger,
            &config.decoding,
        )
        .map(Self::new)
    }
}

impl<P: SentenceParser> TokenSpanAnnotator<String> for SemparseAnnotator<P> {
    fn name(&self) -> &str {
        ANNOTATOR_NAME
    }

    fn produces(&self) -> AnnotationType {
        LOGICAL_FORM
    }

    fn requires(&self) -> &[AnnotationType] {
        &REQUIRES
    }

    fn measures_confidence(&self) -> bool {
        true
    }

    fn annotate(&self, document: &Document) -> Vec<SpanAnnotation<String>> {
        let categories = SentenceCategories::group(document.category_annotations());
        (0..document.sentence_count())
            .flat_map(|index| self.annotate_sentence(document, index, &categories))
            .collect()
    }
}
