//! Composite parser: supertagger in front of a mention-aware chart parser.
//!
//! # Threshold fallback
//!
//! ```text
//! thresholds = [0.01, 0.001]
//!
//!   multitag(0.01)  ──► few categories/token ──► parse ──► Some ─► done
//!                                                   │
//!                                                  None
//!                                                   ▼
//!   multitag(0.001) ──► more categories/token ──► parse ──► Some ─► done
//!                                                   │
//!                                                  None ─► no parse
//! ```
//!
//! A tighter threshold keeps the chart small; the looser one is only paid
//! for when the tight one cannot cover the sentence.

use super::{ChartBudget, MentionCcgParser, MentionTaggedSentence, SentenceParser, Supertagger};
use crate::config::DecodingConfig;
use crate::loader::load_serialized;
use crate::Result;
use serde::de::DeserializeOwned;
use std::path::Path;

/// A supertagger and a chart parser with fixed decoding settings.
///
/// Immutable after construction. It is `Send`/`Sync` exactly when both
/// collaborators are.
#[derive(Debug, Clone)]
pub struct SupertaggingParser<P, T> {
    parser: P,
    supertagger: T,
    thresholds: Vec<f64>,
    budget: ChartBudget,
}

impl<P, T> SupertaggingParser<P, T>
where
    P: MentionCcgParser,
    T: Supertagger,
{
    /// Assemble a composite parser.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidInput`] if `config` fails validation.
    pub fn new(parser: P, supertagger: T, config: &DecodingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            parser,
            supertagger,
            thresholds: config.multitag_thresholds.clone(),
            budget: config.chart_budget(),
        })
    }

    /// Thresholds tried in order.
    #[must_use]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Budget passed to every chart-parser call.
    #[must_use]
    pub fn budget(&self) -> &ChartBudget {
        &self.budget
    }

    /// The wrapped chart parser.
    #[must_use]
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// The wrapped supertagger.
    #[must_use]
    pub fn supertagger(&self) -> &T {
        &self.supertagger
    }
}

impl<P, T> SupertaggingParser<P, T>
where
    P: MentionCcgParser + DeserializeOwned,
    T: Supertagger + DeserializeOwned,
{
    /// Load both collaborators from serialized artifacts.
    ///
    /// # Errors
    /// Returns [`crate::Error::ModelLoad`] if either artifact cannot be read,
    /// and [`crate::Error::InvalidInput`] if `config` is invalid.
    pub fn from_serialized_models(
        parser_path: impl AsRef<Path>,
        supertagger_path: impl AsRef<Path>,
        config: &DecodingConfig,
    ) -> Result<Self> {
        config.validate()?;
        let supertagger: T = load_serialized(supertagger_path.as_ref())?;
        let parser: P = load_serialized(parser_path.as_ref())?;
        log::info!(
            "[semparse] Loaded parser from {} and supertagger from {} (thresholds {:?})",
            parser_path.as_ref().display(),
            supertagger_path.as_ref().display(),
            config.multitag_thresholds
        );
        Self::new(parser, supertagger, config)
    }
}

impl<P, T> SentenceParser for SupertaggingParser<P, T>
where
    P: MentionCcgParser,
    T: Supertagger,
{
    type Parse = P::Parse;

    fn parse_sentence(&self, sentence: &MentionTaggedSentence) -> Result<Option<Self::Parse>> {
        for &threshold in &self.thresholds {
            let supertags = self.supertagger.multitag(&sentence.sentence, threshold)?;
            let tagged = sentence.with_supertags(supertags);
            if let Some(parse) = self.parser.parse(&tagged, &self.budget)? {
                return Ok(Some(parse));
            }
            log::debug!("[semparse] No parse at multitag threshold {}", threshold);
        }
        Ok(None)
    }
}
