//! Projection of one document sentence into parser input.
//!
//! Category annotations are grouped by sentence once per document
//! ([`SentenceCategories`]), then each sentence is projected independently
//! ([`project_sentence`]).
//!
//! Every category annotation becomes its own [`TypedMention`] with a single
//! `concept:`-prefixed category. Two labels on the same span yield two
//! mentions with identical surfaces and indices.

use crate::parser::{MentionTaggedSentence, SupertaggedSentence, TypedMention};
use crate::span::MentionSpan;
use semparse_core::{CategoryAnnotation, Document};
use std::collections::{BTreeSet, HashMap};

/// Namespace prefix the parser expects on category labels.
pub const CATEGORY_PREFIX: &str = "concept:";

/// Category annotations grouped by sentence index.
#[derive(Debug, Default)]
pub struct SentenceCategories<'a> {
    by_sentence: HashMap<usize, Vec<&'a CategoryAnnotation>>,
}

impl<'a> SentenceCategories<'a> {
    /// Group `annotations` by their sentence index.
    #[must_use]
    pub fn group(annotations: &'a [CategoryAnnotation]) -> Self {
        let mut by_sentence: HashMap<usize, Vec<&'a CategoryAnnotation>> = HashMap::new();
        for annotation in annotations {
            by_sentence
                .entry(annotation.span.sentence_index)
                .or_default()
                .push(annotation);
        }
        Self { by_sentence }
    }

    /// Annotations on sentence `index`, empty if there are none.
    #[must_use]
    pub fn get(&self, index: usize) -> &[&'a CategoryAnnotation] {
        self.by_sentence.get(&index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of sentences with at least one annotation.
    #[must_use]
    pub fn sentence_count(&self) -> usize {
        self.by_sentence.len()
    }
}

/// Build the parser input for sentence `index`.
///
/// Token and POS sequences are forwarded as they are, including empty
/// sentences and length mismatches. A sentence without POS tags is forwarded
/// with an empty POS list. Category spans that do not fit the sentence are
/// skipped.
#[must_use]
pub fn project_sentence(
    document: &Document,
    index: usize,
    categories: &SentenceCategories<'_>,
) -> MentionTaggedSentence {
    let Some(sentence) = document.sentence(index) else {
        return MentionTaggedSentence::new(
            SupertaggedSentence::with_unobserved_supertags(Vec::new(), Vec::new()),
            Vec::new(),
        );
    };

    let tokens = sentence.tokens().to_vec();
    let pos_tags: Vec<String> = match sentence.pos_tags() {
        Some(tags) => tags.iter().map(|t| t.name().to_string()).collect(),
        None => {
            log::warn!(
                "[semparse] Sentence {} of '{}' has no POS tags",
                index,
                document.name()
            );
            Vec::new()
        }
    };

    let mentions = categories
        .get(index)
        .iter()
        .filter_map(|annotation| typed_mention(sentence.tokens(), annotation))
        .collect();

    MentionTaggedSentence::new(
        SupertaggedSentence::with_unobserved_supertags(tokens, pos_tags),
        mentions,
    )
}

fn typed_mention(tokens: &[String], annotation: &CategoryAnnotation) -> Option<TypedMention> {
    let span = &annotation.span;
    let Some(mention_tokens) = tokens.get(span.start..span.end) else {
        log::warn!(
            "[semparse] Skipping category '{}' on span {} outside a sentence of {} tokens",
            annotation.category,
            span,
            tokens.len()
        );
        return None;
    };
    let categories = BTreeSet::from([format!("{CATEGORY_PREFIX}{}", annotation.category)]);
    Some(TypedMention::new(
        mention_tokens.join(" "),
        categories,
        MentionSpan::from_document(span),
    ))
}
