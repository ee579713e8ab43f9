//! Pre-tokenized documents as seen by span annotators.
//!
//! A [`Document`] is an ordered list of [`Sentence`]s. Each sentence carries
//! its token surfaces and, when a tagger has run, one [`PosTag`] per token.
//! Noun-phrase category labels from an external categorization system are
//! stored document-wide as [`CategoryAnnotation`]s.
//!
//! ```text
//! sentence 0:  Paris  is   in   France
//!              NNP    VBZ  IN   NNP
//!              └─┘              └────┘
//!              (0,0,1) "city"   (0,3,4) "country"
//! ```
//!
//! All token spans are 0-based and half-open, scoped to one sentence.

use crate::annotation::{AnnotationType, NELL_CATEGORY, POS};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Penn Treebank part-of-speech tag.
///
/// Tags outside the tag set are kept verbatim in [`PosTag::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum PosTag {
    CC,
    CD,
    DT,
    EX,
    FW,
    IN,
    JJ,
    JJR,
    JJS,
    LS,
    MD,
    NN,
    NNS,
    NNP,
    NNPS,
    PDT,
    POS,
    PRP,
    /// `PRP$`
    PRPS,
    RB,
    RBR,
    RBS,
    RP,
    SYM,
    TO,
    UH,
    VB,
    VBD,
    VBG,
    VBN,
    VBP,
    VBZ,
    WDT,
    WP,
    /// `WP$`
    WPS,
    WRB,
    /// Any tag not in the Penn Treebank set (punctuation, corpus-specific tags).
    Other(String),
}

impl PosTag {
    /// The tag's enum-style name, as handed to the parser.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::CC => "CC",
            Self::CD => "CD",
            Self::DT => "DT",
            Self::EX => "EX",
            Self::FW => "FW",
            Self::IN => "IN",
            Self::JJ => "JJ",
            Self::JJR => "JJR",
            Self::JJS => "JJS",
            Self::LS => "LS",
            Self::MD => "MD",
            Self::NN => "NN",
            Self::NNS => "NNS",
            Self::NNP => "NNP",
            Self::NNPS => "NNPS",
            Self::PDT => "PDT",
            Self::POS => "POS",
            Self::PRP => "PRP",
            Self::PRPS => "PRP$",
            Self::RB => "RB",
            Self::RBR => "RBR",
            Self::RBS => "RBS",
            Self::RP => "RP",
            Self::SYM => "SYM",
            Self::TO => "TO",
            Self::UH => "UH",
            Self::VB => "VB",
            Self::VBD => "VBD",
            Self::VBG => "VBG",
            Self::VBN => "VBN",
            Self::VBP => "VBP",
            Self::VBZ => "VBZ",
            Self::WDT => "WDT",
            Self::WP => "WP",
            Self::WPS => "WP$",
            Self::WRB => "WRB",
            Self::Other(tag) => tag,
        }
    }
}

impl FromStr for PosTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::parse("empty part-of-speech tag"));
        }
        Ok(match s {
            "CC" => Self::CC,
            "CD" => Self::CD,
            "DT" => Self::DT,
            "EX" => Self::EX,
            "FW" => Self::FW,
            "IN" => Self::IN,
            "JJ" => Self::JJ,
            "JJR" => Self::JJR,
            "JJS" => Self::JJS,
            "LS" => Self::LS,
            "MD" => Self::MD,
            "NN" => Self::NN,
            "NNS" => Self::NNS,
            "NNP" => Self::NNP,
            "NNPS" => Self::NNPS,
            "PDT" => Self::PDT,
            "POS" => Self::POS,
            "PRP" => Self::PRP,
            "PRP$" => Self::PRPS,
            "RB" => Self::RB,
            "RBR" => Self::RBR,
            "RBS" => Self::RBS,
            "RP" => Self::RP,
            "SYM" => Self::SYM,
            "TO" => Self::TO,
            "UH" => Self::UH,
            "VB" => Self::VB,
            "VBD" => Self::VBD,
            "VBG" => Self::VBG,
            "VBN" => Self::VBN,
            "VBP" => Self::VBP,
            "VBZ" => Self::VBZ,
            "WDT" => Self::WDT,
            "WP" => Self::WP,
            "WP$" => Self::WPS,
            "WRB" => Self::WRB,
            other => Self::Other(other.to_string()),
        })
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token span within one sentence: `[start, end)` over token indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenSpan {
    /// Index of the sentence the span belongs to.
    pub sentence_index: usize,
    /// First token (inclusive).
    pub start: usize,
    /// One past the last token (exclusive).
    pub end: usize,
}

impl TokenSpan {
    /// Create a token span.
    #[must_use]
    pub const fn new(sentence_index: usize, start: usize, end: usize) -> Self {
        Self {
            sentence_index,
            start,
            end,
        }
    }

    /// Number of tokens covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no tokens.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for TokenSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:[{}, {})", self.sentence_index, self.start, self.end)
    }
}

/// A noun-phrase span labelled with a knowledge-base category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryAnnotation {
    /// The labelled span.
    pub span: TokenSpan,
    /// Category label, without any namespace prefix (e.g. `city`).
    pub category: String,
}

impl CategoryAnnotation {
    /// Create a category annotation.
    #[must_use]
    pub fn new(span: TokenSpan, category: impl Into<String>) -> Self {
        Self {
            span,
            category: category.into(),
        }
    }
}

/// One sentence: token surfaces plus optional POS tags.
///
/// Token and tag sequences are not forced to the same length; consumers
/// decide what to do with a mismatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    tokens: Vec<String>,
    pos_tags: Option<Vec<PosTag>>,
}

impl Sentence {
    /// Create a sentence without POS tags.
    #[must_use]
    pub fn new<S: Into<String>>(tokens: impl IntoIterator<Item = S>) -> Self {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            pos_tags: None,
        }
    }

    /// Attach POS tags.
    #[must_use]
    pub fn with_pos_tags(mut self, pos_tags: Vec<PosTag>) -> Self {
        self.pos_tags = Some(pos_tags);
        self
    }

    /// Token surfaces.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// POS tags, if the sentence has been tagged.
    #[must_use]
    pub fn pos_tags(&self) -> Option<&[PosTag]> {
        self.pos_tags.as_deref()
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// A tokenized document with sentence-level POS tags and category annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    name: String,
    sentences: Vec<Sentence>,
    /// `None` when the categorizer has not run on this document.
    categories: Option<Vec<CategoryAnnotation>>,
}

impl Document {
    /// Start building a document.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> DocumentBuilder {
        DocumentBuilder {
            name: name.into(),
            sentences: Vec::new(),
            categories: None,
        }
    }

    /// Document name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of sentences.
    #[must_use]
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// All sentences in order.
    #[must_use]
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Sentence at `index`.
    #[must_use]
    pub fn sentence(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }

    /// Token surface at `(sentence_index, token_index)`.
    #[must_use]
    pub fn token(&self, sentence_index: usize, token_index: usize) -> Option<&str> {
        self.sentence(sentence_index)
            .and_then(|s| s.tokens.get(token_index))
            .map(String::as_str)
    }

    /// Category annotations, empty when the categorizer has not run.
    #[must_use]
    pub fn category_annotations(&self) -> &[CategoryAnnotation] {
        self.categories.as_deref().unwrap_or(&[])
    }

    /// Annotation types this document carries.
    ///
    /// POS counts as present only if every sentence is tagged.
    #[must_use]
    pub fn annotation_types(&self) -> Vec<AnnotationType> {
        let mut types = Vec::new();
        if !self.sentences.is_empty() && self.sentences.iter().all(|s| s.pos_tags.is_some()) {
            types.push(POS);
        }
        if self.categories.is_some() {
            types.push(NELL_CATEGORY);
        }
        types
    }

    /// Required annotation types this document lacks.
    #[must_use]
    pub fn missing_requirements(&self, required: &[AnnotationType]) -> Vec<AnnotationType> {
        let present = self.annotation_types();
        required
            .iter()
            .filter(|t| !present.contains(t))
            .copied()
            .collect()
    }
}

/// Builder for [`Document`]; validates category spans against their sentence.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    name: String,
    sentences: Vec<Sentence>,
    categories: Option<Vec<CategoryAnnotation>>,
}

impl DocumentBuilder {
    /// Append a sentence.
    #[must_use]
    pub fn sentence(mut self, sentence: Sentence) -> Self {
        self.sentences.push(sentence);
        self
    }

    /// Append a POS-tagged sentence given tag names.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] if a tag name is empty.
    pub fn tagged_sentence(self, tokens: &[&str], tags: &[&str]) -> Result<Self> {
        let pos_tags = tags
            .iter()
            .map(|t| t.parse::<PosTag>())
            .collect::<Result<Vec<_>>>()?;
        Ok(self.sentence(Sentence::new(tokens.iter().copied()).with_pos_tags(pos_tags)))
    }

    /// Mark the document as categorized, even if no span received a label.
    #[must_use]
    pub fn categorized(mut self) -> Self {
        self.categories.get_or_insert_with(Vec::new);
        self
    }

    /// Add a category label over `[start, end)` of sentence `sentence_index`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if the sentence does not exist or the
    /// span is empty or runs past the end of the sentence.
    pub fn category(
        mut self,
        sentence_index: usize,
        start: usize,
        end: usize,
        category: impl Into<String>,
    ) -> Result<Self> {
        let span = TokenSpan::new(sentence_index, start, end);
        let sentence = self.sentences.get(sentence_index).ok_or_else(|| {
            Error::invalid_input(format!(
                "category span {} refers to missing sentence (document has {})",
                span,
                self.sentences.len()
            ))
        })?;
        if span.is_empty() || end > sentence.len() {
            return Err(Error::invalid_input(format!(
                "category span {} is outside sentence of {} tokens",
                span,
                sentence.len()
            )));
        }
        self.categories
            .get_or_insert_with(Vec::new)
            .push(CategoryAnnotation::new(span, category));
        Ok(self)
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Document {
        Document {
            name: self.name,
            sentences: self.sentences,
            categories: self.categories,
        }
    }
}
