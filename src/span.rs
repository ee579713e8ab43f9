//! Index conversion between the document model and the parser.
//!
//! Three conventions meet here:
//!
//! | Where                   | Base | End       | Type               |
//! |-------------------------|------|-----------|--------------------|
//! | Document token spans    | 0    | exclusive | [`TokenSpan`]      |
//! | Typed mentions          | 1    | inclusive | [`MentionSpan`]    |
//! | Spanned expressions     | 0    | inclusive | [`ExpressionSpan`] |
//!
//! ```text
//! tokens:          Paris  is  in  France
//! document:        [0, 1)          [3, 4)
//! mention:         (1, 1)          (4, 4)
//! expression:      (0 ............... 3)   ──► document [0, 4)
//! ```
//!
//! No other module adds or subtracts one from an index.

use semparse_core::TokenSpan;
use serde::{Deserialize, Serialize};

/// Typed-mention span: 1-based, inclusive end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MentionSpan {
    /// First token, 1-based.
    pub start: usize,
    /// Last token, 1-based inclusive.
    pub end: usize,
}

impl MentionSpan {
    /// Create a mention span from parser coordinates.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Convert a half-open document span `[s, e)` to `(s + 1, e)`.
    #[must_use]
    pub const fn from_document(span: &TokenSpan) -> Self {
        Self {
            start: span.start + 1,
            end: span.end,
        }
    }
}

/// Spanned-expression span: 0-based, inclusive end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExpressionSpan {
    /// First token.
    pub start: usize,
    /// Last token, inclusive.
    pub end: usize,
}

impl ExpressionSpan {
    /// Create an expression span from parser coordinates.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Convert to the half-open document span `[start, end + 1)`.
    ///
    /// `None` if `end + 1` does not fit in a `usize`.
    #[must_use]
    pub fn to_document(self, sentence_index: usize) -> Option<TokenSpan> {
        let end = self.end.checked_add(1)?;
        Some(TokenSpan::new(sentence_index, self.start, end))
    }

    /// Convert to a document span, or `None` if it does not fit a sentence
    /// of `sentence_len` tokens.
    #[must_use]
    pub fn to_document_within(
        self,
        sentence_index: usize,
        sentence_len: usize,
    ) -> Option<TokenSpan> {
        let span = self.to_document(sentence_index)?;
        (span.start < span.end && span.end <= sentence_len).then_some(span)
    }
}
