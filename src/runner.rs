//! Running the parser on one projected sentence.
//!
//! Parser failures are sentence-local: an error is logged and reported as
//! [`ParseOutcome::NoParse`], the same as the parser finding nothing. No
//! retry happens here; threshold fallback is the composite parser's job.

use crate::parser::{MentionTaggedSentence, SentenceParser};

/// Result of parsing one sentence.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome<T> {
    /// The parser produced a parse.
    Parsed(T),
    /// No parse: none found, budget exhausted, or the parser failed.
    NoParse,
}

impl<T> ParseOutcome<T> {
    /// The parse, if any.
    #[must_use]
    pub fn parsed(self) -> Option<T> {
        match self {
            Self::Parsed(parse) => Some(parse),
            Self::NoParse => None,
        }
    }

    /// Whether a parse was produced.
    #[must_use]
    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }
}

/// Parse `sentence`, absorbing parser errors.
pub fn run_parser<P: SentenceParser>(
    parser: &P,
    sentence: &MentionTaggedSentence,
) -> ParseOutcome<P::Parse> {
    match parser.parse_sentence(sentence) {
        Ok(Some(parse)) => ParseOutcome::Parsed(parse),
        Ok(None) => ParseOutcome::NoParse,
        Err(e) => {
            log::warn!(
                "[semparse] Parser failed on a {}-token sentence: {}",
                sentence.sentence.len(),
                e
            );
            ParseOutcome::NoParse
        }
    }
}
