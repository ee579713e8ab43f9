//! Selection of relation-bearing logical forms from a parse.
//!
//! Only spanned expressions that entail at least one binary relation
//! instance become annotations. Order follows the parser's enumeration and
//! nothing is deduplicated.

use crate::parser::{CcgParse, LogicalForm};
use crate::span::ExpressionSpan;
use semparse_core::{Confidence, SpanAnnotation};

/// Forwarded to [`CcgParse::spanned_logical_forms`].
pub const INCLUDE_SUBSPANS: bool = true;

/// Confidence attached to every logical form.
pub const LOGICAL_FORM_CONFIDENCE: Confidence = Confidence::CERTAIN;

/// Annotations for the relation-bearing expressions of `parse`.
///
/// Expressions whose span does not fit a sentence of `sentence_len` tokens
/// are dropped.
pub fn relation_bearing_annotations<P: CcgParse>(
    parse: &P,
    sentence_index: usize,
    sentence_len: usize,
) -> Vec<SpanAnnotation<String>> {
    parse
        .spanned_logical_forms(INCLUDE_SUBSPANS)
        .into_iter()
        .filter(|spanned| !spanned.expression.entailed_relation_instances().is_empty())
        .filter_map(|spanned| {
            let span = document_span(spanned.span, sentence_index, sentence_len)?;
            Some(SpanAnnotation::new(
                span,
                spanned.expression.to_string(),
                LOGICAL_FORM_CONFIDENCE,
            ))
        })
        .collect()
}

fn document_span(
    span: ExpressionSpan,
    sentence_index: usize,
    sentence_len: usize,
) -> Option<semparse_core::TokenSpan> {
    let converted = span.to_document_within(sentence_index, sentence_len);
    if converted.is_none() {
        log::warn!(
            "[semparse] Dropping expression span [{}, {}] outside sentence {} ({} tokens)",
            span.start,
            span.end,
            sentence_index,
            sentence_len
        );
    }
    converted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockExpression, MockParse};
    use semparse_core::TokenSpan;

    fn located_in() -> MockExpression {
        MockExpression::new("locatedIn(Paris,France)").with_relation("locatedIn", "Paris", "France")
    }

    #[test]
    fn keeps_only_relation_bearing_expressions() {
        let parse = MockParse::new()
            .with_expression(0, 0, MockExpression::new("Paris"))
            .with_expression(0, 3, located_in());
        let annotations = relation_bearing_annotations(&parse, 2, 4);
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].span, TokenSpan::new(2, 0, 4));
        assert_eq!(annotations[0].value, "locatedIn(Paris,France)");
        assert_eq!(annotations[0].confidence, 1.0);
    }

    #[test]
    fn subspans_are_included() {
        let parse = MockParse::new()
            .with_expression(0, 3, MockExpression::new("(root)"))
            .with_expression(2, 3, located_in());
        let annotations = relation_bearing_annotations(&parse, 0, 4);
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].span, TokenSpan::new(0, 2, 4));
    }

    #[test]
    fn duplicates_are_kept_in_parser_order() {
        let parse = MockParse::new()
            .with_expression(0, 3, located_in())
            .with_expression(1, 1, MockExpression::new("x").with_relation("r", "a", "b"))
            .with_expression(0, 3, located_in());
        let annotations = relation_bearing_annotations(&parse, 0, 4);
        let spans: Vec<_> = annotations.iter().map(|a| (a.span.start, a.span.end)).collect();
        assert_eq!(spans, vec![(0, 4), (1, 2), (0, 4)]);
        assert_eq!(annotations[0], annotations[2]);
    }

    #[test]
    fn out_of_sentence_spans_are_dropped() {
        let parse = MockParse::new().with_expression(1, 4, located_in());
        assert!(relation_bearing_annotations(&parse, 0, 4).is_empty());
    }

    #[test]
    fn span_ending_at_usize_max_is_dropped() {
        let parse = MockParse::new()
            .with_expression(0, usize::MAX, located_in())
            .with_expression(0, 0, MockExpression::new("x").with_relation("r", "a", "b"));
        let annotations = relation_bearing_annotations(&parse, 0, 1);
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].span, TokenSpan::new(0, 0, 1));
    }
}
