//! Property-based tests for annotator invariants.
//!
//! Documents and parses are generated at random; the parser is scripted to
//! return the same parse for every sentence so outputs depend only on the
//! projection and filtering logic.

use proptest::prelude::*;
use semparse::mock::{MockExpression, MockParse, MockParser};
use semparse::SemparseAnnotator;
use semparse_core::{CategoryAnnotation, Document, Sentence, SpanAnnotation, TokenSpanAnnotator};
use std::collections::HashMap;

/// (start, width, bears_relation) triples over a parser span.
fn arb_parse() -> impl Strategy<Value = MockParse> {
    prop::collection::vec((0usize..8, 0usize..4, any::<bool>()), 0..6).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .fold(MockParse::new(), |parse, (i, (start, width, related))| {
                let expression = MockExpression::new(format!("e{i}"));
                let expression = if related {
                    expression.with_relation("r", "a", "b")
                } else {
                    expression
                };
                parse.with_expression(start, start + width, expression)
            })
    })
}

fn arb_document() -> impl Strategy<Value = (Vec<usize>, Vec<(usize, usize, usize, u8)>)> {
    (
        prop::collection::vec(0usize..7, 0..5),
        prop::collection::vec((0usize..5, 0usize..7, 1usize..3, 0u8..3), 0..8),
    )
}

fn build(sentence_lens: &[usize], labels: &[(usize, usize, usize, u8)], reverse: bool) -> Document {
    let mut builder = Document::builder("generated").categorized();
    for (i, &len) in sentence_lens.iter().enumerate() {
        let tokens: Vec<String> = (0..len).map(|j| format!("w{i}_{j}")).collect();
        let tags = vec!["NN".parse().unwrap(); len];
        builder = builder.sentence(Sentence::new(tokens).with_pos_tags(tags));
    }
    let valid: Vec<_> = labels
        .iter()
        .filter(|(s, start, width, _)| {
            sentence_lens
                .get(*s)
                .is_some_and(|&len| start + width <= len)
        })
        .collect();
    let ordered: Vec<_> = if reverse {
        valid.into_iter().rev().collect()
    } else {
        valid
    };
    for &&(s, start, width, label) in &ordered {
        builder = builder
            .category(s, start, start + width, format!("cat{label}"))
            .unwrap();
    }
    builder.build()
}

type AnnotationKey = (usize, usize, usize, String);

fn multiset(annotations: &[SpanAnnotation<String>]) -> HashMap<AnnotationKey, usize> {
    let mut counts = HashMap::new();
    for a in annotations {
        *counts
            .entry((a.span.sentence_index, a.span.start, a.span.end, a.value.clone()))
            .or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn spans_stay_inside_their_sentence(
        (lens, labels) in arb_document(),
        parse in arb_parse(),
    ) {
        let doc = build(&lens, &labels, false);
        let annotator = SemparseAnnotator::new(MockParser::new().with_default(parse));
        for a in annotator.annotate(&doc) {
            let len = doc.sentence(a.span.sentence_index).map(Sentence::len).unwrap_or(0);
            prop_assert!(a.span.start < a.span.end);
            prop_assert!(a.span.end <= len);
        }
    }

    #[test]
    fn confidence_is_always_one(
        (lens, labels) in arb_document(),
        parse in arb_parse(),
    ) {
        let doc = build(&lens, &labels, false);
        let annotator = SemparseAnnotator::new(MockParser::new().with_default(parse));
        for a in annotator.annotate(&doc) {
            prop_assert_eq!(a.confidence.get(), 1.0);
        }
    }

    #[test]
    fn output_is_sentence_major(
        (lens, labels) in arb_document(),
        parse in arb_parse(),
    ) {
        let doc = build(&lens, &labels, false);
        let annotator = SemparseAnnotator::new(MockParser::new().with_default(parse));
        let annotations = annotator.annotate(&doc);
        for pair in annotations.windows(2) {
            prop_assert!(pair[0].span.sentence_index <= pair[1].span.sentence_index);
        }
    }

    #[test]
    fn only_relation_bearing_expressions_are_emitted(
        (lens, labels) in arb_document(),
        parse in arb_parse(),
    ) {
        let doc = build(&lens, &labels, false);
        let annotator = SemparseAnnotator::new(MockParser::new().with_default(parse.clone()));
        let bearing: Vec<String> = semparse::CcgParse::spanned_logical_forms(&parse, true)
            .into_iter()
            .filter(|s| {
                !semparse::LogicalForm::entailed_relation_instances(&s.expression).is_empty()
            })
            .map(|s| s.expression.to_string())
            .collect();
        for a in annotator.annotate(&doc) {
            prop_assert!(bearing.contains(&a.value));
        }
    }

    #[test]
    fn category_order_does_not_change_output(
        (lens, labels) in arb_document(),
        parse in arb_parse(),
    ) {
        let forward = build(&lens, &labels, false);
        let backward = build(&lens, &labels, true);
        let annotator = SemparseAnnotator::new(MockParser::new().with_default(parse));
        prop_assert_eq!(
            multiset(&annotator.annotate(&forward)),
            multiset(&annotator.annotate(&backward))
        );
    }

    #[test]
    fn every_category_becomes_one_mention(
        (lens, labels) in arb_document(),
    ) {
        let doc = build(&lens, &labels, false);
        let annotator = SemparseAnnotator::new(MockParser::new());
        annotator.annotate(&doc);
        let mentions: usize = annotator
            .parser()
            .received()
            .iter()
            .map(|s| s.mentions.len())
            .sum();
        let expected: usize = doc
            .category_annotations()
            .iter()
            .filter(|c: &&CategoryAnnotation| c.span.sentence_index < doc.sentence_count())
            .count();
        prop_assert_eq!(mentions, expected);
        prop_assert_eq!(annotator.parser().call_count(), doc.sentence_count());
    }

    #[test]
    fn duplicated_category_keeps_output_and_adds_a_mention(
        (lens, labels) in arb_document(),
        parse in arb_parse(),
        pick in any::<prop::sample::Index>(),
    ) {
        let original = build(&lens, &labels, false);
        prop_assume!(!original.category_annotations().is_empty());

        let mut duplicated_labels = labels.clone();
        let valid: Vec<_> = labels
            .iter()
            .filter(|(s, start, width, _)| {
                lens.get(*s).is_some_and(|&len| start + width <= len)
            })
            .copied()
            .collect();
        duplicated_labels.push(*pick.get(&valid));
        let duplicated = build(&lens, &duplicated_labels, false);

        let single = SemparseAnnotator::new(MockParser::new().with_default(parse.clone()));
        let double = SemparseAnnotator::new(MockParser::new().with_default(parse));
        prop_assert_eq!(
            multiset(&single.annotate(&original)),
            multiset(&double.annotate(&duplicated))
        );

        let count = |a: &SemparseAnnotator<MockParser>| -> usize {
            a.parser().received().iter().map(|s| s.mentions.len()).sum()
        };
        prop_assert_eq!(count(&double), count(&single) + 1);
    }
}
