//! End-to-end annotator behaviour with a scripted parser.

use semparse::mock::{MockExpression, MockParse, MockParser, MockResponse};
use semparse::{MentionSpan, SemparseAnnotator};
use semparse_core::{Document, TokenSpan, TokenSpanAnnotator};
use std::collections::BTreeSet;

fn located_in() -> MockExpression {
    MockExpression::new("locatedIn(Paris,France)").with_relation("locatedIn", "Paris", "France")
}

fn paris_document() -> Document {
    Document::builder("paris")
        .tagged_sentence(&["Paris", "is", "in", "France"], &["NNP", "VBZ", "IN", "NNP"])
        .unwrap()
        .category(0, 0, 1, "city")
        .unwrap()
        .category(0, 3, 4, "country")
        .unwrap()
        .build()
}

#[test]
fn empty_document_never_invokes_parser() {
    let annotator = SemparseAnnotator::new(MockParser::new().with_default(MockParse::new()));
    let doc = Document::builder("empty").categorized().build();

    assert!(annotator.annotate(&doc).is_empty());
    assert_eq!(annotator.parser().call_count(), 0);
}

#[test]
fn sentence_without_mentions_and_no_relations() {
    let parse = MockParse::new().with_expression(0, 2, MockExpression::new("(sleeps cat)"));
    let annotator = SemparseAnnotator::new(MockParser::new().with_default(parse));
    let doc = Document::builder("cat")
        .tagged_sentence(&["The", "cat", "sleeps"], &["DT", "NN", "VBZ"])
        .unwrap()
        .build();

    assert!(annotator.annotate(&doc).is_empty());

    let received = annotator.parser().received();
    assert_eq!(received.len(), 1);
    assert!(received[0].mentions.is_empty());
    assert_eq!(received[0].sentence.words, vec!["The", "cat", "sleeps"]);
    assert_eq!(received[0].sentence.pos_tags, vec!["DT", "NN", "VBZ"]);
}

#[test]
fn relation_bearing_parse_yields_one_annotation() {
    let parse = MockParse::new()
        .with_expression(0, 0, MockExpression::new("Paris"))
        .with_expression(3, 3, MockExpression::new("France"))
        .with_expression(0, 3, located_in());
    let annotator = SemparseAnnotator::new(MockParser::new().with_default(parse));

    let annotations = annotator.annotate(&paris_document());

    let received = annotator.parser().received();
    let mentions = &received[0].mentions;
    assert_eq!(mentions.len(), 2);
    assert_eq!(mentions[0].text, "Paris");
    assert_eq!(mentions[0].categories, BTreeSet::from(["concept:city".to_string()]));
    assert_eq!(mentions[0].span, MentionSpan::new(1, 1));
    assert_eq!(mentions[1].text, "France");
    assert_eq!(mentions[1].categories, BTreeSet::from(["concept:country".to_string()]));
    assert_eq!(mentions[1].span, MentionSpan::new(4, 4));

    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].span, TokenSpan::new(0, 0, 4));
    assert_eq!(annotations[0].value, "locatedIn(Paris,France)");
    assert_eq!(annotations[0].confidence, 1.0);
}

#[test]
fn no_parse_sentence_contributes_nothing() {
    let parser = MockParser::new()
        .on_sentence(&["Paris", "is", "in", "France"], MockResponse::NoParse)
        .on_sentence(
            &["Lyon", "is", "in", "France"],
            MockResponse::Parse(MockParse::new().with_expression(
                0,
                3,
                MockExpression::new("locatedIn(Lyon,France)")
                    .with_relation("locatedIn", "Lyon", "France"),
            )),
        );
    let annotator = SemparseAnnotator::new(parser);
    let doc = Document::builder("two")
        .tagged_sentence(&["Paris", "is", "in", "France"], &["NNP", "VBZ", "IN", "NNP"])
        .unwrap()
        .tagged_sentence(&["Lyon", "is", "in", "France"], &["NNP", "VBZ", "IN", "NNP"])
        .unwrap()
        .build();

    let annotations = annotator.annotate(&doc);
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].span.sentence_index, 1);
    assert_eq!(annotator.parser().call_count(), 2);
}

#[test]
fn parser_failure_is_absorbed() {
    let parser = MockParser::new()
        .with_default(MockParse::new().with_expression(0, 1, located_in()))
        .on_sentence(&["broken", "input"], MockResponse::Fail("chart too large".into()));
    let annotator = SemparseAnnotator::new(parser);
    let doc = Document::builder("mixed")
        .tagged_sentence(&["broken", "input"], &["JJ", "NN"])
        .unwrap()
        .tagged_sentence(&["fine", "input"], &["JJ", "NN"])
        .unwrap()
        .build();

    let annotations = annotator.annotate(&doc);
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].span, TokenSpan::new(1, 0, 2));
}

#[test]
fn every_sentence_failing_returns_empty() {
    let annotator = SemparseAnnotator::new(MockParser::new());
    assert!(annotator.annotate(&paris_document()).is_empty());
}

#[test]
fn output_is_sentence_major() {
    let parse = MockParse::new()
        .with_expression(1, 2, MockExpression::new("b").with_relation("r", "x", "y"))
        .with_expression(0, 2, MockExpression::new("a").with_relation("r", "x", "y"));
    let annotator = SemparseAnnotator::new(MockParser::new().with_default(parse));
    let doc = Document::builder("three")
        .tagged_sentence(&["a", "b", "c"], &["NN", "NN", "NN"])
        .unwrap()
        .tagged_sentence(&["d", "e", "f"], &["NN", "NN", "NN"])
        .unwrap()
        .tagged_sentence(&["g", "h", "i"], &["NN", "NN", "NN"])
        .unwrap()
        .build();

    let annotations = annotator.annotate(&doc);
    assert_eq!(annotations.len(), 6);
    let order: Vec<(usize, usize)> = annotations
        .iter()
        .map(|a| (a.span.sentence_index, a.span.start))
        .collect();
    // Parser order within a sentence, ascending sentence index across.
    assert_eq!(order, vec![(0, 1), (0, 0), (1, 1), (1, 0), (2, 1), (2, 0)]);
}

#[test]
fn second_of_two_sentences_succeeds() {
    let parser = MockParser::new().on_sentence(
        &["It", "rains"],
        MockResponse::Parse(MockParse::new().with_expression(
            0,
            1,
            MockExpression::new("(rains it)").with_relation("rains", "it", "now"),
        )),
    );
    let annotator = SemparseAnnotator::new(parser);
    let doc = Document::builder("two")
        .tagged_sentence(&["Hello"], &["UH"])
        .unwrap()
        .tagged_sentence(&["It", "rains"], &["PRP", "VBZ"])
        .unwrap()
        .build();

    let annotations = annotator.annotate(&doc);
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].span, TokenSpan::new(1, 0, 2));
}

#[test]
fn same_span_two_categories_are_not_merged() {
    let annotator = SemparseAnnotator::new(MockParser::new());
    let doc = Document::builder("apple")
        .tagged_sentence(&["Apple", "fell"], &["NNP", "VBD"])
        .unwrap()
        .category(0, 0, 1, "company")
        .unwrap()
        .category(0, 0, 1, "fruit")
        .unwrap()
        .build();

    annotator.annotate(&doc);

    let mentions = &annotator.parser().received()[0].mentions;
    assert_eq!(mentions.len(), 2);
    assert_eq!(mentions[0].text, "Apple");
    assert_eq!(mentions[1].text, "Apple");
    assert_eq!(mentions[0].span, MentionSpan::new(1, 1));
    assert_eq!(mentions[1].span, MentionSpan::new(1, 1));
    let categories: BTreeSet<_> = mentions
        .iter()
        .flat_map(|m| m.categories.iter().cloned())
        .collect();
    assert_eq!(
        categories,
        BTreeSet::from(["concept:company".to_string(), "concept:fruit".to_string()])
    );
    assert_eq!(mentions[0].categories.len(), 1);
}

#[test]
fn duplicated_category_yields_two_identical_mentions() {
    let parse = MockParse::new().with_expression(
        0,
        1,
        MockExpression::new("fell(Apple)").with_relation("fell", "Apple", "ground"),
    );
    let once = Document::builder("once")
        .tagged_sentence(&["Apple", "fell"], &["NNP", "VBD"])
        .unwrap()
        .category(0, 0, 1, "company")
        .unwrap()
        .build();
    let twice = Document::builder("twice")
        .tagged_sentence(&["Apple", "fell"], &["NNP", "VBD"])
        .unwrap()
        .category(0, 0, 1, "company")
        .unwrap()
        .category(0, 0, 1, "company")
        .unwrap()
        .build();

    let single = SemparseAnnotator::new(MockParser::new().with_default(parse.clone()));
    let double = SemparseAnnotator::new(MockParser::new().with_default(parse));
    assert_eq!(single.annotate(&once), double.annotate(&twice));

    let mentions = &double.parser().received()[0].mentions;
    assert_eq!(mentions.len(), 2);
    assert_eq!(mentions[0], mentions[1]);
    assert_eq!(mentions[0].span, MentionSpan::new(1, 1));
    assert_eq!(mentions[0].categories, BTreeSet::from(["concept:company".to_string()]));
}

#[test]
fn empty_sentence_is_forwarded() {
    let annotator = SemparseAnnotator::new(MockParser::new());
    let doc = Document::builder("blank")
        .tagged_sentence(&[], &[])
        .unwrap()
        .build();

    assert!(annotator.annotate(&doc).is_empty());
    let received = annotator.parser().received();
    assert_eq!(received.len(), 1);
    assert!(received[0].sentence.is_empty());
}

#[test]
fn mentions_only_go_to_their_sentence() {
    let annotator = SemparseAnnotator::new(MockParser::new());
    let doc = Document::builder("split")
        .tagged_sentence(&["Obama", "spoke"], &["NNP", "VBD"])
        .unwrap()
        .tagged_sentence(&["Chicago", "listened"], &["NNP", "VBD"])
        .unwrap()
        .category(1, 0, 1, "city")
        .unwrap()
        .category(0, 0, 1, "person")
        .unwrap()
        .build();

    annotator.annotate(&doc);

    let received = annotator.parser().received();
    assert_eq!(received[0].mentions.len(), 1);
    assert_eq!(received[0].mentions[0].text, "Obama");
    assert_eq!(received[1].mentions.len(), 1);
    assert_eq!(received[1].mentions[0].text, "Chicago");
}
