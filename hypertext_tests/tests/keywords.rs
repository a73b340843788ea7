// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Automatic tagging of keywords.

use std::sync::Arc;

use hypertext::{
    CaseMatchMode, Glossary, HyperTextProcessor, KeywordCollection, KeywordCollectionClass,
    TextDocument, WordPrioritization,
};
use index_range::IndexRange;

use crate::util::{covered_text, keywords, sample_processor};

#[test]
fn keyword_link_matches_whole_words_only() {
    let mut processor = HyperTextProcessor::new();
    processor.set_input_text("I like dogs and dog food");
    processor.set_link_keywords(vec![KeywordCollectionClass::unclassed(keywords(&["dog"]))]);

    assert_eq!(processor.output_text(), "I like dogs and dog food");
    let links = processor.links().to_vec();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].name, "dog");
    assert_eq!(links[0].character_indices, IndexRange::new(16, 18).unwrap());
}

#[test]
fn keyword_longest_phrase_wins() {
    let mut processor = sample_processor("a hot dog and a dog");
    processor.set_link_keywords(vec![KeywordCollectionClass::new(
        keywords(&["dog", "hot dog"]),
        "glossary",
    )]);
    let output = processor.output_text().to_owned();
    assert_eq!(output, "a <i>hot dog</i> and a <i>dog</i>");
    let links = processor.links().to_vec();
    assert_eq!(links[0].name, "hot dog");
    assert_eq!(covered_text(&output, &links[0]), "hot dog");
    assert_eq!(links[1].name, "dog");
}

#[test]
fn keyword_source_order_lets_short_words_win() {
    let collection = Arc::new(KeywordCollection::built(
        Glossary::from_keywords(["dog", "hot dog"]),
        CaseMatchMode::IgnoreCase,
        WordPrioritization::SourceOrder,
    ));
    let mut processor = HyperTextProcessor::new();
    processor.set_input_text("a hot dog");
    processor.set_link_keywords(vec![KeywordCollectionClass::unclassed(collection)]);
    assert_eq!(processor.output_text(), "a hot dog");
    assert_eq!(processor.links()[0].name, "dog");
}

#[test]
fn keyword_inside_existing_markup_is_skipped() {
    let mut processor = sample_processor(r#"<em>dog</em> <a name="pet">dog</a> dog"#);
    processor.set_link_keywords(vec![KeywordCollectionClass::unclassed(keywords(&["dog"]))]);
    let output = processor.output_text().to_owned();
    assert_eq!(output, "<b>dog</b> dog dog");
    let names: Vec<_> = processor.links().iter().map(|l| l.name.clone()).collect();
    assert_eq!(names, ["pet", "dog"]);
}

#[test]
fn keyword_quads_and_tags() {
    let mut processor = sample_processor("a star is a warning");
    processor.set_quad_keywords(vec![KeywordCollectionClass::unclassed(keywords(&["star"]))]);
    processor.set_tag_keywords(vec![KeywordCollectionClass::new(
        keywords(&["warning"]),
        "warn",
    )]);
    let output = processor.output_text().to_owned();
    assert_eq!(
        output,
        r#"a <quad class="star" size=20 width=2 /> is a <color=#FF0000FF>warning</color>"#
    );
    assert_eq!(processor.quads().len(), 1);
    let warning = &processor.custom_tags()[0];
    assert_eq!(covered_text(&output, warning), "warning");
}

#[test]
fn keyword_collection_reused_across_roles_keeps_first() {
    let shared = keywords(&["star"]);
    let mut processor = sample_processor("star");
    processor.set_link_keywords(vec![KeywordCollectionClass::unclassed(Arc::clone(&shared))]);
    processor.set_quad_keywords(vec![KeywordCollectionClass::unclassed(shared)]);
    assert_eq!(processor.output_text(), "star");
    assert_eq!(processor.links().len(), 1);
    assert!(processor.quads().is_empty());
}

#[test]
fn keyword_collection_swap_dirties() {
    let mut processor = HyperTextProcessor::new();
    processor.set_input_text("cat and dog");
    processor.set_link_keywords(vec![KeywordCollectionClass::unclassed(keywords(&["dog"]))]);
    assert_eq!(processor.links()[0].name, "dog");

    let mut rebuilt = KeywordCollection::new(TextDocument::new("cat\ndog"));
    rebuilt.rebuild();
    processor.set_link_keywords(vec![KeywordCollectionClass::unclassed(Arc::new(rebuilt))]);
    assert_eq!(processor.links().len(), 2);
}

#[test]
fn keyword_case_sensitive() {
    let collection = Arc::new(KeywordCollection::built(
        Glossary::from_keywords(["Rust"]),
        CaseMatchMode::CaseSensitive,
        WordPrioritization::SourceOrder,
    ));
    let mut processor = HyperTextProcessor::new();
    processor.set_input_text("rust, Rust, RUST");
    processor.set_link_keywords(vec![KeywordCollectionClass::unclassed(collection)]);
    assert_eq!(processor.links().len(), 1);
    assert_eq!(
        processor.links()[0].character_indices,
        IndexRange::new(6, 9).unwrap()
    );
}

#[test]
fn glossary_definitions_resolve_link_names() {
    let mut glossary = Glossary::default();
    glossary.push("Quad", "An inline image.");
    let collection = Arc::new(KeywordCollection::built(
        glossary.clone(),
        CaseMatchMode::IgnoreCase,
        WordPrioritization::SourceOrder,
    ));
    let mut processor = HyperTextProcessor::new();
    processor.set_input_text("What is a QUAD?");
    processor.set_link_keywords(vec![KeywordCollectionClass::unclassed(collection)]);
    let name = processor.links()[0].name.clone();
    assert_eq!(glossary.definition(&name), Some("An inline image."));
}
