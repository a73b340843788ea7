// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup resolution and the ranges recorded for it.

use hypertext::HyperTextProcessor;
use index_range::IndexRange;

use crate::util::{covered_text, sample_processor};

#[test]
fn link_without_styles_round_trip() {
    let mut processor = HyperTextProcessor::new();
    processor.set_input_text("a <a name=\"x\">dog</a> b");
    assert_eq!(processor.output_text(), "a dog b");

    let links = processor.links().to_vec();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].name, "x");
    assert_eq!(links[0].class_name, None);
    assert_eq!(links[0].character_indices, IndexRange::new(2, 4).unwrap());
}

#[test]
fn output_is_memoized() {
    let input = r#"<em>one</em> <a name="x" class="glossary">two</a> <quad class="star" />"#;
    let mut processor = sample_processor(input);
    let output = processor.output_text().to_owned();
    let links = processor.links().to_vec();
    let tags = processor.custom_tags().to_vec();
    let quads = processor.quads().to_vec();

    assert!(!processor.is_dirty());
    assert_eq!(processor.output_text(), output);
    assert_eq!(processor.links(), links);
    assert_eq!(processor.custom_tags(), tags);
    assert_eq!(processor.quads(), quads);
}

#[test]
fn occurrences_cover_their_visible_text() {
    let input = concat!(
        r#"<warn>Careful</warn>: <big>huge</big> "#,
        r#"<a name="t" class="glossary">term</a> and <quad class="star">"#,
    );
    let mut processor = sample_processor(input);
    let output = processor.output_text().to_owned();
    assert_eq!(
        output,
        "<color=#FF0000FF>Careful</color>: <size=40>huge</size> <i>term</i> and \
         <quad class=\"star\" size=20 width=2>"
    );

    let tags = processor.custom_tags().to_vec();
    assert_eq!(tags.len(), 2);
    assert_eq!(covered_text(&output, &tags[0]), "Careful");
    assert_eq!(covered_text(&output, &tags[1]), "huge");

    let links = processor.links().to_vec();
    assert_eq!(covered_text(&output, &links[0]), "term");
    assert_eq!(links[0].class_name.as_deref(), Some("glossary"));

    let quads = processor.quads().to_vec();
    assert_eq!(
        covered_text(&output, &quads[0]),
        "<quad class=\"star\" size=20 width=2>"
    );
}

#[test]
fn offset_of_first_tag_growth_shifts_later_occurrences() {
    let input = r#"<big>A</big><em>B</em><em>C</em><a name="x">D</a>"#;

    let mut processor = sample_processor(input);
    let grown = processor.output_text().to_owned();
    assert_eq!(grown, "<size=40>A</size><b>B</b><b>C</b>D");
    let grown_tags = processor.custom_tags().to_vec();
    let grown_link = processor.links()[0].character_indices;

    // A static font has no size markup, so `<big>` shrinks to nothing.
    processor.set_dynamic_font(false);
    assert_eq!(processor.output_text(), "A<b>B</b><b>C</b>D");
    let flat_tags = processor.custom_tags().to_vec();
    let flat_link = processor.links()[0].character_indices;

    let n = "<size=40></size>".len();
    let first_shift = "<size=40>".len();
    assert_eq!(
        grown_tags[0].character_indices,
        flat_tags[0].character_indices.shifted(first_shift)
    );
    for (grown, flat) in grown_tags[1..].iter().zip(&flat_tags[1..]) {
        assert_eq!(grown.character_indices, flat.character_indices.shifted(n));
    }
    assert_eq!(grown_link, flat_link.shifted(n));
}

#[test]
fn percentage_size_resolves_against_reference() {
    let mut processor = HyperTextProcessor::new();
    processor.set_reference_font_size(20);
    processor.set_input_text("<size=50%>X</size>");
    assert_eq!(processor.output_text(), "<size=10>X</size>");
}

#[test]
fn percentage_size_inside_link_is_not_rescaled_by_plain_link() {
    let mut processor = sample_processor(r#"<a name="x"><size=150%>X</size></a>"#);
    assert_eq!(processor.output_text(), "<size=30>X</size>");
    assert_eq!(processor.links()[0].character_indices.count(), 17);
}

#[test]
fn custom_tag_inside_link_is_recorded_once() {
    let mut processor = sample_processor(r#"<a name="x" class="glossary">a <em>b</em></a>"#);
    assert_eq!(processor.output_text(), "<i>a <b>b</b></i>");
    let output = processor.output_text().to_owned();
    assert_eq!(covered_text(&output, &processor.links()[0]), "a <b>b</b>");
    assert_eq!(covered_text(&output, &processor.custom_tags()[0]), "b");
}

#[test]
fn nested_custom_tags_keep_both_ranges() {
    let mut processor = sample_processor("<warn>x <em>y</em> z</warn>");
    let output = processor.output_text().to_owned();
    assert_eq!(output, "<color=#FF0000FF>x <b>y</b> z</color>");
    let tags = processor.custom_tags().to_vec();
    assert_eq!(covered_text(&output, &tags[0]), "x <b>y</b> z");
    assert_eq!(covered_text(&output, &tags[1]), "y");
}

#[test]
fn unknown_markup_is_left_alone() {
    let mut processor =
        sample_processor(r#"<mystery>?</mystery> <quad class="moon" /> <b>bold</b>"#);
    assert_eq!(
        processor.output_text(),
        r#"<mystery>?</mystery> <quad class="moon" /> <b>bold</b>"#
    );
    assert!(processor.custom_tags().is_empty());
    assert!(processor.quads().is_empty());
}
