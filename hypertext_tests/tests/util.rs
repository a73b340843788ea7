// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use hypertext::{
    CaseMatchMode, Glossary, HyperTextProcessor, KeywordCollection, TagOccurrence,
    WordPrioritization,
};
use hypertext_style::{
    Color, CustomTextStyle, FontStyle, LinkStyle, LinkSubclass, QuadStyle, RichTextStyle, Sprite,
    StyleSheet,
};

/// A sheet with the custom tags `em` (bold), `big` (double size) and `warn` (red), the link
/// subclass `glossary` (italic) and the quad class `star` (twice as wide as high).
pub(crate) fn sample_sheet() -> StyleSheet {
    let mut sheet = StyleSheet::new("sample");
    sheet.push_custom_text_style(
        CustomTextStyle::new(
            "em",
            RichTextStyle::default().with_font_style(FontStyle::Bold),
        )
        .unwrap(),
    );
    sheet.push_custom_text_style(
        CustomTextStyle::new("big", RichTextStyle::default().with_size_scalar(2.0)).unwrap(),
    );
    sheet.push_custom_text_style(
        CustomTextStyle::new(
            "warn",
            RichTextStyle::default().with_replacement_color(Some(Color::rgba8(255, 0, 0, 255))),
        )
        .unwrap(),
    );
    sheet.push_link_style(
        LinkSubclass::new(
            "glossary",
            LinkStyle {
                text_style: RichTextStyle::default().with_font_style(FontStyle::Italic),
                ..LinkStyle::default()
            },
        )
        .unwrap(),
    );
    sheet.push_quad_style(
        QuadStyle::new("star")
            .unwrap()
            .with_sprite(Sprite::new("star", 64.0, 32.0)),
    );
    sheet
}

/// A processor over `text` with [`sample_sheet`] at a 20pt reference size.
pub(crate) fn sample_processor(text: &str) -> HyperTextProcessor {
    let mut processor = HyperTextProcessor::with_styles(text, Arc::new(sample_sheet()));
    processor.set_reference_font_size(20);
    processor
}

/// A built, case-insensitive keyword collection.
pub(crate) fn keywords(words: &[&str]) -> Arc<KeywordCollection> {
    Arc::new(KeywordCollection::built(
        Glossary::from_keywords(words.iter().copied()),
        CaseMatchMode::IgnoreCase,
        WordPrioritization::LongestNGram,
    ))
}

/// The characters of `output` covered by `occurrence`.
pub(crate) fn covered_text(output: &str, occurrence: &impl TagOccurrence) -> String {
    let range = occurrence.character_indices();
    let start = output.chars().skip(range.start());
    start.take(range.count()).collect()
}
