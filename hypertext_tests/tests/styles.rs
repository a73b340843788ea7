// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style sheet inheritance as seen through the processor.

use std::sync::Arc;

use hypertext::{HyperTextProcessor, ProcessorSettings};
use hypertext_style::{
    CustomTextStyle, FontStyle, LinkStyle, LinkSubclass, RichTextStyle, StyleSheet, StyleSource,
};

use crate::util::sample_sheet;

fn bold_link() -> LinkStyle {
    LinkStyle {
        text_style: RichTextStyle::default().with_font_style(FontStyle::Bold),
        ..LinkStyle::default()
    }
}

#[test]
fn cascade_font_size_override() {
    let mut parent = StyleSheet::new("parent");
    parent.properties_mut().font_size.value = 20;
    let parent = Arc::new(parent);

    let mut child = StyleSheet::new("child");
    child.push_inherited(Arc::clone(&parent));
    assert_eq!(child.cascaded_font_size(), 20);

    child.properties_mut().font_size.value = 30;
    assert_eq!(
        child.cascaded_font_size(),
        20,
        "a local value without the override flag is ignored"
    );

    child.properties_mut().font_size.should_override = true;
    assert_eq!(child.cascaded_font_size(), 30);
}

#[test]
fn cascade_local_link_subclass_wins() {
    let mut parent = StyleSheet::new("parent");
    parent.push_link_style(LinkSubclass::new("Glossary", LinkStyle::default()).unwrap());

    let mut child = StyleSheet::new("child");
    child.push_inherited(Arc::new(parent));
    child.push_link_style(LinkSubclass::new("glossary", bold_link()).unwrap());

    let cascaded = child.cascaded_link_styles();
    assert_eq!(cascaded.len(), 1);
    assert_eq!(cascaded.get("GLOSSARY").unwrap().style(), &bold_link());
    let source = cascaded.source("glossary");
    assert!(matches!(source, Some(StyleSource::Local)));

    let mut processor = HyperTextProcessor::with_styles(
        r#"<a name="x" class="Glossary">term</a>"#,
        Arc::new(child),
    );
    assert_eq!(processor.output_text(), "<b>term</b>");
}

#[test]
fn cascade_inherited_custom_tags_apply() {
    let mut child = StyleSheet::new("child");
    child.push_inherited(Arc::new(sample_sheet()));
    child.push_custom_text_style(
        CustomTextStyle::new(
            "em",
            RichTextStyle::default().with_font_style(FontStyle::Italic),
        )
        .unwrap(),
    );

    let mut processor = HyperTextProcessor::with_styles("<em>a</em> <big>b</big>", Arc::new(child));
    processor.set_settings(ProcessorSettings::new().with_reference_font_size(10));
    assert_eq!(processor.output_text(), "<i>a</i> <size=20>b</size>");
    assert_eq!(processor.custom_tags().len(), 2);
}

#[test]
fn cascade_settings_follow_sheet_font_size() {
    let mut parent = StyleSheet::new("parent");
    parent.properties_mut().font_size.value = 24;
    let mut child = StyleSheet::new("child");
    child.push_inherited(Arc::new(parent));

    let mut processor = HyperTextProcessor::with_styles("<size=50%>x</size>", Arc::new(child));
    assert_eq!(processor.settings().reference_font_size(), 24);
    assert_eq!(processor.output_text(), "<size=12>x</size>");
}

#[test]
fn cascade_validation_reports_duplicates() {
    let mut sheet = StyleSheet::new("dupes");
    sheet.push_link_style(LinkSubclass::new("a", bold_link()).unwrap());
    sheet.push_link_style(LinkSubclass::new("A", LinkStyle::default()).unwrap());
    assert_eq!(sheet.validate().len(), 1);
    assert_eq!(sheet.link_style("a").unwrap().style(), &bold_link());
}
