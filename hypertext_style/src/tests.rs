// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{
    Color, CustomTextStyle, FontStyle, IssueKind, LinkStyle, LinkSubclass, QuadStyle,
    RichTextStyle, Sprite, StyleSheet, StyleSource, StyleTable,
};

fn link(class: &str, size_scalar: f32) -> LinkSubclass {
    let style = LinkStyle {
        text_style: RichTextStyle::default().with_size_scalar(size_scalar),
        ..LinkStyle::default()
    };
    LinkSubclass::new(class, style).unwrap()
}

fn tag(name: &str, font_style: FontStyle) -> CustomTextStyle {
    CustomTextStyle::new(name, RichTextStyle::default().with_font_style(font_style)).unwrap()
}

fn sheet_with_font_size(name: &str, size: u32) -> StyleSheet {
    let mut sheet = StyleSheet::new(name);
    sheet.properties_mut().font_size.value = size;
    sheet
}

#[test]
fn scalar_override_requires_flag() {
    let parent = Arc::new(sheet_with_font_size("parent", 20));
    let mut child = StyleSheet::new("child");
    child.push_inherited(parent);
    assert_eq!(child.cascaded_font_size(), 20);

    child.properties_mut().font_size.value = 30;
    assert_eq!(
        child.cascaded_font_size(),
        20,
        "a local value without the override flag yields to the parent"
    );

    child.properties_mut().font_size.should_override = true;
    assert_eq!(child.cascaded_font_size(), 30);
}

#[test]
fn scalar_uses_last_parent() {
    let mut child = StyleSheet::new("child");
    child.set_inherited(Vec::from([
        Arc::new(sheet_with_font_size("first", 10)),
        Arc::new(sheet_with_font_size("last", 24)),
    ]));
    assert_eq!(child.cascaded_font_size(), 24);
}

#[test]
fn scalar_recurses_through_grandparents() {
    let mut grandparent = StyleSheet::new("grandparent");
    grandparent
        .properties_mut()
        .text_color
        .set_overriding(Color::rgba8(1, 2, 3, 255));
    let mut parent = StyleSheet::new("parent");
    parent.push_inherited(Arc::new(grandparent));
    let mut child = StyleSheet::new("child");
    child.push_inherited(Arc::new(parent));
    assert_eq!(child.cascaded_text_color(), Color::rgba8(1, 2, 3, 255));
}

#[test]
fn root_sheet_uses_local_values() {
    let sheet = sheet_with_font_size("root", 18);
    assert_eq!(sheet.cascaded_font_size(), 18);
    assert_eq!(sheet.cascaded_line_spacing(), 1.0);
    assert_eq!(sheet.cascaded_font(), None);
}

#[test]
fn local_link_subclass_wins_over_inherited() {
    let mut parent = StyleSheet::new("parent");
    parent.push_link_style(link("Glossary", 2.0));
    let parent = Arc::new(parent);

    let mut child = StyleSheet::new("child");
    child.push_inherited(Arc::clone(&parent));
    child.push_link_style(link("GLOSSARY", 3.0));

    let cascaded = child.cascaded_link_styles();
    assert_eq!(cascaded.len(), 1);
    let resolved = cascaded.get("glossary").unwrap();
    assert_eq!(resolved.style().text_style.size_scalar(), 3.0);
    let source = cascaded.source("glossary");
    assert!(matches!(source, Some(StyleSource::Local)));

    let inherited = child.inherited_link_styles();
    let source = inherited.source("Glossary").and_then(StyleSource::sheet);
    assert!(source.is_some_and(|s| Arc::ptr_eq(s, &parent)));
}

#[test]
fn later_parent_wins_and_keeps_defining_sheet() {
    let mut first = StyleSheet::new("first");
    first.push_custom_text_style(tag("em", FontStyle::Italic));
    first.push_custom_text_style(tag("strong", FontStyle::Bold));
    let mut last = StyleSheet::new("last");
    last.push_custom_text_style(tag("EM", FontStyle::BoldAndItalic));
    let (first, last) = (Arc::new(first), Arc::new(last));

    let mut child = StyleSheet::new("child");
    child.set_inherited(Vec::from([Arc::clone(&first), Arc::clone(&last)]));

    let em = child.custom_text_style("em").unwrap();
    assert_eq!(em.style().font_style(), FontStyle::BoldAndItalic);
    let inherited = child.inherited_custom_text_styles();
    let sheet_of = |key: &str| inherited.source(key).and_then(StyleSource::sheet).unwrap();
    assert!(Arc::ptr_eq(sheet_of("em"), &last));
    assert!(Arc::ptr_eq(sheet_of("strong"), &first));

    let names: Vec<_> = child
        .cascaded_custom_text_styles()
        .iter()
        .map(|s| s.tag().as_str())
        .collect();
    assert_eq!(
        names,
        ["EM", "strong"],
        "overwritten keys keep their first position"
    );
}

#[test]
fn grandparent_source_is_preserved() {
    let mut grandparent = StyleSheet::new("grandparent");
    grandparent.push_quad_style(QuadStyle::new("smile").unwrap());
    let grandparent = Arc::new(grandparent);
    let mut parent = StyleSheet::new("parent");
    parent.push_inherited(Arc::clone(&grandparent));
    let mut child = StyleSheet::new("child");
    child.push_inherited(Arc::new(parent));

    let source = child
        .inherited_quad_styles()
        .source("smile")
        .and_then(StyleSource::sheet)
        .unwrap();
    assert!(Arc::ptr_eq(source, &grandparent));
}

#[test]
fn first_duplicate_wins_within_a_sheet() {
    let mut sheet = StyleSheet::new("dupes");
    sheet.push_custom_text_style(tag("note", FontStyle::Bold));
    sheet.push_custom_text_style(tag("Note", FontStyle::Italic));
    let note = sheet.custom_text_style("note").unwrap();
    assert_eq!(note.style().font_style(), FontStyle::Bold);

    let issues = sheet.validate();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::DuplicateIdentifier);
    assert_eq!(issues[0].table, StyleTable::CustomTextStyles);
}

#[test]
fn mutation_invalidates_cascade() {
    let mut sheet = StyleSheet::new("sheet");
    assert!(sheet.link_style("nav").is_none());
    sheet.push_link_style(link("nav", 1.0));
    assert!(sheet.link_style("nav").is_some());
    sheet.link_styles_mut().clear();
    assert!(sheet.link_style("nav").is_none());
}

#[test]
fn unknown_link_class_resolves_to_default_style() {
    let mut parent = StyleSheet::new("parent");
    let default_link = LinkStyle {
        text_style: RichTextStyle::default().with_font_style(FontStyle::Bold),
        ..LinkStyle::default()
    };
    parent
        .properties_mut()
        .default_link_style
        .set_overriding(default_link);
    let mut child = StyleSheet::new("child");
    child.push_inherited(Arc::new(parent));
    child.push_link_style(link("big", 2.0));

    assert_eq!(child.resolve_link_style(None), default_link);
    assert_eq!(child.resolve_link_style(Some("missing")), default_link);
    assert_eq!(
        child
            .resolve_link_style(Some("BIG"))
            .text_style
            .size_scalar(),
        2.0
    );
}

#[test]
fn validation_reports_quad_problems() {
    let mut sheet = StyleSheet::new("quads");
    sheet.push_quad_style(
        QuadStyle::new("icon")
            .unwrap()
            .with_sprite(Sprite::new("icon", 16.0, 16.0))
            .with_link("home", Some("nav")),
    );
    sheet.push_quad_style(QuadStyle::new("blank").unwrap());
    let kinds: Vec<_> = sheet.validate().iter().map(|i| i.kind).collect();
    let expected = [IssueKind::UnknownLinkClass, IssueKind::MissingSprite];
    assert_eq!(kinds, expected);
}
