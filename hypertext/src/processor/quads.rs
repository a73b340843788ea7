// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;
use core::ops::Range;

use hypertext_style::{QuadStyle, StyleSheet, round_size};

use super::markup::{class_of, has_size, quad_tag};

/// Writes the size and width of every quad of a known class into its tag, wrapping quads with a
/// link in a link element.
///
/// Quads that already carry a size are left alone.
pub(super) fn inject_quad_arguments(
    text: &mut String,
    styles: &StyleSheet,
    scaled_font_size: f32,
    buffer: &mut String,
) {
    buffer.clear();
    let mut copied = 0;
    for caps in quad_tag().captures_iter(text) {
        let (Some(whole), Some(attributes)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let attributes = attributes.as_str();
        let Some(class_name) = class_of(attributes) else {
            continue;
        };
        let Some(style) = styles.quad_style(class_name) else {
            log::debug!("unknown quad class {class_name:?}");
            continue;
        };
        if has_size(attributes) {
            continue;
        }

        buffer.push_str(&text[copied..whole.start()]);
        if let Some(link_id) = style.link_id() {
            let _ = write!(buffer, "<a name=\"{link_id}\"");
            if let Some(link_class) = style.link_class_name() {
                let _ = write!(buffer, " class=\"{link_class}\"");
            }
            buffer.push('>');
        }
        let _ = write!(
            buffer,
            "<quad{attributes} size={} width={}",
            round_size(scaled_font_size * style.size_scalar()),
            style.width_ratio()
        );
        if caps.get(2).is_some_and(|slash| !slash.is_empty()) {
            buffer.push_str(" /");
        }
        buffer.push('>');
        if style.link_id().is_some() {
            buffer.push_str("</a>");
        }
        copied = whole.end();
    }
    if copied == 0 {
        return;
    }
    buffer.push_str(&text[copied..]);
    core::mem::swap(text, buffer);
}

/// Collects every quad tag of a known class, with the byte span of the whole tag.
pub(super) fn extract_quads(
    text: &str,
    styles: &StyleSheet,
    out: &mut Vec<(QuadStyle, Range<usize>)>,
) {
    for caps in quad_tag().captures_iter(text) {
        let (Some(whole), Some(attributes)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if let Some(style) = class_of(attributes.as_str()).and_then(|c| styles.quad_style(c)) {
            out.push((style.clone(), whole.range()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_quads, inject_quad_arguments};
    use hypertext_style::{QuadStyle, Sprite, StyleSheet};

    fn sheet() -> StyleSheet {
        let mut sheet = StyleSheet::new("quads");
        sheet.push_quad_style(
            QuadStyle::new("Star")
                .unwrap()
                .with_sprite(Sprite::new("star", 32.0, 16.0))
                .with_size_scalar(1.5),
        );
        sheet.push_quad_style(QuadStyle::new("info").unwrap().with_link("help", Some("hint")));
        sheet
    }

    #[test]
    fn injects_size_and_width() {
        let mut text = String::from(r#"a <quad class="star" /> b <quad class="unknown">"#);
        inject_quad_arguments(&mut text, &sheet(), 20.0, &mut String::new());
        assert_eq!(
            text,
            r#"a <quad class="star" size=30 width=2 /> b <quad class="unknown">"#
        );
    }

    #[test]
    fn linked_quads_are_wrapped() {
        let mut text = String::from(r#"<quad class="info">"#);
        inject_quad_arguments(&mut text, &sheet(), 14.0, &mut String::new());
        assert_eq!(
            text,
            r#"<a name="help" class="hint"><quad class="info" size=14 width=1></a>"#
        );
    }

    #[test]
    fn sized_quads_are_untouched() {
        let mut text = String::from(r#"<quad class="star" size=9 />"#);
        inject_quad_arguments(&mut text, &sheet(), 14.0, &mut String::new());
        assert_eq!(text, r#"<quad class="star" size=9 />"#);
    }

    #[test]
    fn extracts_known_quads() {
        let text = r#"x<quad class="STAR" size=30 width=2 /><quad class="nope" />"#;
        let mut out = Vec::new();
        extract_quads(text, &sheet(), &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].1, 1..text.find("<quad class=\"nope\"").unwrap());
        assert_eq!(out[0].0.class_name().as_str(), "Star");
    }
}
