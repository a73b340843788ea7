// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use hypertext_style::{CustomTextStyle, LinkStyle, MarkupContext, StyleSheet};
use index_range::TextEdit;
use regex::Regex;

use super::markup::{RegexCache, custom_tag_pattern, link_element};

/// What a pending span was recorded for.
#[derive(Clone, Debug)]
pub(super) enum PendingKind {
    Link {
        name: String,
        class_name: Option<String>,
        style: LinkStyle,
    },
    Custom(CustomTextStyle),
}

/// A tag occurrence whose byte span still moves with every rewrite of the text.
#[derive(Clone, Debug)]
pub(super) struct PendingTag {
    pub(super) kind: PendingKind,
    pub(super) span: Range<usize>,
}

impl PendingTag {
    /// The size scalar the tag applies to the text it encloses.
    pub(super) fn size_scalar(&self) -> f32 {
        match &self.kind {
            PendingKind::Link { style, .. } => style.text_style.size_scalar(),
            PendingKind::Custom(style) => style.style().size_scalar(),
        }
    }
}

/// Applies `edit` to the span of every pending tag.
pub(super) fn offset_pending(pending: &mut [PendingTag], edit: &TextEdit) {
    for tag in pending {
        edit.apply_to_span(&mut tag.span);
    }
}

/// The span of the first match of `regex` at or after `pos`, and the span of its first group.
fn element_at(regex: &Regex, text: &str, pos: usize) -> Option<(Range<usize>, Range<usize>)> {
    let caps = regex.captures_at(text, pos)?;
    Some((caps.get(0)?.range(), caps.get(1)?.range()))
}

/// A link element of the text.
#[derive(Debug)]
struct LinkElement {
    whole: Range<usize>,
    inner: Range<usize>,
    name: String,
    class_name: Option<String>,
}

impl LinkElement {
    /// Finds the first link element at or after `pos`.
    fn find_at(text: &str, pos: usize) -> Option<Self> {
        let caps = link_element().captures_at(text, pos)?;
        let class_name = caps.get(2).map(|m| m.as_str()).filter(|c| !c.is_empty());
        Some(Self {
            whole: caps.get(0)?.range(),
            inner: caps.get(3)?.range(),
            name: String::from(caps.get(1)?.as_str()),
            class_name: class_name.map(String::from),
        })
    }
}

/// Replaces the markup around `inner` (the part of `whole` before and after it) with `open` and
/// `close`, keeping every pending span in place. Returns the new span of the inner text.
fn rewrap(
    text: &mut String,
    whole: Range<usize>,
    inner: Range<usize>,
    open: &str,
    close: &str,
    pending: &mut [PendingTag],
) -> Range<usize> {
    // The close tag is edited first so the open tag's position stays valid.
    let edits = [
        TextEdit::replace(inner.end..whole.end, close.len()),
        TextEdit::replace(whole.start..inner.start, open.len()),
    ];
    text.replace_range(inner.end..whole.end, close);
    text.replace_range(whole.start..inner.start, open);
    for edit in &edits {
        offset_pending(pending, edit);
    }
    let start = whole.start + open.len();
    start..start + inner.len()
}

/// Replaces every element of each custom tag defined by `styles` with the markup of its style,
/// one element at a time, and records the enclosed text.
pub(super) fn substitute_custom_tags(
    text: &mut String,
    styles: &StyleSheet,
    ctx: Option<MarkupContext>,
    regexes: &mut RegexCache,
    pending: &mut Vec<PendingTag>,
) {
    let mut open = String::new();
    let mut close = String::new();
    for style in styles.cascaded_custom_text_styles().iter() {
        let Some(regex) = regexes.get(custom_tag_pattern(style.tag().as_str())) else {
            continue;
        };
        open.clear();
        close.clear();
        if let Some(ctx) = ctx {
            style.style().push_open_tags(&mut open, ctx);
            style.style().push_close_tags(&mut close, ctx);
        }

        let mut pos = 0;
        while let Some((whole, inner)) = element_at(&regex, text, pos) {
            let span = rewrap(text, whole.clone(), inner, &open, &close, pending);
            if span.is_empty() {
                log::debug!("skipping empty <{}> element", style.tag().as_str());
            } else {
                pending.push(PendingTag {
                    kind: PendingKind::Custom(style.clone()),
                    span,
                });
            }
            pos = whole.start;
        }
    }
}

/// Replaces every link element with the markup of its resolved link style and records the link
/// text.
pub(super) fn extract_links(
    text: &mut String,
    styles: Option<&StyleSheet>,
    ctx: Option<MarkupContext>,
    pending: &mut Vec<PendingTag>,
) {
    let mut open = String::new();
    let mut close = String::new();
    let mut pos = 0;
    while let Some(link) = LinkElement::find_at(text, pos) {
        let LinkElement {
            whole,
            inner,
            name,
            class_name,
        } = link;

        let style = match styles {
            Some(styles) => {
                if let Some(class_name) = &class_name {
                    if styles.link_style(class_name).is_none() {
                        log::debug!("unknown link class {class_name:?}, using the default style");
                    }
                }
                styles.resolve_link_style(class_name.as_deref())
            }
            None => LinkStyle::default(),
        };

        open.clear();
        close.clear();
        if let Some(ctx) = ctx {
            style.text_style.push_open_tags(&mut open, ctx);
            style.text_style.push_close_tags(&mut close, ctx);
        }
        let span = rewrap(text, whole.clone(), inner, &open, &close, pending);
        if span.is_empty() {
            log::debug!("skipping link {name:?} without text");
        } else {
            pending.push(PendingTag {
                kind: PendingKind::Link {
                    name,
                    class_name,
                    style,
                },
                span,
            });
        }
        pos = whole.start;
    }
}
