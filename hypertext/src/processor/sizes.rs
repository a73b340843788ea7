// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt::Write as _;
use core::ops::Range;

use hypertext_style::round_size;
use index_range::TextEdit;
use smallvec::SmallVec;

use super::markup::size_tag;
use super::tags::{PendingTag, offset_pending};

/// Resolves `<size=N%>` against the scaled font size, and replaces non-positive absolute sizes
/// with the scaled font size.
pub(super) fn resolve_relative_sizes(
    text: &mut String,
    scaled_font_size: f32,
    buffer: &mut String,
) {
    buffer.clear();
    let mut copied = 0;
    for caps in size_tag().captures_iter(text) {
        let (Some(whole), Some(value)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Ok(value) = value.as_str().parse::<f32>() else {
            continue;
        };
        let percent = caps.get(2).is_some_and(|m| !m.is_empty());
        let size = if percent {
            round_size(value * scaled_font_size / 100.0)
        } else if value <= 0.0 {
            round_size(scaled_font_size)
        } else {
            continue;
        };
        buffer.push_str(&text[copied..whole.start()]);
        let _ = write!(buffer, "<size={size}>");
        copied = whole.end();
    }
    if copied == 0 {
        return;
    }
    buffer.push_str(&text[copied..]);
    core::mem::swap(text, buffer);
}

/// Multiplies each `<size=N>` inside pending link and custom tag spans by the size scalars of the
/// enclosing tags. Nested size tags replace the outer size instead of scaling it.
pub(super) fn multiply_nested_sizes(text: &mut String, pending: &mut [PendingTag]) {
    let tags: SmallVec<[(Range<usize>, f32); 8]> = size_tag()
        .captures_iter(text)
        .filter(|caps| caps.get(2).is_none_or(|m| m.is_empty()))
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let value = caps.get(1)?.as_str().parse::<f32>().ok()?;
            Some((whole.range(), value))
        })
        .collect();

    // Back to front, so rewriting a tag never moves the tags still to be visited.
    for (span, value) in tags.into_iter().rev() {
        let factor: f32 = pending
            .iter()
            .filter(|tag| tag.span.start <= span.start && span.end <= tag.span.end)
            .map(PendingTag::size_scalar)
            .product();
        if factor == 1.0 {
            continue;
        }
        let replacement = format!("<size={}>", round_size(value * factor));
        let edit = TextEdit::replace(span.clone(), replacement.len());
        text.replace_range(span, &replacement);
        offset_pending(pending, &edit);
    }
}
