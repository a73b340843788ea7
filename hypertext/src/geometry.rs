// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer hit testing for links, on top of glyph rectangles supplied by a renderer.

use alloc::vec::Vec;

use peniko::kurbo::{Point, Rect};

use crate::{Link, TagOccurrence};

/// The pointer targets of the links of one processed text.
///
/// Hitboxes are built from one rectangle per character of the output text, as laid out by the
/// renderer. Characters that are not drawn (such as markup) should have a zero-area rectangle.
/// The glyphs of a link are merged into one box per line, and each box is grown by the link
/// hitbox padding of the style sheet.
#[derive(Clone, Debug, Default)]
pub struct LinkHitboxes {
    boxes: Vec<(usize, Rect)>,
}

impl LinkHitboxes {
    /// Builds the hitboxes of every link.
    pub fn new(links: &[Link], glyph_rects: &[Rect], padding: f64) -> Self {
        let mut boxes = Vec::new();
        for (index, link) in links.iter().enumerate() {
            Self::link_geometry_with(link, glyph_rects, padding, |rect| boxes.push((index, rect)));
        }
        Self { boxes }
    }

    /// Calls `f` with the hitbox of each line spanned by `link`.
    pub fn link_geometry_with(
        link: &Link,
        glyph_rects: &[Rect],
        padding: f64,
        mut f: impl FnMut(Rect),
    ) {
        let range = link.character_indices();
        let end = (range.end() + 1).min(glyph_rects.len());
        let Some(glyphs) = glyph_rects.get(range.start()..end) else {
            return;
        };
        let mut line: Option<Rect> = None;
        for rect in glyphs.iter().filter(|r| r.area() > 0.0) {
            line = Some(match line {
                Some(current) if same_line(current, *rect) => current.union(*rect),
                Some(current) => {
                    f(current.inflate(padding, padding));
                    *rect
                }
                None => *rect,
            });
        }
        if let Some(current) = line {
            f(current.inflate(padding, padding));
        }
    }

    /// The hitboxes, each with the index of its link.
    pub fn boxes(&self) -> &[(usize, Rect)] {
        &self.boxes
    }

    /// Returns the index of the link under `point`. Where padded boxes overlap, the earlier link
    /// wins.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.boxes
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(index, _)| *index)
    }
}

/// A glyph continues a line when it overlaps the line vertically and does not start before it.
fn same_line(line: Rect, glyph: Rect) -> bool {
    glyph.y0 < line.y1 && glyph.y1 > line.y0 && glyph.x0 >= line.x0
}
