// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::IndexRange;

/// The number of vertices in one glyph quad.
pub const VERTICES_PER_GLYPH: usize = 4;

/// Vertex ranges covered by a character range after mesh effects have run.
///
/// Effects such as shadows and outlines duplicate the whole glyph buffer one or more times and
/// place the copies in front of the original, so a buffer of `base` vertices grows to
/// `base * multiplier` vertices. The original glyphs are the last copy; the earlier copies are
/// redrawn passes that must be recolored along with them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexRanges {
    primary: IndexRange,
    redraws: Vec<IndexRange>,
    multiplier: usize,
}

impl VertexRanges {
    /// Computes the vertex ranges for the characters in `chars`.
    ///
    /// `base_vertex_count` is the size of the glyph buffer before effects ran and
    /// `modified_vertex_count` the size afterwards. Returns `None` if the characters were not
    /// drawn at all (for example because the text was truncated); ranges reaching past the end of
    /// the base buffer are clipped to it.
    pub fn new(
        chars: IndexRange,
        base_vertex_count: usize,
        modified_vertex_count: usize,
    ) -> Option<Self> {
        let vertices = chars.to_vertex_range();
        if base_vertex_count == 0 || vertices.start() >= base_vertex_count {
            return None;
        }
        let clipped =
            IndexRange::new_unchecked(vertices.start(), vertices.end().min(base_vertex_count - 1));
        let multiplier = (modified_vertex_count / base_vertex_count).max(1);
        let redraws = (0..multiplier - 1)
            .map(|copy| clipped.shifted(copy * base_vertex_count))
            .collect();
        Some(Self {
            primary: clipped.shifted((multiplier - 1) * base_vertex_count),
            redraws,
            multiplier,
        })
    }

    /// The vertices of the original glyphs.
    #[must_use]
    pub fn primary(&self) -> IndexRange {
        self.primary
    }

    /// The vertices of the copies added by mesh effects, in buffer order.
    #[must_use]
    pub fn redraws(&self) -> &[IndexRange] {
        &self.redraws
    }

    /// How many times the base buffer appears in the modified buffer.
    #[must_use]
    pub fn multiplier(&self) -> usize {
        self.multiplier
    }

    /// Iterates over every vertex range, redraws first.
    pub fn iter(&self) -> impl Iterator<Item = IndexRange> + '_ {
        let primary = core::iter::once(self.primary);
        self.redraws.iter().copied().chain(primary)
    }
}
