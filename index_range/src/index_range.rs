// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Error, TextEdit, VERTICES_PER_GLYPH};

/// An inclusive `[start, end]` range of indices.
///
/// Depending on context the indices address characters of a string, or vertices of a glyph
/// buffer. An `IndexRange` always covers at least one index: `start <= end`.
///
/// Ranges are kept valid while the string they index is rewritten by applying the [`TextEdit`]s
/// of each rewrite, in the order the edits were performed.
///
/// ## Example
///
/// ```
/// use index_range::IndexRange;
///
/// let range = IndexRange::new(2, 4).unwrap();
/// assert_eq!(range.count(), 3);
/// assert_eq!(range.to_span(), 2..5);
/// assert_eq!(range.to_vertex_range(), IndexRange::new(8, 19).unwrap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexRange {
    start: usize,
    end: usize,
}

impl IndexRange {
    /// Returns a range covering `start..=end`.
    #[inline]
    pub fn new(start: usize, end: usize) -> Result<Self, Error> {
        if start > end {
            return Err(Error::invalid_range(start, end));
        }
        Ok(Self { start, end })
    }

    /// Creates an `IndexRange` without validation.
    ///
    /// This is intended for internal callers that already maintain `start <= end`.
    #[must_use]
    #[inline]
    pub const fn new_unchecked(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the range covering the half-open `span`, or `None` when the span is empty.
    #[must_use]
    #[inline]
    pub fn from_span(span: Range<usize>) -> Option<Self> {
        if span.is_empty() {
            None
        } else {
            Some(Self {
                start: span.start,
                end: span.end - 1,
            })
        }
    }

    /// The first index covered.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The last index covered (inclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// The number of indices covered.
    #[must_use]
    #[inline]
    pub const fn count(self) -> usize {
        self.end - self.start + 1
    }

    /// Returns `true` if `index` lies inside this range.
    #[must_use]
    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// Returns `true` if `other` lies completely inside this range.
    #[must_use]
    #[inline]
    pub const fn contains_range(self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns this range as a half-open `Range<usize>`.
    #[must_use]
    #[inline]
    pub const fn to_span(self) -> Range<usize> {
        self.start..self.end + 1
    }

    /// Returns the vertex range of the glyph quads drawn for this character range.
    #[must_use]
    #[inline]
    pub const fn to_vertex_range(self) -> Self {
        Self {
            start: self.start * VERTICES_PER_GLYPH,
            end: self.end * VERTICES_PER_GLYPH + VERTICES_PER_GLYPH - 1,
        }
    }

    /// Returns this range moved forward by `offset`.
    #[must_use]
    #[inline]
    pub const fn shifted(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// Moves this range to account for a rewrite of the string it indexes.
    pub fn apply_edit(&mut self, edit: &TextEdit) {
        let mut span = self.to_span();
        edit.apply_to_span(&mut span);
        self.start = span.start;
        self.end = span.end.max(span.start + 1) - 1;
    }

    /// Applies each edit in order.
    pub fn offset(&mut self, edits: &[TextEdit]) {
        for edit in edits {
            self.apply_edit(edit);
        }
    }
}

impl From<IndexRange> for Range<usize> {
    #[inline]
    fn from(value: IndexRange) -> Self {
        value.to_span()
    }
}
