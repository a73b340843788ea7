// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A single replacement in a string: `removed` bytes at `at` were replaced by `inserted` bytes.
///
/// Applying an edit to a position leaves positions up to `at` untouched and shifts positions at or
/// after the end of the removed span by the length delta. Positions strictly inside the removed
/// span are clamped into the inserted text.
///
/// When one match is rewritten by two edits (an open tag and a close tag), the edit for the later
/// tag must be performed and recorded first so that the earlier tag's position stays valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextEdit {
    at: usize,
    removed: usize,
    inserted: usize,
}

impl TextEdit {
    /// Creates an edit replacing `removed` bytes at `at` with `inserted` bytes.
    #[must_use]
    #[inline]
    pub const fn new(at: usize, removed: usize, inserted: usize) -> Self {
        Self {
            at,
            removed,
            inserted,
        }
    }

    /// Creates an edit replacing the byte `span` with `inserted` bytes.
    #[must_use]
    #[inline]
    pub const fn replace(span: Range<usize>, inserted: usize) -> Self {
        Self::new(span.start, span.end - span.start, inserted)
    }

    /// The position of the first replaced byte.
    #[must_use]
    #[inline]
    pub const fn at(&self) -> usize {
        self.at
    }

    /// The end (exclusive) of the replaced span, before the edit.
    #[must_use]
    #[inline]
    pub const fn removed_end(&self) -> usize {
        self.at + self.removed
    }

    /// The signed change in length caused by this edit.
    #[must_use]
    #[inline]
    pub fn delta(&self) -> isize {
        self.inserted as isize - self.removed as isize
    }

    /// Maps a position from before the edit to after it.
    #[must_use]
    pub fn map_position(&self, pos: usize) -> usize {
        let removed_end = self.removed_end();
        if pos >= removed_end {
            pos - self.removed + self.inserted
        } else if pos > self.at {
            self.at + (pos - self.at).min(self.inserted)
        } else {
            pos
        }
    }

    /// Maps a half-open span from before the edit to after it.
    pub fn apply_to_span(&self, span: &mut Range<usize>) {
        span.start = self.map_position(span.start);
        span.end = self.map_position(span.end).max(span.start);
    }
}

#[cfg(test)]
mod tests {
    use super::TextEdit;

    #[test]
    fn positions_before_edit_are_untouched() {
        let edit = TextEdit::replace(10..13, 20);
        assert_eq!(edit.map_position(0), 0);
        assert_eq!(
            edit.map_position(10),
            10,
            "the edit start itself does not move"
        );
        assert_eq!(edit.delta(), 17);
    }

    #[test]
    fn positions_after_edit_shift_by_delta() {
        let grow = TextEdit::replace(2..5, 17);
        assert_eq!(grow.map_position(5), 19);
        assert_eq!(grow.map_position(8), 22);

        let shrink = TextEdit::replace(2..18, 0);
        assert_eq!(shrink.map_position(18), 2);
        assert_eq!(shrink.map_position(30), 14);
    }

    #[test]
    fn positions_inside_removed_span_clamp_to_inserted_text() {
        let edit = TextEdit::replace(4..12, 2);
        assert_eq!(edit.map_position(5), 5);
        assert_eq!(edit.map_position(11), 6);
    }

    #[test]
    fn enclosing_span_grows_with_inner_edits() {
        // "<x><y>t</y></x>": x encloses 3..11, y's open tag is 3..6 and its close tag 7..11.
        let mut x = 3..11;
        TextEdit::replace(7..11, 8).apply_to_span(&mut x);
        TextEdit::replace(3..6, 5).apply_to_span(&mut x);
        assert_eq!(x, 3..17);
    }
}
