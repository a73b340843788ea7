// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use crate::IndexRange;

/// Converts UTF-8 byte offsets of one string into character indices.
///
/// ASCII strings map byte offsets to themselves without allocating.
#[derive(Clone, Debug, Default)]
pub struct CharIndexMap {
    /// Byte offset of every character, empty for ASCII text.
    starts: Vec<usize>,
    len: usize,
}

impl CharIndexMap {
    /// Builds the map for `text`.
    pub fn new(text: &str) -> Self {
        let mut map = Self::default();
        map.rebuild(text);
        map
    }

    /// Rebuilds the map for `text`, retaining allocated storage.
    pub fn rebuild(&mut self, text: &str) {
        self.starts.clear();
        self.len = text.len();
        if !text.is_ascii() {
            self.starts.extend(text.char_indices().map(|(i, _)| i));
        }
    }

    /// Returns the index of the character starting at or containing byte `offset`.
    ///
    /// `offset == len` maps to the character count.
    #[must_use]
    pub fn char_index(&self, offset: usize) -> usize {
        if self.starts.is_empty() {
            return offset.min(self.len);
        }
        if offset >= self.len {
            return self.starts.len();
        }
        match self.starts.binary_search(&offset) {
            Ok(index) => index,
            // `starts[0] == 0`, so a miss always has a preceding character.
            Err(insert) => insert - 1,
        }
    }

    /// Returns the inclusive character range for a half-open byte `span`, or `None` when the
    /// span contains no characters.
    #[must_use]
    pub fn char_range(&self, span: Range<usize>) -> Option<IndexRange> {
        let start = self.char_index(span.start);
        let end = self.char_index(span.end);
        IndexRange::from_span(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::CharIndexMap;
    use crate::IndexRange;

    #[test]
    fn ascii_is_identity() {
        let map = CharIndexMap::new("a dog b");
        assert_eq!(map.char_index(2), 2);
        assert_eq!(map.char_index(7), 7);
        assert_eq!(map.char_range(2..5), IndexRange::new(2, 4).ok());
    }

    #[test]
    fn multibyte_offsets_map_to_characters() {
        // "é" is 2 bytes, "✓" is 3 bytes.
        let text = "é✓ok";
        let map = CharIndexMap::new(text);
        assert_eq!(map.char_index(0), 0);
        assert_eq!(map.char_index(2), 1);
        assert_eq!(map.char_index(5), 2);
        assert_eq!(map.char_index(text.len()), 4);
        assert_eq!(map.char_range(2..7), IndexRange::new(1, 3).ok());
    }

    #[test]
    fn empty_span_has_no_range() {
        let map = CharIndexMap::new("héllo");
        assert_eq!(map.char_range(3..3), None);
    }
}
