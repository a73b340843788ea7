// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use super::KeywordSource;

/// A plain text document whose delimited entries are keywords.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextDocument {
    text: String,
    delimiters: Vec<char>,
}

impl TextDocument {
    /// The delimiters used by [`TextDocument::new`].
    pub const DEFAULT_DELIMITERS: [char; 3] = ['\n', '\r', ','];

    /// Creates a document split on newlines and commas.
    pub fn new(text: &str) -> Self {
        Self::with_delimiters(text, &Self::DEFAULT_DELIMITERS)
    }

    /// Creates a document split on any of `delimiters`.
    pub fn with_delimiters(text: &str, delimiters: &[char]) -> Self {
        Self {
            text: text.into(),
            delimiters: delimiters.to_vec(),
        }
    }

    /// The document text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl KeywordSource for TextDocument {
    fn populate_keywords(&self, out: &mut Vec<String>) {
        out.extend(
            self.text
                .split(self.delimiters.as_slice())
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(String::from),
        );
    }
}
