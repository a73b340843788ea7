// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use super::KeywordSource;

/// A glossary entry: a keyword and its definition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlossaryEntry {
    /// The term being defined.
    pub keyword: String,
    /// The definition, typically shown when a link to the term is activated.
    pub definition: String,
}

/// A list of defined terms whose keywords tag matching words in text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glossary {
    entries: Vec<GlossaryEntry>,
}

impl Glossary {
    /// Creates a glossary from its entries.
    pub fn new(entries: Vec<GlossaryEntry>) -> Self {
        Self { entries }
    }

    /// Creates a glossary of keywords without definitions.
    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: keywords
                .into_iter()
                .map(|keyword| GlossaryEntry {
                    keyword: keyword.into(),
                    definition: String::new(),
                })
                .collect(),
        }
    }

    /// The entries, in authoring order.
    #[inline]
    pub fn entries(&self) -> &[GlossaryEntry] {
        &self.entries
    }

    /// Adds an entry.
    pub fn push(&mut self, keyword: &str, definition: &str) {
        self.entries.push(GlossaryEntry {
            keyword: keyword.into(),
            definition: definition.into(),
        });
    }

    /// Looks up the definition of `keyword`, ignoring case and surrounding whitespace.
    ///
    /// This is the lookup a link handler performs with the name of a clicked keyword link.
    pub fn definition(&self, keyword: &str) -> Option<&str> {
        let keyword = keyword.trim().to_lowercase();
        self.entries
            .iter()
            .find(|e| e.keyword.trim().to_lowercase() == keyword)
            .map(|e| e.definition.as_str())
    }
}

impl KeywordSource for Glossary {
    fn populate_keywords(&self, out: &mut Vec<String>) {
        out.extend(self.entries.iter().map(|e| e.keyword.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::Glossary;

    #[test]
    fn definition_lookup_ignores_case() {
        let mut glossary = Glossary::default();
        glossary.push("Quad", "An inline image.");
        assert_eq!(glossary.definition("quad"), Some("An inline image."));
        assert_eq!(glossary.definition(" QUAD "), Some("An inline image."));
        assert_eq!(glossary.definition("link"), None);
    }
}
