// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyword collections used to tag words of the input automatically.

mod document;
mod glossary;

pub use document::TextDocument;
pub use glossary::{Glossary, GlossaryEntry};

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::HashSet;

/// How keywords are matched against the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaseMatchMode {
    /// Keywords are lowercased and match regardless of case.
    #[default]
    IgnoreCase,
    /// Keywords match only with identical case.
    CaseSensitive,
}

/// How keywords are ordered, which decides which keyword claims overlapping text first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WordPrioritization {
    /// Keep the order of the source.
    #[default]
    SourceOrder,
    /// Keywords with more whitespace-separated words come first, so the longest phrase wins.
    LongestNGram,
}

/// Produces the raw keyword list of a [`KeywordCollection`].
pub trait KeywordSource: Debug {
    /// Appends this source's keywords to `out`, in source order.
    fn populate_keywords(&self, out: &mut Vec<String>);
}

/// An ordered, deduplicated list of keywords read from a [`KeywordSource`].
///
/// The list is only refreshed by [`rebuild`](Self::rebuild). A processor shares its collections,
/// so a collection is rebuilt once the processor has released it, then handed back through
/// [`set_link_keywords`](crate::HyperTextProcessor::set_link_keywords) or its quad and tag
/// counterparts, which dirty the processor.
///
/// ```
/// use hypertext::{CaseMatchMode, Glossary, KeywordCollection, WordPrioritization};
///
/// let glossary = Glossary::from_keywords(["Dog", "hot dog", "dog", "cat"]);
/// let mut keywords = KeywordCollection::new(glossary)
///     .with_prioritization(WordPrioritization::LongestNGram);
/// keywords.rebuild();
/// assert_eq!(keywords.keywords(), ["hot dog", "dog", "cat"]);
/// assert_eq!(keywords.case_match(), CaseMatchMode::IgnoreCase);
/// ```
#[derive(Debug)]
pub struct KeywordCollection {
    source: Box<dyn KeywordSource + Send + Sync>,
    case_match: CaseMatchMode,
    prioritization: WordPrioritization,
    keywords: Vec<String>,
}

impl KeywordCollection {
    /// Creates a collection over `source`. The keyword list stays empty until
    /// [`rebuild`](Self::rebuild) is called.
    pub fn new<S: KeywordSource + Send + Sync + 'static>(source: S) -> Self {
        Self {
            source: Box::new(source),
            case_match: CaseMatchMode::default(),
            prioritization: WordPrioritization::default(),
            keywords: Vec::new(),
        }
    }

    /// Returns this collection with a different case matching mode.
    #[must_use]
    pub fn with_case_match(mut self, case_match: CaseMatchMode) -> Self {
        self.case_match = case_match;
        self
    }

    /// Returns this collection with a different prioritization.
    #[must_use]
    pub fn with_prioritization(mut self, prioritization: WordPrioritization) -> Self {
        self.prioritization = prioritization;
        self
    }

    /// Creates a collection and builds its keyword list.
    pub fn built<S: KeywordSource + Send + Sync + 'static>(
        source: S,
        case_match: CaseMatchMode,
        prioritization: WordPrioritization,
    ) -> Self {
        let mut collection = Self::new(source)
            .with_case_match(case_match)
            .with_prioritization(prioritization);
        collection.rebuild();
        collection
    }

    /// The source the keywords are read from.
    pub fn source(&self) -> &dyn KeywordSource {
        &*self.source
    }

    /// The case matching mode.
    #[inline]
    pub fn case_match(&self) -> CaseMatchMode {
        self.case_match
    }

    /// The prioritization mode.
    #[inline]
    pub fn prioritization(&self) -> WordPrioritization {
        self.prioritization
    }

    /// The keywords from the most recent rebuild, highest priority first.
    #[inline]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Re-reads, normalizes, deduplicates and sorts the keywords.
    pub fn rebuild(&mut self) {
        let mut raw = Vec::new();
        self.source.populate_keywords(&mut raw);

        self.keywords.clear();
        let mut seen = HashSet::new();
        for keyword in raw {
            let trimmed = keyword.trim();
            if trimmed.is_empty() {
                continue;
            }
            let keyword = match self.case_match {
                CaseMatchMode::IgnoreCase => trimmed.to_lowercase(),
                CaseMatchMode::CaseSensitive => String::from(trimmed),
            };
            if seen.insert(keyword.clone()) {
                self.keywords.push(keyword);
            }
        }

        if self.prioritization == WordPrioritization::LongestNGram {
            // Stable, so keywords with equal word counts keep source order.
            self.keywords
                .sort_by_key(|k| core::cmp::Reverse(k.split_whitespace().count()));
        }

        log::trace!(
            "rebuilt keyword collection: {} keyword(s)",
            self.keywords.len()
        );
    }
}

/// A keyword collection assigned to a role, with the style class used for the tags it creates.
///
/// For link collections the class selects the link subclass, for custom tag collections it is the
/// tag name. Quad collections ignore it: each keyword is the class of the quad replacing it.
#[derive(Clone, Debug)]
pub struct KeywordCollectionClass {
    collection: Arc<KeywordCollection>,
    class_name: Option<String>,
}

impl KeywordCollectionClass {
    /// Pairs a shared collection with a class name (empty names mean no class).
    pub fn new(collection: Arc<KeywordCollection>, class_name: &str) -> Self {
        Self {
            collection,
            class_name: (!class_name.is_empty()).then(|| String::from(class_name)),
        }
    }

    /// Pairs a shared collection with no class.
    pub fn unclassed(collection: Arc<KeywordCollection>) -> Self {
        Self {
            collection,
            class_name: None,
        }
    }

    /// The collection.
    #[inline]
    pub fn collection(&self) -> &Arc<KeywordCollection> {
        &self.collection
    }

    /// The class name, if any.
    #[inline]
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }
}
