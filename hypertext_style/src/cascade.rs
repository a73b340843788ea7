// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inheritance-overlaid style tables.

use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::identifier::KeyRef;
use crate::{CustomTextStyle, Identified, LinkSubclass, QuadStyle, StyleKey, StyleSheet};

/// The sheet that defines a cascaded entry.
#[derive(Clone)]
pub enum StyleSource {
    /// Defined by the sheet the table belongs to.
    Local,
    /// Defined by an inherited sheet (possibly several levels up).
    Inherited(Arc<StyleSheet>),
}

impl StyleSource {
    /// The defining sheet, when inherited.
    pub fn sheet(&self) -> Option<&Arc<StyleSheet>> {
        match self {
            Self::Local => None,
            Self::Inherited(sheet) => Some(sheet),
        }
    }
}

impl core::fmt::Debug for StyleSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Local => f.write_str("Local"),
            Self::Inherited(sheet) => f.debug_tuple("Inherited").field(&sheet.name()).finish(),
        }
    }
}

/// A style together with the sheet that defines it.
#[derive(Clone, Debug)]
pub struct CascadedEntry<T> {
    style: T,
    source: StyleSource,
}

impl<T> CascadedEntry<T> {
    /// The style.
    #[inline]
    pub fn style(&self) -> &T {
        &self.style
    }

    /// The sheet defining the style.
    #[inline]
    pub fn source(&self) -> &StyleSource {
        &self.source
    }
}

/// An ordered table of styles keyed by case-insensitive identifier.
///
/// Entries keep the position at which their key was first inserted; overwriting a key replaces
/// the entry in place.
#[derive(Clone, Debug)]
pub struct CascadedTable<T> {
    entries: Vec<CascadedEntry<T>>,
    index: HashMap<StyleKey, usize>,
}

impl<T> Default for CascadedTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Identified + Clone> CascadedTable<T> {
    fn insert(&mut self, style: T, source: StyleSource) {
        let entry = CascadedEntry { style, source };
        if let Some(&slot) = self.index.get(entry.style.key()) {
            self.entries[slot] = entry;
        } else {
            let key = entry.style.key().clone();
            self.index.insert(key, self.entries.len());
            self.entries.push(entry);
        }
    }

    /// Looks up a style by identifier, ignoring case.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entry(key).map(CascadedEntry::style)
    }

    /// Looks up an entry by identifier, ignoring case.
    pub fn entry(&self, key: &str) -> Option<&CascadedEntry<T>> {
        let slot = *self.index.get(&KeyRef(key))?;
        self.entries.get(slot)
    }

    /// Returns the sheet defining `key`, if present.
    pub fn source(&self, key: &str) -> Option<&StyleSource> {
        self.entry(key).map(CascadedEntry::source)
    }

    /// All entries, in table order.
    #[inline]
    pub fn entries(&self) -> &[CascadedEntry<T>] {
        &self.entries
    }

    /// Iterates over the styles in table order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.entries.iter().map(CascadedEntry::style)
    }

    /// Appends clones of the styles to `out`, after clearing it.
    pub fn clone_into_vec(&self, out: &mut Vec<T>) {
        out.clear();
        out.extend(self.iter().cloned());
    }

    /// The number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The inherited and cascaded tables of one style kind.
#[derive(Clone, Debug)]
pub(crate) struct Tables<T> {
    pub(crate) inherited: CascadedTable<T>,
    pub(crate) cascaded: CascadedTable<T>,
}

/// Every cascaded table of a sheet.
#[derive(Clone, Debug)]
pub(crate) struct Cascade {
    pub(crate) links: Tables<LinkSubclass>,
    pub(crate) quads: Tables<QuadStyle>,
    pub(crate) custom_text_styles: Tables<CustomTextStyle>,
}

impl Cascade {
    pub(crate) fn build(sheet: &StyleSheet) -> Self {
        log::trace!(
            "rebuilding style cascade of {:?} over {} inherited sheet(s)",
            sheet.name(),
            sheet.inherited().len()
        );
        Self {
            links: build_tables(sheet.inherited(), links, sheet.link_styles()),
            quads: build_tables(sheet.inherited(), quads, sheet.quad_styles()),
            custom_text_styles: build_tables(
                sheet.inherited(),
                custom_text_styles,
                sheet.custom_text_styles(),
            ),
        }
    }
}

fn links(cascade: &Cascade) -> &Tables<LinkSubclass> {
    &cascade.links
}

fn quads(cascade: &Cascade) -> &Tables<QuadStyle> {
    &cascade.quads
}

fn custom_text_styles(cascade: &Cascade) -> &Tables<CustomTextStyle> {
    &cascade.custom_text_styles
}

fn build_tables<T: Identified + Clone>(
    parents: &[Arc<StyleSheet>],
    pick: fn(&Cascade) -> &Tables<T>,
    own: &[T],
) -> Tables<T> {
    let mut inherited = CascadedTable::default();
    // Later parents win over earlier ones.
    for parent in parents {
        for entry in pick(parent.cascade()).cascaded.entries() {
            let source = match &entry.source {
                StyleSource::Local => StyleSource::Inherited(Arc::clone(parent)),
                StyleSource::Inherited(sheet) => StyleSource::Inherited(Arc::clone(sheet)),
            };
            inherited.insert(entry.style.clone(), source);
        }
    }

    let mut cascaded = inherited.clone();
    // Within one sheet the first definition of a key wins.
    let mut seen = HashSet::new();
    for style in own {
        if seen.insert(style.key()) {
            cascaded.insert(style.clone(), StyleSource::Local);
        } else {
            let key = style.key().as_str();
            log::debug!("ignoring duplicate style identifier {key:?}");
        }
    }

    Tables {
        inherited,
        cascaded,
    }
}
