// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::hash::{Hash, Hasher};

use hashbrown::Equivalent;

use crate::{Error, ErrorKind};

/// Tag names understood by the rich text renderer, which custom tags may not reuse.
pub const RESERVED_TAG_NAMES: [&str; 7] = ["a", "b", "color", "i", "material", "quad", "size"];

/// A case-insensitive style identifier (a link class, quad class or custom tag name).
///
/// Equality and hashing ignore case; the original spelling is kept for display.
#[derive(Clone, Debug)]
pub struct StyleKey(Arc<str>);

impl StyleKey {
    /// Creates a key, rejecting empty identifiers.
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.is_empty() {
            return Err(Error::new(ErrorKind::EmptyIdentifier, name));
        }
        Ok(Self(Arc::from(name)))
    }

    /// The identifier as written.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if `name` equals this key, ignoring case.
    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        eq_ignore_case(&self.0, name)
    }
}

impl PartialEq for StyleKey {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.0, &other.0)
    }
}

impl Eq for StyleKey {}

impl Hash for StyleKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_case(&self.0, state);
    }
}

impl core::fmt::Display for StyleKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A borrowed identifier for looking up [`StyleKey`]s without allocating.
#[derive(Clone, Copy, Debug)]
pub(crate) struct KeyRef<'a>(pub(crate) &'a str);

impl Hash for KeyRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_case(self.0, state);
    }
}

impl Equivalent<StyleKey> for KeyRef<'_> {
    fn equivalent(&self, key: &StyleKey) -> bool {
        key.matches(self.0)
    }
}

/// A validated custom tag name.
///
/// Tag names consist of letters, digits and underscores and must not collide with
/// [`RESERVED_TAG_NAMES`] (compared case-insensitively).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TagName(StyleKey);

impl TagName {
    /// Validates `name` as a custom tag name.
    ///
    /// ```
    /// use hypertext_style::{ErrorKind, TagName};
    ///
    /// assert!(TagName::new("keyword").is_ok());
    /// assert_eq!(TagName::new("my-tag").unwrap_err().kind(), ErrorKind::InvalidTagName);
    /// assert_eq!(TagName::new("Size").unwrap_err().kind(), ErrorKind::ReservedTagName);
    /// ```
    pub fn new(name: &str) -> Result<Self, Error> {
        let key = StyleKey::new(name)?;
        if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(Error::new(ErrorKind::InvalidTagName, name));
        }
        if RESERVED_TAG_NAMES.iter().any(|r| eq_ignore_case(r, name)) {
            return Err(Error::new(ErrorKind::ReservedTagName, name));
        }
        Ok(Self(key))
    }

    /// The tag name as written.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The tag name as a style key.
    #[inline]
    pub fn key(&self) -> &StyleKey {
        &self.0
    }
}

impl core::fmt::Display for TagName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything stored in a style sheet table under an identifier.
pub trait Identified {
    /// The identifier of this entry.
    fn key(&self) -> &StyleKey;
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

fn hash_ignore_case<H: Hasher>(s: &str, state: &mut H) {
    for c in s.chars().flat_map(char::to_lowercase) {
        c.hash(state);
    }
    state.write_u8(0xff);
}
