// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Patterns for the markup the processor rewrites.

use alloc::string::String;
use core::fmt::Write as _;
use std::sync::OnceLock;

use hashbrown::HashMap;
use regex::Regex;

/// `<a name="..." class="...">...</a>`: name, optional class and the link text.
pub(super) fn link_element() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| {
        Regex::new(r#"(?is)<a\s+name\s*=\s*"([^"]*)"(?:\s+class\s*=\s*"([^"]*)")?\s*>(.*?)</a>"#)
            .expect("link regex should compile")
    })
}

/// `<quad ...>` or `<quad ... />`: the attributes and the optional self-closing slash.
pub(super) fn quad_tag() -> &'static Regex {
    static QUAD: OnceLock<Regex> = OnceLock::new();
    QUAD.get_or_init(|| Regex::new(r"<quad\b([^>]*?)\s*(/?)>").expect("quad regex should compile"))
}

/// `class="..."` inside a tag.
fn class_attribute() -> &'static Regex {
    static CLASS: OnceLock<Regex> = OnceLock::new();
    CLASS.get_or_init(|| {
        Regex::new(r#"\bclass\s*=\s*"([^"]*)""#).expect("class attribute regex should compile")
    })
}

/// `size=` inside a tag.
fn size_attribute() -> &'static Regex {
    static SIZE_ATTR: OnceLock<Regex> = OnceLock::new();
    SIZE_ATTR
        .get_or_init(|| Regex::new(r"\bsize\s*=").expect("size attribute regex should compile"))
}

/// `<size=N>` or `<size=N%>`: the number and the optional percent sign.
pub(super) fn size_tag() -> &'static Regex {
    static SIZE: OnceLock<Regex> = OnceLock::new();
    SIZE.get_or_init(|| {
        Regex::new(r"<size=(-?\d+(?:\.\d+)?)(%?)>").expect("size regex should compile")
    })
}

/// The value of the `class` attribute in the attributes of a tag.
pub(super) fn class_of(attributes: &str) -> Option<&str> {
    class_attribute()
        .captures(attributes)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Returns `true` if the attributes of a tag already set a size.
pub(super) fn has_size(attributes: &str) -> bool {
    size_attribute().is_match(attributes)
}

/// The pattern of a custom tag element, `<tag>...</tag>`, capturing the enclosed text.
pub(super) fn custom_tag_pattern(tag: &str) -> String {
    let tag = regex::escape(tag);
    format!("(?is)<{tag}>(.*?)</{tag}>")
}

/// The pattern matching every span keywords must not be substituted into: link elements, the
/// elements of the given custom tags, and any other single tag.
pub(super) fn protected_spans_pattern<'a>(tags: impl IntoIterator<Item = &'a str>) -> String {
    let mut pattern = String::from(r"(?is)<a\s[^>]*>.*?</a>");
    for tag in tags {
        let tag = regex::escape(tag);
        let _ = write!(pattern, "|<{tag}>.*?</{tag}>");
    }
    pattern.push_str(r"|<[^<>]+>");
    pattern
}

/// Regexes built from style sheet and keyword data, compiled once per pattern.
#[derive(Debug, Default)]
pub(super) struct RegexCache {
    compiled: HashMap<String, Regex>,
}

impl RegexCache {
    /// Keywords come and go, so the cache is dropped once it grows past this many patterns.
    const CAPACITY: usize = 512;

    /// Returns the compiled regex for `pattern`, or `None` (after logging) if it does not compile.
    pub(super) fn get(&mut self, pattern: String) -> Option<Regex> {
        if let Some(regex) = self.compiled.get(&pattern) {
            return Some(regex.clone());
        }
        match Regex::new(&pattern) {
            Ok(regex) => {
                if self.compiled.len() >= Self::CAPACITY {
                    self.compiled.clear();
                }
                self.compiled.insert(pattern, regex.clone());
                Some(regex)
            }
            Err(err) => {
                log::error!("failed to compile markup pattern {pattern:?}: {err}");
                None
            }
        }
    }
}
