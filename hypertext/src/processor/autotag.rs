// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wrapping keywords of the input in link, quad and custom tag markup.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Write as _;

use hashbrown::HashSet;
use hypertext_style::TagName;
use regex::Regex;

use super::markup::{RegexCache, protected_spans_pattern};
use crate::{CaseMatchMode, KeywordCollection, KeywordCollectionClass};

/// The tag a keyword collection is assigned to create.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum KeywordRole {
    Link,
    Quad,
    Tag,
}

/// One keyword and the markup replacing its matches.
#[derive(Debug)]
struct Rule<'a> {
    keyword: &'a str,
    role: KeywordRole,
    class_name: Option<&'a str>,
    case_match: CaseMatchMode,
}

impl Rule<'_> {
    fn pattern(&self) -> String {
        let escaped = regex::escape(self.keyword);
        match self.case_match {
            CaseMatchMode::IgnoreCase => format!("(?i){escaped}"),
            CaseMatchMode::CaseSensitive => escaped,
        }
    }

    fn push_replacement(&self, matched: &str, out: &mut String) {
        match self.role {
            KeywordRole::Link => {
                let _ = write!(out, "<a name=\"{}\"", self.keyword);
                if let Some(class_name) = self.class_name {
                    let _ = write!(out, " class=\"{class_name}\"");
                }
                let _ = write!(out, ">{matched}</a>");
            }
            KeywordRole::Quad => {
                let _ = write!(out, "<quad class=\"{}\" />", self.keyword);
            }
            KeywordRole::Tag => {
                let tag = self.class_name.unwrap_or_default();
                let _ = write!(out, "<{tag}>{matched}</{tag}>");
            }
        }
    }
}

/// Builds the keyword rules of all roles, in role order and then collection order.
///
/// A collection assigned more than once only counts for its first assignment, and a keyword only
/// counts for the first collection containing it.
fn collect_rules<'a>(roles: &[(KeywordRole, &'a [KeywordCollectionClass])]) -> Vec<Rule<'a>> {
    let mut assigned: Vec<(&Arc<KeywordCollection>, KeywordRole)> = Vec::new();
    let mut seen = HashSet::new();
    let mut rules = Vec::new();
    for &(role, classes) in roles {
        for class in classes {
            let collection = class.collection();
            if let Some((_, first)) = assigned.iter().find(|(c, _)| Arc::ptr_eq(c, collection)) {
                if *first != role {
                    log::error!(
                        "keyword collection used for both {first:?} and {role:?} keywords; \
                         only the {first:?} assignment is used"
                    );
                }
                continue;
            }
            assigned.push((collection, role));

            if role == KeywordRole::Tag {
                match class.class_name().map(TagName::new) {
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        log::debug!("skipping tag keywords: {err}");
                        continue;
                    }
                    None => {
                        log::debug!("skipping tag keywords without a tag name");
                        continue;
                    }
                }
            }

            for keyword in collection.keywords() {
                if keyword.contains(['<', '>', '"']) {
                    log::debug!("skipping keyword {keyword:?} containing markup characters");
                    continue;
                }
                if seen.insert(keyword.as_str()) {
                    rules.push(Rule {
                        keyword,
                        role,
                        class_name: class.class_name(),
                        case_match: collection.case_match(),
                    });
                }
            }
        }
    }
    rules
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Copies `gap` to `out`, replacing every whole-word match of `regex`.
fn substitute_in_gap(gap: &str, regex: &Regex, rule: &Rule<'_>, out: &mut String) {
    let mut copied = 0;
    let mut pos = 0;
    while let Some(m) = regex.find_at(gap, pos) {
        let before = gap[..m.start()].chars().next_back();
        let after = gap[m.end()..].chars().next();
        if m.is_empty() || before.is_some_and(is_word_char) || after.is_some_and(is_word_char) {
            pos = m.start() + gap[m.start()..].chars().next().map_or(1, char::len_utf8);
            if pos > gap.len() {
                break;
            }
            continue;
        }
        out.push_str(&gap[copied..m.start()]);
        rule.push_replacement(m.as_str(), out);
        copied = m.end();
        pos = m.end();
    }
    out.push_str(&gap[copied..]);
}

/// Wraps whole-word keyword matches in markup, outside of existing tags and elements.
///
/// `protected_tags` names the custom tags whose elements, like links, are never substituted into.
pub(super) fn substitute_keywords(
    text: &mut String,
    roles: &[(KeywordRole, &[KeywordCollectionClass])],
    protected_tags: &[&str],
    regexes: &mut RegexCache,
    buffer: &mut String,
) {
    let rules = collect_rules(roles);
    if rules.is_empty() {
        return;
    }
    let Some(protected) = regexes.get(protected_spans_pattern(protected_tags.iter().copied()))
    else {
        return;
    };

    for rule in &rules {
        let Some(regex) = regexes.get(rule.pattern()) else {
            continue;
        };
        buffer.clear();
        let mut copied = 0;
        for span in protected.find_iter(text) {
            substitute_in_gap(&text[copied..span.start()], &regex, rule, buffer);
            buffer.push_str(span.as_str());
            copied = span.end();
        }
        substitute_in_gap(&text[copied..], &regex, rule, buffer);
        core::mem::swap(text, buffer);
    }
    log::trace!("applied {} keyword rule(s)", rules.len());
}
