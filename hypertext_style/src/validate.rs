// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::{Identified, StyleKey, StyleSheet};

/// Which table of a sheet an issue was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleTable {
    /// Link subclasses.
    Links,
    /// Quad styles.
    Quads,
    /// Custom tag styles.
    CustomTextStyles,
}

/// The kind of a [`ValidationIssue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum IssueKind {
    /// The identifier is defined more than once in the same table. Only the first definition is
    /// used.
    DuplicateIdentifier,
    /// A quad style has no sprite and will render as an empty box.
    MissingSprite,
    /// A quad links to a class that no link subclass defines; the default link style is used.
    UnknownLinkClass,
}

/// A problem with a style sheet that does not stop it from being used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    /// What is wrong.
    pub kind: IssueKind,
    /// The table containing the offending entry.
    pub table: StyleTable,
    /// The identifier of the offending entry.
    pub key: StyleKey,
}

impl core::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let key = self.key.as_str();
        match self.kind {
            IssueKind::DuplicateIdentifier => {
                write!(f, "{key:?} is defined more than once in {:?}", self.table)
            }
            IssueKind::MissingSprite => write!(f, "quad {key:?} has no sprite"),
            IssueKind::UnknownLinkClass => {
                write!(f, "quad {key:?} links to an unknown link class")
            }
        }
    }
}

impl StyleSheet {
    /// Reports problems with this sheet's own definitions.
    ///
    /// Issues are surfaced for authoring tools; processing tolerates all of them.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        duplicates(self.link_styles(), StyleTable::Links, &mut issues);
        duplicates(self.quad_styles(), StyleTable::Quads, &mut issues);
        duplicates(
            self.custom_text_styles(),
            StyleTable::CustomTextStyles,
            &mut issues,
        );
        for quad in self.quad_styles() {
            if quad.sprite().is_none() {
                issues.push(ValidationIssue {
                    kind: IssueKind::MissingSprite,
                    table: StyleTable::Quads,
                    key: quad.class_name().clone(),
                });
            }
            if let Some(class) = quad.link_class_name() {
                if self.link_style(class).is_none() {
                    issues.push(ValidationIssue {
                        kind: IssueKind::UnknownLinkClass,
                        table: StyleTable::Quads,
                        key: quad.class_name().clone(),
                    });
                }
            }
        }
        issues
    }
}

fn duplicates<T: Identified>(styles: &[T], table: StyleTable, issues: &mut Vec<ValidationIssue>) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for style in styles {
        let key = style.key();
        if !seen.insert(key) && reported.insert(key) {
            issues.push(ValidationIssue {
                kind: IssueKind::DuplicateIdentifier,
                table,
                key: key.clone(),
            });
        }
    }
}
