// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styles for HyperText markup and the cascading style sheets that hold them.
//!
//! - [`RichTextStyle`] is a value describing a tagged run of text and renders itself as rich text
//!   open/close tags.
//! - [`LinkSubclass`], [`QuadStyle`] and [`CustomTextStyle`] are the named entries of a sheet,
//!   keyed by case-insensitive [`StyleKey`]s.
//! - [`StyleSheet`] inherits from an ordered list of parent sheets and resolves cascaded tables
//!   and scalar properties.
//!
//! ## Cascade
//!
//! For tables, each parent's cascaded table is merged in list order (later parents win), then the
//! sheet's own entries are overlaid (own entries always win). Scalar properties do not merge: a
//! property marked as overriding uses the local value, otherwise the value of the last parent.
//!
//! ```
//! use std::sync::Arc;
//! use hypertext_style::{LinkStyle, LinkSubclass, StyleSheet, StyleSource};
//!
//! let mut parent = StyleSheet::new("parent");
//! parent.push_link_style(LinkSubclass::new("Glossary", LinkStyle::default()).unwrap());
//! let parent = Arc::new(parent);
//!
//! let mut child = StyleSheet::new("child");
//! child.push_inherited(Arc::clone(&parent));
//! child.push_link_style(LinkSubclass::new("glossary", LinkStyle::default()).unwrap());
//!
//! let cascaded = child.cascaded_link_styles();
//! assert_eq!(cascaded.len(), 1);
//! assert!(matches!(cascaded.source("GLOSSARY"), Some(StyleSource::Local)));
//! ```
//!
//! ## Features
//!
//! - `serde`: Implement `Serialize` and `Deserialize` for the plain value types.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod cascade;
mod color;
mod error;
mod identifier;
mod link;
mod quad;
mod rich_text;
mod sheet;
mod text_tag;
mod validate;

#[cfg(test)]
mod tests;

pub use cascade::{CascadedEntry, CascadedTable, StyleSource};
pub use color::Color;
pub use error::{Error, ErrorKind};
pub use identifier::{Identified, RESERVED_TAG_NAMES, StyleKey, TagName};
pub use link::{ColorTintMode, LinkColors, LinkState, LinkStyle, LinkSubclass};
pub use quad::{QuadStyle, Sprite};
pub use rich_text::{FontStyle, MarkupContext, RichTextStyle, round_size};
pub use sheet::{Overridable, SheetProperties, StyleSheet};
pub use text_tag::CustomTextStyle;
pub use validate::{IssueKind, StyleTable, ValidationIssue};
