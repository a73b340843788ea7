// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HyperText resolves a small markup language for rich text with hyperlinks, custom tags and
//! inline image quads.
//!
//! A [`HyperTextProcessor`] takes an input text, a [`StyleSheet`](hypertext_style::StyleSheet)
//! and optional [`KeywordCollection`]s and produces:
//!
//! - an output text in the primitive rich text vocabulary understood by a renderer (`<b>`, `<i>`,
//!   `<color=...>`, `<size=...>`, plus `<quad ...>` placeholders), and
//! - the [`Link`]s, [`CustomTag`]s and [`Quad`]s found in the input, each with the
//!   [`IndexRange`](index_range::IndexRange) of characters it covers in the output.
//!
//! ## Markup
//!
//! - `<a name="id" class="c">text</a>`: a link to `id` styled by the link subclass `c`.
//! - `<tag>text</tag>`: a custom tag defined by the style sheet.
//! - `<quad class="c" />`: an inline image of the quad class `c`.
//! - `<size=50%>text</size>`: a size relative to the scaled font size.
//!
//! Unknown tags and classes are left unstyled; processing never fails.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use hypertext::{HyperTextProcessor, ProcessorSettings};
//! use hypertext_style::{CustomTextStyle, FontStyle, RichTextStyle, StyleSheet};
//!
//! let mut styles = StyleSheet::new("styles");
//! styles.push_custom_text_style(
//!     CustomTextStyle::new("em", RichTextStyle::default().with_font_style(FontStyle::Bold))
//!         .unwrap(),
//! );
//!
//! let mut processor = HyperTextProcessor::with_styles(
//!     r#"Read the <em>manual</em> or <a name="help">ask</a>."#,
//!     Arc::new(styles),
//! );
//! assert_eq!(processor.output_text(), "Read the <b>manual</b> or ask.");
//! assert_eq!(processor.custom_tags()[0].character_indices.start(), 12);
//! assert_eq!(processor.links()[0].name, "help");
//! ```
//!
//! ## Features
//!
//! - `serde`: Implement `Serialize` and `Deserialize` for settings, keyword options and the style
//!   value types.
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

mod geometry;
mod keywords;
mod occurrence;
mod processor;
mod settings;
mod source;

pub use geometry::LinkHitboxes;
pub use keywords::{
    CaseMatchMode, Glossary, GlossaryEntry, KeywordCollection, KeywordCollectionClass,
    KeywordSource, TextDocument, WordPrioritization,
};
pub use occurrence::{CustomTag, Link, Quad, TagOccurrence};
pub use processor::HyperTextProcessor;
pub use settings::ProcessorSettings;
pub use source::{TextCell, TextSource};

pub use hypertext_style;
pub use index_range;
pub use peniko::kurbo;
