// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index Range is a small crate for tracking inclusive index ranges over marked-up text while that
//! text is being rewritten.
//!
//! - [`IndexRange`] is an inclusive `[start, end]` range over characters or vertices.
//! - [`TextEdit`] describes one replacement in a string and shifts ranges that lie after it.
//! - [`CharIndexMap`] converts UTF-8 byte offsets into character indices.
//! - [`VertexRanges`] maps character ranges to glyph-quad vertex ranges, including the copies added
//!   by mesh effects such as shadows and outlines.
//!
//! ## Example
//!
//! ```
//! use index_range::{IndexRange, TextEdit};
//!
//! // "a <b>dog</b>": "dog" covers bytes 5..=7.
//! let mut dog = IndexRange::new(5, 7).unwrap();
//! // Replacing "<b>" (bytes 2..5) with "<color=#ff0000ff>" (17 bytes) shifts it by 14.
//! dog.apply_edit(&TextEdit::replace(2..5, 17));
//! assert_eq!((dog.start(), dog.end()), (19, 21));
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward
//!   compatibility.
//! - `serde`: Implement `Serialize` and `Deserialize` for [`IndexRange`].
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
#![no_std]

extern crate alloc;

mod char_map;
mod edit;
mod error;
mod index_range;
mod vertex;

pub use crate::char_map::CharIndexMap;
pub use crate::edit::TextEdit;
pub use crate::error::{Error, ErrorKind};
pub use crate::index_range::IndexRange;
pub use crate::vertex::{VERTICES_PER_GLYPH, VertexRanges};
