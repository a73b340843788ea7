// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `hypertext`.
//!
//! - The `util` module holds the style sheet and keyword fixtures shared by the tests.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so every module can share `util`.
//! - Put the "topic" of a test at the start of its name, e.g. `link_keeps_class_name`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod keywords;
mod markup;
mod styles;
mod util;
