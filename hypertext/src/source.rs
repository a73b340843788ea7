// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt::Debug;
use core::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

/// An external provider of input text, such as a localization table.
///
/// A processor re-reads the text whenever [`revision`](Self::revision) differs from the revision
/// it last processed.
pub trait TextSource: Debug {
    /// The current text.
    fn text(&self) -> Cow<'_, str>;

    /// A counter that changes whenever the text changes.
    fn revision(&self) -> u64;
}

/// A shareable, interior-mutable [`TextSource`].
///
/// ```
/// use std::sync::Arc;
/// use hypertext::{HyperTextProcessor, TextCell};
///
/// let cell = Arc::new(TextCell::new("Hello"));
/// let mut processor = HyperTextProcessor::new();
/// processor.set_text_source(cell.clone());
/// assert_eq!(processor.output_text(), "Hello");
///
/// cell.set_text("Bonjour");
/// assert_eq!(processor.output_text(), "Bonjour");
/// ```
#[derive(Debug, Default)]
pub struct TextCell {
    text: RwLock<String>,
    revision: AtomicU64,
}

impl TextCell {
    /// Creates a cell holding `text`.
    pub fn new(text: &str) -> Self {
        Self {
            text: RwLock::new(text.into()),
            revision: AtomicU64::new(0),
        }
    }

    /// Replaces the text and bumps the revision.
    pub fn set_text(&self, text: &str) {
        let mut guard = self.text.write().unwrap_or_else(PoisonError::into_inner);
        guard.clear();
        guard.push_str(text);
        self.revision.fetch_add(1, Ordering::Release);
    }
}

impl TextSource for TextCell {
    fn text(&self) -> Cow<'_, str> {
        let guard = self.text.read().unwrap_or_else(PoisonError::into_inner);
        Cow::Owned(guard.clone())
    }

    fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }
}
