// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hypertext_style::{MarkupContext, StyleSheet};

/// Text settings a [`HyperTextProcessor`](crate::HyperTextProcessor) resolves markup against.
///
/// ```
/// use hypertext::ProcessorSettings;
///
/// let settings = ProcessorSettings::new()
///     .with_reference_font_size(20)
///     .with_scale_factor(1.5);
/// assert_eq!(settings.scaled_font_size(), 30.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessorSettings {
    reference_font_size: u32,
    scale_factor: f32,
    rich_text: bool,
    dynamic_font: bool,
}

impl Default for ProcessorSettings {
    fn default() -> Self {
        Self {
            reference_font_size: 14,
            scale_factor: 1.0,
            rich_text: true,
            dynamic_font: true,
        }
    }
}

impl ProcessorSettings {
    /// Default settings: 14pt, unscaled, rich text with a dynamic font.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings whose reference font size is the cascaded font size of `styles`.
    pub fn for_styles(styles: &StyleSheet) -> Self {
        Self::default().with_reference_font_size(styles.cascaded_font_size())
    }

    /// Returns these settings with a different reference font size.
    #[must_use]
    pub fn with_reference_font_size(mut self, size: u32) -> Self {
        self.reference_font_size = size;
        self
    }

    /// Returns these settings with a different scale factor (clamped to be non-negative).
    #[must_use]
    pub fn with_scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor.max(0.0);
        self
    }

    /// Returns these settings with rich text enabled or disabled.
    #[must_use]
    pub fn with_rich_text(mut self, rich_text: bool) -> Self {
        self.rich_text = rich_text;
        self
    }

    /// Returns these settings with dynamic font sizing enabled or disabled.
    #[must_use]
    pub fn with_dynamic_font(mut self, dynamic_font: bool) -> Self {
        self.dynamic_font = dynamic_font;
        self
    }

    /// The font size of untagged text.
    #[inline]
    pub fn reference_font_size(&self) -> u32 {
        self.reference_font_size
    }

    /// The factor the renderer scales text by, for example to fit its bounds.
    #[inline]
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Whether style markup is written into the output.
    #[inline]
    pub fn rich_text(&self) -> bool {
        self.rich_text
    }

    /// Whether the font supports `<size>` tags.
    #[inline]
    pub fn dynamic_font(&self) -> bool {
        self.dynamic_font
    }

    /// `reference_font_size * scale_factor`.
    #[inline]
    pub fn scaled_font_size(&self) -> f32 {
        self.reference_font_size as f32 * self.scale_factor
    }

    /// The context styles are written out in.
    #[inline]
    pub fn markup_context(&self) -> MarkupContext {
        MarkupContext {
            scaled_font_size: self.scaled_font_size(),
            dynamic_font: self.dynamic_font,
        }
    }
}
