// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt::Write as _;

use crate::Color;

/// Font style of a run of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontStyle {
    /// Regular text.
    #[default]
    Normal,
    /// `<b>`.
    Bold,
    /// `<i>`.
    Italic,
    /// `<b><i>`.
    BoldAndItalic,
}

impl FontStyle {
    /// Returns `true` for bold styles.
    #[inline]
    pub const fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldAndItalic)
    }

    /// Returns `true` for italic styles.
    #[inline]
    pub const fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldAndItalic)
    }
}

/// Parameters that decide how a [`RichTextStyle`] is written out as markup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkupContext {
    /// The font size that a size scalar of 1 corresponds to.
    pub scaled_font_size: f32,
    /// Whether `<size>` tags take effect. They only do for dynamic fonts.
    pub dynamic_font: bool,
}

impl MarkupContext {
    /// Creates a context for the given scaled font size with dynamic font sizing enabled.
    #[inline]
    pub const fn new(scaled_font_size: f32) -> Self {
        Self {
            scaled_font_size,
            dynamic_font: true,
        }
    }
}

/// Visual style of a tagged run of text: a size scalar, a font style and an optional replacement
/// color.
///
/// A style is a pure function of its fields and renders itself as rich text open/close tags:
///
/// ```
/// use hypertext_style::{Color, FontStyle, MarkupContext, RichTextStyle};
///
/// let style = RichTextStyle::new(1.5, FontStyle::Bold, Some(Color::rgba8(255, 0, 0, 255)));
/// let ctx = MarkupContext::new(20.0);
/// assert_eq!(style.open_tags(ctx), "<size=30><color=#FF0000FF><b>");
/// assert_eq!(style.close_tags(ctx), "</b></color></size>");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RichTextStyle {
    size_scalar: f32,
    font_style: FontStyle,
    replacement_color: Option<Color>,
}

impl Default for RichTextStyle {
    fn default() -> Self {
        Self {
            size_scalar: 1.0,
            font_style: FontStyle::Normal,
            replacement_color: None,
        }
    }
}

impl RichTextStyle {
    /// Creates a style. Negative (or NaN) size scalars are clamped to zero.
    pub fn new(size_scalar: f32, font_style: FontStyle, replacement_color: Option<Color>) -> Self {
        Self {
            size_scalar: clamp_scalar(size_scalar),
            font_style,
            replacement_color,
        }
    }

    /// Returns this style with a different size scalar.
    #[must_use]
    pub fn with_size_scalar(mut self, size_scalar: f32) -> Self {
        self.size_scalar = clamp_scalar(size_scalar);
        self
    }

    /// Returns this style with a different font style.
    #[must_use]
    pub fn with_font_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }

    /// Returns this style with a different replacement color.
    #[must_use]
    pub fn with_replacement_color(mut self, color: Option<Color>) -> Self {
        self.replacement_color = color;
        self
    }

    /// The size multiplier relative to the surrounding font size.
    #[inline]
    pub fn size_scalar(&self) -> f32 {
        self.size_scalar
    }

    /// The font style.
    #[inline]
    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }

    /// The color replacing the text color, if any.
    #[inline]
    pub fn replacement_color(&self) -> Option<Color> {
        self.replacement_color
    }

    /// Returns `true` if this style changes the font size.
    #[inline]
    pub fn scales_size(&self) -> bool {
        self.size_scalar != 1.0
    }

    /// The absolute font size written in the `<size>` tag, if one is written at all.
    pub fn absolute_size(&self, ctx: MarkupContext) -> Option<i32> {
        (ctx.dynamic_font && self.scales_size())
            .then(|| round_size(ctx.scaled_font_size * self.size_scalar))
    }

    /// Appends the opening tags of this style to `out`.
    pub fn push_open_tags(&self, out: &mut String, ctx: MarkupContext) {
        if let Some(size) = self.absolute_size(ctx) {
            let _ = write!(out, "<size={size}>");
        }
        if let Some(color) = self.replacement_color {
            let _ = write!(out, "<color={color}>");
        }
        if self.font_style.is_bold() {
            out.push_str("<b>");
        }
        if self.font_style.is_italic() {
            out.push_str("<i>");
        }
    }

    /// Appends the closing tags of this style to `out`, in reverse order of the opening tags.
    pub fn push_close_tags(&self, out: &mut String, ctx: MarkupContext) {
        if self.font_style.is_italic() {
            out.push_str("</i>");
        }
        if self.font_style.is_bold() {
            out.push_str("</b>");
        }
        if self.replacement_color.is_some() {
            out.push_str("</color>");
        }
        if self.absolute_size(ctx).is_some() {
            out.push_str("</size>");
        }
    }

    /// Returns the opening tags of this style.
    pub fn open_tags(&self, ctx: MarkupContext) -> String {
        let mut out = String::new();
        self.push_open_tags(&mut out, ctx);
        out
    }

    /// Returns the closing tags of this style.
    pub fn close_tags(&self, ctx: MarkupContext) -> String {
        let mut out = String::new();
        self.push_close_tags(&mut out, ctx);
        out
    }
}

/// Rounds a font size to the integer written in a `<size>` tag.
#[inline]
#[expect(
    clippy::cast_possible_truncation,
    reason = "font sizes are far inside the i32 range"
)]
pub fn round_size(size: f32) -> i32 {
    size.round() as i32
}

fn clamp_scalar(size_scalar: f32) -> f32 {
    if size_scalar.is_nan() {
        0.0
    } else {
        size_scalar.max(0.0)
    }
}
