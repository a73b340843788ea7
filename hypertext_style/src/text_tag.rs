// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Error, Identified, RichTextStyle, StyleKey, TagName};

/// A user-defined markup tag, `<tag>...</tag>`, lowered to the markup of a [`RichTextStyle`].
#[derive(Clone, Debug, PartialEq)]
pub struct CustomTextStyle {
    tag: TagName,
    style: RichTextStyle,
    vertical_offset: f32,
}

impl CustomTextStyle {
    /// Creates a custom tag style.
    ///
    /// Fails if `tag` is empty, contains non-word characters, or is a reserved rich text tag.
    pub fn new(tag: &str, style: RichTextStyle) -> Result<Self, Error> {
        Ok(Self {
            tag: TagName::new(tag)?,
            style,
            vertical_offset: 0.0,
        })
    }

    /// Returns this style with a vertical offset relative to the font size.
    #[must_use]
    pub fn with_vertical_offset(mut self, offset: f32) -> Self {
        self.vertical_offset = offset;
        self
    }

    /// The tag name.
    #[inline]
    pub fn tag(&self) -> &TagName {
        &self.tag
    }

    /// The text style written in place of the tag.
    #[inline]
    pub fn style(&self) -> &RichTextStyle {
        &self.style
    }

    /// The vertical offset relative to the font size.
    #[inline]
    pub fn vertical_offset(&self) -> f32 {
        self.vertical_offset
    }
}

impl Identified for CustomTextStyle {
    fn key(&self) -> &StyleKey {
        self.tag.key()
    }
}
