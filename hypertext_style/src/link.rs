// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Color, Error, Identified, RichTextStyle, StyleKey};

/// Interaction state of a link, used to pick its tint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LinkState {
    /// Not interacted with.
    #[default]
    Normal,
    /// Hovered.
    Highlighted,
    /// Pressed.
    Pressed,
    /// The owning text is not interactable.
    Disabled,
}

/// How a link's state color combines with the vertex color of its glyphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorTintMode {
    /// The state color replaces the glyph color.
    Constant,
    /// The state color multiplies the glyph color.
    #[default]
    Multiplicative,
}

/// Per-state link colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkColors {
    /// Color when idle.
    pub normal: Color,
    /// Color when hovered.
    pub highlighted: Color,
    /// Color when pressed.
    pub pressed: Color,
    /// Color when the text is not interactable.
    pub disabled: Color,
}

impl Default for LinkColors {
    fn default() -> Self {
        Self {
            normal: Color::rgba8(0, 102, 204, 255),
            highlighted: Color::rgba8(51, 153, 255, 255),
            pressed: Color::rgba8(0, 61, 122, 255),
            disabled: Color::rgba8(128, 128, 128, 128),
        }
    }
}

impl LinkColors {
    /// The color for `state`.
    #[inline]
    pub fn for_state(&self, state: LinkState) -> Color {
        match state {
            LinkState::Normal => self.normal,
            LinkState::Highlighted => self.highlighted,
            LinkState::Pressed => self.pressed,
            LinkState::Disabled => self.disabled,
        }
    }
}

/// The style of a link: text markup plus interactive tinting.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkStyle {
    /// Markup written around the link text.
    pub text_style: RichTextStyle,
    /// Per-state tint colors.
    pub colors: LinkColors,
    /// Multiplier applied to the state color.
    pub color_multiplier: f32,
    /// How the state color combines with glyph colors.
    pub tint_mode: ColorTintMode,
    /// Duration of the transition between state colors, in seconds.
    pub fade_duration: f32,
    /// Vertical offset of the link glyphs, relative to the font size.
    pub vertical_offset: f32,
}

impl Default for LinkStyle {
    fn default() -> Self {
        Self {
            text_style: RichTextStyle::default(),
            colors: LinkColors::default(),
            color_multiplier: 1.0,
            tint_mode: ColorTintMode::default(),
            fade_duration: 0.1,
            vertical_offset: 0.0,
        }
    }
}

impl LinkStyle {
    /// Returns the tinted color of a glyph whose own color is `glyph` while the link is in
    /// `state`.
    pub fn tint(&self, glyph: Color, state: LinkState) -> Color {
        let color = self.colors.for_state(state).scale(self.color_multiplier);
        match self.tint_mode {
            ColorTintMode::Constant => color,
            ColorTintMode::Multiplicative => glyph.multiply(color),
        }
    }
}

/// A named link style, selected in markup with `<a name="..." class="...">`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkSubclass {
    class_name: StyleKey,
    style: LinkStyle,
}

impl LinkSubclass {
    /// Creates a link subclass. The class name must not be empty.
    pub fn new(class_name: &str, style: LinkStyle) -> Result<Self, Error> {
        Ok(Self {
            class_name: StyleKey::new(class_name)?,
            style,
        })
    }

    /// The class name.
    #[inline]
    pub fn class_name(&self) -> &StyleKey {
        &self.class_name
    }

    /// The link style.
    #[inline]
    pub fn style(&self) -> &LinkStyle {
        &self.style
    }
}

impl Identified for LinkSubclass {
    fn key(&self) -> &StyleKey {
        &self.class_name
    }
}
