// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Error, ErrorKind};

/// An 8-bit-per-channel RGBA color.
///
/// Displays as `#RRGGBBAA`, the form accepted by the rich text `<color>` tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgba8(255, 255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgba8(0, 0, 0, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba8(0, 0, 0, 0);

    /// Creates a color from its channels.
    #[inline]
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    ///
    /// ```
    /// use hypertext_style::Color;
    ///
    /// assert_eq!(Color::from_hex("#ff8000").unwrap(), Color::rgba8(255, 128, 0, 255));
    /// assert_eq!(Color::from_hex("FF800080").unwrap().a, 128);
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let invalid = || Error::new(ErrorKind::InvalidColor, s);
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba8(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Multiplies each channel by the corresponding channel of `other`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the rounded product of two channels divided by 255 fits a channel"
    )]
    pub fn multiply(self, other: Self) -> Self {
        let mul = |x: u8, y: u8| ((u16::from(x) * u16::from(y) + 127) / 255) as u8;
        Self::rgba8(
            mul(self.r, other.r),
            mul(self.g, other.g),
            mul(self.b, other.b),
            mul(self.a, other.a),
        )
    }

    /// Scales every channel by `factor`, saturating at full intensity.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the scaled channel is clamped to 0..=255 before the cast"
    )]
    pub fn scale(self, factor: f32) -> Self {
        let scale = |x: u8| (f32::from(x) * factor.max(0.0)).round().min(255.0) as u8;
        Self::rgba8(scale(self.r), scale(self.g), scale(self.b), scale(self.a))
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self { r, g, b, a } = *self;
        write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}
