// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use crate::{Error, Identified, StyleKey};

/// The image drawn for a quad. Only its name and proportions matter to markup processing.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    name: Arc<str>,
    width: f32,
    height: f32,
}

impl Sprite {
    /// Creates a sprite description.
    pub fn new(name: &str, width: f32, height: f32) -> Self {
        Self {
            name: Arc::from(name),
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// The sprite name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width divided by height, or 1 for degenerate sprites.
    pub fn aspect_ratio(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// An inline image placeholder style, selected in markup with `<quad class="...">`.
///
/// A quad may carry a link, in which case every quad of this class is wrapped in
/// `<a name="link_id" class="link_class_name">`.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadStyle {
    class_name: StyleKey,
    sprite: Option<Sprite>,
    size_scalar: f32,
    vertical_offset: f32,
    respect_colorization: bool,
    link_id: Option<Arc<str>>,
    link_class_name: Option<Arc<str>>,
}

impl QuadStyle {
    /// Creates a quad style with no sprite and a size scalar of 1.
    pub fn new(class_name: &str) -> Result<Self, Error> {
        Ok(Self {
            class_name: StyleKey::new(class_name)?,
            sprite: None,
            size_scalar: 1.0,
            vertical_offset: 0.0,
            respect_colorization: false,
            link_id: None,
            link_class_name: None,
        })
    }

    /// Returns this style with a sprite.
    #[must_use]
    pub fn with_sprite(mut self, sprite: Sprite) -> Self {
        self.sprite = Some(sprite);
        self
    }

    /// Returns this style with a size scalar (clamped to be non-negative).
    #[must_use]
    pub fn with_size_scalar(mut self, size_scalar: f32) -> Self {
        self.size_scalar = size_scalar.max(0.0);
        self
    }

    /// Returns this style with a vertical offset relative to the font size.
    #[must_use]
    pub fn with_vertical_offset(mut self, offset: f32) -> Self {
        self.vertical_offset = offset;
        self
    }

    /// Returns this style with colorization enabled or disabled.
    #[must_use]
    pub fn with_respect_colorization(mut self, respect: bool) -> Self {
        self.respect_colorization = respect;
        self
    }

    /// Returns this style linked to `link_id`, optionally using a link subclass.
    ///
    /// An empty `link_id` removes the link.
    #[must_use]
    pub fn with_link(mut self, link_id: &str, link_class_name: Option<&str>) -> Self {
        if link_id.is_empty() {
            self.link_id = None;
            self.link_class_name = None;
        } else {
            self.link_id = Some(Arc::from(link_id));
            self.link_class_name = link_class_name.filter(|c| !c.is_empty()).map(Arc::from);
        }
        self
    }

    /// The class name.
    #[inline]
    pub fn class_name(&self) -> &StyleKey {
        &self.class_name
    }

    /// The sprite, if assigned.
    #[inline]
    pub fn sprite(&self) -> Option<&Sprite> {
        self.sprite.as_ref()
    }

    /// The quad size relative to the font size.
    #[inline]
    pub fn size_scalar(&self) -> f32 {
        self.size_scalar
    }

    /// The vertical offset relative to the font size.
    #[inline]
    pub fn vertical_offset(&self) -> f32 {
        self.vertical_offset
    }

    /// Whether the quad is tinted by the text color.
    #[inline]
    pub fn respects_colorization(&self) -> bool {
        self.respect_colorization
    }

    /// The link target, if this quad is a link.
    #[inline]
    pub fn link_id(&self) -> Option<&str> {
        self.link_id.as_deref()
    }

    /// The link subclass used when this quad is a link.
    #[inline]
    pub fn link_class_name(&self) -> Option<&str> {
        self.link_class_name.as_deref()
    }

    /// The width of the quad relative to its size: the sprite's aspect ratio.
    pub fn width_ratio(&self) -> f32 {
        self.sprite.as_ref().map_or(1.0, Sprite::aspect_ratio)
    }
}

impl Identified for QuadStyle {
    fn key(&self) -> &StyleKey {
        &self.class_name
    }
}

#[cfg(test)]
mod tests {
    use super::{QuadStyle, Sprite};

    #[test]
    fn width_ratio_follows_sprite() {
        let quad = QuadStyle::new("wide").unwrap();
        assert_eq!(quad.width_ratio(), 1.0);
        let quad = quad.with_sprite(Sprite::new("banner", 64.0, 32.0));
        assert_eq!(quad.width_ratio(), 2.0);
        assert_eq!(Sprite::new("flat", 10.0, 0.0).aspect_ratio(), 1.0);
    }

    #[test]
    fn empty_link_id_clears_link() {
        let quad = QuadStyle::new("icon")
            .unwrap()
            .with_link("home", Some(""))
            .with_link("", Some("nav"));
        assert_eq!(quad.link_id(), None);
        assert_eq!(quad.link_class_name(), None);

        let quad = QuadStyle::new("icon").unwrap().with_link("home", Some(""));
        assert_eq!(quad.link_id(), Some("home"));
        assert_eq!(
            quad.link_class_name(),
            None,
            "empty class means default link style"
        );
    }
}
