// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::OnceLock;

use crate::cascade::{Cascade, CascadedTable};
use crate::{Color, CustomTextStyle, FontStyle, LinkStyle, LinkSubclass, QuadStyle};

/// A property value that may override the value inherited from parent sheets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overridable<T> {
    /// The locally defined value.
    pub value: T,
    /// Whether the local value wins over inherited ones.
    pub should_override: bool,
}

impl<T> Overridable<T> {
    /// A local value that yields to inherited values.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            should_override: false,
        }
    }

    /// A local value that overrides inherited values.
    #[inline]
    pub const fn overriding(value: T) -> Self {
        Self {
            value,
            should_override: true,
        }
    }

    /// Sets the local value and marks it as overriding.
    #[inline]
    pub fn set_overriding(&mut self, value: T) {
        self.value = value;
        self.should_override = true;
    }
}

/// Scalar properties of a [`StyleSheet`].
///
/// Each property cascades independently: see [`StyleSheet::cascaded_font_size`].
#[derive(Clone, Debug, PartialEq)]
pub struct SheetProperties {
    /// The font family name. `None` leaves the font to the renderer.
    pub font: Overridable<Option<Arc<str>>>,
    /// The font size in points.
    pub font_size: Overridable<u32>,
    /// The line spacing multiplier.
    pub line_spacing: Overridable<f32>,
    /// The font style of untagged text.
    pub font_style: Overridable<FontStyle>,
    /// The color of untagged text.
    pub text_color: Overridable<Color>,
    /// The style of links without a (known) class.
    pub default_link_style: Overridable<LinkStyle>,
    /// Extra space around link glyphs that still counts as hitting the link.
    pub link_hitbox_padding: Overridable<f32>,
}

impl Default for SheetProperties {
    fn default() -> Self {
        Self {
            font: Overridable::new(None),
            font_size: Overridable::new(14),
            line_spacing: Overridable::new(1.0),
            font_style: Overridable::new(FontStyle::Normal),
            text_color: Overridable::new(Color::rgba8(50, 50, 50, 255)),
            default_link_style: Overridable::new(LinkStyle::default()),
            link_hitbox_padding: Overridable::new(0.0),
        }
    }
}

/// A style sheet: named link, quad and custom tag styles plus scalar text properties, with
/// inheritance from an ordered list of parent sheets.
///
/// Parents are shared immutable values. Later parents take precedence over earlier ones, and the
/// sheet's own definitions take precedence over anything inherited. Since a parent cannot be
/// modified once shared, a sheet can never (transitively) inherit from itself.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use hypertext_style::{FontStyle, RichTextStyle, CustomTextStyle, StyleSheet};
///
/// let mut base = StyleSheet::new("base");
/// base.properties_mut().font_size.value = 20;
/// base.push_custom_text_style(
///     CustomTextStyle::new("em", RichTextStyle::default().with_font_style(FontStyle::Italic))
///         .unwrap(),
/// );
///
/// let mut child = StyleSheet::new("child");
/// child.push_inherited(Arc::new(base));
/// assert_eq!(child.cascaded_font_size(), 20);
/// assert!(child.custom_text_style("EM").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyleSheet {
    name: Arc<str>,
    inherited: Vec<Arc<Self>>,
    link_styles: Vec<LinkSubclass>,
    quad_styles: Vec<QuadStyle>,
    custom_text_styles: Vec<CustomTextStyle>,
    properties: SheetProperties,
    cascade: OnceLock<Cascade>,
}

impl StyleSheet {
    /// Creates an empty sheet with default properties.
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            ..Self::default()
        }
    }

    /// The sheet name, used in diagnostics.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Drops the memoized cascade. Every mutating method calls this.
    #[inline]
    pub fn invalidate(&mut self) {
        self.cascade.take();
    }

    /// The inherited sheets, lowest priority first.
    #[inline]
    pub fn inherited(&self) -> &[Arc<Self>] {
        &self.inherited
    }

    /// Replaces the inherited sheets.
    pub fn set_inherited(&mut self, inherited: Vec<Arc<Self>>) {
        self.inherited = inherited;
        self.invalidate();
    }

    /// Adds a sheet with higher priority than all current parents.
    pub fn push_inherited(&mut self, parent: Arc<Self>) {
        self.inherited.push(parent);
        self.invalidate();
    }

    /// The link subclasses defined by this sheet.
    #[inline]
    pub fn link_styles(&self) -> &[LinkSubclass] {
        &self.link_styles
    }

    /// Mutable access to this sheet's link subclasses.
    pub fn link_styles_mut(&mut self) -> &mut Vec<LinkSubclass> {
        self.invalidate();
        &mut self.link_styles
    }

    /// Defines a link subclass.
    pub fn push_link_style(&mut self, style: LinkSubclass) {
        self.link_styles_mut().push(style);
    }

    /// The quad styles defined by this sheet.
    #[inline]
    pub fn quad_styles(&self) -> &[QuadStyle] {
        &self.quad_styles
    }

    /// Mutable access to this sheet's quad styles.
    pub fn quad_styles_mut(&mut self) -> &mut Vec<QuadStyle> {
        self.invalidate();
        &mut self.quad_styles
    }

    /// Defines a quad style.
    pub fn push_quad_style(&mut self, style: QuadStyle) {
        self.quad_styles_mut().push(style);
    }

    /// The custom tag styles defined by this sheet.
    #[inline]
    pub fn custom_text_styles(&self) -> &[CustomTextStyle] {
        &self.custom_text_styles
    }

    /// Mutable access to this sheet's custom tag styles.
    pub fn custom_text_styles_mut(&mut self) -> &mut Vec<CustomTextStyle> {
        self.invalidate();
        &mut self.custom_text_styles
    }

    /// Defines a custom tag style.
    pub fn push_custom_text_style(&mut self, style: CustomTextStyle) {
        self.custom_text_styles_mut().push(style);
    }

    /// This sheet's own scalar properties.
    #[inline]
    pub fn properties(&self) -> &SheetProperties {
        &self.properties
    }

    /// Mutable access to this sheet's own scalar properties.
    #[inline]
    pub fn properties_mut(&mut self) -> &mut SheetProperties {
        &mut self.properties
    }

    pub(crate) fn cascade(&self) -> &Cascade {
        self.cascade.get_or_init(|| Cascade::build(self))
    }

    /// Link subclasses after inheritance, own definitions last-applied.
    pub fn cascaded_link_styles(&self) -> &CascadedTable<LinkSubclass> {
        &self.cascade().links.cascaded
    }

    /// Link subclasses inherited from parents, with the sheet defining each.
    pub fn inherited_link_styles(&self) -> &CascadedTable<LinkSubclass> {
        &self.cascade().links.inherited
    }

    /// Quad styles after inheritance.
    pub fn cascaded_quad_styles(&self) -> &CascadedTable<QuadStyle> {
        &self.cascade().quads.cascaded
    }

    /// Quad styles inherited from parents, with the sheet defining each.
    pub fn inherited_quad_styles(&self) -> &CascadedTable<QuadStyle> {
        &self.cascade().quads.inherited
    }

    /// Custom tag styles after inheritance.
    pub fn cascaded_custom_text_styles(&self) -> &CascadedTable<CustomTextStyle> {
        &self.cascade().custom_text_styles.cascaded
    }

    /// Custom tag styles inherited from parents, with the sheet defining each.
    pub fn inherited_custom_text_styles(&self) -> &CascadedTable<CustomTextStyle> {
        &self.cascade().custom_text_styles.inherited
    }

    /// Looks up a cascaded link subclass by class name, ignoring case.
    pub fn link_style(&self, class_name: &str) -> Option<&LinkSubclass> {
        self.cascaded_link_styles().get(class_name)
    }

    /// Looks up a cascaded quad style by class name, ignoring case.
    pub fn quad_style(&self, class_name: &str) -> Option<&QuadStyle> {
        self.cascaded_quad_styles().get(class_name)
    }

    /// Looks up a cascaded custom tag style by tag name, ignoring case.
    pub fn custom_text_style(&self, tag: &str) -> Option<&CustomTextStyle> {
        self.cascaded_custom_text_styles().get(tag)
    }

    /// The style of a link with the given class: the matching subclass, or the cascaded default
    /// link style when the class is absent or unknown.
    pub fn resolve_link_style(&self, class_name: Option<&str>) -> LinkStyle {
        class_name
            .filter(|c| !c.is_empty())
            .and_then(|c| self.link_style(c))
            .map_or_else(|| self.cascaded_default_link_style(), |s| *s.style())
    }

    fn cascaded<T, F>(&self, pick: F) -> T
    where
        T: Clone,
        F: Fn(&SheetProperties) -> &Overridable<T> + Copy,
    {
        let own = pick(&self.properties);
        if own.should_override {
            return own.value.clone();
        }
        // The last parent has the highest priority.
        match self.inherited.last() {
            Some(parent) => parent.cascaded(pick),
            None => own.value.clone(),
        }
    }

    /// The font after inheritance.
    ///
    /// Like every scalar property: the local value if it overrides, otherwise the last parent's
    /// cascaded value, otherwise (no parents) the local value.
    pub fn cascaded_font(&self) -> Option<Arc<str>> {
        self.cascaded(|p| &p.font)
    }

    /// The font size after inheritance.
    pub fn cascaded_font_size(&self) -> u32 {
        self.cascaded(|p| &p.font_size)
    }

    /// The line spacing after inheritance.
    pub fn cascaded_line_spacing(&self) -> f32 {
        self.cascaded(|p| &p.line_spacing)
    }

    /// The default font style after inheritance.
    pub fn cascaded_font_style(&self) -> FontStyle {
        self.cascaded(|p| &p.font_style)
    }

    /// The default text color after inheritance.
    pub fn cascaded_text_color(&self) -> Color {
        self.cascaded(|p| &p.text_color)
    }

    /// The default link style after inheritance.
    pub fn cascaded_default_link_style(&self) -> LinkStyle {
        self.cascaded(|p| &p.default_link_style)
    }

    /// The link hitbox padding after inheritance.
    pub fn cascaded_link_hitbox_padding(&self) -> f32 {
        self.cascaded(|p| &p.link_hitbox_padding)
    }
}
