// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The markup processing pipeline.

mod autotag;
mod markup;
mod quads;
mod sizes;
mod tags;


use alloc::borrow::Cow;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use hypertext_style::{QuadStyle, StyleSheet};
use index_range::CharIndexMap;

use self::autotag::KeywordRole;
use self::markup::RegexCache;
use self::tags::{PendingKind, PendingTag};
use crate::{CustomTag, KeywordCollectionClass, Link, ProcessorSettings, Quad, TextSource};

/// Where the input text comes from.
#[derive(Clone, Debug)]
enum Input {
    Text(String),
    Source(Arc<dyn TextSource + Send + Sync>),
}

/// The results of the most recent processing pass.
#[derive(Clone, Debug, Default)]
struct Output {
    text: String,
    links: Vec<Link>,
    custom_tags: Vec<CustomTag>,
    quads: Vec<Quad>,
}

/// Buffers reused across processing passes.
#[derive(Debug, Default)]
struct Scratch {
    buffer: String,
    pending: Vec<PendingTag>,
    quads: Vec<(QuadStyle, Range<usize>)>,
    regexes: RegexCache,
    char_map: CharIndexMap,
}

/// Resolves HyperText markup in an input text.
///
/// The processor turns links, custom tags, quads and keywords of its input into the primitive
/// rich text vocabulary (`<b>`, `<i>`, `<color>`, `<size>` and `<quad>` placeholders) and records
/// where every link, custom tag and quad ended up in the output.
///
/// Results are memoized. Every setter marks the processor dirty, and so does a change of the
/// revision of its [`TextSource`]; the next read reprocesses the input. Reads therefore take
/// `&mut self`.
///
/// Custom tag elements are matched first open tag to first close tag, so elements of one tag
/// nested in each other resolve pairwise in order and their ranges overlap without nesting:
/// `<em>a<em>b</em>c</em>` records `a<b>b` and `b</b>c`.
///
/// ```
/// use hypertext::HyperTextProcessor;
///
/// let mut processor = HyperTextProcessor::new();
/// processor.set_input_text(r#"a <a name="x">dog</a> b"#);
/// assert_eq!(processor.output_text(), "a dog b");
///
/// let link = &processor.links()[0];
/// assert_eq!(link.name, "x");
/// assert_eq!((link.character_indices.start(), link.character_indices.end()), (2, 4));
/// ```
#[derive(Debug)]
pub struct HyperTextProcessor {
    input: Input,
    styles: Option<Arc<StyleSheet>>,
    link_keywords: Vec<KeywordCollectionClass>,
    quad_keywords: Vec<KeywordCollectionClass>,
    tag_keywords: Vec<KeywordCollectionClass>,
    settings: ProcessorSettings,
    output: Output,
    dirty: bool,
    /// Revision of the text source at the last pass.
    source_revision: Option<u64>,
    scratch: Scratch,
}

impl Default for HyperTextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl HyperTextProcessor {
    /// Creates a processor with empty input, no style sheet and default settings.
    pub fn new() -> Self {
        Self {
            input: Input::Text(String::new()),
            styles: None,
            link_keywords: Vec::new(),
            quad_keywords: Vec::new(),
            tag_keywords: Vec::new(),
            settings: ProcessorSettings::default(),
            output: Output::default(),
            dirty: true,
            source_revision: None,
            scratch: Scratch::default(),
        }
    }

    /// Creates a processor for `text` with the given style sheet.
    ///
    /// The reference font size is the cascaded font size of the sheet, as with
    /// [`set_styles`](Self::set_styles).
    pub fn with_styles(text: &str, styles: Arc<StyleSheet>) -> Self {
        let mut processor = Self::new();
        processor.set_input_text(text);
        processor.set_styles(Some(styles));
        processor
    }

    /// Forces the next read to reprocess the input.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// The current input text: the text source's text if one is set.
    pub fn input_text(&self) -> Cow<'_, str> {
        match &self.input {
            Input::Text(text) => Cow::Borrowed(text),
            Input::Source(source) => source.text(),
        }
    }

    /// Sets the input text, detaching any text source.
    pub fn set_input_text(&mut self, text: &str) {
        if let Input::Text(current) = &self.input {
            if current == text {
                return;
            }
        }
        self.input = Input::Text(text.into());
        self.dirty = true;
    }

    /// The text source, if the input comes from one.
    pub fn text_source(&self) -> Option<&Arc<dyn TextSource + Send + Sync>> {
        match &self.input {
            Input::Text(_) => None,
            Input::Source(source) => Some(source),
        }
    }

    /// Reads the input from `source` from now on.
    pub fn set_text_source(&mut self, source: Arc<dyn TextSource + Send + Sync>) {
        self.input = Input::Source(source);
        self.dirty = true;
    }

    /// Detaches the text source, keeping its current text as the input text.
    pub fn clear_text_source(&mut self) {
        if let Input::Source(source) = &self.input {
            self.input = Input::Text(source.text().into_owned());
            self.dirty = true;
        }
    }

    /// The style sheet.
    pub fn styles(&self) -> Option<&Arc<StyleSheet>> {
        self.styles.as_ref()
    }

    /// Replaces the style sheet.
    ///
    /// A new sheet also sets the reference font size to its cascaded font size. Removing the sheet
    /// keeps the current settings.
    pub fn set_styles(&mut self, styles: Option<Arc<StyleSheet>>) {
        let unchanged = match (&self.styles, &styles) {
            (Some(current), Some(new)) => Arc::ptr_eq(current, new),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return;
        }
        if let Some(styles) = &styles {
            let size = styles.cascaded_font_size();
            self.settings = self.settings.with_reference_font_size(size);
        }
        self.styles = styles;
        self.dirty = true;
    }

    /// Mutable access to the style sheet, cloning it first if it is shared.
    pub fn styles_mut(&mut self) -> Option<&mut StyleSheet> {
        self.dirty = true;
        self.styles.as_mut().map(Arc::make_mut)
    }

    /// The collections whose keywords become links.
    pub fn link_keywords(&self) -> &[KeywordCollectionClass] {
        &self.link_keywords
    }

    /// Sets the collections whose keywords become links; the class selects the link subclass.
    pub fn set_link_keywords(&mut self, collections: Vec<KeywordCollectionClass>) {
        self.link_keywords = collections;
        self.dirty = true;
    }

    /// The collections whose keywords become quads.
    pub fn quad_keywords(&self) -> &[KeywordCollectionClass] {
        &self.quad_keywords
    }

    /// Sets the collections whose keywords are replaced by quads of the same class.
    pub fn set_quad_keywords(&mut self, collections: Vec<KeywordCollectionClass>) {
        self.quad_keywords = collections;
        self.dirty = true;
    }

    /// The collections whose keywords become custom tags.
    pub fn tag_keywords(&self) -> &[KeywordCollectionClass] {
        &self.tag_keywords
    }

    /// Sets the collections whose keywords are wrapped in custom tags; the class is the tag name.
    pub fn set_tag_keywords(&mut self, collections: Vec<KeywordCollectionClass>) {
        self.tag_keywords = collections;
        self.dirty = true;
    }

    /// The settings.
    pub fn settings(&self) -> ProcessorSettings {
        self.settings
    }

    /// Replaces the settings.
    pub fn set_settings(&mut self, settings: ProcessorSettings) {
        if self.settings != settings {
            self.settings = settings;
            self.dirty = true;
        }
    }

    /// Sets the font size of untagged text.
    pub fn set_reference_font_size(&mut self, size: u32) {
        self.set_settings(self.settings.with_reference_font_size(size));
    }

    /// Sets the factor the renderer scales text by.
    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.set_settings(self.settings.with_scale_factor(scale_factor));
    }

    /// Enables or disables writing style markup.
    pub fn set_rich_text(&mut self, rich_text: bool) {
        self.set_settings(self.settings.with_rich_text(rich_text));
    }

    /// Enables or disables `<size>` tags.
    pub fn set_dynamic_font(&mut self, dynamic_font: bool) {
        self.set_settings(self.settings.with_dynamic_font(dynamic_font));
    }

    /// Returns `true` if the next read reprocesses the input.
    pub fn is_dirty(&self) -> bool {
        self.dirty || self.current_source_revision() != self.source_revision
    }

    /// The processed text.
    pub fn output_text(&mut self) -> &str {
        self.process();
        &self.output.text
    }

    /// The links of the processed text, in order.
    pub fn links(&mut self) -> &[Link] {
        self.process();
        &self.output.links
    }

    /// The custom tags of the processed text, in order.
    pub fn custom_tags(&mut self) -> &[CustomTag] {
        self.process();
        &self.output.custom_tags
    }

    /// The quads of the processed text, in order.
    pub fn quads(&mut self) -> &[Quad] {
        self.process();
        &self.output.quads
    }

    /// Replaces the contents of `out` with the links of the processed text.
    pub fn get_links(&mut self, out: &mut Vec<Link>) {
        out.clear();
        out.extend_from_slice(self.links());
    }

    /// Replaces the contents of `out` with the custom tags of the processed text.
    pub fn get_custom_tags(&mut self, out: &mut Vec<CustomTag>) {
        out.clear();
        out.extend_from_slice(self.custom_tags());
    }

    /// Replaces the contents of `out` with the quads of the processed text.
    pub fn get_quads(&mut self, out: &mut Vec<Quad>) {
        out.clear();
        out.extend_from_slice(self.quads());
    }

    fn current_source_revision(&self) -> Option<u64> {
        match &self.input {
            Input::Text(_) => None,
            Input::Source(source) => Some(source.revision()),
        }
    }

    /// Processes the input if anything changed since the last pass.
    pub fn process(&mut self) {
        let source_revision = self.current_source_revision();
        if !self.dirty && source_revision == self.source_revision {
            return;
        }

        let mut text = self.input_text().into_owned();
        let settings = self.settings;
        let rich_text = settings.rich_text();
        let ctx = rich_text.then(|| settings.markup_context());
        let styles = self.styles.as_deref();
        let scratch = &mut self.scratch;
        scratch.pending.clear();
        scratch.quads.clear();

        let roles = [
            (KeywordRole::Link, &self.link_keywords[..]),
            (KeywordRole::Quad, &self.quad_keywords[..]),
            (KeywordRole::Tag, &self.tag_keywords[..]),
        ];
        let mut protected_tags: Vec<&str> = Vec::new();
        if let Some(styles) = styles {
            protected_tags.extend(
                styles
                    .cascaded_custom_text_styles()
                    .iter()
                    .map(|s| s.tag().as_str()),
            );
        }
        protected_tags.extend(self.tag_keywords.iter().filter_map(|c| c.class_name()));
        autotag::substitute_keywords(
            &mut text,
            &roles,
            &protected_tags,
            &mut scratch.regexes,
            &mut scratch.buffer,
        );

        if rich_text {
            if let Some(styles) = styles {
                quads::inject_quad_arguments(
                    &mut text,
                    styles,
                    settings.scaled_font_size(),
                    &mut scratch.buffer,
                );
            }
            sizes::resolve_relative_sizes(
                &mut text,
                settings.scaled_font_size(),
                &mut scratch.buffer,
            );
        }

        if let Some(styles) = styles {
            tags::substitute_custom_tags(
                &mut text,
                styles,
                ctx,
                &mut scratch.regexes,
                &mut scratch.pending,
            );
        }
        tags::extract_links(&mut text, styles, ctx, &mut scratch.pending);

        if rich_text && settings.dynamic_font() {
            sizes::multiply_nested_sizes(&mut text, &mut scratch.pending);
        }

        if let Some(styles) = styles {
            quads::extract_quads(&text, styles, &mut scratch.quads);
        }

        scratch.char_map.rebuild(&text);
        let output = &mut self.output;
        output.links.clear();
        output.custom_tags.clear();
        output.quads.clear();
        for tag in scratch.pending.drain(..) {
            let Some(character_indices) = scratch.char_map.char_range(tag.span) else {
                continue;
            };
            match tag.kind {
                PendingKind::Link {
                    name,
                    class_name,
                    style,
                } => output.links.push(Link {
                    name,
                    class_name,
                    style,
                    character_indices,
                }),
                PendingKind::Custom(style) => output.custom_tags.push(CustomTag {
                    style,
                    character_indices,
                }),
            }
        }
        for (style, span) in scratch.quads.drain(..) {
            if let Some(character_indices) = scratch.char_map.char_range(span) {
                output.quads.push(Quad {
                    style,
                    character_indices,
                });
            }
        }
        output.links.sort_by_key(|l| l.character_indices.start());
        output
            .custom_tags
            .sort_by_key(|t| t.character_indices.start());
        output.quads.sort_by_key(|q| q.character_indices.start());
        output.text = text;

        log::trace!(
            "processed text: {} link(s), {} custom tag(s), {} quad(s)",
            output.links.len(),
            output.custom_tags.len(),
            output.quads.len()
        );
        self.dirty = false;
        self.source_revision = source_revision;
    }
}
