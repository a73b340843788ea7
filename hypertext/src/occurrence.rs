// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Records of the tags found in processed text.
//!
//! Records are rebuilt by every processing pass and identify their tag only by position in the
//! output text of that pass.

use alloc::string::String;

use hypertext_style::{CustomTextStyle, LinkStyle, QuadStyle};
use index_range::{IndexRange, VertexRanges};

/// A tag occurrence covering a range of characters in the output text.
pub trait TagOccurrence {
    /// The characters of the output text covered by this occurrence.
    fn character_indices(&self) -> IndexRange;

    /// The vertex ranges of this occurrence in a glyph buffer of `base_vertex_count` vertices
    /// that mesh effects grew to `modified_vertex_count` vertices.
    fn vertex_ranges(
        &self,
        base_vertex_count: usize,
        modified_vertex_count: usize,
    ) -> Option<VertexRanges> {
        VertexRanges::new(
            self.character_indices(),
            base_vertex_count,
            modified_vertex_count,
        )
    }
}

/// A link: `<a name="..." class="...">text</a>` in the input.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    /// The link target.
    pub name: String,
    /// The link subclass requested in markup, if any.
    pub class_name: Option<String>,
    /// The resolved style.
    pub style: LinkStyle,
    /// The characters of the link text in the output.
    pub character_indices: IndexRange,
}

/// A custom tag: `<tag>text</tag>` in the input, for a tag defined by the style sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomTag {
    /// The style of the tag.
    pub style: CustomTextStyle,
    /// The characters of the tagged text in the output.
    pub character_indices: IndexRange,
}

/// A quad placeholder: `<quad class="..." ...>` in the output, for a class defined by the style
/// sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct Quad {
    /// The style of the quad.
    pub style: QuadStyle,
    /// The characters of the whole placeholder tag in the output.
    pub character_indices: IndexRange,
}

impl TagOccurrence for Link {
    fn character_indices(&self) -> IndexRange {
        self.character_indices
    }
}

impl TagOccurrence for CustomTag {
    fn character_indices(&self) -> IndexRange {
        self.character_indices
    }
}

impl TagOccurrence for Quad {
    fn character_indices(&self) -> IndexRange {
        self.character_indices
    }
}
