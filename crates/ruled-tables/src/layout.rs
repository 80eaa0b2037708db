//! Input model for the upstream page-layout extractor.
//!
//! The extractor hands over one sequence of positioned elements per page.
//! Each element is a text container (nesting recursively down to individual
//! characters), a rectangle shape, or something this crate ignores. Opening
//! the document and decoding its content streams is entirely the extractor's
//! job; an unextractable document never reaches this crate.

use serde::{Deserialize, Serialize};

use crate::geometry::BBox;

/// A positioned glyph or text fragment produced by the layout extractor.
///
/// `text` is commonly a single glyph but may be a ligature of several.
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Char {
    pub bbox: BBox,
    pub text: String,
}

impl Char {
    /// Create a new character.
    #[inline]
    #[must_use = "returns a new Char instance"]
    pub fn new(bbox: BBox, text: impl Into<String>) -> Self {
        Self {
            bbox,
            text: text.into(),
        }
    }

    /// Bottom y of the bounding box, used to group characters into
    /// text-lines within a cell.
    #[inline]
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.bbox.y0
    }
}

/// One positioned element of a page layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutElement {
    /// A text container holding further containers or characters.
    Text(Vec<LayoutElement>),
    /// An individual positioned character.
    Char(Char),
    /// A rectangle shape.
    Rect(BBox),
    /// Any other element kind; skipped by the reconstruction.
    Other,
}

/// Flatten every character out of a layout element tree, in element order.
///
/// Text containers are descended recursively; rectangles and other elements
/// contribute nothing.
#[must_use]
pub fn collect_chars(elements: &[LayoutElement]) -> Vec<Char> {
    let mut chars = Vec::new();
    for element in elements {
        push_chars(element, &mut chars);
    }
    chars
}

fn push_chars(element: &LayoutElement, out: &mut Vec<Char>) {
    match element {
        LayoutElement::Text(children) => {
            for child in children {
                push_chars(child, out);
            }
        }
        LayoutElement::Char(c) => out.push(c.clone()),
        LayoutElement::Rect(_) | LayoutElement::Other => {}
    }
}

/// Collect the bounding boxes of the page-level rectangle shapes.
///
/// Only top-level rectangles are considered; extractors emit shapes as
/// siblings of the text containers, never nested inside them.
#[must_use]
pub fn collect_rects(elements: &[LayoutElement]) -> Vec<BBox> {
    elements
        .iter()
        .filter_map(|element| match element {
            LayoutElement::Rect(bbox) => Some(*bbox),
            _ => None,
        })
        .collect()
}
