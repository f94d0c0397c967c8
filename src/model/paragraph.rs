//! Paragraph type.

use super::{BoundingPoly, Layout, TextAnchor};
use serde::{Deserialize, Serialize};

/// A block of text detected on a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    /// Text span and geometry
    #[serde(default)]
    pub layout: Layout,
}

impl Paragraph {
    /// Create a paragraph from its text anchor and bounding polygon.
    pub fn new(text_anchor: TextAnchor, bounding_poly: BoundingPoly) -> Self {
        Self {
            layout: Layout::new(text_anchor, bounding_poly),
        }
    }

    /// Get the paragraph's text anchor.
    pub fn text_anchor(&self) -> &TextAnchor {
        &self.layout.text_anchor
    }

    /// Y coordinate where the paragraph ends (bottom-right vertex).
    pub fn bottom_y(&self) -> Option<f32> {
        self.layout.bounding_poly.bottom_y()
    }
}
