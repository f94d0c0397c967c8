//! Layout, geometry and text anchor types.

use serde::{Deserialize, Deserializer, Serialize};

/// Visual layout of a paragraph, table or cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Span of the element in the document text
    #[serde(default)]
    pub text_anchor: TextAnchor,

    /// Provider confidence in the detection (0.0 - 1.0)
    #[serde(default)]
    pub confidence: f32,

    /// Bounding polygon on the page
    #[serde(default)]
    pub bounding_poly: BoundingPoly,
}

impl Layout {
    /// Create a layout from an anchor and a bounding polygon.
    pub fn new(text_anchor: TextAnchor, bounding_poly: BoundingPoly) -> Self {
        Self {
            text_anchor,
            confidence: 0.0,
            bounding_poly,
        }
    }

    /// Create a layout with only a text anchor (no geometry).
    pub fn with_anchor(text_anchor: TextAnchor) -> Self {
        Self {
            text_anchor,
            ..Default::default()
        }
    }
}

/// A bounding polygon in normalized page coordinates.
///
/// Vertices follow the provider's clockwise convention starting at the
/// top-left corner: `[top-left, top-right, bottom-right, bottom-left]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingPoly {
    /// Vertices scaled to `[0, 1]` relative to page size
    #[serde(default)]
    pub normalized_vertices: Vec<NormalizedVertex>,
}

impl BoundingPoly {
    /// Create an axis-aligned rectangle.
    pub fn from_rect(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            normalized_vertices: vec![
                NormalizedVertex::new(left, top),
                NormalizedVertex::new(right, top),
                NormalizedVertex::new(right, bottom),
                NormalizedVertex::new(left, bottom),
            ],
        }
    }

    /// Get a vertex by index.
    pub fn vertex(&self, index: usize) -> Option<&NormalizedVertex> {
        self.normalized_vertices.get(index)
    }

    /// Y coordinate of the first (top-left) vertex.
    pub fn top_y(&self) -> Option<f32> {
        self.vertex(0).map(|v| v.y)
    }

    /// Y coordinate of the third (bottom-right) vertex.
    pub fn bottom_y(&self) -> Option<f32> {
        self.vertex(2).map(|v| v.y)
    }

    /// Check if the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.normalized_vertices.is_empty()
    }
}

/// A polygon corner in normalized coordinates.
///
/// The provider omits zero-valued coordinates, so both default to `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedVertex {
    /// Horizontal position (0 = left edge)
    #[serde(default)]
    pub x: f32,

    /// Vertical position (0 = top edge)
    #[serde(default)]
    pub y: f32,
}

impl NormalizedVertex {
    /// Create a new vertex.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Reference to a possibly discontiguous span of the document text.
///
/// Text wrapped across lines is commonly split into several segments
/// that form one string when concatenated in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnchor {
    /// Ordered offset pairs into the document text
    #[serde(default)]
    pub text_segments: Vec<TextSegment>,
}

impl TextAnchor {
    /// Create an anchor from segments.
    pub fn new(text_segments: Vec<TextSegment>) -> Self {
        Self { text_segments }
    }

    /// Create an anchor covering a single range.
    pub fn from_range(start: i64, end: i64) -> Self {
        Self::new(vec![TextSegment::new(start, end)])
    }

    /// Check if the anchor has no segments.
    pub fn is_empty(&self) -> bool {
        self.text_segments.is_empty()
    }
}

/// A half-open `[start_index, end_index)` character range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSegment {
    /// Start offset (inclusive)
    #[serde(default, deserialize_with = "deserialize_int64")]
    pub start_index: i64,

    /// End offset (exclusive)
    #[serde(default, deserialize_with = "deserialize_int64")]
    pub end_index: i64,
}

impl TextSegment {
    /// Create a new segment.
    pub fn new(start_index: i64, end_index: i64) -> Self {
        Self {
            start_index,
            end_index,
        }
    }

    /// Number of characters covered, or 0 for an inverted range.
    pub fn len(&self) -> usize {
        (self.end_index - self.start_index).max(0) as usize
    }

    /// Check if the segment covers no characters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provider JSON encodes 64-bit integers as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum Int64Repr {
    Number(i64),
    Text(String),
}

fn deserialize_int64<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Int64Repr::deserialize(deserializer)? {
        Int64Repr::Number(n) => Ok(n),
        Int64Repr::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_vertex_order() {
        let poly = BoundingPoly::from_rect(0.1, 0.2, 0.9, 0.4);
        assert_eq!(poly.top_y(), Some(0.2));
        assert_eq!(poly.bottom_y(), Some(0.4));
        assert_eq!(poly.vertex(1), Some(&NormalizedVertex::new(0.9, 0.2)));
        assert_eq!(poly.vertex(3), Some(&NormalizedVertex::new(0.1, 0.4)));
    }

    #[test]
    fn test_empty_poly() {
        let poly = BoundingPoly::default();
        assert!(poly.is_empty());
        assert_eq!(poly.top_y(), None);
        assert_eq!(poly.bottom_y(), None);
    }

    #[test]
    fn test_segment_string_indices() {
        let seg: TextSegment =
            serde_json::from_str(r#"{"startIndex": "12", "endIndex": "30"}"#).unwrap();
        assert_eq!(seg, TextSegment::new(12, 30));
        assert_eq!(seg.len(), 18);
    }

    #[test]
    fn test_segment_numeric_and_omitted_start() {
        let seg: TextSegment = serde_json::from_str(r#"{"endIndex": 7}"#).unwrap();
        assert_eq!(seg, TextSegment::new(0, 7));
    }

    #[test]
    fn test_segment_rejects_garbage_index() {
        let result = serde_json::from_str::<TextSegment>(r#"{"startIndex": "abc"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_vertex_omitted_coordinate() {
        let v: NormalizedVertex = serde_json::from_str(r#"{"x": 0.5}"#).unwrap();
        assert_eq!(v, NormalizedVertex::new(0.5, 0.0));
    }

    #[test]
    fn test_layout_missing_fields() {
        let layout: Layout = serde_json::from_str("{}").unwrap();
        assert!(layout.text_anchor.is_empty());
        assert!(layout.bounding_poly.is_empty());
    }

    #[test]
    fn test_inverted_segment_len() {
        assert_eq!(TextSegment::new(5, 3).len(), 0);
        assert!(TextSegment::new(5, 3).is_empty());
    }
}
