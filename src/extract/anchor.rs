//! Text anchor resolution against the flat document text.

use crate::error::{Error, Result};
use crate::model::TextAnchor;

/// Character-indexed view over a document's flat text.
///
/// Provider offsets count characters, not bytes. The byte position of
/// every character is computed once so that each anchor lookup is a
/// pair of index reads. ASCII text skips the table entirely.
#[derive(Debug, Clone)]
pub struct FlatText<'a> {
    text: &'a str,
    /// Byte offset of each char, plus a final entry for `text.len()`.
    /// Empty when the text is ASCII.
    boundaries: Vec<usize>,
}

impl<'a> FlatText<'a> {
    /// Index the given text.
    pub fn new(text: &'a str) -> Self {
        let boundaries = if text.is_ascii() {
            Vec::new()
        } else {
            text.char_indices()
                .map(|(i, _)| i)
                .chain(std::iter::once(text.len()))
                .collect()
        };
        Self { text, boundaries }
    }

    /// The underlying text.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        if self.boundaries.is_empty() {
            self.text.len()
        } else {
            self.boundaries.len() - 1
        }
    }

    /// Slice the text by character offsets `[start, end)`.
    pub fn slice(&self, start: i64, end: i64) -> Result<&'a str> {
        let len = self.char_len();
        let integrity = || Error::DataIntegrity { start, end, len };

        if start < 0 || end < start || end as u64 > len as u64 {
            return Err(integrity());
        }
        let (start, end) = (start as usize, end as usize);

        if self.boundaries.is_empty() {
            Ok(&self.text[start..end])
        } else {
            Ok(&self.text[self.boundaries[start]..self.boundaries[end]])
        }
    }
}

/// Resolve a text anchor to a single cleaned string.
///
/// Segments are concatenated in order, surrounding whitespace is trimmed,
/// and each line-break character becomes one space. An anchor without
/// segments resolves to an empty string.
///
/// # Errors
///
/// Returns [`Error::DataIntegrity`] if any segment lies outside the text or
/// has `end < start`.
///
/// # Example
///
/// ```
/// use untable::extract::{resolve_text_anchor, FlatText};
/// use untable::model::TextAnchor;
///
/// let text = FlatText::new("  Annual\nRevenue  ");
/// let anchor = TextAnchor::from_range(0, 18);
/// assert_eq!(resolve_text_anchor(&anchor, &text).unwrap(), "Annual Revenue");
/// ```
pub fn resolve_text_anchor(anchor: &TextAnchor, text: &FlatText<'_>) -> Result<String> {
    let mut joined = String::new();
    for segment in &anchor.text_segments {
        joined.push_str(text.slice(segment.start_index, segment.end_index)?);
    }

    Ok(joined.trim().replace(['\n', '\r'], " "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextSegment;

    fn resolve(text: &str, segments: &[(i64, i64)]) -> Result<String> {
        let anchor = TextAnchor::new(
            segments
                .iter()
                .map(|&(s, e)| TextSegment::new(s, e))
                .collect(),
        );
        resolve_text_anchor(&anchor, &FlatText::new(text))
    }

    #[test]
    fn test_empty_anchor() {
        assert_eq!(resolve("anything", &[]).unwrap(), "");
    }

    #[test]
    fn test_single_segment() {
        assert_eq!(resolve("hello world", &[(6, 11)]).unwrap(), "world");
    }

    #[test]
    fn test_segments_concatenate_in_order() {
        let text = "Total\nnet income";
        assert_eq!(resolve(text, &[(10, 16), (0, 6)]).unwrap(), "income Total");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(resolve("  hello  ", &[(0, 9)]).unwrap(), "hello");
    }

    #[test]
    fn test_line_break_replaced_not_collapsed() {
        assert_eq!(resolve("foo\nbar", &[(0, 7)]).unwrap(), "foo bar");
        assert_eq!(resolve("foo\n\nbar", &[(0, 8)]).unwrap(), "foo  bar");
        assert_eq!(resolve("foo\r\nbar", &[(0, 8)]).unwrap(), "foo  bar");
    }

    #[test]
    fn test_trailing_newline_trimmed_before_replace() {
        assert_eq!(resolve("Revenue\n", &[(0, 8)]).unwrap(), "Revenue");
    }

    #[test]
    fn test_deterministic() {
        let text = "Q1 Q2\nQ3";
        let first = resolve(text, &[(0, 2), (3, 8)]).unwrap();
        let second = resolve(text, &[(0, 2), (3, 8)]).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "Q1Q2 Q3");
    }

    #[test]
    fn test_full_length_allowed() {
        assert_eq!(resolve("abc", &[(0, 3), (3, 3)]).unwrap(), "abc");
    }

    #[test]
    fn test_end_past_text_is_integrity_error() {
        let err = resolve("abc", &[(0, 4)]).unwrap_err();
        assert!(matches!(
            err,
            Error::DataIntegrity {
                start: 0,
                end: 4,
                len: 3
            }
        ));
    }

    #[test]
    fn test_inverted_segment_is_integrity_error() {
        assert!(resolve("abcdef", &[(4, 2)]).unwrap_err().is_data_integrity());
    }

    #[test]
    fn test_negative_start_is_integrity_error() {
        assert!(resolve("abcdef", &[(-1, 2)]).unwrap_err().is_data_integrity());
    }

    #[test]
    fn test_non_ascii_offsets_count_chars() {
        let text = "Übersicht\nÄnderung";
        assert_eq!(FlatText::new(text).char_len(), 18);
        assert_eq!(resolve(text, &[(10, 18)]).unwrap(), "Änderung");
        assert_eq!(resolve(text, &[(0, 18)]).unwrap(), "Übersicht Änderung");
        assert!(resolve(text, &[(0, 19)]).is_err());
    }

    #[test]
    fn test_flat_text_as_str() {
        let flat = FlatText::new("abc");
        assert_eq!(flat.as_str(), "abc");
        assert_eq!(flat.char_len(), 3);
        assert_eq!(flat.slice(1, 2).unwrap(), "b");
    }
}
