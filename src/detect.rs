//! Input format detection.
//!
//! Recognizes the file types a document-understanding provider accepts,
//! plus saved provider responses (JSON).

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// MIME type of a saved provider response.
pub const MIME_JSON: &str = "application/json";
/// MIME type of PDF documents.
pub const MIME_PDF: &str = "application/pdf";

/// Magic byte signatures, checked in order.
const SIGNATURES: &[(&[u8], &str)] = &[
    (b"%PDF-", MIME_PDF),
    (b"II*\0", "image/tiff"),
    (b"MM\0*", "image/tiff"),
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"\xFF\xD8\xFF", "image/jpeg"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"BM", "image/bmp"),
];

/// Bytes read from a file for detection.
const HEADER_LEN: usize = 512;

/// Detect the MIME type of a file.
///
/// # Example
/// ```no_run
/// use untable::detect::detect_mime_type_from_path;
///
/// let mime = detect_mime_type_from_path("response.json").unwrap();
/// assert_eq!(mime, "application/json");
/// ```
pub fn detect_mime_type_from_path<P: AsRef<Path>>(path: P) -> Result<&'static str> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    BufReader::new(file)
        .take(HEADER_LEN as u64)
        .read_to_end(&mut header)?;
    detect_mime_type_from_bytes(&header)
}

/// Detect the MIME type from leading bytes.
///
/// # Returns
/// * `Ok(mime)` for a recognized signature
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_mime_type_from_bytes(data: &[u8]) -> Result<&'static str> {
    if let Some((_, mime)) = SIGNATURES.iter().find(|(magic, _)| data.starts_with(magic)) {
        return Ok(*mime);
    }

    if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        return Ok("image/webp");
    }

    if is_json_bytes(data) {
        return Ok(MIME_JSON);
    }

    Err(Error::UnknownFormat)
}

/// Check if bytes look like a JSON object.
pub fn is_json_bytes(data: &[u8]) -> bool {
    let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
    data.iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|&b| b == b'{')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_pdf() {
        assert_eq!(detect_mime_type_from_bytes(b"%PDF-1.7\n").unwrap(), MIME_PDF);
    }

    #[test]
    fn test_detect_images() {
        assert_eq!(
            detect_mime_type_from_bytes(b"\x89PNG\r\n\x1a\n....").unwrap(),
            "image/png"
        );
        assert_eq!(
            detect_mime_type_from_bytes(b"\xFF\xD8\xFF\xE0").unwrap(),
            "image/jpeg"
        );
        assert_eq!(
            detect_mime_type_from_bytes(b"II*\0abcd").unwrap(),
            "image/tiff"
        );
        assert_eq!(
            detect_mime_type_from_bytes(b"RIFF\0\0\0\0WEBPVP8 ").unwrap(),
            "image/webp"
        );
        assert_eq!(detect_mime_type_from_bytes(b"GIF89a").unwrap(), "image/gif");
    }

    #[test]
    fn test_detect_json() {
        assert_eq!(
            detect_mime_type_from_bytes(b"  \n{\"text\": \"\"}").unwrap(),
            MIME_JSON
        );
        assert_eq!(
            detect_mime_type_from_bytes(b"\xEF\xBB\xBF{}").unwrap(),
            MIME_JSON
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert!(matches!(
            detect_mime_type_from_bytes(b""),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            detect_mime_type_from_bytes(b"<!DOCTYPE html>"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            detect_mime_type_from_bytes(b"[1, 2]"),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_detect_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, "{\"text\": \"x\"}").unwrap();
        assert_eq!(detect_mime_type_from_path(&path).unwrap(), MIME_JSON);
    }
}
