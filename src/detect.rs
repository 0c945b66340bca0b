//! PDF header sniffing.
//!
//! Uploaded résumés arrive as opaque blobs, often with a forged or missing
//! extension. The header check lets the extractor reject plain-text or HTML
//! payloads before handing them to the PDF decoder.

use crate::error::{DecodeError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFormat {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
}

impl std::fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Detect PDF format from the first bytes of a file on disk.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<PdfFormat> {
    let mut header = Vec::with_capacity(16);
    File::open(path)?.take(16).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect PDF format from bytes.
///
/// # Returns
/// * `Ok(PdfFormat)` if the data starts with a valid PDF header
/// * `Err(DecodeError::UnknownFormat)` if the data is not a PDF
/// * `Err(DecodeError::UnsupportedVersion)` if the version field is garbled
pub fn detect_format_from_bytes(data: &[u8]) -> Result<PdfFormat> {
    if data.len() < PDF_MAGIC_LEN + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(DecodeError::UnknownFormat.into());
    }

    let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(DecodeError::UnsupportedVersion(version).into());
    }

    Ok(PdfFormat { version })
}

/// Check a version string of the form `d.d`.
fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}

/// Check if bytes carry a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_detect_valid_pdf() {
        let data = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3";
        let format = detect_format_from_bytes(data).unwrap();
        assert_eq!(format.version, "1.7");
        assert_eq!(format.to_string(), "PDF 1.7");
    }

    #[test]
    fn test_detect_plain_text_resume() {
        let data = b"John Doe\nPython, Java\njohn@example.com";
        let result = detect_format_from_bytes(data);
        assert!(matches!(
            result,
            Err(Error::Decode(DecodeError::UnknownFormat))
        ));
    }

    #[test]
    fn test_detect_too_short() {
        let result = detect_format_from_bytes(b"%PDF");
        assert!(matches!(
            result,
            Err(Error::Decode(DecodeError::UnknownFormat))
        ));
    }

    #[test]
    fn test_detect_garbled_version() {
        let result = detect_format_from_bytes(b"%PDF-x.y\n");
        assert!(matches!(
            result,
            Err(Error::Decode(DecodeError::UnsupportedVersion(_)))
        ));
    }

    #[test]
    fn test_is_pdf_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.4\n"));
        assert!(!is_pdf_bytes(b"Not a PDF"));
        assert!(!is_pdf_bytes(b""));
    }

    #[test]
    fn test_detect_from_path() {
        use std::io::Write;

        let mut pdf = tempfile::NamedTempFile::new().unwrap();
        pdf.write_all(b"%PDF-1.6\n%\xe2\xe3\xcf\xd3\n1 0 obj").unwrap();
        let format = detect_format_from_path(pdf.path()).unwrap();
        assert_eq!(format.version, "1.6");

        let mut text = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        text.write_all(b"Jane Smith\nJava Developer").unwrap();
        assert!(matches!(
            detect_format_from_path(text.path()),
            Err(Error::Decode(DecodeError::UnknownFormat))
        ));

        assert!(matches!(
            detect_format_from_path("/nonexistent/resume.pdf"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_version_validation() {
        assert!(is_valid_version("1.0"));
        assert!(is_valid_version("2.0"));
        assert!(!is_valid_version("10.0"));
        assert!(!is_valid_version("abc"));
    }
}
