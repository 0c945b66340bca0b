//! Error types for resume-ats.

use std::io;
use thiserror::Error;

/// Result type alias for resume-ats operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while analyzing a résumé.
///
/// Entity extraction never fails: a missing name, email or phone is a
/// valid result and is reported through `Option` / sentinel strings.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document bytes could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The classifier cannot be trained from the configured corpus.
    #[error("Training data error: {0}")]
    TrainingData(String),

    /// Inference was requested before a model was trained.
    #[error("Role classifier has not been trained")]
    ModelNotReady,

    /// A scoring table entry is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error while rendering a report.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Returns true if this error came from decoding the document.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}

/// Reasons a document failed to decode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The bytes do not start with a PDF header.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// The PDF structure is corrupted or malformed.
    #[error("Malformed PDF: {0}")]
    Malformed(String),

    /// Text could not be extracted from a page.
    #[error("Page {page}: {reason}")]
    PageText { page: u32, reason: String },
}

// Documents are always decoded from memory, so lopdf I/O errors mean a
// truncated or corrupt buffer rather than a filesystem problem.
impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::Decryption(_) => Error::Decode(DecodeError::Encrypted),
            _ => Error::Decode(DecodeError::Malformed(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ModelNotReady;
        assert_eq!(err.to_string(), "Role classifier has not been trained");

        let err = Error::Decode(DecodeError::PageText {
            page: 3,
            reason: "bad stream".into(),
        });
        assert_eq!(err.to_string(), "Decode error: Page 3: bad stream");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_decode());
    }

    #[test]
    fn test_decode_error_conversion() {
        let err: Error = DecodeError::UnknownFormat.into();
        assert!(err.is_decode());
        assert_eq!(
            err.to_string(),
            "Decode error: Unknown file format: not a valid PDF"
        );
    }
}
