//! Plain-text extraction from PDF bytes.

use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::detect::detect_format_from_bytes;
use crate::error::Result;

use super::backend::{LopdfBackend, PageSource};
use super::options::{ErrorMode, ExtractOptions};

/// Extracts the concatenated text of every page, in page order.
#[derive(Debug, Clone, Default)]
pub struct TextExtractor {
    options: ExtractOptions,
}

impl TextExtractor {
    /// Create an extractor with default (strict) options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extraction options in use.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract text from raw PDF bytes.
    ///
    /// Bytes without a PDF header are rejected before the decoder runs.
    /// The decoded document is dropped before this returns, on success and
    /// on every error path.
    pub fn extract(&self, data: &[u8]) -> Result<String> {
        let format = detect_format_from_bytes(data)?;
        log::debug!("Decoding {} ({} bytes)", format, data.len());

        let backend = LopdfBackend::load_bytes(data)?;
        log::debug!(
            "Loaded PDF {} with {} pages",
            backend.version(),
            backend.page_count()
        );
        self.extract_from(&backend)
    }

    /// Extract text from a PDF file on disk.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let data = std::fs::read(path)?;
        self.extract(&data)
    }

    /// Extract text from any [`PageSource`].
    ///
    /// Page texts are appended as-is in ascending page order with no
    /// separator of their own.
    pub fn extract_from<S: PageSource + ?Sized>(&self, source: &S) -> Result<String> {
        let mut text = String::new();
        let pages = source.page_numbers();
        log::debug!("Extracting text from {} pages", pages.len());

        for page in pages {
            match source.page_text(page) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => {
                    if self.options.error_mode == ErrorMode::Strict {
                        return Err(e);
                    }
                    log::warn!("Skipping page {}: {}", page, e);
                }
            }
        }

        if self.options.normalize_unicode {
            text = text.nfc().collect();
        }

        Ok(text)
    }
}
