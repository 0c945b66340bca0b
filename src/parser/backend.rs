//! Page source abstraction.
//!
//! Isolates the concrete PDF library (lopdf) from the text extractor so the
//! page-ordering and error-mode logic can be exercised without real documents.

use crate::error::{DecodeError, Error, Result};

/// A paginated document that can yield plain text one page at a time.
pub trait PageSource {
    /// Page numbers (1-indexed) in document order.
    fn page_numbers(&self) -> Vec<u32>;

    /// Plain text of a single page.
    fn page_text(&self, page: u32) -> Result<String>;
}

// ---------------------------------------------------------------------------
// LopdfBackend: concrete implementation backed by lopdf
// ---------------------------------------------------------------------------

use lopdf::Document as LopdfDocument;

/// Concrete [`PageSource`] backed by `lopdf::Document`.
///
/// The decoded document lives exactly as long as the backend value, so
/// dropping the backend releases every decode-time allocation.
pub struct LopdfBackend {
    doc: LopdfDocument,
}

impl LopdfBackend {
    /// Decode a document from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data).map_err(Error::from)?;
        if doc.is_encrypted() {
            log::debug!("Document carries an /Encrypt dictionary, relying on empty-password decryption");
        }
        Ok(Self { doc })
    }

    /// PDF version string from the file header.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Number of pages in the page tree.
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

impl PageSource for LopdfBackend {
    fn page_numbers(&self) -> Vec<u32> {
        // get_pages returns a BTreeMap keyed by page number, so keys are ascending
        self.doc.get_pages().into_keys().collect()
    }

    fn page_text(&self, page: u32) -> Result<String> {
        self.doc
            .extract_text(&[page])
            .map_err(|e| {
                DecodeError::PageText {
                    page,
                    reason: e.to_string(),
                }
                .into()
            })
    }
}
