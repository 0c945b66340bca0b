//! Document text extraction.

mod backend;
mod options;
mod text_extractor;

pub use backend::{LopdfBackend, PageSource};
pub use options::{ErrorMode, ExtractOptions};
pub use text_extractor::TextExtractor;
