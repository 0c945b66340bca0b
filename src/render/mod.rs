//! Report rendering for presentation layers.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::to_text;
