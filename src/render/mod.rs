//! Rendering module for converting table records to output formats.

mod json;
mod markdown;

pub use json::{to_json, write_json, JsonFormat, DEFAULT_JSON_FILE};
pub use markdown::to_markdown;
