//! AST Module - edge values and the documents that carry them
//!
//! - `edge`: Edge, the immutable (from, to, description) triple
//! - `document`: EdgeDocument, the YAML/JSON file format read by the CLI
//!
//! These types are the "what": plain data handed to the `path` module.

mod document;
mod edge;

// Re-export all public types
pub use document::{EdgeDocument, SCHEMA_V01};
pub use edge::{fold_label, Edge};
