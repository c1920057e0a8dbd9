//! Document extraction module
//!
//! This module unpacks a .docx container, parses the WordprocessingML body,
//! decodes the custom-metadata parts, and reconstructs the document's
//! content-control tree.

pub mod io;
pub mod loader;
pub mod models;
pub mod parsing;
pub mod query;

// Re-export all models and query functions
pub use loader::{extract_from_bytes, load_document};
pub use models::*;
pub use query::*;
