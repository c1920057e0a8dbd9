//! sdtx: content-control metadata extraction for .docx files
//!
//! This library unpacks Office Open XML word-processing documents and
//! reconstructs the hierarchical tree of content controls embedded in the
//! document body, enriched with the custom metadata some generators store
//! as compressed, base64-encoded XML blobs inside customXml parts.

pub mod document;
pub mod error;
pub mod export;

/// Export format options
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum ExportFormat {
    Text,
    Json,
}

// Re-export commonly used types
pub use document::{
    AttributeRow, ClassificationCounts, ContentControl, ExtractionResult, extract_from_bytes,
    load_document,
};
pub use error::{Error, Result};
