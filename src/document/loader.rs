//! Extraction orchestration
//!
//! `load_document()` is the entry point: validate the filename, read the
//! bytes (the only await point), then run the synchronous extraction
//! pipeline in `extract_from_bytes()`. Every run allocates a fresh metadata
//! table, counters, and tree; nothing is shared between runs.

use std::path::Path;

use crate::document::io::{Package, validate_word_file};
use crate::document::models::{
    AttributeRow, ClassificationCounts, ContentControl, ExtractionResult,
};
use crate::document::parsing::metadata::{
    DOCUMENT_PROPERTY_KEY, MetadataRecord, collect_metadata,
};
use crate::document::parsing::tree::build_tree;
use crate::document::parsing::xml::{XmlElement, find_named};
use crate::error::{Error, Result};

/// Load a Word document from disk and extract its content-control tree.
///
/// Fails fast with [`Error::UnsupportedFileType`] before touching the file
/// when the extension is not .doc or .docx. Archive and body failures are
/// fatal; per-record metadata failures are recovered inside collection.
pub async fn load_document(file_path: &Path) -> Result<ExtractionResult> {
    validate_word_file(file_path)?;
    let bytes = tokio::fs::read(file_path).await?;
    extract_from_bytes(&bytes)
}

/// Run the extraction pipeline over in-memory document bytes:
/// open the package, parse the body, collect metadata, build the tree,
/// and prepend the synthetic document-properties node when present.
pub fn extract_from_bytes(bytes: &[u8]) -> Result<ExtractionResult> {
    let package = Package::open(bytes)?;

    let body_xml = String::from_utf8_lossy(package.document_part()?).into_owned();
    let document = XmlElement::parse(&body_xml)?;
    let body = find_named(&document, "w:body")
        .ok_or_else(|| Error::MalformedXml("document body has no w:body element".to_string()))?;

    let metadata = collect_metadata(&package);

    let mut counts = ClassificationCounts::default();
    let mut controls = build_tree(body, &metadata, &mut counts);

    if let Some(record) = metadata.get(DOCUMENT_PROPERTY_KEY) {
        controls.insert(0, document_property_control(record));
    }

    Ok(ExtractionResult { controls, counts })
}

/// Synthetic node for the document-level record: all record fields as
/// attributes, no children, and never subject to classification counting.
fn document_property_control(record: &MetadataRecord) -> ContentControl {
    let attributes = record
        .fields()
        .map(|(name, value)| AttributeRow::new(name, value))
        .collect();

    ContentControl {
        title: DOCUMENT_PROPERTY_KEY.to_string(),
        tag: String::new(),
        attributes,
        children: Vec::new(),
        expanded: false,
    }
}
