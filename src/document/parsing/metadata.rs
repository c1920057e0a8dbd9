//! Custom-metadata collection and correlation
//!
//! Word generators that attach structured metadata to content controls do so
//! through customXml parts: each part carries `Node` elements whose text is
//! a base64+gzip-compressed XML blob keyed by a control identifier, and
//! optionally a `Properties` element carrying document-level metadata in the
//! same encoding. This module scans every such part and builds the
//! identifier-to-record correlation table the tree builder merges from.

use std::collections::HashMap;

use log::warn;

use crate::document::io::Package;
use crate::document::parsing::payload::decode_metadata_payload;
use crate::document::parsing::xml::{XmlElement, find_named};
use crate::error::Result;

/// Reserved correlation key for the single document-level record.
pub const DOCUMENT_PROPERTY_KEY: &str = "DocumentProperty";

/// Archive path prefix shared by all custom-metadata parts.
const CUSTOM_XML_PREFIX: &str = "customXml/item";

/// Identifier attribute names checked on each `Node`, in order. Documents
/// come from more than one generator; new qualified variants belong here,
/// not in the lookup code.
const ID_ATTRIBUTES: &[&str] = &["p2:id", "id"];

/// One decoded metadata record: field name to value, preserving the
/// metadata document's own field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    fields: Vec<(String, String)>,
}

impl MetadataRecord {
    /// Flatten an element's direct children into a record
    /// (child tag name to child text content).
    pub fn flatten(element: &XmlElement) -> MetadataRecord {
        let fields = element
            .children()
            .map(|child| (child.name().to_string(), child.text_content()))
            .collect();
        MetadataRecord { fields }
    }

    /// Value of a field by name, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All fields in metadata-document order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Scan all custom-metadata parts of a package and build the correlation
/// table: control identifier to record, plus the reserved
/// [`DOCUMENT_PROPERTY_KEY`] entry when a document-level record exists.
///
/// Failures are local by design: a part that fails to parse, or a record
/// that fails to decode, is logged and skipped without affecting the rest.
/// Duplicate identifiers resolve last-write-wins in archive listing order.
pub fn collect_metadata(package: &Package) -> HashMap<String, MetadataRecord> {
    let mut table = HashMap::new();

    for (path, data) in package.entries() {
        if !path.starts_with(CUSTOM_XML_PREFIX) || !path.ends_with(".xml") {
            continue;
        }

        let text = String::from_utf8_lossy(data);
        let root = match XmlElement::parse(&text) {
            Ok(root) => root,
            Err(e) => {
                warn!("skipping unparsable metadata part {path}: {e}");
                continue;
            }
        };

        collect_node_records(&root, path, &mut table);
        collect_document_properties(&root, path, &mut table);
    }

    table
}

/// Case A: per-control records carried by `Node` elements.
fn collect_node_records(
    root: &XmlElement,
    path: &str,
    table: &mut HashMap<String, MetadataRecord>,
) {
    for node in root.find_all("Node") {
        let Some(id) = node_identifier(node) else {
            continue;
        };
        let payload = node.text_content();
        let payload = payload.trim();
        if payload.is_empty() {
            continue;
        }

        match decode_node_record(payload) {
            Ok(Some(record)) => {
                table.insert(id.to_string(), record);
            }
            Ok(None) => {}
            Err(e) => {
                warn!("skipping undecodable metadata record {id} in {path}: {e}");
            }
        }
    }
}

/// Case B: the document-level record carried by a `Properties` element.
/// Empty text content means absent; a decoded record overwrites any prior
/// document-level record from an earlier part.
fn collect_document_properties(
    root: &XmlElement,
    path: &str,
    table: &mut HashMap<String, MetadataRecord>,
) {
    let Some(properties) = find_named(root, "Properties") else {
        return;
    };
    let payload = properties.text_content();
    let payload = payload.trim();
    if payload.is_empty() {
        return;
    }

    match decode_properties_record(payload) {
        Ok(record) => {
            table.insert(DOCUMENT_PROPERTY_KEY.to_string(), record);
        }
        Err(e) => {
            warn!("skipping undecodable document properties in {path}: {e}");
        }
    }
}

fn node_identifier(node: &XmlElement) -> Option<&str> {
    // an empty value falls through to the next variant
    ID_ATTRIBUTES
        .iter()
        .filter_map(|name| node.attribute(name))
        .find(|id| !id.is_empty())
}

/// Decode one `Node` payload and flatten its `Metadata` element. A payload
/// without a `Metadata` element contributes nothing (not an error).
fn decode_node_record(payload: &str) -> Result<Option<MetadataRecord>> {
    let xml = decode_metadata_payload(payload)?;
    let root = XmlElement::parse(&xml)?;
    Ok(find_named(&root, "Metadata").map(MetadataRecord::flatten))
}

/// Decode the `Properties` payload and flatten its root element's direct
/// children, whatever the root is named.
fn decode_properties_record(payload: &str) -> Result<MetadataRecord> {
    let xml = decode_metadata_payload(payload)?;
    let root = XmlElement::parse(&xml)?;
    Ok(MetadataRecord::flatten(&root))
}
