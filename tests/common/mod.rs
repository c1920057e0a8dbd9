//! Shared fixture builders for integration tests.
//!
//! Fixtures are assembled in memory: a zip container for the document
//! package and base64+gzip encoding for metadata payloads, matching what
//! Word generators produce.
#![allow(dead_code)] // not every test binary uses every helper

use std::io::{Cursor, Write};

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use flate2::Compression;
use flate2::write::GzEncoder;
use zip::write::SimpleFileOptions;

/// Encode a metadata payload the way generators store it:
/// gzip then base64.
pub fn encode_payload(xml: &str) -> String {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(xml.as_bytes()).unwrap();
    BASE64_STANDARD.encode(encoder.finish().unwrap())
}

/// Build a zip container with the given entries, in order.
pub fn build_docx(parts: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (path, content) in parts {
        writer
            .start_file(*path, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// One structured-content element with id, alias, and nested content.
pub fn sdt(id: &str, alias: &str, content: &str) -> String {
    format!(
        r#"<w:sdt><w:sdtPr><w:id w:val="{id}"/><w:alias w:val="{alias}"/></w:sdtPr><w:sdtContent>{content}</w:sdtContent></w:sdt>"#
    )
}

/// A document body part wrapping the given content.
pub fn document_xml(body_content: &str) -> String {
    format!(r#"<w:document><w:body>{body_content}</w:body></w:document>"#)
}

/// A customXml part carrying per-control `Node` records
/// (identifier, encoded payload).
pub fn custom_xml_nodes(nodes: &[(&str, &str)]) -> String {
    let mut out = String::from("<Items>");
    for (id, payload) in nodes {
        out.push_str(&format!(r#"<Node p2:id="{id}">{payload}</Node>"#));
    }
    out.push_str("</Items>");
    out
}
