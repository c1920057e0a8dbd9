//! Base64 and gzip payload decoding
//!
//! Custom-metadata parts store their records as base64-encoded, gzipped XML.
//! These helpers are pure and stateless; they never substitute empty output
//! on error, so callers decide whether to skip or abort.

use std::io::Read;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use flate2::read::GzDecoder;

use crate::error::{Error, Result};

/// Marker written into an attribute's `decoded` field when its value is not
/// valid base64.
pub const INVALID_BASE64_MARKER: &str = "Invalid Base64 content";

/// Decode a base64 string into raw bytes.
pub fn decode_base64(text: &str) -> Result<Vec<u8>> {
    BASE64_STANDARD
        .decode(text.trim())
        .map_err(|e| Error::InvalidEncoding(e.to_string()))
}

/// Decompress a gzip stream into raw bytes.
pub fn decompress_gzip(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(bytes);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| Error::Decompression(e.to_string()))?;
    Ok(out)
}

/// Decode one metadata payload: base64 text to gzip bytes to XML text.
pub fn decode_metadata_payload(base64_text: &str) -> Result<String> {
    let compressed = decode_base64(base64_text)?;
    let xml = decompress_gzip(&compressed)?;
    Ok(String::from_utf8_lossy(&xml).into_owned())
}

/// Decode an attribute value as base64 for display.
///
/// Never fails: invalid input yields the fixed [`INVALID_BASE64_MARKER`]
/// string so one bad attribute cannot affect any other operation.
pub fn decode_display_value(value: &str) -> String {
    match decode_base64(value) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => INVALID_BASE64_MARKER.to_string(),
    }
}
