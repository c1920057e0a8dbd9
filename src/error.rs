//! Error types for the extraction engine.

use std::io;
use thiserror::Error;

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting content-control metadata.
///
/// Structural failures (archive, body part, body XML) abort the whole run.
/// Per-record failures inside metadata collection are recovered by the
/// collector and never surface through this type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading the input document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The filename extension is not a recognized Word document type.
    #[error(
        "Unsupported file type: {0}\n\
        Only .doc and .docx files are supported."
    )]
    UnsupportedFileType(String),

    /// The input bytes are not a valid zip container.
    #[error(
        "Not a valid Word archive: {0}\n\
        Legacy binary .doc files cannot be processed; only the zip-based .docx format is supported."
    )]
    ArchiveFormat(String),

    /// A required package part is missing from the archive.
    #[error("Missing document part: {0}\nThis file may be corrupted or is not a Word document.")]
    MissingPart(String),

    /// A required XML part could not be parsed.
    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    /// A base64 payload could not be decoded.
    #[error("Invalid base64 payload: {0}")]
    InvalidEncoding(String),

    /// A gzip payload could not be decompressed.
    #[error("Corrupt gzip payload: {0}")]
    Decompression(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_distinguishes_remediation() {
        let err = Error::UnsupportedFileType("notes.txt".to_string());
        assert!(err.to_string().contains("Unsupported file type"));

        let err = Error::ArchiveFormat("invalid Zip archive".to_string());
        assert!(err.to_string().contains("Not a valid Word archive"));

        let err = Error::MissingPart("word/document.xml".to_string());
        assert!(err.to_string().contains("word/document.xml"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
