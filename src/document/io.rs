//! File validation and package (zip container) reading
//!
//! A .docx file is a zip container of XML parts. [`Package`] holds the fully
//! decoded part map for one extraction run, in archive listing order.

use std::io::{Cursor, Read};
use std::path::Path;

use zip::ZipArchive;

use crate::error::{Error, Result};

/// Archive path of the main document body part.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Validates that the filename is an accepted Word document type.
///
/// Both .doc and .docx are accepted at this boundary (case-insensitive);
/// only the zip-based format is actually processable, so a legacy binary
/// .doc will still fail later with [`Error::ArchiveFormat`].
pub(crate) fn validate_word_file(file_path: &Path) -> Result<()> {
    let name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if name.ends_with(".doc") || name.ends_with(".docx") {
        Ok(())
    } else {
        Err(Error::UnsupportedFileType(
            file_path.to_string_lossy().into_owned(),
        ))
    }
}

/// An opened document package: archive entry path to raw bytes.
#[derive(Debug, Default)]
pub struct Package {
    entries: Vec<(String, Vec<u8>)>,
}

impl Package {
    /// Decode a zip container from raw bytes.
    ///
    /// Entry order follows the archive listing, which the container format
    /// does not guarantee to be stable across producers.
    pub fn open(bytes: &[u8]) -> Result<Package> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| Error::ArchiveFormat(e.to_string()))?;

        let mut entries = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            let mut entry = archive
                .by_index(index)
                .map_err(|e| Error::ArchiveFormat(e.to_string()))?;
            if entry.is_dir() {
                continue;
            }
            let mut data = Vec::with_capacity(entry.size() as usize);
            entry
                .read_to_end(&mut data)
                .map_err(|e| Error::ArchiveFormat(e.to_string()))?;
            entries.push((entry.name().to_string(), data));
        }

        Ok(Package { entries })
    }

    /// Raw bytes of an entry by archive path, if present.
    pub fn entry(&self, path: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(name, _)| name == path)
            .map(|(_, data)| data.as_slice())
    }

    /// All entries in archive listing order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries
            .iter()
            .map(|(name, data)| (name.as_str(), data.as_slice()))
    }

    /// The main document body part, required for every extraction.
    pub fn document_part(&self) -> Result<&[u8]> {
        self.entry(DOCUMENT_PART)
            .ok_or_else(|| Error::MissingPart(DOCUMENT_PART.to_string()))
    }
}
