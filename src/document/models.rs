//! Core data structures for the reconstructed content-control tree
//!
//! This module defines the public types produced by an extraction run:
//! attribute rows, content-control nodes, classification counters, and the
//! final extraction result.

use serde::{Deserialize, Serialize};

use crate::document::parsing::payload::decode_display_value;

/// A display-oriented key/value pair attached to a content control.
///
/// `decoded` is populated lazily by [`AttributeRow::decode_value`] and is
/// never set during extraction itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeRow {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub decoded: Option<String>,
}

impl AttributeRow {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        AttributeRow {
            name: name.into(),
            value: value.into(),
            decoded: None,
        }
    }

    /// Decode `value` as base64 into a display string, on demand.
    ///
    /// Idempotent: the result is computed at most once and cached. Invalid
    /// input sets the fixed invalid-content marker instead of failing, so a
    /// bad row never affects any other row.
    pub fn decode_value(&mut self) -> &str {
        if self.decoded.is_none() {
            self.decoded = Some(decode_display_value(&self.value));
        }
        self.decoded.as_deref().unwrap_or_default()
    }
}

/// A node in the reconstructed content-control tree.
///
/// Mirrors one structured-content (`w:sdt`) element of the document body,
/// merged with its correlated metadata record. Children are owned
/// exclusively; the tree is isomorphic to the nesting of `w:sdt` elements
/// in the source body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentControl {
    pub title: String,
    pub tag: String,
    pub attributes: Vec<AttributeRow>,
    pub children: Vec<ContentControl>,
    /// UI expansion state; not part of the extraction semantics.
    #[serde(skip)]
    pub expanded: bool,
}

/// Aggregate classification counters for one extraction run.
///
/// Threaded through the tree builder as explicit accumulator state rather
/// than hidden mutable fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationCounts {
    pub total_fields: usize,
    pub total_clauses: usize,
    pub total_tables: usize,
}

impl ClassificationCounts {
    /// Classify a resolved type string and bump the matching counter.
    ///
    /// Substring checks run in fixed priority order (field, clause, repeat);
    /// a type matching several substrings only increments the first match.
    pub fn classify(&mut self, type_name: &str) {
        if type_name.contains("field") {
            self.total_fields += 1;
        } else if type_name.contains("clause") {
            self.total_clauses += 1;
        } else if type_name.contains("repeat") {
            self.total_tables += 1;
        }
    }
}

/// The result of one extraction run: the ordered top-level controls (with
/// the synthetic document-properties node prepended when present) and the
/// classification counters. Created fresh per run; no state is shared
/// across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub controls: Vec<ContentControl>,
    pub counts: ClassificationCounts,
}

impl ExtractionResult {
    /// The initially active selection: the first top-level control, if any.
    pub fn initial_selection(&self) -> Option<&ContentControl> {
        self.controls.first()
    }
}
