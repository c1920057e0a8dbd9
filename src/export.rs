//! Export of extraction results to text and JSON.

use anyhow::Result;

use crate::document::{ExtractionResult, walk};

/// Render the control tree as indented plain text with the classification
/// totals appended.
pub fn export_text(result: &ExtractionResult) -> String {
    let mut out = String::new();

    for (depth, control) in walk(&result.controls) {
        let indent = "  ".repeat(depth);
        let title = if control.title.is_empty() {
            "(untitled)"
        } else {
            &control.title
        };
        out.push_str(&format!("{indent}{title}\n"));
        if !control.tag.is_empty() {
            out.push_str(&format!("{indent}  tag: {}\n", control.tag));
        }
        for row in &control.attributes {
            out.push_str(&format!("{indent}  {}: {}\n", row.name, row.value));
        }
    }

    out.push_str(&format!(
        "\nFields: {}  Clauses: {}  Tables: {}\n",
        result.counts.total_fields, result.counts.total_clauses, result.counts.total_tables
    ));
    out
}

/// Render the extraction result as pretty-printed JSON.
pub fn export_json(result: &ExtractionResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use crate::document::{
        AttributeRow, ClassificationCounts, ContentControl, ExtractionResult,
    };

    use super::*;

    fn sample() -> ExtractionResult {
        ExtractionResult {
            controls: vec![ContentControl {
                title: "A - T1".to_string(),
                tag: "party".to_string(),
                attributes: vec![AttributeRow::new("ID (Unsigned)", "1")],
                children: vec![],
                expanded: false,
            }],
            counts: ClassificationCounts {
                total_fields: 0,
                total_clauses: 1,
                total_tables: 0,
            },
        }
    }

    #[test]
    fn test_export_text_layout() {
        let text = export_text(&sample());
        assert!(text.contains("A - T1"));
        assert!(text.contains("tag: party"));
        assert!(text.contains("ID (Unsigned): 1"));
        assert!(text.contains("Clauses: 1"));
    }

    #[test]
    fn test_export_json_shape() {
        let json = export_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["counts"]["total_clauses"], 1);
        assert_eq!(value["controls"][0]["title"], "A - T1");
    }
}
