//! Recursive content-control tree construction
//!
//! Walks the document body depth-first, materializing one [`ContentControl`]
//! per structured-content (`w:sdt`) element and splicing the results of
//! non-structured wrapper elements into the parent's list, so the output
//! tree mirrors the nesting of `w:sdt` elements exactly.

use std::collections::HashMap;

use crate::document::models::{AttributeRow, ClassificationCounts, ContentControl};
use crate::document::parsing::metadata::MetadataRecord;
use crate::document::parsing::xml::XmlElement;

/// Local name of a structured-content element (`w:sdt`).
const STRUCTURED_CONTENT_TAG: &str = "sdt";

/// Build the ordered control list for one nesting level.
///
/// Direct children that are structured content become controls; everything
/// else is transparent and recursed into, its results spliced in place.
/// Classification counts accumulate into `counts` across the whole walk.
pub fn build_tree(
    parent: &XmlElement,
    metadata: &HashMap<String, MetadataRecord>,
    counts: &mut ClassificationCounts,
) -> Vec<ContentControl> {
    let mut controls = Vec::new();

    for child in parent.children() {
        if child.local_name() == STRUCTURED_CONTENT_TAG {
            controls.push(create_control(child, metadata, counts));
        } else {
            controls.extend(build_tree(child, metadata, counts));
        }
    }

    controls
}

/// Materialize one structured-content element, merging its correlated
/// metadata record and recursing into its content region for children.
fn create_control(
    node: &XmlElement,
    metadata: &HashMap<String, MetadataRecord>,
    counts: &mut ClassificationCounts,
) -> ContentControl {
    let properties = node.find_first("w:sdtPr");

    let id = property_value(properties, "w:id");
    let alias = property_value(properties, "w:alias");
    let tag = property_value(properties, "w:tag");

    // absence of metadata is not an error; the control still materializes
    let empty = MetadataRecord::default();
    let record = metadata.get(id).unwrap_or(&empty);

    // the record's own alias wins over the body's when it is non-empty
    let type_name = record
        .get("Alias")
        .filter(|a| !a.is_empty())
        .unwrap_or(alias)
        .to_lowercase();
    counts.classify(&type_name);

    let mut attributes = vec![
        AttributeRow::new("ID (Unsigned)", id),
        AttributeRow::new("Alias", alias),
    ];
    for (name, value) in record.fields() {
        attributes.push(AttributeRow::new(name, value));
    }

    let title = match record.get("Tag").filter(|t| !t.is_empty()) {
        Some(record_tag) => format!("{alias} - {record_tag}"),
        None => alias.to_string(),
    };

    let children = match node.find_first("w:sdtContent") {
        Some(content) => build_tree(content, metadata, counts),
        None => Vec::new(),
    };

    ContentControl {
        title,
        tag: tag.to_string(),
        attributes,
        children,
        expanded: false,
    }
}

/// `w:val` of the named property element, or empty when absent.
fn property_value<'a>(properties: Option<&'a XmlElement>, name: &str) -> &'a str {
    properties
        .and_then(|pr| pr.find_first(name))
        .and_then(|el| el.attribute("w:val"))
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(xml: &str) -> XmlElement {
        XmlElement::parse(xml).unwrap()
    }

    fn sdt(id: &str, alias: &str, content: &str) -> String {
        format!(
            r#"<w:sdt><w:sdtPr><w:id w:val="{id}"/><w:alias w:val="{alias}"/></w:sdtPr><w:sdtContent>{content}</w:sdtContent></w:sdt>"#
        )
    }

    #[test]
    fn test_wrapper_elements_are_transparent() {
        let xml = format!(
            "<w:body><w:p><w:r>{}</w:r></w:p>{}</w:body>",
            sdt("1", "A", ""),
            sdt("2", "B", "")
        );
        let root = body(&xml);
        let mut counts = ClassificationCounts::default();
        let controls = build_tree(&root, &HashMap::new(), &mut counts);

        // both controls surface at the same level despite the w:p/w:r nesting
        assert_eq!(controls.len(), 2);
        assert_eq!(controls[0].title, "A");
        assert_eq!(controls[1].title, "B");
    }

    #[test]
    fn test_nested_controls_become_children() {
        let inner = sdt("2", "Inner", "");
        let xml = format!("<w:body>{}</w:body>", sdt("1", "Outer", &inner));
        let root = body(&xml);
        let mut counts = ClassificationCounts::default();
        let controls = build_tree(&root, &HashMap::new(), &mut counts);

        assert_eq!(controls.len(), 1);
        assert_eq!(controls[0].children.len(), 1);
        assert_eq!(controls[0].children[0].title, "Inner");
    }

    #[test]
    fn test_control_without_metadata_has_two_rows() {
        let xml = format!("<w:body>{}</w:body>", sdt("7", "Orphan", ""));
        let root = body(&xml);
        let mut counts = ClassificationCounts::default();
        let controls = build_tree(&root, &HashMap::new(), &mut counts);

        let control = &controls[0];
        assert_eq!(control.title, "Orphan");
        assert_eq!(control.attributes.len(), 2);
        assert_eq!(control.attributes[0].name, "ID (Unsigned)");
        assert_eq!(control.attributes[0].value, "7");
        assert_eq!(control.attributes[1].name, "Alias");
        assert_eq!(control.attributes[1].value, "Orphan");
    }

    #[test]
    fn test_metadata_merge_title_and_counts() {
        let meta = XmlElement::parse(
            "<Metadata><Alias>Clause</Alias><Tag>T1</Tag></Metadata>",
        )
        .unwrap();
        let mut table = HashMap::new();
        table.insert("1".to_string(), MetadataRecord::flatten(&meta));

        let xml = format!("<w:body>{}</w:body>", sdt("1", "A", ""));
        let root = body(&xml);
        let mut counts = ClassificationCounts::default();
        let controls = build_tree(&root, &table, &mut counts);

        assert_eq!(controls[0].title, "A - T1");
        assert_eq!(counts.total_clauses, 1);
        let names: Vec<_> = controls[0]
            .attributes
            .iter()
            .map(|row| row.name.as_str())
            .collect();
        assert_eq!(names, vec!["ID (Unsigned)", "Alias", "Alias", "Tag"]);
    }

    #[test]
    fn test_body_alias_classifies_when_record_alias_missing() {
        let xml = format!("<w:body>{}</w:body>", sdt("1", "SignatureField", ""));
        let root = body(&xml);
        let mut counts = ClassificationCounts::default();
        build_tree(&root, &HashMap::new(), &mut counts);
        assert_eq!(counts.total_fields, 1);
    }

    #[test]
    fn test_missing_properties_defaults_to_empty() {
        let root = body("<w:body><w:sdt><w:sdtContent/></w:sdt></w:body>");
        let mut counts = ClassificationCounts::default();
        let controls = build_tree(&root, &HashMap::new(), &mut counts);

        assert_eq!(controls[0].title, "");
        assert_eq!(controls[0].tag, "");
        assert!(controls[0].children.is_empty());
        assert_eq!(counts, ClassificationCounts::default());
    }
}
