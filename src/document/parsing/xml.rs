//! Owned XML element tree built on top of quick-xml
//!
//! The tree builder and metadata collector need a navigable DOM: ordered
//! direct children, descendant lookup by tag name, attributes, and text
//! content. quick-xml only streams events, so this adapter assembles the
//! events into an owned [`XmlElement`] tree once per part.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};

/// One element of a parsed XML part.
///
/// Element names stay fully qualified (`w:sdtPr`); matching on the
/// namespace-stripped local name is available via [`XmlElement::local_name`].
/// Attribute names retain their qualification.
#[derive(Debug, Clone, Default)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
    text: String,
}

impl XmlElement {
    /// Parse an XML document and return its root element.
    pub fn parse(text: &str) -> Result<XmlElement> {
        let mut reader = Reader::from_str(text);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    stack.push(element_from_start(e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    let element = element_from_start(e)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Ok(Event::End(_)) => {
                    // quick-xml has already verified the end tag matches
                    let element = stack
                        .pop()
                        .ok_or_else(|| Error::MalformedXml("unexpected end tag".to_string()))?;
                    attach(&mut stack, &mut root, element)?;
                }
                Ok(Event::Text(ref t)) => {
                    if let Some(open) = stack.last_mut() {
                        let unescaped = t
                            .unescape()
                            .map_err(|e| Error::MalformedXml(e.to_string()))?;
                        open.text.push_str(&unescaped);
                    }
                }
                Ok(Event::CData(ref t)) => {
                    if let Some(open) = stack.last_mut() {
                        open.text.push_str(&String::from_utf8_lossy(t.as_ref()));
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(Error::MalformedXml(e.to_string())),
            }
        }

        if !stack.is_empty() {
            return Err(Error::MalformedXml("unclosed element".to_string()));
        }
        root.ok_or_else(|| Error::MalformedXml("no root element".to_string()))
    }

    /// Fully qualified element name, e.g. `w:sdt`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element name with any namespace prefix stripped, e.g. `sdt`.
    pub fn local_name(&self) -> &str {
        match self.name.split_once(':') {
            Some((_, local)) => local,
            None => &self.name,
        }
    }

    /// Attribute value by qualified name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct child elements only, in document order.
    ///
    /// Distinct from descendant iteration: the tree builder relies on this
    /// to avoid double-counting nested structured content.
    pub fn children(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter()
    }

    /// First descendant with the given qualified name, depth-first in
    /// document order. Does not match `self`.
    pub fn find_first(&self, name: &str) -> Option<&XmlElement> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find_first(name) {
                return Some(found);
            }
        }
        None
    }

    /// All descendants with the given qualified name, in document order.
    pub fn find_all(&self, name: &str) -> Vec<&XmlElement> {
        let mut found = Vec::new();
        self.collect_named(name, &mut found);
        found
    }

    fn collect_named<'a>(&'a self, name: &str, found: &mut Vec<&'a XmlElement>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            child.collect_named(name, found);
        }
    }

    /// Concatenated text content of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.children {
            child.collect_text(out);
        }
    }
}

/// Like DOM `getElementsByTagName(..)[0]` on a document: matches the root
/// element itself before searching descendants. Decoded metadata payloads
/// often use the searched-for name as their root.
pub fn find_named<'a>(root: &'a XmlElement, name: &str) -> Option<&'a XmlElement> {
    if root.name() == name {
        Some(root)
    } else {
        root.find_first(name)
    }
}

fn element_from_start(e: &BytesStart) -> Result<XmlElement> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| Error::MalformedXml(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::MalformedXml(e.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
        text: String::new(),
    })
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return Err(Error::MalformedXml(
            "multiple root elements".to_string(),
        ));
    }
    Ok(())
}
