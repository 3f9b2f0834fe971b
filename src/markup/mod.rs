//! Markup reading
//!
//! Turns an XML document into a plain [`Element`] tree: tag, attributes, text
//! and ordered children. Nothing here knows what the tags mean; that is the
//! job of [`crate::ast::lower`].

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event as XmlEvent};
use quick_xml::Reader;
use std::path::Path;

/// One XML element with its direct text content.
///
/// `text` is the character data that appears before the first child element,
/// untrimmed. Text following a child is not retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Value of the first attribute named `key`
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First direct child with the given tag
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// All direct children with the given tag, in document order
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.tag == tag)
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            element.attributes.push((key, value));
        }
        Ok(element)
    }

    fn push_text(&mut self, text: &str) {
        // Text after a child element belongs to that child's tail
        if self.children.is_empty() {
            self.text.push_str(text);
        }
    }
}

/// Parse an XML document and return its root element
pub fn parse_document(source: &str) -> Result<Element> {
    let mut reader = Reader::from_str(source);
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            Error::input(format!(
                "malformed XML at byte {}: {}",
                reader.error_position(),
                e
            ))
        })?;

        match event {
            XmlEvent::Start(start) => {
                open.push(Element::from_start(&start)?);
            }
            XmlEvent::Empty(start) => {
                let element = Element::from_start(&start)?;
                attach(element, &mut open, &mut root)?;
            }
            XmlEvent::End(_) => {
                let element = open
                    .pop()
                    .ok_or_else(|| Error::input("closing tag without a matching opening tag"))?;
                attach(element, &mut open, &mut root)?;
            }
            XmlEvent::Text(text) => {
                if let Some(current) = open.last_mut() {
                    current.push_text(&text.unescape()?);
                }
            }
            XmlEvent::CData(cdata) => {
                if let Some(current) = open.last_mut() {
                    current.push_text(&String::from_utf8_lossy(&cdata.into_inner()));
                }
            }
            XmlEvent::Eof => break,
            // Declarations, comments, processing instructions and doctypes carry no content
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(Error::input(format!(
            "unexpected end of document inside <{}>",
            unclosed.tag
        )));
    }
    root.ok_or_else(|| Error::input("document has no root element"))
}

/// Read and parse an XML document from disk
pub fn parse_file(path: &Path) -> Result<Element> {
    let source = std::fs::read_to_string(path).map_err(|e| {
        Error::input(format!("{}: {}", path.display(), e))
    })?;
    log::debug!("Read {} bytes from {}", source.len(), path.display());
    parse_document(&source)
}

fn attach(element: Element, open: &mut [Element], root: &mut Option<Element>) -> Result<()> {
    match open.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(Error::input(format!(
                "second root element <{}> after the document root",
                element.tag
            )))
        }
    }
    Ok(())
}
