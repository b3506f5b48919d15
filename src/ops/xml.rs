use std::fs;
use std::io;
use std::path::Path;

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

/// One element of a parsed XML document.
///
/// Attributes keep document order. `text` is the concatenation of the
/// element's trimmed text and CDATA segments; whitespace-only segments are
/// dropped during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// First attribute value with the given name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// First child element with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }
}

/// Errors returned by the XML helpers.
#[derive(Debug, Error)]
pub enum XmlError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("XML parse error: {0}")]
    Parse(#[from] quick_xml::Error),

    #[error("malformed attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("bad escape sequence: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    #[error("document has no root element")]
    NoRoot,

    #[error("document has more than one root element")]
    MultipleRoots,

    #[error("document ended with unclosed elements")]
    Unclosed,
}

/// Read `path` and parse it as an XML document, returning the root element.
pub fn read_xml(path: impl AsRef<Path>) -> Result<XmlElement, XmlError> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Parse an XML document from a string.
pub fn parse(content: &str) -> Result<XmlElement, XmlError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(element_from(&e)?),
            Event::Empty(e) => {
                let el = element_from(&e)?;
                attach(&mut stack, &mut root, el)?;
            }
            Event::End(_) => {
                // The reader verifies tag balance, so the stack cannot be
                // empty here.
                if let Some(el) = stack.pop() {
                    attach(&mut stack, &mut root, el)?;
                }
            }
            Event::Text(t) => {
                if let Some(top) = stack.last_mut() {
                    top.text
                        .push_str(&unescape(&t.decode().map_err(quick_xml::Error::from)?)?);
                }
            }
            Event::CData(t) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&t.into_inner()));
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctypes.
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(XmlError::Unclosed);
    }
    root.ok_or(XmlError::NoRoot)
}

fn element_from(e: &BytesStart<'_>) -> Result<XmlElement, XmlError> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }
    Ok(XmlElement {
        name,
        attributes,
        ..XmlElement::default()
    })
}

fn attach(
    stack: &mut Vec<XmlElement>,
    root: &mut Option<XmlElement>,
    el: XmlElement,
) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(el);
        Ok(())
    } else if root.is_none() {
        *root = Some(el);
        Ok(())
    } else {
        Err(XmlError::MultipleRoots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_and_attributes() {
        let doc = r#"<?xml version="1.0"?>
<library name="main">
  <shelf id="a">
    <book title="Dune"/>
    <book title="Hyperion"/>
  </shelf>
  <shelf id="b"/>
</library>"#;
        let root = parse(doc).unwrap();

        assert_eq!(root.name, "library");
        assert_eq!(root.attr("name"), Some("main"));
        assert_eq!(root.children.len(), 2);

        let shelf = root.child("shelf").unwrap();
        assert_eq!(shelf.attr("id"), Some("a"));
        assert_eq!(shelf.children.len(), 2);
        assert_eq!(shelf.children[1].attr("title"), Some("Hyperion"));
    }

    #[test]
    fn collects_text_and_unescapes_entities() {
        let root = parse("<msg>fish &amp; chips</msg>").unwrap();
        assert_eq!(root.text, "fish & chips");

        let root = parse("<msg><![CDATA[a < b]]></msg>").unwrap();
        assert_eq!(root.text, "a < b");
    }

    #[test]
    fn malformed_documents_error() {
        assert!(parse("<open><unclosed></open>").is_err());
        assert!(matches!(parse("   "), Err(XmlError::NoRoot)));
        assert!(matches!(
            parse("<a/><b/>"),
            Err(XmlError::MultipleRoots)
        ));
    }
}
