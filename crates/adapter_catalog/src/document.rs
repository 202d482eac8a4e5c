//! Catalog document reading.
//!
//! The catalog is small, so it is read fully into an [`Element`] tree.
//! Structural problems (unreadable file, ill-formed XML, unclosed elements,
//! several root elements, no root at all) are reported as [`CatalogError`].

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::CatalogError;

/// Catalog element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name
    pub name: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order
    pub children: Vec<Element>,
    /// Concatenated text content (untrimmed)
    pub text: String,
}

impl Element {
    /// Creates an element with no attributes, children or text.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, CatalogError> {
        let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
        for attribute in start.attributes() {
            let attribute = attribute.map_err(|e| CatalogError::Malformed(e.to_string()))?;
            let value = attribute
                .unescape_value()
                .map_err(|e| CatalogError::Malformed(e.to_string()))?;
            element.attributes.push((
                String::from_utf8_lossy(attribute.key.as_ref()).into_owned(),
                value.into_owned(),
            ));
        }
        Ok(element)
    }

    /// Value of attribute `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First child named `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Trimmed text content.
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// Trimmed text of the first child named `name`.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(Element::text)
    }
}

impl fmt::Display for Element {
    /// Start tag with attributes, e.g. `<Payoff type="DigitalPut">`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (key, value) in &self.attributes {
            write!(f, " {}=\"{}\"", key, value)?;
        }
        write!(f, ">")
    }
}

/// Parses a catalog document and returns its root element.
///
/// # Errors
/// - `CatalogError::Malformed` for ill-formed XML, unclosed elements or
///   several root elements
/// - `CatalogError::Empty` when the document has no root element
///
/// # Examples
/// ```
/// use adapter_catalog::{parse_document, CatalogError};
///
/// let root = parse_document("<Portfolio><Spam/></Portfolio>").unwrap();
/// assert_eq!(root.name, "Portfolio");
/// assert_eq!(root.children.len(), 1);
///
/// assert!(matches!(parse_document("<Portfolio>"), Err(CatalogError::Malformed(_))));
/// assert!(matches!(parse_document(""), Err(CatalogError::Empty)));
/// ```
pub fn parse_document(xml: &str) -> Result<Element, CatalogError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                if stack.is_empty() && root.is_some() {
                    return Err(multiple_roots());
                }
                stack.push(Element::from_start(&start)?);
            }
            Ok(Event::Empty(start)) => {
                let element = Element::from_start(&start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                let element = stack.pop().ok_or_else(|| {
                    CatalogError::Malformed("closing tag without opening tag".to_string())
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(text)) => {
                let value = text
                    .unescape()
                    .map_err(|e| CatalogError::Malformed(e.to_string()))?;
                match stack.last_mut() {
                    Some(parent) => parent.text.push_str(&value),
                    None if value.trim().is_empty() => {}
                    None => {
                        return Err(CatalogError::Malformed(
                            "text outside the root element".to_string(),
                        ))
                    }
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(parent) = stack.last_mut() {
                    parent.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(CatalogError::Malformed(format!(
                    "position {}: {}",
                    reader.error_position(),
                    e
                )))
            }
        }
    }

    if let Some(open) = stack.last() {
        return Err(CatalogError::Malformed(format!(
            "element <{}> is not closed",
            open.name
        )));
    }
    root.ok_or(CatalogError::Empty)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), CatalogError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_some() => return Err(multiple_roots()),
        None => *root = Some(element),
    }
    Ok(())
}

fn multiple_roots() -> CatalogError {
    CatalogError::Malformed("multiple root elements".to_string())
}

/// Reads and parses the catalog at `path`.
///
/// # Errors
/// `CatalogError::NotFound` / `CatalogError::Io` for file problems, then the
/// errors of [`parse_document`].
pub fn read_catalog(path: &Path) -> Result<Element, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::NotFound(path.display().to_string()),
        _ => CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        },
    })?;
    parse_document(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_structure() {
        let xml = r#"<?xml version="1.0"?>
            <!-- deals -->
            <Portfolio owner="desk">
                <Payoff type="DigitalPut">
                    <strike> 7.5 </strike>
                    <model distribution="Gamma"><location>9</location><scale>3</scale></model>
                </Payoff>
                <Spam/>
            </Portfolio>"#;
        let root = parse_document(xml).unwrap();
        assert_eq!(root.attribute("owner"), Some("desk"));
        assert_eq!(root.children.len(), 2);

        let payoff = &root.children[0];
        assert_eq!(payoff.attribute("type"), Some("DigitalPut"));
        assert_eq!(payoff.child_text("strike"), Some("7.5"));
        let model = payoff.child("model").unwrap();
        assert_eq!(model.attribute("distribution"), Some("Gamma"));
        assert_eq!(model.child_text("scale"), Some("3"));
        assert_eq!(root.children[1].name, "Spam");
    }

    #[test]
    fn test_escaped_text_and_attributes() {
        let root = parse_document(r#"<R a="x &amp; y"><t>&lt;1&gt;</t></R>"#).unwrap();
        assert_eq!(root.attribute("a"), Some("x & y"));
        assert_eq!(root.child_text("t"), Some("<1>"));
    }

    #[test]
    fn test_mismatched_tags_are_malformed() {
        assert!(matches!(
            parse_document("<Portfolio><Payoff></Portfolio></Payoff>"),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn test_unclosed_root_is_malformed() {
        match parse_document("<Portfolio><Payoff/>") {
            Err(CatalogError::Malformed(msg)) => assert!(msg.contains("Portfolio")),
            other => panic!("Expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_multiple_roots_are_malformed() {
        assert!(matches!(
            parse_document("<A/><B/>"),
            Err(CatalogError::Malformed(_))
        ));
        assert!(matches!(
            parse_document("<A></A><B></B>"),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn test_no_root() {
        assert!(matches!(parse_document("   "), Err(CatalogError::Empty)));
        assert!(matches!(
            parse_document("<?xml version=\"1.0\"?><!-- nothing -->"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_display_start_tag() {
        let mut element = Element::new("Payoff");
        element
            .attributes
            .push(("type".to_string(), "BarrierCall".to_string()));
        assert_eq!(element.to_string(), "<Payoff type=\"BarrierCall\">");
    }
}
