use crate::error::DomError;
use std::path::Path;

/// A child of an element.
///
/// Character data is stored in its escaped source form so that entity
/// references survive a round trip untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
    ProcessingInstruction(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element with a qualified name, ordered attributes and owned children.
///
/// Attribute values are held unescaped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Qualified name as written, e.g. `svg` or `svg:rect`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without any namespace prefix.
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets an attribute, replacing an existing value in place.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Builder-style variant of [`Element::set_attr`].
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The default namespace declared on this element, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.attr("xmlns")
    }

    /// Prefixed namespace declarations (`xmlns:prefix="uri"`) on this element.
    pub fn prefixed_namespaces(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes()
            .filter_map(|(k, v)| k.strip_prefix("xmlns:").map(|prefix| (prefix, v)))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub fn append(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Child elements, skipping text and other node kinds.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// An independent copy of this element and its whole subtree.
    pub fn deep_copy(&self) -> Element {
        self.clone()
    }

    /// Appends the text to a trailing text node, or starts a new one.
    pub(crate) fn push_text(&mut self, text: &str) {
        if let Some(Node::Text(existing)) = self.children.last_mut() {
            existing.push_str(text);
        } else {
            self.children.push(Node::Text(text.to_string()));
        }
    }
}

/// A parsed document: a single root element.
///
/// Prolog content (declaration, doctype, top-level comments) is not retained.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn parse(source: &str) -> Result<Self, DomError> {
        crate::reader::parse_document(source)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DomError> {
        let bytes = std::fs::read(path)?;
        let source = std::str::from_utf8(&bytes)?;
        Self::parse(source)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }

    /// Serializes with an XML declaration.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DomError> {
        crate::writer::write_document(self)
    }
}
