//! Builds an owned [`Document`] from quick-xml reader events.
use crate::error::DomError;
use crate::node::{Document, Element, Node};
use log::debug;
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event as XmlEvent};

struct TreeBuilder {
    stack: Vec<Element>,
    root: Option<Element>,
}

impl TreeBuilder {
    fn attach(&mut self, node: Node) -> Result<(), DomError> {
        if let Some(parent) = self.stack.last_mut() {
            parent.append(node);
            return Ok(());
        }
        // Outside the root only an element matters; prolog/epilog content is dropped.
        if let Node::Element(el) = node {
            if self.root.is_some() {
                return Err(DomError::MultipleRoots(el.name().to_string()));
            }
            self.root = Some(el);
        }
        Ok(())
    }

    fn text(&mut self, raw: &str) {
        if let Some(parent) = self.stack.last_mut() {
            parent.push_text(raw);
        }
    }
}

fn element_from_start(start: &BytesStart) -> Result<Element, DomError> {
    let name = std::str::from_utf8(start.name().as_ref())?.to_string();
    let mut element = Element::new(name);
    for attr in start.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let raw = std::str::from_utf8(&attr.value)?;
        element.set_attr(key, unescape(raw)?.into_owned());
    }
    Ok(element)
}

/// Parses XML text into a document, keeping whitespace and character data verbatim.
pub(crate) fn parse_document(source: &str) -> Result<Document, DomError> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(false);

    let mut builder = TreeBuilder {
        stack: Vec::new(),
        root: None,
    };

    loop {
        match reader.read_event()? {
            XmlEvent::Start(e) => {
                let element = element_from_start(&e)?;
                builder.stack.push(element);
            }
            XmlEvent::Empty(e) => {
                let element = element_from_start(&e)?;
                builder.attach(Node::Element(element))?;
            }
            XmlEvent::End(_) => {
                // quick-xml checks that end names match, so the stack cannot underflow here.
                if let Some(element) = builder.stack.pop() {
                    builder.attach(Node::Element(element))?;
                }
            }
            XmlEvent::Text(e) => builder.text(std::str::from_utf8(&e)?),
            XmlEvent::GeneralRef(e) => {
                let name = std::str::from_utf8(&e)?;
                builder.text(&format!("&{};", name));
            }
            XmlEvent::CData(e) => {
                let content = std::str::from_utf8(&e)?.to_string();
                builder.attach(Node::CData(content))?;
            }
            XmlEvent::Comment(e) => {
                let content = std::str::from_utf8(&e)?.to_string();
                builder.attach(Node::Comment(content))?;
            }
            XmlEvent::PI(e) => {
                let content = std::str::from_utf8(&e)?.to_string();
                builder.attach(Node::ProcessingInstruction(content))?;
            }
            XmlEvent::Eof => break,
            // Declaration and doctype.
            _ => (),
        }
    }

    if let Some(open) = builder.stack.last() {
        return Err(DomError::Unclosed(open.name().to_string()));
    }
    let root = builder.root.ok_or(DomError::MissingRoot)?;
    debug!(
        "Parsed document <{}> with {} top-level children",
        root.name(),
        root.children().len()
    );
    Ok(Document::new(root))
}
