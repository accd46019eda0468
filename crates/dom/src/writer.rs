//! Serializes an owned [`Document`] through quick-xml's writer.
use crate::error::DomError;
use crate::node::{Document, Element, Node};
use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event as XmlEvent};
use std::io::Write;

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<(), DomError> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key, value));
    }

    if element.children().is_empty() {
        writer.write_event(XmlEvent::Empty(start))?;
        return Ok(());
    }

    writer.write_event(XmlEvent::Start(start))?;
    for child in element.children() {
        match child {
            Node::Element(el) => write_element(writer, el)?,
            Node::Text(text) => writer.write_event(XmlEvent::Text(BytesText::from_escaped(text.as_str())))?,
            Node::CData(data) => writer.write_event(XmlEvent::CData(BytesCData::new(data.as_str())))?,
            Node::Comment(text) => {
                writer.write_event(XmlEvent::Comment(BytesText::from_escaped(text.as_str())))?
            }
            Node::ProcessingInstruction(content) => {
                writer.write_event(XmlEvent::PI(BytesPI::new(content.as_str())))?
            }
        }
    }
    writer.write_event(XmlEvent::End(BytesEnd::new(element.name())))?;
    Ok(())
}

pub(crate) fn write_document(document: &Document) -> Result<Vec<u8>, DomError> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(XmlEvent::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.get_mut().write_all(b"\n")?;
    write_element(&mut writer, document.root())?;
    writer.get_mut().write_all(b"\n")?;
    Ok(writer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(source: &str) -> String {
        let doc = Document::parse(source).unwrap();
        String::from_utf8(doc.to_bytes().unwrap()).unwrap()
    }

    #[test]
    fn test_writes_declaration_and_root() {
        let doc = Document::new(Element::new("svg").with_attr("xmlns", crate::SVG_NS));
        let out = String::from_utf8(doc.to_bytes().unwrap()).unwrap();
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\"/>\n"
        );
    }

    #[test]
    fn test_round_trip_preserves_content() {
        let source = "<svg a=\"1\"><g>\n  <text>x &amp; y</text><!-- c --><![CDATA[<raw>]]></g></svg>";
        let out = round_trip(source);
        assert!(out.ends_with(&format!("{}\n", source)), "got: {}", out);
    }

    #[test]
    fn test_attribute_values_are_escaped_on_write() {
        let doc = Document::new(Element::new("svg").with_attr("title", "a < b & \"c\""));
        let out = String::from_utf8(doc.to_bytes().unwrap()).unwrap();
        let reparsed = roxmltree::Document::parse(&out).unwrap();
        assert_eq!(
            reparsed.root_element().attribute("title"),
            Some("a < b & \"c\"")
        );
    }

    #[test]
    fn test_output_is_well_formed_for_external_parser() {
        let out = round_trip(
            r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#a"/></svg>"##,
        );
        let reparsed = roxmltree::Document::parse(&out).unwrap();
        let used = reparsed.root_element().first_element_child().unwrap();
        assert_eq!(
            used.attribute(("http://www.w3.org/1999/xlink", "href")),
            Some("#a")
        );
    }
}
