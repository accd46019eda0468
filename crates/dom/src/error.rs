use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    #[error("Invalid UTF-8 in document: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document has no root element")]
    MissingRoot,

    #[error("Document has more than one root element ('{0}')")]
    MultipleRoots(String),

    #[error("Element '{0}' is never closed")]
    Unclosed(String),
}

impl From<quick_xml::events::attributes::AttrError> for DomError {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        DomError::Xml(quick_xml::Error::InvalidAttr(e))
    }
}
