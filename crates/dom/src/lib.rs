//! A small owned document tree for SVG sources and composites.
//!
//! Elements keep their qualified names and attributes exactly as written, so a
//! subtree can be lifted out of one document and re-serialized under another
//! without namespace resolution.

mod error;
mod node;
mod reader;
mod writer;

pub use error::DomError;
pub use node::{Document, Element, Node};

/// The SVG namespace URI.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
