//! Generic, namespace-aware XML element tree and its text codec.
//!
//! The service document model only ever sees [`Element`] and [`Document`]
//! values. Turning text into a tree (and back) goes through the [`XmlCodec`]
//! trait, so model code can be tested on hand-built trees without any XML
//! text in between.
//!
//! - `namespace` - [`Namespace`] values and the Atom / APP constants
//! - `element` - [`Element`], [`Attribute`], [`Node`], [`Document`]
//! - `reader` / `writer` - the quick-xml backed text layer behind [`QuickXmlCodec`]

mod element;
mod error;
mod namespace;
mod reader;
mod writer;

pub use element::{Attribute, Document, Element, Node};
pub use error::XmlError;
pub use namespace::{
    Namespace, ATOM_FORMAT, ATOM_FORMAT_URI, ATOM_PROTOCOL, ATOM_PROTOCOL_URI, XML,
};

use crate::config::Config;

/// Converts between XML text and [`Document`] trees.
pub trait XmlCodec {
    /// Parses XML text into a document tree.
    fn parse(&self, content: &str) -> Result<Document, XmlError>;

    /// Renders a document tree as XML text.
    fn render(&self, document: &Document) -> Result<String, XmlError>;
}

/// [`XmlCodec`] implementation backed by quick-xml.
#[derive(Debug, Clone)]
pub struct QuickXmlCodec {
    /// Spaces per nesting level in rendered output. 0 disables indentation.
    pub indent: usize,
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` before the root element.
    pub xml_declaration: bool,
    /// SEC-003: Maximum element nesting accepted by `parse`.
    pub max_depth: usize,
    /// Maximum input length in bytes accepted by `parse`.
    pub max_document_bytes: usize,
}

impl Default for QuickXmlCodec {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl QuickXmlCodec {
    pub fn from_config(config: &Config) -> Self {
        Self {
            indent: config.indent,
            xml_declaration: config.xml_declaration,
            max_depth: config.max_depth,
            max_document_bytes: usize::try_from(config.max_document_bytes).unwrap_or(usize::MAX),
        }
    }
}

impl XmlCodec for QuickXmlCodec {
    fn parse(&self, content: &str) -> Result<Document, XmlError> {
        reader::parse_document(content, self.max_depth, self.max_document_bytes)
    }

    fn render(&self, document: &Document) -> Result<String, XmlError> {
        writer::write_document(document, self.indent, self.xml_declaration)
    }
}
