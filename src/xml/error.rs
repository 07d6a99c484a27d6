use thiserror::Error;

/// Errors that can occur while reading or writing XML documents.
#[derive(Debug, Error)]
pub enum XmlError {
    /// The underlying quick-xml reader or writer failed.
    #[error("XML parse error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// An attribute could not be parsed.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// I/O error while writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// SEC-003: Element nesting exceeds the configured limit.
    #[error("XML nesting depth exceeds maximum of {0} levels")]
    MaxDepthExceeded(usize),

    /// Input exceeds the configured size limit.
    #[error("XML document is {size} bytes (max {max} bytes)")]
    TooLarge { size: usize, max: usize },

    /// A prefix was used without a matching `xmlns:` declaration.
    #[error("undeclared namespace prefix: {0}")]
    UnknownPrefix(String),

    /// The input contains no root element.
    #[error("XML document has no root element")]
    MissingRoot,

    /// The input contains more than one top-level element.
    #[error("XML document has more than one root element")]
    MultipleRoots,

    /// Non-whitespace text outside the root element.
    #[error("text content outside the root element")]
    StrayText,

    /// The input ended before all elements were closed.
    #[error("unexpected end of document inside <{0}>")]
    UnexpectedEof(String),

    /// Element or attribute names or text that are not valid UTF-8.
    #[error("invalid UTF-8 in XML: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
