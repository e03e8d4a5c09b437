//! Error type shared by the XML readers and writers.

use std::io;

/// Errors that can occur while writing or reading S3 XML.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// An error from quick-xml attribute handling.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// An element appeared where only text was allowed.
    #[error("unexpected XML element: {0}")]
    UnexpectedElement(String),

    /// A text value could not be converted to its target type.
    #[error("failed to parse value: {0}")]
    ParseError(String),
}
