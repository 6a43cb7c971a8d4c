//! Error types for the docxdraw library.

use std::io;
use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias for docxdraw operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding or encoding drawing markup.
#[derive(Error, Debug)]
pub enum Error {
    /// The token source failed (malformed markup, mismatched tags, bad attribute syntax).
    #[error("XML error: {0}")]
    Xml(String),

    /// I/O error while writing encoded markup.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An element or attribute name is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A numeric attribute could not be parsed as a base-10 integer.
    #[error("Invalid integer in attribute `{attribute}` of <{element}>: {value:?}")]
    InvalidAttribute {
        /// Qualified name of the element carrying the attribute
        element: String,
        /// Attribute name as it appeared in the source
        attribute: String,
        /// The offending value
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Integer text content of an element could not be parsed.
    #[error("Invalid integer content of <{element}>: {value:?}")]
    InvalidContent {
        /// Qualified name of the element
        element: String,
        /// The offending text
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Element nesting exceeded the configured limit.
    #[error("Maximum XML depth {0} exceeded")]
    DepthLimitExceeded(usize),

    /// Error during JSON rendering.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
