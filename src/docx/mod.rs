//! WordprocessingML element decoders.
//!
//! This module implements [`Decode`](crate::xml::Decode) for every record in
//! [`crate::model`], plus a scanner that collects drawings and hyperlinks from
//! a whole document part.

mod drawing;
mod graphic;
mod scan;
mod text;

pub use scan::{scan_document, scan_document_with_options, DocumentScan};
