//! Token-stream decoding and encoding primitives.
//!
//! Every element decoder follows the same shape: read the attributes of the
//! start element it was handed, then walk the element's children with
//! [`TokenStream::for_each_child`], dispatching on the child's local name.
//! Encoders are the mirror image built on `quick_xml::Writer`.

mod stream;
pub(crate) mod writer;

pub use stream::{from_str, from_str_with_options, Attribute, Decode, StartElement, TokenStream, Visit};
pub use writer::{to_string, to_string_with_options, Encode};
