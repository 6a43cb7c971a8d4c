//! Output rendering for decoded records.
//!
//! Records can be written back as WordprocessingML markup through the
//! [`Encode`](crate::xml::Encode) implementations in this module, or
//! serialized to JSON for inspection.
//!
//! # Example
//!
//! ```
//! use docxdraw::{from_str, render::*, to_string, Drawing};
//!
//! let drawing: Drawing = from_str(r#"<w:drawing><wp:inline><wp:extent cx="1" cy="2"/></wp:inline></w:drawing>"#)?;
//!
//! // Back to markup
//! let xml = to_string(&drawing)?;
//! assert!(xml.contains(r#"<wp:extent cx="1" cy="2"/>"#));
//!
//! // To JSON
//! let json = to_json(&drawing, JsonFormat::Compact)?;
//! assert!(json.contains("\"cy\":2"));
//! # Ok::<(), docxdraw::Error>(())
//! ```

mod json;
mod xml;

pub use json::{to_json, to_json_default, JsonFormat};
