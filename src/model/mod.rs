//! Typed records for the drawing and hyperlink element catalog.
//!
//! Each record corresponds to one element shape. Records own their children
//! exclusively; optional fields are populated only when the matching child
//! element was present in the source.

mod drawing;
mod graphic;
mod text;

pub use drawing::*;
pub use graphic::*;
pub use text::*;
