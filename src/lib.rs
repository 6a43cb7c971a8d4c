//! # docxdraw
//!
//! Typed decoding of WordprocessingML drawings and hyperlinks, and back.
//!
//! This library turns the drawing and hyperlink elements of a Word document
//! part (`word/document.xml`, headers, footers) into typed records: inline and
//! floating image frames, their DrawingML picture payloads, and hyperlinks with
//! the run they wrap. Records can be encoded back to markup or rendered as JSON.
//!
//! ## Quick Start
//!
//! ```
//! use docxdraw::{from_str, Drawing};
//!
//! let xml = r#"<w:drawing>
//!   <wp:inline distT="0" distB="0" distL="0" distR="0">
//!     <wp:extent cx="5949950" cy="3971925"/>
//!     <wp:docPr id="1" name="Picture 1"/>
//!   </wp:inline>
//! </w:drawing>"#;
//!
//! let drawing: Drawing = from_str(xml)?;
//! let extent = drawing.extent().unwrap_or_default();
//! assert_eq!(extent.cx, 5949950);
//! assert_eq!(drawing.doc_properties().map(|p| p.id), Some(1));
//! # Ok::<(), docxdraw::Error>(())
//! ```
//!
//! ## Scanning a Whole Part
//!
//! ```
//! use docxdraw::docx::scan_document;
//!
//! let body = r#"<w:body><w:p>
//!   <w:hyperlink r:id="rId5"><w:r><w:t>Example</w:t></w:r></w:hyperlink>
//! </w:p></w:body>"#;
//!
//! let scan = scan_document(body)?;
//! assert_eq!(scan.hyperlink_references(), vec!["rId5"]);
//! # Ok::<(), docxdraw::Error>(())
//! ```
//!
//! ## Behavior
//!
//! - Unknown elements and attributes are skipped, never errors.
//! - A malformed integer attribute aborts the whole decode.
//! - Absent integer attributes decode as `0`.
//! - Unmodeled sub-trees that must survive (`a:avLst`, `w:rPr`) are kept
//!   verbatim as [`RawXml`].

pub mod docx;
pub mod error;
pub mod model;
pub mod options;
pub mod render;
pub mod units;
pub mod xml;

// Re-exports
pub use error::{Error, Result};
pub use model::{
    AlphaModFix, Anchor, Blip, BlipFill, DocProperties, Drawing, EffectExtent, Extent, Frame,
    Graphic, GraphicData, GraphicFrameLocks, GraphicFrameProperties, Hyperlink, Inline,
    NonVisualDrawingProperties, NonVisualPicture, Picture, Placement, Point, Position,
    PresetGeometry, RawXml, Run, RunContent, ShapeProperties, Stretch, Transform, Wrap,
    WrapSquare,
};
pub use options::{DecodeOptions, EncodeOptions};
pub use xml::{from_str, from_str_with_options, to_string, to_string_with_options, Decode, Encode};

/// DrawingML main namespace (`xmlns:a`).
pub const XMLNS_DRAWINGML_MAIN: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

/// DrawingML picture namespace (`xmlns:pic`), also the `uri` of picture graphic data.
pub const XMLNS_DRAWINGML_PICTURE: &str =
    "http://schemas.openxmlformats.org/drawingml/2006/picture";
