//! Drawing container and inline/floating frame models.

use serde::{Deserialize, Serialize};

use super::graphic::Graphic;

/// A `w:drawing` element.
///
/// Holds at most one frame; a drawing whose content was not recognized
/// decodes to an empty container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    /// The inline or floating frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<Frame>,
}

impl Drawing {
    /// Create an empty drawing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a drawing holding an inline frame.
    pub fn inline(inline: Inline) -> Self {
        Self {
            frame: Some(Frame::Inline(inline)),
        }
    }

    /// Create a drawing holding a floating anchor.
    pub fn anchor(anchor: Anchor) -> Self {
        Self {
            frame: Some(Frame::Anchor(anchor)),
        }
    }

    /// The inline frame, if this drawing is inline.
    pub fn as_inline(&self) -> Option<&Inline> {
        match &self.frame {
            Some(Frame::Inline(inline)) => Some(inline),
            _ => None,
        }
    }

    /// The anchor, if this drawing floats.
    pub fn as_anchor(&self) -> Option<&Anchor> {
        match &self.frame {
            Some(Frame::Anchor(anchor)) => Some(anchor),
            _ => None,
        }
    }

    /// Check if no frame was recognized.
    pub fn is_empty(&self) -> bool {
        self.frame.is_none()
    }

    /// Displayed size of the frame.
    pub fn extent(&self) -> Option<Extent> {
        match self.frame.as_ref()? {
            Frame::Inline(inline) => inline.extent,
            Frame::Anchor(anchor) => anchor.extent,
        }
    }

    /// The graphic payload of the frame.
    pub fn graphic(&self) -> Option<&Graphic> {
        match self.frame.as_ref()? {
            Frame::Inline(inline) => inline.graphic.as_ref(),
            Frame::Anchor(anchor) => anchor.graphic.as_ref(),
        }
    }

    /// Document properties (id, name, alt text) of the frame.
    pub fn doc_properties(&self) -> Option<&DocProperties> {
        match self.frame.as_ref()? {
            Frame::Inline(inline) => inline.doc_properties.as_ref(),
            Frame::Anchor(anchor) => anchor.doc_properties.as_ref(),
        }
    }

    /// Relationship ids of embedded images (`r:embed`), for the package resolver.
    pub fn image_references(&self) -> Vec<&str> {
        self.graphic()
            .and_then(|g| g.data.as_ref())
            .and_then(|d| d.picture.as_ref())
            .and_then(|p| p.blip_fill.as_ref())
            .and_then(|f| f.blip.as_ref())
            .map(|b| vec![b.embed.as_str()])
            .unwrap_or_default()
    }
}

/// The single frame a drawing holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frame {
    /// Graphic in the text flow (`wp:inline`)
    Inline(Inline),
    /// Floating graphic (`wp:anchor`)
    Anchor(Anchor),
}

/// An inline graphic frame (`wp:inline`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inline {
    /// Distance from text, top (EMU)
    pub dist_t: i64,
    /// Distance from text, bottom (EMU)
    pub dist_b: i64,
    /// Distance from text, left (EMU)
    pub dist_l: i64,
    /// Distance from text, right (EMU)
    pub dist_r: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<Extent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect_extent: Option<EffectExtent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_properties: Option<DocProperties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_properties: Option<GraphicFrameProperties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphic: Option<Graphic>,
}

/// A floating graphic frame (`wp:anchor`).
///
/// The integer flags keep the source's `0`/`1` representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub dist_t: i64,
    pub dist_b: i64,
    pub dist_l: i64,
    pub dist_r: i64,
    /// Use the simple position instead of positionH/positionV
    pub simple_pos: i32,
    /// Z-order among floating objects
    pub relative_height: i64,
    pub behind_doc: i32,
    pub locked: i32,
    pub layout_in_cell: i32,
    pub allow_overlap: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<Extent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect_extent: Option<EffectExtent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<Wrap>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_properties: Option<DocProperties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_properties: Option<GraphicFrameProperties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphic: Option<Graphic>,
}

impl Anchor {
    /// Check if the frame has no wrapping (`wp:wrapNone`).
    pub fn is_wrap_none(&self) -> bool {
        matches!(self.wrap, Some(Wrap::None))
    }

    /// Square wrapping settings, if the frame wraps square.
    pub fn wrap_square(&self) -> Option<&WrapSquare> {
        match &self.wrap {
            Some(Wrap::Square(square)) => Some(square),
            _ => None,
        }
    }

    /// The `wp:simplePos` point, whether or not it is in effect.
    pub fn simple_point(&self) -> Option<&Point> {
        self.placement.as_ref()?.point()
    }

    /// The `wp:positionH` element, whether or not it is in effect.
    pub fn position_h(&self) -> Option<&Position> {
        self.placement.as_ref()?.horizontal()
    }

    /// The `wp:positionV` element, whether or not it is in effect.
    pub fn position_v(&self) -> Option<&Position> {
        self.placement.as_ref()?.vertical()
    }
}

/// Size of a frame in EMU (`wp:extent`, `a:ext`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extent {
    pub cx: i64,
    pub cy: i64,
}

/// Extra space added around a frame for effects (`wp:effectExtent`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectExtent {
    pub l: i64,
    pub t: i64,
    pub r: i64,
    pub b: i64,
}

/// An x/y coordinate pair in EMU (`wp:simplePos`, `a:off`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// Drawing object properties (`wp:docPr`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocProperties {
    /// Unique id of the drawing object
    pub id: u32,

    /// Object name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Alternative text (`descr`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Non-visual graphic frame properties (`wp:cNvGraphicFramePr`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphicFrameProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locks: Option<GraphicFrameLocks>,
}

/// Frame lock flags (`a:graphicFrameLocks`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphicFrameLocks {
    /// `1` when the aspect ratio is locked
    pub no_change_aspect: i32,
}

/// Where a floating frame is placed.
///
/// The variant records which positioning is in effect. Both variants keep
/// every positioning element that was present, so the ones not in effect
/// survive re-encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Absolute page coordinates (`wp:simplePos`)
    Simple {
        point: Point,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        horizontal: Option<Position>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        vertical: Option<Position>,
    },
    /// Offsets relative to a reference (`wp:positionH` / `wp:positionV`)
    Relative {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        point: Option<Point>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        horizontal: Option<Position>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        vertical: Option<Position>,
    },
}

impl Placement {
    /// Simple placement at `point` with no relative positions.
    pub fn simple(point: Point) -> Self {
        Placement::Simple {
            point,
            horizontal: None,
            vertical: None,
        }
    }

    /// Relative placement with no `wp:simplePos` point.
    pub fn relative(horizontal: Option<Position>, vertical: Option<Position>) -> Self {
        Placement::Relative {
            point: None,
            horizontal,
            vertical,
        }
    }

    /// Check if `wp:simplePos` is in effect.
    pub fn is_simple(&self) -> bool {
        matches!(self, Placement::Simple { .. })
    }

    pub fn point(&self) -> Option<&Point> {
        match self {
            Placement::Simple { point, .. } => Some(point),
            Placement::Relative { point, .. } => point.as_ref(),
        }
    }

    pub fn horizontal(&self) -> Option<&Position> {
        match self {
            Placement::Simple { horizontal, .. } | Placement::Relative { horizontal, .. } => {
                horizontal.as_ref()
            }
        }
    }

    pub fn vertical(&self) -> Option<&Position> {
        match self {
            Placement::Simple { vertical, .. } | Placement::Relative { vertical, .. } => {
                vertical.as_ref()
            }
        }
    }
}

/// One axis of a relative position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Reference the offset is measured from (e.g., "column", "page")
    pub relative_from: String,
    /// Signed offset in EMU (`wp:posOffset`)
    pub offset: i64,
}

impl Position {
    /// Create a position.
    pub fn new(relative_from: impl Into<String>, offset: i64) -> Self {
        Self {
            relative_from: relative_from.into(),
            offset,
        }
    }
}

/// Text wrapping around a floating frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wrap {
    /// `wp:wrapNone`, a presence-only marker
    None,
    /// `wp:wrapSquare`
    Square(WrapSquare),
}

/// Square wrapping settings (`wp:wrapSquare`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapSquare {
    /// Which sides text may wrap on (e.g., "bothSides")
    pub wrap_text: String,
}
