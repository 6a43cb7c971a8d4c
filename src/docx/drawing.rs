//! Decoders for `w:drawing` and its inline/floating frames.

use crate::error::Result;
use crate::model::{
    Anchor, DocProperties, Drawing, EffectExtent, Extent, Frame, Graphic, GraphicFrameLocks,
    GraphicFrameProperties, Inline, Placement, Point, Position, Wrap, WrapSquare,
};
use crate::xml::{Decode, StartElement, TokenStream, Visit};

impl Decode for Drawing {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let mut drawing = Drawing::new();

        stream.for_each_child(start, |stream, child| match child.local_name() {
            "inline" | "anchor" if drawing.frame.is_some() => {
                log::debug!("ignoring additional <{}> in <{}>", child.name(), start.name());
                Ok(Visit::Skip)
            }
            "inline" => {
                drawing.frame = Some(Frame::Inline(Inline::decode(stream, child)?));
                Ok(Visit::Consumed)
            }
            "anchor" => {
                drawing.frame = Some(Frame::Anchor(Anchor::decode(stream, child)?));
                Ok(Visit::Consumed)
            }
            _ => Ok(Visit::Unknown),
        })?;

        Ok(drawing)
    }
}

/// Children shared by inline and floating frames.
#[derive(Default)]
struct FrameChildren {
    extent: Option<Extent>,
    effect_extent: Option<EffectExtent>,
    doc_properties: Option<DocProperties>,
    frame_properties: Option<GraphicFrameProperties>,
    graphic: Option<Graphic>,
}

impl FrameChildren {
    fn visit(&mut self, stream: &mut TokenStream<'_>, child: &StartElement) -> Result<Visit> {
        match child.local_name() {
            "extent" => {
                self.extent = Some(extent(child)?);
                Ok(Visit::Skip)
            }
            "effectExtent" => {
                self.effect_extent = Some(effect_extent(child)?);
                Ok(Visit::Skip)
            }
            "docPr" => {
                self.doc_properties = Some(DocProperties::decode(stream, child)?);
                Ok(Visit::Consumed)
            }
            "cNvGraphicFramePr" => {
                self.frame_properties = Some(GraphicFrameProperties::decode(stream, child)?);
                Ok(Visit::Consumed)
            }
            "graphic" => {
                self.graphic = Some(Graphic::decode(stream, child)?);
                Ok(Visit::Consumed)
            }
            _ => Ok(Visit::Unknown),
        }
    }
}

impl Decode for Inline {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let mut inline = Inline::default();

        for attr in start.attributes() {
            match attr.local_name() {
                "distT" => inline.dist_t = attr.parse(start.name())?,
                "distB" => inline.dist_b = attr.parse(start.name())?,
                "distL" => inline.dist_l = attr.parse(start.name())?,
                "distR" => inline.dist_r = attr.parse(start.name())?,
                _ => {}
            }
        }

        let mut children = FrameChildren::default();
        stream.for_each_child(start, |stream, child| children.visit(stream, child))?;

        inline.extent = children.extent;
        inline.effect_extent = children.effect_extent;
        inline.doc_properties = children.doc_properties;
        inline.frame_properties = children.frame_properties;
        inline.graphic = children.graphic;
        Ok(inline)
    }
}

impl Decode for Anchor {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let mut anchor = Anchor::default();

        for attr in start.attributes() {
            match attr.local_name() {
                "distT" => anchor.dist_t = attr.parse(start.name())?,
                "distB" => anchor.dist_b = attr.parse(start.name())?,
                "distL" => anchor.dist_l = attr.parse(start.name())?,
                "distR" => anchor.dist_r = attr.parse(start.name())?,
                "simplePos" => anchor.simple_pos = attr.parse(start.name())?,
                "relativeHeight" => anchor.relative_height = attr.parse(start.name())?,
                "behindDoc" => anchor.behind_doc = attr.parse(start.name())?,
                "locked" => anchor.locked = attr.parse(start.name())?,
                "layoutInCell" => anchor.layout_in_cell = attr.parse(start.name())?,
                "allowOverlap" => anchor.allow_overlap = attr.parse(start.name())?,
                _ => {}
            }
        }

        let mut children = FrameChildren::default();
        let mut simple_point = None;
        let mut horizontal = None;
        let mut vertical = None;

        stream.for_each_child(start, |stream, child| match child.local_name() {
            "simplePos" => {
                simple_point = Some(point(child)?);
                Ok(Visit::Skip)
            }
            "positionH" => {
                horizontal = Some(Position::decode(stream, child)?);
                Ok(Visit::Consumed)
            }
            "positionV" => {
                vertical = Some(Position::decode(stream, child)?);
                Ok(Visit::Consumed)
            }
            "wrapNone" => {
                anchor.wrap = Some(Wrap::None);
                Ok(Visit::Skip)
            }
            "wrapSquare" => {
                anchor.wrap = Some(Wrap::Square(WrapSquare {
                    wrap_text: child.attr("wrapText").unwrap_or_default().to_string(),
                }));
                Ok(Visit::Skip)
            }
            _ => children.visit(stream, child),
        })?;

        anchor.placement = placement(anchor.simple_pos, simple_point, horizontal, vertical);
        anchor.extent = children.extent;
        anchor.effect_extent = children.effect_extent;
        anchor.doc_properties = children.doc_properties;
        anchor.frame_properties = children.frame_properties;
        anchor.graphic = children.graphic;
        Ok(anchor)
    }
}

/// Pick the effective placement of an anchor.
///
/// Word always writes `wp:simplePos` and only honors it when the anchor's
/// `simplePos` flag is set; otherwise positionH/positionV apply. Elements
/// that are not in effect are kept on the chosen variant.
fn placement(
    flag: i32,
    point: Option<Point>,
    horizontal: Option<Position>,
    vertical: Option<Position>,
) -> Option<Placement> {
    match point {
        Some(point) if flag != 0 => Some(Placement::Simple {
            point,
            horizontal,
            vertical,
        }),
        point if horizontal.is_some() || vertical.is_some() => Some(Placement::Relative {
            point,
            horizontal,
            vertical,
        }),
        point => point.map(Placement::simple),
    }
}

impl Decode for Position {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let mut position = Position::default();

        for attr in start.attributes() {
            if attr.local_name() == "relativeFrom" {
                position.relative_from = attr.value.clone();
            }
        }

        stream.for_each_child(start, |stream, child| match child.local_name() {
            "posOffset" => {
                position.offset = stream.read_integer(child)?;
                Ok(Visit::Consumed)
            }
            _ => Ok(Visit::Unknown),
        })?;

        Ok(position)
    }
}

impl Decode for DocProperties {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let mut props = DocProperties::default();

        for attr in start.attributes() {
            match attr.local_name() {
                "id" => props.id = attr.parse(start.name())?,
                "name" => props.name = Some(attr.value.clone()),
                "descr" => props.description = Some(attr.value.clone()),
                _ => {}
            }
        }

        // hlinkClick and extension lists are not modeled
        stream.skip(start)?;
        Ok(props)
    }
}

impl Decode for GraphicFrameProperties {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let mut props = GraphicFrameProperties::default();

        stream.for_each_child(start, |stream, child| match child.local_name() {
            "graphicFrameLocks" => {
                let mut locks = GraphicFrameLocks::decode(stream, child)?;
                locks.no_change_aspect = child.int_attr("noChangeAspect")?;
                props.locks = Some(locks);
                Ok(Visit::Consumed)
            }
            _ => Ok(Visit::Unknown),
        })?;

        Ok(props)
    }
}

/// Structure only; `noChangeAspect` is attached by the enclosing
/// `cNvGraphicFramePr`.
impl Decode for GraphicFrameLocks {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        stream.for_each_child(start, |_, _| Ok(Visit::Unknown))?;
        Ok(GraphicFrameLocks::default())
    }
}

impl Decode for Extent {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let value = extent(start)?;
        stream.skip(start)?;
        Ok(value)
    }
}

impl Decode for EffectExtent {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let value = effect_extent(start)?;
        stream.skip(start)?;
        Ok(value)
    }
}

impl Decode for Point {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let value = point(start)?;
        stream.skip(start)?;
        Ok(value)
    }
}

pub(crate) fn extent(start: &StartElement) -> Result<Extent> {
    Ok(Extent {
        cx: start.int_attr("cx")?,
        cy: start.int_attr("cy")?,
    })
}

pub(crate) fn point(start: &StartElement) -> Result<Point> {
    Ok(Point {
        x: start.int_attr("x")?,
        y: start.int_attr("y")?,
    })
}

fn effect_extent(start: &StartElement) -> Result<EffectExtent> {
    Ok(EffectExtent {
        l: start.int_attr("l")?,
        t: start.int_attr("t")?,
        r: start.int_attr("r")?,
        b: start.int_attr("b")?,
    })
}
