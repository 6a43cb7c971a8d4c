//! Markup encoder for the element catalog.
//!
//! Elements are written with the conventional prefixes (`w:`, `wp:`, `a:`,
//! `pic:`, `r:`); declaring those prefixes is left to the enclosing part.

use std::io::Write;

use quick_xml::Writer;

use crate::error::Result;
use crate::model::{
    AlphaModFix, Anchor, Blip, BlipFill, DocProperties, Drawing, EffectExtent, Extent, Frame,
    Graphic, GraphicData, GraphicFrameLocks, GraphicFrameProperties, Hyperlink, Inline,
    NonVisualPicture, Picture, Placement, Point, Position, PresetGeometry, RawXml, Run,
    RunContent, ShapeProperties, Stretch, Transform, Wrap,
};
use crate::xml::writer::{encode_opt, write_raw, Tag};
use crate::xml::Encode;
use crate::XMLNS_DRAWINGML_MAIN;

impl Encode for Drawing {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        match &self.frame {
            Some(frame) => {
                let close = Tag::new("w:drawing").open(writer)?;
                match frame {
                    Frame::Inline(inline) => inline.encode(writer)?,
                    Frame::Anchor(anchor) => anchor.encode(writer)?,
                }
                close.write(writer)
            }
            None => Tag::new("w:drawing").empty(writer),
        }
    }
}

impl Encode for Inline {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let close = Tag::new("wp:inline")
            .attr("distT", self.dist_t)
            .attr("distB", self.dist_b)
            .attr("distL", self.dist_l)
            .attr("distR", self.dist_r)
            .open(writer)?;

        encode_opt(self.extent.as_ref(), writer)?;
        encode_opt(self.effect_extent.as_ref(), writer)?;
        encode_opt(self.doc_properties.as_ref(), writer)?;
        encode_opt(self.frame_properties.as_ref(), writer)?;
        encode_opt(self.graphic.as_ref(), writer)?;
        close.write(writer)
    }
}

impl Encode for Anchor {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let close = Tag::new("wp:anchor")
            .attr("distT", self.dist_t)
            .attr("distB", self.dist_b)
            .attr("distL", self.dist_l)
            .attr("distR", self.dist_r)
            .attr("simplePos", self.simple_pos)
            .attr("relativeHeight", self.relative_height)
            .attr("behindDoc", self.behind_doc)
            .attr("locked", self.locked)
            .attr("layoutInCell", self.layout_in_cell)
            .attr("allowOverlap", self.allow_overlap)
            .open(writer)?;

        // wp:simplePos is required even when positionH/positionV apply
        let placement = self.placement.as_ref();
        let simple = placement.and_then(Placement::point).copied().unwrap_or_default();
        write_point(writer, "wp:simplePos", &simple)?;

        if let Some(position) = placement.and_then(Placement::horizontal) {
            write_position(writer, "wp:positionH", position)?;
        }
        if let Some(position) = placement.and_then(Placement::vertical) {
            write_position(writer, "wp:positionV", position)?;
        }

        encode_opt(self.extent.as_ref(), writer)?;
        encode_opt(self.effect_extent.as_ref(), writer)?;
        encode_opt(self.wrap.as_ref(), writer)?;
        encode_opt(self.doc_properties.as_ref(), writer)?;
        encode_opt(self.frame_properties.as_ref(), writer)?;
        encode_opt(self.graphic.as_ref(), writer)?;
        close.write(writer)
    }
}

impl Encode for Extent {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        write_extent(writer, "wp:extent", self)
    }
}

impl Encode for EffectExtent {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        Tag::new("wp:effectExtent")
            .attr("l", self.l)
            .attr("t", self.t)
            .attr("r", self.r)
            .attr("b", self.b)
            .empty(writer)
    }
}

impl Encode for Wrap {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        match self {
            Wrap::None => Tag::new("wp:wrapNone").empty(writer),
            Wrap::Square(square) => Tag::new("wp:wrapSquare")
                .attr("wrapText", &square.wrap_text)
                .empty(writer),
        }
    }
}

impl Encode for DocProperties {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        Tag::new("wp:docPr")
            .attr("id", self.id)
            .attr_opt("name", self.name.as_deref())
            .attr_opt("descr", self.description.as_deref())
            .empty(writer)
    }
}

impl Encode for GraphicFrameProperties {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        match &self.locks {
            Some(locks) => {
                let close = Tag::new("wp:cNvGraphicFramePr").open(writer)?;
                locks.encode(writer)?;
                close.write(writer)
            }
            None => Tag::new("wp:cNvGraphicFramePr").empty(writer),
        }
    }
}

impl Encode for GraphicFrameLocks {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        Tag::new("a:graphicFrameLocks")
            .attr("xmlns:a", XMLNS_DRAWINGML_MAIN)
            .attr_nonzero("noChangeAspect", self.no_change_aspect)
            .empty(writer)
    }
}

impl Encode for Graphic {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let close = Tag::new("a:graphic")
            .attr_opt("xmlns:a", self.namespace.as_deref())
            .open(writer)?;
        encode_opt(self.data.as_ref(), writer)?;
        close.write(writer)
    }
}

impl Encode for GraphicData {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let close = Tag::new("a:graphicData").attr("uri", &self.uri).open(writer)?;
        encode_opt(self.picture.as_ref(), writer)?;
        close.write(writer)
    }
}

impl Encode for Picture {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let close = Tag::new("pic:pic")
            .attr_opt("xmlns:pic", self.namespace.as_deref())
            .open(writer)?;
        encode_opt(self.non_visual.as_ref(), writer)?;
        encode_opt(self.blip_fill.as_ref(), writer)?;
        encode_opt(self.shape_properties.as_ref(), writer)?;
        close.write(writer)
    }
}

impl Encode for NonVisualPicture {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let close = Tag::new("pic:nvPicPr").open(writer)?;
        if let Some(props) = &self.drawing {
            Tag::new("pic:cNvPr")
                .attr("id", &props.id)
                .attr("name", &props.name)
                .empty(writer)?;
        }
        Tag::new("pic:cNvPicPr").empty(writer)?;
        close.write(writer)
    }
}

impl Encode for BlipFill {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let close = Tag::new("pic:blipFill").open(writer)?;
        encode_opt(self.blip.as_ref(), writer)?;
        encode_opt(self.stretch.as_ref(), writer)?;
        close.write(writer)
    }
}

impl Encode for Blip {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let tag = Tag::new("a:blip")
            .attr("r:embed", &self.embed)
            .attr_opt("cstate", self.compression_state.as_deref());

        match &self.alpha_mod_fix {
            Some(alpha) => {
                let close = tag.open(writer)?;
                alpha.encode(writer)?;
                close.write(writer)
            }
            None => tag.empty(writer),
        }
    }
}

impl Encode for AlphaModFix {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        Tag::new("a:alphaModFix").attr("amt", self.amount).empty(writer)
    }
}

impl Encode for Stretch {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        if !self.fill_rect {
            return Tag::new("a:stretch").empty(writer);
        }
        let close = Tag::new("a:stretch").open(writer)?;
        Tag::new("a:fillRect").empty(writer)?;
        close.write(writer)
    }
}

impl Encode for ShapeProperties {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let close = Tag::new("pic:spPr").open(writer)?;
        encode_opt(self.transform.as_ref(), writer)?;
        encode_opt(self.preset_geometry.as_ref(), writer)?;
        close.write(writer)
    }
}

impl Encode for Transform {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let close = Tag::new("a:xfrm")
            .attr_nonzero("rot", self.rotation)
            .attr_nonzero("flipH", self.flip_h)
            .attr_nonzero("flipV", self.flip_v)
            .open(writer)?;
        if let Some(offset) = &self.offset {
            write_point(writer, "a:off", offset)?;
        }
        if let Some(extent) = &self.extent {
            write_extent(writer, "a:ext", extent)?;
        }
        close.write(writer)
    }
}

impl Encode for PresetGeometry {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let tag = Tag::new("a:prstGeom").attr("prst", &self.preset);
        match &self.adjust_values {
            Some(raw) => {
                let close = tag.open(writer)?;
                raw.encode(writer)?;
                close.write(writer)
            }
            None => tag.empty(writer),
        }
    }
}

impl Encode for RawXml {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        write_raw(writer, self.as_str())
    }
}

impl Encode for Hyperlink {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let close = Tag::new("w:hyperlink")
            .attr_opt("r:id", self.id.as_deref())
            .attr_opt("w:anchor", self.anchor.as_deref())
            .open(writer)?;
        self.run.encode(writer)?;
        close.write(writer)
    }
}

impl Encode for Run {
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let close = Tag::new("w:r").open(writer)?;
        encode_opt(self.properties.as_ref(), writer)?;
        for item in &self.content {
            match item {
                RunContent::Text(text) => {
                    let tag = Tag::new("w:t");
                    let tag = if text.trim() != text {
                        tag.attr("xml:space", "preserve")
                    } else {
                        tag
                    };
                    tag.text(writer, text)?;
                }
                RunContent::Tab => Tag::new("w:tab").empty(writer)?,
                RunContent::Break => Tag::new("w:br").empty(writer)?,
                RunContent::CarriageReturn => Tag::new("w:cr").empty(writer)?,
                RunContent::Drawing(drawing) => drawing.encode(writer)?,
            }
        }
        close.write(writer)
    }
}

fn write_extent<W: Write>(writer: &mut Writer<W>, name: &'static str, extent: &Extent) -> Result<()> {
    Tag::new(name)
        .attr("cx", extent.cx)
        .attr("cy", extent.cy)
        .empty(writer)
}

fn write_point<W: Write>(writer: &mut Writer<W>, name: &'static str, point: &Point) -> Result<()> {
    Tag::new(name).attr("x", point.x).attr("y", point.y).empty(writer)
}

fn write_position<W: Write>(
    writer: &mut Writer<W>,
    name: &'static str,
    position: &Position,
) -> Result<()> {
    let close = Tag::new(name)
        .attr("relativeFrom", &position.relative_from)
        .open(writer)?;
    Tag::new("wp:posOffset").text(writer, position.offset)?;
    close.write(writer)
}
