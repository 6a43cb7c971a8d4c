//! Decoders for the graphic payload chain.
//!
//! Several elements carry an attribute that the enclosing element attaches
//! after decoding the child's structure: `uri` on `a:graphicData`,
//! `xmlns:pic` on `pic:pic` and `prst` on `a:prstGeom`.

use crate::error::Result;
use crate::model::{
    AlphaModFix, Blip, BlipFill, Graphic, GraphicData, NonVisualDrawingProperties,
    NonVisualPicture, Picture, PresetGeometry, ShapeProperties, Stretch, Transform,
};
use crate::xml::{Decode, StartElement, TokenStream, Visit};

use super::drawing::{extent, point};

impl Decode for Graphic {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let mut graphic = Graphic {
            namespace: start.attr_qualified("xmlns:a").map(String::from),
            data: None,
        };

        stream.for_each_child(start, |stream, child| match child.local_name() {
            "graphicData" => {
                let mut data = GraphicData::decode(stream, child)?;
                data.uri = child.attr("uri").unwrap_or_default().to_string();
                graphic.data = Some(data);
                Ok(Visit::Consumed)
            }
            _ => Ok(Visit::Unknown),
        })?;

        Ok(graphic)
    }
}

impl Decode for GraphicData {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let mut data = GraphicData::default();

        stream.for_each_child(start, |stream, child| match child.local_name() {
            "pic" => {
                let mut picture = Picture::decode(stream, child)?;
                picture.namespace = child.attr_qualified("xmlns:pic").map(String::from);
                data.picture = Some(picture);
                Ok(Visit::Consumed)
            }
            _ => Ok(Visit::Unknown),
        })?;

        Ok(data)
    }
}

impl Decode for Picture {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let mut picture = Picture::default();

        stream.for_each_child(start, |stream, child| {
            match child.local_name() {
                "nvPicPr" => picture.non_visual = Some(NonVisualPicture::decode(stream, child)?),
                "blipFill" => picture.blip_fill = Some(BlipFill::decode(stream, child)?),
                "spPr" => picture.shape_properties = Some(ShapeProperties::decode(stream, child)?),
                _ => return Ok(Visit::Unknown),
            }
            Ok(Visit::Consumed)
        })?;

        Ok(picture)
    }
}

impl Decode for NonVisualPicture {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let mut non_visual = NonVisualPicture::default();

        stream.for_each_child(start, |_, child| match child.local_name() {
            "cNvPr" => {
                non_visual.drawing = Some(NonVisualDrawingProperties {
                    id: child.attr("id").unwrap_or_default().to_string(),
                    name: child.attr("name").unwrap_or_default().to_string(),
                });
                Ok(Visit::Skip)
            }
            _ => Ok(Visit::Unknown),
        })?;

        Ok(non_visual)
    }
}

impl Decode for BlipFill {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let mut fill = BlipFill::default();

        stream.for_each_child(start, |stream, child| {
            match child.local_name() {
                "blip" => fill.blip = Some(Blip::decode(stream, child)?),
                "stretch" => fill.stretch = Some(Stretch::decode(stream, child)?),
                _ => return Ok(Visit::Unknown),
            }
            Ok(Visit::Consumed)
        })?;

        Ok(fill)
    }
}

impl Decode for Blip {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let mut blip = Blip::default();

        for attr in start.attributes() {
            match attr.local_name() {
                "embed" => blip.embed = attr.value.clone(),
                "cstate" => blip.compression_state = Some(attr.value.clone()),
                _ => {}
            }
        }

        stream.for_each_child(start, |_, child| match child.local_name() {
            "alphaModFix" => {
                blip.alpha_mod_fix = Some(AlphaModFix {
                    amount: child.int_attr("amt")?,
                });
                Ok(Visit::Skip)
            }
            _ => Ok(Visit::Unknown),
        })?;

        Ok(blip)
    }
}

impl Decode for Stretch {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let mut stretch = Stretch::default();

        stream.for_each_child(start, |_, child| match child.local_name() {
            "fillRect" => {
                stretch.fill_rect = true;
                Ok(Visit::Skip)
            }
            _ => Ok(Visit::Unknown),
        })?;

        Ok(stretch)
    }
}

impl Decode for ShapeProperties {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let mut props = ShapeProperties::default();

        stream.for_each_child(start, |stream, child| match child.local_name() {
            "xfrm" => {
                props.transform = Some(Transform::decode(stream, child)?);
                Ok(Visit::Consumed)
            }
            "prstGeom" => {
                let mut geometry = PresetGeometry::decode(stream, child)?;
                geometry.preset = child.attr("prst").unwrap_or_default().to_string();
                props.preset_geometry = Some(geometry);
                Ok(Visit::Consumed)
            }
            _ => Ok(Visit::Unknown),
        })?;

        Ok(props)
    }
}

impl Decode for Transform {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let mut xfrm = Transform::default();

        for attr in start.attributes() {
            match attr.local_name() {
                "rot" => xfrm.rotation = attr.parse(start.name())?,
                "flipH" => xfrm.flip_h = attr.parse(start.name())?,
                "flipV" => xfrm.flip_v = attr.parse(start.name())?,
                _ => {}
            }
        }

        stream.for_each_child(start, |_, child| {
            match child.local_name() {
                "off" => xfrm.offset = Some(point(child)?),
                "ext" => xfrm.extent = Some(extent(child)?),
                _ => return Ok(Visit::Unknown),
            }
            Ok(Visit::Skip)
        })?;

        Ok(xfrm)
    }
}

/// Structure only; `prst` is attached by the enclosing `pic:spPr`.
impl Decode for PresetGeometry {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let mut geometry = PresetGeometry::default();

        stream.for_each_child(start, |stream, child| match child.local_name() {
            "avLst" => {
                geometry.adjust_values = Some(stream.capture_raw(child)?);
                Ok(Visit::Consumed)
            }
            _ => Ok(Visit::Unknown),
        })?;

        Ok(geometry)
    }
}
