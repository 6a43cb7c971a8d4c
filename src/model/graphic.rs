//! Graphic payload chain: graphic, graphic data, picture and its fills.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::drawing::{Extent, Point};

/// A graphic object (`a:graphic`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graphic {
    /// Declared `xmlns:a` namespace, if the element carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<GraphicData>,
}

/// Graphic payload tagged by kind (`a:graphicData`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphicData {
    /// URI identifying the payload kind
    pub uri: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<Picture>,
}

impl GraphicData {
    /// Check if the payload is a DrawingML picture.
    pub fn is_picture(&self) -> bool {
        self.uri == crate::XMLNS_DRAWINGML_PICTURE
    }
}

/// A picture (`pic:pic`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    /// Declared `xmlns:pic` namespace, if the element carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_visual: Option<NonVisualPicture>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blip_fill: Option<BlipFill>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_properties: Option<ShapeProperties>,
}

/// Non-visual picture properties (`pic:nvPicPr`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonVisualPicture {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drawing: Option<NonVisualDrawingProperties>,
}

/// Id and name of a picture (`pic:cNvPr`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonVisualDrawingProperties {
    pub id: String,
    pub name: String,
}

/// Image fill of a picture (`pic:blipFill`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlipFill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blip: Option<Blip>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stretch: Option<Stretch>,
}

/// Reference to image data (`a:blip`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blip {
    /// Relationship id of the image part (`r:embed`)
    pub embed: String,

    /// Compression state hint (`cstate`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha_mod_fix: Option<AlphaModFix>,
}

/// Fixed opacity adjustment (`a:alphaModFix`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphaModFix {
    /// Opacity in thousandths of a percent
    pub amount: i32,
}

/// Stretch fill mode (`a:stretch`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stretch {
    /// Whether `a:fillRect` was present
    pub fill_rect: bool,
}

/// Shape properties of a picture (`pic:spPr`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset_geometry: Option<PresetGeometry>,
}

/// 2D transform (`a:xfrm`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transform {
    /// Rotation in 60000ths of a degree
    pub rotation: i64,
    pub flip_h: i32,
    pub flip_v: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Point>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<Extent>,
}

impl Transform {
    /// Rotation in degrees.
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation as f64 / 60_000.0
    }
}

/// Named preset shape (`a:prstGeom`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetGeometry {
    /// Preset name (e.g., "rect")
    pub preset: String,

    /// The `a:avLst` adjustment list, kept verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjust_values: Option<RawXml>,
}

/// Opaque markup captured verbatim from the source.
///
/// Holds the exact re-serialization of one source element, its own start and
/// end tags included. It is never parsed; encoding writes it back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawXml(String);

impl RawXml {
    /// Wrap already-serialized markup.
    pub fn new(xml: impl Into<String>) -> Self {
        Self(xml.into())
    }

    /// The markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the markup string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RawXml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_picture() {
        let data = GraphicData {
            uri: crate::XMLNS_DRAWINGML_PICTURE.to_string(),
            picture: None,
        };
        assert!(data.is_picture());

        let chart = GraphicData {
            uri: "http://schemas.openxmlformats.org/drawingml/2006/chart".to_string(),
            picture: None,
        };
        assert!(!chart.is_picture());
    }

    #[test]
    fn test_rotation_degrees() {
        let xfrm = Transform {
            rotation: 5_400_000,
            ..Default::default()
        };
        assert_eq!(xfrm.rotation_degrees(), 90.0);
    }

    #[test]
    fn test_raw_xml_serializes_as_string() {
        let raw = RawXml::new("<a:avLst/>");
        assert_eq!(serde_json::to_string(&raw).unwrap(), "\"<a:avLst/>\"");
        assert_eq!(raw.to_string(), "<a:avLst/>");
    }
}
