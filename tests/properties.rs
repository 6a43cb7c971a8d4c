//! Property tests over generated drawing fragments.

use docxdraw::{from_str, to_string, Anchor, Drawing, Extent, Graphic, PresetGeometry, Wrap};
use proptest::prelude::*;

/// Strategy for nested unknown elements wrapped around a picture payload
fn payload_strategy() -> impl Strategy<Value = String> {
    let leaf = Just(r#"<pic:pic><pic:blipFill><a:blip r:embed="rId1"/></pic:blipFill></pic:pic>"#.to_string());
    leaf.prop_recursive(6, 32, 3, |inner| {
        prop_oneof![
            inner.clone().prop_map(|xml| format!("<mc:AlternateContent>{xml}</mc:AlternateContent>")),
            inner.clone().prop_map(|xml| format!(r#"<a:extLst><a:ext uri="x">{xml}</a:ext></a:extLst>"#)),
            (inner.clone(), inner).prop_map(|(a, b)| format!("{a}<a:unknown/>{b}")),
        ]
    })
}

/// Strategy for adjustment guide lists
fn adjust_list_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-z]{1,6}", 0i64..100_000), 0..5).prop_map(|guides| {
        if guides.is_empty() {
            return "<a:avLst/>".to_string();
        }
        let body: String = guides
            .iter()
            .map(|(name, value)| format!(r#"<a:gd name="{name}" fmla="val {value}"/>"#))
            .collect();
        format!("<a:avLst>{body}</a:avLst>")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_extent_roundtrip(cx in any::<i64>(), cy in any::<i64>()) {
        let xml = format!(r#"<wp:extent cx="{cx}" cy="{cy}"/>"#);
        let extent: Extent = from_str(&xml).unwrap();
        prop_assert_eq!(extent, Extent { cx, cy });

        let reencoded = to_string(&extent).unwrap();
        prop_assert_eq!(&reencoded, &xml);
        prop_assert_eq!(from_str::<Extent>(&reencoded).unwrap(), extent);
    }

    #[test]
    fn prop_graphic_data_uri_is_literal(uri in "[a-z]{1,12}(/[a-z0-9]{1,8}){0,4}", payload in payload_strategy()) {
        let xml = format!(
            r#"<a:graphic><a:graphicData uri="http://{uri}">{payload}</a:graphicData></a:graphic>"#
        );
        let graphic: Graphic = from_str(&xml).unwrap();
        prop_assert_eq!(graphic.data.unwrap().uri, format!("http://{uri}"));
    }

    #[test]
    fn prop_adjust_values_are_verbatim(av_lst in adjust_list_strategy(), prst in "[a-zA-Z]{1,12}") {
        let xml = format!(r#"<pic:spPr><a:prstGeom prst="{prst}">{av_lst}</a:prstGeom></pic:spPr>"#);
        let props: docxdraw::ShapeProperties = from_str(&xml).unwrap();
        let geometry: PresetGeometry = props.preset_geometry.unwrap();

        prop_assert_eq!(geometry.preset, prst);
        let raw = geometry.adjust_values.unwrap();
        prop_assert_eq!(raw.as_str(), av_lst.as_str());
    }

    #[test]
    fn prop_wrap_markers_are_exclusive(square in any::<bool>(), wrap_text in "(bothSides|left|right|largest)") {
        let marker = if square {
            format!(r#"<wp:wrapSquare wrapText="{wrap_text}"/>"#)
        } else {
            "<wp:wrapNone/>".to_string()
        };
        let xml = format!(r#"<wp:anchor><wp:extent cx="1" cy="1"/>{marker}</wp:anchor>"#);
        let anchor: Anchor = from_str(&xml).unwrap();

        prop_assert_eq!(anchor.is_wrap_none(), !square);
        prop_assert_eq!(anchor.wrap_square().is_some(), square);
        if let Some(Wrap::Square(s)) = &anchor.wrap {
            prop_assert_eq!(&s.wrap_text, &wrap_text);
        }
    }

    #[test]
    fn prop_drawing_holds_at_most_one_frame(frames in prop::collection::vec(any::<bool>(), 0..4)) {
        let body: String = frames
            .iter()
            .map(|anchor| if *anchor { "<wp:anchor/>" } else { "<wp:inline/>" })
            .collect();
        let drawing: Drawing = from_str(&format!("<w:drawing>{body}</w:drawing>")).unwrap();

        match frames.first() {
            None => prop_assert!(drawing.is_empty()),
            Some(true) => prop_assert!(drawing.as_anchor().is_some() && drawing.as_inline().is_none()),
            Some(false) => prop_assert!(drawing.as_inline().is_some() && drawing.as_anchor().is_none()),
        }
    }

    #[test]
    fn prop_malformed_numbers_fail(value in "[a-z]{1,8}") {
        let xml = format!(r#"<w:drawing><wp:inline distT="{value}"/></w:drawing>"#);
        prop_assert!(from_str::<Drawing>(&xml).is_err());
    }
}
