//! Decoding realistic WordprocessingML drawing and hyperlink fragments.

use docxdraw::docx::scan_document;
use docxdraw::{
    from_str, from_str_with_options, to_string, DecodeOptions, Drawing, Error, Frame, Hyperlink,
    Placement, Wrap, XMLNS_DRAWINGML_PICTURE,
};

const FLOATING_PICTURE: &str = r#"<w:drawing>
  <wp:anchor distT="100" distB="200" distL="50" distR="75" simplePos="0" relativeHeight="251658240" behindDoc="0" locked="0" layoutInCell="1" allowOverlap="1" wp14:anchorId="1A2B3C4D">
    <wp:simplePos x="0" y="0"/>
    <wp:positionH relativeFrom="column"><wp:posOffset>914400</wp:posOffset></wp:positionH>
    <wp:positionV relativeFrom="paragraph"><wp:posOffset>-228600</wp:posOffset></wp:positionV>
    <wp:extent cx="5949950" cy="3971925"/>
    <wp:effectExtent l="0" t="0" r="0" b="0"/>
    <wp:wrapNone/>
    <wp:docPr id="1" name="Picture 1" descr="Quarterly revenue"/>
    <wp:cNvGraphicFramePr>
      <a:graphicFrameLocks xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" noChangeAspect="1"/>
    </wp:cNvGraphicFramePr>
    <a:graphic xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main">
      <a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture">
        <pic:pic xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture">
          <pic:nvPicPr><pic:cNvPr id="0" name="chart.png"/><pic:cNvPicPr/></pic:nvPicPr>
          <pic:blipFill><a:blip r:embed="rId8" cstate="print"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>
          <pic:spPr bwMode="auto">
            <a:xfrm><a:off x="0" y="0"/><a:ext cx="5949950" cy="3971925"/></a:xfrm>
            <a:prstGeom prst="rect"><a:avLst/></a:prstGeom>
            <a:noFill/>
          </pic:spPr>
        </pic:pic>
      </a:graphicData>
    </a:graphic>
    <wp14:sizeRelH relativeFrom="margin"><wp14:pctWidth>0</wp14:pctWidth></wp14:sizeRelH>
  </wp:anchor>
</w:drawing>"#;

#[test]
fn test_floating_picture() {
    let drawing: Drawing = from_str(FLOATING_PICTURE).unwrap();
    let anchor = drawing.as_anchor().expect("anchor frame");

    assert_eq!(
        (anchor.dist_t, anchor.dist_b, anchor.dist_l, anchor.dist_r),
        (100, 200, 50, 75)
    );
    assert_eq!(anchor.simple_pos, 0);
    assert_eq!(anchor.relative_height, 251658240);
    assert_eq!((anchor.behind_doc, anchor.locked), (0, 0));
    assert_eq!((anchor.layout_in_cell, anchor.allow_overlap), (1, 1));

    let extent = anchor.extent.unwrap();
    assert_eq!((extent.cx, extent.cy), (5949950, 3971925));

    let h = anchor.position_h().unwrap();
    assert_eq!(h.relative_from, "column");
    assert_eq!(h.offset, 914400);
    assert_eq!(anchor.position_v().unwrap().offset, -228600);

    assert!(anchor.is_wrap_none());
    assert!(anchor.wrap_square().is_none());

    let props = drawing.doc_properties().unwrap();
    assert_eq!(props.description.as_deref(), Some("Quarterly revenue"));
    assert_eq!(
        anchor.frame_properties.as_ref().and_then(|p| p.locks).map(|l| l.no_change_aspect),
        Some(1)
    );

    let data = drawing.graphic().and_then(|g| g.data.as_ref()).unwrap();
    assert_eq!(data.uri, XMLNS_DRAWINGML_PICTURE);
    assert!(data.is_picture());
    assert_eq!(drawing.image_references(), vec!["rId8"]);

    let geometry = data
        .picture
        .as_ref()
        .and_then(|p| p.shape_properties.as_ref())
        .and_then(|s| s.preset_geometry.as_ref())
        .unwrap();
    assert_eq!(geometry.preset, "rect");
    assert_eq!(geometry.adjust_values.as_ref().unwrap().as_str(), "<a:avLst/>");
}

#[test]
fn test_floating_picture_reencodes() {
    let drawing: Drawing = from_str(FLOATING_PICTURE).unwrap();
    let xml = to_string(&drawing).unwrap();

    assert!(xml.contains(r#"<wp:wrapNone/>"#));
    assert!(xml.contains(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#));
    assert!(!xml.contains("sizeRelH"));

    let again: Drawing = from_str(&xml).unwrap();
    assert_eq!(again, drawing);
}

#[test]
fn test_wrap_square_excludes_wrap_none() {
    let xml = FLOATING_PICTURE.replace("<wp:wrapNone/>", r#"<wp:wrapSquare wrapText="bothSides"/>"#);
    let drawing: Drawing = from_str(&xml).unwrap();
    let anchor = drawing.as_anchor().unwrap();

    assert!(!anchor.is_wrap_none());
    assert_eq!(anchor.wrap_square().unwrap().wrap_text, "bothSides");
    assert!(matches!(anchor.wrap, Some(Wrap::Square(_))));
}

#[test]
fn test_simple_position_when_flag_set() {
    let xml = FLOATING_PICTURE
        .replace(r#"simplePos="0""#, r#"simplePos="1""#)
        .replace(r#"<wp:simplePos x="0" y="0"/>"#, r#"<wp:simplePos x="12700" y="25400"/>"#);
    let drawing: Drawing = from_str(&xml).unwrap();
    let anchor = drawing.as_anchor().unwrap();

    match anchor.placement.as_ref().unwrap() {
        Placement::Simple { point, .. } => assert_eq!((point.x, point.y), (12700, 25400)),
        other => panic!("expected simple placement, got {other:?}"),
    }
    assert_eq!(anchor.position_h().map(|p| p.offset), Some(914400));
    assert_eq!(anchor.position_v().map(|p| p.offset), Some(-228600));

    let again: Drawing = from_str(&to_string(&drawing).unwrap()).unwrap();
    assert_eq!(again, drawing);
}

#[test]
fn test_inline_picture_in_run() {
    let xml = r#"<w:r>
  <w:rPr><w:noProof/></w:rPr>
  <w:drawing>
    <wp:inline distT="0" distB="0" distL="0" distR="0">
      <wp:extent cx="1828800" cy="914400"/>
      <wp:docPr id="3" name="Logo"/>
      <a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture">
        <pic:pic><pic:blipFill><a:blip r:embed="rId12"/></pic:blipFill></pic:pic>
      </a:graphicData></a:graphic>
    </wp:inline>
  </w:drawing>
</w:r>"#;
    let run: docxdraw::Run = from_str(xml).unwrap();
    let drawing = run.drawings().next().unwrap();

    assert!(matches!(drawing.frame, Some(Frame::Inline(_))));
    let extent = drawing.extent().unwrap();
    assert_eq!(extent.width_inches(), 2.0);
    assert_eq!(extent.height_inches(), 1.0);
    assert_eq!(drawing.image_references(), vec!["rId12"]);
}

#[test]
fn test_drawing_without_frame() {
    let drawing: Drawing =
        from_str(r#"<w:drawing><wpc:wpc><wps:wsp/></wpc:wpc></w:drawing>"#).unwrap();
    assert!(drawing.is_empty());
    assert!(drawing.image_references().is_empty());
}

#[test]
fn test_hyperlink_with_run() {
    let xml = r#"<w:hyperlink r:id="rId5" w:history="1">
  <w:r>
    <w:rPr><w:rStyle w:val="Hyperlink"/></w:rPr>
    <w:t>iyulab.com</w:t>
  </w:r>
</w:hyperlink>"#;
    let link: Hyperlink = from_str(xml).unwrap();
    assert_eq!(link.id.as_deref(), Some("rId5"));
    assert_eq!(link.run.text(), "iyulab.com");
    assert_eq!(
        link.run.properties.as_ref().unwrap().as_str(),
        r#"<w:rPr><w:rStyle w:val="Hyperlink"/></w:rPr>"#
    );
}

#[test]
fn test_malformed_extent_has_no_partial_record() {
    let xml = FLOATING_PICTURE.replace(r#"<wp:extent cx="5949950""#, r#"<wp:extent cx="abc""#);
    let err = from_str::<Drawing>(&xml).unwrap_err();

    match err {
        Error::InvalidAttribute {
            element,
            attribute,
            value,
            ..
        } => {
            assert_eq!(element, "wp:extent");
            assert_eq!(attribute, "cx");
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_offset_aborts() {
    let xml = FLOATING_PICTURE.replace("<wp:posOffset>914400", "<wp:posOffset>far");
    assert!(matches!(
        from_str::<Drawing>(&xml),
        Err(Error::InvalidContent { .. })
    ));
}

#[test]
fn test_depth_limit() {
    let options = DecodeOptions::new().with_max_depth(4);
    let err = from_str_with_options::<Drawing>(FLOATING_PICTURE, &options).unwrap_err();
    assert!(matches!(err, Error::DepthLimitExceeded(4)));
}

#[test]
fn test_scan_header_part() {
    let xml = format!(
        r#"<w:hdr><w:p><w:r>{}</w:r><w:hyperlink w:anchor="top"><w:r><w:t>Top</w:t></w:r></w:hyperlink></w:p></w:hdr>"#,
        FLOATING_PICTURE
    );
    let scan = scan_document(&xml).unwrap();

    assert_eq!(scan.drawings.len(), 1);
    assert_eq!(scan.image_references(), vec!["rId8"]);
    assert_eq!(scan.hyperlinks[0].anchor.as_deref(), Some("top"));
    assert!(scan.hyperlink_references().is_empty());
}
