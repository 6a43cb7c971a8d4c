//! Benchmarks for docxdraw decoding performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks decode synthetic document parts with a growing number
//! of floating pictures and hyperlinks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use docxdraw::{docx::scan_document, Drawing};

const ANCHOR: &str = r#"<w:drawing>
  <wp:anchor distT="0" distB="0" distL="114300" distR="114300" simplePos="0" relativeHeight="251658240" behindDoc="0" locked="0" layoutInCell="1" allowOverlap="1">
    <wp:simplePos x="0" y="0"/>
    <wp:positionH relativeFrom="column"><wp:posOffset>914400</wp:posOffset></wp:positionH>
    <wp:positionV relativeFrom="paragraph"><wp:posOffset>0</wp:posOffset></wp:positionV>
    <wp:extent cx="5949950" cy="3971925"/>
    <wp:effectExtent l="0" t="0" r="0" b="0"/>
    <wp:wrapSquare wrapText="bothSides"/>
    <wp:docPr id="1" name="Picture 1" descr="chart"/>
    <wp:cNvGraphicFramePr><a:graphicFrameLocks xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" noChangeAspect="1"/></wp:cNvGraphicFramePr>
    <a:graphic xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main">
      <a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture">
        <pic:pic xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture">
          <pic:nvPicPr><pic:cNvPr id="0" name="image1.png"/><pic:cNvPicPr/></pic:nvPicPr>
          <pic:blipFill><a:blip r:embed="rId4"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>
          <pic:spPr>
            <a:xfrm><a:off x="0" y="0"/><a:ext cx="5949950" cy="3971925"/></a:xfrm>
            <a:prstGeom prst="rect"><a:avLst/></a:prstGeom>
          </pic:spPr>
        </pic:pic>
      </a:graphicData>
    </a:graphic>
  </wp:anchor>
</w:drawing>"#;

/// Creates a synthetic document part with the given number of paragraphs.
fn create_test_part(paragraph_count: usize) -> String {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>"#,
    );

    for i in 0..paragraph_count {
        content.push_str(&format!(
            r#"
    <w:p>
      <w:r><w:t>This is paragraph {} with some test content for benchmarking purposes.</w:t></w:r>
      <w:hyperlink r:id="rId{}"><w:r><w:t>link</w:t></w:r></w:hyperlink>
      <w:r>{}</w:r>
    </w:p>"#,
            i,
            i + 10,
            ANCHOR
        ));
    }

    content.push_str(
        r#"
  </w:body>
</w:document>"#,
    );
    content
}

/// Benchmark decoding a single floating picture.
fn bench_drawing_decode(c: &mut Criterion) {
    c.bench_function("drawing_decode", |b| {
        b.iter(|| {
            let _ = docxdraw::from_str::<Drawing>(black_box(ANCHOR));
        });
    });
}

/// Benchmark scanning whole parts at various sizes.
fn bench_document_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_scan");

    for para_count in [10, 100, 500, 1000].iter() {
        let part = create_test_part(*para_count);
        let size = part.len() as u64;

        group.throughput(Throughput::Bytes(size));
        group.bench_with_input(
            BenchmarkId::new("paragraphs", para_count),
            &part,
            |b, part| {
                b.iter(|| {
                    let _ = scan_document(black_box(part));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark encoding a decoded picture back to markup.
fn bench_drawing_encode(c: &mut Criterion) {
    let drawing: Drawing = docxdraw::from_str(ANCHOR).unwrap();

    c.bench_function("drawing_encode", |b| {
        b.iter(|| {
            let _ = docxdraw::to_string(black_box(&drawing));
        });
    });
}

criterion_group!(
    benches,
    bench_drawing_decode,
    bench_document_scan,
    bench_drawing_encode,
);
criterion_main!(benches);
