//! Decoders for hyperlinks and the runs they wrap.

use crate::error::Result;
use crate::model::{Drawing, Hyperlink, Run, RunContent};
use crate::xml::{Decode, StartElement, TokenStream, Visit};

impl Decode for Hyperlink {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        decode_hyperlink(stream, start, None)
    }
}

/// Decode a hyperlink, keeping its first run.
///
/// With `drawings`, every run is decoded and the drawings of all runs are
/// appended to it; otherwise later runs are skipped.
pub(crate) fn decode_hyperlink(
    stream: &mut TokenStream<'_>,
    start: &StartElement,
    mut drawings: Option<&mut Vec<Drawing>>,
) -> Result<Hyperlink> {
    let mut link = Hyperlink {
        id: start.attr("id").map(String::from),
        anchor: start.attr("anchor").map(String::from),
        run: Run::default(),
    };
    let mut has_run = false;

    stream.for_each_child(start, |stream, child| {
        if child.local_name() != "r" {
            return Ok(Visit::Unknown);
        }
        if has_run && drawings.is_none() {
            log::debug!("ignoring additional run in <{}>", start.name());
            return Ok(Visit::Skip);
        }

        let run = Run::decode(stream, child)?;
        if let Some(drawings) = drawings.as_deref_mut() {
            drawings.extend(run.drawings().cloned());
        }
        if !has_run {
            link.run = run;
            has_run = true;
        }
        Ok(Visit::Consumed)
    })?;

    Ok(link)
}

impl Decode for Run {
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self> {
        let mut run = Run::default();

        stream.for_each_child(start, |stream, child| match child.local_name() {
            "rPr" => {
                run.properties = Some(stream.capture_raw(child)?);
                Ok(Visit::Consumed)
            }
            "t" => {
                let text = stream.read_text(child)?;
                run.content.push(RunContent::Text(text));
                Ok(Visit::Consumed)
            }
            "tab" => {
                run.content.push(RunContent::Tab);
                Ok(Visit::Skip)
            }
            "br" => {
                run.content.push(RunContent::Break);
                Ok(Visit::Skip)
            }
            "cr" => {
                run.content.push(RunContent::CarriageReturn);
                Ok(Visit::Skip)
            }
            "drawing" => {
                let drawing = Drawing::decode(stream, child)?;
                run.content.push(RunContent::Drawing(drawing));
                Ok(Visit::Consumed)
            }
            _ => Ok(Visit::Unknown),
        })?;

        Ok(run)
    }
}
