//! Record encoding on top of `quick_xml::Writer`.

use std::fmt::Display;
use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Error, Result};
use crate::options::EncodeOptions;

/// Write a record back as markup.
pub trait Encode {
    /// Write the record as one element.
    fn encode<W: Write>(&self, writer: &mut Writer<W>) -> Result<()>;
}

/// Encode `value` as a markup string.
pub fn to_string<T: Encode>(value: &T) -> Result<String> {
    to_string_with_options(value, &EncodeOptions::default())
}

/// Encode `value` as a markup string with options.
pub fn to_string_with_options<T: Encode>(value: &T, options: &EncodeOptions) -> Result<String> {
    let mut writer = match options.indent {
        Some((ch, width)) => Writer::new_with_indent(Vec::new(), ch, width),
        None => Writer::new(Vec::new()),
    };
    value.encode(&mut writer)?;
    String::from_utf8(writer.into_inner()).map_err(|e| Error::Encoding(e.to_string()))
}

/// Start tag under construction.
pub(crate) struct Tag {
    name: &'static str,
    start: BytesStart<'static>,
}

impl Tag {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            start: BytesStart::new(name),
        }
    }

    pub(crate) fn attr(mut self, name: &str, value: impl Display) -> Self {
        let value = value.to_string();
        self.start.push_attribute((name, value.as_str()));
        self
    }

    pub(crate) fn attr_opt<V: Display>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Attribute written only when the value differs from zero.
    pub(crate) fn attr_nonzero<V: Display + Default + PartialEq>(self, name: &str, value: V) -> Self {
        if value == V::default() {
            self
        } else {
            self.attr(name, value)
        }
    }

    /// Write as `<name .../>`.
    pub(crate) fn empty<W: Write>(self, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::Empty(self.start))?;
        Ok(())
    }

    /// Write the start tag and return the matching end tag writer.
    pub(crate) fn open<W: Write>(self, writer: &mut Writer<W>) -> Result<Close> {
        writer.write_event(Event::Start(self.start))?;
        Ok(Close(self.name))
    }

    /// Write `<name ...>text</name>`.
    pub(crate) fn text<W: Write>(self, writer: &mut Writer<W>, text: impl Display) -> Result<()> {
        let close = self.open(writer)?;
        let text = text.to_string();
        writer.write_event(Event::Text(BytesText::new(&text)))?;
        close.write(writer)
    }
}

/// Pending end tag.
#[must_use]
pub(crate) struct Close(&'static str);

impl Close {
    pub(crate) fn write<W: Write>(self, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::End(BytesEnd::new(self.0)))?;
        Ok(())
    }
}

/// Write optional children in order.
pub(crate) fn encode_opt<T: Encode, W: Write>(value: Option<&T>, writer: &mut Writer<W>) -> Result<()> {
    match value {
        Some(value) => value.encode(writer),
        None => Ok(()),
    }
}

/// Write already-serialized markup verbatim.
pub(crate) fn write_raw<W: Write>(writer: &mut Writer<W>, xml: &str) -> Result<()> {
    writer.write_event(Event::Text(BytesText::from_escaped(xml)))?;
    Ok(())
}
