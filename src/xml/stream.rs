//! Pull-based token stream and the shared child dispatch loop.

use std::num::ParseIntError;
use std::str::FromStr;

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Error, Result};
use crate::model::RawXml;
use crate::options::DecodeOptions;

/// A single attribute of a start element, value already unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Qualified attribute name (e.g., "r:embed")
    pub name: String,
    /// Unescaped attribute value
    pub value: String,
}

impl Attribute {
    /// Attribute name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// Parse the value as a base-10 integer.
    ///
    /// `element` is the qualified name of the element carrying the attribute,
    /// reported in the error.
    pub fn parse<T>(&self, element: &str) -> Result<T>
    where
        T: FromStr<Err = ParseIntError>,
    {
        self.value
            .parse()
            .map_err(|source| Error::InvalidAttribute {
                element: element.to_string(),
                attribute: self.name.clone(),
                value: self.value.clone(),
                source,
            })
    }
}

/// An element start tag with its ordered attributes.
///
/// Self-closing tags (`<wp:wrapNone/>`) are start elements with no children
/// and no matching end tag.
#[derive(Debug, Clone)]
pub struct StartElement {
    name: String,
    attributes: Vec<Attribute>,
    self_closing: bool,
    raw: BytesStart<'static>,
}

impl StartElement {
    /// Create a start element that owns its children (`<name>...</name>`).
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            raw: BytesStart::new(name.clone()),
            name,
            attributes: Vec::new(),
            self_closing: false,
        }
    }

    /// Append an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let attribute = Attribute {
            name: name.into(),
            value: value.into(),
        };
        self.raw
            .push_attribute((attribute.name.as_str(), attribute.value.as_str()));
        self.attributes.push(attribute);
        self
    }

    /// Mark the element as self-closing.
    pub fn self_closing(mut self) -> Self {
        self.self_closing = true;
        self
    }

    pub(crate) fn from_event(start: BytesStart<'_>, self_closing: bool) -> Result<Self> {
        let name = std::str::from_utf8(start.name().as_ref())?.to_string();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            attributes.push(Attribute {
                name: std::str::from_utf8(attr.key.as_ref())?.to_string(),
                value: attr.unescape_value()?.into_owned(),
            });
        }
        Ok(Self {
            name,
            attributes,
            self_closing,
            raw: start.into_owned(),
        })
    }

    /// Qualified element name (e.g., "wp:anchor").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// Attributes in source order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Whether the tag was written as `<name/>`.
    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Value of the first attribute with the given local name.
    pub fn attr(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.local_name() == local)
            .map(|a| a.value.as_str())
    }

    /// Value of the attribute with the given qualified name (e.g., "xmlns:pic").
    pub fn attr_qualified(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Integer attribute by local name; absent attributes yield the default.
    pub fn int_attr<T>(&self, local: &str) -> Result<T>
    where
        T: FromStr<Err = ParseIntError> + Default,
    {
        match self.attributes.iter().find(|a| a.local_name() == local) {
            Some(attr) => attr.parse(&self.name),
            None => Ok(T::default()),
        }
    }

    fn raw(&self) -> BytesStart<'_> {
        self.raw.borrow()
    }
}

/// What a child visitor did with the element it was handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// The visitor consumed the child's subtree (it recursed into it).
    Consumed,
    /// The child was recognized; skip whatever of its subtree remains.
    Skip,
    /// The child is not part of the catalog and is skipped.
    Unknown,
}

/// Decode a record from the element that starts at `start`.
///
/// `start` has already been pulled from the stream; the implementation reads
/// its attributes from `start` and pulls the element's children itself.
pub trait Decode: Sized {
    /// Decode one element. Consumes the stream up to and including the
    /// element's end tag.
    fn decode(stream: &mut TokenStream<'_>, start: &StartElement) -> Result<Self>;
}

/// Forward-only token stream over an XML fragment.
pub struct TokenStream<'x> {
    reader: Reader<&'x [u8]>,
    depth: usize,
    max_depth: usize,
}

impl<'x> TokenStream<'x> {
    /// Create a stream with default options.
    pub fn new(xml: &'x str) -> Self {
        Self::with_options(xml, &DecodeOptions::default())
    }

    /// Create a stream with the given options.
    pub fn with_options(xml: &'x str, options: &DecodeOptions) -> Self {
        let mut reader = Reader::from_str(xml);
        // Whitespace in w:t and raw passthrough must survive
        reader.config_mut().trim_text(false);
        reader.config_mut().check_end_names = options.check_end_names;

        Self {
            reader,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Current element nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn next_event(&mut self) -> Result<Event<'x>> {
        let event = self.reader.read_event()?;
        match &event {
            Event::Start(_) => {
                self.depth += 1;
                if self.depth > self.max_depth {
                    return Err(Error::DepthLimitExceeded(self.max_depth));
                }
            }
            Event::End(_) => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
        Ok(event)
    }

    /// Pull tokens until the next start element at any depth.
    ///
    /// Returns `None` at end of input.
    pub fn next_start(&mut self) -> Result<Option<StartElement>> {
        loop {
            match self.next_event()? {
                Event::Start(e) => return StartElement::from_event(e, false).map(Some),
                Event::Empty(e) => return StartElement::from_event(e, true).map(Some),
                Event::Eof => return Ok(None),
                _ => {}
            }
        }
    }

    /// Walk the direct children of `parent`, handing each start element to
    /// `visit`.
    ///
    /// Stops at the parent's end tag or at end of input. Children the visitor
    /// did not consume are skipped. Text, comments and other tokens are ignored.
    pub fn for_each_child<F>(&mut self, parent: &StartElement, mut visit: F) -> Result<()>
    where
        F: FnMut(&mut TokenStream<'x>, &StartElement) -> Result<Visit>,
    {
        if parent.is_self_closing() {
            return Ok(());
        }

        loop {
            let child = match self.next_event()? {
                Event::Start(e) => StartElement::from_event(e, false)?,
                Event::Empty(e) => StartElement::from_event(e, true)?,
                Event::End(_) | Event::Eof => return Ok(()),
                _ => continue,
            };

            match visit(self, &child)? {
                Visit::Consumed => {}
                Visit::Skip => self.skip(&child)?,
                Visit::Unknown => {
                    log::trace!("skipping <{}> inside <{}>", child.name(), parent.name());
                    self.skip(&child)?;
                }
            }
        }
    }

    /// Consume the rest of `element`, including its end tag.
    pub fn skip(&mut self, element: &StartElement) -> Result<()> {
        if element.is_self_closing() {
            return Ok(());
        }

        let mut depth = 0usize;
        loop {
            match self.next_event()? {
                Event::Start(_) => depth += 1,
                Event::End(_) => {
                    if depth == 0 {
                        return Ok(());
                    }
                    depth -= 1;
                }
                Event::Eof => return Ok(()),
                _ => {}
            }
        }
    }

    /// Consume `element` and return its direct text content, unescaped.
    pub fn read_text(&mut self, element: &StartElement) -> Result<String> {
        let mut text = String::new();
        if element.is_self_closing() {
            return Ok(text);
        }

        let mut depth = 0usize;
        loop {
            match self.next_event()? {
                Event::Text(t) if depth == 0 => text.push_str(&t.unescape()?),
                Event::CData(c) if depth == 0 => text.push_str(std::str::from_utf8(&c)?),
                Event::Start(_) => depth += 1,
                Event::End(_) => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(text)
    }

    /// Consume `element` and parse its text content as a base-10 integer.
    pub fn read_integer<T>(&mut self, element: &StartElement) -> Result<T>
    where
        T: FromStr<Err = ParseIntError>,
    {
        let text = self.read_text(element)?;
        text.trim().parse().map_err(|source| Error::InvalidContent {
            element: element.name().to_string(),
            value: text.clone(),
            source,
        })
    }

    /// Consume `element` and re-serialize every token of it, start and end
    /// tags included, into a raw blob.
    pub fn capture_raw(&mut self, element: &StartElement) -> Result<RawXml> {
        let mut writer = Writer::new(Vec::new());

        if element.is_self_closing() {
            writer.write_event(Event::Empty(element.raw()))?;
        } else {
            writer.write_event(Event::Start(element.raw()))?;

            let mut depth = 0usize;
            loop {
                let event = self.next_event()?;
                let closes = match &event {
                    Event::Start(_) => {
                        depth += 1;
                        false
                    }
                    Event::End(_) if depth == 0 => true,
                    Event::End(_) => {
                        depth -= 1;
                        false
                    }
                    Event::Eof => break,
                    _ => false,
                };
                writer.write_event(event)?;
                if closes {
                    break;
                }
            }
        }

        let xml = String::from_utf8(writer.into_inner()).map_err(|e| Error::Encoding(e.to_string()))?;
        Ok(RawXml::new(xml))
    }
}

/// Decode the first element of `xml` as `T`.
///
/// # Example
///
/// ```
/// use docxdraw::model::Extent;
///
/// let extent: Extent = docxdraw::from_str(r#"<wp:extent cx="5949950" cy="3971925"/>"#)?;
/// assert_eq!(extent.cx, 5949950);
/// # Ok::<(), docxdraw::Error>(())
/// ```
pub fn from_str<T: Decode>(xml: &str) -> Result<T> {
    from_str_with_options(xml, &DecodeOptions::default())
}

/// Decode the first element of `xml` as `T` with options.
pub fn from_str_with_options<T: Decode>(xml: &str, options: &DecodeOptions) -> Result<T> {
    let mut stream = TokenStream::with_options(xml, options);
    match stream.next_start()? {
        Some(start) => T::decode(&mut stream, &start),
        None => Err(Error::Xml("input contains no element".to_string())),
    }
}

fn local_part(name: &str) -> &str {
    match name.rsplit_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}
