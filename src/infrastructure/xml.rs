//! XML parser/serializer backed by `quick-xml`.
//!
//! Comments, processing instructions and the doctype are dropped while
//! reading; CDATA sections are read as plain text. Documents nested deeper
//! than `max_depth` are rejected.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use tracing::{instrument, trace};

use crate::config::{MarkupSettings, DEFAULT_MAX_DEPTH};
use crate::domain::{MarkupElement, MarkupNode};
use crate::infrastructure::error::MarkupError;
use crate::infrastructure::traits::MarkupFormat;

/// XML implementation of [`MarkupFormat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlFormat {
    /// Spaces per nesting level when writing; 0 writes compact output
    pub indent: usize,
    /// Trim text and drop whitespace-only text while reading
    pub trim_text: bool,
    /// Emit an `<?xml ...?>` declaration when writing
    pub declaration: bool,
    /// Deepest element level accepted while reading, document element at 0
    pub max_depth: usize,
}

impl Default for XmlFormat {
    fn default() -> Self {
        Self {
            indent: 2,
            trim_text: true,
            declaration: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl From<&MarkupSettings> for XmlFormat {
    fn from(settings: &MarkupSettings) -> Self {
        Self {
            indent: settings.indent,
            trim_text: settings.trim_text,
            declaration: settings.declaration,
            max_depth: settings.max_depth,
        }
    }
}

impl XmlFormat {
    /// Compact output, no declaration, trimmed text.
    pub fn compact() -> Self {
        Self {
            indent: 0,
            trim_text: true,
            declaration: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl XmlFormat {
    fn check_depth(&self, depth: usize) -> Result<(), MarkupError> {
        if depth > self.max_depth {
            return Err(MarkupError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        Ok(())
    }
}

impl MarkupFormat for XmlFormat {
    #[instrument(level = "debug", skip(self, input), fields(len = input.len()))]
    fn parse(&self, input: &str) -> Result<MarkupElement, MarkupError> {
        let mut reader = Reader::from_str(input);
        reader.config_mut().trim_text(self.trim_text);

        let mut open: Vec<MarkupElement> = Vec::new();
        let mut root: Option<MarkupElement> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    self.check_depth(open.len())?;
                    let element = start_element(&start)?;
                    if open.is_empty() && root.is_some() {
                        return Err(MarkupError::ContentOutsideRoot(element.tag_name));
                    }
                    open.push(element);
                }
                Event::Empty(start) => {
                    self.check_depth(open.len())?;
                    let element = start_element(&start)?;
                    close_element(element, &mut open, &mut root)?;
                }
                Event::End(_) => {
                    // Reader verifies that end names match their start tags.
                    if let Some(element) = open.pop() {
                        close_element(element, &mut open, &mut root)?;
                    }
                }
                Event::Text(text) => {
                    let text = text.unescape()?.into_owned();
                    push_text(text, &mut open)?;
                }
                Event::CData(cdata) => {
                    let raw = cdata.into_inner();
                    let text = std::str::from_utf8(&raw)?.to_string();
                    push_text(text, &mut open)?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(unclosed) = open.pop() {
            return Err(MarkupError::UnclosedElement(unclosed.tag_name));
        }
        root.ok_or(MarkupError::NoRootElement)
    }

    #[instrument(level = "debug", skip(self, root), fields(root = %root.tag_name))]
    fn serialize(&self, root: &MarkupElement) -> Result<String, MarkupError> {
        let mut writer = if self.indent > 0 {
            Writer::new_with_indent(Vec::new(), b' ', self.indent)
        } else {
            Writer::new(Vec::new())
        };

        if self.declaration {
            writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
                .map_err(serialize_error)?;
        }
        write_element(&mut writer, root)?;

        String::from_utf8(writer.into_inner()).map_err(serialize_error)
    }
}

fn start_element(start: &BytesStart<'_>) -> Result<MarkupElement, MarkupError> {
    let mut element = MarkupElement::new(std::str::from_utf8(start.name().as_ref())?);
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = std::str::from_utf8(attribute.key.as_ref())?.to_string();
        let value = attribute.unescape_value()?.into_owned();
        element.set_attribute(key, value);
    }
    trace!(tag = %element.tag_name, "read element");
    Ok(element)
}

fn close_element(
    element: MarkupElement,
    open: &mut [MarkupElement],
    root: &mut Option<MarkupElement>,
) -> Result<(), MarkupError> {
    match open.last_mut() {
        Some(parent) => parent.append_child(element),
        None if root.is_some() => return Err(MarkupError::ContentOutsideRoot(element.tag_name)),
        None => *root = Some(element),
    }
    Ok(())
}

fn push_text(text: String, open: &mut [MarkupElement]) -> Result<(), MarkupError> {
    match open.last_mut() {
        Some(parent) => {
            if !text.is_empty() {
                parent.children.push(MarkupNode::Text(text));
            }
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(MarkupError::ContentOutsideRoot(text)),
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &MarkupElement) -> Result<(), MarkupError> {
    check_name(&element.tag_name)?;

    let mut start = BytesStart::new(element.tag_name.as_str());
    for (key, value) in &element.attributes {
        check_name(key)?;
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(serialize_error);
    }

    writer
        .write_event(Event::Start(start))
        .map_err(serialize_error)?;
    for child in &element.children {
        match child {
            MarkupNode::Element(child) => write_element(writer, child)?,
            MarkupNode::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(serialize_error)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.tag_name.as_str())))
        .map_err(serialize_error)
}

/// Reject names the reader could not parse back as a single element or
/// attribute name.
fn check_name(name: &str) -> Result<(), MarkupError> {
    let invalid_start = name
        .chars()
        .next()
        .map_or(true, |first| first.is_ascii_digit() || first == '-' || first == '.');
    let invalid_char = name
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || "<>&\"'=/?!".contains(c));
    if invalid_start || invalid_char {
        return Err(MarkupError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn serialize_error(err: impl std::fmt::Display) -> MarkupError {
    MarkupError::Serialize(err.to_string())
}
