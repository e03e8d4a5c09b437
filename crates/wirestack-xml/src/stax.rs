//! Pull-parser context with element-stack depth tracking.
//!
//! S3 reuses element names at different nesting levels (`Key` inside
//! `Contents`, `Key` inside a filter rule, `Prefix` at the top of a listing and
//! inside `CommonPrefixes`). Unmarshallers therefore match a field only when
//! the element path *and* the depth line up, see
//! [`StaxUnmarshallerContext::test_expression`].

use std::collections::VecDeque;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::trace;

use crate::error::XmlError;

/// Owned parse event handed to unmarshallers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent {
    /// An element opened. Self-closing elements produce this followed by
    /// [`XmlEvent::EndElement`].
    StartElement {
        /// Local name of the element.
        name: String,
        /// Attributes as `(local name, value)` pairs.
        attributes: Vec<(String, String)>,
    },
    /// An element closed.
    EndElement(String),
    /// Character data with entity and character references resolved.
    Text(String),
    /// No more input.
    EndDocument,
}

/// Single-use cursor over one XML document.
///
/// The depth reported by [`current_depth`](Self::current_depth) counts the
/// open elements: a start event is pushed before it is returned and an end
/// event is popped before it is returned.
pub struct StaxUnmarshallerContext<'a> {
    reader: Reader<&'a [u8]>,
    stack: Vec<String>,
    attributes: Vec<(String, String)>,
    pending: VecDeque<XmlEvent>,
    started: bool,
    document_depth: usize,
}

impl std::fmt::Debug for StaxUnmarshallerContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaxUnmarshallerContext")
            .field("stack", &self.stack)
            .field("started", &self.started)
            .field("document_depth", &self.document_depth)
            .finish_non_exhaustive()
    }
}

impl<'a> StaxUnmarshallerContext<'a> {
    /// Context for a REST-XML body whose fields sit directly under the root
    /// element.
    #[must_use]
    pub fn new(xml: &'a [u8]) -> Self {
        Self::with_document_depth(xml, 1)
    }

    /// Context for a body whose fields sit `document_depth` elements below the
    /// document root (2 for query-protocol `<XResponse><XResult>` bodies).
    #[must_use]
    pub fn with_document_depth(xml: &'a [u8], document_depth: usize) -> Self {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(false);
        Self {
            reader,
            stack: Vec::new(),
            attributes: Vec::new(),
            pending: VecDeque::new(),
            started: false,
            document_depth,
        }
    }

    /// Number of currently open elements.
    #[must_use]
    pub fn current_depth(&self) -> usize {
        self.stack.len()
    }

    /// True until the first event has been consumed.
    #[must_use]
    pub fn is_start_of_document(&self) -> bool {
        !self.started
    }

    /// Wrapper depth added to the first unmarshaller's target depth.
    #[must_use]
    pub fn document_depth(&self) -> usize {
        self.document_depth
    }

    /// Local name of the innermost open element.
    #[must_use]
    pub fn current_element(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    /// Advance to the next event, updating the element stack.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] on malformed input.
    pub fn next_event(&mut self) -> Result<XmlEvent, XmlError> {
        self.started = true;
        let event = match self.pending.pop_front() {
            Some(event) => event,
            None => self.read_raw()?,
        };
        match &event {
            XmlEvent::StartElement { name, attributes } => {
                self.stack.push(name.clone());
                self.attributes.clone_from(attributes);
            }
            XmlEvent::EndElement(_) => {
                self.stack.pop();
                self.attributes.clear();
            }
            XmlEvent::Text(_) | XmlEvent::EndDocument => {}
        }
        Ok(event)
    }

    /// Test whether the cursor sits on the element addressed by `expression`
    /// relative to `target_depth`.
    ///
    /// `expression` is a `/`-separated path such as `Contents` or
    /// `TagSet/Tag`. It matches when the open element path ends with those
    /// names and the current depth is `target_depth` plus the number of extra
    /// element segments. A trailing `@name` segment addresses an attribute of
    /// the current element and does not add depth; `.` always matches.
    #[must_use]
    pub fn test_expression(&self, expression: &str, target_depth: usize) -> bool {
        if expression == "." {
            return true;
        }
        let mut elements: Vec<&str> = expression.split('/').filter(|s| !s.is_empty()).collect();
        let attribute = elements
            .last()
            .copied()
            .and_then(|last| last.strip_prefix('@'))
            .map(local_name);
        if attribute.is_some() {
            elements.pop();
        }

        if self.current_depth() + 1 != target_depth + elements.len() {
            return false;
        }
        if elements.len() > self.stack.len() {
            return false;
        }
        let tail = &self.stack[self.stack.len() - elements.len()..];
        if !tail.iter().zip(&elements).all(|(open, wanted)| open == wanted) {
            return false;
        }
        match attribute {
            Some(name) => self.attributes.iter().any(|(key, _)| key == name),
            None => true,
        }
    }

    /// Read the text content of the element just opened.
    ///
    /// The element's end event is left in place so the caller's loop still
    /// observes it.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::UnexpectedElement`] if a child element appears
    /// before the end tag, or [`XmlError::MissingElement`] if the document ends.
    pub fn read_text(&mut self) -> Result<String, XmlError> {
        let mut text = String::new();
        loop {
            let event = match self.pending.pop_front() {
                Some(event) => event,
                None => self.read_raw()?,
            };
            match event {
                XmlEvent::Text(chunk) => text.push_str(&chunk),
                end @ XmlEvent::EndElement(_) => {
                    self.pending.push_front(end);
                    return Ok(text);
                }
                XmlEvent::StartElement { name, .. } => {
                    return Err(XmlError::UnexpectedElement(format!(
                        "<{name}> inside text value"
                    )));
                }
                XmlEvent::EndDocument => {
                    return Err(XmlError::MissingElement(format!(
                        "end tag of <{}>",
                        self.current_element().unwrap_or_default()
                    )));
                }
            }
        }
    }

    /// Value of the attribute `name` (matched by local name) on the most
    /// recently opened element.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        let name = local_name(name);
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn read_raw(&mut self) -> Result<XmlEvent, XmlError> {
        loop {
            match self.reader.read_event()? {
                Event::Start(e) => return start_event(&e),
                Event::Empty(e) => {
                    let start = start_event(&e)?;
                    if let XmlEvent::StartElement { name, .. } = &start {
                        self.pending.push_back(XmlEvent::EndElement(name.clone()));
                    }
                    return Ok(start);
                }
                Event::End(e) => {
                    let name = utf8(e.local_name().as_ref())?;
                    return Ok(XmlEvent::EndElement(name));
                }
                Event::Text(e) => {
                    let decoded = e
                        .decode()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    return Ok(XmlEvent::Text(decoded.into_owned()));
                }
                Event::CData(e) => {
                    let decoded = e
                        .decode()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    return Ok(XmlEvent::Text(decoded.into_owned()));
                }
                Event::GeneralRef(e) => {
                    if let Some(ch) = e
                        .resolve_char_ref()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?
                    {
                        return Ok(XmlEvent::Text(ch.to_string()));
                    }
                    let entity = e
                        .decode()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    let resolved = quick_xml::escape::resolve_predefined_entity(&entity)
                        .ok_or_else(|| {
                            XmlError::ParseError(format!("unknown entity &{entity};"))
                        })?;
                    return Ok(XmlEvent::Text(resolved.to_owned()));
                }
                Event::Eof => return Ok(XmlEvent::EndDocument),
                _ => trace!("skipping XML prolog or comment event"),
            }
        }
    }
}

fn start_event(e: &BytesStart<'_>) -> Result<XmlEvent, XmlError> {
    let name = utf8(e.local_name().as_ref())?;
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = utf8(attr.key.local_name().as_ref())?;
        let raw = std::str::from_utf8(&attr.value)
            .map_err(|err| XmlError::ParseError(err.to_string()))?;
        let value = quick_xml::escape::unescape(raw)
            .map_err(|err| XmlError::ParseError(err.to_string()))?;
        attributes.push((key, value.into_owned()));
    }
    Ok(XmlEvent::StartElement { name, attributes })
}

fn utf8(bytes: &[u8]) -> Result<String, XmlError> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| XmlError::ParseError(e.to_string()))
}

fn local_name(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}
