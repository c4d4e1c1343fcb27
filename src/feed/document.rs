//! Minimal namespace-aware element tree built with quick-xml.
//!
//! Only what the entry extraction needs is kept: the resolved namespace and
//! local name of each element, its unqualified attributes, the character data
//! before its first child, and its child elements. Elements nested deeper than
//! [`MAX_KEPT_DEPTH`] are checked for well-formedness but not stored.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{QName, ResolveResult};
use quick_xml::reader::NsReader;

use super::{FeedNamespace, MalformedDocument};

/// feed > entry > author > name
const MAX_KEPT_DEPTH: usize = 4;

/// One XML element with its namespace already resolved.
#[derive(Debug, Clone)]
pub(crate) struct Element {
    namespace: FeedNamespace,
    local_name: String,
    attributes: Vec<(String, String)>,
    text: String,
    text_closed: bool,
    children: Vec<Element>,
}

impl Element {
    fn from_start(
        reader: &NsReader<&[u8]>,
        start: &BytesStart<'_>,
        position: u64,
    ) -> Result<Self, MalformedDocument> {
        check_name(start.name(), position)?;
        let (ns, local) = reader.resolve_element(start.name());
        let namespace = resolve(&ns, position)?;
        let local_name = std::str::from_utf8(local.as_ref())
            .map_err(|e| MalformedDocument::at(position, e))?
            .to_string();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| MalformedDocument::at(position, e))?;
            check_name(attr.key, position)?;
            if attr.value.contains(&b'<') {
                return Err(MalformedDocument::at(position, "'<' in attribute value"));
            }
            let value = attr
                .unescape_value()
                .map_err(|e| MalformedDocument::at(position, e))?;
            if attr.key.as_namespace_binding().is_some()
                || attr.key.prefix().is_some_and(|p| p.as_ref() == b"xml")
            {
                continue;
            }
            let (ns, _) = reader.resolve_attribute(attr.key);
            resolve(&ns, position)?;
            // Prefixed attributes are never looked up
            if attr.key.prefix().is_some() {
                continue;
            }
            let key = std::str::from_utf8(attr.key.local_name().as_ref())
                .map_err(|e| MalformedDocument::at(position, e))?
                .to_string();
            attributes.push((key, value.into_owned()));
        }

        Ok(Self {
            namespace,
            local_name,
            attributes,
            text: String::new(),
            text_closed: false,
            children: Vec::new(),
        })
    }

    pub(crate) fn is(&self, namespace: FeedNamespace, local_name: &str) -> bool {
        self.namespace == namespace && self.local_name == local_name
    }

    /// Character data before the first child element, `None` when empty
    pub(crate) fn text(&self) -> Option<&str> {
        if self.text.is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }

    /// Value of an unqualified attribute
    pub(crate) fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct children with the given name, in document order
    pub(crate) fn children<'a>(
        &'a self,
        namespace: FeedNamespace,
        local_name: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.children
            .iter()
            .filter(move |child| child.is(namespace, local_name))
    }

    /// First direct child with the given name
    pub(crate) fn child(&self, namespace: FeedNamespace, local_name: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|child| child.is(namespace, local_name))
    }

    fn push_text(&mut self, text: &str) {
        // Text after the first child belongs to that child's tail, not to us
        if !self.text_closed {
            self.text.push_str(text);
        }
    }
}

fn resolve(result: &ResolveResult<'_>, position: u64) -> Result<FeedNamespace, MalformedDocument> {
    match result {
        ResolveResult::Bound(ns) => Ok(FeedNamespace::from_uri(ns.as_ref())),
        ResolveResult::Unbound => Ok(FeedNamespace::Other),
        ResolveResult::Unknown(prefix) => Err(MalformedDocument::at(
            position,
            format!("unbound prefix '{}'", String::from_utf8_lossy(prefix)),
        )),
    }
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == ':' || !c.is_ascii()
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-' || c == '.'
}

/// Reject element and attribute names quick-xml lets through, e.g. `<1a/>`.
fn check_name(name: QName<'_>, position: u64) -> Result<(), MalformedDocument> {
    let name = std::str::from_utf8(name.as_ref()).map_err(|e| MalformedDocument::at(position, e))?;
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(is_name_start) && chars.all(is_name_char);
    if valid {
        Ok(())
    } else {
        Err(MalformedDocument::at(position, format!("invalid name '{}'", name)))
    }
}

/// Parse a complete document and return its root element.
///
/// Anything that is not a single well-formed root element is rejected.
pub(crate) fn parse_document(xml: &str) -> Result<Element, MalformedDocument> {
    let mut reader = NsReader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    // Open elements below MAX_KEPT_DEPTH that are being skipped
    let mut skipped = 0usize;
    let mut first_event = true;

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader
            .read_event()
            .map_err(|e| MalformedDocument::at(position, e))?;
        let is_first = std::mem::replace(&mut first_event, false);

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                if stack.is_empty() && root.is_some() {
                    return Err(MalformedDocument::at(position, "junk after document element"));
                }
                let element = Element::from_start(&reader, e, position)?;
                if let Some(parent) = stack.last_mut() {
                    parent.text_closed = true;
                }
                let is_empty = matches!(event, Event::Empty(_));
                if skipped > 0 || stack.len() >= MAX_KEPT_DEPTH {
                    if !is_empty {
                        skipped += 1;
                    }
                } else if is_empty {
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => root = Some(element),
                    }
                } else {
                    stack.push(element);
                }
            }
            Event::End(_) => {
                if skipped > 0 {
                    skipped -= 1;
                    continue;
                }
                let element = stack
                    .pop()
                    .ok_or_else(|| MalformedDocument::at(position, "unexpected end tag"))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::Text(e) => {
                if e.windows(3).any(|w| w == b"]]>") {
                    return Err(MalformedDocument::at(position, "']]>' in character data"));
                }
                match stack.last_mut() {
                    Some(current) => {
                        let text = e
                            .unescape()
                            .map_err(|err| MalformedDocument::at(position, err))?;
                        if skipped == 0 {
                            current.push_text(&text);
                        }
                    }
                    None => {
                        if !e.iter().all(u8::is_ascii_whitespace) {
                            return Err(MalformedDocument::at(
                                position,
                                "text outside of document element",
                            ));
                        }
                    }
                }
            }
            Event::CData(e) => match stack.last_mut() {
                Some(current) => {
                    let text = String::from_utf8(e.into_inner().into_owned())
                        .map_err(|err| MalformedDocument::at(position, err))?;
                    if skipped == 0 {
                        current.push_text(&text);
                    }
                }
                None => {
                    return Err(MalformedDocument::at(
                        position,
                        "CDATA outside of document element",
                    ))
                }
            },
            Event::Decl(_) if !is_first => {
                return Err(MalformedDocument::at(
                    position,
                    "XML declaration not at start of document",
                ))
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(MalformedDocument::at(
            xml.len() as u64,
            format!("unclosed element <{}>", open.local_name),
        ));
    }

    root.ok_or_else(|| MalformedDocument::at(xml.len() as u64, "no element found"))
}
