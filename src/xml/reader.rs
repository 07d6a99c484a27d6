use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{QName, ResolveResult};
use quick_xml::NsReader;

use super::element::{Document, Element};
use super::error::XmlError;
use super::namespace::{Namespace, XML};

/// Parses XML text into a namespace-resolved [`Document`].
///
/// Whitespace-only text is dropped from elements that contain child
/// elements, so indentation does not show up as content; text-only elements
/// keep their text exactly. `xmlns` declarations are consumed by the
/// resolver and are not kept as attributes.
///
/// # Security
///
/// SEC-002: quick-xml (0.37) never expands `<!ENTITY>` declarations; unknown
/// entity references fail in `unescape()` instead of being resolved.
/// SEC-003: nesting deeper than `max_depth` is rejected before the tree grows.
pub(crate) fn parse_document(
    content: &str,
    max_depth: usize,
    max_bytes: usize,
) -> Result<Document, XmlError> {
    if content.len() > max_bytes {
        return Err(XmlError::TooLarge {
            size: content.len(),
            max: max_bytes,
        });
    }

    let mut reader = NsReader::from_str(content);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                check_open(&stack, &root, max_depth)?;
                stack.push(open_element(&reader, &e)?);
            }
            Event::Empty(e) => {
                check_open(&stack, &root, max_depth)?;
                let element = open_element(&reader, &e)?;
                close_element(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                // End tag names are checked against start tags by quick-xml
                if let Some(element) = stack.pop() {
                    close_element(&mut stack, &mut root, element);
                }
            }
            Event::Text(e) => push_text(&mut stack, &e.unescape()?)?,
            Event::CData(e) => {
                let text = String::from_utf8(e.into_inner().into_owned())?;
                push_text(&mut stack, &text)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::UnexpectedEof(open.name().to_string()));
    }
    root.map(Document::new).ok_or(XmlError::MissingRoot)
}

fn check_open(
    stack: &[Element],
    root: &Option<Element>,
    max_depth: usize,
) -> Result<(), XmlError> {
    if stack.is_empty() && root.is_some() {
        return Err(XmlError::MultipleRoots);
    }
    if stack.len() >= max_depth {
        return Err(XmlError::MaxDepthExceeded(max_depth));
    }
    Ok(())
}

fn open_element(reader: &NsReader<&[u8]>, start: &BytesStart<'_>) -> Result<Element, XmlError> {
    let (resolved, local) = reader.resolve_element(start.name());
    let namespace = to_namespace(resolved, start.name())?;
    let mut element = Element::new(String::from_utf8(local.as_ref().to_vec())?, &namespace);

    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let (resolved, local) = reader.resolve_attribute(attr.key);
        let namespace = to_namespace(resolved, attr.key)?;
        let name = String::from_utf8(local.as_ref().to_vec())?;
        let value = attr.decode_and_unescape_value(reader.decoder())?;
        element.set_attribute(name, value.into_owned(), &namespace);
    }

    Ok(element)
}

fn to_namespace(resolved: ResolveResult<'_>, name: QName<'_>) -> Result<Namespace, XmlError> {
    match resolved {
        ResolveResult::Bound(ns) => {
            let uri = String::from_utf8(ns.as_ref().to_vec())?;
            let prefix = match name.prefix() {
                Some(p) => String::from_utf8(p.as_ref().to_vec())?,
                None => String::new(),
            };
            Ok(Namespace::new(prefix, uri))
        }
        ResolveResult::Unbound => Ok(Namespace::NONE),
        ResolveResult::Unknown(prefix) if prefix == b"xml" => Ok(XML),
        ResolveResult::Unknown(prefix) => Err(XmlError::UnknownPrefix(
            String::from_utf8_lossy(&prefix).into_owned(),
        )),
    }
}

fn close_element(stack: &mut [Element], root: &mut Option<Element>, mut element: Element) {
    element.strip_indentation();
    match stack.last_mut() {
        Some(parent) => {
            parent.add_child(element);
        }
        None => *root = Some(element),
    }
}

fn push_text(stack: &mut [Element], text: &str) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.add_text(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(XmlError::StrayText),
    }
}
