use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::element::{Document, Element, Node};
use super::error::XmlError;
use super::namespace::{Namespace, XML};

/// Renders a [`Document`] to XML text.
///
/// Every namespace used anywhere in the tree is declared once on the root
/// element. Each namespace keeps its own prefix unless another namespace
/// already claimed it; attributes never use the default namespace, since an
/// unprefixed attribute has no namespace at all.
pub(crate) fn write_document(
    document: &Document,
    indent: usize,
    declaration: bool,
) -> Result<String, XmlError> {
    let bindings = Bindings::collect(document.root());

    let mut writer = if indent > 0 {
        Writer::new_with_indent(Cursor::new(Vec::new()), b' ', indent)
    } else {
        Writer::new(Cursor::new(Vec::new()))
    };

    if declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }
    write_element(&mut writer, document.root(), &bindings, true)?;

    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8(bytes)?)
}

fn write_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    element: &Element,
    bindings: &Bindings,
    is_root: bool,
) -> Result<(), XmlError> {
    let name = bindings.qualify(element.name(), element.namespace(), false);
    let mut start = BytesStart::new(name.clone());

    if is_root {
        for (prefix, uri) in &bindings.declared {
            let key = if prefix.is_empty() {
                "xmlns".to_string()
            } else {
                format!("xmlns:{prefix}")
            };
            start.push_attribute((key.as_str(), uri.as_str()));
        }
    }
    for attr in element.attributes() {
        let key = bindings.qualify(attr.name(), attr.namespace(), true);
        start.push_attribute((key.as_str(), attr.value()));
    }

    if element.children().is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in element.children() {
        match child {
            Node::Element(e) => write_element(writer, e, bindings, false)?,
            Node::Text(t) => writer.write_event(Event::Text(BytesText::new(t)))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Prefix assignments for one output document, in first-use order.
struct Bindings {
    declared: Vec<(String, String)>,
    default_allowed: bool,
}

impl Bindings {
    fn collect(root: &Element) -> Self {
        let mut bindings = Self {
            declared: Vec::new(),
            // A default namespace would capture unqualified elements
            default_allowed: !has_unqualified_elements(root),
        };
        bindings.visit(root);
        bindings
    }

    fn visit(&mut self, element: &Element) {
        self.bind(element.namespace(), false);
        for attr in element.attributes() {
            self.bind(attr.namespace(), true);
        }
        for child in element.child_elements() {
            self.visit(child);
        }
    }

    fn bind(&mut self, namespace: &Namespace, attribute: bool) {
        if namespace.is_none()
            || *namespace == XML
            || self.lookup(namespace.uri(), attribute).is_some()
        {
            return;
        }

        let wanted = namespace.prefix();
        let usable = if wanted.is_empty() {
            !attribute && self.default_allowed
        } else {
            wanted != "xmlns" && wanted != "xml"
        };
        let prefix = if usable && !self.is_taken(wanted) {
            wanted.to_string()
        } else {
            self.generate()
        };
        self.declared.push((prefix, namespace.uri().to_string()));
    }

    fn lookup(&self, uri: &str, attribute: bool) -> Option<&str> {
        self.declared
            .iter()
            .find(|(prefix, bound)| bound == uri && !(attribute && prefix.is_empty()))
            .map(|(prefix, _)| prefix.as_str())
    }

    fn is_taken(&self, prefix: &str) -> bool {
        self.declared.iter().any(|(p, _)| p == prefix)
    }

    fn generate(&self) -> String {
        (0..)
            .map(|n| format!("ns{n}"))
            .find(|p| !self.is_taken(p))
            .unwrap_or_default()
    }

    fn qualify(&self, name: &str, namespace: &Namespace, attribute: bool) -> String {
        if namespace.is_none() {
            return name.to_string();
        }
        if *namespace == XML {
            return format!("xml:{name}");
        }
        match self.lookup(namespace.uri(), attribute) {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}:{name}"),
            _ => name.to_string(),
        }
    }
}

fn has_unqualified_elements(element: &Element) -> bool {
    element.namespace().is_none() || element.child_elements().any(has_unqualified_elements)
}
