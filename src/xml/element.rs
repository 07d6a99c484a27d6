use super::namespace::Namespace;

/// A namespace-qualified attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    namespace: Namespace,
    value: String,
}

impl Attribute {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Child content of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// A namespace-qualified XML element with its attributes and ordered children.
///
/// This is the interchange format between the service document model and the
/// XML reader/writer. Lookups match on local name plus namespace URI; the
/// prefix a document happened to use is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    namespace: Namespace,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>, namespace: &Namespace) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.clone(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// True if this element has the given local name and namespace.
    pub fn is(&self, name: &str, namespace: &Namespace) -> bool {
        self.name == name && &self.namespace == namespace
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Value of the attribute with this local name and namespace.
    ///
    /// Pass [`Namespace::NONE`] for unqualified attributes such as `href`.
    pub fn attribute(&self, name: &str, namespace: &Namespace) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name && &a.namespace == namespace)
            .map(|a| a.value.as_str())
    }

    /// Sets an attribute, replacing any existing one with the same qualified name.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        namespace: &Namespace,
    ) {
        let name = name.into();
        let value = value.into();
        match self
            .attributes
            .iter_mut()
            .find(|a| a.name == name && &a.namespace == namespace)
        {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute {
                name,
                namespace: namespace.clone(),
                value,
            }),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements in document order, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// First immediate child with this name and namespace.
    pub fn child(&self, name: &str, namespace: &Namespace) -> Option<&Element> {
        self.child_elements().find(|e| e.is(name, namespace))
    }

    /// All immediate children with this name and namespace, in document order.
    pub fn children_named<'a>(
        &'a self,
        name: &'a str,
        namespace: &'a Namespace,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.child_elements().filter(move |e| e.is(name, namespace))
    }

    pub fn add_child(&mut self, child: Element) -> &mut Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(Node::Text(text));
        }
        self
    }

    /// Drops whitespace-only text nodes, but only when this element also has
    /// child elements.
    pub(crate) fn strip_indentation(&mut self) {
        if self.child_elements().next().is_none() {
            return;
        }
        self.children
            .retain(|node| !matches!(node, Node::Text(t) if t.trim().is_empty()));
    }

    /// Replaces all text children with `text`, keeping child elements.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.children.retain(|node| matches!(node, Node::Element(_)));
        self.add_text(text)
    }

    /// Concatenated text of the immediate text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }
}

/// A parsed or constructed XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }
}
