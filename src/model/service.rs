use super::error::ModelError;
use super::workspace::Workspace;
use crate::xml::{Document, Element, XmlCodec, ATOM_PROTOCOL};

/// An APP service document: an ordered list of workspaces.
///
/// Workspace order is document order and is preserved through parsing and
/// serialization. Titles need not be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Service {
    workspaces: Vec<Workspace>,
}

impl Service {
    /// Creates a service with no workspaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a workspace; titles are not deduplicated.
    pub fn add_workspace(&mut self, workspace: Workspace) {
        self.workspaces.push(workspace);
    }

    /// Workspaces in document order.
    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    /// Mutable access for reordering or editing workspaces in place.
    pub fn workspaces_mut(&mut self) -> &mut Vec<Workspace> {
        &mut self.workspaces
    }

    /// Replaces all workspaces.
    pub fn set_workspaces(&mut self, workspaces: Vec<Workspace>) {
        self.workspaces = workspaces;
    }

    /// First workspace whose title is exactly `title` (case-sensitive).
    pub fn find_workspace(&self, title: &str) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| w.title() == title)
    }

    /// Builds a service from the immediate `app:workspace` children of the
    /// document root.
    ///
    /// A root without workspaces is an empty service. Any workspace that
    /// fails to parse fails the whole document.
    pub fn document_to_service(document: &Document) -> Result<Self, ModelError> {
        let root = document.root();
        if !root.is("service", &ATOM_PROTOCOL) {
            tracing::warn!(
                root = %root.name(),
                namespace = %root.namespace().uri(),
                "Root element is not app:service, scanning for workspaces anyway"
            );
        }

        let mut service = Self::new();
        for element in root.children_named("workspace", &ATOM_PROTOCOL) {
            service.add_workspace(Workspace::from_element(element)?);
        }

        tracing::debug!(workspaces = service.workspaces.len(), "Parsed service document");
        Ok(service)
    }

    /// Serializes this service as an `app:service` document.
    pub fn service_to_document(&self) -> Document {
        let mut root = Element::new("service", &ATOM_PROTOCOL);
        for workspace in &self.workspaces {
            root.add_child(workspace.to_element());
        }
        Document::new(root)
    }

    /// Parses service document text with `codec`.
    pub fn from_xml_str(content: &str, codec: &impl XmlCodec) -> Result<Self, ModelError> {
        let document = codec.parse(content)?;
        Self::document_to_service(&document)
    }

    /// Renders this service as XML text with `codec`.
    pub fn to_xml_string(&self, codec: &impl XmlCodec) -> Result<String, ModelError> {
        Ok(codec.render(&self.service_to_document())?)
    }
}
