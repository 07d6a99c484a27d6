use super::collection::Collection;
use super::error::ModelError;
use super::title::{parse_title, title_element};
use crate::xml::{Element, ATOM_PROTOCOL};

/// An `app:workspace`: a titled group of collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    title: String,
    title_type: Option<String>,
    collections: Vec<Collection>,
}

impl Workspace {
    /// Creates an empty workspace. `title_type` of `None` means plain text.
    pub fn new(title: impl Into<String>, title_type: Option<String>) -> Self {
        Self {
            title: title.into(),
            title_type,
            collections: Vec::new(),
        }
    }

    /// Title text of the `atom:title` child.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the title text.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// "text", "html", "xhtml" or a MIME type; `None` for plain text.
    pub fn title_type(&self) -> Option<&str> {
        self.title_type.as_deref()
    }

    /// `None` and `"TEXT"` both serialize without a type attribute.
    pub fn set_title_type(&mut self, title_type: Option<String>) {
        self.title_type = title_type;
    }

    /// Collections in document order.
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn collections_mut(&mut self) -> &mut Vec<Collection> {
        &mut self.collections
    }

    /// Appends a collection.
    pub fn add_collection(&mut self, collection: Collection) {
        self.collections.push(collection);
    }

    /// Returns the first collection that accepts `content_type`.
    ///
    /// `title` does not take part in the match: a collection is returned
    /// whenever it accepts the content type, whatever its title. Use
    /// [`Workspace::find_collection_by_title`] to filter on title as well.
    /// A `content_type` of `None` matches every collection.
    pub fn find_collection(
        &self,
        _title: Option<&str>,
        content_type: Option<&str>,
    ) -> Option<&Collection> {
        self.collections
            .iter()
            .find(|c| content_type.is_none_or(|ct| c.accepts(ct)))
    }

    /// Returns the first collection matching both `title` and `content_type`.
    ///
    /// `None` for either argument matches all values of it. Titles are
    /// compared exactly.
    pub fn find_collection_by_title(
        &self,
        title: Option<&str>,
        content_type: Option<&str>,
    ) -> Option<&Collection> {
        self.collections.iter().find(|c| {
            title.is_none_or(|t| c.title() == t) && content_type.is_none_or(|ct| c.accepts(ct))
        })
    }

    /// Parses an `app:workspace` element.
    ///
    /// Fails if the required `atom:title` child is missing; errors from
    /// collections propagate unchanged.
    pub fn from_element(element: &Element) -> Result<Self, ModelError> {
        let (title, title_type) = parse_title(element)?;
        let mut workspace = Self::new(title, title_type);
        for collection in element.children_named("collection", &ATOM_PROTOCOL) {
            workspace.add_collection(Collection::from_element(collection)?);
        }
        Ok(workspace)
    }

    /// Builds the `app:workspace` element: title first, then collections.
    pub fn to_element(&self) -> Element {
        let mut element = Element::new("workspace", &ATOM_PROTOCOL);
        element.add_child(title_element(&self.title, self.title_type()));
        for collection in &self.collections {
            element.add_child(collection.to_element());
        }
        element
    }
}
