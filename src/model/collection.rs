use url::Url;

use super::categories::Categories;
use super::error::ModelError;
use super::title::{parse_title, title_element};
use crate::xml::{Element, Namespace, ATOM_PROTOCOL};

/// Media range accepted by a collection that lists no `app:accept` elements.
pub const DEFAULT_ACCEPT: &str = "application/atom+xml;type=entry";

const ATOM_MEDIA_TYPE: &str = "application/atom+xml";

/// An `app:collection`: a URI that accepts POSTed resources of certain
/// media types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    title: String,
    title_type: Option<String>,
    href: String,
    accepts: Vec<String>,
    categories: Vec<Categories>,
}

impl Collection {
    /// Creates a collection with no accept ranges, which accepts Atom entries.
    pub fn new(
        title: impl Into<String>,
        title_type: Option<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            title_type,
            href: href.into(),
            accepts: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Title text of the `atom:title` child.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// "text", "html", "xhtml" or a MIME type; `None` for plain text.
    pub fn title_type(&self) -> Option<&str> {
        self.title_type.as_deref()
    }

    pub fn set_title_type(&mut self, title_type: Option<String>) {
        self.title_type = title_type;
    }

    /// The collection URI as written, possibly relative.
    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn set_href(&mut self, href: impl Into<String>) {
        self.href = href.into();
    }

    /// Resolves `href` against `base`; absolute hrefs are returned as is.
    pub fn resolve_href(&self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(&self.href)
    }

    /// Media ranges from `app:accept`, in document order.
    pub fn accept_ranges(&self) -> &[String] {
        &self.accepts
    }

    /// Adds a media range such as `image/*`. An empty range accepts nothing.
    pub fn add_accept(&mut self, media_range: impl Into<String>) {
        self.accepts.push(media_range.into());
    }

    /// `app:categories` blocks in document order.
    pub fn categories(&self) -> &[Categories] {
        &self.categories
    }

    pub fn add_categories(&mut self, categories: Categories) {
        self.categories.push(categories);
    }

    /// True if a resource of `content_type` may be POSTed to this collection.
    ///
    /// With no `app:accept` elements only Atom entries are accepted. An empty
    /// `app:accept` accepts nothing.
    pub fn accepts(&self, content_type: &str) -> bool {
        if self.accepts.is_empty() {
            return media_range_matches(DEFAULT_ACCEPT, content_type);
        }
        self.accepts
            .iter()
            .any(|range| media_range_matches(range, content_type))
    }

    /// Parses an `app:collection`; `atom:title` and `href` are required.
    pub fn from_element(element: &Element) -> Result<Self, ModelError> {
        let (title, title_type) = parse_title(element)?;
        let href = element
            .attribute("href", &Namespace::NONE)
            .ok_or(ModelError::MissingAttribute {
                element: "collection",
                attribute: "href",
            })?;

        let mut collection = Self::new(title, title_type, href);
        for accept in element.children_named("accept", &ATOM_PROTOCOL) {
            collection.add_accept(accept.text().trim());
        }
        for categories in element.children_named("categories", &ATOM_PROTOCOL) {
            collection.add_categories(Categories::from_element(categories)?);
        }
        Ok(collection)
    }

    pub fn to_element(&self) -> Element {
        let mut element = Element::new("collection", &ATOM_PROTOCOL);
        element.set_attribute("href", self.href.as_str(), &Namespace::NONE);
        element.add_child(title_element(&self.title, self.title_type()));

        for range in &self.accepts {
            let mut accept = Element::new("accept", &ATOM_PROTOCOL);
            accept.set_text(range.as_str());
            element.add_child(accept);
        }
        for categories in &self.categories {
            element.add_child(categories.to_element());
        }
        element
    }
}

/// Matches a content type against an `app:accept` media range.
///
/// Compares `type/subtype` case-insensitively with parameters stripped;
/// `*/*` and `type/*` wildcards are honored and the legacy value `entry`
/// stands for Atom entries.
fn media_range_matches(range: &str, content_type: &str) -> bool {
    let range = essence(range);
    let content_type = essence(content_type);
    if range.is_empty() || content_type.is_empty() {
        return false;
    }

    let range = if range == "entry" {
        ATOM_MEDIA_TYPE.to_string()
    } else {
        range
    };

    if range == "*/*" || range == content_type {
        return true;
    }
    match range.strip_suffix("/*") {
        Some(major) => content_type
            .split_once('/')
            .is_some_and(|(ct_major, _)| ct_major == major),
        None => false,
    }
}

fn essence(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
