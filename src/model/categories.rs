use super::error::ModelError;
use crate::xml::{Element, Namespace, ATOM_FORMAT, ATOM_PROTOCOL};

/// An `atom:category` inside an `app:categories` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub term: String,
    pub scheme: Option<String>,
    pub label: Option<String>,
}

impl Category {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            scheme: None,
            label: None,
        }
    }

    /// Parses an `atom:category`; `term` is required.
    pub fn from_element(element: &Element) -> Result<Self, ModelError> {
        let term = element
            .attribute("term", &Namespace::NONE)
            .ok_or(ModelError::MissingAttribute {
                element: "category",
                attribute: "term",
            })?;

        Ok(Self {
            term: term.to_string(),
            scheme: optional_attribute(element, "scheme"),
            label: optional_attribute(element, "label"),
        })
    }

    pub fn to_element(&self) -> Element {
        let mut element = Element::new("category", &ATOM_FORMAT);
        element.set_attribute("term", self.term.as_str(), &Namespace::NONE);
        if let Some(ref scheme) = self.scheme {
            element.set_attribute("scheme", scheme.as_str(), &Namespace::NONE);
        }
        if let Some(ref label) = self.label {
            element.set_attribute("label", label.as_str(), &Namespace::NONE);
        }
        element
    }
}

/// An `app:categories` block: the categories a collection allows.
///
/// Either lists categories inline or points at an out-of-line category
/// document through `href`. When `fixed` is `Some(true)` clients may only use
/// the listed categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categories {
    pub fixed: Option<bool>,
    pub scheme: Option<String>,
    pub href: Option<String>,
    pub categories: Vec<Category>,
}

impl Categories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Parses an `app:categories` block. A `fixed` value other than `yes`
    /// or `no` is logged and treated as absent.
    pub fn from_element(element: &Element) -> Result<Self, ModelError> {
        let fixed = match element.attribute("fixed", &Namespace::NONE) {
            Some("yes") => Some(true),
            Some("no") => Some(false),
            Some(other) => {
                tracing::warn!(value = %other, "Ignoring invalid app:categories fixed attribute");
                None
            }
            None => None,
        };

        let categories = element
            .children_named("category", &ATOM_FORMAT)
            .map(Category::from_element)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            fixed,
            scheme: optional_attribute(element, "scheme"),
            href: optional_attribute(element, "href"),
            categories,
        })
    }

    pub fn to_element(&self) -> Element {
        let mut element = Element::new("categories", &ATOM_PROTOCOL);
        if let Some(fixed) = self.fixed {
            element.set_attribute("fixed", if fixed { "yes" } else { "no" }, &Namespace::NONE);
        }
        if let Some(ref scheme) = self.scheme {
            element.set_attribute("scheme", scheme.as_str(), &Namespace::NONE);
        }
        if let Some(ref href) = self.href {
            element.set_attribute("href", href.as_str(), &Namespace::NONE);
        }
        for category in &self.categories {
            element.add_child(category.to_element());
        }
        element
    }
}

fn optional_attribute(element: &Element, name: &str) -> Option<String> {
    element.attribute(name, &Namespace::NONE).map(str::to_string)
}
