//! The `atom:title` text construct shared by workspaces and collections.

use super::error::ModelError;
use crate::xml::{Element, ATOM_FORMAT, ATOM_FORMAT_URI};

/// Title type value that is never written out; plain text is the default.
const IMPLICIT_TITLE_TYPE: &str = "TEXT";

/// Reads the required `atom:title` child of `parent`.
///
/// The title type is read from the `atom:type` attribute only; an
/// unqualified `type` leaves it unset.
pub(crate) fn parse_title(parent: &Element) -> Result<(String, Option<String>), ModelError> {
    let title = parent
        .child("title", &ATOM_FORMAT)
        .ok_or_else(|| ModelError::MissingElement {
            parent: parent.name().to_string(),
            element: "title",
            namespace: ATOM_FORMAT_URI,
        })?;

    let title_type = title
        .attribute("type", &ATOM_FORMAT)
        .map(str::to_string);

    Ok((title.text(), title_type))
}

/// Builds an `atom:title` element.
///
/// `title_type` is dropped when it is `None` or exactly `"TEXT"`, so parsing
/// the result yields `None` in both cases.
pub(crate) fn title_element(title: &str, title_type: Option<&str>) -> Element {
    if title.is_empty() {
        tracing::warn!("Writing empty atom:title; the document will not be valid APP");
    }

    let mut element = Element::new("title", &ATOM_FORMAT);
    element.set_text(title);
    if let Some(kind) = title_type.filter(|t| *t != IMPLICIT_TITLE_TYPE) {
        element.set_attribute("type", kind, &ATOM_FORMAT);
    }
    element
}
