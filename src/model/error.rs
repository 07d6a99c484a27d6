use thiserror::Error;

use crate::xml::XmlError;

/// Errors raised while mapping XML trees onto the service document model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A required child element is absent, e.g. a workspace without `atom:title`.
    #[error("<{parent}> is missing required element <{element}> in namespace {namespace}")]
    MissingElement {
        parent: String,
        element: &'static str,
        namespace: &'static str,
    },

    /// A required attribute is absent, e.g. a collection without `href`.
    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// The XML text layer failed before a tree was available.
    #[error(transparent)]
    Xml(#[from] XmlError),
}
