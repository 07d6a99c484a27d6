//! Atom Publishing Protocol service documents.
//!
//! - [`xml`] - namespace-aware element tree and the quick-xml text codec
//! - [`model`] - `Service` / `Workspace` / `Collection` and their XML mapping
//! - [`config`] - optional TOML configuration for the codec
//! - [`file`] - reading and atomically writing documents on disk

pub mod config;
pub mod file;
pub mod model;
pub mod xml;

pub use model::{Categories, Category, Collection, ModelError, Service, Workspace};
pub use xml::{QuickXmlCodec, XmlCodec, XmlError};
