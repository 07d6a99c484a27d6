//! Typed model of an Atom Publishing Protocol service document.
//!
//! The model is a strict ownership tree:
//!
//! - [`Service`] - the root document, an ordered list of workspaces
//! - [`Workspace`] - a titled group of collections
//! - [`Collection`] - a URI accepting POSTed resources of given media types
//! - [`Categories`] / [`Category`] - category lists attached to a collection
//!
//! Every type parses itself from an [`Element`](crate::xml::Element) with
//! `from_element` and renders itself with `to_element`. Parsing fails hard on
//! a missing `atom:title`; nothing is skipped or repaired.
//!
//! # Example
//!
//! ```
//! use atompub::model::{Collection, Service, Workspace};
//! use atompub::xml::QuickXmlCodec;
//!
//! let mut workspace = Workspace::new("Main Site", None);
//! let mut pictures = Collection::new("Pictures", None, "http://example.org/pics");
//! pictures.add_accept("image/*");
//! workspace.add_collection(pictures);
//!
//! let mut service = Service::new();
//! service.add_workspace(workspace);
//!
//! let codec = QuickXmlCodec::default();
//! let xml = service.to_xml_string(&codec).unwrap();
//! let parsed = Service::from_xml_str(&xml, &codec).unwrap();
//!
//! let target = parsed
//!     .find_workspace("Main Site")
//!     .and_then(|w| w.find_collection(None, Some("image/png")))
//!     .map(|c| c.href());
//! assert_eq!(target, Some("http://example.org/pics"));
//! ```

mod categories;
mod collection;
mod error;
mod service;
mod title;
mod workspace;

pub use categories::{Categories, Category};
pub use collection::{Collection, DEFAULT_ACCEPT};
pub use error::ModelError;
pub use service::Service;
pub use workspace::Workspace;
