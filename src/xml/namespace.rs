use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An XML namespace: a preferred prefix bound to a URI.
///
/// Two namespaces are equal when their URIs are equal. The prefix is only a
/// serialization hint, so `atom:title` parsed from a document that spells the
/// Atom namespace as `a:` still matches [`ATOM_FORMAT`].
#[derive(Clone)]
pub struct Namespace {
    prefix: Cow<'static, str>,
    uri: Cow<'static, str>,
}

/// URI of the Atom Syndication Format namespace.
pub const ATOM_FORMAT_URI: &str = "http://www.w3.org/2005/Atom";

/// URI of the Atom Publishing Protocol namespace.
pub const ATOM_PROTOCOL_URI: &str = "http://www.w3.org/2007/app";

/// Namespace for the Atom Syndication Format.
pub const ATOM_FORMAT: Namespace = Namespace::from_static("atom", ATOM_FORMAT_URI);

/// Namespace for the Atom Publishing Protocol.
pub const ATOM_PROTOCOL: Namespace = Namespace::from_static("app", ATOM_PROTOCOL_URI);

/// Namespace bound to the `xml:` prefix (`xml:lang`, `xml:base`).
pub const XML: Namespace =
    Namespace::from_static("xml", "http://www.w3.org/XML/1998/namespace");

impl Namespace {
    /// The absence of a namespace (unqualified names).
    pub const NONE: Namespace = Namespace::from_static("", "");

    pub const fn from_static(prefix: &'static str, uri: &'static str) -> Self {
        Self {
            prefix: Cow::Borrowed(prefix),
            uri: Cow::Borrowed(uri),
        }
    }

    pub fn new(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            prefix: Cow::Owned(prefix.into()),
            uri: Cow::Owned(uri.into()),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// True for [`Namespace::NONE`] and any other namespace with an empty URI.
    pub fn is_none(&self) -> bool {
        self.uri.is_empty()
    }
}

impl PartialEq for Namespace {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
    }
}

impl Eq for Namespace {}

impl Hash for Namespace {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uri.hash(state);
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("Namespace(none)")
        } else {
            write!(f, "Namespace({}={})", self.prefix, self.uri)
        }
    }
}
