//! Integration tests for service documents: text in, typed model, text out.
//!
//! These tests go through `QuickXmlCodec` end-to-end, verifying that the
//! reader, the model mapping and the writer compose correctly.

use atompub::model::{Categories, Category, Collection, ModelError, Service, Workspace};
use atompub::xml::{
    Document, Element, Namespace, QuickXmlCodec, XmlCodec, XmlError, ATOM_FORMAT, ATOM_PROTOCOL,
};
use pretty_assertions::assert_eq;

const RFC_5023_EXAMPLE: &str = r#"<?xml version="1.0" encoding='utf-8'?>
<service xmlns="http://www.w3.org/2007/app"
         xmlns:atom="http://www.w3.org/2005/Atom">
  <workspace>
    <atom:title>Main Site</atom:title>
    <collection
        href="http://example.org/blog/main" >
      <atom:title>My Blog Entries</atom:title>
      <categories
         href="http://example.com/cats/forMain.cats" />
    </collection>
    <collection
        href="http://example.org/blog/pic" >
      <atom:title>Pictures</atom:title>
      <accept>image/png</accept>
      <accept>image/jpeg</accept>
      <accept>image/gif</accept>
    </collection>
  </workspace>
  <workspace>
    <atom:title>Sidebar Blog</atom:title>
    <collection
        href="http://example.org/sidebar/list" >
      <atom:title>Remaindered Links</atom:title>
      <accept>application/atom+xml;type=entry</accept>
      <categories fixed="yes">
        <atom:category
          scheme="http://example.org/extra-cats/"
          term="joke" />
        <atom:category
          scheme="http://example.org/extra-cats/"
          term="serious" />
      </categories>
    </collection>
  </workspace>
</service>"#;

fn codec() -> QuickXmlCodec {
    QuickXmlCodec::default()
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_rfc_example() {
    let service = Service::from_xml_str(RFC_5023_EXAMPLE, &codec()).unwrap();

    let titles: Vec<&str> = service.workspaces().iter().map(Workspace::title).collect();
    assert_eq!(titles, vec!["Main Site", "Sidebar Blog"]);

    let main = &service.workspaces()[0];
    assert_eq!(main.title_type(), None);
    assert_eq!(main.collections().len(), 2);
    assert_eq!(main.collections()[0].href(), "http://example.org/blog/main");
    assert_eq!(
        main.collections()[0].categories()[0].href.as_deref(),
        Some("http://example.com/cats/forMain.cats")
    );
    assert_eq!(
        main.collections()[1].accept_ranges(),
        &["image/png", "image/jpeg", "image/gif"]
    );

    let sidebar = &service.workspaces()[1];
    let links = &sidebar.collections()[0];
    assert_eq!(links.title(), "Remaindered Links");
    let cats = &links.categories()[0];
    assert_eq!(cats.fixed, Some(true));
    let terms: Vec<&str> = cats.categories.iter().map(|c| c.term.as_str()).collect();
    assert_eq!(terms, vec!["joke", "serious"]);
}

#[test]
fn test_lookup_on_parsed_document() {
    let service = Service::from_xml_str(RFC_5023_EXAMPLE, &codec()).unwrap();
    let main = service.find_workspace("Main Site").unwrap();

    assert_eq!(
        main.find_collection(None, Some("image/jpeg")).unwrap().title(),
        "Pictures"
    );
    assert_eq!(
        main.find_collection(None, Some("application/atom+xml"))
            .unwrap()
            .title(),
        "My Blog Entries"
    );
    assert!(main.find_collection(None, Some("video/mp4")).is_none());
    assert!(service.find_workspace("main site").is_none());
}

#[test]
fn test_empty_service_is_not_an_error() {
    let xml = r#"<app:service xmlns:app="http://www.w3.org/2007/app"/>"#;
    let service = Service::from_xml_str(xml, &codec()).unwrap();
    assert!(service.workspaces().is_empty());
}

#[test]
fn test_foreign_root_is_scanned() {
    let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>Not a service</title></feed>"#;
    let service = Service::from_xml_str(xml, &codec()).unwrap();
    assert!(service.workspaces().is_empty());
}

#[test]
fn test_missing_workspace_title_fails_whole_document() {
    let xml = r#"<service xmlns="http://www.w3.org/2007/app" xmlns:atom="http://www.w3.org/2005/Atom">
  <workspace><atom:title>Fine</atom:title></workspace>
  <workspace><title>Wrong namespace</title></workspace>
</service>"#;

    let err = Service::from_xml_str(xml, &codec()).unwrap_err();
    match err {
        ModelError::MissingElement {
            parent,
            element,
            namespace,
        } => {
            assert_eq!(parent, "workspace");
            assert_eq!(element, "title");
            assert_eq!(namespace, "http://www.w3.org/2005/Atom");
        }
        other => panic!("expected MissingElement, got {other:?}"),
    }
}

#[test]
fn test_collection_error_propagates_to_service() {
    let xml = r#"<service xmlns="http://www.w3.org/2007/app" xmlns:atom="http://www.w3.org/2005/Atom">
  <workspace>
    <atom:title>W</atom:title>
    <collection><atom:title>No href</atom:title></collection>
  </workspace>
</service>"#;

    let err = Service::from_xml_str(xml, &codec()).unwrap_err();
    assert!(matches!(
        err,
        ModelError::MissingAttribute {
            element: "collection",
            attribute: "href"
        }
    ));
}

#[test]
fn test_malformed_xml_is_xml_error() {
    let err = Service::from_xml_str("<service", &codec()).unwrap_err();
    assert!(matches!(err, ModelError::Xml(_)));

    let err = Service::from_xml_str("", &codec()).unwrap_err();
    assert!(matches!(err, ModelError::Xml(XmlError::MissingRoot)));
}

// ============================================================================
// Serialization
// ============================================================================

fn sample_service() -> Service {
    let mut main = Workspace::new("Main", None);
    let mut entries = Collection::new("Entries", None, "http://example.org/entries");
    entries.add_categories(Categories {
        fixed: Some(false),
        scheme: None,
        href: None,
        categories: vec![Category::new("news")],
    });
    main.add_collection(entries);

    let mut media = Workspace::new("Media & <Files>", Some("html".to_string()));
    let mut pics = Collection::new("Pictures", Some("TEXT".to_string()), "pics/");
    pics.add_accept("image/*");
    media.add_collection(pics);

    let mut service = Service::new();
    service.add_workspace(main);
    service.add_workspace(media);
    service
}

#[test]
fn test_namespace_fidelity() {
    let doc = sample_service().service_to_document();
    let root = doc.root();
    assert_eq!(root.name(), "service");
    assert_eq!(root.namespace().uri(), "http://www.w3.org/2007/app");

    for workspace in root.child_elements() {
        assert_eq!(workspace.name(), "workspace");
        assert_eq!(workspace.namespace().uri(), "http://www.w3.org/2007/app");

        let title = workspace.child_elements().next().unwrap();
        assert_eq!(title.name(), "title");
        assert_eq!(title.namespace().uri(), "http://www.w3.org/2005/Atom");
        for attr in title.attributes() {
            assert_eq!(attr.name(), "type");
            assert_eq!(attr.namespace().uri(), "http://www.w3.org/2005/Atom");
        }

        for collection in workspace.child_elements().skip(1) {
            assert_eq!(collection.name(), "collection");
            assert_eq!(collection.namespace().uri(), "http://www.w3.org/2007/app");
        }
    }
}

#[test]
fn test_rendered_text_uses_declared_prefixes() {
    let codec = QuickXmlCodec {
        indent: 0,
        xml_declaration: false,
        ..QuickXmlCodec::default()
    };
    let xml = sample_service().to_xml_string(&codec).unwrap();

    assert!(xml.starts_with(
        r#"<app:service xmlns:app="http://www.w3.org/2007/app" xmlns:atom="http://www.w3.org/2005/Atom">"#
    ));
    assert!(xml.contains(r#"<atom:title atom:type="html">Media &amp; &lt;Files&gt;</atom:title>"#));
    assert!(xml.contains(r#"<app:collection href="pics/"><atom:title>Pictures</atom:title>"#));
    assert!(xml.contains("<app:accept>image/*</app:accept>"));
    assert!(xml.contains(r#"<app:categories fixed="no"><atom:category term="news"/></app:categories>"#));
}

#[test]
fn test_text_round_trip() {
    let original = sample_service();
    let codec = codec();
    let xml = original.to_xml_string(&codec).unwrap();
    let parsed = Service::from_xml_str(&xml, &codec).unwrap();

    assert_eq!(parsed.workspaces().len(), 2);
    assert_eq!(parsed.workspaces()[0], original.workspaces()[0]);

    let media = &parsed.workspaces()[1];
    assert_eq!(media.title(), "Media & <Files>");
    assert_eq!(media.title_type(), Some("html"));
    // "TEXT" is never written, so it comes back as None
    assert_eq!(media.collections()[0].title_type(), None);
    assert_eq!(media.collections()[0].accept_ranges(), &["image/*"]);
}

#[test]
fn test_whitespace_titles_survive_indented_output() {
    let mut workspace = Workspace::new("   ", None);
    workspace.add_collection(Collection::new(" padded ", None, "/c"));
    let mut original = Service::new();
    original.add_workspace(workspace);

    let codec = codec();
    let xml = original.to_xml_string(&codec).unwrap();
    assert!(xml.contains("<atom:title>   </atom:title>"));

    let parsed = Service::from_xml_str(&xml, &codec).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn test_rfc_example_reformat_is_stable() {
    let codec = codec();
    let first = Service::from_xml_str(RFC_5023_EXAMPLE, &codec).unwrap();
    let rendered = first.to_xml_string(&codec).unwrap();
    let second = Service::from_xml_str(&rendered, &codec).unwrap();
    assert_eq!(first, second);
    assert_eq!(rendered, second.to_xml_string(&codec).unwrap());
}

// ============================================================================
// Tree-only usage (no XML text)
// ============================================================================

#[test]
fn test_hand_built_tree_with_aliased_prefixes() {
    let app = Namespace::new("p", "http://www.w3.org/2007/app");
    let atom = Namespace::new("a", "http://www.w3.org/2005/Atom");

    let mut title = Element::new("title", &atom);
    title.set_text("Aliased");
    title.set_attribute("type", "xhtml", &atom);
    let mut workspace = Element::new("workspace", &app);
    workspace.add_child(title);
    let mut root = Element::new("service", &app);
    root.add_child(workspace);

    let service = Service::document_to_service(&Document::new(root)).unwrap();
    let ws = service.find_workspace("Aliased").unwrap();
    assert_eq!(ws.title_type(), Some("xhtml"));

    // Output always uses the canonical prefixes
    let out = service.service_to_document();
    assert_eq!(out.root().namespace(), &ATOM_PROTOCOL);
    assert_eq!(out.root().namespace().prefix(), "app");
    let title = out.root().child_elements().next().unwrap().child("title", &ATOM_FORMAT).unwrap();
    assert_eq!(title.namespace().prefix(), "atom");
}

#[test]
fn test_custom_codec_is_pluggable() {
    struct CannedCodec(Document);

    impl XmlCodec for CannedCodec {
        fn parse(&self, _content: &str) -> Result<Document, XmlError> {
            Ok(self.0.clone())
        }

        fn render(&self, document: &Document) -> Result<String, XmlError> {
            Ok(format!("{} workspaces", document.root().child_elements().count()))
        }
    }

    let canned = CannedCodec(sample_service().service_to_document());
    let service = Service::from_xml_str("ignored", &canned).unwrap();

    // The "TEXT" title type is not written, so it reads back as None
    let mut expected = sample_service();
    expected.workspaces_mut()[1].collections_mut()[0].set_title_type(None);
    assert_eq!(service, expected);
    assert_eq!(service.to_xml_string(&canned).unwrap(), "2 workspaces");
}
