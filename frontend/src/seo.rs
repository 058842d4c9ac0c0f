use ee9_shared::{config::SITE_NAME, MetadataDescriptor};
use web_sys::{window, Document, Element};

const JSON_LD_SELECTOR: &str = "script[type=\"application/ld+json\"]";

/// Which attribute identifies a `<meta>` tag.
#[derive(Clone, Copy)]
enum MetaKey {
    /// `<meta name=..>`, used by search engines and Twitter cards.
    Name,
    /// `<meta property=..>`, used by Open Graph.
    Property,
}

impl MetaKey {
    fn attribute(self) -> &'static str {
        match self {
            MetaKey::Name => "name",
            MetaKey::Property => "property",
        }
    }

    fn selector(self, key: &str) -> String {
        format!("meta[{}=\"{}\"]", self.attribute(), key)
    }
}

fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Existing head element matching `selector`, or a fresh `tag_name` child of
/// `<head>`.
fn find_or_create(doc: &Document, selector: &str, tag_name: &str) -> Option<Element> {
    if let Some(found) = doc.query_selector(selector).ok().flatten() {
        return Some(found);
    }
    let head = doc.head()?;
    let created = doc.create_element(tag_name).ok()?;
    head.append_child(&created).ok()?;
    Some(created)
}

fn remove_all(doc: &Document, selector: &str) {
    let Ok(nodes) = doc.query_selector_all(selector) else {
        return;
    };
    // query_selector_all returns a static list, so removal does not shift it.
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        if let Some(parent) = node.parent_node() {
            let _ = parent.remove_child(&node);
        }
    }
}

fn set_meta(doc: &Document, kind: MetaKey, key: &str, content: Option<&str>) {
    let selector = kind.selector(key);
    let Some(content) = content else {
        remove_all(doc, &selector);
        return;
    };
    if let Some(element) = find_or_create(doc, &selector, "meta") {
        let _ = element.set_attribute(kind.attribute(), key);
        let _ = element.set_attribute("content", content);
    }
}

fn set_canonical(doc: &Document, url: &str) {
    if let Some(element) = find_or_create(doc, "link[rel=\"canonical\"]", "link") {
        let _ = element.set_attribute("rel", "canonical");
        let _ = element.set_attribute("href", url);
    }
}

/// Replace every JSON-LD script with at most one for the current page.
fn set_json_ld(doc: &Document, payload: Option<&serde_json::Value>) {
    remove_all(doc, JSON_LD_SELECTOR);
    let Some(payload) = payload else {
        return;
    };
    let serialized = match serde_json::to_string(payload) {
        Ok(serialized) => serialized,
        Err(err) => {
            web_sys::console::error_1(&format!("json-ld not serialisable: {err}").into());
            return;
        },
    };
    if let Some(element) = find_or_create(doc, JSON_LD_SELECTOR, "script") {
        let _ = element.set_attribute("type", "application/ld+json");
        element.set_text_content(Some(&serialized));
    }
}

/// Write `metadata` into the document head: title, canonical link, meta tags
/// and the JSON-LD script. Tags the descriptor leaves empty are removed.
pub fn apply_metadata(metadata: &MetadataDescriptor) {
    let Some(doc) = document() else {
        web_sys::console::error_1(&"document unavailable, metadata not applied".into());
        return;
    };
    doc.set_title(&metadata.title);
    set_canonical(&doc, &metadata.canonical_url);

    let image = metadata.og_image.as_deref();
    let tags: [(MetaKey, &str, Option<&str>); 14] = [
        (MetaKey::Name, "description", Some(metadata.description.as_str())),
        (MetaKey::Name, "robots", Some(metadata.robots)),
        (MetaKey::Name, "keywords", metadata.keywords.as_deref()),
        (MetaKey::Name, "twitter:card", Some("summary_large_image")),
        (MetaKey::Name, "twitter:title", Some(metadata.title.as_str())),
        (MetaKey::Name, "twitter:description", Some(metadata.description.as_str())),
        (MetaKey::Name, "twitter:image", image),
        (MetaKey::Property, "og:type", Some(metadata.og_type)),
        (MetaKey::Property, "og:title", Some(metadata.title.as_str())),
        (MetaKey::Property, "og:description", Some(metadata.description.as_str())),
        (MetaKey::Property, "og:url", Some(metadata.canonical_url.as_str())),
        (MetaKey::Property, "og:site_name", Some(SITE_NAME)),
        (MetaKey::Property, "og:locale", Some("en_AU")),
        (MetaKey::Property, "og:image", image),
    ];
    for (kind, key, content) in tags {
        set_meta(&doc, kind, key, content);
    }

    set_json_ld(&doc, metadata.schema.as_ref());
}
