use anyhow::Result;
use ee9_shared::{render_metadata, ContentStore, Page, SiteConfig};

/// The metadata descriptor for `path` as pretty JSON.
pub fn render(store: &ContentStore, config: &SiteConfig, path: &str) -> Result<String> {
    let page = Page::from_path(path);
    if page == Page::NotFound && path.trim().trim_end_matches('/') != "/404" {
        tracing::warn!("`{path}` does not resolve to a page, rendering not-found metadata");
    }
    let descriptor = render_metadata(&page, store, config);
    Ok(serde_json::to_string_pretty(&descriptor)?)
}
