use std::{fs, path::Path};

use anyhow::{Context, Result};
use ee9_shared::{routes::sitemap_pages, ContentStore, Page, SiteConfig};

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn change_frequency(page: &Page) -> (&'static str, &'static str) {
    match page {
        Page::Home => ("daily", "1.0"),
        Page::Category {
            ..
        } => ("weekly", "0.9"),
        Page::Post {
            ..
        } => ("weekly", "0.8"),
        Page::Tag {
            ..
        } => ("weekly", "0.6"),
        Page::Guides | Page::Glossary | Page::Tools => ("monthly", "0.7"),
        _ => ("yearly", "0.3"),
    }
}

/// XML sitemap with one `<url>` per indexable page. Posts carry their
/// publish date as `<lastmod>`.
pub fn render(store: &ContentStore, config: &SiteConfig) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
"#,
    );

    for page in sitemap_pages(store) {
        let loc = config.absolute_url(&page.path());
        let lastmod = match &page {
            Page::Post {
                slug,
            } => store
                .article_by_slug(slug)
                .map(|article| format!("    <lastmod>{}</lastmod>\n", xml_escape(&article.publish_date))),
            _ => None,
        };
        let (changefreq, priority) = change_frequency(&page);
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n{}    <changefreq>{changefreq}</changefreq>\n    \
             <priority>{priority}</priority>\n  </url>\n",
            xml_escape(&loc),
            lastmod.unwrap_or_default(),
        ));
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Write the sitemap to `path`, returning the number of URLs.
pub fn write(store: &ContentStore, config: &SiteConfig, path: &Path) -> Result<usize> {
    let xml = render(store, config);
    fs::write(path, &xml).with_context(|| format!("failed to write sitemap to {}", path.display()))?;
    Ok(xml.matches("<url>").count())
}

/// robots.txt allowing everything and pointing crawlers at the sitemap.
pub fn robots_txt(config: &SiteConfig) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {}\n", config.absolute_url("/sitemap.xml"))
}
