use std::fmt::Write;

use anyhow::{Context, Result};
use ee9_shared::{
    related::{self, RelatedContent},
    Article, ContentStore, Page, SiteConfig,
};
use serde::Serialize;

use crate::cli::OutputFormat;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PostView<'a> {
    url: String,
    article: &'a Article,
    related: Vec<&'a str>,
    previous: Option<&'a str>,
    next: Option<&'a str>,
}

/// One article plus its related reads and neighbours.
///
/// Fails when no article has `slug`.
pub fn render(
    store: &ContentStore,
    config: &SiteConfig,
    slug: &str,
    format: OutputFormat,
) -> Result<String> {
    let article = store
        .article_by_slug(slug)
        .with_context(|| format!("no article with slug `{slug}`"))?;
    let content = related::resolve(store.articles(), article);
    let url = config.absolute_url(
        &Page::Post {
            slug: article.slug.clone(),
        }
        .path(),
    );

    match format {
        OutputFormat::Json => {
            let view = PostView {
                url,
                article,
                related: content.related.iter().map(|item| item.slug.as_str()).collect(),
                previous: content.adjacent.previous.map(|item| item.slug.as_str()),
                next: content.adjacent.next.map(|item| item.slug.as_str()),
            };
            Ok(serde_json::to_string_pretty(&view)?)
        },
        OutputFormat::Table => describe(article, &content, &url),
    }
}

fn describe(article: &Article, content: &RelatedContent<'_>, url: &str) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", article.title)?;
    writeln!(out, "{url}")?;
    writeln!(
        out,
        "{} | {} | {} min read | {} views | by {}",
        article.category, article.publish_date, article.reading_time, article.views, article.author
    )?;
    writeln!(out, "Tags: {}", article.tags.join(", "))?;
    writeln!(out)?;
    writeln!(out, "{}", article.excerpt)?;
    writeln!(out)?;

    writeln!(out, "Related:")?;
    if content.related.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for item in &content.related {
        writeln!(out, "  {}  {}", item.slug, item.title)?;
    }

    let neighbour = |item: Option<&Article>| {
        item.map_or_else(|| "(none)".to_string(), |item| format!("{}  {}", item.slug, item.title))
    };
    writeln!(out, "Previous: {}", neighbour(content.adjacent.previous))?;
    writeln!(out, "Next: {}", neighbour(content.adjacent.next))?;
    Ok(out)
}
