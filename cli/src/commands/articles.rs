use anyhow::Result;
use ee9_shared::{query::tag_slug_collisions, ArticleQuery, ContentStore};

use super::table::{render_table, truncate};
use crate::cli::OutputFormat;

/// Run `query` against the store and format the matches.
pub fn render(store: &ContentStore, query: &ArticleQuery, format: OutputFormat) -> Result<String> {
    for (slug, tags) in tag_slug_collisions(store.articles()) {
        tracing::warn!("tag slug `{slug}` merges display tags {tags:?}");
    }

    let articles = query.apply(store.articles());
    tracing::debug!(?query, matched = articles.len(), "article query");

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&articles)?),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = articles
                .iter()
                .map(|article| {
                    vec![
                        article.slug.clone(),
                        article.category.clone(),
                        article.publish_date.clone(),
                        article.views.to_string(),
                        truncate(&article.title, 60),
                    ]
                })
                .collect();
            Ok(render_table(&["SLUG", "CATEGORY", "DATE", "VIEWS", "TITLE"], &rows))
        },
    }
}
