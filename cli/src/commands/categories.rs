use anyhow::Result;
use ee9_shared::{query::filter_by_category, ContentStore};
use serde::Serialize;

use super::table::render_table;
use crate::cli::OutputFormat;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategorySummary<'a> {
    slug: &'a str,
    name: &'a str,
    description: &'a str,
    article_count: usize,
}

/// Every category with the number of articles filed under it.
pub fn render(store: &ContentStore, format: OutputFormat) -> Result<String> {
    let summaries: Vec<CategorySummary<'_>> = store
        .categories()
        .iter()
        .map(|category| CategorySummary {
            slug: &category.slug,
            name: &category.name,
            description: &category.description,
            article_count: filter_by_category(store.articles(), &category.slug).len(),
        })
        .collect();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = summaries
                .iter()
                .map(|summary| {
                    vec![
                        summary.slug.to_string(),
                        summary.name.to_string(),
                        summary.article_count.to_string(),
                        summary.description.to_string(),
                    ]
                })
                .collect();
            Ok(render_table(&["SLUG", "NAME", "ARTICLES", "DESCRIPTION"], &rows))
        },
    }
}
