//! Subcommand implementations.

/// Filtered and sorted article listings.
pub mod articles;
/// Calculator runs.
pub mod calc;
/// Category summaries.
pub mod categories;
/// Glossary search.
pub mod glossary;
/// Page metadata dumps.
pub mod meta;
/// Single article view.
pub mod post;
/// Sitemap and robots.txt output.
pub mod sitemap;
mod table;

use anyhow::Result;
use ee9_shared::{ArticleQuery, ContentStore, SiteConfig};

use crate::cli::{Cli, Commands};

/// Dispatch a parsed command line and print its output to stdout.
pub fn run(cli: Cli) -> Result<()> {
    let config = SiteConfig::with_site_url(&cli.site_url);
    let store = ContentStore::global();
    tracing::debug!(site_url = %config.site_url, articles = store.articles().len(), "content loaded");

    let output = match cli.command {
        Commands::Articles {
            category,
            tag,
            sort,
            limit,
            format,
        } => {
            let mut query = ArticleQuery::new().sort(sort);
            query.category = category;
            query.tag = tag;
            query.limit = limit;
            articles::render(store, &query, format)?
        },
        Commands::Post {
            slug,
            format,
        } => post::render(store, &config, &slug, format)?,
        Commands::Categories {
            format,
        } => categories::render(store, format)?,
        Commands::Glossary {
            search,
            category,
            format,
        } => glossary::render(store, &search, category.as_deref(), format)?,
        Commands::Calc {
            calculator,
        } => calc::render(&calculator)?,
        Commands::Meta {
            path,
        } => meta::render(store, &config, &path)?,
        Commands::Sitemap {
            output: Some(path),
        } => {
            let urls = sitemap::write(store, &config, &path)?;
            tracing::info!("sitemap with {urls} urls written to {}", path.display());
            return Ok(());
        },
        Commands::Sitemap {
            output: None,
        } => sitemap::render(store, &config),
        Commands::Robots => sitemap::robots_txt(&config),
    };

    println!("{}", output.trim_end());
    Ok(())
}
