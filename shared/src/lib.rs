//! Content, queries and page metadata for the EE9 site.
//!
//! Everything here is pure and compiles for both the wasm frontend and the
//! native CLI. Content is compiled in and exposed through
//! [`store::ContentStore::global`].

/// Bankroll, bonus turnover and RTP calculators.
pub mod calculators;
pub mod config;
/// Contact form subjects and field validation.
pub mod contact;
pub mod fixtures;
/// Glossary sections, search and A-Z grouping.
pub mod glossary;
/// Curated reading lists for the guides hub.
pub mod guides;
/// Articles, categories, glossary terms and tag slugs.
pub mod models;
pub mod query;
/// Related articles and previous/next navigation.
pub mod related;
/// Site pages and their paths.
pub mod routes;
pub mod seo;
/// The in-memory content collection.
pub mod store;

pub use config::SiteConfig;
pub use models::{Article, Category, GlossaryTerm, TagSlug};
pub use query::{ArticleQuery, SortMode};
pub use routes::Page;
pub use seo::{render_metadata, MetadataDescriptor};
pub use store::ContentStore;
