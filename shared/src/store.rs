use std::collections::HashSet;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::{
    fixtures,
    models::{Article, Category, GlossaryTerm},
};

/// Reasons a content store refuses to build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Two articles share an id.
    #[error("duplicate article id {0}")]
    DuplicateArticleId(u32),
    /// Two articles share a slug.
    #[error("duplicate article slug `{0}`")]
    DuplicateArticleSlug(String),
    /// Two categories share a slug.
    #[error("duplicate category slug `{0}`")]
    DuplicateCategorySlug(String),
}

static GLOBAL: Lazy<ContentStore> = Lazy::new(|| {
    match ContentStore::from_parts(
        fixtures::articles(),
        fixtures::categories(),
        fixtures::glossary_terms(),
    ) {
        Ok(store) => {
            tracing::debug!(
                articles = store.articles.len(),
                categories = store.categories.len(),
                glossary = store.glossary.len(),
                "content store loaded"
            );
            store
        },
        Err(err) => {
            tracing::error!("content fixture rejected: {err}");
            ContentStore::default()
        },
    }
});

/// Read-only table of everything the site renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStore {
    articles: Vec<Article>,
    categories: Vec<Category>,
    glossary: Vec<GlossaryTerm>,
}

impl ContentStore {
    /// Process-wide store built from the compiled-in fixture.
    pub fn global() -> &'static ContentStore {
        &GLOBAL
    }

    /// Build a store, rejecting duplicate keys.
    pub fn from_parts(
        articles: Vec<Article>,
        categories: Vec<Category>,
        glossary: Vec<GlossaryTerm>,
    ) -> Result<Self, StoreError> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for article in &articles {
            if !ids.insert(article.id) {
                return Err(StoreError::DuplicateArticleId(article.id));
            }
            if !slugs.insert(article.slug.as_str()) {
                return Err(StoreError::DuplicateArticleSlug(article.slug.clone()));
            }
        }

        let mut category_slugs = HashSet::new();
        for category in &categories {
            if !category_slugs.insert(category.slug.as_str()) {
                return Err(StoreError::DuplicateCategorySlug(category.slug.clone()));
            }
        }

        Ok(Self {
            articles,
            categories,
            glossary,
        })
    }

    /// Every article in collection order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Every category in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Every glossary term in display order.
    pub fn glossary(&self) -> &[GlossaryTerm] {
        &self.glossary
    }

    /// Exact slug lookup. Unknown slugs yield `None`.
    pub fn article_by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.slug == slug)
    }

    /// Category lookup by slug, case-insensitive.
    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.slug.eq_ignore_ascii_case(slug.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_store_is_valid() {
        let store = ContentStore::from_parts(
            fixtures::articles(),
            fixtures::categories(),
            fixtures::glossary_terms(),
        )
        .expect("fixture must validate");
        assert_eq!(store.articles().len(), 15);
        assert_eq!(store.categories().len(), 4);
        assert_eq!(ContentStore::global(), &store);
    }

    #[test]
    fn every_article_category_has_a_category_page() {
        let store = ContentStore::global();
        for article in store.articles() {
            assert!(
                store.category_by_slug(&article.category_slug()).is_some(),
                "{} has unknown category {}",
                article.slug,
                article.category
            );
            assert!(article.published_on().is_some(), "{} has a bad date", article.slug);
            assert!(article.reading_time > 0);
        }
    }

    #[test]
    fn slug_lookup_is_exact() {
        let store = ContentStore::global();
        let found = store
            .article_by_slug("megaways-slots-mechanics-explained")
            .expect("known slug");
        assert_eq!(found.id, 3);
        assert!(store.article_by_slug("megaways").is_none());
        assert!(store.article_by_slug("MEGAWAYS-SLOTS-MECHANICS-EXPLAINED").is_none());
        assert!(store.article_by_slug("").is_none());
    }

    #[test]
    fn category_lookup_ignores_case() {
        let store = ContentStore::global();
        assert_eq!(store.category_by_slug("Pokies").map(|c| c.id), Some(1));
        assert!(store.category_by_slug("guides").is_none());
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut articles = fixtures::articles();
        let mut clone = articles[0].clone();
        clone.id = 99;
        articles.push(clone);
        let err = ContentStore::from_parts(articles, vec![], vec![]).unwrap_err();
        assert_eq!(
            err,
            StoreError::DuplicateArticleSlug("understanding-rtp-in-pokies-complete-guide".into())
        );

        let mut articles = fixtures::articles();
        articles[1].id = articles[0].id;
        let err = ContentStore::from_parts(articles, vec![], vec![]).unwrap_err();
        assert_eq!(err, StoreError::DuplicateArticleId(1));

        let mut categories = fixtures::categories();
        categories.push(categories[0].clone());
        let err = ContentStore::from_parts(vec![], categories, vec![]).unwrap_err();
        assert_eq!(err, StoreError::DuplicateCategorySlug("pokies".into()));
    }
}
