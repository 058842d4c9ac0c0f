//! Filtering and ordering over the article collection.
//!
//! Every function borrows its input and returns references into it, so a
//! result is always a subset of what was passed in. Calling the same query
//! twice on the same slice yields the same sequence.

use std::{cmp::Reverse, collections::HashMap, fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{slugify_tag, Article, GlossaryTerm, TagSlug};

/// Listing order for category and tag pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Newest publish date first.
    #[default]
    Latest,
    /// Most viewed first.
    Popular,
}

impl SortMode {
    /// Query-string form.
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Latest => "latest",
            SortMode::Popular => "popular",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned for sort names other than `latest` and `popular`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort mode `{0}`, expected `latest` or `popular`")]
pub struct ParseSortModeError(pub String);

impl FromStr for SortMode {
    type Err = ParseSortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latest" => Ok(SortMode::Latest),
            "popular" => Ok(SortMode::Popular),
            other => Err(ParseSortModeError(other.to_string())),
        }
    }
}

/// Articles whose category matches `category_slug`, ignoring ASCII case.
pub fn filter_by_category<'a>(articles: &'a [Article], category_slug: &str) -> Vec<&'a Article> {
    filter_refs_by_category(articles.iter(), category_slug)
}

fn filter_refs_by_category<'a>(
    articles: impl IntoIterator<Item = &'a Article>,
    category_slug: &str,
) -> Vec<&'a Article> {
    let wanted = category_slug.trim();
    articles
        .into_iter()
        .filter(|article| article.category.eq_ignore_ascii_case(wanted))
        .collect()
}

/// Articles carrying a tag whose slug equals `tag_slug`.
pub fn filter_by_tag<'a>(articles: &'a [Article], tag_slug: &str) -> Vec<&'a Article> {
    filter_refs_by_tag(articles.iter(), tag_slug)
}

fn filter_refs_by_tag<'a>(
    articles: impl IntoIterator<Item = &'a Article>,
    tag_slug: &str,
) -> Vec<&'a Article> {
    let wanted = TagSlug::from_url(tag_slug);
    articles
        .into_iter()
        .filter(|article| article.tag_slugs().any(|slug| slug == wanted))
        .collect()
}

/// Glossary terms whose term or definition contains `query`, ignoring case.
/// A blank query keeps everything.
pub fn filter_by_search_term<'a>(terms: &'a [GlossaryTerm], query: &str) -> Vec<&'a GlossaryTerm> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return terms.iter().collect();
    }
    terms
        .iter()
        .filter(|term| {
            term.term.to_lowercase().contains(&needle)
                || term.definition.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Stable sort by `mode`; ties keep their input order.
pub fn sort_articles<'a>(
    articles: impl IntoIterator<Item = &'a Article>,
    mode: SortMode,
) -> Vec<&'a Article> {
    let mut sorted: Vec<&Article> = articles.into_iter().collect();
    match mode {
        // Malformed dates sort as the oldest possible date.
        SortMode::Latest => sorted
            .sort_by_key(|article| Reverse(article.published_on().unwrap_or(NaiveDate::MIN))),
        SortMode::Popular => sorted.sort_by_key(|article| Reverse(article.views)),
    }
    sorted
}

/// Unique display tags in first-seen order.
pub fn distinct_tags<'a>(articles: impl IntoIterator<Item = &'a Article>) -> Vec<&'a str> {
    let mut seen = Vec::<&str>::new();
    for article in articles {
        for tag in &article.tags {
            if !seen.contains(&tag.as_str()) {
                seen.push(tag.as_str());
            }
        }
    }
    seen
}

/// Tag slugs that more than one distinct display tag normalises to.
///
/// Queries by such a slug merge the articles of every colliding tag.
pub fn tag_slug_collisions(articles: &[Article]) -> Vec<(String, Vec<&str>)> {
    let mut by_slug: Vec<(String, Vec<&str>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for tag in distinct_tags(articles) {
        let slug = slugify_tag(tag);
        match index.get(&slug) {
            Some(&position) => by_slug[position].1.push(tag),
            None => {
                index.insert(slug.clone(), by_slug.len());
                by_slug.push((slug, vec![tag]));
            },
        }
    }
    by_slug.retain(|(_, tags)| tags.len() > 1);
    by_slug
}

/// Featured articles in collection order, at most `limit`.
pub fn featured(articles: &[Article], limit: usize) -> Vec<&Article> {
    articles
        .iter()
        .filter(|article| article.featured)
        .take(limit)
        .collect()
}

/// The first `limit` articles of the collection.
pub fn latest(articles: &[Article], limit: usize) -> Vec<&Article> {
    articles.iter().take(limit).collect()
}

/// The `limit` most viewed articles.
pub fn popular(articles: &[Article], limit: usize) -> Vec<&Article> {
    let mut sorted = sort_articles(articles, SortMode::Popular);
    sorted.truncate(limit);
    sorted
}

/// Composable listing query: category, then tag, then sort, then limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleQuery {
    /// Category slug filter.
    #[serde(default)]
    pub category: Option<String>,
    /// Tag slug filter.
    #[serde(default)]
    pub tag: Option<String>,
    /// Ordering; `None` keeps collection order.
    #[serde(default)]
    pub sort: Option<SortMode>,
    /// Maximum number of results.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl ArticleQuery {
    /// Empty query that returns the whole collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category slug.
    pub fn category(mut self, slug: impl Into<String>) -> Self {
        self.category = Some(slug.into());
        self
    }

    /// Restrict to a tag slug.
    pub fn tag(mut self, slug: impl Into<String>) -> Self {
        self.tag = Some(slug.into());
        self
    }

    /// Order results.
    pub fn sort(mut self, mode: SortMode) -> Self {
        self.sort = Some(mode);
        self
    }

    /// Cap the number of results.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Run the query.
    pub fn apply<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        let mut selected: Vec<&Article> = articles.iter().collect();
        if let Some(category) = non_blank(self.category.as_deref()) {
            selected = filter_refs_by_category(selected, category);
        }
        if let Some(tag) = non_blank(self.tag.as_deref()) {
            selected = filter_refs_by_tag(selected, tag);
        }
        if let Some(mode) = self.sort {
            selected = sort_articles(selected, mode);
        }
        if let Some(limit) = self.limit {
            selected.truncate(limit);
        }
        selected
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ContentStore;

    fn article(id: u32, category: &str, tags: &[&str], date: &str, views: u64) -> Article {
        Article {
            id,
            slug: format!("post-{id}"),
            title: format!("Post {id}"),
            excerpt: String::new(),
            author: "Tester".into(),
            image_url: String::new(),
            category: category.into(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            publish_date: date.into(),
            views,
            reading_time: 5,
            featured: id % 2 == 0,
        }
    }

    fn ids(articles: &[&Article]) -> Vec<u32> {
        articles.iter().map(|article| article.id).collect()
    }

    fn sample() -> Vec<Article> {
        vec![
            article(1, "Pokies", &["Free Spins", "RTP"], "2024-01-10", 100),
            article(2, "Sports", &["Odds"], "2024-03-01", 300),
            article(3, "pokies", &["free spins"], "2024-03-01", 100),
            article(4, "Slots", &[], "not-a-date", 300),
            article(5, "Pokies", &["Bankroll"], "2024-02-15", 50),
        ]
    }

    #[test]
    fn category_filter_ignores_case_and_keeps_order() {
        let articles = sample();
        let result = filter_by_category(&articles, "POKIES");
        assert_eq!(ids(&result), vec![1, 3, 5]);
        assert!(result.iter().all(|a| a.category.eq_ignore_ascii_case("pokies")));
        assert!(filter_by_category(&articles, "casino").is_empty());
    }

    #[test]
    fn category_filter_is_idempotent() {
        let articles = sample();
        let once: Vec<Article> = filter_by_category(&articles, "pokies")
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_by_category(&once, "pokies");
        assert_eq!(ids(&twice), once.iter().map(|a| a.id).collect::<Vec<_>>());
    }

    #[test]
    fn tag_filter_matches_slugified_tags() {
        let articles = sample();
        assert_eq!(ids(&filter_by_tag(&articles, "free-spins")), vec![1, 3]);
        assert_eq!(ids(&filter_by_tag(&articles, "Free-Spins")), vec![1, 3]);
        assert!(filter_by_tag(&articles, "free spins").is_empty());
        assert!(filter_by_tag(&articles, "jackpots").is_empty());
    }

    #[test]
    fn tag_filter_on_fixture_returns_exactly_free_spins_articles() {
        let store = ContentStore::global();
        let result = filter_by_tag(store.articles(), "free-spins");
        let expected: Vec<u32> = store
            .articles()
            .iter()
            .filter(|a| a.tags.iter().any(|t| t == "Free Spins"))
            .map(|a| a.id)
            .collect();
        assert_eq!(ids(&result), expected);
        assert!(!expected.is_empty());
    }

    #[test]
    fn latest_sort_is_non_increasing_and_stable() {
        let articles = sample();
        let sorted = sort_articles(&articles, SortMode::Latest);
        // 2 and 3 share a date and keep input order; the bad date goes last.
        assert_eq!(ids(&sorted), vec![2, 3, 5, 1, 4]);
        let dates: Vec<_> = sorted
            .iter()
            .map(|a| a.published_on().unwrap_or(NaiveDate::MIN))
            .collect();
        assert!(dates.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn popular_sort_is_non_increasing_and_stable() {
        let articles = sample();
        let sorted = sort_articles(&articles, SortMode::Popular);
        assert_eq!(ids(&sorted), vec![2, 4, 1, 3, 5]);
        assert!(sorted.windows(2).all(|pair| pair[0].views >= pair[1].views));
    }

    #[test]
    fn sorting_does_not_touch_input_and_is_repeatable() {
        let articles = sample();
        let before = articles.clone();
        let first = ids(&sort_articles(&articles, SortMode::Popular));
        let second = ids(&sort_articles(&articles, SortMode::Popular));
        assert_eq!(first, second);
        assert_eq!(articles, before);
    }

    #[test]
    fn distinct_tags_keep_first_seen_order() {
        let articles = sample();
        assert_eq!(
            distinct_tags(&articles),
            vec!["Free Spins", "RTP", "Odds", "free spins", "Bankroll"]
        );
    }

    #[test]
    fn colliding_display_tags_are_reported() {
        let articles = sample();
        let collisions = tag_slug_collisions(&articles);
        assert_eq!(
            collisions,
            vec![("free-spins".to_string(), vec!["Free Spins", "free spins"])]
        );
        assert!(tag_slug_collisions(ContentStore::global().articles()).is_empty());
    }

    #[test]
    fn search_term_matches_term_or_definition() {
        let terms = ContentStore::global().glossary();
        let all = filter_by_search_term(terms, "   ");
        assert_eq!(all.len(), terms.len());

        let rtp = filter_by_search_term(terms, "rtp");
        assert!(rtp.iter().any(|t| t.term == "RTP"));
        assert!(rtp.iter().any(|t| t.term == "House Edge"));
        assert!(rtp
            .iter()
            .all(|t| t.term.to_lowercase().contains("rtp")
                || t.definition.to_lowercase().contains("rtp")));

        assert!(filter_by_search_term(terms, "zzz-no-match").is_empty());
    }

    #[test]
    fn sort_mode_parses_names() {
        assert_eq!("latest".parse::<SortMode>(), Ok(SortMode::Latest));
        assert_eq!(" Popular ".parse::<SortMode>(), Ok(SortMode::Popular));
        assert!("views".parse::<SortMode>().is_err());
        assert_eq!(SortMode::Popular.to_string(), "popular");
    }

    #[test]
    fn home_rows_respect_limits() {
        let articles = sample();
        assert_eq!(ids(&featured(&articles, 1)), vec![2]);
        assert_eq!(ids(&latest(&articles, 2)), vec![1, 2]);
        assert_eq!(ids(&popular(&articles, 3)), vec![2, 4, 1]);
        assert_eq!(latest(&articles, 10).len(), 5);
    }

    #[test]
    fn article_query_matches_category_page_pipeline() {
        let store = ContentStore::global();
        for category in store.categories() {
            let in_category = filter_by_category(store.articles(), &category.slug);
            for tag in distinct_tags(in_category.iter().copied()) {
                let tag_slug = slugify_tag(tag);
                for mode in [SortMode::Latest, SortMode::Popular] {
                    let by_hand = sort_articles(
                        in_category
                            .iter()
                            .copied()
                            .filter(|a| a.tag_slugs().any(|s| s.as_str() == tag_slug)),
                        mode,
                    );
                    let query = ArticleQuery::new()
                        .category(category.slug.as_str())
                        .tag(tag_slug.as_str())
                        .sort(mode);
                    assert_eq!(ids(&query.apply(store.articles())), ids(&by_hand));
                }
            }
        }

        let slots_free_spins = ArticleQuery::new()
            .category("SLOTS")
            .tag("free-spins")
            .sort(SortMode::Popular)
            .apply(store.articles());
        assert!(!slots_free_spins.is_empty());
        assert!(slots_free_spins.iter().all(|a| {
            a.category.eq_ignore_ascii_case("slots") && a.tags.iter().any(|t| t == "Free Spins")
        }));
    }

    #[test]
    fn article_query_composes_filters_in_order() {
        let articles = sample();
        let query = ArticleQuery::new()
            .category("pokies")
            .tag("free-spins")
            .sort(SortMode::Latest)
            .limit(5);
        assert_eq!(ids(&query.apply(&articles)), vec![3, 1]);

        let popular_pokies = ArticleQuery::new().category("Pokies").sort(SortMode::Popular);
        assert_eq!(ids(&popular_pokies.apply(&articles)), vec![1, 3, 5]);

        let blank = ArticleQuery {
            category: Some("  ".into()),
            ..ArticleQuery::default()
        };
        assert_eq!(blank.apply(&articles).len(), articles.len());
    }
}
