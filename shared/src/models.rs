use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by every `publish_date` in the content store.
pub const PUBLISH_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single publishable article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Stable unique identifier, never reused.
    pub id: u32,
    /// Unique URL key used by `/post/{slug}`.
    pub slug: String,
    /// Headline.
    pub title: String,
    /// Teaser shown on cards and used as the meta description.
    pub excerpt: String,
    /// Display name of the author.
    pub author: String,
    /// Hero image URL.
    pub image_url: String,
    /// Display name of the owning category (e.g. `Pokies`).
    pub category: String,
    /// Display tags in authoring order.
    pub tags: Vec<String>,
    /// `YYYY-MM-DD`.
    pub publish_date: String,
    /// Static popularity counter.
    pub views: u64,
    /// Estimated reading time in minutes.
    pub reading_time: u32,
    /// Eligible for the home page highlight row.
    pub featured: bool,
}

impl Article {
    /// Parsed publish date, `None` when the stored string is malformed.
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.publish_date.trim(), PUBLISH_DATE_FORMAT).ok()
    }

    /// Slug of the category page this article belongs to.
    pub fn category_slug(&self) -> String {
        self.category.to_ascii_lowercase()
    }

    /// Slugs of every tag, in authoring order.
    pub fn tag_slugs(&self) -> impl Iterator<Item = TagSlug> + '_ {
        self.tags.iter().map(|tag| TagSlug::from_display(tag))
    }

    /// Author initials for avatar badges (`Michael Chen` -> `MC`).
    pub fn author_initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Top-level content taxonomy entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Stable identifier.
    pub id: u32,
    /// Lowercase key, matches [`Article::category`] case-insensitively.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Short card blurb.
    pub description: String,
    /// Longer copy for the category page and its meta description.
    pub long_description: String,
    /// Remix icon class.
    pub icon: String,
}

/// A glossary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryTerm {
    /// Stable identifier.
    pub id: u32,
    /// Display key, e.g. `RTP`.
    pub term: String,
    /// Expanded form of abbreviations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Glossary section.
    pub category: String,
    /// Plain-text definition.
    pub definition: String,
    /// Free-text cross references; not guaranteed to resolve.
    #[serde(default)]
    pub related_terms: Vec<String>,
}

/// URL form of a display tag.
///
/// Lowercased, surrounding whitespace trimmed and every whitespace run
/// replaced by a single hyphen, so `"Free Spins"` becomes `free-spins`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSlug(String);

impl TagSlug {
    /// Slugify a display tag.
    pub fn from_display(tag: &str) -> Self {
        Self(slugify_tag(tag))
    }

    /// Wrap a slug taken from a URL. Only case is normalised.
    pub fn from_url(slug: &str) -> Self {
        Self(slug.trim().to_lowercase())
    }

    /// Borrow the slug text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Heading text derived from the slug (`free-spins` -> `Free Spins`).
    pub fn display_name(&self) -> String {
        tag_display_name(&self.0)
    }
}

impl fmt::Display for TagSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TagSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lowercase a display tag and join its words with hyphens.
pub fn slugify_tag(tag: &str) -> String {
    tag.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Turn a tag slug back into a title-cased heading.
pub fn tag_display_name(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify_tag("Free Spins"), "free-spins");
        assert_eq!(slugify_tag("  Hold  and\tWin "), "hold-and-win");
        assert_eq!(slugify_tag("RTP"), "rtp");
        assert_eq!(slugify_tag(""), "");
    }

    #[test]
    fn display_name_capitalises_words() {
        assert_eq!(tag_display_name("free-spins"), "Free Spins");
        assert_eq!(TagSlug::from_url("AFL").display_name(), "Afl");
        assert_eq!(tag_display_name("--"), "");
    }

    #[test]
    fn url_slug_only_normalises_case() {
        assert_eq!(TagSlug::from_url(" Free-Spins ").as_str(), "free-spins");
        assert_eq!(TagSlug::from_url("free spins").as_str(), "free spins");
    }

    #[test]
    fn initials_take_first_letter_of_each_word() {
        let article = Article {
            id: 1,
            slug: "a".into(),
            title: "A".into(),
            excerpt: String::new(),
            author: "Michael  Chen".into(),
            image_url: String::new(),
            category: "Pokies".into(),
            tags: vec![],
            publish_date: "2024-02-30".into(),
            views: 0,
            reading_time: 1,
            featured: false,
        };
        assert_eq!(article.author_initials(), "MC");
        assert_eq!(article.published_on(), None);
        assert_eq!(article.category_slug(), "pokies");
    }
}
