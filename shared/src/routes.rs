use serde::{Deserialize, Serialize};

use crate::{models::slugify_tag, query::distinct_tags, store::ContentStore};

/// Every page the site can display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum Page {
    /// `/`
    Home,
    /// `/category/{slug}`
    Category {
        /// Category slug.
        slug: String,
    },
    /// `/tag/{slug}`
    Tag {
        /// Tag slug.
        slug: String,
    },
    /// `/post/{slug}`
    Post {
        /// Article slug.
        slug: String,
    },
    /// `/guides`
    Guides,
    /// `/glossary`
    Glossary,
    /// `/tools`
    Tools,
    /// `/about`
    About,
    /// `/contact`
    Contact,
    /// `/responsible-gambling`
    ResponsibleGambling,
    /// `/editorial-policy`
    EditorialPolicy,
    /// `/privacy-policy`
    PrivacyPolicy,
    /// Anything else.
    NotFound,
}

const STATIC_PAGES: &[(&str, Page)] = &[
    ("/", Page::Home),
    ("/guides", Page::Guides),
    ("/glossary", Page::Glossary),
    ("/tools", Page::Tools),
    ("/about", Page::About),
    ("/contact", Page::Contact),
    ("/responsible-gambling", Page::ResponsibleGambling),
    ("/editorial-policy", Page::EditorialPolicy),
    ("/privacy-policy", Page::PrivacyPolicy),
    ("/404", Page::NotFound),
];

impl Page {
    /// Site-relative path with the slug percent-encoded.
    pub fn path(&self) -> String {
        match self {
            Page::Category {
                slug,
            } => format!("/category/{}", urlencoding::encode(slug)),
            Page::Tag {
                slug,
            } => format!("/tag/{}", urlencoding::encode(slug)),
            Page::Post {
                slug,
            } => format!("/post/{}", urlencoding::encode(slug)),
            other => STATIC_PAGES
                .iter()
                .find(|(_, page)| page == other)
                .map(|(path, _)| path.to_string())
                .unwrap_or_else(|| "/404".to_string()),
        }
    }

    /// Parse a site-relative path. Unknown paths map to [`Page::NotFound`].
    pub fn from_path(path: &str) -> Page {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };

        if let Some((_, page)) = STATIC_PAGES.iter().find(|(known, _)| *known == trimmed) {
            return page.clone();
        }

        let mut segments = trimmed.trim_start_matches('/').splitn(2, '/');
        let (Some(kind), Some(raw_slug)) = (segments.next(), segments.next()) else {
            return Page::NotFound;
        };
        if raw_slug.is_empty() || raw_slug.contains('/') {
            return Page::NotFound;
        }
        let slug = match urlencoding::decode(raw_slug) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => return Page::NotFound,
        };

        match kind {
            "category" => Page::Category {
                slug,
            },
            "tag" => Page::Tag {
                slug,
            },
            "post" => Page::Post {
                slug,
            },
            _ => Page::NotFound,
        }
    }

    /// Whether search engines should index the page.
    pub fn is_indexable(&self) -> bool {
        !matches!(self, Page::NotFound)
    }
}

/// Every indexable page backed by real content: static pages, categories,
/// tags and posts.
pub fn sitemap_pages(store: &ContentStore) -> Vec<Page> {
    let mut pages: Vec<Page> = STATIC_PAGES
        .iter()
        .map(|(_, page)| page.clone())
        .filter(Page::is_indexable)
        .collect();

    pages.extend(store.categories().iter().map(|category| Page::Category {
        slug: category.slug.clone(),
    }));

    let mut tag_slugs: Vec<String> = Vec::new();
    for tag in distinct_tags(store.articles()) {
        let slug = slugify_tag(tag);
        if !tag_slugs.contains(&slug) {
            tag_slugs.push(slug);
        }
    }
    pages.extend(tag_slugs.into_iter().map(|slug| Page::Tag {
        slug,
    }));

    pages.extend(store.articles().iter().map(|article| Page::Post {
        slug: article.slug.clone(),
    }));
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_cover_the_navigation_surface() {
        assert_eq!(Page::Home.path(), "/");
        assert_eq!(Page::Tools.path(), "/tools");
        assert_eq!(Page::ResponsibleGambling.path(), "/responsible-gambling");
        assert_eq!(
            Page::Tag {
                slug: "free-spins".into()
            }
            .path(),
            "/tag/free-spins"
        );
        assert_eq!(
            Page::Post {
                slug: "a b".into()
            }
            .path(),
            "/post/a%20b"
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        for path in ["/casino", "/post", "/post/", "/post/a/b", "/category//x", "/tags/rtp"] {
            assert_eq!(Page::from_path(path), Page::NotFound, "{path}");
        }
    }

    #[test]
    fn query_and_trailing_slash_are_ignored() {
        assert_eq!(Page::from_path("/tools/"), Page::Tools);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(
            Page::from_path("/category/pokies?sort=popular"),
            Page::Category {
                slug: "pokies".into()
            }
        );
    }

    #[test]
    fn sitemap_pages_round_trip_through_paths() {
        let pages = sitemap_pages(ContentStore::global());
        assert!(pages.iter().all(Page::is_indexable));
        for page in &pages {
            assert_eq!(&Page::from_path(&page.path()), page);
        }
        let posts = pages
            .iter()
            .filter(|page| matches!(page, Page::Post { .. }))
            .count();
        assert_eq!(posts, ContentStore::global().articles().len());
        assert!(pages.contains(&Page::Tag {
            slug: "free-spins".into()
        }));
    }
}
