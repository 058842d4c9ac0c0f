//! Page metadata for search engines and social previews.
//!
//! [`render_metadata`] is pure: it maps a [`Page`] to a
//! [`MetadataDescriptor`]. Writing the descriptor into the document head is
//! left to the frontend.

use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    config::SiteConfig,
    glossary::SEARCH_PARAM,
    models::{Article, Category, TagSlug},
    query::{distinct_tags, filter_by_category, filter_by_tag},
    routes::Page,
    store::ContentStore,
};

const TITLE_MAX_CHARS: usize = 88;
const DESCRIPTION_MAX_CHARS: usize = 180;
const ROBOTS_INDEX: &str = "index,follow,max-image-preview:large";
const ROBOTS_NOINDEX: &str = "noindex,nofollow,noarchive";

/// A question/answer pair rendered on a page and in its FAQPage schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    /// Question text.
    pub question: &'static str,
    /// Answer text.
    pub answer: &'static str,
}

/// FAQ block shown at the end of every article.
pub const ARTICLE_FAQS: &[Faq] = &[
    Faq {
        question: "How much should I budget for gaming?",
        answer: "Only use money you can afford to lose - typically no more than 5% of your \
                 monthly entertainment budget. Never use money needed for bills, savings, or \
                 essential expenses.",
    },
    Faq {
        question: "What's the best strategy for beginners?",
        answer: "Start with games that have simple rules and low minimum bets. Focus on learning \
                 the mechanics and managing your bankroll before attempting more complex \
                 strategies or higher stakes.",
    },
    Faq {
        question: "How do I know if I'm developing a problem?",
        answer: "Warning signs include spending more than you can afford, chasing losses, \
                 neglecting responsibilities, or gaming to escape problems. If you recognize \
                 these signs, seek help immediately through resources like Gambling Help Online.",
    },
];

/// FAQ block of the responsible gambling page.
pub const RESPONSIBLE_GAMBLING_FAQS: &[Faq] = &[
    Faq {
        question: "What is responsible gambling?",
        answer: "Responsible gambling means enjoying gaming as a form of entertainment while \
                 maintaining control over your time and money. It involves understanding the \
                 risks, setting personal limits, and recognizing when gaming stops being fun.",
    },
    Faq {
        question: "What are the warning signs of problem gambling?",
        answer: "Warning signs include spending more money or time gambling than you can afford, \
                 chasing losses, borrowing money to gamble, neglecting responsibilities, lying \
                 about gambling, feeling guilty or anxious, and being unable to stop despite \
                 wanting to.",
    },
    Faq {
        question: "Where can I get help for problem gambling in Australia?",
        answer: "Gambling Help Online provides free, confidential support 24/7 at 1800 858 858 or \
                 gamblinghelponline.org.au. Other resources include Lifeline (13 11 14), \
                 Gamblers Anonymous, and financial counseling services.",
    },
];

/// Everything a page publishes into the document head.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDescriptor {
    /// `<title>`.
    pub title: String,
    /// `meta[name=description]`.
    pub description: String,
    /// `meta[name=keywords]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// `link[rel=canonical]` and `og:url`.
    pub canonical_url: String,
    /// `og:type`.
    pub og_type: &'static str,
    /// `og:image` / `twitter:image`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    /// `meta[name=robots]`.
    pub robots: &'static str,
    /// The single JSON-LD document active for this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    let mut out: String = value.chars().take(max_chars).collect();
    if value.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}

/// Collapse whitespace and cap the length at `max_chars` characters.
pub fn normalize_meta_text(value: &str, max_chars: usize) -> String {
    truncate_chars(&normalize_whitespace(value), max_chars)
}

struct PageCopy<'a> {
    title: String,
    description: String,
    keywords: Option<String>,
    og_type: &'static str,
    og_image: Option<&'a str>,
    robots: &'static str,
    schema: Option<Value>,
}

impl PageCopy<'_> {
    fn indexed(title: String, description: String, keywords: &str, schema: Value) -> Self {
        Self {
            title,
            description,
            keywords: Some(keywords.to_string()),
            og_type: "website",
            og_image: None,
            robots: ROBOTS_INDEX,
            schema: Some(schema),
        }
    }

    fn into_descriptor(self, canonical_url: String, config: &SiteConfig) -> MetadataDescriptor {
        MetadataDescriptor {
            title: normalize_meta_text(&self.title, TITLE_MAX_CHARS),
            description: normalize_meta_text(&self.description, DESCRIPTION_MAX_CHARS),
            keywords: self.keywords.map(|value| normalize_whitespace(&value)),
            canonical_url,
            og_type: self.og_type,
            og_image: Some(
                self.og_image
                    .map(|image| config.absolute_url(image))
                    .unwrap_or_else(|| config.default_og_image.clone()),
            ),
            robots: self.robots,
            schema: self.schema,
        }
    }
}

/// `page` with its slug in the form the site links to: the stored category
/// slug, or the slugified tag.
fn canonical_page(page: &Page, store: &ContentStore) -> Page {
    match page {
        Page::Category {
            slug,
        } => Page::Category {
            slug: store
                .category_by_slug(slug)
                .map_or_else(|| slug.clone(), |category| category.slug.clone()),
        },
        Page::Tag {
            slug,
        } => Page::Tag {
            slug: TagSlug::from_url(slug).as_str().to_string(),
        },
        other => other.clone(),
    }
}

/// Metadata for `page`. Unknown post, category or tag slugs produce the
/// not-found descriptor.
pub fn render_metadata(
    page: &Page,
    store: &ContentStore,
    config: &SiteConfig,
) -> MetadataDescriptor {
    let canonical_url = config.absolute_url(&canonical_page(page, store).path());
    let copy = match page {
        Page::Home => PageCopy::indexed(
            format!("{} - Australian Gaming Insights & Strategies Blog", config.site_name),
            "Expert insights on pokies, sports betting, slots, and live games in Australia. Learn \
             strategies, understand RTP, volatility, and responsible gambling practices."
                .to_string(),
            "pokies Australia, sports betting, slots strategies, live casino, RTP, responsible \
             gambling",
            website_schema(config),
        ),
        Page::Category {
            slug,
        } => match store.category_by_slug(slug) {
            Some(category) => category_copy(category, store, config),
            None => not_found_copy(config),
        },
        Page::Tag {
            slug,
        } => {
            let tagged = filter_by_tag(store.articles(), slug);
            if tagged.is_empty() {
                not_found_copy(config)
            } else {
                tag_copy(&TagSlug::from_url(slug), tagged.len(), &canonical_url, config)
            }
        },
        Page::Post {
            slug,
        } => match store.article_by_slug(slug) {
            Some(article) => article_copy(article, config),
            None => not_found_copy(config),
        },
        Page::Guides => PageCopy::indexed(
            format!("Gaming Guides Hub - Expert Strategies & Tips | {}", config.site_name),
            "Comprehensive gaming guides covering beginner basics to advanced strategies. Learn \
             bankroll management, game mechanics, and responsible gaming practices for \
             Australian players."
                .to_string(),
            "gaming guides, betting strategies, pokies tips, casino strategies, responsible \
             gambling, Australian gaming",
            json!({
                "@context": "https://schema.org",
                "@type": "CollectionPage",
                "name": "Gaming Guides Hub",
                "description": "Comprehensive guides covering everything from beginner basics to advanced strategies",
                "url": canonical_url,
            }),
        ),
        Page::Glossary => PageCopy::indexed(
            format!("Gaming Glossary - Complete Dictionary of Gaming Terms | {}", config.site_name),
            "Comprehensive dictionary of gaming terms, strategies, and concepts. Master the \
             language of pokies, sports betting, slots, and live casino games in Australia."
                .to_string(),
            "gaming glossary, casino terms, betting terminology, RTP, volatility, gaming \
             dictionary",
            glossary_schema(store, &canonical_url),
        ),
        Page::Tools => PageCopy::indexed(
            format!(
                "Gaming Tools & Calculators - Bankroll, Bonus & RTP Calculator | {}",
                config.site_name
            ),
            "Free gaming calculators including bankroll planner, bonus turnover calculator, and \
             RTP calculator. Manage your gaming budget and understand wagering requirements \
             effectively."
                .to_string(),
            "bankroll calculator, bonus calculator, RTP calculator, wagering requirements, gaming \
             tools, budget planner, return to player",
            json!({
                "@context": "https://schema.org",
                "@type": "WebApplication",
                "name": "Gaming Tools & Calculators",
                "description": "Free calculators and tools to help manage bankroll and understand bonus requirements",
                "url": canonical_url,
                "applicationCategory": "UtilitiesApplication",
                "offers": {
                    "@type": "Offer",
                    "price": "0",
                    "priceCurrency": "AUD",
                },
            }),
        ),
        Page::About => PageCopy::indexed(
            format!("About {} - Australian Gaming Information Platform", config.site_name),
            format!(
                "Learn about {}, your trusted source for gaming insights, strategies, and \
                 responsible gambling information in Australia. Independent, accurate, and \
                 transparent.",
                config.site_name
            ),
            "about EE9, gaming information, Australian gaming, responsible gambling, gaming \
             education",
            json!({
                "@context": "https://schema.org",
                "@type": "AboutPage",
                "name": format!("About {}", config.site_name),
                "url": canonical_url,
                "mainEntity": organization(config),
            }),
        ),
        Page::Contact => PageCopy::indexed(
            format!("Contact Us - Get in Touch with {}", config.site_name),
            format!(
                "Have questions, suggestions, or feedback about gaming strategies and \
                 information? Contact the {} team. We typically respond within 24-48 hours.",
                config.site_name
            ),
            "contact EE9, gaming questions, feedback, support",
            json!({
                "@context": "https://schema.org",
                "@type": "ContactPage",
                "name": format!("Contact {}", config.site_name),
                "description": "Contact page for an Australian gaming information platform",
                "url": canonical_url,
            }),
        ),
        Page::ResponsibleGambling => PageCopy::indexed(
            format!("Responsible Gambling - Play Safe & Stay in Control | {}", config.site_name),
            "Learn about responsible gambling practices, warning signs of problem gambling, \
             self-exclusion programs, and support resources available in Australia. Play safe \
             and stay in control."
                .to_string(),
            "responsible gambling, problem gambling, gambling help, self-exclusion, gambling \
             support Australia, 18+",
            json!({
                "@context": "https://schema.org",
                "@graph": [
                    {
                        "@type": "WebPage",
                        "name": "Responsible Gambling",
                        "description": "Comprehensive guide to responsible gambling practices and support resources in Australia",
                        "url": canonical_url,
                    },
                    faq_schema(RESPONSIBLE_GAMBLING_FAQS),
                ],
            }),
        ),
        Page::EditorialPolicy => PageCopy::indexed(
            format!("Editorial Policy - Content Standards & Guidelines | {}", config.site_name),
            "Learn about our editorial standards, fact-checking processes, independence policy, \
             and commitment to accuracy and responsible content creation."
                .to_string(),
            "editorial policy, content standards, fact-checking, editorial independence, accuracy",
            web_page_schema(
                "Editorial Policy",
                "Our commitment to accuracy, independence, and responsible content creation",
                &canonical_url,
            ),
        ),
        Page::PrivacyPolicy => PageCopy::indexed(
            format!("Privacy Policy - How We Protect Your Information | {}", config.site_name),
            "Read our privacy policy to understand how we collect, use, and protect your personal \
             information. Learn about cookies, data security, and your privacy rights."
                .to_string(),
            "privacy policy, data protection, cookies, personal information, privacy rights",
            web_page_schema(
                "Privacy Policy",
                "How we collect, use, and protect your personal information",
                &canonical_url,
            ),
        ),
        Page::NotFound => not_found_copy(config),
    };

    let canonical_url = if copy.robots == ROBOTS_NOINDEX {
        config.absolute_url(&Page::NotFound.path())
    } else {
        canonical_url
    };
    copy.into_descriptor(canonical_url, config)
}

fn not_found_copy(config: &SiteConfig) -> PageCopy<'static> {
    PageCopy {
        title: format!("Page Not Found | {}", config.site_name),
        description: "The page you are looking for does not exist or has been moved.".to_string(),
        keywords: None,
        og_type: "website",
        og_image: None,
        robots: ROBOTS_NOINDEX,
        schema: None,
    }
}

fn category_copy<'a>(
    category: &'a Category,
    store: &ContentStore,
    config: &SiteConfig,
) -> PageCopy<'a> {
    let category_path = Page::Category {
        slug: category.slug.clone(),
    }
    .path();
    let url = config.absolute_url(&category_path);
    let in_category = filter_by_category(store.articles(), &category.slug);
    let top_tags = distinct_tags(in_category.iter().copied())
        .into_iter()
        .take(5)
        .collect::<Vec<_>>();

    let mut keywords = vec![category.name.as_str()];
    keywords.extend(top_tags);
    keywords.push("Australian gaming");

    let collection = json!({
        "@type": "CollectionPage",
        "name": format!("{} Articles", category.name),
        "description": category.long_description,
        "url": url,
        "numberOfItems": in_category.len(),
    });
    let breadcrumbs = breadcrumb_schema(
        config,
        &[
            ("Home", "/".to_string()),
            ("Categories", "/".to_string()),
            (category.name.as_str(), category_path),
        ],
    );

    PageCopy::indexed(
        format!("{} - Gaming Guides & Strategies | {}", category.name, config.site_name),
        category.long_description.clone(),
        &keywords.join(", "),
        json!({
            "@context": "https://schema.org",
            "@graph": [collection, breadcrumbs],
        }),
    )
}

fn tag_copy(
    tag: &TagSlug,
    article_count: usize,
    canonical_url: &str,
    config: &SiteConfig,
) -> PageCopy<'static> {
    let name = tag.display_name();
    PageCopy::indexed(
        format!("{} - Gaming Articles & Guides | {}", name, config.site_name),
        format!(
            "Explore {} {} about {}. Expert insights, strategies, and guides for Australian gaming \
             enthusiasts.",
            article_count,
            if article_count == 1 { "article" } else { "articles" },
            name
        ),
        &format!("{}, gaming guides, casino strategies, Australian gaming", name),
        json!({
            "@context": "https://schema.org",
            "@type": "CollectionPage",
            "name": format!("{} Articles", name),
            "description": format!("Collection of articles tagged with {}", name),
            "url": canonical_url,
        }),
    )
}

fn article_copy<'a>(article: &'a Article, config: &SiteConfig) -> PageCopy<'a> {
    let post_path = Page::Post {
        slug: article.slug.clone(),
    }
    .path();
    let category_path = Page::Category {
        slug: article.category_slug(),
    }
    .path();

    let graph = json!({
        "@context": "https://schema.org",
        "@graph": [
            article_schema(article, config),
            breadcrumb_schema(
                config,
                &[
                    ("Home", "/".to_string()),
                    (article.category.as_str(), category_path),
                    (article.title.as_str(), post_path),
                ],
            ),
            faq_schema(ARTICLE_FAQS),
        ],
    });

    let mut keywords = article.tags.clone();
    keywords.push(article.category.clone());
    keywords.push("Australian gaming".to_string());

    PageCopy {
        title: format!("{} | {}", article.title, config.site_name),
        description: article.excerpt.clone(),
        keywords: Some(keywords.join(", ")),
        og_type: "article",
        og_image: Some(article.image_url.as_str()),
        robots: ROBOTS_INDEX,
        schema: Some(graph),
    }
}

fn organization(config: &SiteConfig) -> Value {
    json!({
        "@type": "Organization",
        "name": config.site_name,
        "url": config.site_url,
        "logo": {
            "@type": "ImageObject",
            "url": config.logo_url(),
        },
    })
}

fn web_page_schema(name: &str, description: &str, url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebPage",
        "name": name,
        "description": description,
        "url": url,
    })
}

/// schema.org `WebSite` with a search action.
pub fn website_schema(config: &SiteConfig) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": config.site_name,
        "url": config.site_url,
        "description": "Expert insights on pokies, sports betting, slots, and live games in Australia.",
        "publisher": organization(config),
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!(
                "{}?{SEARCH_PARAM}={{search_term_string}}",
                config.absolute_url(&Page::Glossary.path())
            ),
            "query-input": "required name=search_term_string",
        },
    })
}

/// schema.org `Article` for a post.
pub fn article_schema(article: &Article, config: &SiteConfig) -> Value {
    let url = config.absolute_url(
        &Page::Post {
            slug: article.slug.clone(),
        }
        .path(),
    );
    json!({
        "@type": "Article",
        "headline": normalize_meta_text(&article.title, 110),
        "description": normalize_meta_text(&article.excerpt, DESCRIPTION_MAX_CHARS),
        "image": config.absolute_url(&article.image_url),
        "author": {
            "@type": "Person",
            "name": article.author,
        },
        "publisher": organization(config),
        "datePublished": article.publish_date,
        "dateModified": article.publish_date,
        "articleSection": article.category,
        "keywords": article.tags.join(", "),
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": url,
        },
    })
}

/// schema.org `BreadcrumbList` from `(name, site path)` pairs.
pub fn breadcrumb_schema(config: &SiteConfig, items: &[(&str, String)]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, (name, path))| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": name,
                "item": config.absolute_url(path),
            })
        })
        .collect();
    json!({
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

/// schema.org `FAQPage`.
pub fn faq_schema(faqs: &[Faq]) -> Value {
    let questions: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer,
                },
            })
        })
        .collect();
    json!({
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

fn glossary_schema(store: &ContentStore, url: &str) -> Value {
    let terms: Vec<Value> = store
        .glossary()
        .iter()
        .map(|term| {
            json!({
                "@type": "DefinedTerm",
                "name": term.term,
                "description": term.definition,
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "DefinedTermSet",
        "name": "Gaming Glossary",
        "description": "Comprehensive dictionary of gaming terms for Australian players",
        "url": url,
        "hasDefinedTerm": terms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(page: Page) -> MetadataDescriptor {
        render_metadata(&page, ContentStore::global(), &SiteConfig::default())
    }

    fn graph_types(descriptor: &MetadataDescriptor) -> Vec<String> {
        descriptor
            .schema
            .as_ref()
            .and_then(|schema| schema["@graph"].as_array())
            .map(|nodes| {
                nodes
                    .iter()
                    .filter_map(|node| node["@type"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn post_metadata_carries_article_breadcrumbs_and_faq() {
        let meta = render(Page::Post {
            slug: "understanding-rtp-in-pokies-complete-guide".into(),
        });
        assert_eq!(meta.og_type, "article");
        assert_eq!(meta.robots, ROBOTS_INDEX);
        assert_eq!(
            meta.canonical_url,
            "https://ee9.com/post/understanding-rtp-in-pokies-complete-guide"
        );
        assert!(meta.title.ends_with("| EE9.com"));
        assert_eq!(graph_types(&meta), vec!["Article", "BreadcrumbList", "FAQPage"]);
        assert_eq!(
            meta.keywords.as_deref(),
            Some("RTP, Beginner, Strategy, Pokies, Australian gaming")
        );
        let schema = meta.schema.expect("schema");
        let crumbs = &schema["@graph"][1]["itemListElement"];
        assert_eq!(crumbs[1]["item"], "https://ee9.com/category/pokies");
        assert_eq!(crumbs[2]["position"], 3);
    }

    #[test]
    fn unknown_slugs_render_not_found() {
        for page in [
            Page::Post {
                slug: "missing".into(),
            },
            Page::Category {
                slug: "casino".into(),
            },
            Page::Tag {
                slug: "keno".into(),
            },
            Page::NotFound,
        ] {
            let meta = render(page);
            assert_eq!(meta.robots, ROBOTS_NOINDEX);
            assert!(meta.schema.is_none());
            assert!(meta.title.starts_with("Page Not Found"));
            assert_eq!(meta.canonical_url, "https://ee9.com/404");
        }
    }

    #[test]
    fn category_keywords_use_first_five_tags() {
        let meta = render(Page::Category {
            slug: "slots".into(),
        });
        assert_eq!(graph_types(&meta), vec!["CollectionPage", "BreadcrumbList"]);
        assert_eq!(
            meta.keywords.as_deref(),
            Some("Slots, Megaways, Volatility, Free Spins, RTP, Beginner, Australian gaming")
        );
        assert!(meta.description.ends_with("..."));
        assert!(meta.description.chars().count() <= DESCRIPTION_MAX_CHARS + 3);
    }

    #[test]
    fn tag_description_counts_articles() {
        let meta = render(Page::Tag {
            slug: "free-spins".into(),
        });
        assert_eq!(meta.title, "Free Spins - Gaming Articles & Guides | EE9.com");
        assert!(meta.description.starts_with("Explore 3 articles about Free Spins."));
        let schema = meta.schema.expect("schema");
        assert_eq!(schema["@type"], "CollectionPage");
    }

    #[test]
    fn site_search_action_round_trips_into_glossary_search() {
        let meta = render(Page::Home);
        let schema = meta.schema.expect("schema");
        let target = schema["potentialAction"]["target"]
            .as_str()
            .expect("target string");
        assert_eq!(target, "https://ee9.com/glossary?q={search_term_string}");

        let filled = target.replace("{search_term_string}", "wagering+requirement");
        let (path, query) = filled.split_once('?').expect("query string");
        assert_eq!(Page::from_path(path.trim_start_matches("https://ee9.com")), Page::Glossary);
        assert_eq!(
            crate::glossary::search_param(query).as_deref(),
            Some("wagering requirement")
        );
    }

    #[test]
    fn canonical_urls_use_normalized_slugs() {
        let category = render(Page::Category {
            slug: "POKIES".into(),
        });
        assert_eq!(category.robots, ROBOTS_INDEX);
        assert_eq!(category.canonical_url, "https://ee9.com/category/pokies");

        let tag = render(Page::Tag {
            slug: "Free-Spins".into(),
        });
        assert_eq!(tag.robots, ROBOTS_INDEX);
        assert_eq!(tag.canonical_url, "https://ee9.com/tag/free-spins");
        let schema = tag.schema.expect("schema");
        assert_eq!(schema["url"], "https://ee9.com/tag/free-spins");
    }

    #[test]
    fn static_pages_have_their_schema_type() {
        let cases = [
            (Page::Home, "WebSite"),
            (Page::Tools, "WebApplication"),
            (Page::Glossary, "DefinedTermSet"),
            (Page::Contact, "ContactPage"),
            (Page::About, "AboutPage"),
            (Page::Guides, "CollectionPage"),
            (Page::EditorialPolicy, "WebPage"),
            (Page::PrivacyPolicy, "WebPage"),
        ];
        for (page, expected) in cases {
            let meta = render(page.clone());
            let schema = meta.schema.expect("schema");
            assert_eq!(schema["@type"], expected, "{page:?}");
            assert_eq!(meta.robots, ROBOTS_INDEX);
            assert!(meta.keywords.is_some());
        }
        let responsible = render(Page::ResponsibleGambling);
        assert_eq!(graph_types(&responsible), vec!["WebPage", "FAQPage"]);
    }

    #[test]
    fn rendering_is_deterministic() {
        let page = Page::Category {
            slug: "live".into(),
        };
        assert_eq!(render(page.clone()), render(page));
    }

    #[test]
    fn site_url_override_flows_into_urls() {
        let config = SiteConfig::with_site_url("https://staging.ee9.com");
        let meta = render_metadata(&Page::Tools, ContentStore::global(), &config);
        assert_eq!(meta.canonical_url, "https://staging.ee9.com/tools");
        assert_eq!(meta.schema.expect("schema")["url"], "https://staging.ee9.com/tools");
    }

    #[test]
    fn meta_text_is_normalised_and_truncated() {
        assert_eq!(normalize_meta_text("  a \n b\t c ", 10), "a b c");
        assert_eq!(normalize_meta_text("abcdef", 3), "abc...");
        assert_eq!(normalize_meta_text("", 3), "");
    }
}
