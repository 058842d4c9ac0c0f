use serde::Serialize;

use crate::models::Article;

/// Number of related articles shown under a post.
pub const RELATED_LIMIT: usize = 3;

/// Neighbours of an article in collection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Adjacent<'a> {
    /// The article just before the anchor, if any.
    pub previous: Option<&'a Article>,
    /// The article just after the anchor, if any.
    pub next: Option<&'a Article>,
}

/// Everything a post page links to besides itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedContent<'a> {
    /// Articles sharing the anchor's category or a tag.
    pub related: Vec<&'a Article>,
    /// Previous/next navigation.
    pub adjacent: Adjacent<'a>,
}

/// Up to `limit` articles sharing the anchor's category or any of its tags,
/// in collection order. The anchor itself is never included.
pub fn related_articles<'a>(
    articles: &'a [Article],
    anchor: &Article,
    limit: usize,
) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|candidate| candidate.id != anchor.id)
        .filter(|candidate| {
            candidate.category == anchor.category
                || candidate.tags.iter().any(|tag| anchor.tags.contains(tag))
        })
        .take(limit)
        .collect()
}

/// Previous and next article by position. Both are `None` when the anchor
/// is not part of `articles`.
pub fn adjacent_articles<'a>(articles: &'a [Article], anchor: &Article) -> Adjacent<'a> {
    let Some(index) = articles.iter().position(|article| article.id == anchor.id) else {
        return Adjacent {
            previous: None,
            next: None,
        };
    };

    Adjacent {
        previous: index.checked_sub(1).and_then(|prev| articles.get(prev)),
        next: articles.get(index + 1),
    }
}

/// Related articles plus previous/next navigation for `anchor`.
pub fn resolve<'a>(articles: &'a [Article], anchor: &Article) -> RelatedContent<'a> {
    RelatedContent {
        related: related_articles(articles, anchor, RELATED_LIMIT),
        adjacent: adjacent_articles(articles, anchor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ContentStore;

    #[test]
    fn anchor_is_never_related_to_itself() {
        let articles = ContentStore::global().articles();
        for anchor in articles {
            let related = related_articles(articles, anchor, RELATED_LIMIT);
            assert!(related.len() <= RELATED_LIMIT);
            assert!(related.iter().all(|article| article.id != anchor.id));
            assert!(related.iter().all(|article| {
                article.category == anchor.category
                    || article.tags.iter().any(|tag| anchor.tags.contains(tag))
            }));
        }
    }

    #[test]
    fn related_keeps_collection_order() {
        let store = ContentStore::global();
        let anchor = store
            .article_by_slug("megaways-slots-mechanics-explained")
            .expect("fixture article");
        let related: Vec<u32> = related_articles(store.articles(), anchor, RELATED_LIMIT)
            .iter()
            .map(|article| article.id)
            .collect();
        // All Slots, in collection order.
        assert_eq!(related, vec![5, 9, 13]);
    }

    #[test]
    fn related_is_not_padded() {
        let store = ContentStore::global();
        let mut loner = store.articles()[0].clone();
        loner.id = 500;
        loner.category = "Lottery".into();
        loner.tags = vec!["Keno".into()];
        assert!(related_articles(store.articles(), &loner, RELATED_LIMIT).is_empty());
    }

    #[test]
    fn boundaries_have_no_neighbour() {
        let articles = ContentStore::global().articles();
        let first = adjacent_articles(articles, &articles[0]);
        assert!(first.previous.is_none());
        assert_eq!(first.next.map(|a| a.id), Some(articles[1].id));

        let last_index = articles.len() - 1;
        let last = adjacent_articles(articles, &articles[last_index]);
        assert!(last.next.is_none());
        assert_eq!(last.previous.map(|a| a.id), Some(articles[last_index - 1].id));
    }

    #[test]
    fn unknown_anchor_has_no_neighbours() {
        let articles = ContentStore::global().articles();
        let mut stranger = articles[3].clone();
        stranger.id = 999;
        let adjacent = adjacent_articles(articles, &stranger);
        assert!(adjacent.previous.is_none());
        assert!(adjacent.next.is_none());
    }

    #[test]
    fn resolve_combines_both_views() {
        let articles = ContentStore::global().articles();
        let content = resolve(articles, &articles[4]);
        assert_eq!(content.adjacent.previous.map(|a| a.id), Some(4));
        assert_eq!(content.adjacent.next.map(|a| a.id), Some(6));
        assert_eq!(content.related.len(), RELATED_LIMIT);
    }
}
