use std::collections::BTreeMap;

use crate::{models::GlossaryTerm, query::filter_by_search_term};

/// Glossary sections in first-seen order.
pub fn glossary_categories(terms: &[GlossaryTerm]) -> Vec<&str> {
    let mut categories = Vec::<&str>::new();
    for term in terms {
        if !categories.contains(&term.category.as_str()) {
            categories.push(term.category.as_str());
        }
    }
    categories
}

/// Search filter combined with an optional exact section match.
pub fn filter_glossary<'a>(
    terms: &'a [GlossaryTerm],
    query: &str,
    category: Option<&str>,
) -> Vec<&'a GlossaryTerm> {
    filter_by_search_term(terms, query)
        .into_iter()
        .filter(|term| category.map_or(true, |wanted| term.category == wanted))
        .collect()
}

/// Query string key the glossary search box is seeded from.
pub const SEARCH_PARAM: &str = "q";

/// Decoded value of [`SEARCH_PARAM`] in a URL query string such as
/// `?q=house+edge`. Blank or malformed values yield `None`.
pub fn search_param(query_str: &str) -> Option<String> {
    let raw = query_str
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| match pair.split_once('=') {
            Some((key, value)) if key == SEARCH_PARAM => Some(value),
            _ => None,
        })?;
    let plus_decoded = raw.replace('+', " ");
    let decoded = urlencoding::decode(&plus_decoded).ok()?;
    let trimmed = decoded.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// A-Z index keyed by the uppercased first character of each term.
pub fn group_by_letter<'a>(
    terms: impl IntoIterator<Item = &'a GlossaryTerm>,
) -> BTreeMap<char, Vec<&'a GlossaryTerm>> {
    let mut groups: BTreeMap<char, Vec<&GlossaryTerm>> = BTreeMap::new();
    for term in terms {
        let Some(first) = term.term.trim().chars().next() else {
            continue;
        };
        let letter = first.to_uppercase().next().unwrap_or(first);
        groups.entry(letter).or_default().push(term);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ContentStore;

    #[test]
    fn categories_are_unique_and_ordered() {
        let terms = ContentStore::global().glossary();
        assert_eq!(
            glossary_categories(terms),
            vec![
                "Pokies & Slots",
                "Casino Games",
                "Sports Betting",
                "Money Management",
                "Responsible Gambling"
            ]
        );
    }

    #[test]
    fn search_and_category_combine() {
        let terms = ContentStore::global().glossary();
        let odds_in_sports = filter_glossary(terms, "odds", Some("Sports Betting"));
        assert!(!odds_in_sports.is_empty());
        assert!(odds_in_sports.iter().all(|t| t.category == "Sports Betting"));

        assert!(filter_glossary(terms, "odds", Some("Casino Games")).is_empty());
        assert_eq!(filter_glossary(terms, "", None).len(), terms.len());
    }

    #[test]
    fn search_param_reads_encoded_terms() {
        assert_eq!(search_param("?q=house+edge").as_deref(), Some("house edge"));
        assert_eq!(search_param("q=Value%20Bet").as_deref(), Some("Value Bet"));
        assert_eq!(search_param("?lang=en&q=rtp&page=2").as_deref(), Some("rtp"));
        assert_eq!(search_param("?q=%2B1%20odds").as_deref(), Some("+1 odds"));
        assert_eq!(search_param(""), None);
        assert_eq!(search_param("?q=++"), None);
        assert_eq!(search_param("?query=rtp"), None);
        assert_eq!(search_param("?q=%FF"), None);

        let terms = ContentStore::global().glossary();
        let seeded = search_param("?q=house+edge").unwrap_or_default();
        assert!(filter_glossary(terms, &seeded, None)
            .iter()
            .any(|t| t.term == "House Edge"));
    }

    #[test]
    fn letters_group_terms() {
        let terms = ContentStore::global().glossary();
        let groups = group_by_letter(terms);
        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, terms.len());
        assert!(groups
            .get(&'R')
            .is_some_and(|group| group.iter().any(|t| t.term == "RTP")));
        let letters: Vec<char> = groups.keys().copied().collect();
        let mut sorted = letters.clone();
        sorted.sort_unstable();
        assert_eq!(letters, sorted);
    }

    #[test]
    fn blank_terms_are_skipped() {
        let mut terms = ContentStore::global().glossary()[..1].to_vec();
        terms[0].term = "  ".into();
        assert!(group_by_letter(&terms).is_empty());
    }
}
