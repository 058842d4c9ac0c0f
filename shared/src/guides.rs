/// A titled link inside a guide section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideLink {
    /// Link text.
    pub title: &'static str,
    /// Site path the link points to.
    pub path: &'static str,
}

/// One card on the guides hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideSection {
    /// Card heading.
    pub title: &'static str,
    /// Short blurb under the heading.
    pub description: &'static str,
    /// Remix icon class.
    pub icon: &'static str,
    /// Curated reading list.
    pub links: &'static [GuideLink],
}

const fn link(title: &'static str, path: &'static str) -> GuideLink {
    GuideLink {
        title,
        path,
    }
}

/// Guides hub sections in display order.
pub const GUIDE_SECTIONS: &[GuideSection] = &[
    GuideSection {
        title: "Beginner Guides",
        description: "Start your gaming journey with essential knowledge and foundational \
                      strategies.",
        icon: "ri-book-open-line",
        links: &[
            link("Getting Started with Pokies", "/post/understanding-rtp-in-pokies-complete-guide"),
            link("Sports Betting Basics", "/post/understanding-sports-betting-odds-formats"),
            link("Slot Game Fundamentals", "/post/high-volatility-vs-low-volatility-slots"),
            link("Live Casino Introduction", "/post/live-dealer-etiquette-dos-and-donts"),
        ],
    },
    GuideSection {
        title: "Strategy Guides",
        description: "Advanced techniques and proven strategies to improve your gameplay.",
        icon: "ri-lightbulb-line",
        links: &[
            link("Bankroll Management", "/post/sports-betting-bankroll-management-strategies"),
            link("Value Betting Strategies", "/post/value-betting-finding-profitable-opportunities"),
            link("Blackjack Basic Strategy", "/post/live-blackjack-basic-strategy-chart"),
            link("Parlay Betting Guide", "/post/parlay-betting-guide-accumulator-strategies"),
        ],
    },
    GuideSection {
        title: "Responsible Gaming",
        description: "Learn to play safely and maintain healthy gaming habits.",
        icon: "ri-shield-check-line",
        links: &[
            link("Setting Limits", "/post/responsible-gambling-setting-limits-staying-control"),
            link("Session Management", "/post/pokies-session-management-when-to-stop"),
            link(
                "Australian Regulations",
                "/post/australian-pokies-regulations-what-players-should-know",
            ),
            link("Problem Gambling Signs", "/responsible-gambling"),
        ],
    },
    GuideSection {
        title: "Game Mechanics",
        description: "Understand how different games work and their unique features.",
        icon: "ri-settings-3-line",
        links: &[
            link("Megaways Explained", "/post/megaways-slots-mechanics-explained"),
            link("Progressive Jackpots", "/post/progressive-jackpot-slots-how-they-work"),
            link("Cascading Reels", "/post/cascading-reels-slots-tumbling-mechanics"),
            link("Hold and Win Feature", "/post/hold-and-win-slots-respins-feature"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{routes::Page, store::ContentStore};

    #[test]
    fn every_guide_link_resolves() {
        let store = ContentStore::global();
        for section in GUIDE_SECTIONS {
            assert_eq!(section.links.len(), 4, "{}", section.title);
            for link in section.links {
                match Page::from_path(link.path) {
                    Page::Post {
                        slug,
                    } => assert!(store.article_by_slug(&slug).is_some(), "{}", link.path),
                    Page::NotFound => panic!("dead guide link {}", link.path),
                    _ => {},
                }
            }
        }
    }
}
