//! Compiled-in site content.
//!
//! Article order here is the canonical collection order: it drives the
//! home page "latest" row and previous/next navigation on post pages.

use crate::models::{Article, Category, GlossaryTerm};

const IMAGE_BASE: &str = "https://static.ee9.com/images";

struct ArticleSeed {
    id: u32,
    slug: &'static str,
    title: &'static str,
    excerpt: &'static str,
    author: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
    publish_date: &'static str,
    views: u64,
    reading_time: u32,
    featured: bool,
}

const ARTICLES: &[ArticleSeed] = &[
    ArticleSeed {
        id: 1,
        slug: "understanding-rtp-in-pokies-complete-guide",
        title: "Understanding RTP in Pokies: The Complete Guide",
        excerpt: "What return-to-player really means, how it is measured over millions of \
                  spins and why it matters when you pick a pokie.",
        author: "Michael Chen",
        category: "Pokies",
        tags: &["RTP", "Beginner", "Strategy"],
        publish_date: "2024-03-18",
        views: 15420,
        reading_time: 9,
        featured: true,
    },
    ArticleSeed {
        id: 2,
        slug: "sports-betting-bankroll-management-strategies",
        title: "Sports Betting Bankroll Management Strategies",
        excerpt: "Unit sizing, staking plans and the discipline needed to survive losing \
                  streaks across a full AFL or NRL season.",
        author: "Sarah Mitchell",
        category: "Sports",
        tags: &["Bankroll", "Strategy", "AFL"],
        publish_date: "2024-03-15",
        views: 12870,
        reading_time: 11,
        featured: true,
    },
    ArticleSeed {
        id: 3,
        slug: "megaways-slots-mechanics-explained",
        title: "Megaways Slots: How the Mechanics Work",
        excerpt: "Variable reel heights, up to 117,649 ways to win and what that does to \
                  volatility and bonus frequency.",
        author: "James Walker",
        category: "Slots",
        tags: &["Megaways", "Volatility", "Free Spins"],
        publish_date: "2024-03-12",
        views: 9340,
        reading_time: 8,
        featured: true,
    },
    ArticleSeed {
        id: 4,
        slug: "live-blackjack-basic-strategy-chart",
        title: "Live Blackjack Basic Strategy Chart",
        excerpt: "The mathematically correct play for every hand total against every dealer \
                  up-card, adapted for live dealer tables.",
        author: "Emma Thompson",
        category: "Live",
        tags: &["Blackjack", "Strategy", "Live Dealer"],
        publish_date: "2024-03-10",
        views: 11250,
        reading_time: 10,
        featured: false,
    },
    ArticleSeed {
        id: 5,
        slug: "high-volatility-vs-low-volatility-slots",
        title: "High Volatility vs Low Volatility Slots",
        excerpt: "How variance shapes session length, bankroll swings and the size of the \
                  wins you can expect.",
        author: "James Walker",
        category: "Slots",
        tags: &["Volatility", "RTP", "Beginner"],
        publish_date: "2024-03-08",
        views: 8760,
        reading_time: 7,
        featured: false,
    },
    ArticleSeed {
        id: 6,
        slug: "understanding-sports-betting-odds-formats",
        title: "Understanding Sports Betting Odds Formats",
        excerpt: "Decimal, fractional and American odds side by side, plus how to convert \
                  any price into an implied probability.",
        author: "Sarah Mitchell",
        category: "Sports",
        tags: &["Odds", "Beginner"],
        publish_date: "2024-03-05",
        views: 10110,
        reading_time: 6,
        featured: false,
    },
    ArticleSeed {
        id: 7,
        slug: "pokies-session-management-when-to-stop",
        title: "Pokies Session Management: Knowing When to Stop",
        excerpt: "Win goals, loss limits and time limits that keep a pokies session fun \
                  instead of costly.",
        author: "Michael Chen",
        category: "Pokies",
        tags: &["Bankroll", "Responsible Gambling"],
        publish_date: "2024-03-02",
        views: 7430,
        reading_time: 6,
        featured: false,
    },
    ArticleSeed {
        id: 8,
        slug: "value-betting-finding-profitable-opportunities",
        title: "Value Betting: Finding Profitable Opportunities",
        excerpt: "Spotting prices that underestimate an outcome and the record keeping \
                  needed to prove your edge is real.",
        author: "David Nguyen",
        category: "Sports",
        tags: &["Value Betting", "Odds", "Strategy"],
        publish_date: "2024-02-27",
        views: 6980,
        reading_time: 12,
        featured: false,
    },
    ArticleSeed {
        id: 9,
        slug: "progressive-jackpot-slots-how-they-work",
        title: "Progressive Jackpot Slots: How They Work",
        excerpt: "Local, wide-area and standalone progressives, where the jackpot money \
                  comes from and what it costs in base-game RTP.",
        author: "James Walker",
        category: "Slots",
        tags: &["Jackpots", "RTP"],
        publish_date: "2024-02-24",
        views: 8120,
        reading_time: 8,
        featured: false,
    },
    ArticleSeed {
        id: 10,
        slug: "live-dealer-etiquette-dos-and-donts",
        title: "Live Dealer Etiquette: Dos and Don'ts",
        excerpt: "Chat manners, decision timing and table rules that make live casino \
                  games smoother for everyone.",
        author: "Emma Thompson",
        category: "Live",
        tags: &["Live Dealer", "Beginner"],
        publish_date: "2024-02-20",
        views: 4310,
        reading_time: 5,
        featured: false,
    },
    ArticleSeed {
        id: 11,
        slug: "australian-pokies-regulations-what-players-should-know",
        title: "Australian Pokies Regulations: What Players Should Know",
        excerpt: "State-by-state rules, minimum return requirements and the consumer \
                  protections that apply to Australian venues.",
        author: "Michael Chen",
        category: "Pokies",
        tags: &["Regulation", "Responsible Gambling"],
        publish_date: "2024-02-16",
        views: 5620,
        reading_time: 9,
        featured: false,
    },
    ArticleSeed {
        id: 12,
        slug: "parlay-betting-guide-accumulator-strategies",
        title: "Parlay Betting Guide: Accumulator Strategies",
        excerpt: "Why multis are tempting, how the bookmaker margin compounds with every \
                  leg and when a parlay can still make sense.",
        author: "David Nguyen",
        category: "Sports",
        tags: &["Parlays", "Odds", "NRL"],
        publish_date: "2024-02-12",
        views: 9870,
        reading_time: 10,
        featured: false,
    },
    ArticleSeed {
        id: 13,
        slug: "cascading-reels-slots-tumbling-mechanics",
        title: "Cascading Reels: Tumbling Slot Mechanics",
        excerpt: "How winning symbols vanish and new ones drop in, and how multipliers \
                  stack across a chain of cascades.",
        author: "James Walker",
        category: "Slots",
        tags: &["Cascading Reels", "Free Spins"],
        publish_date: "2024-02-08",
        views: 3890,
        reading_time: 6,
        featured: false,
    },
    ArticleSeed {
        id: 14,
        slug: "responsible-gambling-setting-limits-staying-control",
        title: "Responsible Gambling: Setting Limits and Staying in Control",
        excerpt: "Deposit limits, reality checks, self-exclusion and the Australian \
                  support services available around the clock.",
        author: "Emma Thompson",
        category: "Live",
        tags: &["Responsible Gambling", "Bankroll"],
        publish_date: "2024-02-05",
        views: 6540,
        reading_time: 8,
        featured: true,
    },
    ArticleSeed {
        id: 15,
        slug: "hold-and-win-slots-respins-feature",
        title: "Hold and Win Slots: The Respins Feature",
        excerpt: "Locking symbols, resetting respin counters and why hold-and-win bonuses \
                  are so popular with Australian players.",
        author: "James Walker",
        category: "Slots",
        tags: &["Hold and Win", "Free Spins", "Volatility"],
        publish_date: "2024-02-01",
        views: 7210,
        reading_time: 7,
        featured: false,
    },
];

/// All articles in canonical collection order.
pub fn articles() -> Vec<Article> {
    ARTICLES
        .iter()
        .map(|seed| Article {
            id: seed.id,
            slug: seed.slug.to_string(),
            title: seed.title.to_string(),
            excerpt: seed.excerpt.to_string(),
            author: seed.author.to_string(),
            image_url: format!("{}/{}.jpg", IMAGE_BASE, seed.slug),
            category: seed.category.to_string(),
            tags: seed.tags.iter().map(|tag| tag.to_string()).collect(),
            publish_date: seed.publish_date.to_string(),
            views: seed.views,
            reading_time: seed.reading_time,
            featured: seed.featured,
        })
        .collect()
}

/// The four top-level categories.
pub fn categories() -> Vec<Category> {
    let rows = [
        (
            1,
            "pokies",
            "Pokies",
            "RTP analysis, volatility and bankroll tactics for Australian pokies.",
            "Discover comprehensive guides on pokies including RTP analysis, volatility \
             strategies, bonus features, and bankroll management. Learn how to choose the best \
             pokies, understand payout mechanics, and get more from every session with insights \
             tailored for Australian players.",
            "ri-gamepad-line",
        ),
        (
            2,
            "sports",
            "Sports",
            "Odds, staking and value betting across AFL, NRL and international sport.",
            "Master sports betting with strategies covering AFL, NRL, and international sports. \
             Learn bankroll management, odds analysis, value betting techniques, parlay \
             strategies, and in-play tactics. Understand how to read form and analyse statistics \
             before you place a bet.",
            "ri-football-line",
        ),
        (
            3,
            "slots",
            "Slots",
            "Megaways, jackpots, cascades and every modern slot mechanic explained.",
            "Explore online slots with detailed analysis of Megaways mechanics, progressive \
             jackpots, bonus features, and game volatility. Learn about cluster pays, cascading \
             reels, and hold-and-win features, and how each one shapes the way a game pays.",
            "ri-coin-line",
        ),
        (
            4,
            "live",
            "Live",
            "Blackjack strategy, table etiquette and live dealer game shows.",
            "Dive into live casino gaming with guides on blackjack basic strategy, roulette \
             betting systems, baccarat rules, and live game shows. Learn proper etiquette, \
             understand streaming requirements, and the strategies that work at real-time \
             dealer tables.",
            "ri-vidicon-line",
        ),
    ];

    rows.into_iter()
        .map(|(id, slug, name, description, long_description, icon)| Category {
            id,
            slug: slug.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            long_description: long_description.to_string(),
            icon: icon.to_string(),
        })
        .collect()
}

/// Glossary entries in display order.
pub fn glossary_terms() -> Vec<GlossaryTerm> {
    let rows: [(u32, &str, Option<&str>, &str, &str, &[&str]); 16] = [
        (
            1,
            "RTP",
            Some("Return to Player"),
            "Pokies & Slots",
            "The percentage of all wagered money a game is designed to pay back to players over \
             the long run. A 96% RTP returns $96 for every $100 wagered on average.",
            &["House Edge", "Volatility"],
        ),
        (
            2,
            "Volatility",
            None,
            "Pokies & Slots",
            "How a game's payouts are distributed. High volatility pays larger wins less often; \
             low volatility pays smaller wins more frequently.",
            &["RTP", "Hit Frequency"],
        ),
        (
            3,
            "Hit Frequency",
            None,
            "Pokies & Slots",
            "How often a spin results in any win, expressed as a percentage of spins.",
            &["Volatility"],
        ),
        (
            4,
            "Megaways",
            None,
            "Pokies & Slots",
            "A reel mechanic where the number of symbols on each reel changes every spin, giving \
             a variable number of ways to win.",
            &["Cascading Reels"],
        ),
        (
            5,
            "Cascading Reels",
            None,
            "Pokies & Slots",
            "Winning symbols are removed and replaced by new ones falling from above, allowing \
             several wins from a single spin.",
            &["Megaways"],
        ),
        (
            6,
            "Progressive Jackpot",
            None,
            "Pokies & Slots",
            "A jackpot that grows with a small share of every bet placed until it is won, then \
             resets to a seed amount.",
            &["RTP"],
        ),
        (
            7,
            "House Edge",
            None,
            "Casino Games",
            "The built-in mathematical advantage of the operator, equal to 100% minus the RTP.",
            &["RTP"],
        ),
        (
            8,
            "Basic Strategy",
            None,
            "Casino Games",
            "The statistically optimal decision for every blackjack hand given the dealer's \
             up-card.",
            &["House Edge"],
        ),
        (
            9,
            "Live Dealer",
            None,
            "Casino Games",
            "A casino game streamed in real time from a studio with a human dealer running the \
             table.",
            &[],
        ),
        (
            10,
            "Odds",
            None,
            "Sports Betting",
            "The price offered on an outcome, which determines the payout and implies a \
             probability.",
            &["Implied Probability", "Value Bet"],
        ),
        (
            11,
            "Implied Probability",
            None,
            "Sports Betting",
            "The chance of an outcome implied by its odds. For decimal odds it is 1 divided by \
             the price.",
            &["Odds"],
        ),
        (
            12,
            "Value Bet",
            None,
            "Sports Betting",
            "A bet where your estimated probability of an outcome is higher than the probability \
             implied by the odds.",
            &["Odds", "Implied Probability"],
        ),
        (
            13,
            "Parlay",
            Some("Multi / Accumulator"),
            "Sports Betting",
            "A single bet combining several selections. Every leg must win and the odds multiply \
             together.",
            &["Odds"],
        ),
        (
            14,
            "Bankroll",
            None,
            "Money Management",
            "The total amount of money set aside purely for gambling, kept separate from \
             everyday funds.",
            &["Unit", "Session Budget"],
        ),
        (
            15,
            "Wagering Requirement",
            Some("Turnover Requirement"),
            "Money Management",
            "The multiple of a bonus that must be wagered before bonus winnings can be \
             withdrawn. A $100 bonus at 30x needs $3,000 in turnover.",
            &["Bonus"],
        ),
        (
            16,
            "Self-Exclusion",
            None,
            "Responsible Gambling",
            "A voluntary agreement that blocks a person from gambling with an operator, or \
             nationally through BetStop, for a chosen period.",
            &["Deposit Limit"],
        ),
    ];

    rows.into_iter()
        .map(|(id, term, full_name, category, definition, related)| GlossaryTerm {
            id,
            term: term.to_string(),
            full_name: full_name.map(str::to_string),
            category: category.to_string(),
            definition: definition.to_string(),
            related_terms: related.iter().map(|value| value.to_string()).collect(),
        })
        .collect()
}
