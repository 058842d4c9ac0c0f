//! Integration tests for the CLI commands.

#[cfg(test)]
mod tests {
    use ee9_cli::{
        cli::{CalcCommands, OutputFormat},
        commands::{articles, calc, categories, glossary, meta, post, sitemap},
    };
    use ee9_shared::{ArticleQuery, ContentStore, SiteConfig, SortMode};
    use serde_json::Value;

    fn store() -> &'static ContentStore {
        ContentStore::global()
    }

    #[test]
    fn articles_table_lists_category_by_popularity() {
        let query = ArticleQuery::new().category("slots").sort(SortMode::Popular).limit(2);
        let table = articles::render(store(), &query, OutputFormat::Table).expect("render table");
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with("SLUG"));
        assert_eq!(lines.len(), 4, "header, rule and two rows:\n{table}");
        assert!(lines[2..].iter().all(|line| line.contains("Slots")));
    }

    #[test]
    fn articles_json_honours_tag_filter() {
        let query = ArticleQuery::new().tag("free-spins").sort(SortMode::Latest);
        let json = articles::render(store(), &query, OutputFormat::Json).expect("render json");
        let value: Value = serde_json::from_str(&json).expect("valid json");
        let items = value.as_array().expect("array");
        assert_eq!(items.len(), 3);
        let dates: Vec<&str> = items
            .iter()
            .map(|item| item["publishDate"].as_str().expect("date"))
            .collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn unknown_category_lists_nothing() {
        let query = ArticleQuery::new().category("lottery");
        let json = articles::render(store(), &query, OutputFormat::Json).expect("render json");
        assert_eq!(json.trim(), "[]");
    }

    #[test]
    fn post_shows_related_and_neighbours() {
        let config = SiteConfig::default();
        let text = post::render(
            store(),
            &config,
            "megaways-slots-mechanics-explained",
            OutputFormat::Table,
        )
        .expect("known slug");
        assert!(text.contains("https://ee9.com/post/megaways-slots-mechanics-explained"));
        assert!(text.contains("Previous: sports-betting-bankroll-management-strategies"));
        assert!(text.contains("Next: live-blackjack-basic-strategy-chart"));
        assert!(text.contains("  high-volatility-vs-low-volatility-slots"));
    }

    #[test]
    fn first_post_has_no_previous() {
        let config = SiteConfig::default();
        let json = post::render(
            store(),
            &config,
            "understanding-rtp-in-pokies-complete-guide",
            OutputFormat::Json,
        )
        .expect("known slug");
        let value: Value = serde_json::from_str(&json).expect("valid json");
        assert!(value["previous"].is_null());
        assert_eq!(value["next"], "sports-betting-bankroll-management-strategies");
    }

    #[test]
    fn unknown_post_is_an_error() {
        let err = post::render(store(), &SiteConfig::default(), "no-such-post", OutputFormat::Table)
            .expect_err("missing slug");
        assert!(err.to_string().contains("no-such-post"));
    }

    #[test]
    fn categories_count_their_articles() {
        let json = categories::render(store(), OutputFormat::Json).expect("render json");
        let value: Value = serde_json::from_str(&json).expect("valid json");
        let counts: Vec<(String, u64)> = value
            .as_array()
            .expect("array")
            .iter()
            .map(|item| {
                (
                    item["slug"].as_str().expect("slug").to_string(),
                    item["articleCount"].as_u64().expect("count"),
                )
            })
            .collect();
        let total: u64 = counts.iter().map(|(_, count)| count).sum();
        assert_eq!(total as usize, store().articles().len());
        assert_eq!(counts[0].0, "pokies");
    }

    #[test]
    fn glossary_groups_matches_by_letter() {
        let text = glossary::render(store(), "bet", None, OutputFormat::Table).expect("render");
        assert!(text.lines().any(|line| line == "V"));
        assert!(text.contains("Value Bet [Sports Betting]"));
    }

    #[test]
    fn glossary_section_filter_is_exact() {
        let json = glossary::render(store(), "", Some("Money Management"), OutputFormat::Json)
            .expect("render");
        let value: Value = serde_json::from_str(&json).expect("valid json");
        let terms: Vec<&str> = value
            .as_array()
            .expect("array")
            .iter()
            .map(|item| item["term"].as_str().expect("term"))
            .collect();
        assert_eq!(terms, vec!["Bankroll", "Wagering Requirement"]);

        let none = glossary::render(store(), "zzzz", None, OutputFormat::Table).expect("render");
        assert_eq!(none, "No terms found.\n");
    }

    #[test]
    fn calculators_format_results() {
        let bankroll = calc::render(&CalcCommands::Bankroll {
            total: "1000".into(),
            percentage: "10".into(),
        })
        .expect("valid bankroll");
        assert_eq!(bankroll, "Session budget: $100.00\nSessions available: 10\n");

        let turnover = calc::render(&CalcCommands::Turnover {
            bonus: "100".into(),
            multiplier: "30".into(),
        })
        .expect("valid turnover");
        assert_eq!(turnover, "Required turnover: $3,000.00\n");

        let rtp = calc::render(&CalcCommands::Rtp {
            rtp: "96".into(),
            wagered: "1000".into(),
            spins: "100".into(),
        })
        .expect("valid rtp");
        assert!(rtp.contains("Expected return: $960.00"));
        assert!(rtp.contains("Expected loss: $40.00"));
        assert!(rtp.contains("Return per spin: $9.60"));
    }

    #[test]
    fn invalid_calculator_input_is_an_error() {
        let err = calc::render(&CalcCommands::Rtp {
            rtp: "96".into(),
            wagered: "1000".into(),
            spins: "0".into(),
        })
        .expect_err("zero spins");
        assert!(format!("{err:#}").contains("Spins played"));

        assert!(calc::render(&CalcCommands::Turnover {
            bonus: "abc".into(),
            multiplier: "30".into(),
        })
        .is_err());
    }

    #[test]
    fn meta_uses_site_url_override() {
        let config = SiteConfig::with_site_url("https://staging.ee9.com/");
        let json = meta::render(store(), &config, "/tools").expect("render");
        let value: Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["canonicalUrl"], "https://staging.ee9.com/tools");
    }

    #[test]
    fn meta_for_unknown_path_is_noindex() {
        let json = meta::render(store(), &SiteConfig::default(), "/casino/reviews").expect("render");
        let value: Value = serde_json::from_str(&json).expect("valid json");
        assert!(value["robots"].as_str().expect("robots").starts_with("noindex"));
        assert_eq!(value["canonicalUrl"], "https://ee9.com/404");
    }

    #[test]
    fn sitemap_is_written_to_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("sitemap.xml");
        let config = SiteConfig::default();

        let urls = sitemap::write(store(), &config, &path).expect("write sitemap");
        let xml = std::fs::read_to_string(&path).expect("read sitemap");

        assert_eq!(xml, sitemap::render(store(), &config));
        assert!(xml.starts_with("<?xml"));
        assert!(xml.trim_end().ends_with("</urlset>"));
        assert!(urls > store().articles().len());
        assert!(xml.contains("<loc>https://ee9.com/tag/free-spins</loc>"));
        assert!(!xml.contains("/404"));
        assert_eq!(
            xml.matches("<lastmod>").count(),
            store().articles().len(),
            "every post carries its publish date"
        );
    }

    #[test]
    fn robots_points_at_sitemap() {
        let robots = sitemap::robots_txt(&SiteConfig::with_site_url("https://staging.ee9.com"));
        assert!(robots.ends_with("Sitemap: https://staging.ee9.com/sitemap.xml\n"));
    }
}
