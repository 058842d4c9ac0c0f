//! Argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use ee9_shared::{config::DEFAULT_SITE_URL, SortMode};

/// How listings are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for terminals.
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Top-level arguments.
#[derive(Parser)]
#[command(name = "ee9-cli", version, about = "EE9 content, calculator and metadata CLI")]
pub struct Cli {
    /// Site origin used for canonical URLs, structured data and the sitemap.
    #[arg(long, global = true, env = "EE9_SITE_URL", default_value = DEFAULT_SITE_URL)]
    pub site_url: String,
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// List articles with optional category/tag filters.
    Articles {
        /// Category slug, e.g. `pokies`.
        #[arg(long)]
        category: Option<String>,
        /// Tag slug, e.g. `free-spins`.
        #[arg(long)]
        tag: Option<String>,
        /// Ordering (`latest` or `popular`).
        #[arg(long, default_value_t = SortMode::Latest)]
        sort: SortMode,
        /// Maximum number of rows.
        #[arg(long)]
        limit: Option<usize>,
        /// Output format (`table` or `json`).
        #[arg(long, value_enum, default_value_t = OutputFormat::Table, ignore_case = true)]
        format: OutputFormat,
    },
    /// Show one article with its related reads and previous/next links.
    Post {
        /// Article slug.
        slug: String,
        /// Output format (`table` or `json`).
        #[arg(long, value_enum, default_value_t = OutputFormat::Table, ignore_case = true)]
        format: OutputFormat,
    },
    /// List categories with their article counts.
    Categories {
        /// Output format (`table` or `json`).
        #[arg(long, value_enum, default_value_t = OutputFormat::Table, ignore_case = true)]
        format: OutputFormat,
    },
    /// Search the glossary.
    Glossary {
        /// Text matched against the term and its definition.
        #[arg(long, default_value = "")]
        search: String,
        /// Exact glossary section, e.g. `Slots`.
        #[arg(long)]
        category: Option<String>,
        /// Output format (`table` or `json`).
        #[arg(long, value_enum, default_value_t = OutputFormat::Table, ignore_case = true)]
        format: OutputFormat,
    },
    /// Run one of the player calculators.
    Calc {
        /// Calculator to run.
        #[command(subcommand)]
        calculator: CalcCommands,
    },
    /// Print the metadata descriptor for a site path as JSON.
    Meta {
        /// Site-relative path, e.g. `/tag/free-spins`.
        path: String,
    },
    /// Print an XML sitemap of every indexable page.
    Sitemap {
        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print a robots.txt pointing at the sitemap.
    Robots,
}

/// Calculators. Values are taken as raw text and validated like the web forms.
#[derive(Debug, Clone, Subcommand)]
pub enum CalcCommands {
    /// Session budget and session count from a bankroll.
    Bankroll {
        /// Total bankroll in dollars.
        #[arg(long, allow_hyphen_values = true)]
        total: String,
        /// Share of the bankroll per session, in percent.
        #[arg(long, allow_hyphen_values = true)]
        percentage: String,
    },
    /// Wagering needed to clear a bonus.
    Turnover {
        /// Bonus amount in dollars.
        #[arg(long, allow_hyphen_values = true)]
        bonus: String,
        /// Wagering multiplier, e.g. `30`.
        #[arg(long, allow_hyphen_values = true)]
        multiplier: String,
    },
    /// Expected return and loss for a given RTP.
    Rtp {
        /// Return to player, in percent.
        #[arg(long, allow_hyphen_values = true)]
        rtp: String,
        /// Total amount wagered in dollars.
        #[arg(long, allow_hyphen_values = true)]
        wagered: String,
        /// Number of spins played.
        #[arg(long, allow_hyphen_values = true)]
        spins: String,
    },
}
