use std::time::Duration;

use chrono::NaiveDate;
use clap::Parser;
use url::Url;

use crate::menu::Diet;

pub const DEFAULT_RESTAURANT_URL: &str =
    "https://www.iss-menyer.se/restaurants/restaurang-gourmedia";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Get the lunch menu from an ISS restaurant page.
///
/// Examples:
///   lunch                    today's menu
///   lunch -d 2024-01-15      menu for a specific date
///   lunch --week             the whole week
///   lunch -v                 vegetarian options only
#[derive(Parser, Debug)]
#[command(name = "lunch", version, verbatim_doc_comment)]
pub struct Cli {
    /// Date to get the menu for (YYYY-MM-DD). Defaults to today.
    #[arg(short, long, value_name = "YYYY-MM-DD", conflicts_with = "week")]
    pub date: Option<NaiveDate>,

    /// Show the menu for the whole week.
    #[arg(short, long)]
    pub week: bool,

    /// Restaurant page to scrape.
    #[arg(short, long = "restaurant", value_name = "URL", default_value = DEFAULT_RESTAURANT_URL)]
    pub restaurant_url: Url,

    /// Show only vegetarian options.
    #[arg(short, long, conflicts_with = "meat_only")]
    pub vegetarian_only: bool,

    /// Show only meat options.
    #[arg(short, long)]
    pub meat_only: bool,

    /// Print the menu as JSON.
    #[arg(long)]
    pub json: bool,

    /// User-Agent header sent to the restaurant site.
    #[arg(long, value_name = "STRING", default_value = DEFAULT_USER_AGENT, hide_default_value = true)]
    pub user_agent: String,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// What part of the week to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A single day; `None` is today.
    Day(Option<NaiveDate>),
    Week,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub restaurant_url: Url,
    pub fetch: FetchConfig,
    pub selection: Selection,
    pub show: Diet,
    pub json: bool,
    pub debug: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            restaurant_url: cli.restaurant_url,
            fetch: FetchConfig {
                user_agent: cli.user_agent,
                timeout: Duration::from_secs(cli.timeout),
            },
            selection: if cli.week {
                Selection::Week
            } else {
                Selection::Day(cli.date)
            },
            show: Diet::from_flags(cli.vegetarian_only, cli.meat_only),
            json: cli.json,
            debug: cli.debug,
        }
    }
}
