#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

// used by the binary
use pretty_env_logger as _;
use tokio as _;

pub mod config;
pub mod display;
mod error;
pub mod fetch;
pub mod menu;
pub mod parse;

use config::{Config, Selection};
use fetch::Fetcher;
use menu::{get_menu_for_day, Diet};
use parse::Extractor;

pub use error::{Error, Result};

/// Fetches the restaurant page, extracts the week and renders the selection.
///
/// Fetch failures are returned as is; the bundled menu only replaces a
/// page the extractor could not read.
pub async fn run(config: &Config) -> Result<String> {
    let document = Fetcher::new(&config.fetch)?
        .fetch(&config.restaurant_url)
        .await?;
    let weekly = Extractor::default().extract(&document);
    drop(document);

    let mut out = String::new();
    match config.selection {
        Selection::Week => {
            let weekly = weekly.filtered(config.show);
            if config.json {
                out = serde_json::to_string_pretty(&weekly)?;
                out.push('\n');
            } else {
                display::write_week(&mut out, &weekly, Diet::all())?;
            }
        }
        Selection::Day(date) => {
            let menu = get_menu_for_day(&weekly, date).filtered(config.show);
            if config.json {
                out = serde_json::to_string_pretty(&menu)?;
                out.push('\n');
            } else {
                display::write_day(&mut out, &display::day_title(date), &menu, config.show)?;
            }
        }
    }
    Ok(out)
}
