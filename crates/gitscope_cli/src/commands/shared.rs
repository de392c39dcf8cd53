//! Plumbing shared across commands: store construction and output helpers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use clap::ValueEnum;

use gitscope::github::GitHubClient;
use gitscope::http::reqwest_transport::ReqwestTransport;
use gitscope::store::{ExplorerStore, FavoritesStore};

use crate::config::Config;

/// Output format for list-shaped commands.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Display as a formatted table (default)
    #[default]
    Table,
    /// Display as JSON
    Json,
}

/// Build an explorer store from the loaded configuration.
///
/// Every command gets a fresh store; only the favorites slice survives
/// between invocations, through the favorites file.
pub(crate) fn build_store(config: &Config) -> Result<ExplorerStore, Box<dyn std::error::Error>> {
    let transport = Arc::new(ReqwestTransport::new(reqwest::Client::new()));
    let client = GitHubClient::new(transport, config.github_token())
        .with_base_url(config.api_url());
    let favorites = FavoritesStore::new(config.favorites_path()?);
    Ok(ExplorerStore::new(Arc::new(client), favorites)?)
}

/// Surface the store's error slot as a command failure.
///
/// Store actions trap their errors into state; the CLI re-raises them so the
/// process exits non-zero with the same user-visible message.
pub(crate) fn check_store_error(store: &ExplorerStore) -> Result<(), Box<dyn std::error::Error>> {
    match store.error() {
        Some(message) => Err(message.to_string().into()),
        None => Ok(()),
    }
}

/// Human-oriented timestamp, e.g. "Apr 14, 2011 16:00".
pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y %H:%M").to_string()
}

/// Render a table with the house style.
pub(crate) fn print_table<T: tabled::Tabled>(rows: Vec<T>) {
    let mut table = tabled::Table::new(rows);
    table.with(tabled::settings::Style::rounded());
    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_is_short_and_unpadded() {
        let date = DateTime::from_timestamp(1302796849, 0).unwrap();
        assert_eq!(format_date(&date), "Apr 14, 2011 16:00");
    }
}
