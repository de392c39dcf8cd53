//! `gitscope favorites` - manage the locally persisted bookmarks.

use console::style;

use gitscope::github::validate_username;
use gitscope::store::FavoriteCommit;

use crate::commands::shared::{OutputFormat, build_store, check_store_error, format_date, print_table};
use crate::config::Config;

/// One favorite row for table output.
#[derive(Debug, Clone, tabled::Tabled)]
pub(crate) struct FavoriteRow {
    #[tabled(rename = "SHA")]
    pub sha: String,
    #[tabled(rename = "Message")]
    pub message: String,
    #[tabled(rename = "Author")]
    pub author: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Repository")]
    pub repository: String,
}

impl FavoriteRow {
    pub(crate) fn from_favorite(favorite: &FavoriteCommit) -> Self {
        let end = favorite.sha.len().min(7);
        Self {
            sha: favorite.sha[..end].to_string(),
            message: favorite.summary().to_string(),
            author: favorite.author.clone(),
            date: format_date(&favorite.date),
            repository: format!("{}/{}", favorite.username, favorite.repo_name),
        }
    }
}

pub(crate) fn handle_list(
    output: OutputFormat,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = build_store(config)?;

    match output {
        OutputFormat::Table => {
            if store.favorites().is_empty() {
                println!("No favorite commits saved yet");
                return Ok(());
            }
            let rows: Vec<FavoriteRow> = store
                .favorites()
                .iter()
                .map(FavoriteRow::from_favorite)
                .collect();
            print_table(rows);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(store.favorites())?);
        }
    }

    Ok(())
}

pub(crate) async fn handle_add(
    username: &str,
    repo: &str,
    sha: &str,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    validate_username(username)?;

    let mut store = build_store(config)?;
    store.fetch_commit_details(username, repo, sha).await;
    check_store_error(&store)?;

    let commit = store
        .selected_commit_details()
        .ok_or("commit details were not loaded")?
        .to_commit();

    let added = store.add_favorite(&commit, repo, username);
    check_store_error(&store)?;

    if added {
        println!(
            "{} favorited {} ({})",
            style("♥").red(),
            commit.short_sha(),
            commit.summary()
        );
    } else {
        println!("{} is already in your favorites", commit.short_sha());
    }

    Ok(())
}

pub(crate) fn handle_remove(
    sha: &str,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = build_store(config)?;

    let removed = store.remove_favorite(sha);
    check_store_error(&store)?;

    if removed {
        println!("Removed {} from favorites", sha);
    } else {
        println!("{} was not in your favorites", sha);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    #[test]
    fn favorite_row_abbreviates_sha_and_joins_repo_path() {
        let favorite = FavoriteCommit {
            sha: "6dcb09b5b57875f334f61aebed695e2e4193db5e".to_string(),
            message: "Fix all the bugs\n\nDetails.".to_string(),
            author: "Monalisa Octocat".to_string(),
            date: DateTime::from_timestamp(1302796849, 0).unwrap(),
            repo_name: "Hello-World".to_string(),
            username: "octocat".to_string(),
            avatar_url: None,
        };

        let row = FavoriteRow::from_favorite(&favorite);
        assert_eq!(row.sha, "6dcb09b");
        assert_eq!(row.message, "Fix all the bugs");
        assert_eq!(row.repository, "octocat/Hello-World");
        assert_eq!(row.date, "Apr 14, 2011 16:00");
    }
}
