//! `gitscope repos` - list a user's public repositories.

use gitscope::github::{Repository, validate_username};

use crate::commands::shared::{OutputFormat, build_store, check_store_error, format_date, print_table};
use crate::config::Config;

/// One repository row for table output.
#[derive(Debug, Clone, serde::Serialize, tabled::Tabled)]
pub(crate) struct RepoRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Language")]
    pub language: String,
    #[tabled(rename = "Stars")]
    pub stars: u32,
    #[tabled(rename = "Updated")]
    pub updated: String,
}

const DESCRIPTION_WIDTH: usize = 60;

impl RepoRow {
    pub(crate) fn from_repository(repo: &Repository) -> Self {
        let mut description = repo.description.clone().unwrap_or_default();
        if description.chars().count() > DESCRIPTION_WIDTH {
            description = description.chars().take(DESCRIPTION_WIDTH - 1).collect();
            description.push('…');
        }
        Self {
            name: repo.name.clone(),
            description,
            language: repo.language.clone().unwrap_or_else(|| "-".to_string()),
            stars: repo.stargazers_count,
            updated: format_date(&repo.updated_at),
        }
    }
}

pub(crate) async fn handle_repos(
    username: &str,
    output: OutputFormat,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    validate_username(username)?;

    let mut store = build_store(config)?;
    store.fetch_repositories(username).await;
    check_store_error(&store)?;

    match output {
        OutputFormat::Table => {
            if store.repositories().is_empty() {
                println!("No public repositories found for {}", username);
                return Ok(());
            }
            let rows: Vec<RepoRow> = store
                .repositories()
                .iter()
                .map(RepoRow::from_repository)
                .collect();
            print_table(rows);
            println!("{} repositories", store.repositories().len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(store.repositories())?);
        }
    }

    Ok(())
}
