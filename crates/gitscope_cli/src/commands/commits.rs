//! `gitscope commits` - page through a repository's commit history.

use clap::ValueEnum;
use console::style;

use gitscope::github::{Commit, validate_username};
use gitscope::store::SortOrder;

use crate::commands::shared::{OutputFormat, build_store, check_store_error, format_date, print_table};
use crate::config::Config;

/// Commit ordering flag.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum SortArg {
    /// Most recent commits first (default)
    #[default]
    Newest,
    /// Oldest commits first
    Oldest,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Newest => SortOrder::Newest,
            SortArg::Oldest => SortOrder::Oldest,
        }
    }
}

/// One commit row for table output.
#[derive(Debug, Clone, serde::Serialize, tabled::Tabled)]
pub(crate) struct CommitRow {
    #[tabled(rename = "SHA")]
    pub sha: String,
    #[tabled(rename = "Message")]
    pub message: String,
    #[tabled(rename = "Author")]
    pub author: String,
    #[tabled(rename = "Date")]
    pub date: String,
}

const MESSAGE_WIDTH: usize = 72;

impl CommitRow {
    pub(crate) fn from_commit(commit: &Commit) -> Self {
        let mut message = commit.summary().to_string();
        if message.chars().count() > MESSAGE_WIDTH {
            message = message.chars().take(MESSAGE_WIDTH - 1).collect();
            message.push('…');
        }
        Self {
            sha: commit.short_sha().to_string(),
            message,
            author: commit.commit.author.name.clone(),
            date: format_date(&commit.commit.author.date),
        }
    }
}

pub(crate) async fn handle_commits(
    username: &str,
    repo: &str,
    pages: u32,
    sort: SortArg,
    output: OutputFormat,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    validate_username(username)?;

    let mut store = build_store(config)?;
    store.set_sort_order(sort.into());

    // Page 1 replaces, later pages append; stop early when a short page
    // says the history is exhausted.
    let pages = pages.max(1);
    for page in 1..=pages {
        if page > 1 && !store.has_more_commits() {
            break;
        }
        store.fetch_commits(username, repo, page).await;
        check_store_error(&store)?;
    }

    let commits = store.sorted_commits();

    match output {
        OutputFormat::Table => {
            if commits.is_empty() {
                println!("No commits found for this repository");
                return Ok(());
            }
            let rows: Vec<CommitRow> = commits.iter().map(CommitRow::from_commit).collect();
            print_table(rows);
            if store.has_more_commits() {
                println!(
                    "{} commits loaded; more available (rerun with --pages {})",
                    commits.len(),
                    store.current_page() + 1
                );
            } else {
                println!("{} commits loaded; end of history", commits.len());
            }
            for commit in &commits {
                if store.is_favorite(&commit.sha) {
                    println!(
                        "{} {} is in your favorites",
                        style("♥").red(),
                        commit.short_sha()
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&commits)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(message: &str) -> Commit {
        serde_json::from_value(serde_json::json!({
            "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "commit": {
                "message": message,
                "author": {"name": "Monalisa Octocat", "email": "mona@github.com", "date": "2011-04-14T16:00:49Z"},
                "committer": {"name": "Monalisa Octocat", "email": "mona@github.com", "date": "2011-04-14T16:00:49Z"}
            },
            "author": null,
            "html_url": "https://github.com/octocat/Hello-World/commit/6dcb09b"
        }))
        .unwrap()
    }

    #[test]
    fn commit_row_uses_the_summary_line_and_short_sha() {
        let row = CommitRow::from_commit(&commit("Fix all the bugs\n\nDetails."));
        assert_eq!(row.sha, "6dcb09b");
        assert_eq!(row.message, "Fix all the bugs");
        assert_eq!(row.date, "Apr 14, 2011 16:00");
    }

    #[test]
    fn commit_row_truncates_long_summaries() {
        let long = "y".repeat(200);
        let row = CommitRow::from_commit(&commit(&long));
        assert_eq!(row.message.chars().count(), MESSAGE_WIDTH);
        assert!(row.message.ends_with('…'));
    }

    #[test]
    fn sort_arg_maps_onto_store_sort_order() {
        assert_eq!(SortOrder::from(SortArg::Newest), SortOrder::Newest);
        assert_eq!(SortOrder::from(SortArg::Oldest), SortOrder::Oldest);
    }
}
