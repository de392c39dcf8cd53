//! `gitscope show` - one commit with its file-level changes.

use console::style;

use gitscope::github::{CommitFile, FileStatus, validate_username};

use crate::commands::shared::{build_store, check_store_error, format_date, print_table};
use crate::config::Config;

/// One changed file for table output.
#[derive(Debug, Clone, tabled::Tabled)]
pub(crate) struct FileRow {
    #[tabled(rename = "File")]
    pub filename: String,
    #[tabled(rename = "Status")]
    pub status: &'static str,
    #[tabled(rename = "+")]
    pub additions: u64,
    #[tabled(rename = "-")]
    pub deletions: u64,
}

impl FileRow {
    pub(crate) fn from_file(file: &CommitFile) -> Self {
        let filename = match (&file.previous_filename, file.status) {
            (Some(previous), FileStatus::Renamed) => format!("{previous} → {}", file.filename),
            _ => file.filename.clone(),
        };
        Self {
            filename,
            status: file.status.as_str(),
            additions: file.additions,
            deletions: file.deletions,
        }
    }
}

pub(crate) async fn handle_show(
    username: &str,
    repo: &str,
    sha: &str,
    patch: bool,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    validate_username(username)?;

    let mut store = build_store(config)?;
    store.fetch_commit_details(username, repo, sha).await;
    check_store_error(&store)?;

    let details = store
        .selected_commit_details()
        .ok_or("commit details were not loaded")?;

    println!("{} {}", style("commit").yellow(), details.sha);
    println!(
        "Author: {} <{}>",
        details.commit.author.name, details.commit.author.email
    );
    println!("Date:   {}", format_date(&details.commit.author.date));
    if let Some(account) = &details.author {
        println!("GitHub: @{}", account.login);
    }
    println!();
    for line in details.commit.message.lines() {
        println!("    {line}");
    }
    println!();

    println!(
        "{} files changed, {} {}, {} {}",
        details.files.len(),
        style(format!("+{}", details.stats.additions)).green(),
        "insertions",
        style(format!("-{}", details.stats.deletions)).red(),
        "deletions",
    );

    if !details.files.is_empty() {
        let rows: Vec<FileRow> = details.files.iter().map(FileRow::from_file).collect();
        print_table(rows);
    }

    if patch {
        for file in &details.files {
            let Some(text) = &file.patch else {
                continue;
            };
            println!();
            println!("{}", style(format!("--- {}", file.filename)).bold());
            for line in text.lines() {
                if line.starts_with('+') {
                    println!("{}", style(line).green());
                } else if line.starts_with('-') {
                    println!("{}", style(line).red());
                } else if line.starts_with("@@") {
                    println!("{}", style(line).cyan());
                } else {
                    println!("{line}");
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(status: &str, previous: Option<&str>) -> CommitFile {
        serde_json::from_value(serde_json::json!({
            "sha": "bbcd538c8e72b8c175046e27cc8f907076331401",
            "filename": "src/lib.rs",
            "status": status,
            "additions": 10,
            "deletions": 2,
            "changes": 12,
            "blob_url": "",
            "raw_url": "",
            "previous_filename": previous
        }))
        .unwrap()
    }

    #[test]
    fn file_row_shows_plain_name_for_modifications() {
        let row = FileRow::from_file(&file("modified", None));
        assert_eq!(row.filename, "src/lib.rs");
        assert_eq!(row.status, "modified");
        assert_eq!(row.additions, 10);
        assert_eq!(row.deletions, 2);
    }

    #[test]
    fn file_row_shows_rename_arrows() {
        let row = FileRow::from_file(&file("renamed", Some("src/old.rs")));
        assert_eq!(row.filename, "src/old.rs → src/lib.rs");
        assert_eq!(row.status, "renamed");
    }
}
