//! GitHub API wire types (REST v3 shapes).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The owner block embedded in a repository payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoOwner {
    /// Owner handle (user or organization login).
    pub login: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: String,
}

/// A repository as returned by `GET /users/{username}/repos`.
///
/// Immutable once fetched; the store replaces the whole list on every fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// GitHub's numeric repository id.
    pub id: u64,
    /// Repository name.
    pub name: String,
    /// `owner/name`.
    pub full_name: String,
    /// Repository description, if set.
    #[serde(default)]
    pub description: Option<String>,
    /// Repository owner.
    pub owner: RepoOwner,
    /// Web URL of the repository.
    pub html_url: String,
    /// When the repository was created.
    pub created_at: DateTime<Utc>,
    /// When the repository was last updated.
    pub updated_at: DateTime<Utc>,
    /// Star count.
    #[serde(default)]
    pub stargazers_count: u32,
    /// Primary programming language, if detected.
    #[serde(default)]
    pub language: Option<String>,
}

/// A name/email/date triple from the git commit object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitSignature {
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub date: DateTime<Utc>,
}

/// The nested `commit` block of a commit payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitPayload {
    /// Full commit message.
    pub message: String,
    /// Commit author signature.
    pub author: GitSignature,
    /// Committer signature.
    pub committer: GitSignature,
}

/// The GitHub account linked to a commit, when GitHub could resolve one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitAccount {
    pub login: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// A commit as returned by the paginated list endpoint.
///
/// Immutable; the store appends or replaces these in list form as pages load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    /// Unique commit SHA.
    pub sha: String,
    /// The git commit object.
    pub commit: CommitPayload,
    /// Linked GitHub account, absent when GitHub cannot match the author.
    #[serde(default)]
    pub author: Option<CommitAccount>,
    /// Web URL of the commit.
    pub html_url: String,
}

impl Commit {
    /// First line of the commit message.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.commit.message.lines().next().unwrap_or_default()
    }

    /// Abbreviated SHA (first 7 characters).
    #[must_use]
    pub fn short_sha(&self) -> &str {
        let end = self.sha.len().min(7);
        &self.sha[..end]
    }
}

/// Per-file change status in a commit diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    Removed,
    Modified,
    Renamed,
}

impl FileStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FileStatus::Added => "added",
            FileStatus::Removed => "removed",
            FileStatus::Modified => "modified",
            FileStatus::Renamed => "renamed",
        }
    }
}

/// One changed file in a commit's diff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitFile {
    /// Blob SHA of the file at this commit.
    #[serde(default)]
    pub sha: String,
    /// Path of the file within the repository.
    pub filename: String,
    /// Change kind.
    pub status: FileStatus,
    /// Lines added.
    pub additions: u64,
    /// Lines removed.
    pub deletions: u64,
    /// Total changed lines.
    pub changes: u64,
    /// Unified-diff hunk text; omitted for binary or very large files.
    #[serde(default)]
    pub patch: Option<String>,
    /// Blob web URL.
    #[serde(default)]
    pub blob_url: String,
    /// Raw content URL.
    #[serde(default)]
    pub raw_url: String,
    /// Previous path, present for renames.
    #[serde(default)]
    pub previous_filename: Option<String>,
}

/// Aggregate line counts for a commit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitStats {
    pub total: u64,
    pub additions: u64,
    pub deletions: u64,
}

/// A commit with its file-level diff, from `GET /repos/{owner}/{repo}/commits/{sha}`.
///
/// Fetched on demand for exactly one commit at a time; the store clears it
/// when the detail view closes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetails {
    pub sha: String,
    pub commit: CommitPayload,
    #[serde(default)]
    pub author: Option<CommitAccount>,
    pub html_url: String,
    #[serde(default)]
    pub files: Vec<CommitFile>,
    #[serde(default)]
    pub stats: CommitStats,
}

impl CommitDetails {
    /// The list-shaped view of this commit, without the diff.
    #[must_use]
    pub fn to_commit(&self) -> Commit {
        Commit {
            sha: self.sha.clone(),
            commit: self.commit.clone(),
            author: self.author.clone(),
            html_url: self.html_url.clone(),
        }
    }

    /// First line of the commit message.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.commit.message.lines().next().unwrap_or_default()
    }
}

/// The error payload GitHub returns with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub documentation_url: Option<String>,
}
