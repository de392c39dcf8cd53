//! Locally persisted commit bookmarks.
//!
//! Favorites are the only state that outlives a session. They are stored as
//! one JSON array (camelCase keys, matching the shape the browser version of
//! the explorer kept in localStorage) and rewritten whole on every mutation.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::github::Commit;

/// A denormalized snapshot of a bookmarked commit, keyed by sha.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteCommit {
    /// Commit SHA, the deduplication key.
    pub sha: String,
    /// Full commit message at bookmark time.
    pub message: String,
    /// Commit author name.
    pub author: String,
    /// Commit author date.
    pub date: DateTime<Utc>,
    /// Repository the commit was bookmarked from.
    pub repo_name: String,
    /// Username the repository was browsed under.
    pub username: String,
    /// Avatar of the linked GitHub account, when one was resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl FavoriteCommit {
    /// Snapshot a commit from the list view.
    #[must_use]
    pub fn from_commit(commit: &Commit, repo_name: &str, username: &str) -> Self {
        Self {
            sha: commit.sha.clone(),
            message: commit.commit.message.clone(),
            author: commit.commit.author.name.clone(),
            date: commit.commit.author.date,
            repo_name: repo_name.to_string(),
            username: username.to_string(),
            avatar_url: commit.author.as_ref().map(|a| a.avatar_url.clone()),
        }
    }

    /// First line of the bookmarked message.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

/// An ordered favorites list with set semantics by sha.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesList {
    items: Vec<FavoriteCommit>,
}

impl FavoritesList {
    /// Add a favorite. Returns false (and changes nothing) when the sha is
    /// already present.
    pub fn add(&mut self, favorite: FavoriteCommit) -> bool {
        if self.contains(&favorite.sha) {
            return false;
        }
        self.items.push(favorite);
        true
    }

    /// Remove by sha. Returns false when the sha was not present.
    pub fn remove(&mut self, sha: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|fav| fav.sha != sha);
        self.items.len() != before
    }

    #[must_use]
    pub fn contains(&self, sha: &str) -> bool {
        self.items.iter().any(|fav| fav.sha == sha)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FavoriteCommit> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[FavoriteCommit] {
        &self.items
    }
}

/// Errors from loading or saving the favorites file.
#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("failed to access favorites file: {0}")]
    Io(#[from] std::io::Error),

    #[error("favorites file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// File-backed persistence for the favorites list.
///
/// The whole list is serialized on every save. A missing file loads as an
/// empty list; only unreadable or corrupt content is an error.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted list, or an empty one when the file does not exist.
    pub fn load(&self) -> Result<FavoritesList, FavoritesError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no favorites file yet");
                Ok(FavoritesList::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write the whole list, creating parent directories as needed.
    pub fn save(&self, favorites: &FavoritesList) -> Result<(), FavoritesError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(favorites)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), count = favorites.len(), "saved favorites");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorite(sha: &str) -> FavoriteCommit {
        FavoriteCommit {
            sha: sha.to_string(),
            message: "Fix all the bugs\n\nDetails.".to_string(),
            author: "Monalisa Octocat".to_string(),
            date: DateTime::from_timestamp(1302796849, 0).unwrap(),
            repo_name: "Hello-World".to_string(),
            username: "octocat".to_string(),
            avatar_url: None,
        }
    }

    #[test]
    fn add_deduplicates_by_sha() {
        let mut list = FavoritesList::default();
        assert!(list.add(favorite("abc")));
        assert!(!list.add(favorite("abc")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_missing_sha_is_a_noop() {
        let mut list = FavoritesList::default();
        list.add(favorite("abc"));
        assert!(!list.remove("def"));
        assert_eq!(list.len(), 1);
        assert!(list.remove("abc"));
        assert!(list.is_empty());
    }

    #[test]
    fn summary_takes_the_first_message_line() {
        assert_eq!(favorite("abc").summary(), "Fix all the bugs");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut fav = favorite("abc");
        fav.avatar_url = Some("https://avatars.example/u/1".to_string());
        let json = serde_json::to_string(&fav).unwrap();
        assert!(json.contains("\"repoName\""));
        assert!(json.contains("\"avatarUrl\""));

        let absent = serde_json::to_string(&favorite("abc")).unwrap();
        assert!(!absent.contains("avatarUrl"));
    }

    #[test]
    fn list_serializes_as_a_bare_array() {
        let mut list = FavoritesList::default();
        list.add(favorite("abc"));
        let json = serde_json::to_string(&list).unwrap();
        assert!(json.starts_with('['));

        let parsed: FavoritesList = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert!(parsed.contains("abc"));
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let store = FavoritesStore::new("/nonexistent/gitscope/favorites.json");
        let list = store.load().unwrap();
        assert!(list.is_empty());
    }
}
