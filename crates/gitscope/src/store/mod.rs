//! Application state for the commit explorer.
//!
//! [`ExplorerStore`] owns every piece of UI-relevant state and exposes the
//! actions a view layer dispatches. Async actions call the GitHub client and
//! fold the outcome back into state; a failing action stores a user-visible
//! message in `error` and never propagates to the caller.
//!
//! The store is single-owner and takes `&mut self` per action. There is
//! deliberately no guard against overlapping fetches, no cancellation, and
//! no timeout: callers that dispatch twice get two sequential requests.

mod favorites;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::github::{Commit, CommitDetails, GitHubClient, Repository};

pub use favorites::{FavoriteCommit, FavoritesError, FavoritesList, FavoritesStore};

/// Fixed page size for commit history fetches.
pub const COMMITS_PER_PAGE: usize = 10;

/// Commit list ordering by author date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

/// The explorer's full application state plus its action surface.
pub struct ExplorerStore {
    client: Arc<GitHubClient>,
    favorites_store: FavoritesStore,

    repositories: Vec<Repository>,
    commits: Vec<Commit>,
    favorites: FavoritesList,
    selected_repo: Option<Repository>,
    selected_commit_details: Option<CommitDetails>,
    current_page: u32,
    has_more_commits: bool,
    sort_order: SortOrder,
    loading: bool,
    error: Option<String>,
}

impl ExplorerStore {
    /// Create a store, loading any persisted favorites.
    pub fn new(
        client: Arc<GitHubClient>,
        favorites_store: FavoritesStore,
    ) -> Result<Self, FavoritesError> {
        let favorites = favorites_store.load()?;
        Ok(Self {
            client,
            favorites_store,
            repositories: Vec::new(),
            commits: Vec::new(),
            favorites,
            selected_repo: None,
            selected_commit_details: None,
            current_page: 1,
            has_more_commits: true,
            sort_order: SortOrder::default(),
            loading: false,
            error: None,
        })
    }

    // ---------- read surface ----------

    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn favorites(&self) -> &FavoritesList {
        &self.favorites
    }

    pub fn selected_repo(&self) -> Option<&Repository> {
        self.selected_repo.as_ref()
    }

    pub fn selected_commit_details(&self) -> Option<&CommitDetails> {
        self.selected_commit_details.as_ref()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn has_more_commits(&self) -> bool {
        self.has_more_commits
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Membership check for the view layer's favorite toggle.
    pub fn is_favorite(&self, sha: &str) -> bool {
        self.favorites.contains(sha)
    }

    /// Commits ordered by author date without mutating the loaded list.
    pub fn sorted_commits(&self) -> Vec<Commit> {
        let mut sorted = self.commits.clone();
        match self.sort_order {
            SortOrder::Newest => {
                sorted.sort_by(|a, b| b.commit.author.date.cmp(&a.commit.author.date));
            }
            SortOrder::Oldest => {
                sorted.sort_by(|a, b| a.commit.author.date.cmp(&b.commit.author.date));
            }
        }
        sorted
    }

    // ---------- async actions ----------

    /// Fetch a user's repositories, replacing the current list.
    pub async fn fetch_repositories(&mut self, username: &str) {
        self.loading = true;
        self.error = None;
        self.repositories.clear();

        match self.client.list_user_repos(username).await {
            Ok(repos) => {
                tracing::debug!(username, count = repos.len(), "fetched repositories");
                self.repositories = repos;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }

    /// Fetch one page of commits: page 1 replaces the list, later pages
    /// append. A full page means more may remain.
    pub async fn fetch_commits(&mut self, username: &str, repo: &str, page: u32) {
        self.loading = true;
        self.error = None;

        match self
            .client
            .list_commits(username, repo, page, COMMITS_PER_PAGE as u32)
            .await
        {
            Ok(new_commits) => {
                tracing::debug!(username, repo, page, count = new_commits.len(), "fetched commits");
                self.has_more_commits = new_commits.len() == COMMITS_PER_PAGE;
                if page == 1 {
                    self.commits = new_commits;
                } else {
                    self.commits.extend(new_commits);
                }
                self.current_page = page;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }

    /// Fetch one commit's details, overwriting any previous selection.
    pub async fn fetch_commit_details(&mut self, username: &str, repo: &str, sha: &str) {
        self.loading = true;
        self.error = None;

        match self.client.get_commit(username, repo, sha).await {
            Ok(details) => self.selected_commit_details = Some(details),
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }

    // ---------- favorites ----------

    /// Bookmark a commit. A sha that is already bookmarked is a no-op.
    /// Returns whether the favorite was newly added.
    pub fn add_favorite(&mut self, commit: &Commit, repo_name: &str, username: &str) -> bool {
        let favorite = FavoriteCommit::from_commit(commit, repo_name, username);
        if !self.favorites.add(favorite) {
            return false;
        }
        self.persist_favorites();
        true
    }

    /// Remove a bookmark by sha. Removing an absent sha changes nothing and
    /// does not rewrite the file.
    pub fn remove_favorite(&mut self, sha: &str) -> bool {
        if !self.favorites.remove(sha) {
            return false;
        }
        self.persist_favorites();
        true
    }

    fn persist_favorites(&mut self) {
        if let Err(e) = self.favorites_store.save(&self.favorites) {
            tracing::warn!(error = %e, "failed to persist favorites");
            self.error = Some(e.to_string());
        }
    }

    // ---------- direct setters ----------

    /// Select a repository. Selecting a different repository than the current
    /// one also resets the loaded commit pages.
    pub fn set_selected_repo(&mut self, repo: Option<Repository>) {
        let changed = self.selected_repo.as_ref().map(|r| r.id) != repo.as_ref().map(|r| r.id);
        self.selected_repo = repo;
        if changed {
            self.reset_commits();
        }
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Drop loaded commit pages and rewind the pagination cursor.
    pub fn reset_commits(&mut self) {
        self.commits.clear();
        self.current_page = 1;
        self.has_more_commits = true;
    }

    pub fn clear_selected_commit_details(&mut self) {
        self.selected_commit_details = None;
    }
}
