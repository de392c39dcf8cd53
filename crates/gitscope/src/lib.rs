//! gitscope - a GitHub repository and commit explorer.
//!
//! This library holds everything except the rendering surface: the HTTP
//! transport seam, the GitHub API client, the explorer state store, and the
//! locally persisted favorites list.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use gitscope::github::GitHubClient;
//! use gitscope::store::{ExplorerStore, FavoritesStore};
//!
//! let client = Arc::new(GitHubClient::new(transport, None));
//! let mut store = ExplorerStore::new(client, FavoritesStore::new(path));
//!
//! store.fetch_repositories("octocat").await;
//! for repo in store.repositories() {
//!     println!("{}", repo.name);
//! }
//! ```

pub mod github;
pub mod http;
pub mod store;

pub use github::{GitHubClient, GitHubError, validate_username};
pub use store::{ExplorerStore, FavoriteCommit, FavoritesStore, SortOrder};
