//! GitHub API client for the commit explorer.
//!
//! This module talks to the public GitHub REST API (v3) for the three reads
//! the explorer needs: a user's repositories, a repository's paginated commit
//! history, and a single commit with its file-level diff.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for GitHub API operations
//! - [`types`] - Wire data structures (REST v3 shapes)
//! - [`client`] - The client itself and username validation

mod client;
mod error;
mod types;

pub use client::{DEFAULT_API_URL, GitHubClient, validate_username};
pub use error::GitHubError;
pub use types::{
    ApiErrorBody, Commit, CommitAccount, CommitDetails, CommitFile, CommitPayload, CommitStats,
    FileStatus, GitSignature, RepoOwner, Repository,
};
