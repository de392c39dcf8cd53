//! GitHub API client and username validation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use super::error::GitHubError;
use super::types::{ApiErrorBody, Commit, CommitDetails, Repository};
use crate::http::{HttpHeaders, HttpRequest, HttpTransport, header_get};

/// Base URL of the public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = "gitscope";

/// Maximum length of a GitHub login.
const MAX_USERNAME_LEN: usize = 39;

/// Validate a GitHub username before issuing any request.
///
/// GitHub logins are 1-39 characters of alphanumerics and hyphens, where a
/// hyphen may not lead, trail, or repeat.
pub fn validate_username(username: &str) -> Result<(), GitHubError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(GitHubError::InvalidUsername(
            "username is required".to_string(),
        ));
    }
    if username.len() > MAX_USERNAME_LEN {
        return Err(GitHubError::InvalidUsername(format!(
            "'{username}' is longer than {MAX_USERNAME_LEN} characters"
        )));
    }
    if username.starts_with('-') || username.ends_with('-') || username.contains("--") {
        return Err(GitHubError::InvalidUsername(format!(
            "'{username}' has a misplaced hyphen"
        )));
    }
    if let Some(bad) = username.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
        return Err(GitHubError::InvalidUsername(format!(
            "'{username}' contains '{bad}'"
        )));
    }
    Ok(())
}

/// Client for the GitHub REST API.
///
/// Each operation performs exactly one HTTP GET and maps non-2xx statuses to
/// typed errors. No retries, no backoff, no caching.
#[derive(Clone)]
pub struct GitHubClient {
    base_url: String,
    token: Option<String>,
    transport: Arc<dyn HttpTransport>,
}

impl GitHubClient {
    /// Create a client against the public API.
    ///
    /// A token is optional; unauthenticated requests are fine for public
    /// data, just with a much lower rate limit.
    pub fn new(transport: Arc<dyn HttpTransport>, token: Option<String>) -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            token,
            transport,
        }
    }

    /// Point the client at a different API base URL (e.g. GitHub Enterprise).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// List a user's repositories.
    pub async fn list_user_repos(&self, username: &str) -> Result<Vec<Repository>, GitHubError> {
        self.get_json(&format!("/users/{username}/repos?per_page=100"))
            .await
    }

    /// List one page of a repository's commit history.
    pub async fn list_commits(
        &self,
        username: &str,
        repo: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Commit>, GitHubError> {
        self.get_json(&format!(
            "/repos/{username}/{repo}/commits?page={page}&per_page={per_page}"
        ))
        .await
    }

    /// Fetch a single commit with its file-level diff.
    pub async fn get_commit(
        &self,
        username: &str,
        repo: &str,
        sha: &str,
    ) -> Result<CommitDetails, GitHubError> {
        self.get_json(&format!("/repos/{username}/{repo}/commits/{sha}"))
            .await
    }

    fn request_headers(&self) -> HttpHeaders {
        let mut headers: HttpHeaders = vec![
            ("Accept".to_string(), "application/vnd.github+json".to_string()),
            ("User-Agent".to_string(), USER_AGENT.to_string()),
        ];
        if let Some(token) = &self.token {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        headers
    }

    /// One GET, JSON-decoded on 2xx, status-mapped otherwise.
    async fn get_json<T: DeserializeOwned>(&self, route: &str) -> Result<T, GitHubError> {
        let url = format!("{}{}", self.base_url, route);
        tracing::debug!(%url, "GitHub API request");

        let response = self
            .transport
            .get(HttpRequest {
                url,
                headers: self.request_headers(),
            })
            .await
            .map_err(|e| GitHubError::Network(e.to_string()))?;

        match response.status {
            200..=299 => serde_json::from_slice(&response.body)
                .map_err(|e| GitHubError::Decode(e.to_string())),
            404 => Err(GitHubError::NotFound),
            403 => Err(GitHubError::RateLimited {
                reset_at: parse_rate_limit_reset(&response.headers),
            }),
            status => {
                let message = serde_json::from_slice::<ApiErrorBody>(&response.body)
                    .ok()
                    .map(|body| body.message)
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| format!("API error: {status}"));
                tracing::debug!(status, %message, "GitHub API error response");
                Err(GitHubError::Api { status, message })
            }
        }
    }
}

/// Extract the reset time from GitHub's `x-ratelimit-reset` header.
fn parse_rate_limit_reset(headers: &HttpHeaders) -> Option<DateTime<Utc>> {
    header_get(headers, "x-ratelimit-reset")
        .and_then(|v| v.parse::<i64>().ok())
        .and_then(|epoch| DateTime::from_timestamp(epoch, 0))
}
