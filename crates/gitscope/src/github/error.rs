//! GitHub API error types.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur when interacting with the GitHub API.
///
/// The `Display` strings double as the user-visible messages the explorer
/// surfaces, so they are phrased for people rather than logs.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// The user or repository does not exist (HTTP 404).
    #[error("User or repository not found")]
    NotFound,

    /// Rate limit exceeded (HTTP 403).
    #[error("API rate limit exceeded. Please try again later.")]
    RateLimited {
        /// When the limit resets, if the server sent `x-ratelimit-reset`.
        reset_at: Option<DateTime<Utc>>,
    },

    /// Any other non-2xx response, carrying the server-provided message.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx response whose body did not parse as the expected shape.
    #[error("Failed to decode API response: {0}")]
    Decode(String),

    /// Client-side username format check failed; no request was issued.
    #[error("Invalid username: {0}")]
    InvalidUsername(String),
}

impl GitHubError {
    /// Check if this error is a rate limit error.
    #[inline]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Check if this error was raised before any request went out.
    #[inline]
    pub fn is_client_side(&self) -> bool {
        matches!(self, Self::InvalidUsername(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_is_user_facing() {
        assert_eq!(
            GitHubError::NotFound.to_string(),
            "User or repository not found"
        );
    }

    #[test]
    fn rate_limited_message_does_not_leak_the_reset_timestamp() {
        let err = GitHubError::RateLimited {
            reset_at: Some(Utc::now()),
        };
        assert_eq!(
            err.to_string(),
            "API rate limit exceeded. Please try again later."
        );
        assert!(err.is_rate_limited());
    }

    #[test]
    fn api_error_passes_through_the_server_message() {
        let err = GitHubError::Api {
            status: 422,
            message: "Validation Failed".to_string(),
        };
        assert_eq!(err.to_string(), "Validation Failed");
        assert!(!err.is_rate_limited());
    }

    #[test]
    fn invalid_username_is_client_side() {
        let err = GitHubError::InvalidUsername("username is required".to_string());
        assert!(err.is_client_side());
        assert!(!GitHubError::NotFound.is_client_side());
    }
}
