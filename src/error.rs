//! Error types for the MyFantasyLeague API client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, MflError>;

#[derive(Error, Debug)]
pub enum MflError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Authentication failed: {reason}")]
    Authentication { reason: String },

    #[error("Malformed MFL response: missing {path}")]
    MalformedResponse { path: String },

    #[error("Response body is not valid JSON: {0}")]
    InvalidResponseFormat(#[from] serde_json::Error),

    #[error("Failed to render output as JSON: {0}")]
    Render(serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Session is already authenticated")]
    AlreadyAuthenticated,

    #[error("Username and password are required to log in")]
    MissingCredentials,

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid scoring period: {value} (expected a week number, YTD or AVG)")]
    InvalidScoringPeriod { value: String },
}

impl MflError {
    pub(crate) fn malformed(path: impl Into<String>) -> Self {
        MflError::MalformedResponse { path: path.into() }
    }

    pub(crate) fn authentication(reason: impl Into<String>) -> Self {
        MflError::Authentication {
            reason: reason.into(),
        }
    }
}
