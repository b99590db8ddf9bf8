//! Error types for the Yahoo Fantasy Football lineup CLI

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, LineupError>;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("League key not provided and {env_var} environment variable not set")]
    MissingLeagueKey { env_var: String },

    #[error("Team key not provided and {env_var} environment variable not set")]
    MissingTeamKey { env_var: String },

    #[error("Access token missing: set the {env_var} environment variable")]
    MissingAccessToken { env_var: String },

    #[error("Invalid {kind} key: {value:?}")]
    InvalidKey { kind: &'static str, value: String },

    #[error("Team {team_key} does not belong to league {league_key}")]
    LeagueMismatch { league_key: String, team_key: String },

    #[error("Could not read {collection} from provider response: {detail}")]
    Parse { collection: String, detail: String },
}

impl LineupError {
    /// Build a parse failure for a collection that could not be resolved at all.
    pub fn parse(collection: impl Into<String>, detail: impl Into<String>) -> Self {
        LineupError::Parse {
            collection: collection.into(),
            detail: detail.into(),
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            LineupError::Http(_) => "http_error",
            LineupError::Json(_) => "json_error",
            LineupError::Io(_) => "io_error",
            LineupError::InvalidHeader(_) => "invalid_header",
            LineupError::MissingLeagueKey { .. }
            | LineupError::MissingTeamKey { .. }
            | LineupError::MissingAccessToken { .. }
            | LineupError::InvalidKey { .. }
            | LineupError::LeagueMismatch { .. } => "config_error",
            LineupError::Parse { .. } => "parse_error",
        }
    }

    /// Short, actionable message for people rather than logs.
    pub fn user_message(&self) -> String {
        match self {
            LineupError::Parse { collection, .. } => {
                format!("Could not read {} data from Yahoo.", collection)
            }
            LineupError::Http(_) => "Could not reach the Yahoo Fantasy API.".to_string(),
            LineupError::MissingAccessToken { env_var } => {
                format!("Sign in to Yahoo and export the token as {}.", env_var)
            }
            other => other.to_string(),
        }
    }
}

/// JSON body emitted for failures when `--json` output is requested.
#[derive(Debug, serde::Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: &'static str,
    pub detail: String,
}

impl From<&LineupError> for ErrorBody {
    fn from(err: &LineupError) -> Self {
        ErrorBody {
            error: err.code(),
            detail: err.to_string(),
        }
    }
}
