//! Error types for the BR agent tools

use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, BrError>;

#[derive(Error, Debug)]
pub enum BrError {
    #[error("Failed to load BR keys from {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("BR API error: {status}")]
    Api { status: String },

    #[error("Malformed BR API response: {message}")]
    MalformedResponse { message: String },

    #[error("Player {player} is missing required field `{field}`")]
    MissingPlayerField { player: String, field: &'static str },

    #[error("Player {player} has a non-numeric `{field}`: {value}")]
    InvalidPlayerField {
        player: String,
        field: &'static str,
        value: String,
    },

    #[error("Failed to parse team ID: {0}")]
    InvalidTeamId(#[from] std::num::ParseIntError),

    #[error("Invalid arguments for tool {tool}: {message}")]
    InvalidToolArgs { tool: String, message: String },

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification used by callers deciding how to report a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Secrets file missing, unreadable or incomplete.
    Configuration,
    /// Network failure or non-success HTTP status.
    Transport,
    /// Well-formed HTTP exchange, but the envelope was rejected.
    Api,
    /// A mandatory player field could not be coerced.
    Normalization,
    /// Bad input from the caller (tool arguments, team ids).
    Usage,
}

impl BrError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BrError::Config { .. } => ErrorKind::Configuration,
            BrError::Http(_) => ErrorKind::Transport,
            BrError::Api { .. } | BrError::MalformedResponse { .. } => ErrorKind::Api,
            BrError::MissingPlayerField { .. } | BrError::InvalidPlayerField { .. } => {
                ErrorKind::Normalization
            }
            BrError::InvalidTeamId(_)
            | BrError::InvalidToolArgs { .. }
            | BrError::UnknownTool { .. }
            | BrError::Json(_) => ErrorKind::Usage,
        }
    }

    pub(crate) fn config(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        BrError::Config {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        BrError::MalformedResponse {
            message: message.into(),
        }
    }
}
