//! Error types for session loading and calendar generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting sessions to calendars.
#[derive(Error, Debug)]
pub enum SessionsError {
    #[error("Failed to access {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Followed session '{0}' not found in the session catalog")]
    UnknownSession(String),

    #[error("Timestamp {0} is outside the supported date range")]
    InvalidTimestamp(i64),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),
}

impl SessionsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SessionsError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for session conversion.
pub type SessionsResult<T> = Result<T, SessionsError>;
