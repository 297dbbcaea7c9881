use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComicError {
    #[error("date {date} is before the epoch {epoch}")]
    BeforeEpoch {
        date: chrono::NaiveDate,
        epoch: chrono::NaiveDate,
    },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected http status: {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid or unexpected response format")]
    InvalidResponse,

    #[error("invalid comic number: {0:?}")]
    InvalidNumber(String),

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not find the table separator in {path}")]
    MissingSeparator { path: PathBuf },
}

impl ComicError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ComicError::Io {
            path: path.into(),
            source,
        }
    }

    /// HTTP status that caused the failure, if any.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ComicError::Status(status) => Some(*status),
            _ => None,
        }
    }
}
