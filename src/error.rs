//! Crate-level error type for the bill workflow.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum Error {
    /// A store operation failed. Transparent so a backend rejection message
    /// (e.g. `Erreur 404`) reaches the caller verbatim.
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid date format: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("invalid session payload: {0}")]
    Session(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Config(err.to_string())
    }
}
