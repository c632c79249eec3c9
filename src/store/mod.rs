//! The store abstraction over the remote bill data source.
//!
//! The workflow components only ever see [`BillStore`]; the concrete
//! backends (HTTP, SQLite) live in submodules and the test suite plugs in
//! a programmable mock.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Bill, BillDraft};

pub mod remote;
pub mod sqlite;

pub use remote::RemoteStore;
pub use sqlite::SqliteStore;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend rejected the call; displays the backend's message
    /// verbatim so it survives propagation unchanged.
    #[error("{0}")]
    Rejected(String),

    #[error("bill {0} not found")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A receipt file captured from the host's file input.
#[derive(Debug, Clone)]
pub struct ReceiptUpload {
    /// Session email of the submitting user.
    pub email: String,
    pub file_name: String,
    pub content: Vec<u8>,
}

/// Reference returned by the store once a receipt upload created a draft
/// bill record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftReceipt {
    pub id: String,
    pub file_url: String,
    pub file_name: String,
}

/// Operations on the `bills` resource.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Fetch every bill visible to the authenticated user.
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;

    /// Upload a receipt file and create a draft bill in `pending` status.
    async fn create(&self, upload: ReceiptUpload) -> Result<DraftReceipt, StoreError>;

    /// Finalize a previously created bill. The selector is optional on the
    /// wire; backends reject a missing one rather than guessing.
    async fn update(&self, id: Option<&str>, draft: &BillDraft) -> Result<Bill, StoreError>;
}
