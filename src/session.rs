//! Authenticated user identity, passed to the components explicitly.
//!
//! The hosting layer keeps a JSON value under its `"user"` session key; it
//! parses that value once at construction time and hands the result to the
//! components instead of letting them read ambient storage.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Owning user's address, attached to every bill the user creates.
    /// Defaults to empty when the session value only carries a type.
    #[serde(default)]
    pub email: String,
    #[serde(rename = "type", default)]
    pub user_type: Option<String>,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        User {
            email: email.into(),
            user_type: Some("Employee".to_string()),
        }
    }

    /// Parse the JSON value stored under the host's `"user"` session key.
    pub fn from_session(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
