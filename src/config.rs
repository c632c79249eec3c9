//! Centralized configuration management for billflow

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file (local store)
    pub database_path: PathBuf,
    /// Directory where uploaded receipt files are kept (local store)
    pub receipts_dir: PathBuf,
    /// Base URL of the remote bill backend; when unset the CLI falls back
    /// to the local SQLite store
    pub api_base_url: Option<String>,
    /// Bearer token for the remote backend (optional)
    pub api_token: Option<String>,
    /// HTTP client configuration
    pub http: HttpConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: "billflow/0.1.0".to_string(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let database_path = std::env::var("BILLFLOW_DB_PATH")
            .unwrap_or_else(|_| "./billflow.db".to_string())
            .into();

        let receipts_dir = std::env::var("BILLFLOW_RECEIPTS_DIR")
            .unwrap_or_else(|_| "./receipts".to_string())
            .into();

        let api_base_url = std::env::var("BILLFLOW_API_URL").ok();
        let api_token = std::env::var("BILLFLOW_API_TOKEN").ok();

        let http = HttpConfig {
            timeout_seconds: parse_env_var("BILLFLOW_HTTP_TIMEOUT_SECONDS")?.unwrap_or(30),
            user_agent: std::env::var("BILLFLOW_USER_AGENT")
                .unwrap_or_else(|_| "billflow/0.1.0".to_string()),
        };

        Ok(Config {
            database_path,
            receipts_dir,
            api_base_url,
            api_token,
            http,
        })
    }

    /// Get database path as string
    pub fn database_path_str(&self) -> &str {
        self.database_path.to_str().unwrap_or("./billflow.db")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(parent) = self.database_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(anyhow::anyhow!(
                    "Database parent directory does not exist: {}",
                    parent.display()
                ));
            }
        }

        std::fs::create_dir_all(&self.receipts_dir).with_context(|| {
            format!(
                "Cannot create receipts directory: {}",
                self.receipts_dir.display()
            )
        })?;

        Ok(())
    }
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match std::env::var(var_name) {
        Ok(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_env().unwrap();
        assert_eq!(config.database_path_str(), "./billflow.db");
        assert_eq!(config.receipts_dir, PathBuf::from("./receipts"));
        assert!(config.api_base_url.is_none());
        assert_eq!(config.http.timeout_seconds, 30);
    }

    #[test]
    fn test_config_validation() {
        let config = Config::from_env().unwrap();
        // Should not fail for default paths
        config.validate().unwrap();
    }
}
