//! Datasource Configuration
//!
//! Connection settings for the ClickHouse HTTP endpoint. Credentials are
//! carried here already materialized; storing or decrypting them is the
//! host's concern.

use serde::Deserialize;

/// ClickHouse datasource configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatasourceConfig {
    /// Base URL of the ClickHouse HTTP interface
    #[serde(default = "default_url")]
    pub url: String,

    /// Attach `user`/`password` query parameters to every request
    #[serde(default)]
    pub basic_auth: bool,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

fn default_url() -> String {
    "http://localhost:8123".to_string()
}

fn default_timeout() -> u64 {
    30_000
}

impl Default for DatasourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            basic_auth: false,
            username: String::new(),
            password: String::new(),
            timeout_ms: default_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DatasourceConfig::default();
        assert_eq!(config.url, "http://localhost:8123");
        assert!(!config.basic_auth);
        assert_eq!(config.timeout_ms, 30_000);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: DatasourceConfig = serde_json::from_str(
            r#"{"url": "http://ch.internal:8123", "basic_auth": true, "username": "reader"}"#,
        )
        .unwrap();
        assert_eq!(config.url, "http://ch.internal:8123");
        assert!(config.basic_auth);
        assert_eq!(config.username, "reader");
        assert_eq!(config.timeout_ms, 30_000);
    }
}
