//! ClickHouse HTTP client

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::clickhouse::error::{ClientError, ClientResult};
use crate::clickhouse::response::TabularResponse;
use crate::clickhouse::SqlExecutor;
use crate::config::DatasourceConfig;

/// HTTP client for the ClickHouse endpoint. Queries go out as GET requests
/// with the SQL in the `query` parameter, suffixed with `FORMAT JSON` so
/// the server returns structured rows.
pub struct ClickhouseClient {
    client: Client,
    config: DatasourceConfig,
}

impl ClickhouseClient {
    /// Create a new client with the given datasource configuration
    pub fn new(config: DatasourceConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &DatasourceConfig {
        &self.config
    }

    /// Query parameters for one request: the suffixed SQL, plus basic-auth
    /// credentials when the datasource carries them.
    fn query_params(&self, sql: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![("query", format!("{} FORMAT JSON", sql))];

        if self.config.basic_auth {
            params.push(("user", self.config.username.clone()));
            params.push(("password", self.config.password.clone()));
        }

        params
    }
}

#[async_trait]
impl SqlExecutor for ClickhouseClient {
    async fn execute(&self, sql: &str) -> ClientResult<TabularResponse> {
        debug!(url = %self.config.url, sql, "executing query");

        let response = self
            .client
            .get(&self.config.url)
            .query(&self.query_params(sql))
            .send()
            .await?;

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ClientError::MalformedResponse(format!("{}: {}", e, body)))
    }
}
