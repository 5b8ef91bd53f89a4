//! ClickHouse Execution Collaborator
//!
//! The transport seam between the query engine and the database: a small
//! HTTP client that sends a generated SQL string via GET with a
//! `FORMAT JSON` suffix and deserializes the tabular JSON body. The
//! `SqlExecutor` trait is the seam itself, so the orchestrator can run
//! against anything that yields a `TabularResponse` (the unit tests stub
//! it).

mod client;
mod error;
mod response;

pub use client::ClickhouseClient;
pub use error::{ClientError, ClientResult};
pub use response::{ColumnMeta, TabularResponse};

use async_trait::async_trait;

/// Execution seam: run one SQL statement and return its tabular result.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    async fn execute(&self, sql: &str) -> ClientResult<TabularResponse>;
}
