//! Query Orchestrator
//!
//! Runs a batch of panel queries against one shared time range: template
//! the SQL, hand it to the execution collaborator, pivot the tabular result
//! into series. Queries are independent futures joined concurrently; each
//! one's failure is captured in its own slot of the batch response and
//! never aborts a sibling. The wall-clock anchor is captured once per batch
//! so every query sees the same window.

use chrono::Utc;
use futures_util::future::join_all;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::clickhouse::{ClientError, SqlExecutor};
use crate::model::{QueryResult, QuerySpec, TimeSeries, FORMAT_TIME_SERIES};
use crate::template::{self, TemplateError};
use crate::time_range::TimeRange;
use crate::transform::{pivot, TransformError};

/// Everything that can fail one query in a batch
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Cannot get raw query: {0}")]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Batch runner, generic over the execution seam so transports can be
/// swapped (or stubbed) without touching the pipeline.
pub struct QueryOrchestrator<E> {
    executor: E,
}

impl<E: SqlExecutor> QueryOrchestrator<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Run a batch of queries, anchored at the current wall clock.
    pub async fn run_batch(&self, queries: &[QuerySpec], range: &TimeRange) -> Vec<QueryResult> {
        self.run_batch_at(queries, range, Utc::now().timestamp())
            .await
    }

    /// Run a batch anchored at an explicit instant (epoch seconds). The
    /// anchor is shared by every query so the whole batch is
    /// time-consistent.
    pub async fn run_batch_at(
        &self,
        queries: &[QuerySpec],
        range: &TimeRange,
        now: i64,
    ) -> Vec<QueryResult> {
        join_all(queries.iter().map(|spec| self.run_one(spec, range, now))).await
    }

    async fn run_one(&self, spec: &QuerySpec, range: &TimeRange, now: i64) -> QueryResult {
        match self.execute_query(spec, range, now).await {
            Ok(series) => QueryResult::series(&spec.ref_id, series),
            Err(e) => {
                match &e {
                    QueryError::Template(_) => {
                        info!(ref_id = %spec.ref_id, model = ?spec, error = %e, "cannot build query")
                    }
                    QueryError::Client(_) => {
                        warn!(ref_id = %spec.ref_id, error = %e, "query execution failed")
                    }
                    _ => debug!(ref_id = %spec.ref_id, error = %e, "query failed"),
                }
                QueryResult::error(&spec.ref_id, e.to_string())
            }
        }
    }

    async fn execute_query(
        &self,
        spec: &QuerySpec,
        range: &TimeRange,
        now: i64,
    ) -> Result<Vec<TimeSeries>, QueryError> {
        let sql = template::substitute(spec, range, now)?;
        let table = self.executor.execute(&sql).await?;

        match spec.format() {
            FORMAT_TIME_SERIES => Ok(pivot(&table, Some(&range.resolve(now)))?),
            other => Err(QueryError::UnsupportedFormat(other.to_string())),
        }
    }
}
