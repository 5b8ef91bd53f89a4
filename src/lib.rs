//! # Chartsql
//!
//! Dashboard query engine for ClickHouse: turns a user-written SQL template
//! plus structured panel metadata into an executable query, runs it over
//! the ClickHouse HTTP interface, and reshapes the tabular result into
//! named time series suitable for charting.
//!
//! ## Modules
//!
//! - [`interval`]: interval expression resolution ("5m" -> 300 seconds)
//! - [`time_range`]: relative time-range normalization
//! - [`template`]: macro substitution over the raw SQL template
//! - [`transform`]: tabular-to-timeseries pivot
//! - [`clickhouse`]: HTTP transport and `FORMAT JSON` response types
//! - [`executor`]: batch orchestration with per-query error capture
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chartsql::{
//!     ClickhouseClient, DatasourceConfig, QueryOrchestrator, QuerySpec, TimeRange,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ClickhouseClient::new(DatasourceConfig::default());
//!     let orchestrator = QueryOrchestrator::new(client);
//!
//!     let spec: QuerySpec = serde_json::from_str(
//!         r#"{
//!             "refId": "A",
//!             "query": "SELECT $timeSeries as t, count() FROM $table WHERE $timeFilter GROUP BY t ORDER BY t",
//!             "table": "requests",
//!             "dateTimeColDataType": "event_time",
//!             "interval": "5m"
//!         }"#,
//!     )
//!     .unwrap();
//!
//!     let range = TimeRange::new("6h", "now");
//!     let results = orchestrator.run_batch(&[spec], &range).await;
//!
//!     for result in results {
//!         match result.error {
//!             Some(e) => eprintln!("{}: {}", result.ref_id, e),
//!             None => println!("{}: {} series", result.ref_id, result.series.len()),
//!         }
//!     }
//! }
//! ```

pub mod clickhouse;
pub mod config;
pub mod executor;
pub mod interval;
pub mod model;
pub mod template;
pub mod time_range;
pub mod transform;

// Re-export top-level types for convenience
pub use clickhouse::{ClickhouseClient, ClientError, ColumnMeta, SqlExecutor, TabularResponse};
pub use config::DatasourceConfig;
pub use executor::{QueryError, QueryOrchestrator};
pub use interval::{effective_interval, interval_to_seconds};
pub use model::{QueryResult, QuerySpec, TimePoint, TimeSeries};
pub use template::{substitute, TemplateError, TimeColumn};
pub use time_range::{ResolvedTimeRange, TimeRange};
pub use transform::{pivot, TransformError};
