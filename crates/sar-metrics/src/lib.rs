//! `sar-metrics` — scoring for completed search runs.
//!
//! Metrics are structured values returned to the caller; formatting is a
//! presentation concern handled by the `Display` impls, and file output by
//! the CSV report.  A metric whose defining quantity never occurred is an
//! explicit `None` ("not available"), never a spurious zero.
//!
//! | Module      | Contents                                       |
//! |-------------|------------------------------------------------|
//! | [`cluster`] | `ClusterMetrics`, `SearchMetrics`, evaluators  |
//! | [`run`]     | `RunMetrics` — cross-cluster aggregation       |
//! | [`csv`]     | `CsvReport` — file export                      |
//! | [`error`]   | `MetricsError`, `MetricsResult<T>`             |

pub mod cluster;
pub mod csv;
pub mod error;
pub mod run;

#[cfg(test)]
mod tests;

pub use cluster::{ClusterMetrics, SearchMetrics, evaluate_cluster, evaluate_search};
pub use csv::CsvReport;
pub use error::{MetricsError, MetricsResult};
pub use run::RunMetrics;
