//! CSV export backend.
//!
//! Creates two files in the configured output directory:
//! - `cluster_metrics.csv` — one row per cluster
//! - `run_summary.csv` — one aggregate row
//!
//! Absent metrics are written as the literal `NA` so downstream tooling can
//! tell "never occurred" apart from zero.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use csv::Writer;
use sar_core::ClusterId;

use crate::cluster::ClusterMetrics;
use crate::error::MetricsResult;
use crate::run::RunMetrics;

fn na(v: Option<f64>) -> String {
    v.map_or_else(|| "NA".into(), |v| v.to_string())
}

/// Writes run metrics to CSV files.
pub struct CsvReport {
    clusters: Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvReport {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> MetricsResult<Self> {
        let mut clusters = Writer::from_path(dir.join("cluster_metrics.csv"))?;
        clusters.write_record([
            "cluster_id",
            "avg_dist_m",
            "std_dist_m",
            "path_coverage_pct",
            "angle_curvature_deg",
            "casualties_captured",
            "casualties_count",
            "false_negatives",
            "guaranteed_capture",
            "minimum_time_captured_secs",
        ])?;

        let mut summary = Writer::from_path(dir.join("run_summary.csv"))?;
        summary.write_record([
            "clusters",
            "avg_cluster_dist_m",
            "avg_cluster_std_m",
            "avg_path_coverage_pct",
            "avg_angle_curvature_deg",
            "avg_false_negatives",
            "avg_minimum_time_secs",
            "casualties_captured",
            "casualties_count",
            "guaranteed_captures",
        ])?;

        Ok(Self {
            clusters,
            summary,
            finished: false,
        })
    }

    /// Write one row per cluster, in cluster-ID order.
    pub fn write_clusters(
        &mut self,
        metrics: &BTreeMap<ClusterId, ClusterMetrics>,
    ) -> MetricsResult<()> {
        for (id, m) in metrics {
            let (coverage, curvature, captured, count, false_neg, guaranteed, min_time) =
                match &m.search {
                    Some(s) => (
                        s.path_coverage_pct.to_string(),
                        na(s.angle_curvature_deg),
                        s.casualties_captured.to_string(),
                        s.casualties_count.to_string(),
                        s.false_negatives.to_string(),
                        s.guaranteed_capture.to_string(),
                        na(s.minimum_time_captured_secs),
                    ),
                    None => (
                        "NA".into(),
                        "NA".into(),
                        "NA".into(),
                        "NA".into(),
                        "NA".into(),
                        "NA".into(),
                        "NA".into(),
                    ),
                };

            self.clusters.write_record(&[
                id.0.to_string(),
                m.avg_dist_m.to_string(),
                m.std_dist_m.to_string(),
                coverage,
                curvature,
                captured,
                count,
                false_neg,
                guaranteed,
                min_time,
            ])?;
        }
        Ok(())
    }

    /// Write the single aggregate row.
    pub fn write_summary(&mut self, run: &RunMetrics) -> MetricsResult<()> {
        self.summary.write_record(&[
            run.clusters.to_string(),
            na(run.avg_cluster_dist_m),
            na(run.avg_cluster_std_m),
            na(run.avg_path_coverage_pct),
            na(run.avg_angle_curvature_deg),
            na(run.avg_false_negatives),
            na(run.avg_minimum_time_secs),
            run.casualties_captured.to_string(),
            run.casualties_count.to_string(),
            run.guaranteed_captures.to_string(),
        ])?;
        Ok(())
    }

    /// Flush both files.
    ///
    /// Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> MetricsResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.clusters.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
