//! Per-cluster metric rows and their evaluators.

use std::collections::BTreeSet;
use std::fmt;

use sar_core::{GeoPoint, Point};
use sar_field::ProbabilityField;
use sar_grid::CellId;
use sar_sim::SearchOutput;

/// Round to 2 decimal places — the reporting precision for all metrics.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// ── Metric rows ───────────────────────────────────────────────────────────────

/// Search-phase scores for one cluster.  Absent when the cluster was scored
/// without a search (clustering-only runs, collapsed fields).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchMetrics {
    /// Visited share of the field's domain, in percent ∈ [0, 100].
    pub path_coverage_pct: f64,

    /// Mean turn angle per interior trajectory point, degrees.  Undefined
    /// for trajectories shorter than 3 steps.
    pub angle_curvature_deg: Option<f64>,

    /// Casualty cells with at least one detection attempt.
    pub casualties_captured: usize,

    /// Total casualty cells in this cluster's scenario.
    pub casualties_count: usize,

    /// Attempted casualty cells whose detections all failed so far.
    pub false_negatives: usize,

    /// Every casualty cell attempted and every attempt confirmed.
    pub guaranteed_capture: bool,

    /// Wall-clock seconds until the ledger first covered every casualty
    /// cell; `None` if full coverage was never reached.
    pub minimum_time_captured_secs: Option<f64>,
}

/// Scores for one cluster: spatial tightness plus optional search results.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterMetrics {
    /// Mean haversine distance (meters) from members to the centroid.
    pub avg_dist_m: f64,

    /// Population standard deviation of those distances; 0 for a singleton.
    pub std_dist_m: f64,

    pub search: Option<SearchMetrics>,
}

// ── Evaluators ────────────────────────────────────────────────────────────────

/// Distance statistics of a cluster about its centroid.
///
/// An empty cluster scores zero distances rather than NaN; centroid
/// computation upstream already rejects empty clusters, so this only
/// matters for direct callers.
pub fn evaluate_cluster(cluster: &[Point], centre: GeoPoint) -> ClusterMetrics {
    if cluster.is_empty() {
        return ClusterMetrics { avg_dist_m: 0.0, std_dist_m: 0.0, search: None };
    }

    let distances: Vec<f64> = cluster
        .iter()
        .map(|p| p.coords.distance_m(centre))
        .collect();

    let n = distances.len() as f64;
    let mean = distances.iter().sum::<f64>() / n;
    let std = if distances.len() > 1 {
        (distances.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n).sqrt()
    } else {
        0.0
    };

    ClusterMetrics {
        avg_dist_m: round2(mean),
        std_dist_m: round2(std),
        search:     None,
    }
}

/// Score a completed search against its field domain and casualty set.
pub fn evaluate_search(
    field:      &ProbabilityField,
    casualties: &BTreeSet<CellId>,
    output:     &SearchOutput,
) -> SearchMetrics {
    let visited: BTreeSet<CellId> = output.trajectory.iter().map(|s| s.cell).collect();
    let covered = visited.iter().filter(|&&cell| field.contains(cell)).count();
    let path_coverage_pct = if field.len() == 0 {
        0.0
    } else {
        round2(covered as f64 / field.len() as f64 * 100.0)
    };

    let angle_curvature_deg = match output.trajectory.len() {
        len if len >= 3 => Some(round2(output.accumulated_angle / (len - 2) as f64)),
        _ => None,
    };

    let casualties_captured = output.ledger.len();
    let false_negatives = output.ledger.false_negatives();

    SearchMetrics {
        path_coverage_pct,
        angle_curvature_deg,
        casualties_captured,
        casualties_count: casualties.len(),
        false_negatives,
        guaranteed_capture: false_negatives == 0 && casualties_captured == casualties.len(),
        minimum_time_captured_secs: output.time_to_full_capture.map(round2),
    }
}

// ── Presentation ──────────────────────────────────────────────────────────────

impl fmt::Display for ClusterMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cluster distance avg {:.2} m, std {:.2} m",
            self.avg_dist_m, self.std_dist_m
        )?;
        let Some(s) = &self.search else {
            return Ok(());
        };
        write!(
            f,
            "; coverage {:.2}%, captured {}/{}",
            s.path_coverage_pct, s.casualties_captured, s.casualties_count
        )?;
        match s.angle_curvature_deg {
            Some(a) => write!(f, ", curvature {a:.2}°")?,
            None    => write!(f, ", curvature NA")?,
        }
        if s.false_negatives > 0 {
            write!(f, ", {} false negatives", s.false_negatives)?;
        }
        if s.guaranteed_capture {
            write!(f, ", guaranteed capture")?;
        }
        Ok(())
    }
}
