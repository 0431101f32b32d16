//! Cross-cluster aggregation.

use std::fmt;

use crate::cluster::ClusterMetrics;

/// Running mean that ignores absent samples entirely.
#[derive(Default)]
struct Mean {
    sum:   f64,
    count: usize,
}

impl Mean {
    fn push(&mut self, v: f64) {
        self.sum += v;
        self.count += 1;
    }

    fn push_opt(&mut self, v: Option<f64>) {
        if let Some(v) = v {
            self.push(v);
        }
    }

    /// `None` when no sample was ever pushed — reported as "NA", not 0.
    fn get(&self) -> Option<f64> {
        match self.count {
            0 => None,
            n => Some((self.sum / n as f64 * 100.0).round() / 100.0),
        }
    }
}

/// Aggregate scores over every cluster of one run.
///
/// Each numeric metric is the arithmetic mean over the clusters where it is
/// defined; absent values are excluded from both sum and count.  Captured
/// casualties aggregate as a raw total against the run's casualty count
/// rather than an average.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunMetrics {
    pub clusters: usize,

    pub avg_cluster_dist_m:      Option<f64>,
    pub avg_cluster_std_m:       Option<f64>,
    pub avg_path_coverage_pct:   Option<f64>,
    pub avg_angle_curvature_deg: Option<f64>,
    pub avg_false_negatives:     Option<f64>,
    pub avg_minimum_time_secs:   Option<f64>,

    /// Total attempted casualty cells across all clusters.
    pub casualties_captured: usize,

    /// The whole run's casualty cell count.
    pub casualties_count: usize,

    /// Clusters whose search achieved guaranteed capture.
    pub guaranteed_captures: usize,
}

impl RunMetrics {
    pub fn aggregate<'a, I>(clusters: I, casualties_count: usize) -> Self
    where
        I: IntoIterator<Item = &'a ClusterMetrics>,
    {
        let mut n = 0;
        let mut dist = Mean::default();
        let mut std = Mean::default();
        let mut coverage = Mean::default();
        let mut curvature = Mean::default();
        let mut false_neg = Mean::default();
        let mut min_time = Mean::default();
        let mut captured = 0;
        let mut guaranteed = 0;

        for m in clusters {
            n += 1;
            dist.push(m.avg_dist_m);
            std.push(m.std_dist_m);
            if let Some(s) = &m.search {
                coverage.push(s.path_coverage_pct);
                curvature.push_opt(s.angle_curvature_deg);
                false_neg.push(s.false_negatives as f64);
                min_time.push_opt(s.minimum_time_captured_secs);
                captured += s.casualties_captured;
                if s.guaranteed_capture {
                    guaranteed += 1;
                }
            }
        }

        RunMetrics {
            clusters: n,
            avg_cluster_dist_m:      dist.get(),
            avg_cluster_std_m:       std.get(),
            avg_path_coverage_pct:   coverage.get(),
            avg_angle_curvature_deg: curvature.get(),
            avg_false_negatives:     false_neg.get(),
            avg_minimum_time_secs:   min_time.get(),
            casualties_captured:     captured,
            casualties_count,
            guaranteed_captures:     guaranteed,
        }
    }
}

impl fmt::Display for RunMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn na(v: Option<f64>) -> String {
            v.map_or_else(|| "NA".into(), |v| format!("{v:.2}"))
        }

        writeln!(f, "clusters: {}", self.clusters)?;
        writeln!(f, "average cluster distance:   {} m", na(self.avg_cluster_dist_m))?;
        writeln!(f, "average cluster std dev:    {} m", na(self.avg_cluster_std_m))?;
        writeln!(f, "average path coverage:      {} %", na(self.avg_path_coverage_pct))?;
        writeln!(f, "average angle curvature:    {} °", na(self.avg_angle_curvature_deg))?;
        writeln!(f, "average false negatives:    {}", na(self.avg_false_negatives))?;
        writeln!(f, "average time to capture:    {} s", na(self.avg_minimum_time_secs))?;
        writeln!(
            f,
            "casualties captured:        {}/{}",
            self.casualties_captured, self.casualties_count
        )?;
        write!(f, "guaranteed captures:        {}", self.guaranteed_captures)
    }
}
