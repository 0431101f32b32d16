//! minisar — smallest end-to-end demo of the hexsar framework.
//!
//! Generates a handful of hotspots around a fixed center, groups them with a
//! single-link radius clusterer, and searches each cluster with a greedy
//! highest-probability-first path finder.  Scale comment: swap the strategy
//! stubs for real clustering/path-planning models to evaluate them under the
//! same metrics.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use sar_core::{ClusterId, GeoPoint, Point};
use sar_field::ProbabilityField;
use sar_grid::{CellId, HexGrid, SpatialIndex};
use sar_metrics::CsvReport;
use sar_mission::{Mission, MissionConfig};
use sar_strategy::{ClusterFinder, PathFinder, StrategyResult};

// ── Constants ─────────────────────────────────────────────────────────────────

const CENTER: GeoPoint = GeoPoint { lat: 1.3521, lon: 103.8198 };
const SEED:             u64   = 42;
const NUM_HOTSPOTS:     usize = 6;
const NUM_CASUALTIES:   usize = 12;
const STEPS:            usize = 200;
const CLUSTER_RADIUS_M: f64   = 60.0;
const DETECTION_F:      f64   = 0.9;

// ── Cluster finder ────────────────────────────────────────────────────────────

/// Single-link clustering: two hotspots share a cluster when a chain of
/// pairwise distances ≤ `radius_m` connects them.
struct RadiusClusters {
    points:   Vec<Point>,
    radius_m: f64,
}

impl ClusterFinder for RadiusClusters {
    fn fit(&mut self) -> StrategyResult<BTreeMap<ClusterId, Vec<Point>>> {
        let n = self.points.len();
        let mut assigned = vec![false; n];
        let mut clusters = BTreeMap::new();
        let mut next_id = 0u32;

        for i in 0..n {
            if assigned[i] {
                continue;
            }
            assigned[i] = true;
            let mut members = Vec::new();
            let mut queue = vec![i];
            while let Some(j) = queue.pop() {
                members.push(self.points[j]);
                for k in 0..n {
                    if !assigned[k]
                        && self.points[j].coords.distance_m(self.points[k].coords)
                            <= self.radius_m
                    {
                        assigned[k] = true;
                        queue.push(k);
                    }
                }
            }
            clusters.insert(ClusterId(next_id), members);
            next_id += 1;
        }
        Ok(clusters)
    }
}

// ── Path finder ───────────────────────────────────────────────────────────────

/// Walks to the highest-probability cell not yet visited; once the whole
/// domain is exhausted it stays put.
struct GreedyPeak {
    grid:    HexGrid,
    visited: BTreeSet<CellId>,
}

impl PathFinder for GreedyPeak {
    fn next_step(
        &mut self,
        current: GeoPoint,
        field:   &ProbabilityField,
    ) -> StrategyResult<GeoPoint> {
        let best = field
            .iter()
            .filter(|(cell, _)| !self.visited.contains(cell))
            .max_by(|(ca, pa), (cb, pb)| pa.total_cmp(pb).then_with(|| cb.cmp(ca)));
        match best {
            Some((cell, _)) => {
                self.visited.insert(cell);
                Ok(self.grid.to_coordinate(cell))
            }
            None => Ok(current),
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== minisar — hexsar search evaluation ===");
    println!("Hotspots: {NUM_HOTSPOTS}  |  Casualties: {NUM_CASUALTIES}  |  Seed: {SEED}");
    println!();

    // 1. Mission config.
    let mut config = MissionConfig::new(CENTER);
    config.name = Some("minisar".into());
    config.seed = SEED;
    config.num_hotspots = NUM_HOTSPOTS;
    config.num_casualties = NUM_CASUALTIES;
    config.steps = STEPS;
    config.belief_updates = Some(DETECTION_F);
    config.stop_on_full_capture = true;

    // 2. Mission: grid + generated scenario.
    let mut mission = Mission::new(config)?;
    println!(
        "Grid: resolution {} ({:.1} m cells)  |  Area: ±{:.0} m around {}",
        mission.config().resolution,
        mission.grid().spacing_m(),
        mission.config().radius_km * 1_000.0,
        CENTER,
    );
    println!(
        "Scenario: {} hotspots, {} casualty cells",
        mission.scenario().hotspots.len(),
        mission.scenario().casualties.len(),
    );
    println!();

    // 3. Register strategies.
    let hotspots = mission.scenario().hotspots.clone();
    mission.register_cluster_finder(Box::new(RadiusClusters {
        points:   hotspots,
        radius_m: CLUSTER_RADIUS_M,
    }));
    mission.register_path_finder(Box::new(move |res, _centre| {
        let grid = HexGrid::new(CENTER, res).expect("resolution validated by Mission::new");
        Box::new(GreedyPeak { grid, visited: BTreeSet::new() })
    }));

    // 4. Run.
    let t0 = Instant::now();
    let report = mission.run()?;
    let elapsed = t0.elapsed();
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!();

    // 5. CSV export.
    std::fs::create_dir_all("output/minisar")?;
    let mut csv = CsvReport::new(Path::new("output/minisar"))?;
    csv.write_clusters(&report.clusters)?;
    csv.write_summary(&report.aggregate)?;
    csv.finish()?;
    println!("Wrote output/minisar/cluster_metrics.csv and run_summary.csv");
    println!();

    // 6. Per-cluster table.
    println!(
        "{:<10} {:<12} {:<12} {:<13} {:<10}",
        "Cluster", "AvgDist(m)", "StdDist(m)", "Coverage(%)", "Captured"
    );
    println!("{}", "-".repeat(60));
    for (id, m) in &report.clusters {
        match &m.search {
            Some(s) => println!(
                "{:<10} {:<12.2} {:<12.2} {:<13.2} {}/{}",
                id.0,
                m.avg_dist_m,
                m.std_dist_m,
                s.path_coverage_pct,
                s.casualties_captured,
                s.casualties_count,
            ),
            None => println!(
                "{:<10} {:<12.2} {:<12.2} {:<13} {}",
                id.0, m.avg_dist_m, m.std_dist_m, "NA", "NA"
            ),
        }
    }
    println!();

    // 7. Aggregate summary.
    println!("{}", report.aggregate);

    Ok(())
}
