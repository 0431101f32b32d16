//! Unit tests for metric evaluation, aggregation, and CSV export.

#[cfg(test)]
mod cluster {
    use std::collections::BTreeSet;

    use sar_core::{GeoPoint, HotspotId, Point, spherical_centroid};
    use sar_field::ProbabilityField;
    use sar_grid::{HexGrid, SpatialIndex};
    use sar_sim::{DetectionLedger, SearchOutput, SimulationStep};

    use crate::{evaluate_cluster, evaluate_search};

    const ORIGIN: GeoPoint = GeoPoint { lat: 1.3521, lon: 103.8198 };

    fn grid() -> HexGrid {
        HexGrid::new(ORIGIN, 13).unwrap()
    }

    #[test]
    fn tight_cluster_has_small_distances() {
        // Four points on a ~22 m square: all within 50 m of each other.
        let coords = [
            (ORIGIN.lat + 0.0001, ORIGIN.lon + 0.0001),
            (ORIGIN.lat + 0.0001, ORIGIN.lon - 0.0001),
            (ORIGIN.lat - 0.0001, ORIGIN.lon + 0.0001),
            (ORIGIN.lat - 0.0001, ORIGIN.lon - 0.0001),
        ];
        let cluster: Vec<Point> = coords
            .iter()
            .enumerate()
            .map(|(i, &(lat, lon))| {
                Point::new(HotspotId(i as u32), GeoPoint::new(lat, lon))
            })
            .collect();

        let centre =
            spherical_centroid(&cluster.iter().map(|p| p.coords).collect::<Vec<_>>()).unwrap();
        let m = evaluate_cluster(&cluster, centre);

        assert!(m.avg_dist_m < 50.0, "avg {}", m.avg_dist_m);
        assert!(m.std_dist_m < 1.0, "std {}", m.std_dist_m);
        assert!(m.search.is_none());
    }

    #[test]
    fn empty_cluster_scores_zero_not_nan() {
        let m = evaluate_cluster(&[], ORIGIN);
        assert_eq!(m.avg_dist_m, 0.0);
        assert_eq!(m.std_dist_m, 0.0);
        assert!(m.search.is_none());
    }

    #[test]
    fn singleton_cluster_has_zero_std() {
        let p = Point::new(HotspotId(0), ORIGIN);
        let m = evaluate_cluster(&[p], ORIGIN);
        assert_eq!(m.avg_dist_m, 0.0);
        assert_eq!(m.std_dist_m, 0.0);
    }

    #[test]
    fn coverage_counts_domain_cells_only() {
        let g = grid();
        let c = g.to_cell(ORIGIN);
        let mut field = ProbabilityField::initialize(&g, c, 2); // 19 cells
        field.inject_hotspot(&g, c, 0.03, 100).unwrap();

        // Visit the center plus its 6 neighbors, plus one far off-domain cell.
        let mut cells: Vec<_> = g.k_ring(c, 1);
        cells.push(g.to_cell(GeoPoint::new(1.4521, 103.8198)));
        let trajectory: Vec<SimulationStep> = cells
            .into_iter()
            .enumerate()
            .map(|(step, cell)| SimulationStep { cell, step })
            .collect();

        let output = SearchOutput {
            trajectory,
            ledger: DetectionLedger::default(),
            time_to_full_capture: None,
            accumulated_angle: 0.0,
        };
        let m = evaluate_search(&field, &BTreeSet::new(), &output);

        // 7 of 19 cells → 36.84 %.
        assert_eq!(m.path_coverage_pct, 36.84);
        assert!((0.0..=100.0).contains(&m.path_coverage_pct));
    }

    #[test]
    fn curvature_undefined_for_short_trajectories() {
        let g = grid();
        let c = g.to_cell(ORIGIN);
        let mut field = ProbabilityField::initialize(&g, c, 1);
        field.inject_hotspot(&g, c, 0.03, 100).unwrap();

        let output = SearchOutput {
            trajectory: vec![
                SimulationStep { cell: c, step: 0 },
                SimulationStep { cell: c, step: 1 },
            ],
            ledger: DetectionLedger::default(),
            time_to_full_capture: None,
            accumulated_angle: 0.0,
        };
        let m = evaluate_search(&field, &BTreeSet::new(), &output);
        assert_eq!(m.angle_curvature_deg, None);
    }

    #[test]
    fn curvature_averages_over_interior_points() {
        let g = grid();
        let c = g.to_cell(ORIGIN);
        let mut field = ProbabilityField::initialize(&g, c, 1);
        field.inject_hotspot(&g, c, 0.03, 100).unwrap();

        let trajectory: Vec<SimulationStep> = g
            .k_ring(c, 1)
            .into_iter()
            .take(5)
            .enumerate()
            .map(|(step, cell)| SimulationStep { cell, step })
            .collect();
        let output = SearchOutput {
            trajectory,
            ledger: DetectionLedger::default(),
            time_to_full_capture: None,
            accumulated_angle: 270.0,
        };
        let m = evaluate_search(&field, &BTreeSet::new(), &output);
        assert_eq!(m.angle_curvature_deg, Some(90.0)); // 270 / (5 − 2)
    }

    #[test]
    fn guaranteed_capture_law() {
        // guaranteed_capture == true implies zero false negatives and full
        // casualty coverage.
        let g = grid();
        let c = g.to_cell(ORIGIN);
        let mut field = ProbabilityField::initialize(&g, c, 1);
        field.inject_hotspot(&g, c, 0.03, 100).unwrap();

        let neighbor = g.ring(c, 1)[0];
        let casualties = BTreeSet::from([c, neighbor]);

        let mut ledger = DetectionLedger::default();
        ledger.record(c, true);
        ledger.record(neighbor, true);
        let output = SearchOutput {
            trajectory: vec![SimulationStep { cell: c, step: 0 }],
            ledger,
            time_to_full_capture: Some(0.01),
            accumulated_angle: 0.0,
        };
        let m = evaluate_search(&field, &casualties, &output);
        assert!(m.guaranteed_capture);
        assert_eq!(m.false_negatives, 0);
        assert_eq!(m.casualties_captured, m.casualties_count);

        // A false negative breaks the guarantee.
        let mut ledger = DetectionLedger::default();
        ledger.record(c, true);
        ledger.record(neighbor, false);
        let output = SearchOutput {
            trajectory: vec![SimulationStep { cell: c, step: 0 }],
            ledger,
            time_to_full_capture: Some(0.01),
            accumulated_angle: 0.0,
        };
        let m = evaluate_search(&field, &casualties, &output);
        assert!(!m.guaranteed_capture);
        assert_eq!(m.false_negatives, 1);
    }
}

#[cfg(test)]
mod run {
    use crate::cluster::{ClusterMetrics, SearchMetrics};
    use crate::RunMetrics;

    fn searched(coverage: f64, min_time: Option<f64>) -> ClusterMetrics {
        ClusterMetrics {
            avg_dist_m: 10.0,
            std_dist_m: 2.0,
            search: Some(SearchMetrics {
                path_coverage_pct: coverage,
                angle_curvature_deg: Some(30.0),
                casualties_captured: 2,
                casualties_count: 3,
                false_negatives: 0,
                guaranteed_capture: false,
                minimum_time_captured_secs: min_time,
            }),
        }
    }

    fn unsearched() -> ClusterMetrics {
        ClusterMetrics { avg_dist_m: 40.0, std_dist_m: 0.0, search: None }
    }

    #[test]
    fn absent_values_are_excluded_not_zeroed() {
        let clusters = [searched(50.0, Some(1.0)), searched(70.0, None), unsearched()];
        let run = RunMetrics::aggregate(clusters.iter(), 9);

        assert_eq!(run.clusters, 3);
        // Distances defined for all three clusters.
        assert_eq!(run.avg_cluster_dist_m, Some(20.0));
        // Coverage defined for two.
        assert_eq!(run.avg_path_coverage_pct, Some(60.0));
        // Minimum time occurred once; the average is over that one sample.
        assert_eq!(run.avg_minimum_time_secs, Some(1.0));
        // Captured totals raw against the run count, never averaged.
        assert_eq!(run.casualties_captured, 4);
        assert_eq!(run.casualties_count, 9);
    }

    #[test]
    fn never_occurred_metrics_are_none() {
        let clusters = [unsearched(), unsearched()];
        let run = RunMetrics::aggregate(clusters.iter(), 0);
        assert_eq!(run.avg_path_coverage_pct, None);
        assert_eq!(run.avg_minimum_time_secs, None);
        assert_eq!(run.avg_angle_curvature_deg, None);
        assert!(run.to_string().contains("NA"));
    }

    #[test]
    fn empty_run_aggregates_to_all_none() {
        let run = RunMetrics::aggregate(std::iter::empty::<&ClusterMetrics>(), 0);
        assert_eq!(run.clusters, 0);
        assert_eq!(run.avg_cluster_dist_m, None);
    }
}

#[cfg(test)]
mod csv_report {
    use std::collections::BTreeMap;

    use sar_core::ClusterId;
    use tempfile::TempDir;

    use crate::cluster::{ClusterMetrics, SearchMetrics};
    use crate::{CsvReport, RunMetrics};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn metrics() -> BTreeMap<ClusterId, ClusterMetrics> {
        BTreeMap::from([
            (
                ClusterId(0),
                ClusterMetrics {
                    avg_dist_m: 12.5,
                    std_dist_m: 1.25,
                    search: Some(SearchMetrics {
                        path_coverage_pct: 42.11,
                        angle_curvature_deg: None,
                        casualties_captured: 1,
                        casualties_count: 2,
                        false_negatives: 1,
                        guaranteed_capture: false,
                        minimum_time_captured_secs: None,
                    }),
                },
            ),
            (
                ClusterId(1),
                ClusterMetrics { avg_dist_m: 5.0, std_dist_m: 0.0, search: None },
            ),
        ])
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _r = CsvReport::new(dir.path()).unwrap();
        assert!(dir.path().join("cluster_metrics.csv").exists());
        assert!(dir.path().join("run_summary.csv").exists());
    }

    #[test]
    fn cluster_rows_round_trip() {
        let dir = tmp();
        let mut report = CsvReport::new(dir.path()).unwrap();
        report.write_clusters(&metrics()).unwrap();
        report.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("cluster_metrics.csv")).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][3], "42.11");
        assert_eq!(&rows[0][4], "NA"); // curvature never defined
        assert_eq!(&rows[1][3], "NA"); // unsearched cluster
    }

    #[test]
    fn summary_row_written() {
        let dir = tmp();
        let mut report = CsvReport::new(dir.path()).unwrap();
        let m = metrics();
        let run = RunMetrics::aggregate(m.values(), 2);
        report.write_summary(&run).unwrap();
        report.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("run_summary.csv")).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "2"); // clusters
        assert_eq!(&rows[0][7], "1"); // captured total
    }
}
