//! Unit tests for the probability field.

#[cfg(test)]
mod field {
    use sar_core::GeoPoint;
    use sar_grid::{HexGrid, SpatialIndex};

    use crate::{FieldError, ProbabilityField};

    const SUM_TOLERANCE: f64 = 1e-9;

    fn grid() -> HexGrid {
        HexGrid::new(GeoPoint::new(1.3521, 103.8198), 13).unwrap()
    }

    fn center(g: &HexGrid) -> sar_grid::CellId {
        g.to_cell(GeoPoint::new(1.3521, 103.8198))
    }

    #[test]
    fn initialize_ring_2_is_19_zeroed_cells() {
        // The pre-injection all-zero state is the one allowed zero-sum state.
        let g = grid();
        let field = ProbabilityField::initialize(&g, center(&g), 2);
        assert_eq!(field.len(), 19); // 1 + 6 + 12
        assert!(field.iter().all(|(_, p)| p == 0.0));
        assert_eq!(field.total_mass(), 0.0);
    }

    #[test]
    fn inject_hotspot_normalizes_and_peaks_at_hotspot() {
        let g = grid();
        let c = center(&g);
        let mut field = ProbabilityField::initialize(&g, c, 2);

        field.inject_hotspot(&g, c, 0.03, 100).unwrap();

        assert!((field.total_mass() - 1.0).abs() < SUM_TOLERANCE);
        assert_eq!(field.peak(), Some(c));
        let p_center = field.probability(c);
        assert!(field.iter().all(|(cell, p)| cell == c || p <= p_center));
    }

    #[test]
    fn repeated_injection_keeps_unit_mass() {
        let g = grid();
        let c = center(&g);
        let mut field = ProbabilityField::initialize(&g, c, 4);

        for cell in g.ring(c, 2).into_iter().take(3) {
            field.inject_hotspot(&g, cell, 0.03, 50).unwrap();
            assert!((field.total_mass() - 1.0).abs() < SUM_TOLERANCE);
        }
    }

    #[test]
    fn injection_outside_domain_collapses() {
        // All delta mass lands outside the field's domain, so the field's own
        // mass stays zero and normalization must signal the collapse.
        let g = grid();
        let c = center(&g);
        let mut field = ProbabilityField::initialize(&g, c, 2);

        let far = g.to_cell(GeoPoint::new(1.4521, 103.8198)); // ~11 km north
        let err = field.inject_hotspot(&g, far, 0.03, 5).unwrap_err();
        assert_eq!(err, FieldError::Collapsed);
        assert!(field.is_empty());
    }

    #[test]
    fn bayesian_update_keeps_unit_mass() {
        let g = grid();
        let c = center(&g);
        let mut field = ProbabilityField::initialize(&g, c, 2);
        field.inject_hotspot(&g, c, 0.03, 100).unwrap();

        field.bayesian_update(c, 0.9).unwrap();
        assert!((field.total_mass() - 1.0).abs() < SUM_TOLERANCE);
    }

    #[test]
    fn unsuccessful_look_shifts_mass_away_from_peak() {
        // The visited cell held more than the mean prior, so after the update
        // its share of the field must drop relative to unvisited cells.
        let g = grid();
        let c = center(&g);
        let mut field = ProbabilityField::initialize(&g, c, 2);
        field.inject_hotspot(&g, c, 0.03, 100).unwrap();

        let before = field.probability(c);
        field.bayesian_update(c, 0.9).unwrap();
        let after = field.probability(c);
        assert!(after < before, "peak should lose mass: {before} -> {after}");
    }

    #[test]
    fn below_mean_cell_gains_relative_mass() {
        let g = grid();
        let c = center(&g);
        let mut field = ProbabilityField::initialize(&g, c, 2);
        field.inject_hotspot(&g, c, 0.03, 100).unwrap();

        // An outer-ring cell holds less than the mean; an unsuccessful look
        // at the peak redistributes mass toward it.
        let outer = g.ring(c, 2)[0];
        let before = field.probability(outer);
        field.bayesian_update(c, 0.9).unwrap();
        let after = field.probability(outer);
        assert!(after > before, "outer cell should gain mass: {before} -> {after}");
    }

    #[test]
    fn detection_probability_must_be_in_unit_interval() {
        let g = grid();
        let c = center(&g);
        let mut field = ProbabilityField::initialize(&g, c, 2);
        field.inject_hotspot(&g, c, 0.03, 100).unwrap();

        assert!(matches!(
            field.bayesian_update(c, 1.0),
            Err(FieldError::InvalidDetectionProbability(_))
        ));
        assert!(matches!(
            field.bayesian_update(c, -0.1),
            Err(FieldError::InvalidDetectionProbability(_))
        ));
        // Rejected updates leave the field untouched.
        assert!((field.total_mass() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn update_outside_domain_is_a_no_op() {
        let g = grid();
        let c = center(&g);
        let mut field = ProbabilityField::initialize(&g, c, 2);
        field.inject_hotspot(&g, c, 0.03, 100).unwrap();

        let snapshot: Vec<(sar_grid::CellId, f64)> = field.iter().collect();
        let far = g.to_cell(GeoPoint::new(1.4521, 103.8198));
        field.bayesian_update(far, 0.9).unwrap();
        for (cell, p) in snapshot {
            assert_eq!(field.probability(cell), p);
        }
    }

    #[test]
    fn peak_tie_break_is_deterministic() {
        let g = grid();
        let c = center(&g);
        let field = ProbabilityField::initialize(&g, c, 1);
        // All-zero field: every cell ties; the peak must still be stable.
        assert_eq!(field.peak(), field.clone().peak());
    }
}
