//! Unit tests for the hexagonal spatial index.

#[cfg(test)]
mod grid {
    use sar_core::GeoPoint;

    use crate::{GridError, HexGrid, SpatialIndex};

    fn grid() -> HexGrid {
        HexGrid::new(GeoPoint::new(1.3521, 103.8198), 13).unwrap()
    }

    #[test]
    fn resolution_13_spacing_is_7_5_m() {
        assert!((grid().spacing_m() - 7.5).abs() < 1e-9);
    }

    #[test]
    fn resolution_out_of_range() {
        assert!(matches!(
            HexGrid::new(GeoPoint::new(0.0, 0.0), 21),
            Err(GridError::ResolutionOutOfRange { res: 21, .. })
        ));
    }

    #[test]
    fn cell_roundtrip_law() {
        // to_cell(to_coordinate(c)) == c for every cell the index produced.
        let g = grid();
        let center = g.to_cell(GeoPoint::new(1.3521, 103.8198));
        for cell in g.k_ring(center, 8) {
            let back = g.to_cell(g.to_coordinate(cell));
            assert_eq!(back, cell);
        }
    }

    #[test]
    fn to_cell_is_deterministic() {
        let g = grid();
        let p = GeoPoint::new(1.3525, 103.8201);
        assert_eq!(g.to_cell(p), g.to_cell(p));
    }

    #[test]
    fn ring_sizes() {
        let g = grid();
        let center = g.to_cell(GeoPoint::new(1.3521, 103.8198));
        assert_eq!(g.ring(center, 0), vec![center]);
        assert_eq!(g.ring(center, 1).len(), 6);
        assert_eq!(g.ring(center, 2).len(), 12);
        assert_eq!(g.ring(center, 5).len(), 30);
    }

    #[test]
    fn ring_cells_are_at_exact_grid_distance() {
        let g = grid();
        let center = g.to_cell(GeoPoint::new(1.3521, 103.8198));
        for k in 1..5u32 {
            for cell in g.ring(center, k) {
                assert_eq!(cell.grid_distance(center), k);
            }
        }
    }

    #[test]
    fn k_ring_2_has_19_cells() {
        // 1 + 6 + 12
        let g = grid();
        let center = g.to_cell(GeoPoint::new(1.3521, 103.8198));
        let disk = g.k_ring(center, 2);
        assert_eq!(disk.len(), 19);
        assert!(disk.contains(&center));
        assert!(disk.iter().all(|c| c.grid_distance(center) <= 2));
    }

    #[test]
    fn neighbors_are_one_spacing_apart() {
        let g = grid();
        let center = g.to_cell(GeoPoint::new(1.3521, 103.8198));
        let c0 = g.to_coordinate(center);
        for n in g.ring(center, 1) {
            let d = c0.distance_m(g.to_coordinate(n));
            assert!((d - g.spacing_m()).abs() < 0.05, "got {d}");
        }
    }
}
