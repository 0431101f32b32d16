//! Unit tests for sar-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ClusterId, HotspotId};

    #[test]
    fn index_roundtrip() {
        let id = HotspotId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(HotspotId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(ClusterId(0) < ClusterId(1));
        assert!(HotspotId(100) > HotspotId(99));
    }

    #[test]
    fn invalid_sentinel_is_default() {
        assert_eq!(ClusterId::default(), ClusterId::INVALID);
        assert_eq!(ClusterId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(ClusterId(7).to_string(), "ClusterId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::geo::turn_angle_deg;
    use crate::{GeoBounds, GeoPoint};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(1.3521, 103.8198);
        assert!(p.distance_m(p) < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.19 km on a 6371 km sphere
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn offset_lands_at_requested_distance() {
        let center = GeoPoint::new(1.3521, 103.8198);
        for bearing in [0.0, 90.0, 180.0, 270.0, 37.5] {
            let p = center.offset(bearing, 0.1);
            let d = center.distance_m(p);
            assert!((d - 100.0).abs() < 0.01, "bearing {bearing}: got {d}");
        }
    }

    #[test]
    fn bounds_contain_center_and_offsets() {
        let center = GeoPoint::new(1.3521, 103.8198);
        let bounds = GeoBounds::around(center, 0.1);
        assert!(bounds.contains(center));
        assert!(bounds.sw.lat < center.lat && center.lat < bounds.ne.lat);
        assert!(bounds.sw.lon < center.lon && center.lon < bounds.ne.lon);
    }

    #[test]
    fn straight_path_has_zero_turn() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 0.1);
        let c = GeoPoint::new(0.0, 0.2);
        assert!(turn_angle_deg(a, b, c) < 1e-6);
    }

    #[test]
    fn reversal_turns_180() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 0.1);
        let angle = turn_angle_deg(a, b, a);
        assert!((angle - 180.0).abs() < 1e-6, "got {angle}");
    }

    #[test]
    fn right_angle_turn() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 0.1);
        let c = GeoPoint::new(0.1, 0.1);
        let angle = turn_angle_deg(a, b, c);
        assert!((angle - 90.0).abs() < 0.1, "got {angle}");
    }

    #[test]
    fn lingering_contributes_no_turn() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 0.1);
        assert_eq!(turn_angle_deg(a, a, b), 0.0);
        assert_eq!(turn_angle_deg(a, b, b), 0.0);
    }
}

#[cfg(test)]
mod centroid {
    use crate::{GeoPoint, SarError, spherical_centroid};

    #[test]
    fn empty_set_is_invalid_input() {
        assert!(matches!(
            spherical_centroid(&[]),
            Err(SarError::InvalidInput(_))
        ));
    }

    #[test]
    fn single_point_identity() {
        let p = GeoPoint::new(48.8566, 2.3522);
        assert_eq!(spherical_centroid(&[p]).unwrap(), p);
    }

    #[test]
    fn equatorial_midpoint() {
        let a = GeoPoint::new(0.0, 10.0);
        let b = GeoPoint::new(0.0, 20.0);
        let c = spherical_centroid(&[a, b]).unwrap();
        assert!(c.lat.abs() < 1e-9);
        assert!((c.lon - 15.0).abs() < 1e-9);
    }

    #[test]
    fn antimeridian_does_not_average_planar() {
        // Planar lon averaging of +179.5 and -179.5 gives 0 — the wrong side
        // of the globe.  The spherical centroid stays near ±180.
        let a = GeoPoint::new(0.0, 179.5);
        let b = GeoPoint::new(0.0, -179.5);
        let c = spherical_centroid(&[a, b]).unwrap();
        assert!(c.lon.abs() > 179.0, "got lon {}", c.lon);
    }
}

#[cfg(test)]
mod rng {
    use crate::SarRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SarRng::new(12345);
        let mut r2 = SarRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.gen_range(0.0..1.0);
            let b: f64 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn child_streams_diverge() {
        let mut r1 = SarRng::new(1);
        let mut r2 = SarRng::new(1);
        let mut c1 = r1.child(0);
        let mut c2 = r2.child(1);
        let a: u64 = c1.gen_range(0..u64::MAX);
        let b: u64 = c2.gen_range(0..u64::MAX);
        assert_ne!(a, b, "distinct offsets should yield distinct streams");
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SarRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
