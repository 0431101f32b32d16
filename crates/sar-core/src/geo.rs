//! Geographic coordinate type and spherical geometry utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude: cluster-distance metrics are
//! judged at the tens-of-meters scale (a 4-point cluster inside 50 m must
//! report a near-zero standard deviation), which is below what single
//! precision resolves reliably after a haversine round trip.

use std::fmt;

/// Mean Earth radius in meters (6371 km).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

// ── GeoPoint ──────────────────────────────────────────────────────────────────

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Clamp latitude to [-90, 90] and longitude to [-180, 180].
    ///
    /// Scatter sampling near the poles or the antimeridian can step outside
    /// the valid ranges; clamping matches how scenario coordinates are kept
    /// legal rather than wrapped.
    pub fn clamped(self) -> GeoPoint {
        GeoPoint {
            lat: self.lat.clamp(-90.0, 90.0),
            lon: self.lon.clamp(-180.0, 180.0),
        }
    }

    /// Haversine great-circle distance in meters.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().asin();
        EARTH_RADIUS_M * c
    }

    /// Haversine great-circle distance in kilometers.
    #[inline]
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        self.distance_m(other) / 1000.0
    }

    /// Initial great-circle bearing from `self` toward `other`, in degrees
    /// clockwise from north, normalized to [0, 360).
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        (y.atan2(x).to_degrees() + 360.0) % 360.0
    }

    /// Destination point `distance_km` away along `bearing_deg` (clockwise
    /// from north).  Standard great-circle forward formula.
    pub fn offset(self, bearing_deg: f64, distance_km: f64) -> GeoPoint {
        let ang = distance_km * 1000.0 / EARTH_RADIUS_M;
        let brg = bearing_deg.to_radians();
        let lat1 = self.lat.to_radians();
        let lon1 = self.lon.to_radians();

        let lat2 = (lat1.sin() * ang.cos() + lat1.cos() * ang.sin() * brg.cos()).asin();
        let lon2 = lon1
            + (brg.sin() * ang.sin() * lat1.cos()).atan2(ang.cos() - lat1.sin() * lat2.sin());

        GeoPoint::new(lat2.to_degrees(), lon2.to_degrees())
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── Turn angle ────────────────────────────────────────────────────────────────

/// Turn angle (degrees, in [0, 180]) at `b` for the path `a → b → c`.
///
/// Measured as the absolute change in heading between the two legs; 0 means
/// the path continues straight, 180 means a full reversal.  Either leg being
/// degenerate (coincident endpoints, e.g. a trajectory that lingers in one
/// cell) contributes no turn.
pub fn turn_angle_deg(a: GeoPoint, b: GeoPoint, c: GeoPoint) -> f64 {
    if a == b || b == c {
        return 0.0;
    }
    let delta = (b.bearing_deg(c) - a.bearing_deg(b)).abs() % 360.0;
    if delta > 180.0 { 360.0 - delta } else { delta }
}

// ── GeoBounds ─────────────────────────────────────────────────────────────────

/// An axis-aligned bounding box given by its southwest and northeast corners.
///
/// This is the entire surface consumed from the (excluded) map-visualization
/// layer: a region around a mission center from which scenario coordinates
/// are drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoBounds {
    pub sw: GeoPoint,
    pub ne: GeoPoint,
}

impl GeoBounds {
    /// Bounding box enclosing the four points `radius_km` away from `center`
    /// at bearings 0°, 90°, 180°, 270°.
    pub fn around(center: GeoPoint, radius_km: f64) -> GeoBounds {
        let offsets = [0.0, 90.0, 180.0, 270.0].map(|b| center.offset(b, radius_km));

        let mut sw = offsets[0];
        let mut ne = offsets[0];
        for p in offsets {
            sw.lat = sw.lat.min(p.lat);
            sw.lon = sw.lon.min(p.lon);
            ne.lat = ne.lat.max(p.lat);
            ne.lon = ne.lon.max(p.lon);
        }
        GeoBounds { sw, ne }
    }

    /// `true` if `p` lies inside the box (inclusive edges).
    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.sw.lat..=self.ne.lat).contains(&p.lat)
            && (self.sw.lon..=self.ne.lon).contains(&p.lon)
    }
}
