//! Great-circle centroid of a set of geographic points.
//!
//! Planar averaging of latitude/longitude is wrong near the poles and across
//! the ±180° meridian, so the centroid is computed through 3-D unit vectors:
//! convert each point to (cos·cos, cos·sin, sin), average componentwise, and
//! convert the mean vector back via atan2/asin.

use crate::error::{SarError, SarResult};
use crate::geo::GeoPoint;

/// Geographic centroid of a non-empty point set.
///
/// A single-point input returns that point exactly.  An empty input is a
/// caller bug and fails with [`SarError::InvalidInput`].
pub fn spherical_centroid(points: &[GeoPoint]) -> SarResult<GeoPoint> {
    match points {
        [] => Err(SarError::InvalidInput(
            "cannot take the centroid of an empty point set".into(),
        )),
        [only] => Ok(*only),
        _ => {
            let (mut x, mut y, mut z) = (0.0_f64, 0.0_f64, 0.0_f64);
            for p in points {
                let lat = p.lat.to_radians();
                let lon = p.lon.to_radians();
                x += lat.cos() * lon.cos();
                y += lat.cos() * lon.sin();
                z += lat.sin();
            }

            let n = points.len() as f64;
            x /= n;
            y /= n;
            z /= n;

            let lon = y.atan2(x);
            let hyp = (x * x + y * y).sqrt();
            let lat = z.atan2(hyp);

            Ok(GeoPoint::new(lat.to_degrees(), lon.to_degrees()))
        }
    }
}
