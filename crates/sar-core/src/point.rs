//! `Point` — an identified hotspot coordinate.

use std::fmt;

use crate::geo::GeoPoint;
use crate::ids::HotspotId;

/// A labelled geographic point.
///
/// Immutable once created; owned by whichever collection constructed it
/// (the scenario's hotspot list, a cluster's membership list).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub id:     HotspotId,
    pub coords: GeoPoint,
}

impl Point {
    #[inline]
    pub fn new(id: HotspotId, coords: GeoPoint) -> Self {
        Self { id, coords }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.id, self.coords)
    }
}
