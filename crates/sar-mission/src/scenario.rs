//! Scenario generation: hotspot and casualty placement.

use rand::Rng;
use rand_distr::StandardNormal;
use sar_core::{GeoPoint, HotspotId, Point, SarRng};
use sar_grid::{CellId, SpatialIndex};

use crate::config::MissionConfig;

/// Standard deviation of the casualty scatter around a hotspot, in degrees
/// (about 5.5 m at the equator).
pub const CASUALTY_SCATTER_DEG: f64 = 0.00005;

/// One casualty cell, tagged with the hotspot it was scattered around so the
/// orchestrator can assign it to that hotspot's cluster.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Casualty {
    pub hotspot: HotspotId,
    pub cell: CellId,
}

/// A generated mission scenario: hotspots and the casualty cells derived
/// from them.  Immutable once generated.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub hotspots: Vec<Point>,
    pub casualties: Vec<Casualty>,
}

impl Scenario {
    /// Generate a scenario from the config's bounding box.
    ///
    /// Hotspots are drawn uniformly within the box.  Casualties are divided
    /// among the hotspots round-robin (the remainder going to the
    /// lowest-numbered hotspots) and scattered around their hotspot with a
    /// normal distribution per axis, clamped to valid coordinates, then
    /// snapped to cells at the grid's resolution.
    pub fn generate<I: SpatialIndex + ?Sized>(
        config: &MissionConfig,
        index:  &I,
        rng:    &mut SarRng,
    ) -> Scenario {
        let bounds = config.bounds();

        let hotspots: Vec<Point> = (0..config.num_hotspots)
            .map(|i| {
                let lat = rng.gen_range(bounds.sw.lat..=bounds.ne.lat);
                let lon = rng.gen_range(bounds.sw.lon..=bounds.ne.lon);
                Point::new(HotspotId(i as u32), GeoPoint::new(lat, lon))
            })
            .collect();

        let mut casualties = Vec::with_capacity(config.num_casualties);
        if !hotspots.is_empty() {
            let base = config.num_casualties / hotspots.len();
            let remainder = config.num_casualties % hotspots.len();

            for (i, hotspot) in hotspots.iter().enumerate() {
                let count = base + usize::from(i < remainder);
                for _ in 0..count {
                    let coords = scatter(hotspot.coords, rng).clamped();
                    casualties.push(Casualty {
                        hotspot: hotspot.id,
                        cell: index.to_cell(coords),
                    });
                }
            }
        }

        Scenario { hotspots, casualties }
    }
}

/// One normally-distributed draw per axis around `center`.
fn scatter(center: GeoPoint, rng: &mut SarRng) -> GeoPoint {
    let dlat: f64 = rng.inner().sample(StandardNormal);
    let dlon: f64 = rng.inner().sample(StandardNormal);
    GeoPoint::new(
        center.lat + dlat * CASUALTY_SCATTER_DEG,
        center.lon + dlon * CASUALTY_SCATTER_DEG,
    )
}
