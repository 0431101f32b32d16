//! The `ClusterFinder` and `PathFinder` traits.

use std::collections::BTreeMap;

use sar_core::{ClusterId, GeoPoint, Point};
use sar_field::ProbabilityField;

use crate::error::StrategyResult;

/// Pluggable region-segmentation strategy.
///
/// Called once per run; the returned mapping is authoritative and read-only
/// to the core.  A `BTreeMap` keeps cluster iteration order deterministic, so
/// a fixed seed reproduces the whole run.
pub trait ClusterFinder {
    /// Group the strategy's hotspots into clusters.
    fn fit(&mut self) -> StrategyResult<BTreeMap<ClusterId, Vec<Point>>>;
}

/// Pluggable path-planning strategy, constructed once per cluster.
///
/// May keep state across calls within one cluster's run (sweep progress,
/// visited sets, ...).  The returned coordinate is trusted; the simulator
/// converts it to a cell itself.
pub trait PathFinder {
    /// Next position to visit, given the current position and the cluster's
    /// probability surface.
    fn next_step(
        &mut self,
        current: GeoPoint,
        field:   &ProbabilityField,
    ) -> StrategyResult<GeoPoint>;
}

/// Factory building a fresh [`PathFinder`] for each cluster, from the grid
/// resolution and the cluster's search center.
pub type PathFinderFactory = Box<dyn Fn(u8, GeoPoint) -> Box<dyn PathFinder>>;
