//! Mission configuration.

use sar_core::{GeoBounds, GeoPoint};
use sar_sim::{DEFAULT_FAILURE_ONE_IN, SimulatorConfig};

/// Top-level mission configuration.
///
/// Typically built in the application crate (constants or a config file) and
/// handed to [`Mission::new`](crate::Mission::new).  All knobs are plain
/// fields; `MissionConfig::new` fills in the defaults and callers override
/// what they need.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionConfig {
    /// Optional label, carried into reports.
    pub name: Option<String>,

    /// Mission center; also the origin of the hex grid projection.
    pub center: GeoPoint,

    /// Half-extent of the operating area, in kilometers.  Default: 0.1.
    pub radius_km: f64,

    /// Hex grid resolution.  Default: 13 (7.5 m cell spacing).
    pub resolution: u8,

    /// Ring count of each cluster's probability field domain.  Default: 16.
    pub ring_count: u32,

    /// Step budget per cluster search.  Default: 100.
    pub steps: usize,

    /// Gaussian kernel width for hotspot injection, in kilometers.
    /// Default: 0.03.
    pub sigma: f64,

    /// Ring cutoff for hotspot injection.  Default: 100.
    pub max_ring_radius: u32,

    /// `Some(f)` enables per-step Bayesian belief updates with detection
    /// probability `f`.  Default: `None` (static field).
    pub belief_updates: Option<f64>,

    /// Detection failure odds: one failed draw in this many.  Default: 10.
    pub detection_failure_one_in: u32,

    /// Master RNG seed.  The same seed reproduces the whole run.
    pub seed: u64,

    /// Hotspots placed uniformly within the operating area.
    pub num_hotspots: usize,

    /// Casualties scattered around the hotspots, round-robin.
    pub num_casualties: usize,

    /// Score clustering only; skip every search phase.
    pub only_cluster: bool,

    /// Search only the most populous cluster.
    pub only_path: bool,

    /// Stop each search early once every casualty cell is confirmed.
    pub stop_on_full_capture: bool,
}

impl MissionConfig {
    pub fn new(center: GeoPoint) -> Self {
        Self {
            name: None,
            center,
            radius_km: 0.1,
            resolution: 13,
            ring_count: 16,
            steps: 100,
            sigma: 0.03,
            max_ring_radius: 100,
            belief_updates: None,
            detection_failure_one_in: DEFAULT_FAILURE_ONE_IN,
            seed: 0,
            num_hotspots: 0,
            num_casualties: 0,
            only_cluster: false,
            only_path: false,
            stop_on_full_capture: false,
        }
    }

    /// Bounding box of the operating area: great-circle offsets of
    /// `radius_km` due north/east/south/west of the center.
    pub fn bounds(&self) -> GeoBounds {
        GeoBounds::around(self.center, self.radius_km)
    }

    /// The per-search simulator policy derived from this config.
    pub fn simulator_config(&self) -> SimulatorConfig {
        SimulatorConfig {
            steps: self.steps,
            belief_updates: self.belief_updates,
            stop_on_full_capture: self.stop_on_full_capture,
        }
    }
}
