//! The `SearchSimulator` and its step loop.

use std::collections::BTreeSet;
use std::time::Instant;

use sar_core::{GeoPoint, SarRng, geo};
use sar_field::ProbabilityField;
use sar_grid::{CellId, SpatialIndex};
use sar_strategy::PathFinder;

use crate::detection::DetectionModel;
use crate::error::{SimError, SimResult};
use crate::ledger::DetectionLedger;
use crate::output::{SearchOutput, SimulationStep};

// ── Config ────────────────────────────────────────────────────────────────────

/// Per-search policy knobs.
#[derive(Clone, Debug)]
pub struct SimulatorConfig {
    /// Step budget.  The simulator always runs it to completion unless
    /// `stop_on_full_capture` says otherwise.
    pub steps: usize,

    /// `Some(f)` applies a Bayesian belief update with detection probability
    /// `f` at the current position before every step; `None` leaves the
    /// field static for the whole run.
    pub belief_updates: Option<f64>,

    /// Stop early once every casualty cell has a confirmed detection.  This
    /// is the orchestrator's policy, opted into per run — not the
    /// simulator's own default.
    pub stop_on_full_capture: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            steps: 100,
            belief_updates: None,
            stop_on_full_capture: false,
        }
    }
}

// ── SearchSimulator ───────────────────────────────────────────────────────────

/// Drives one cluster's search: a state machine over discrete steps.
///
/// Per step:
///
/// 1. Optional Bayesian belief update at the current position.
/// 2. Query the registered [`PathFinder`] for the next position and convert
///    it to a cell via the spatial index.
/// 3. Run the detection draw if the cell holds an unconfirmed casualty;
///    record the wall-clock elapsed time the first time the ledger covers
///    every casualty cell.
/// 4. Append the step to the trajectory and, once three cells exist,
///    accumulate the turn angle of the last three cell centers.
///
/// A simulator is reusable across clusters; register a fresh [`PathFinder`]
/// before each run.
pub struct SearchSimulator {
    config:      SimulatorConfig,
    detection:   DetectionModel,
    path_finder: Option<Box<dyn PathFinder>>,
}

impl SearchSimulator {
    pub fn new(config: SimulatorConfig, detection: DetectionModel) -> Self {
        Self {
            config,
            detection,
            path_finder: None,
        }
    }

    /// Register the path-planning strategy for the next run.
    ///
    /// Calling [`run`](Self::run) without one is a precondition violation
    /// ([`SimError::NotConfigured`]).
    pub fn register_path_finder(&mut self, finder: Box<dyn PathFinder>) {
        self.path_finder = Some(finder);
    }

    /// Simulate the search across `field`, starting from `start`.
    ///
    /// `casualties` is the cluster's full casualty cell set; `rng` drives the
    /// detection draws (seed it for reproducible runs).  Path-finding errors
    /// and field collapse propagate to the caller.
    pub fn run<I: SpatialIndex + ?Sized>(
        &mut self,
        index:      &I,
        field:      &mut ProbabilityField,
        start:      GeoPoint,
        casualties: &BTreeSet<CellId>,
        rng:        &mut SarRng,
    ) -> SimResult<SearchOutput> {
        let finder = self.path_finder.as_mut().ok_or(SimError::NotConfigured)?;

        let mut trajectory: Vec<SimulationStep> = Vec::with_capacity(self.config.steps);
        let mut ledger = DetectionLedger::default();
        let mut accumulated_angle = 0.0;
        let mut time_to_full_capture = None;

        let started = Instant::now();
        let mut waypoint = start;

        for step in 0..self.config.steps {
            // ── 1. Belief update at the current position ──────────────────
            if let Some(f) = self.config.belief_updates {
                field.bayesian_update(index.to_cell(waypoint), f)?;
            }

            // ── 2. Ask the strategy where to go next ──────────────────────
            waypoint = finder.next_step(waypoint, field)?;
            let cell = index.to_cell(waypoint);

            // ── 3. Detection draw ─────────────────────────────────────────
            if casualties.contains(&cell) && !ledger.is_confirmed(cell) {
                ledger.record(cell, self.detection.draw(rng));

                if time_to_full_capture.is_none() && ledger.len() == casualties.len() {
                    time_to_full_capture = Some(started.elapsed().as_secs_f64());
                }
            }

            // ── 4. Trajectory and turn angle ──────────────────────────────
            trajectory.push(SimulationStep { cell, step });
            if let [.., a, b, c] = trajectory[..] {
                accumulated_angle += geo::turn_angle_deg(
                    index.to_coordinate(a.cell),
                    index.to_coordinate(b.cell),
                    index.to_coordinate(c.cell),
                );
            }

            if self.config.stop_on_full_capture && full_capture(&ledger, casualties) {
                break;
            }
        }

        Ok(SearchOutput {
            trajectory,
            ledger,
            time_to_full_capture,
            accumulated_angle,
        })
    }
}

/// Every casualty cell has an entry and every entry is confirmed.
fn full_capture(ledger: &DetectionLedger, casualties: &BTreeSet<CellId>) -> bool {
    ledger.len() == casualties.len() && ledger.false_negatives() == 0
}
