//! Plain data types produced by a search run.

use sar_grid::CellId;

use crate::ledger::DetectionLedger;

/// One visited cell in traversal order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SimulationStep {
    pub cell: CellId,
    /// Zero-based step index within the run.
    pub step: usize,
}

/// Everything a completed search run hands to the metrics evaluator.
#[derive(Clone, Debug)]
pub struct SearchOutput {
    /// Visited cells in traversal order (append-only during the run).
    pub trajectory: Vec<SimulationStep>,

    /// Detection outcomes for visited casualty cells.
    pub ledger: DetectionLedger,

    /// Wall-clock seconds from simulation start until the ledger first
    /// covered every casualty cell; `None` if full coverage was never
    /// reached.
    pub time_to_full_capture: Option<f64>,

    /// Sum of turn angles (degrees) over every consecutive cell triple.
    pub accumulated_angle: f64,
}
