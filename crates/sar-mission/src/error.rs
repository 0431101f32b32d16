//! Error types for sar-mission.

use sar_core::SarError;
use sar_grid::GridError;
use sar_sim::SimError;
use sar_strategy::StrategyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MissionError {
    /// `run()` was called before the named strategy was registered.
    #[error("no {0} registered for this mission")]
    NotConfigured(&'static str),

    #[error(transparent)]
    Core(#[from] SarError),

    #[error(transparent)]
    Grid(#[from] GridError),

    /// Cluster-finding failed; the whole run aborts.
    #[error("cluster finder failed: {0}")]
    Strategy(#[from] StrategyError),

    #[error(transparent)]
    Sim(#[from] SimError),
}

pub type MissionResult<T> = Result<T, MissionError>;
