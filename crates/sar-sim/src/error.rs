use sar_field::FieldError;
use sar_strategy::StrategyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// The simulator was invoked without a registered path finder.  Fatal for
    /// that call; register strategies before starting a search.
    #[error("no path finder registered for this search")]
    NotConfigured,

    /// A path-finding failure; propagated uncaught — retrying is a
    /// strategy-level concern, not the simulator's.
    #[error("path finder failed: {0}")]
    Strategy(#[from] StrategyError),

    /// Belief update collapsed the field or was given an invalid detection
    /// probability.
    #[error(transparent)]
    Field(#[from] FieldError),
}

pub type SimResult<T> = Result<T, SimError>;
