use thiserror::Error;

/// Opaque error raised by a strategy implementation.
///
/// The core never inspects, retries, or recovers from strategy failures —
/// whether to abort the run or skip the offending cluster is the
/// orchestrator's call.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct StrategyError(#[from] Box<dyn std::error::Error + Send + Sync>);

impl StrategyError {
    /// Wrap a plain message, for strategies without their own error type.
    pub fn msg(message: impl Into<String>) -> Self {
        StrategyError(message.into().into())
    }
}

pub type StrategyResult<T> = Result<T, StrategyError>;
