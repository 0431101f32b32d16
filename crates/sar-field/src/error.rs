use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    /// Total probability mass reached zero during renormalization.  The field
    /// is cleared; callers decide whether to abort the cluster's search or
    /// treat its coverage as zero.
    #[error("probability field collapsed: total mass reached zero")]
    Collapsed,

    /// Detection probability outside the half-open interval [0, 1).  At
    /// exactly 1 the Bayesian posterior denominator can reach zero, so the
    /// whole value is rejected rather than risking NaN/Infinity.
    #[error("detection probability {0} outside [0, 1)")]
    InvalidDetectionProbability(f64),
}

pub type FieldResult<T> = Result<T, FieldError>;
