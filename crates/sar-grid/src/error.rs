use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("resolution {res} out of range (max {max})")]
    ResolutionOutOfRange { res: u8, max: u8 },
}

pub type GridResult<T> = Result<T, GridError>;
