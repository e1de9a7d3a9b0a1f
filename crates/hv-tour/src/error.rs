use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TourError {
    #[error("cooling rate must lie strictly between 0 and 1, got {0}")]
    InvalidCoolingRate(f64),
}

pub type TourResult<T> = Result<T, TourError>;
