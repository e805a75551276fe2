use num_derive::{FromPrimitive, ToPrimitive};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PerformanceError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PerformanceError {
    #[error("unable to parse {name} from '{value}'")]
    ParseFailure { name: String, value: String },

    #[error("calculation failed: {0}")]
    CalculationFailed(String),

    #[error("illegal value for {name}: {reason}")]
    IllegalValue { name: String, reason: String },
}
impl PerformanceError {
    pub fn outcome(&self) -> Outcome {
        match self {
            PerformanceError::ParseFailure { .. } => Outcome::ParseFailure,
            PerformanceError::CalculationFailed(_) => Outcome::CalculationFailure,
            PerformanceError::IllegalValue { .. } => Outcome::IllegalValue,
        }
    }
}

pub fn calculation_failed(msg: impl ToString) -> PerformanceError {
    PerformanceError::CalculationFailed(msg.to_string())
}

pub fn illegal_value(name: &str, reason: impl ToString) -> PerformanceError {
    PerformanceError::IllegalValue {
        name: name.to_owned(),
        reason: reason.to_string(),
    }
}

/// The discriminated result of one calculation, as signalled to callers
/// which cannot inspect a [`PerformanceError`] (e.g. a process exit code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum Outcome {
    Success = 0,
    ParseFailure = 1,
    CalculationFailure = 2,
    IllegalValue = 3,
}
impl<T> From<&Result<T>> for Outcome {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Outcome::Success,
            Err(error) => error.outcome(),
        }
    }
}
