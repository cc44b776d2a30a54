use std::result::Result as StdResult;

use thiserror::Error;

use crate::tracker::CategoryId;

/// Failures raised while loading or saving configuration. The activity store
/// itself never produces one.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, TrackerError>;

/// Reasons a draft activity cannot be submitted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Activity name cannot be empty")]
    EmptyName,
    #[error("Calories must be greater than zero (got {0})")]
    NonPositiveCalories(f64),
    #[error("Enter a numeric calorie value (got `{0}`)")]
    InvalidCalories(String),
    #[error("Unknown category id {0}")]
    UnknownCategory(CategoryId),
}
