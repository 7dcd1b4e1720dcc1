use thiserror::Error;

use crate::models::ActivityType;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Unknown activity code: {0:?}")]
    UnknownActivityCode(String),

    #[error("Invalid argument count for {activity}: expected {expected}, got {actual}")]
    InvalidArgumentCount {
        activity: ActivityType,
        expected: usize,
        actual: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = WorkoutError> = std::result::Result<T, E>;
