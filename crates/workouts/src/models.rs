use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::WorkoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    Running,
    SportsWalking,
    Swimming,
}

impl ActivityType {
    pub const ALL: [ActivityType; 3] = [
        ActivityType::Swimming,
        ActivityType::Running,
        ActivityType::SportsWalking,
    ];

    /// Three-letter code sent by the sensor unit.
    pub fn code(self) -> &'static str {
        match self {
            ActivityType::Running => "RUN",
            ActivityType::SportsWalking => "WLK",
            ActivityType::Swimming => "SWM",
        }
    }

    /// Label used in the workout summary.
    pub fn name(self) -> &'static str {
        match self {
            ActivityType::Running => "Running",
            ActivityType::SportsWalking => "SportsWalking",
            ActivityType::Swimming => "Swimming",
        }
    }

    /// Number of sensor values a package of this type carries.
    pub fn field_count(self) -> usize {
        match self {
            ActivityType::Running => 3,
            ActivityType::SportsWalking => 4,
            ActivityType::Swimming => 5,
        }
    }

    pub fn from_code(code: &str) -> Result<Self, WorkoutError> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or_else(|| WorkoutError::UnknownActivityCode(code.to_string()))
    }
}

impl FromStr for ActivityType {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw readings for one workout as received from the sensor unit.
///
/// `data` is positional; its meaning depends on `workout_type`:
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
/// - `SWM`: action, duration, weight, length_pool, count_pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}
