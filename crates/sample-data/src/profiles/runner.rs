//! Runner athletic profile.

use rand::RngCore;
use workouts::ActivityType;

use super::AthleteProfile;

/// Athletic profile for running.
///
/// Based on typical recreational runner cadence of ~165 steps per minute.
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Steps per minute.
    cadence: f64,
    /// Cadence variance (coefficient of variation).
    variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            cadence: 165.0,
            variance: 0.06,
        }
    }
}

impl RunnerProfile {
    /// Creates a runner profile with the given cadence in steps per minute.
    pub fn with_cadence(cadence: f64) -> Self {
        Self {
            cadence,
            ..Default::default()
        }
    }

    /// Creates an elite runner profile (~185 steps/min).
    pub fn elite() -> Self {
        Self::with_cadence(185.0)
    }
}

impl AthleteProfile for RunnerProfile {
    fn activity_type(&self) -> ActivityType {
        ActivityType::Running
    }

    fn cadence(&self) -> f64 {
        self.cadence
    }

    fn duration_range(&self) -> (f64, f64) {
        (0.3, 2.0)
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn extra_fields(&self, _duration: f64, _rng: &mut dyn RngCore) -> Vec<f64> {
        Vec::new()
    }
}
