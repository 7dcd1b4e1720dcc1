//! Swimmer athletic profile.

use rand::{Rng, RngCore};
use workouts::ActivityType;

use super::AthleteProfile;

/// Athletic profile for pool swimming.
///
/// Strokes are counted per arm cycle; lap time is given for a 25 m pool and
/// scaled for longer pools.
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    /// Strokes per minute.
    cadence: f64,
    /// Cadence variance (coefficient of variation).
    variance: f64,
    /// Seconds per 25 m, `(min, max)`.
    lap_seconds: (f64, f64),
    /// Pool lengths to pick from, in meters.
    pools: Vec<f64>,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            cadence: 30.0,
            variance: 0.1,
            lap_seconds: (25.0, 45.0),
            pools: vec![25.0, 50.0],
        }
    }
}

impl SwimmerProfile {
    /// Creates a profile that always swims in a pool of `length` meters.
    pub fn in_pool(length: f64) -> Self {
        Self {
            pools: vec![length],
            ..Default::default()
        }
    }
}

impl AthleteProfile for SwimmerProfile {
    fn activity_type(&self) -> ActivityType {
        ActivityType::Swimming
    }

    fn cadence(&self) -> f64 {
        self.cadence
    }

    fn duration_range(&self) -> (f64, f64) {
        (0.25, 1.5)
    }

    fn weight(&self) -> (f64, f64) {
        (70.0, 9.0)
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn extra_fields(&self, duration: f64, rng: &mut dyn RngCore) -> Vec<f64> {
        let length_pool = match self.pools.as_slice() {
            [] => 25.0,
            pools => pools[rng.gen_range(0..pools.len())],
        };
        let (min, max) = self.lap_seconds;
        let lap_time = rng.gen_range(min..max) * length_pool / 25.0;
        let count_pool = (duration * 3600.0 / lap_time).floor().max(1.0);
        vec![length_pool, count_pool]
    }
}
