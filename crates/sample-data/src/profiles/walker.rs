//! Sports walker athletic profile.

use rand::RngCore;
use rand_distr::{Distribution, Normal};
use workouts::ActivityType;

use super::AthleteProfile;

/// Athletic profile for sports walking.
///
/// Based on a brisk walking cadence of ~120 steps per minute.
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    /// Steps per minute.
    cadence: f64,
    /// Cadence variance (coefficient of variation).
    variance: f64,
    /// Mean body height in cm.
    height: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            cadence: 120.0,
            variance: 0.1,
            height: 172.0,
        }
    }
}

impl AthleteProfile for WalkerProfile {
    fn activity_type(&self) -> ActivityType {
        ActivityType::SportsWalking
    }

    fn cadence(&self) -> f64 {
        self.cadence
    }

    fn duration_range(&self) -> (f64, f64) {
        (0.5, 3.0)
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn extra_fields(&self, _duration: f64, rng: &mut dyn RngCore) -> Vec<f64> {
        let height = Normal::new(self.height, 8.0)
            .map(|normal| normal.sample(rng))
            .unwrap_or(self.height);
        vec![height.clamp(140.0, 210.0).round()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_height_in_range() {
        let profile = WalkerProfile::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let fields = profile.extra_fields(1.0, &mut rng);
            assert_eq!(fields.len(), 1);
            assert!((140.0..=210.0).contains(&fields[0]));
        }
    }
}
