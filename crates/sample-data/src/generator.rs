//! Sensor package generation from athletic profiles.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;
use workouts::models::SensorPackage;

use crate::{
    errors::GenerateError,
    profiles::{AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile},
};

/// Generates sensor packages by cycling through a set of profiles.
pub struct PackageGenerator {
    profiles: Vec<Box<dyn AthleteProfile>>,
}

impl Default for PackageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageGenerator {
    /// Creates a generator with one default profile per activity type,
    /// in the order swimming, running, walking.
    pub fn new() -> Self {
        Self::with_profiles(vec![
            Box::new(SwimmerProfile::default()),
            Box::new(RunnerProfile::default()),
            Box::new(WalkerProfile::default()),
        ])
    }

    pub fn with_profiles(profiles: Vec<Box<dyn AthleteProfile>>) -> Self {
        Self { profiles }
    }

    /// Samples one package for `profile`.
    pub fn package(
        &self,
        profile: &dyn AthleteProfile,
        rng: &mut impl Rng,
    ) -> Result<SensorPackage, GenerateError> {
        let (min_hours, max_hours) = profile.duration_range();
        let duration = round_to(rng.gen_range(min_hours..=max_hours), 2);

        let cadence_factor = if profile.variance() > 0.0 {
            Normal::new(1.0, profile.variance())?
                .sample(rng)
                .clamp(0.7, 1.3)
        } else {
            1.0
        };
        let action = (profile.cadence() * cadence_factor * duration * 60.0).round();

        let (mean_weight, weight_std) = profile.weight();
        let weight = Normal::new(mean_weight, weight_std)?
            .sample(rng)
            .clamp(40.0, 150.0)
            .round();

        let mut data = vec![action, duration, weight];
        data.extend(profile.extra_fields(duration, rng));

        let activity = profile.activity_type();
        debug!("Generated {} package: {:?}", activity.code(), data);

        Ok(SensorPackage::new(activity.code(), data))
    }

    /// Generates `count` packages, rotating through the configured profiles.
    pub fn mixed(
        &self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<SensorPackage>, GenerateError> {
        if self.profiles.is_empty() {
            return Err(GenerateError::InvalidConfig(
                "no athlete profiles configured".to_string(),
            ));
        }

        self.profiles
            .iter()
            .cycle()
            .take(count)
            .map(|profile| self.package(profile.as_ref(), rng))
            .collect()
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use workouts::{ActivityType, Training, read_package};

    #[test]
    fn test_packages_have_expected_arity() {
        let generator = PackageGenerator::new();
        let mut rng = StdRng::seed_from_u64(12345);
        let packages = generator.mixed(30, &mut rng).unwrap();

        assert_eq!(packages.len(), 30);
        for package in &packages {
            let activity = ActivityType::from_code(&package.workout_type).unwrap();
            assert_eq!(package.data.len(), activity.field_count());
        }
    }

    #[test]
    fn test_rotates_through_profiles() {
        let generator = PackageGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);
        let codes: Vec<String> = generator
            .mixed(4, &mut rng)
            .unwrap()
            .into_iter()
            .map(|p| p.workout_type)
            .collect();
        assert_eq!(codes, ["SWM", "RUN", "WLK", "SWM"]);
    }

    #[test]
    fn test_generated_packages_resolve() {
        let generator = PackageGenerator::new();
        let mut rng = StdRng::seed_from_u64(99);
        for package in generator.mixed(50, &mut rng).unwrap() {
            let workout = read_package(&package.workout_type, &package.data).unwrap();
            assert_eq!(workout.activity_type().code(), package.workout_type);
        }
    }

    #[test]
    fn test_same_seed_same_packages() {
        let generator = PackageGenerator::new();
        let a = generator.mixed(6, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generator.mixed(6, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_values_are_plausible() {
        let generator = PackageGenerator::with_profiles(vec![Box::new(RunnerProfile::elite())]);
        let mut rng = StdRng::seed_from_u64(2024);
        for package in generator.mixed(20, &mut rng).unwrap() {
            let [action, duration, weight] = package.data[..] else {
                panic!("running package should have three values");
            };
            assert!((0.3..=2.0).contains(&duration));
            assert!((40.0..=150.0).contains(&weight));
            // cadence factor is clamped to 0.7-1.3
            let per_minute = action / (duration * 60.0);
            assert!((185.0 * 0.69..=185.0 * 1.31).contains(&per_minute));
        }
    }

    #[test]
    fn test_empty_profiles_rejected() {
        let generator = PackageGenerator::with_profiles(Vec::new());
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generator.mixed(1, &mut rng),
            Err(GenerateError::InvalidConfig(_))
        ));
    }
}
