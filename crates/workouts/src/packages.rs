use std::{fs, path::Path};

use tracing::debug;

use crate::{
    errors::Result,
    models::{ActivityType, SensorPackage},
    training::{Running, SportsWalking, Swimming, Workout},
};

/// Builds the workout for an activity `code` from its positional sensor values.
pub fn read_package(code: &str, values: &[f64]) -> Result<Workout> {
    let workout: Workout = match ActivityType::from_code(code)? {
        ActivityType::Running => Running::from_values(values)?.into(),
        ActivityType::SportsWalking => SportsWalking::from_values(values)?.into(),
        ActivityType::Swimming => Swimming::from_values(values)?.into(),
    };
    debug!("Resolved {} package with {} values", code, values.len());
    Ok(workout)
}

impl SensorPackage {
    pub fn resolve(&self) -> Result<Workout> {
        read_package(&self.workout_type, &self.data)
    }
}

/// Packages the sensor unit sends in its self-test.
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Reads a JSON array of packages.
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<SensorPackage>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let packages: Vec<SensorPackage> = serde_json::from_str(&raw)?;
    debug!("Loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::WorkoutError, training::Training};

    #[test]
    fn test_dispatches_by_code() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert!(matches!(workout, Workout::Swimming(_)));

        let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert!(matches!(workout, Workout::Running(_)));

        let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert!(matches!(workout, Workout::SportsWalking(_)));
    }

    #[test]
    fn test_unknown_code() {
        let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::UnknownActivityCode(code) if code == "XYZ"));
    }

    #[test]
    fn test_unknown_code_checked_before_arity() {
        let err = read_package("BIK", &[]).unwrap_err();
        assert!(matches!(err, WorkoutError::UnknownActivityCode(_)));
    }

    #[test]
    fn test_running_needs_three_values() {
        let err = read_package("RUN", &[15000.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidArgumentCount {
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_walking_rejects_extra_values() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidArgumentCount {
                activity: ActivityType::SportsWalking,
                expected: 4,
                actual: 5,
            }
        ));
    }

    #[test]
    fn test_sample_packages_resolve() {
        let calories: Vec<f64> = sample_packages()
            .iter()
            .map(|p| p.resolve().unwrap().spent_calories())
            .collect();
        assert_eq!(calories.len(), 3);
        assert!((calories[0] - 336.0).abs() < 1e-9);
        assert!((calories[1] - 699.75).abs() < 1e-9);
        assert!((calories[2] - 157.5).abs() < 1e-9);
    }
}
