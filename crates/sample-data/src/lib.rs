//! Synthetic sensor packages for the workouts calculator.
//!
//! This crate produces plausible `(code, values)` packages for runners, walkers and
//! swimmers, to support manual verification and property-style testing.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sample_data::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let packages = PackageGenerator::new().mixed(10, &mut rng)?;
//! let lines = workouts::process_packages(&packages, OutputFormat::Text)?;
//! ```

pub mod config;
pub mod errors;
pub mod generator;
pub mod profiles;

pub use workouts::{ActivityType, models::SensorPackage, report::OutputFormat};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::GeneratorConfig;
    pub use crate::errors::GenerateError;
    pub use crate::generator::PackageGenerator;
    pub use crate::profiles::{AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile};
    pub use crate::{ActivityType, OutputFormat, SensorPackage};
}
