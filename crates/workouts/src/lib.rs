pub mod config;
pub mod errors;
pub mod models;
pub mod packages;
pub mod report;
pub mod training;

use tracing::info;

use crate::{
    config::Config,
    errors::Result,
    models::SensorPackage,
    packages::{load_packages, sample_packages},
    report::{OutputFormat, render_report},
};

pub use crate::{
    errors::WorkoutError,
    models::ActivityType,
    packages::read_package,
    report::InfoMessage,
    training::{Training, Workout},
};

/// Resolves and renders every package in input order, stopping at the first failure.
pub fn process_packages(packages: &[SensorPackage], format: OutputFormat) -> Result<Vec<String>> {
    packages
        .iter()
        .map(|package| render_report(&package.resolve()?, format))
        .collect()
}

pub fn run(config: &Config) -> Result<Vec<String>> {
    let packages = match &config.packages_path {
        Some(path) => load_packages(path)?,
        None => sample_packages(),
    };

    let lines = process_packages(&packages, config.output)?;

    info!("Processed {} workout packages", lines.len());

    Ok(lines)
}
