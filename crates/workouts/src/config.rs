use std::{env, path::PathBuf};

use crate::{errors::Result, report::OutputFormat};

pub const PACKAGES_VAR: &str = "WORKOUTS_PACKAGES";
pub const OUTPUT_VAR: &str = "WORKOUTS_OUTPUT";

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// JSON packages file; the built-in samples are used when unset.
    pub packages_path: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::var(PACKAGES_VAR).ok(), env::var(OUTPUT_VAR).ok())
    }

    fn from_vars(packages: Option<String>, output: Option<String>) -> Result<Self> {
        let packages_path = packages
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let output = match output {
            Some(value) => value.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };
        Ok(Self {
            packages_path,
            output,
        })
    }
}
