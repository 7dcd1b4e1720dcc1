//! Configuration for package generation.

use std::env;

use serde::{Deserialize, Serialize};

use crate::errors::GenerateError;

pub const COUNT_VAR: &str = "SAMPLE_COUNT";
pub const SEED_VAR: &str = "SAMPLE_SEED";

/// Settings for a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of packages to generate.
    pub count: usize,

    /// Seed for reproducible output; fresh entropy when unset.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 10,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Reads `SAMPLE_COUNT` and `SAMPLE_SEED`, falling back to the defaults.
    pub fn from_env() -> Result<Self, GenerateError> {
        Self::from_vars(env::var(COUNT_VAR).ok(), env::var(SEED_VAR).ok())
    }

    fn from_vars(count: Option<String>, seed: Option<String>) -> Result<Self, GenerateError> {
        let mut config = Self::default();
        if let Some(count) = count {
            config.count = parse_var(COUNT_VAR, &count)?;
        }
        if let Some(seed) = seed {
            config.seed = Some(parse_var(SEED_VAR, &seed)?);
        }
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, GenerateError> {
    value
        .trim()
        .parse()
        .map_err(|_| GenerateError::InvalidConfig(format!("{name}={value:?} is not a valid number")))
}
