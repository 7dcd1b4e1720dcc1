//! Prints synthetic sensor packages as a JSON array.
//!
//! Run with:
//! ```
//! SAMPLE_COUNT=20 SAMPLE_SEED=42 cargo run -p sample-data --bin generate-packages > packages.json
//! WORKOUTS_PACKAGES=packages.json cargo run -p workouts
//! ```

use rand::{SeedableRng, rngs::StdRng};
use sample_data::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GeneratorConfig::from_env()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let packages = PackageGenerator::new().mixed(config.count, &mut rng)?;

    tracing::info!("Generated {} packages", packages.len());

    println!("{}", serde_json::to_string_pretty(&packages)?);

    Ok(())
}
