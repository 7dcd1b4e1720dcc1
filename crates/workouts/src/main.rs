use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workouts::{config::Config, run};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env()?;

    match &config.packages_path {
        Some(path) => tracing::info!("Reading packages from {}", path.display()),
        None => tracing::info!("No packages file set, using built-in samples"),
    }

    let lines = run(&config).inspect_err(|e| tracing::error!("Workout processing failed: {e}"))?;

    for line in lines {
        println!("{line}");
    }

    Ok(())
}
