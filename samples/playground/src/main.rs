//! Playground binary.

use clap::Parser;
use playground::{PlaygroundConfig, PlaygroundError, run};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), PlaygroundError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "playground=info".into()))
        .with(fmt::layer())
        .init();

    let config = PlaygroundConfig::parse();
    tracing::info!(
        values = ?config.values,
        functions = config.functions,
        offset = config.offset,
        "running playground"
    );

    let report = run(&config).inspect_err(|error| tracing::error!(%error, "playground failed"))?;
    tracing::info!(
        applied = report.applied.len(),
        bound = report.bound_to_none.len(),
        "playground finished"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
