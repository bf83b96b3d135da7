use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fortnite_data_core::config::Config;
use fortnite_data_core::{catalog, battlepass};

/// Output files live next to the installation, one level above the
/// directory the binary sits in
fn base_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe()?;

    exe.parent()
        .and_then(|dir| dir.parent())
        .map(Into::into)
        .ok_or_else(|| anyhow::anyhow!("Failed to resolve base directory from {exe:?}"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fortnite_data_core=debug".into())
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env(base_dir()?)?;

    catalog::run(&config)?;

    println!("Items parsing and saving completed");

    battlepass::run(&config)?;

    println!("All processes were finished");

    Ok(())
}
