//! LightBnB fixture loader entry point
//!
//! Run with:
//! ```bash
//! cargo run -p lightbnb-seed -- [SEED_DIR]
//! ```
//!
//! Configuration is loaded from environment variables (see `AppConfig`).
//! The optional argument overrides `SEED_DIR`.

use std::path::PathBuf;

use anyhow::Context;
use lightbnb_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use lightbnb_db::{create_pool, load_dir, run_migrations, Database, DatabaseConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = ?e, "Seeding failed");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let seed_dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| config.seed.dir.clone(), PathBuf::from);

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        seed_dir = %seed_dir.display(),
        "Starting fixture load"
    );

    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .context("failed to connect to database")?;

    run_migrations(&pool)
        .await
        .context("failed to apply migrations")?;

    let db = Database::from_pool(pool);
    let report = load_dir(&db, &seed_dir)
        .await
        .with_context(|| format!("failed to load fixtures from {}", seed_dir.display()))?;

    info!(?report, "Done");
    Ok(())
}
