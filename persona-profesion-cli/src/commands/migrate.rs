//! Apply the database schema and exit

use anyhow::{Context, Result};
use clap::Parser;

use persona_profesion_server::db::{create_pool, migrations};

use super::serve::ConfigArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub common: ConfigArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let config = args.common.load()?;
    let database_url = config
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or config file")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    Ok(())
}
