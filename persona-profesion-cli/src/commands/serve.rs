//! HTTP server command
//!
//! Runs the persona-profesion API with either the PostgreSQL store or, with
//! `--in-memory`, a process-local store.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser};

use persona_profesion_server::db::{
    create_pool_with_options, migrations, AssignmentStore, MemoryAssignmentStore,
    PgAssignmentStore,
};
use persona_profesion_server::upstream::HttpDirectory;
use persona_profesion_server::{run_server, AppState, ServiceConfig};

/// Options shared by every command that needs configuration
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// TOML configuration file
    #[arg(long, short = 'c', env = "PP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

impl ConfigArgs {
    /// Defaults ← file ← environment ← flags
    pub fn load(&self) -> Result<ServiceConfig> {
        let mut config = ServiceConfig::load(self.config.as_deref())
            .context("Failed to load configuration")?;
        if let Some(url) = &self.database_url {
            config.database_url = Some(url.clone());
        }
        Ok(config)
    }
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub common: ConfigArgs,

    /// Address to bind to (default: 127.0.0.1:5001)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Keep assignments in memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub in_memory: bool,

    /// Persons catalog URL
    #[arg(long)]
    pub personas_url: Option<String>,

    /// Professions catalog URL
    #[arg(long)]
    pub profesiones_url: Option<String>,

    /// Status catalog URL
    #[arg(long)]
    pub estatus_url: Option<String>,
}

impl ServeArgs {
    /// Resolve the final configuration with flags applied last.
    pub fn resolve(&self) -> Result<ServiceConfig> {
        let mut config = self.common.load()?;

        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if self.cors_permissive {
            config.cors_permissive = true;
        }
        if let Some(url) = &self.personas_url {
            config.upstream.persons_url = url.clone();
        }
        if let Some(url) = &self.profesiones_url {
            config.upstream.professions_url = url.clone();
        }
        if let Some(url) = &self.estatus_url {
            config.upstream.statuses_url = url.clone();
        }

        Ok(config)
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.resolve()?;

    let store: Arc<dyn AssignmentStore> = if args.in_memory {
        tracing::warn!("Using in-memory store - assignments are lost on exit");
        Arc::new(MemoryAssignmentStore::new())
    } else {
        let database_url = config.database_url.as_deref().context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, config file, or use --in-memory",
        )?;

        let pool = create_pool_with_options(database_url, config.max_connections)
            .await
            .context("Failed to create database pool")?;
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;

        Arc::new(PgAssignmentStore::new(pool))
    };

    let directory =
        HttpDirectory::new(config.upstream.clone()).context("Failed to build upstream client")?;
    tracing::info!(
        personas = %config.upstream.persons_url,
        profesiones = %config.upstream.professions_url,
        estatus = %config.upstream.statuses_url,
        "Upstream catalogs configured"
    );

    tracing::info!("Starting persona-profesion server on {}", config.bind);

    // Run server (blocks until shutdown)
    run_server(
        AppState::new(store, Arc::new(directory)),
        config.server_config(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
