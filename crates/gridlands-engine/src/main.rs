//! World Engine binary for Gridlands.
//!
//! This is the main entry point that wires together the grid database,
//! the one-shot world generator, the NATS allocation-request listener,
//! and the query API server.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `gridlands-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Connect to `PostgreSQL` and run migrations
//! 4. Generate the world (warned no-op when one already exists)
//! 5. Connect to NATS
//! 6. Start the query API server
//! 7. Serve allocation requests until shutdown

mod error;
mod events;

use std::path::Path;
use std::sync::Arc;

use gridlands_api::{AppState, ServerConfig, spawn_server};
use gridlands_core::config::EngineConfig;
use gridlands_core::generator::{self, GenerationOutcome};
use gridlands_db::{PgGrid, PostgresConfig};
use gridlands_world::{ReservationSet, static_factions};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Application entry point for the World Engine.
///
/// Initializes all subsystems and serves allocation requests until the
/// process is terminated.
///
/// # Errors
///
/// Returns an error if any startup step fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("gridlands-engine starting");
    if !Path::new(CONFIG_PATH).exists() {
        info!("Config file not found, using defaults");
    }
    info!(
        world_name = config.world.name,
        world_size = config.world.size,
        npc_villages = config.world.npc_village_count,
        seed = config.world.seed,
        "Configuration loaded"
    );

    // 3. Connect to PostgreSQL and run migrations.
    let grid = PgGrid::connect(&PostgresConfig::new(&config.infrastructure.postgres_url)).await?;
    grid.run_migrations().await?;

    // 4. Generate the world. The singleton world record makes this a
    //    warned no-op on every boot after the first.
    let reserved = Arc::new(ReservationSet::new());
    let catalog = static_factions(config.world.size).map_err(EngineError::from)?;
    let mut rng = generator::scatter_rng(config.world.seed);
    let outcome = generator::generate_world(
        &grid,
        &reserved,
        &mut rng,
        &config.world,
        &config.placement,
        &catalog,
    )
    .await
    .map_err(EngineError::from)?;
    match outcome {
        GenerationOutcome::Generated(report) => info!(
            tiles = report.tiles_created,
            factions = report.factions_placed,
            npc_villages = report.npc_villages,
            "World generated"
        ),
        GenerationOutcome::Skipped { created_at } => {
            info!(%created_at, "World already exists");
        }
    }

    // 5. Connect to NATS.
    let nats_url = &config.infrastructure.nats_url;
    info!(nats_url, "Connecting to NATS");
    let client = async_nats::connect(nats_url)
        .await
        .map_err(|e| EngineError::Nats {
            message: format!("failed to connect to NATS at {nats_url}: {e}"),
        })?;
    info!("NATS connected");

    // 6. Start the query API server.
    let server_config = ServerConfig {
        host: config.infrastructure.api_host.clone(),
        port: config.infrastructure.api_port,
    };
    let app_state = Arc::new(AppState::new(
        grid.clone(),
        Arc::clone(&reserved),
        config.world.clone(),
        config.placement.clone(),
        config.query.clone(),
    ));
    let _api_handle = spawn_server(&server_config, app_state)
        .await
        .map_err(|e| EngineError::Api {
            message: e.to_string(),
        })?;
    info!(port = server_config.port, "Query API server started");

    // 7. Serve allocation requests until shutdown.
    events::run_request_listener(client, Arc::new(grid), reserved, Arc::new(config)).await?;

    info!("gridlands-engine shutdown complete");
    Ok(())
}

/// Where the engine looks for its configuration file, relative to the
/// current working directory.
const CONFIG_PATH: &str = "gridlands-config.yaml";

/// Load the engine configuration from [`CONFIG_PATH`].
///
/// Defaults (plus environment overrides) apply when the file is absent.
fn load_config() -> Result<EngineConfig, EngineError> {
    Ok(EngineConfig::load_or_default(Path::new(CONFIG_PATH))?)
}
