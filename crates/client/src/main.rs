//! GridCiv client binary.
//!
//! Composition root that assembles:
//! 1. Runtime (session worker) over a game program implementation
//! 2. Frontend (terminal UI)
//!
//! The bundled program is the in-memory [`LocalGameProgram`]; swapping in an
//! on-chain implementation means constructing a different [`GameProgram`]
//! here and nothing else.

use std::sync::Arc;

use anyhow::Result;

use client_blockchain_core::{GameChain, GameProgram, LocalGameProgram};
use client_frontend_cli::{CliConfig, CliFrontend, logging};
use client_frontend_core::FrontendConfig;
use gridciv_client::Client;
use runtime::{Runtime, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    let _log_guard = logging::init(&cli_config.log_dir)?;

    tracing::info!("starting GridCiv client");
    tracing::info!(auto_initialize = runtime_config.auto_initialize, seed = ?runtime_config.map_seed, "runtime configuration");

    let backend = LocalGameProgram::new();
    tracing::info!(
        chain = backend.name(),
        network = backend.network(),
        "program backend selected"
    );

    let program: Arc<dyn GameProgram> = Arc::new(backend);
    let runtime = Runtime::new(runtime_config, program);

    let frontend = CliFrontend::new(frontend_config, cli_config);

    let client = Client::builder().runtime(runtime).frontend(frontend).build()?;

    client.run().await?;

    tracing::info!("client shutdown complete");
    Ok(())
}
