//! Rig Inspect HTTP Server Binary
//!
//! Initializes logging and the repository, builds the router and serves it.
//!
//! # Usage
//!
//! ```bash
//! # In-memory repository, no auth
//! cargo run --bin rig-inspect-server
//!
//! # Seeded repository with bearer auth
//! REPOSITORY_CONFIG=backend/repository.toml API_TOKEN=secret \
//!   cargo run --bin rig-inspect-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `API_TOKEN`: Bearer token required on `/api/*` (default: none)
//! - `REPOSITORY_CONFIG`: Path to `repository.toml` (default: search standard locations)
//! - `REPOSITORY_TYPE`: Repository type when no config file is found (default: local)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use rig_inspect::config::ServerConfig;
use rig_inspect::db::{FullRepository, RepositoryFactory};
use rig_inspect::http::{create_router, AppState};

fn init_repository(config: &ServerConfig) -> anyhow::Result<Arc<dyn FullRepository>> {
    if let Some(ref path) = config.repository_config {
        info!("Loading repository config from {}", path.display());
        return Ok(RepositoryFactory::from_config_file(path)?);
    }

    match RepositoryFactory::from_default_config()? {
        Some(repo) => Ok(repo),
        None => {
            warn!("No repository.toml found; falling back to REPOSITORY_TYPE");
            Ok(RepositoryFactory::from_env()?)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Rig Inspect HTTP Server");

    let config = ServerConfig::from_env().map_err(anyhow::Error::msg)?;
    let repository = init_repository(&config)?;
    info!("Repository initialized successfully");

    if config.api_token.is_some() {
        info!("Bearer token required on /api routes");
    }

    let state = AppState::new(repository).with_api_token(config.api_token.clone());
    let app = create_router(state);

    let addr = config.bind_addr().map_err(anyhow::Error::msg)?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
