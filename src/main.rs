//! MyNala Ledger Service
//!
//! Main entry point for the reward ledger. Loads configuration, sets up
//! logging and constructs the shared [`AppState`] the chat transport
//! attaches to. The transport itself (command parsing, webhooks, health
//! checks) is deployed as a separate layer.

use mynala_ledger::config::AppConfig;
use mynala_ledger::error::{AppError, AppResult};
use mynala_ledger::AppState;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load environment variables first
    dotenv::dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        AppError::Config(e)
    })?;

    // Initialize tracing/logging with config
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("mynala_ledger={}", config.log_level).into()),
        )
        .init();

    info!("MyNala ledger service starting");
    info!("Environment: {}", config.environment);
    info!("Log level: {}", config.log_level);
    info!(
        "Creation policy: {}",
        config.ledger.creation_policy.as_str()
    );
    info!("Leaderboard size: {}", config.ledger.leaderboard_size);

    let state = Arc::new(AppState::new(config.ledger.creation_policy));
    info!("✓ Account book initialized ({} accounts)", state.account_repo.count().await);
    info!("MyNala ledger service ready, press Ctrl+C to shut down");

    tokio::signal::ctrl_c().await.map_err(|e| {
        AppError::Config(format!("Failed to listen for shutdown signal: {}", e))
    })?;

    info!("Shutdown signal received, MyNala ledger service stopping");
    Ok(())
}
