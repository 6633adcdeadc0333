//! lendit API entry point.

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use lendit_server::{serve, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real deployments set the environment directly
    let _ = dotenvy::dotenv();

    init_tracing()?;

    let config = ServerConfig::from_env();
    let pool = lendit_server::db::create_pool(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let state = AppState::new(pool);
    serve(config, state).await?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
