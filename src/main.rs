mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;

use dioxus_logger::tracing;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_logger(config.log_level)?;

    if let Err(e) = run(config).await {
        tracing::error!("Fatal: {}", e);
        return Err(e);
    }

    Ok(())
}

async fn run(config: Config) -> Result<(), AppError> {
    let catalog = startup::load_catalog(&config.event_config_path).await?;
    let events = startup::load_events(&config, catalog).await;

    let client = bot::start::init_bot(&config, events.clone()).await?;

    // Flush snapshots before the shards go down so the files match memory
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }

        tracing::info!("Shutdown signal received, flushing event data");
        match events.flush().await {
            Ok(()) => tracing::info!("Event data flushed"),
            Err(e) => tracing::error!("Failed to flush event data: {}", e),
        }

        shard_manager.shutdown_all().await;
    });

    bot::start::start_bot(client).await
}
