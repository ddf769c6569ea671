use dioxus_logger::tracing::{self, Level};
use std::{path::Path, sync::Arc};

use crate::{
    config::Config,
    data::JsonStore,
    error::{config::ConfigError, AppError},
    model::catalog::EventCatalog,
    service::event::EventService,
};

/// Installs the global `tracing` subscriber.
///
/// Must run once, before anything logs. A second call fails because the
/// subscriber is already set.
pub fn init_logger(level: Level) -> Result<(), AppError> {
    dioxus_logger::init(level)
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logger: {}", e)))
}

/// Reads and validates the event catalog.
///
/// The catalog is loaded once at startup; the bot refuses to start without a
/// valid one.
///
/// # Arguments
/// - `path` - Location of the catalog document
///
/// # Returns
/// - `Ok(EventCatalog)` - Catalog parsed and validated
/// - `Err(AppError::ConfigErr)` - File unreadable, malformed or invalid
pub async fn load_catalog(path: &Path) -> Result<EventCatalog, AppError> {
    let document = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = EventCatalog::from_json(&document)?;

    tracing::info!(
        "Loaded {} event types from {}",
        catalog.len(),
        path.display()
    );

    Ok(catalog)
}

/// Restores the event service from the data directory.
///
/// Never fails: unreadable snapshots are logged and replaced by empty state.
pub async fn load_events(config: &Config, catalog: EventCatalog) -> EventService {
    EventService::load(
        Arc::new(catalog),
        JsonStore::new(&config.data_dir),
        config.archive_on_reset,
    )
    .await
}
