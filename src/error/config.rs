use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the environment configuration or the event catalog.
///
/// Every variant is fatal: the process exits before connecting to Discord.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check the `.env.example` file for the required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the environment variable
        name: String,
        /// The rejected value
        value: String,
    },

    /// The event catalog file could not be read.
    #[error("Failed to read event catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The event catalog file is not valid JSON or has the wrong shape.
    #[error("Event catalog is not valid: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Two catalog entries share the same event id.
    #[error("Duplicate event id '{0}' in event catalog")]
    DuplicateEventId(String),

    /// A catalog entry has a negative or non-finite points-per-minute rate.
    #[error("Event '{event_id}' has invalid points_per_minute {rate}")]
    InvalidRate {
        /// Id of the offending entry
        event_id: String,
        /// The rejected rate
        rate: f64,
    },

    /// A required catalog field is blank.
    #[error("Event catalog entry '{event_id}' has an empty {field}")]
    EmptyField {
        /// Id of the offending entry, possibly empty itself
        event_id: String,
        /// Name of the blank field
        field: &'static str,
    },

    /// The catalog parsed but lists no events.
    #[error("Event catalog contains no events")]
    EmptyCatalog,
}
