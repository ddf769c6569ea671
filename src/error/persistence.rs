use std::path::PathBuf;

use thiserror::Error;

/// Failures reading or writing the JSON snapshot files.
///
/// Read failures fall back to empty state at startup. Write failures are
/// logged by the event service and do not roll back in-memory changes.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The snapshot file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file was read but does not hold valid data.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The value could not be encoded as JSON.
    #[error("Failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The snapshot file or its directory could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
