//! JSON snapshot persistence for the event ledger.
//!
//! The in-memory ledger is the source of truth while the process runs; these
//! repositories only serialize and deserialize snapshots of it. `JsonStore`
//! handles file mechanics for a data directory, and each repository owns one
//! logical document inside it.

pub mod active_event;
pub mod record;

use serde::{de::DeserializeOwned, Serialize};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::error::persistence::PersistenceError;

/// Reads and writes JSON documents below a data directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Absolute or working-directory-relative path of a document.
    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Reads and parses a document.
    ///
    /// # Arguments
    /// - `file` - Document path relative to the data directory
    ///
    /// # Returns
    /// - `Ok(Some(T))` - Document exists and parsed
    /// - `Ok(None)` - Document is missing or blank
    /// - `Err(PersistenceError::Read)` - Document exists but could not be read
    /// - `Err(PersistenceError::Parse)` - Document content is not a valid `T`
    pub async fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>, PersistenceError> {
        let path = self.path(file);

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(PersistenceError::Read { path, source }),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| PersistenceError::Parse { path, source })
    }

    /// Serializes `value` as pretty JSON and replaces the document.
    ///
    /// Missing directories are created. The content is written to a sibling
    /// temporary file first and renamed into place, so a failed write never
    /// leaves a truncated document behind.
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Path of the written document
    /// - `Err(PersistenceError)` - Serialization, directory creation, write or rename failed
    pub async fn write<T: Serialize + ?Sized>(
        &self,
        file: &str,
        value: &T,
    ) -> Result<PathBuf, PersistenceError> {
        let path = self.path(file);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| PersistenceError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let json = serde_json::to_vec_pretty(value).map_err(|source| {
            PersistenceError::Serialize {
                path: path.clone(),
                source,
            }
        })?;

        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, json)
            .await
            .map_err(|source| PersistenceError::Write {
                path: tmp.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|source| PersistenceError::Write {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }
}
