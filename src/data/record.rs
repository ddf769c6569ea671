use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{
    data::JsonStore, error::persistence::PersistenceError, model::record::ParticipationRecord,
};

/// Document holding the participation history.
pub const RECORDS_FILE: &str = "event_records.json";

/// Directory, relative to the data directory, receiving reset archives.
pub const BACKUP_DIR: &str = "backups";

#[derive(Deserialize)]
struct RecordsDocument {
    #[serde(default)]
    records: Vec<ParticipationRecord>,
}

#[derive(Serialize)]
struct RecordsDocumentRef<'a> {
    records: &'a [ParticipationRecord],
}

pub struct RecordRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> RecordRepository<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Loads the participation history in append order.
    ///
    /// # Returns
    /// - `Ok(Vec)` - Persisted records, empty when the document is missing or blank
    /// - `Err(PersistenceError)` - Document unreadable or not a valid record list
    pub async fn load(&self) -> Result<Vec<ParticipationRecord>, PersistenceError> {
        Ok(self
            .store
            .read::<RecordsDocument>(RECORDS_FILE)
            .await?
            .map(|document| document.records)
            .unwrap_or_default())
    }

    /// Replaces the participation history.
    pub async fn save(&self, records: &[ParticipationRecord]) -> Result<(), PersistenceError> {
        self.store
            .write(RECORDS_FILE, &RecordsDocumentRef { records })
            .await?;

        Ok(())
    }

    /// Writes `records` to a timestamped backup document.
    ///
    /// The backup uses the same format as the live history so it can be
    /// restored by copying it over `event_records.json`.
    ///
    /// # Arguments
    /// - `records` - Records to archive
    /// - `now` - Timestamp used in the backup file name
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Path of the written backup
    /// - `Err(PersistenceError)` - Backup could not be written
    pub async fn archive(
        &self,
        records: &[ParticipationRecord],
        now: DateTime<Utc>,
    ) -> Result<PathBuf, PersistenceError> {
        let file = format!(
            "{}/event_records_{}.json",
            BACKUP_DIR,
            now.format("%Y%m%d_%H%M%S_%3f")
        );

        self.store
            .write(&file, &RecordsDocumentRef { records })
            .await
    }
}
