use chrono::Utc;
use dioxus_logger::tracing;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

use crate::{
    data::{active_event::ActiveEventRepository, record::RecordRepository, JsonStore},
    error::{ledger::LedgerError, persistence::PersistenceError},
    model::{
        catalog::EventCatalog,
        event::{HostedEvent, JoinedEvent, StartedEvent},
        member::MemberId,
        record::{
            KickedParticipant, LeaderboardEntry, ParticipationRecord, ResetOutcome, StoppedEvent,
        },
    },
    service::ledger::EventLedger,
};

/// Shared entry point for command handlers into the event ledger.
///
/// Wraps the ledger in an `Arc<RwLock<..>>` so concurrently dispatched
/// commands serialize their check-then-write sequences: every mutation holds
/// the write lock from validation through the snapshot write. The clock is
/// sampled once per operation, so all participants finalized by one `stop`
/// share the same end time.
///
/// Snapshot writes are best-effort. A failed write is logged and the
/// in-memory change stands; the next successful write or the shutdown flush
/// brings the files back in line.
#[derive(Clone)]
pub struct EventService {
    ledger: Arc<RwLock<EventLedger>>,
    catalog: Arc<EventCatalog>,
    store: JsonStore,
    archive_on_reset: bool,
}

impl EventService {
    /// Creates a service around an already-built ledger.
    pub fn new(ledger: EventLedger, store: JsonStore, archive_on_reset: bool) -> Self {
        let catalog = ledger.shared_catalog();

        Self {
            ledger: Arc::new(RwLock::new(ledger)),
            catalog,
            store,
            archive_on_reset,
        }
    }

    /// Restores the ledger from the snapshots in `store`.
    ///
    /// Missing or blank documents start empty. Unreadable or corrupt documents
    /// are logged and replaced by empty state; their content is lost once the
    /// next snapshot is written.
    ///
    /// # Arguments
    /// - `catalog` - Event types loaded at startup
    /// - `store` - Data directory holding the snapshots
    /// - `archive_on_reset` - Whether `reset` writes a backup of the records first
    pub async fn load(catalog: Arc<EventCatalog>, store: JsonStore, archive_on_reset: bool) -> Self {
        let active = ActiveEventRepository::new(&store)
            .load()
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Starting with no active events: {}", e);
                HashMap::new()
            });
        let records = RecordRepository::new(&store)
            .load()
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Starting with no participation records: {}", e);
                Vec::new()
            });

        let ledger = EventLedger::from_snapshot(catalog, active, records);

        tracing::info!(
            "Loaded {} active events and {} participation records from {}",
            ledger.active_events().len(),
            ledger.participation_records().len(),
            store.dir().display()
        );

        Self::new(ledger, store, archive_on_reset)
    }

    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// Starts an event of type `event_id` hosted by `creator`.
    pub async fn start(
        &self,
        creator: MemberId,
        event_id: &str,
    ) -> Result<StartedEvent, LedgerError> {
        let mut ledger = self.ledger.write().await;
        let now = Utc::now();

        let started = ledger.start(creator, event_id, now, &mut rand::rng())?;

        tracing::info!(
            "Member {} started event {} ({})",
            creator,
            started.join_code,
            started.event_id
        );

        self.persist_active(&ledger).await;

        Ok(started)
    }

    /// Enrolls `participant` in the event with join code `code`.
    pub async fn join(&self, participant: MemberId, code: &str) -> Result<JoinedEvent, LedgerError> {
        let mut ledger = self.ledger.write().await;
        let now = Utc::now();

        let joined = ledger.join(participant, code, now)?;

        tracing::info!("Member {} joined event {}", participant, joined.join_code);

        self.persist_active(&ledger).await;

        Ok(joined)
    }

    /// Stops the event hosted by `creator`, finalizing every participant.
    pub async fn stop(&self, creator: MemberId) -> Result<StoppedEvent, LedgerError> {
        let mut ledger = self.ledger.write().await;
        let now = Utc::now();

        let stopped = ledger.stop(creator, now)?;

        tracing::info!(
            "Member {} stopped event {}, finalized {} participants",
            creator,
            stopped.join_code,
            stopped.finalized_count()
        );

        self.persist_records(&ledger).await;
        self.persist_active(&ledger).await;

        Ok(stopped)
    }

    /// Removes `target` from the event hosted by `creator`.
    pub async fn kick(
        &self,
        creator: MemberId,
        target: MemberId,
    ) -> Result<KickedParticipant, LedgerError> {
        let mut ledger = self.ledger.write().await;
        let now = Utc::now();

        let kicked = ledger.kick(creator, target, now)?;

        tracing::info!(
            "Member {} kicked {} from event {} with {:.2} points",
            creator,
            target,
            kicked.join_code,
            kicked.points_awarded()
        );

        self.persist_records(&ledger).await;
        self.persist_active(&ledger).await;

        Ok(kicked)
    }

    pub async fn list_participants(&self, creator: MemberId) -> Result<HostedEvent, LedgerError> {
        self.ledger.read().await.list_participants(creator)
    }

    pub async fn summary(&self) -> Vec<LeaderboardEntry> {
        self.ledger.read().await.summary()
    }

    pub async fn records(&self, user_id: Option<MemberId>) -> Vec<ParticipationRecord> {
        self.ledger.read().await.records(user_id)
    }

    pub async fn member_total(&self, user_id: MemberId) -> f64 {
        self.ledger.read().await.member_total(user_id)
    }

    /// Clears all active events and participation records.
    ///
    /// When archiving is enabled and there are records, they are written to a
    /// timestamped backup first. If that backup cannot be written the reset is
    /// aborted and nothing is cleared.
    ///
    /// # Returns
    /// - `Ok(ResetOutcome)` - Ledger cleared; `archive` holds the backup path, if any
    /// - `Err(PersistenceError)` - Backup failed, ledger left untouched
    pub async fn reset(&self) -> Result<ResetOutcome, PersistenceError> {
        let mut ledger = self.ledger.write().await;
        let now = Utc::now();

        let archive = if self.archive_on_reset && !ledger.participation_records().is_empty() {
            let path = RecordRepository::new(&self.store)
                .archive(ledger.participation_records(), now)
                .await?;
            tracing::info!(
                "Archived {} participation records to {}",
                ledger.participation_records().len(),
                path.display()
            );
            Some(path)
        } else {
            None
        };

        let outcome = ResetOutcome {
            archive,
            ..ledger.reset()
        };

        tracing::info!(
            "Reset cleared {} active events and {} participation records",
            outcome.cleared_events,
            outcome.cleared_records
        );

        self.persist_records(&ledger).await;
        self.persist_active(&ledger).await;

        Ok(outcome)
    }

    /// Writes both snapshots, reporting the first failure.
    ///
    /// Called on shutdown so the files match memory even after earlier
    /// best-effort writes failed.
    pub async fn flush(&self) -> Result<(), PersistenceError> {
        let ledger = self.ledger.read().await;

        ActiveEventRepository::new(&self.store)
            .save(ledger.active_events())
            .await?;
        RecordRepository::new(&self.store)
            .save(ledger.participation_records())
            .await?;

        Ok(())
    }

    async fn persist_active(&self, ledger: &EventLedger) {
        if let Err(e) = ActiveEventRepository::new(&self.store)
            .save(ledger.active_events())
            .await
        {
            tracing::error!("Failed to persist active events: {}", e);
        }
    }

    async fn persist_records(&self, ledger: &EventLedger) {
        if let Err(e) = RecordRepository::new(&self.store)
            .save(ledger.participation_records())
            .await
        {
            tracing::error!("Failed to persist participation records: {}", e);
        }
    }
}
