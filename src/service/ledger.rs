//! Event lifecycle state machine and participation history.
//!
//! `EventLedger` is the whole core of the bot: it owns the set of active events
//! and the append-only list of participation records. It performs no I/O and
//! never samples the clock itself; every mutating operation receives `now`
//! from the caller so that one operation sees one consistent timestamp.
//!
//! Per creator the ledger is either **Idle** (hosting nothing) or **Hosting**
//! (exactly one active event). `start` moves a creator to Hosting, `stop`
//! moves them back to Idle; `join`, `kick` and the read operations never
//! change the creator's state.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use rand::Rng;
use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::{
    error::ledger::LedgerError,
    model::{
        catalog::{EventCatalog, EventTypeConfig},
        event::{ActiveEvent, HostedEvent, JoinCode, JoinedEvent, StartedEvent},
        member::MemberId,
        record::{
            KickedParticipant, LeaderboardEntry, ParticipationRecord, ResetOutcome, StoppedEvent,
        },
    },
    service::{code::generate_unique_code, points},
};

/// In-memory owner of active events and participation records.
pub struct EventLedger {
    catalog: Arc<EventCatalog>,
    /// Active events keyed by join code.
    active: HashMap<JoinCode, ActiveEvent>,
    /// Index of creator to the code of the event they host.
    hosts: HashMap<MemberId, JoinCode>,
    records: Vec<ParticipationRecord>,
}

impl EventLedger {
    /// Creates an empty ledger.
    pub fn new(catalog: Arc<EventCatalog>) -> Self {
        Self {
            catalog,
            active: HashMap::new(),
            hosts: HashMap::new(),
            records: Vec::new(),
        }
    }

    /// Rebuilds a ledger from persisted snapshots.
    ///
    /// The map key is authoritative for each event's join code. Events are
    /// validated against the current catalog and the one-event-per-host rule:
    ///
    /// - events whose type is no longer configured are dropped
    /// - when a creator appears on several events, the earliest is kept
    /// - a creator missing from their own participant map is enrolled at the
    ///   event's start time
    ///
    /// # Arguments
    /// - `catalog` - Event types loaded at startup
    /// - `active` - Persisted active events keyed by join code
    /// - `records` - Persisted participation records in append order
    ///
    /// # Returns
    /// - `EventLedger` - Ledger holding every snapshot entry that passed validation
    pub fn from_snapshot(
        catalog: Arc<EventCatalog>,
        active: HashMap<JoinCode, ActiveEvent>,
        records: Vec<ParticipationRecord>,
    ) -> Self {
        let mut ledger = Self::new(catalog);
        ledger.records = records;

        let mut events: Vec<(JoinCode, ActiveEvent)> = active.into_iter().collect();
        events.sort_by(|(a_code, a), (b_code, b)| {
            a.start_time
                .cmp(&b.start_time)
                .then_with(|| a_code.cmp(b_code))
        });

        for (code, mut event) in events {
            if !ledger.catalog.contains(&event.event_id) {
                tracing::warn!(
                    "Dropping active event {} with unknown event type '{}'",
                    code,
                    event.event_id
                );
                continue;
            }

            if let Some(existing) = ledger.hosts.get(&event.creator_id) {
                tracing::warn!(
                    "Dropping active event {}: member {} already hosts {}",
                    code,
                    event.creator_id,
                    existing
                );
                continue;
            }

            event.join_code = code.clone();
            event
                .participants
                .entry(event.creator_id)
                .or_insert(event.start_time);

            ledger.hosts.insert(event.creator_id, code.clone());
            ledger.active.insert(code, event);
        }

        ledger
    }

    pub fn shared_catalog(&self) -> Arc<EventCatalog> {
        Arc::clone(&self.catalog)
    }

    /// Active events keyed by join code, for snapshotting.
    pub fn active_events(&self) -> &HashMap<JoinCode, ActiveEvent> {
        &self.active
    }

    /// Participation records in append order, for snapshotting.
    pub fn participation_records(&self) -> &[ParticipationRecord] {
        &self.records
    }

    /// Code of the event `creator` hosts, if any.
    pub fn hosted_code(&self, creator: MemberId) -> Option<&JoinCode> {
        self.hosts.get(&creator)
    }

    /// Starts an event hosted by `creator`.
    ///
    /// Generates a join code unique among active events and enrolls the
    /// creator as a participant at `now`.
    ///
    /// # Returns
    /// - `Ok(StartedEvent)` - Creator is now hosting
    /// - `Err(LedgerError::AlreadyHosting)` - Creator already hosts an event
    /// - `Err(LedgerError::UnknownEventType)` - `event_id` is not in the catalog
    /// - `Err(LedgerError::CodeSpaceExhausted)` - No free join code was found
    pub fn start<R: Rng>(
        &mut self,
        creator: MemberId,
        event_id: &str,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<StartedEvent, LedgerError> {
        if let Some(code) = self.hosts.get(&creator) {
            return Err(LedgerError::AlreadyHosting {
                creator,
                code: code.clone(),
            });
        }

        let config = self
            .catalog
            .lookup(event_id.trim())
            .ok_or_else(|| LedgerError::UnknownEventType(event_id.to_string()))?;

        let existing: HashSet<&JoinCode> = self.active.keys().collect();
        let code = generate_unique_code(&existing, rng)?;

        let started = StartedEvent {
            join_code: code.clone(),
            event_id: config.event_id.clone(),
            event_type: config.event_type.clone(),
            start_time: now,
        };

        let event = ActiveEvent::new(code.clone(), config.event_id.clone(), creator, now);
        self.hosts.insert(creator, code.clone());
        self.active.insert(code, event);

        Ok(started)
    }

    /// Enrolls `participant` in the event identified by `code`.
    ///
    /// `code` is matched case-insensitively.
    ///
    /// # Returns
    /// - `Ok(JoinedEvent)` - Participant enrolled at `now`
    /// - `Err(LedgerError::InvalidCode)` - No active event uses this code
    /// - `Err(LedgerError::AlreadyJoined)` - Participant is already enrolled,
    ///   which includes the creator
    pub fn join(
        &mut self,
        participant: MemberId,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<JoinedEvent, LedgerError> {
        let event = JoinCode::parse(code)
            .and_then(|parsed| self.active.get_mut(&parsed))
            .ok_or_else(|| LedgerError::InvalidCode(code.trim().to_string()))?;

        if event.is_participant(participant) {
            return Err(LedgerError::AlreadyJoined {
                participant,
                code: event.join_code.clone(),
            });
        }

        event.participants.insert(participant, now);

        let event_type = self
            .catalog
            .lookup(&event.event_id)
            .map(|config| config.event_type.clone())
            .unwrap_or_else(|| event.event_id.clone());

        Ok(JoinedEvent {
            join_code: event.join_code.clone(),
            event_type,
            creator_id: event.creator_id,
            join_time: now,
        })
    }

    /// Stops the event hosted by `creator` and finalizes every participant.
    ///
    /// All participants share the single end time `now`. One record is
    /// appended per participant, the creator first and the rest by join time.
    ///
    /// # Returns
    /// - `Ok(StoppedEvent)` - Event removed, creator back to Idle
    /// - `Err(LedgerError::NotHosting)` - Creator hosts no event
    pub fn stop(
        &mut self,
        creator: MemberId,
        now: DateTime<Utc>,
    ) -> Result<StoppedEvent, LedgerError> {
        let code = self
            .hosts
            .get(&creator)
            .cloned()
            .ok_or(LedgerError::NotHosting(creator))?;
        let event = self
            .active
            .get(&code)
            .ok_or(LedgerError::NotHosting(creator))?;
        let config = self
            .catalog
            .lookup(&event.event_id)
            .ok_or_else(|| LedgerError::UnknownEventType(event.event_id.clone()))?;

        let mut participants = event.participants_by_join_time();
        // Stable: moves the host to the front, keeps join order for the rest
        participants.sort_by_key(|participant| participant.member_id != creator);

        let finalized: Vec<ParticipationRecord> = participants
            .iter()
            .map(|participant| {
                finalize(config, participant.member_id, participant.join_time, now)
            })
            .collect();
        let event_type = config.event_type.clone();

        self.active.remove(&code);
        self.hosts.remove(&creator);
        self.records.extend(finalized.iter().cloned());

        Ok(StoppedEvent {
            join_code: code,
            event_type,
            end_time: now,
            records: finalized,
        })
    }

    /// Removes `target` from the event hosted by `creator`, finalizing only
    /// the target. The event stays active for everyone else.
    ///
    /// # Returns
    /// - `Ok(KickedParticipant)` - Target finalized and removed
    /// - `Err(LedgerError::NotHosting)` - Creator hosts no event
    /// - `Err(LedgerError::CannotKickSelf)` - Target is the creator
    /// - `Err(LedgerError::TargetNotParticipant)` - Target is not enrolled
    pub fn kick(
        &mut self,
        creator: MemberId,
        target: MemberId,
        now: DateTime<Utc>,
    ) -> Result<KickedParticipant, LedgerError> {
        let code = self
            .hosts
            .get(&creator)
            .cloned()
            .ok_or(LedgerError::NotHosting(creator))?;

        if target == creator {
            return Err(LedgerError::CannotKickSelf(creator));
        }

        let event = self
            .active
            .get_mut(&code)
            .ok_or(LedgerError::NotHosting(creator))?;
        let config = self
            .catalog
            .lookup(&event.event_id)
            .ok_or_else(|| LedgerError::UnknownEventType(event.event_id.clone()))?;

        let join_time = event
            .participants
            .remove(&target)
            .ok_or_else(|| LedgerError::TargetNotParticipant {
                target,
                code: code.clone(),
            })?;

        let record = finalize(config, target, join_time, now);
        let event_type = config.event_type.clone();
        self.records.push(record.clone());

        Ok(KickedParticipant {
            join_code: code,
            event_type,
            record,
        })
    }

    /// Lists the participants of the event hosted by `creator`.
    ///
    /// # Returns
    /// - `Ok(HostedEvent)` - Participants ordered by join time, then id
    /// - `Err(LedgerError::NotHosting)` - Creator hosts no event
    pub fn list_participants(&self, creator: MemberId) -> Result<HostedEvent, LedgerError> {
        let event = self
            .hosts
            .get(&creator)
            .and_then(|code| self.active.get(code))
            .ok_or(LedgerError::NotHosting(creator))?;

        let event_type = self
            .catalog
            .lookup(&event.event_id)
            .map(|config| config.event_type.clone())
            .unwrap_or_else(|| event.event_id.clone());

        Ok(HostedEvent {
            join_code: event.join_code.clone(),
            event_type,
            start_time: event.start_time,
            participants: event.participants_by_join_time(),
        })
    }

    /// Total points per member, highest first.
    ///
    /// Ties keep the order in which members first appear in the records.
    pub fn summary(&self) -> Vec<LeaderboardEntry> {
        let mut position: HashMap<MemberId, usize> = HashMap::new();
        let mut totals: Vec<LeaderboardEntry> = Vec::new();

        for record in &self.records {
            match position.get(&record.user_id) {
                Some(&index) => totals[index].total_points += record.points_earned,
                None => {
                    position.insert(record.user_id, totals.len());
                    totals.push(LeaderboardEntry {
                        user_id: record.user_id,
                        total_points: record.points_earned,
                    });
                }
            }
        }

        for entry in &mut totals {
            entry.total_points = points::round2(entry.total_points);
        }

        totals.sort_by(|a, b| b.total_points.total_cmp(&a.total_points));
        totals
    }

    /// Participation records, newest first by start time.
    ///
    /// Records with equal start times keep their append order.
    pub fn records(&self, user_id: Option<MemberId>) -> Vec<ParticipationRecord> {
        let mut records: Vec<ParticipationRecord> = self
            .records
            .iter()
            .filter(|record| user_id.is_none_or(|id| record.user_id == id))
            .cloned()
            .collect();

        records.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        records
    }

    /// Total points earned by one member across all records.
    pub fn member_total(&self, user_id: MemberId) -> f64 {
        let total: f64 = self
            .records
            .iter()
            .filter(|record| record.user_id == user_id)
            .map(|record| record.points_earned)
            .sum();

        points::round2(total)
    }

    /// Clears every active event and every record.
    ///
    /// Callers wanting an archive must copy `participation_records()` first.
    pub fn reset(&mut self) -> ResetOutcome {
        let outcome = ResetOutcome {
            cleared_events: self.active.len(),
            cleared_records: self.records.len(),
            archive: None,
        };

        self.active.clear();
        self.hosts.clear();
        self.records.clear();

        outcome
    }
}

/// Builds the record for one participant leaving an event at `end_time`.
fn finalize(
    config: &EventTypeConfig,
    user_id: MemberId,
    join_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> ParticipationRecord {
    let accrual = points::compute(join_time, end_time, config.points_per_minute);

    ParticipationRecord {
        user_id,
        event_id: config.event_id.clone(),
        event_type: config.event_type.clone(),
        start_time: join_time,
        end_time,
        duration_minutes: accrual.duration_minutes,
        points_earned: accrual.points,
    }
}
