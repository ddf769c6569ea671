//! Domain models for finalized participation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::model::{event::JoinCode, member::MemberId};

/// Historical record of one member's participation in one event.
///
/// Created only when a participant is finalized by `stop` or `kick`.
/// Records are append-only and only removed by an administrative reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipationRecord {
    pub user_id: MemberId,
    pub event_id: String,
    /// Event label at the time the record was written.
    pub event_type: String,
    /// When the member joined the event.
    pub start_time: DateTime<Utc>,
    /// When the member was finalized.
    pub end_time: DateTime<Utc>,
    pub duration_minutes: f64,
    pub points_earned: f64,
}

/// One row of the points leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub user_id: MemberId,
    pub total_points: f64,
}

/// Result of stopping an event.
#[derive(Debug, Clone, PartialEq)]
pub struct StoppedEvent {
    pub join_code: JoinCode,
    pub event_type: String,
    pub end_time: DateTime<Utc>,
    /// One record per finalized participant, host first.
    pub records: Vec<ParticipationRecord>,
}

impl StoppedEvent {
    pub fn finalized_count(&self) -> usize {
        self.records.len()
    }
}

/// Result of kicking a participant.
#[derive(Debug, Clone, PartialEq)]
pub struct KickedParticipant {
    pub join_code: JoinCode,
    pub event_type: String,
    pub record: ParticipationRecord,
}

impl KickedParticipant {
    pub fn points_awarded(&self) -> f64 {
        self.record.points_earned
    }
}

/// Result of an administrative reset.
#[derive(Debug, Clone, PartialEq)]
pub struct ResetOutcome {
    pub cleared_events: usize,
    pub cleared_records: usize,
    /// Backup file holding the cleared records, when archiving is enabled.
    pub archive: Option<PathBuf>,
}
