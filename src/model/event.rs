//! Domain models for active events.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{collections::HashMap, fmt};

use crate::model::member::MemberId;

/// Number of characters in a join code.
pub const JOIN_CODE_LENGTH: usize = 4;

/// Short token members use to join an active event.
///
/// Always four uppercase ASCII letters or digits. Member input is matched
/// case-insensitively by normalising it through [`JoinCode::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JoinCode(String);

impl JoinCode {
    /// Normalises and validates a code typed by a member.
    ///
    /// Surrounding whitespace is ignored and letters are uppercased.
    ///
    /// # Returns
    /// - `Some(JoinCode)` - Input is four ASCII alphanumerics
    /// - `None` - Wrong length or contains other characters
    pub fn parse(input: &str) -> Option<Self> {
        let code = input.trim().to_ascii_uppercase();

        if code.len() == JOIN_CODE_LENGTH && code.chars().all(|c| c.is_ascii_alphanumeric()) {
            Some(Self(code))
        } else {
            None
        }
    }

    /// Wraps a code drawn from the generator charset, which only yields
    /// uppercase alphanumerics of the right length.
    pub(crate) fn from_generated(code: String) -> Self {
        debug_assert!(JoinCode::parse(&code).is_some_and(|parsed| parsed.0 == code));
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JoinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for JoinCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for JoinCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        JoinCode::parse(&raw).ok_or_else(|| {
            de::Error::invalid_value(de::Unexpected::Str(&raw), &"a four character join code")
        })
    }
}

/// An event currently running.
///
/// The creator is enrolled as a participant at `start_time`, so the host
/// accrues points like everyone else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEvent {
    pub join_code: JoinCode,
    /// Catalog id of the event type.
    pub event_id: String,
    /// Member hosting the event.
    pub creator_id: MemberId,
    pub start_time: DateTime<Utc>,
    /// Enrolled members and the moment each joined.
    pub participants: HashMap<MemberId, DateTime<Utc>>,
}

impl ActiveEvent {
    /// Creates an event with the creator enrolled at `start_time`.
    pub fn new(
        join_code: JoinCode,
        event_id: String,
        creator_id: MemberId,
        start_time: DateTime<Utc>,
    ) -> Self {
        let mut participants = HashMap::new();
        participants.insert(creator_id, start_time);

        Self {
            join_code,
            event_id,
            creator_id,
            start_time,
            participants,
        }
    }

    pub fn is_participant(&self, member: MemberId) -> bool {
        self.participants.contains_key(&member)
    }

    /// Participants ordered by join time, ties broken by id.
    pub fn participants_by_join_time(&self) -> Vec<Participant> {
        let mut participants: Vec<Participant> = self
            .participants
            .iter()
            .map(|(&member_id, &join_time)| Participant {
                member_id,
                join_time,
            })
            .collect();

        participants.sort_by(|a, b| {
            a.join_time
                .cmp(&b.join_time)
                .then_with(|| a.member_id.cmp(&b.member_id))
        });

        participants
    }
}

/// One enrolled member of an active event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Participant {
    pub member_id: MemberId,
    pub join_time: DateTime<Utc>,
}

/// Result of starting an event.
#[derive(Debug, Clone, PartialEq)]
pub struct StartedEvent {
    pub join_code: JoinCode,
    pub event_id: String,
    pub event_type: String,
    pub start_time: DateTime<Utc>,
}

/// Result of joining an event.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedEvent {
    pub join_code: JoinCode,
    pub event_type: String,
    pub creator_id: MemberId,
    pub join_time: DateTime<Utc>,
}

/// Read-only view of the event a member hosts.
#[derive(Debug, Clone, PartialEq)]
pub struct HostedEvent {
    pub join_code: JoinCode,
    pub event_type: String,
    pub start_time: DateTime<Utc>,
    /// Ordered by join time, then id.
    pub participants: Vec<Participant>,
}
