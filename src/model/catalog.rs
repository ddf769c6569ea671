//! Event catalog: the static set of configured event types.
//!
//! The catalog is loaded once at startup from a JSON document and never
//! mutated afterwards. Two document shapes are accepted:
//!
//! ```json
//! { "events": [ { "event_id": "trivia", "event_type": "Trivia Night", "points_per_minute": 2 } ] }
//! ```
//!
//! ```json
//! { "trivia": { "event_type": "Trivia Night", "points_per_minute": 2 } }
//! ```
//!
//! In the list form `event_id` may be a string or an integer; it is always
//! normalised to a string.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use crate::error::config::ConfigError;

/// One configured event type.
#[derive(Debug, Clone, PartialEq)]
pub struct EventTypeConfig {
    /// Unique identifier members pass to `/event start`.
    pub event_id: String,
    /// Human-readable label shown in replies and stored on records.
    pub event_type: String,
    /// Non-negative accrual rate.
    pub points_per_minute: f64,
}

/// Read-only lookup of event types by id, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    entries: Vec<EventTypeConfig>,
    index: HashMap<String, usize>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCatalog {
    Listed { events: Vec<RawListedEntry> },
    Keyed(BTreeMap<String, RawKeyedEntry>),
}

#[derive(Deserialize)]
struct RawListedEntry {
    event_id: RawEventId,
    event_type: String,
    points_per_minute: f64,
}

#[derive(Deserialize)]
struct RawKeyedEntry {
    event_type: String,
    points_per_minute: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEventId {
    Text(String),
    Number(i64),
}

impl RawEventId {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

impl EventCatalog {
    /// Parses and validates a catalog document.
    ///
    /// # Returns
    /// - `Ok(EventCatalog)` - Every entry is valid and ids are unique
    /// - `Err(ConfigError)` - Malformed JSON, missing fields, blank ids or labels,
    ///   negative or non-finite rates, duplicate ids, or no entries at all
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let raw: RawCatalog = serde_json::from_str(document)?;

        let entries = match raw {
            RawCatalog::Listed { events } => events
                .into_iter()
                .map(|entry| EventTypeConfig {
                    event_id: entry.event_id.into_string(),
                    event_type: entry.event_type,
                    points_per_minute: entry.points_per_minute,
                })
                .collect(),
            RawCatalog::Keyed(events) => events
                .into_iter()
                .map(|(event_id, entry)| EventTypeConfig {
                    event_id,
                    event_type: entry.event_type,
                    points_per_minute: entry.points_per_minute,
                })
                .collect(),
        };

        Self::from_entries(entries)
    }

    /// Builds a catalog from already-parsed entries, applying the same
    /// validation as [`EventCatalog::from_json`].
    pub fn from_entries(entries: Vec<EventTypeConfig>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut index = HashMap::with_capacity(entries.len());
        let mut cleaned = Vec::with_capacity(entries.len());

        for entry in entries {
            let event_id = entry.event_id.trim().to_string();
            let event_type = entry.event_type.trim().to_string();

            if event_id.is_empty() {
                return Err(ConfigError::EmptyField {
                    event_id,
                    field: "event_id",
                });
            }
            if event_type.is_empty() {
                return Err(ConfigError::EmptyField {
                    event_id,
                    field: "event_type",
                });
            }
            if !entry.points_per_minute.is_finite() || entry.points_per_minute < 0.0 {
                return Err(ConfigError::InvalidRate {
                    event_id,
                    rate: entry.points_per_minute,
                });
            }
            if index.contains_key(&event_id) {
                return Err(ConfigError::DuplicateEventId(event_id));
            }

            index.insert(event_id.clone(), cleaned.len());
            cleaned.push(EventTypeConfig {
                event_id,
                event_type,
                points_per_minute: entry.points_per_minute,
            });
        }

        Ok(Self {
            entries: cleaned,
            index,
        })
    }

    pub fn lookup(&self, event_id: &str) -> Option<&EventTypeConfig> {
        self.index.get(event_id).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, event_id: &str) -> bool {
        self.index.contains_key(event_id)
    }

    /// Iterates entries in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &EventTypeConfig> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
