use std::collections::{BTreeMap, HashMap};

use crate::{
    data::JsonStore,
    error::persistence::PersistenceError,
    model::event::{ActiveEvent, JoinCode},
};

/// Document holding the active-event map, keyed by join code.
pub const ACTIVE_EVENTS_FILE: &str = "active_events.json";

pub struct ActiveEventRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> ActiveEventRepository<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Loads the active-event snapshot.
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Persisted events, empty when the document is missing or blank
    /// - `Err(PersistenceError)` - Document unreadable or not a valid event map
    pub async fn load(&self) -> Result<HashMap<JoinCode, ActiveEvent>, PersistenceError> {
        Ok(self
            .store
            .read::<HashMap<JoinCode, ActiveEvent>>(ACTIVE_EVENTS_FILE)
            .await?
            .unwrap_or_default())
    }

    /// Replaces the active-event snapshot. Events are written in code order.
    pub async fn save(&self, events: &HashMap<JoinCode, ActiveEvent>) -> Result<(), PersistenceError> {
        let ordered: BTreeMap<&JoinCode, &ActiveEvent> = events.iter().collect();

        self.store.write(ACTIVE_EVENTS_FILE, &ordered).await?;

        Ok(())
    }
}
