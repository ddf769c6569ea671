use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, SeedableRng};
use std::{collections::HashMap, sync::Arc};
use test_utils::fixture::{
    self,
    time::{base_time, minutes_after},
};

use crate::{
    error::ledger::LedgerError,
    model::{
        catalog::EventCatalog,
        event::{ActiveEvent, JoinCode},
        member::MemberId,
        record::ParticipationRecord,
    },
    service::ledger::EventLedger,
};

mod list_participants;
mod records;
mod reset;
mod start;
mod summary;

/// Catalog with trivia (2 points per minute) and raid (1.5 points per minute).
fn catalog() -> Arc<EventCatalog> {
    let document = fixture::catalog::catalog_json(&[
        fixture::catalog::trivia(),
        fixture::catalog::raid(),
    ]);
    Arc::new(EventCatalog::from_json(&document).unwrap())
}

fn ledger() -> EventLedger {
    EventLedger::new(catalog())
}

fn member() -> MemberId {
    MemberId::new(fixture::member::next_member_id())
}

/// Deterministic generator; every call starts from the same seed.
fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

/// Starts a trivia event for `host` at `at` and returns its join code.
fn start_trivia(ledger: &mut EventLedger, host: MemberId, at: DateTime<Utc>) -> JoinCode {
    ledger.start(host, "trivia", at, &mut rng()).unwrap().join_code
}

/// Appends records for `user` by running a one-member event of `minutes`.
fn award(ledger: &mut EventLedger, user: MemberId, at: DateTime<Utc>, minutes: i64) {
    start_trivia(ledger, user, at);
    ledger.stop(user, minutes_after(at, minutes)).unwrap();
}
