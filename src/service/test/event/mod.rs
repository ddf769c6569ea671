use std::sync::Arc;
use test_utils::{builder::TestBuilder, context::TestContext, error::TestError, fixture};

use crate::{
    data::{active_event::ACTIVE_EVENTS_FILE, record::RECORDS_FILE, JsonStore},
    error::ledger::LedgerError,
    model::{catalog::EventCatalog, member::MemberId},
    service::event::EventService,
};

mod concurrency;
mod persistence;
mod reset;
mod write_failure;

/// Loads the catalog written by the test context.
fn catalog(test: &TestContext) -> Result<Arc<EventCatalog>, TestError> {
    let catalog = EventCatalog::from_json(&test.catalog_document()?).unwrap();
    Ok(Arc::new(catalog))
}

/// Builds a service over the context's data directory, restoring any snapshots.
async fn load_service(test: &TestContext, archive_on_reset: bool) -> Result<EventService, TestError> {
    Ok(EventService::load(
        catalog(test)?,
        JsonStore::new(&test.data_dir),
        archive_on_reset,
    )
    .await)
}

fn member() -> MemberId {
    MemberId::new(fixture::member::next_member_id())
}
