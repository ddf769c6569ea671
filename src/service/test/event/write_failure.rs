use super::*;

/// Tests that snapshot write failures do not undo state changes.
///
/// The data directory points at a regular file, so every write fails.
///
/// Expected: operations succeed and the ledger keeps the changes
#[tokio::test]
async fn mutations_survive_failed_writes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_default_catalog().build()?;
    let service = EventService::load(
        catalog(&test)?,
        JsonStore::new(&test.catalog_path),
        true,
    )
    .await;
    let host = member();
    let guest = member();

    let started = service.start(host, "trivia").await.unwrap();
    service
        .join(guest, started.join_code.as_str())
        .await
        .unwrap();
    let stopped = service.stop(host).await.unwrap();

    assert_eq!(stopped.finalized_count(), 2);
    assert_eq!(service.records(None).await.len(), 2);
    assert!(service.flush().await.is_err());

    Ok(())
}

/// Tests the shutdown flush.
///
/// Expected: both documents written even when no mutation happened
#[tokio::test]
async fn flush_writes_both_documents() -> Result<(), TestError> {
    let test = TestBuilder::new().with_default_catalog().build()?;
    let service = load_service(&test, true).await?;

    service.flush().await.unwrap();

    assert!(test.data_file_exists(ACTIVE_EVENTS_FILE));
    assert!(test.data_file_exists(RECORDS_FILE));

    Ok(())
}
