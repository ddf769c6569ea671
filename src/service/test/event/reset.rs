use super::*;
use crate::data::record::BACKUP_DIR;

/// Seeds one finished event with two participants and one running event.
async fn seed(service: &EventService) -> MemberId {
    let host = member();
    let started = service.start(host, "trivia").await.unwrap();
    service
        .join(member(), started.join_code.as_str())
        .await
        .unwrap();
    service.stop(host).await.unwrap();

    let running = member();
    service.start(running, "raid").await.unwrap();
    running
}

/// Tests reset with archiving enabled.
///
/// Expected: backup file holds the pre-reset records; live history and
/// active events are empty afterwards
#[tokio::test]
async fn archives_then_clears() -> Result<(), TestError> {
    let test = TestBuilder::new().with_default_catalog().build()?;
    let service = load_service(&test, true).await?;
    let running = seed(&service).await;

    let outcome = service.reset().await.unwrap();

    assert_eq!(outcome.cleared_events, 1);
    assert_eq!(outcome.cleared_records, 2);
    let archive = outcome.archive.unwrap();

    let backups = test.list_data_dir(BACKUP_DIR)?;
    assert_eq!(backups, vec![archive.clone()]);
    let name = archive.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("event_records_"));
    assert!(name.ends_with(".json"));

    let backup: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&archive)?)?;
    assert_eq!(backup["records"].as_array().unwrap().len(), 2);

    let live = test.read_data_json(RECORDS_FILE)?;
    assert!(live["records"].as_array().unwrap().is_empty());
    let active = test.read_data_json(ACTIVE_EVENTS_FILE)?;
    assert!(active.as_object().unwrap().is_empty());

    assert!(service.records(None).await.is_empty());
    assert!(matches!(
        service.list_participants(running).await,
        Err(LedgerError::NotHosting(_))
    ));

    Ok(())
}

/// Tests reset with archiving disabled.
///
/// Expected: state cleared, no backup written
#[tokio::test]
async fn skips_archive_when_disabled() -> Result<(), TestError> {
    let test = TestBuilder::new().with_default_catalog().build()?;
    let service = load_service(&test, false).await?;
    seed(&service).await;

    let outcome = service.reset().await.unwrap();

    assert!(outcome.archive.is_none());
    assert_eq!(outcome.cleared_records, 2);
    assert!(test.list_data_dir(BACKUP_DIR)?.is_empty());
    assert!(service.summary().await.is_empty());

    Ok(())
}

/// Tests reset of an empty history with archiving enabled.
///
/// Expected: no backup written for zero records
#[tokio::test]
async fn skips_archive_for_empty_history() -> Result<(), TestError> {
    let test = TestBuilder::new().with_default_catalog().build()?;
    let service = load_service(&test, true).await?;

    let outcome = service.reset().await.unwrap();

    assert!(outcome.archive.is_none());
    assert_eq!(outcome.cleared_events, 0);
    assert!(test.list_data_dir(BACKUP_DIR)?.is_empty());

    Ok(())
}

/// Tests reset when the backup cannot be written.
///
/// A plain file named like the backup directory blocks the archive.
///
/// Expected: Err, and nothing is cleared
#[tokio::test]
async fn failed_archive_aborts_reset() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_default_catalog()
        .with_data_file(BACKUP_DIR, "not a directory")
        .build()?;
    let service = load_service(&test, true).await?;
    let running = seed(&service).await;

    let result = service.reset().await;

    assert!(result.is_err());
    assert_eq!(service.records(None).await.len(), 2);
    assert!(service.list_participants(running).await.is_ok());

    Ok(())
}
