use super::*;

/// Tests that starting an event writes the active-event snapshot.
///
/// Expected: document keyed by the join code, creator stored as a string id
#[tokio::test]
async fn start_writes_active_snapshot() -> Result<(), TestError> {
    let test = TestBuilder::new().with_default_catalog().build()?;
    let service = load_service(&test, true).await?;
    let host = member();

    let started = service.start(host, "trivia").await.unwrap();

    let document = test.read_data_json(ACTIVE_EVENTS_FILE)?;
    let event = &document[started.join_code.as_str()];
    assert_eq!(event["event_id"], "trivia");
    assert_eq!(event["creator_id"], host.to_string());
    assert!(event["participants"][host.to_string()].is_string());

    Ok(())
}

/// Tests that stopping writes the history and empties the active snapshot.
///
/// Expected: records document holds both participants, active document is `{}`
#[tokio::test]
async fn stop_writes_records_snapshot() -> Result<(), TestError> {
    let test = TestBuilder::new().with_default_catalog().build()?;
    let service = load_service(&test, true).await?;
    let host = member();
    let guest = member();

    let started = service.start(host, "raid").await.unwrap();
    service
        .join(guest, &started.join_code.as_str().to_lowercase())
        .await
        .unwrap();
    service.stop(host).await.unwrap();

    let records = test.read_data_json(RECORDS_FILE)?;
    let records = records["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["user_id"], host.to_string());
    assert_eq!(records[0]["event_type"], "Raid");
    assert_eq!(records[1]["user_id"], guest.to_string());

    let active = test.read_data_json(ACTIVE_EVENTS_FILE)?;
    assert!(active.as_object().unwrap().is_empty());

    Ok(())
}

/// Tests restoring state written by a previous run.
///
/// Expected: a new service sees the same active event and history, and the
/// restored host can still stop their event
#[tokio::test]
async fn reload_restores_events_and_records() -> Result<(), TestError> {
    let test = TestBuilder::new().with_default_catalog().build()?;
    let host = member();
    let guest = member();
    let veteran = member();

    let code = {
        let service = load_service(&test, true).await?;
        service.start(veteran, "trivia").await.unwrap();
        service.stop(veteran).await.unwrap();

        let started = service.start(host, "trivia").await.unwrap();
        service
            .join(guest, started.join_code.as_str())
            .await
            .unwrap();
        started.join_code
    };

    let service = load_service(&test, true).await?;

    let hosted = service.list_participants(host).await.unwrap();
    assert_eq!(hosted.join_code, code);
    assert_eq!(hosted.participants.len(), 2);
    assert_eq!(service.records(Some(veteran)).await.len(), 1);
    assert!(matches!(
        service.join(guest, code.as_str()).await,
        Err(LedgerError::AlreadyJoined { .. })
    ));

    let stopped = service.stop(host).await.unwrap();
    assert_eq!(stopped.finalized_count(), 2);
    assert_eq!(service.records(None).await.len(), 3);

    Ok(())
}

/// Tests startup with no snapshot files.
///
/// Expected: empty ledger, no files created until the first mutation
#[tokio::test]
async fn missing_files_start_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_default_catalog().build()?;

    let service = load_service(&test, true).await?;

    assert!(service.summary().await.is_empty());
    assert!(service.records(None).await.is_empty());
    assert!(!test.data_file_exists(ACTIVE_EVENTS_FILE));
    assert!(!test.data_file_exists(RECORDS_FILE));

    Ok(())
}

/// Tests startup with blank snapshot files.
///
/// Expected: treated the same as missing files
#[tokio::test]
async fn blank_files_start_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_default_catalog()
        .with_data_file(ACTIVE_EVENTS_FILE, "  \n")
        .with_data_file(RECORDS_FILE, "")
        .build()?;

    let service = load_service(&test, true).await?;

    assert!(service.records(None).await.is_empty());
    assert!(service.start(member(), "trivia").await.is_ok());

    Ok(())
}

/// Tests startup with corrupt snapshot files.
///
/// Expected: empty state instead of a startup failure; the next write
/// replaces the corrupt document with a valid one
#[tokio::test]
async fn corrupt_files_start_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_default_catalog()
        .with_data_file(ACTIVE_EVENTS_FILE, "{ not json")
        .with_data_file(RECORDS_FILE, "{\"records\": [{\"user_id\": \"0\"}]}")
        .build()?;

    let service = load_service(&test, true).await?;

    assert!(service.records(None).await.is_empty());

    let host = member();
    service.start(host, "trivia").await.unwrap();
    service.stop(host).await.unwrap();

    let records = test.read_data_json(RECORDS_FILE)?;
    assert_eq!(records["records"].as_array().unwrap().len(), 1);

    Ok(())
}

/// Tests loading snapshots written in the legacy layout.
///
/// Integer member ids and a records document without the `records` key are
/// accepted.
///
/// Expected: integer ids restored; missing key treated as empty history
#[tokio::test]
async fn accepts_integer_ids_and_missing_records_key() -> Result<(), TestError> {
    let active = r#"{
        "QX7Z": {
            "join_code": "QX7Z",
            "event_id": "raid",
            "creator_id": 123456789012345678,
            "start_time": "2025-01-01T18:00:00Z",
            "participants": { "123456789012345678": "2025-01-01T18:00:00Z" }
        }
    }"#;
    let test = TestBuilder::new()
        .with_default_catalog()
        .with_data_file(ACTIVE_EVENTS_FILE, active)
        .with_data_file(RECORDS_FILE, "{}")
        .build()?;

    let service = load_service(&test, true).await?;

    let host = MemberId::new(123456789012345678);
    let hosted = service.list_participants(host).await.unwrap();
    assert_eq!(hosted.join_code.as_str(), "QX7Z");
    assert_eq!(hosted.event_type, "Raid");
    assert!(service.records(None).await.is_empty());

    Ok(())
}
