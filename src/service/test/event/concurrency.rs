use super::*;

/// Tests two simultaneous starts by the same creator.
///
/// Expected: exactly one succeeds, the other reports AlreadyHosting
#[tokio::test]
async fn concurrent_starts_allow_one_event_per_host() -> Result<(), TestError> {
    let test = TestBuilder::new().with_default_catalog().build()?;
    let service = load_service(&test, true).await?;
    let host = member();

    let (first, second) = tokio::join!(service.start(host, "trivia"), service.start(host, "raid"));

    let results = [first, second];
    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results
        .iter()
        .any(|result| matches!(result, Err(LedgerError::AlreadyHosting { .. }))));

    Ok(())
}

/// Tests many members joining one event from separate tasks.
///
/// Expected: every member enrolled exactly once
#[tokio::test]
async fn concurrent_joins_enroll_everyone() -> Result<(), TestError> {
    let test = TestBuilder::new().with_default_catalog().build()?;
    let service = load_service(&test, true).await?;
    let host = member();
    let code = service.start(host, "trivia").await.unwrap().join_code;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = service.clone();
        let code = code.clone();
        handles.push(tokio::spawn(async move {
            service.join(member(), code.as_str()).await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    let hosted = service.list_participants(host).await.unwrap();
    assert_eq!(hosted.participants.len(), 9);

    Ok(())
}
