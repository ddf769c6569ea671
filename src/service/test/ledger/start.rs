use super::*;

/// Tests starting an event.
///
/// Verifies the returned code is a valid join code, the event type comes from
/// the catalog, and the creator is enrolled as a participant at the start time.
///
/// Expected: Ok with creator hosting and enrolled
#[test]
fn starts_event_and_enrolls_creator() {
    let mut ledger = ledger();
    let host = member();
    let now = base_time();

    let started = ledger.start(host, "trivia", now, &mut rng()).unwrap();

    assert_eq!(started.event_type, "Trivia Night");
    assert_eq!(started.event_id, "trivia");
    assert_eq!(started.start_time, now);
    assert_eq!(JoinCode::parse(started.join_code.as_str()), Some(started.join_code.clone()));
    assert_eq!(ledger.hosted_code(host), Some(&started.join_code));

    let event = &ledger.active_events()[&started.join_code];
    assert_eq!(event.creator_id, host);
    assert_eq!(event.participants.get(&host), Some(&now));
}

/// Tests that a creator cannot host two events at once.
///
/// Expected: Err(AlreadyHosting) naming the existing code, one active event
#[test]
fn rejects_second_event_from_same_host() {
    let mut ledger = ledger();
    let host = member();
    let code = start_trivia(&mut ledger, host, base_time());

    let result = ledger.start(host, "raid", minutes_after(base_time(), 1), &mut rng());

    assert_eq!(
        result,
        Err(LedgerError::AlreadyHosting {
            creator: host,
            code
        })
    );
    assert_eq!(ledger.active_events().len(), 1);
}

/// Tests starting an event type missing from the catalog.
///
/// Expected: Err(UnknownEventType), creator stays idle
#[test]
fn rejects_unknown_event_type() {
    let mut ledger = ledger();
    let host = member();

    let result = ledger.start(host, "karaoke", base_time(), &mut rng());

    assert_eq!(
        result,
        Err(LedgerError::UnknownEventType("karaoke".to_string()))
    );
    assert!(ledger.hosted_code(host).is_none());
    assert!(ledger.active_events().is_empty());
}

/// Tests that the hosting check comes before the catalog check.
///
/// Expected: Err(AlreadyHosting) even though the event id is unknown
#[test]
fn hosting_check_precedes_catalog_lookup() {
    let mut ledger = ledger();
    let host = member();
    start_trivia(&mut ledger, host, base_time());

    let result = ledger.start(host, "karaoke", base_time(), &mut rng());

    assert!(matches!(result, Err(LedgerError::AlreadyHosting { .. })));
}

/// Tests join code uniqueness across concurrently active events.
///
/// Every start uses an identically seeded generator, so each draw after the
/// first collides at least once and must be re-rolled.
///
/// Expected: 50 distinct codes, one per host
#[test]
fn codes_are_unique_among_active_events() {
    let mut ledger = ledger();

    let codes: Vec<JoinCode> = (0..50)
        .map(|_| start_trivia(&mut ledger, member(), base_time()))
        .collect();

    let mut distinct = codes.clone();
    distinct.sort();
    distinct.dedup();
    assert_eq!(distinct.len(), codes.len());
    assert_eq!(ledger.active_events().len(), 50);
}
