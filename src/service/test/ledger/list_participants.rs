use super::*;

/// Tests listing participants of a hosted event.
///
/// Expected: host first (joined at start), then guests by join time
#[test]
fn lists_participants_by_join_time() {
    let mut ledger = ledger();
    let host = member();
    let first = member();
    let second = member();
    let code = start_trivia(&mut ledger, host, base_time());
    ledger
        .join(second, code.as_str(), minutes_after(base_time(), 9))
        .unwrap();
    ledger
        .join(first, code.as_str(), minutes_after(base_time(), 3))
        .unwrap();

    let hosted = ledger.list_participants(host).unwrap();

    assert_eq!(hosted.join_code, code);
    assert_eq!(hosted.event_type, "Trivia Night");
    assert_eq!(hosted.start_time, base_time());
    let order: Vec<MemberId> = hosted.participants.iter().map(|p| p.member_id).collect();
    assert_eq!(order, vec![host, first, second]);
    assert_eq!(
        hosted.participants[1].join_time,
        minutes_after(base_time(), 3)
    );
}

/// Tests that listing is read-only and repeatable.
///
/// Expected: identical results on consecutive calls
#[test]
fn listing_is_idempotent() {
    let mut ledger = ledger();
    let host = member();
    let code = start_trivia(&mut ledger, host, base_time());
    ledger.join(member(), code.as_str(), base_time()).unwrap();
    ledger.join(member(), code.as_str(), base_time()).unwrap();

    let first = ledger.list_participants(host).unwrap();
    let second = ledger.list_participants(host).unwrap();

    assert_eq!(first, second);
}

/// Tests listing without hosting.
///
/// Expected: Err(NotHosting)
#[test]
fn rejects_member_not_hosting() {
    let ledger = ledger();
    let idle = member();

    assert_eq!(
        ledger.list_participants(idle),
        Err(LedgerError::NotHosting(idle))
    );
}
