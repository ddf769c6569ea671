use super::*;

/// Tests clearing the ledger.
///
/// Expected: counts reported, no events, no records, hosts idle
#[test]
fn clears_events_and_records() {
    let mut ledger = ledger();
    let host = member();
    award(&mut ledger, member(), base_time(), 5);
    let code = start_trivia(&mut ledger, host, base_time());

    let outcome = ledger.reset();

    assert_eq!(outcome.cleared_events, 1);
    assert_eq!(outcome.cleared_records, 1);
    assert!(outcome.archive.is_none());
    assert!(ledger.active_events().is_empty());
    assert!(ledger.records(None).is_empty());
    assert!(ledger.summary().is_empty());
    assert_eq!(
        ledger.join(member(), code.as_str(), base_time()),
        Err(LedgerError::InvalidCode(code.to_string()))
    );
    assert!(ledger.start(host, "trivia", base_time(), &mut rng()).is_ok());
}
