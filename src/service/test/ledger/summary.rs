use super::*;

/// Tests ranking of totals.
///
/// Expected: members ordered by total points, highest first
#[test]
fn ranks_members_by_total_points() {
    let mut ledger = ledger();
    let low = member();
    let high = member();
    award(&mut ledger, low, base_time(), 5);
    award(&mut ledger, high, base_time(), 20);
    award(&mut ledger, low, minutes_after(base_time(), 60), 5);

    let summary = ledger.summary();

    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].user_id, high);
    assert_eq!(summary[0].total_points, 40.0);
    assert_eq!(summary[1].user_id, low);
    assert_eq!(summary[1].total_points, 20.0);
}

/// Tests tie-breaking.
///
/// Expected: equal totals keep the order members first appear in the records
#[test]
fn ties_keep_first_seen_order() {
    let mut ledger = ledger();
    let first = member();
    let second = member();
    award(&mut ledger, first, base_time(), 10);
    award(&mut ledger, second, base_time(), 10);

    let summary = ledger.summary();

    assert_eq!(summary[0].user_id, first);
    assert_eq!(summary[1].user_id, second);
    assert_eq!(summary[0].total_points, summary[1].total_points);
}

/// Tests that totals are rounded like stored values.
///
/// Ten records of 0.1 points sum to 0.9999999999999999 in floating point.
///
/// Expected: total of exactly 1.0
#[test]
fn totals_are_rounded() {
    let mut ledger = ledger();
    let user = member();
    for i in 0..10 {
        // 3 seconds at 2 points per minute is 0.1 points
        let at = minutes_after(base_time(), i * 10);
        start_trivia(&mut ledger, user, at);
        ledger
            .stop(user, fixture::time::seconds_after(at, 3))
            .unwrap();
    }

    assert_eq!(ledger.summary()[0].total_points, 1.0);
    assert_eq!(ledger.member_total(user), 1.0);
}

/// Tests that the summary is read-only and repeatable.
///
/// Expected: identical results on consecutive calls; empty ledger yields empty summary
#[test]
fn summary_is_idempotent() {
    let mut ledger = ledger();
    assert!(ledger.summary().is_empty());

    award(&mut ledger, member(), base_time(), 3);
    award(&mut ledger, member(), base_time(), 7);

    assert_eq!(ledger.summary(), ledger.summary());
}
