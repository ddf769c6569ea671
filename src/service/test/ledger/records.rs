use super::*;

/// Tests record ordering.
///
/// Expected: newest start time first
#[test]
fn returns_newest_first() {
    let mut ledger = ledger();
    let user = member();
    award(&mut ledger, user, base_time(), 5);
    award(&mut ledger, user, minutes_after(base_time(), 120), 5);
    award(&mut ledger, user, minutes_after(base_time(), 60), 5);

    let records = ledger.records(None);

    let starts: Vec<_> = records.iter().map(|record| record.start_time).collect();
    assert_eq!(
        starts,
        vec![
            minutes_after(base_time(), 120),
            minutes_after(base_time(), 60),
            base_time(),
        ]
    );
}

/// Tests filtering by member.
///
/// Expected: only the requested member's records; unknown member yields none
#[test]
fn filters_by_member() {
    let mut ledger = ledger();
    let host = member();
    let guest = member();
    let code = start_trivia(&mut ledger, host, base_time());
    ledger.join(guest, code.as_str(), base_time()).unwrap();
    ledger.stop(host, minutes_after(base_time(), 4)).unwrap();

    let guest_records = ledger.records(Some(guest));

    assert_eq!(guest_records.len(), 1);
    assert_eq!(guest_records[0].user_id, guest);
    assert_eq!(ledger.records(None).len(), 2);
    assert!(ledger.records(Some(member())).is_empty());
}

/// Tests per-member totals.
///
/// Expected: sum of the member's points only
#[test]
fn totals_one_member() {
    let mut ledger = ledger();
    let user = member();
    let other = member();
    award(&mut ledger, user, base_time(), 5);
    award(&mut ledger, user, minutes_after(base_time(), 30), 2);
    award(&mut ledger, other, base_time(), 50);

    assert_eq!(ledger.member_total(user), 14.0);
    assert_eq!(ledger.member_total(member()), 0.0);
}
