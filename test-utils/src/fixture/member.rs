use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique member ids in tests.
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Base added to the counter so ids look like Discord snowflakes.
const SNOWFLAKE_BASE: u64 = 100_000_000_000_000_000;

/// Gets the next unique member id.
///
/// Ids are unique across all tests in the process, so tests running in
/// parallel never share members.
pub fn next_member_id() -> u64 {
    SNOWFLAKE_BASE + COUNTER.fetch_add(1, Ordering::SeqCst)
}
