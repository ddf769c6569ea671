use chrono::{DateTime, Duration, TimeZone, Utc};

/// Fixed reference instant for tests: 2025-01-01 18:00:00 UTC.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 18, 0, 0)
        .single()
        .expect("Fixed test timestamp is unambiguous")
}

pub fn minutes_after(time: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    time + Duration::minutes(minutes)
}

pub fn seconds_after(time: DateTime<Utc>, seconds: i64) -> DateTime<Utc> {
    time + Duration::seconds(seconds)
}
