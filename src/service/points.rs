use chrono::{DateTime, Utc};

/// Points and duration accrued by one participant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accrual {
    pub points: f64,
    pub duration_minutes: f64,
}

/// Rounds half-up to two decimal places.
///
/// Every stored point value and every aggregated total goes through this
/// function so totals are reproducible.
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Computes the points earned between `join_time` and `end_time`.
///
/// Duration is measured in UTC at millisecond precision. Points are derived
/// from the unrounded duration, then both values are rounded to two decimals.
/// A negative duration (clock skew, or an end before the join) clamps both
/// values to zero instead of failing.
///
/// # Arguments
/// - `join_time` - When the participant joined
/// - `end_time` - When the participant was finalized
/// - `points_per_minute` - Accrual rate of the event type
///
/// # Returns
/// - `Accrual` - Non-negative points and duration in minutes
pub fn compute(
    join_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    points_per_minute: f64,
) -> Accrual {
    let elapsed_ms = (end_time - join_time).num_milliseconds();
    let duration_minutes = (elapsed_ms as f64 / 60_000.0).max(0.0);

    Accrual {
        points: round2(duration_minutes * points_per_minute).max(0.0),
        duration_minutes: round2(duration_minutes),
    }
}
