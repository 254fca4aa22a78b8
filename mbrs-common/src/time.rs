//! Timestamp and calendar utilities
//!
//! Subscriptions are bounded by calendar dates with no time-of-day component.
//! "Today" is always the UTC calendar date, the same clock that stamps
//! check-in times.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::{Error, Result};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Get the current UTC calendar date
pub fn today() -> NaiveDate {
    now().date_naive()
}

/// Compute a subscription end date: `start + duration_days` calendar days.
///
/// Any sign of `duration_days` is accepted; zero yields `start` itself and a
/// negative duration yields an end date before the start (such a subscription
/// never covers any day). Fails only when the result leaves chrono's
/// representable date range.
pub fn end_date_for(start: NaiveDate, duration_days: i64) -> Result<NaiveDate> {
    Duration::try_days(duration_days)
        .and_then(|delta| start.checked_add_signed(delta))
        .ok_or_else(|| {
            Error::InvalidInput(format!(
                "end date out of range: {} + {} days",
                start, duration_days
            ))
        })
}
