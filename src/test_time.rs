// Used for testing where a fixed time is needed for "now" and "today".
// The fixed instant sits in northern winter, when the shipped roster's offsets hold.

#![cfg(test)]

use crate::time::TimeProvider;
use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;

/// Always returns 2025-01-15 12:00:00 UTC, in whatever zone is asked for
pub struct FixedTimeProvider;

impl TimeProvider for FixedTimeProvider {
    fn now(&self, tz: Tz) -> DateTime<Tz> {
        let dt_utc = chrono::NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        tz.from_utc_datetime(&dt_utc)
    }
}
