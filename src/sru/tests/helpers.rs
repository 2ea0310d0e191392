//! Fixtures shared across the SRU test modules.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to one instant for deterministic tests.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pins the clock to midday on the given date.
    pub fn on(date: NaiveDate) -> Self {
        let midday = date.and_hms_opt(12, 0, 0).expect("valid time of day");
        Self(Utc.from_utc_datetime(&midday))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}
