//! Clock source for the session "now" and entry timestamps.

use chrono::NaiveDateTime;
use std::fmt;

/// Format used to stamp casino entries with local wall-clock time.
pub const ENTRY_TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Supplies local wall-clock time.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> NaiveDateTime;

    /// Current time rendered for display on ledger entries.
    fn timestamp(&self) -> String {
        self.now().format(ENTRY_TIMESTAMP_FORMAT).to_string()
    }
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock_timestamp_format() {
        let at = NaiveDate::from_ymd_opt(2025, 3, 22)
            .unwrap()
            .and_hms_opt(20, 5, 9)
            .unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.timestamp(), "22/03/2025, 20:05:09");
    }
}
