//! Nullable clock — deterministic time for testing.

use chrono::{DateTime, Duration, Utc};
use docverify_verification::Clock;
use std::sync::Mutex;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to.
pub struct NullClock {
    current: Mutex<DateTime<Utc>>,
}

impl NullClock {
    pub fn new(initial: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(initial),
        }
    }

    /// Advance time by a duration.
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap();
        *current += by;
    }

    /// Set the time to a specific value.
    pub fn set(&self, to: DateTime<Utc>) {
        *self.current.lock().unwrap() = to;
    }
}

impl Clock for NullClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn only_moves_when_told() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let clock = NullClock::new(start);
        assert_eq!(clock.now(), start);
        clock.advance(Duration::days(2));
        assert_eq!(clock.now(), start + Duration::days(2));
        clock.set(start);
        assert_eq!(clock.now(), start);
    }
}
