// tests/support/mocks/time.rs
use caderno_core::application::ports::time::Clock;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Mutex;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap()
}

/// Clock that only moves when told to.
pub struct MutableClock {
    now: Mutex<DateTime<Utc>>,
}

impl Default for MutableClock {
    fn default() -> Self {
        Self {
            now: Mutex::new(fixed_now()),
        }
    }
}

impl MutableClock {
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for MutableClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
