use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};

use crate::ports::Clock;

/// Clock that returns whatever time the test last set.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self { now: Mutex::new(Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()) }
    }

    pub fn set(&self, year: i32, month: u32, day: u32, hour: u32, minute: u32) {
        let now = Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap();
        *self.now.lock().unwrap() = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
