use std::time::{SystemTime, UNIX_EPOCH};

use see_core::ports::ClockPort;

/// Wall clock reporting Unix epoch milliseconds.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(0)
    }
}
