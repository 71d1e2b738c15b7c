//! Time source port
//!
//! Sampling "now" goes through a trait so the ticker can run against
//! the system clock in production and a hand-advanced clock in tests.

use chrono::Utc;

/// Port for sampling the current instant.
pub trait TimeSource: Send + Sync {
    /// Current instant as milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// System clock, UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
