//! Time-related utilities with clock abstraction for testability.
//!
//! Chat messages carry a human-readable time label formatted by the sending
//! client (e.g. `"10:00:05"`). The server relays it verbatim and never
//! interprets it.

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};

/// Format used for message time labels (wall-clock time of day).
pub const TIME_LABEL_FORMAT: &str = "%H:%M:%S";

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Get current Unix timestamp (milliseconds)
    fn now_millis(&self) -> i64;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: i64,
}

impl FixedClock {
    /// Create a new fixed clock with the given timestamp
    pub fn new(fixed_time_millis: i64) -> Self {
        Self {
            fixed_time: fixed_time_millis,
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.fixed_time
    }
}

/// Format a Unix timestamp (milliseconds) as a time label in the given time zone.
///
/// Returns `None` if the timestamp is out of range.
pub fn time_label_in<Tz>(timestamp_millis: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let utc: DateTime<Utc> = DateTime::from_timestamp_millis(timestamp_millis)?;
    Some(utc.with_timezone(tz).format(TIME_LABEL_FORMAT).to_string())
}

/// Format the clock's current time as a label in the local time zone.
pub fn local_time_label(clock: &dyn Clock) -> String {
    time_label_in(clock.now_millis(), &Local).unwrap_or_default()
}

/// Format the clock's current time as a label at a fixed UTC offset (seconds east).
pub fn offset_time_label(clock: &dyn Clock, offset_secs: i32) -> Option<String> {
    let offset = FixedOffset::east_opt(offset_secs)?;
    time_label_in(clock.now_millis(), &offset)
}
