use chrono::{DateTime, FixedOffset, Local};

/// Source of wall-clock time for timestamps.
pub trait Clock: Send + Sync {
    /// Current time with its UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    pub fn new(time: DateTime<FixedOffset>) -> Self {
        Self(time)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
