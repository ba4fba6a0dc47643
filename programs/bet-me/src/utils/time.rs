use anchor_lang::prelude::*;

/// Source of "now" for deadline checks.
pub trait TimeSource {
    fn unix_timestamp(&self) -> Result<i64>;
}

/// Reads the cluster `Clock` sysvar.
pub struct SysvarClock;

impl TimeSource for SysvarClock {
    fn unix_timestamp(&self) -> Result<i64> {
        Ok(Clock::get()?.unix_timestamp)
    }
}

/// Synthetic clock for exercising deadline behavior without waiting.
/// Not compiled into the deployed program.
#[cfg(any(test, feature = "mock-clock"))]
#[derive(Debug)]
pub struct MockClock {
    now: core::cell::Cell<i64>,
}

#[cfg(any(test, feature = "mock-clock"))]
impl MockClock {
    pub fn at(unix_timestamp: i64) -> Self {
        Self {
            now: core::cell::Cell::new(unix_timestamp),
        }
    }

    pub fn set(&self, unix_timestamp: i64) {
        self.now.set(unix_timestamp);
    }

    pub fn advance(&self, secs: i64) {
        self.now.set(self.now.get() + secs);
    }
}

#[cfg(any(test, feature = "mock-clock"))]
impl TimeSource for MockClock {
    fn unix_timestamp(&self) -> Result<i64> {
        Ok(self.now.get())
    }
}
