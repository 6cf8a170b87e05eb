//! Boundary: supplies "current time" to the ledgers.
//!
//! All wall-clock access lives here. The ledgers only see [`Timestamp`]
//! values, so windowed logic can be exercised in tests without sleeping.

use std::cell::Cell;

use veriledger_types::Timestamp;

pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Wall clock. The only chrono call site in the workspace.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_unix(chrono::Utc::now().timestamp())
    }
}

/// Deterministic clock for tests and scripted drivers.
///
/// Interior-mutable so it can be advanced through the shared reference the
/// owning ledger hands back out.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    #[must_use]
    pub fn starting_at(secs: i64) -> Self {
        Self {
            now: Cell::new(secs),
        }
    }

    pub fn set(&self, at: Timestamp) {
        self.now.set(at.value());
    }

    pub fn advance(&self, secs: i64) {
        self.now.set(self.now.get().saturating_add(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_unix(self.now.get())
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, ManualClock, SystemClock};
    use veriledger_types::Timestamp;

    #[test]
    fn manual_clock_reads_back_what_was_set() {
        let clock = ManualClock::starting_at(100);
        assert_eq!(clock.now(), Timestamp::from_unix(100));
        clock.advance(11);
        assert_eq!(clock.now(), Timestamp::from_unix(111));
        clock.set(Timestamp::from_unix(50));
        assert_eq!(clock.now(), Timestamp::from_unix(50));
    }

    #[test]
    fn system_clock_is_past_the_epoch() {
        assert!(SystemClock.now().is_set());
    }
}
