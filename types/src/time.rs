use std::fmt;

use serde::{Deserialize, Serialize};

/// Seconds since the Unix epoch.
///
/// Zero doubles as "unset", the value an unconfigured voting window reports.
/// Arithmetic and comparisons stay in plain seconds so windowed logic can be
/// driven by a deterministic clock in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const UNSET: Self = Self(0);

    #[must_use]
    pub const fn from_unix(secs: i64) -> Self {
        Self(secs)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 != 0
    }

    #[must_use]
    pub const fn plus_seconds(self, secs: i64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Timestamp;

    #[test]
    fn unset_is_zero_and_not_set() {
        assert_eq!(Timestamp::UNSET.value(), 0);
        assert!(!Timestamp::UNSET.is_set());
        assert!(Timestamp::from_unix(1).is_set());
    }

    #[test]
    fn ordering_follows_seconds() {
        assert!(Timestamp::from_unix(10) < Timestamp::from_unix(11));
        assert_eq!(
            Timestamp::from_unix(10).plus_seconds(5),
            Timestamp::from_unix(15)
        );
    }

    #[test]
    fn plus_seconds_saturates() {
        let far = Timestamp::from_unix(i64::MAX);
        assert_eq!(far.plus_seconds(1), far);
    }
}
