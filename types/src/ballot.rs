use serde::Serialize;
use thiserror::Error;

use crate::ids::CandidateId;
use crate::time::Timestamp;

/// A candidate standing in the election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    id: CandidateId,
    name: String,
    party: String,
    vote_count: u64,
}

impl Candidate {
    #[must_use]
    pub fn new(id: CandidateId, name: impl Into<String>, party: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            party: party.into(),
            vote_count: 0,
        }
    }

    /// Count one accepted ballot. Called by the ledger only after every vote
    /// guard has passed.
    pub fn record_vote(&mut self) {
        self.vote_count += 1;
    }

    #[must_use]
    pub const fn id(&self) -> CandidateId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn party(&self) -> &str {
        &self.party
    }

    #[must_use]
    pub const fn vote_count(&self) -> u64 {
        self.vote_count
    }
}

/// Error when trying to construct an invalid voting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("voting window cannot start in the past (start {start}, now {now})")]
    StartsInPast { start: Timestamp, now: Timestamp },
    #[error("voting window must end after it starts (start {start}, end {end})")]
    EndNotAfterStart { start: Timestamp, end: Timestamp },
}

/// The half-open interval `[start, end)` during which ballots are accepted.
///
/// Constructed only through [`VotingWindow::new`], which validates against
/// the current time. You cannot create a window that ends before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VotingWindow {
    start: Timestamp,
    end: Timestamp,
}

impl VotingWindow {
    pub fn new(start: Timestamp, end: Timestamp, now: Timestamp) -> Result<Self, WindowError> {
        if start < now {
            return Err(WindowError::StartsInPast { start, now });
        }
        if end <= start {
            return Err(WindowError::EndNotAfterStart { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(self) -> Timestamp {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> Timestamp {
        self.end
    }

    /// Whether `at` falls inside the window. The `end` instant is excluded.
    #[must_use]
    pub fn contains(self, at: Timestamp) -> bool {
        self.start <= at && at < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::{Candidate, VotingWindow, WindowError};
    use crate::ids::CandidateId;
    use crate::time::Timestamp;

    fn ts(secs: i64) -> Timestamp {
        Timestamp::from_unix(secs)
    }

    #[test]
    fn candidate_starts_with_zero_votes() {
        let mut alice = Candidate::new(CandidateId::try_new(1).unwrap(), "Alice", "Party A");
        assert_eq!(alice.vote_count(), 0);
        alice.record_vote();
        alice.record_vote();
        assert_eq!(alice.vote_count(), 2);
    }

    #[test]
    fn window_rejects_start_in_the_past() {
        let err = VotingWindow::new(ts(90), ts(200), ts(100)).unwrap_err();
        assert!(matches!(err, WindowError::StartsInPast { .. }));
    }

    #[test]
    fn window_rejects_end_not_after_start() {
        let err = VotingWindow::new(ts(200), ts(200), ts(100)).unwrap_err();
        assert!(matches!(err, WindowError::EndNotAfterStart { .. }));
        let err = VotingWindow::new(ts(200), ts(150), ts(100)).unwrap_err();
        assert!(matches!(err, WindowError::EndNotAfterStart { .. }));
    }

    #[test]
    fn window_start_at_now_is_allowed() {
        let window = VotingWindow::new(ts(100), ts(200), ts(100)).unwrap();
        assert_eq!(window.start(), ts(100));
        assert_eq!(window.end(), ts(200));
    }

    #[test]
    fn contains_is_half_open() {
        let window = VotingWindow::new(ts(100), ts(200), ts(50)).unwrap();
        assert!(!window.contains(ts(99)));
        assert!(window.contains(ts(100)));
        assert!(window.contains(ts(199)));
        assert!(!window.contains(ts(200)));
        assert!(!window.contains(ts(201)));
    }
}
