use std::collections::HashSet;

use thiserror::Error;

use veriledger_types::{Candidate, CandidateId, Timestamp, VoterId, VotingWindow, WindowError};

use crate::clock::{Clock, SystemClock};
use crate::registry::Registry;
use crate::report::{BallotEvent, EventSink, TracingSink};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BallotError {
    #[error("voting dates are already set")]
    AlreadyConfigured,
    #[error(transparent)]
    InvalidWindow(#[from] WindowError),
    #[error("voting is not active at {now}")]
    VotingNotActive { now: Timestamp },
    #[error("candidate {0} does not exist")]
    InvalidCandidate(CandidateId),
    #[error("voter {0} has already voted")]
    AlreadyVoted(VoterId),
}

/// Registry of candidates and voter eligibility for a single election.
///
/// The voting window is configured once and never changes afterwards. A
/// voter appears in the eligibility set the moment their ballot is accepted
/// and is never removed, so a second ballot from the same voter always
/// fails. A rejected ballot changes nothing.
#[derive(Debug)]
pub struct VoteLedger<C = SystemClock, S = TracingSink> {
    candidates: Registry<CandidateId, Candidate>,
    voters: HashSet<VoterId>,
    window: Option<VotingWindow>,
    clock: C,
    sink: S,
}

impl VoteLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(SystemClock, TracingSink)
    }
}

impl Default for VoteLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, S: EventSink<BallotEvent>> VoteLedger<C, S> {
    pub fn with_parts(clock: C, sink: S) -> Self {
        Self {
            candidates: Registry::new(),
            voters: HashSet::new(),
            window: None,
            clock,
            sink,
        }
    }

    /// Register a candidate. Always succeeds; no window restriction.
    pub fn add_candidate(
        &mut self,
        name: impl Into<String>,
        party: impl Into<String>,
    ) -> CandidateId {
        let name = name.into();
        let party = party.into();
        let id = self
            .candidates
            .insert_with(|id| Candidate::new(id, name.clone(), party.clone()));
        self.sink
            .emit(&BallotEvent::CandidateAdded { id, name, party });
        id
    }

    /// Configure the voting window. Once set it is immutable for the life of
    /// the ledger.
    pub fn set_dates(&mut self, start: Timestamp, end: Timestamp) -> Result<(), BallotError> {
        let outcome = if self.window.is_some() {
            Err(BallotError::AlreadyConfigured)
        } else {
            match VotingWindow::new(start, end, self.clock.now()) {
                Ok(window) => {
                    self.window = Some(window);
                    Ok(())
                }
                Err(err) => Err(BallotError::InvalidWindow(err)),
            }
        };
        match &outcome {
            Ok(()) => self.sink.emit(&BallotEvent::WindowConfigured { start, end }),
            Err(reason) => self.sink.emit(&BallotEvent::WindowRejected {
                reason: reason.clone(),
            }),
        }
        outcome
    }

    /// Cast a ballot for `candidate` on behalf of `voter`.
    ///
    /// Guards run in a fixed order: the window check first, then candidate
    /// existence, then the double-vote check. On success the voter is marked
    /// and the tally incremented together; on failure neither happens.
    pub fn vote(
        &mut self,
        voter: impl Into<VoterId>,
        candidate: CandidateId,
    ) -> Result<(), BallotError> {
        let voter = voter.into();
        let outcome = self.accept_ballot(&voter, candidate);
        match &outcome {
            Ok(()) => self.sink.emit(&BallotEvent::VoteCast {
                voter: voter.clone(),
                candidate,
            }),
            Err(reason) => self.sink.emit(&BallotEvent::VoteRejected {
                voter: voter.clone(),
                candidate,
                reason: reason.clone(),
            }),
        }
        outcome
    }

    fn accept_ballot(&mut self, voter: &VoterId, candidate: CandidateId) -> Result<(), BallotError> {
        let now = self.clock.now();
        if !self.window.is_some_and(|window| window.contains(now)) {
            return Err(BallotError::VotingNotActive { now });
        }
        let Some(tally) = self.candidates.get_mut(candidate) else {
            return Err(BallotError::InvalidCandidate(candidate));
        };
        if !self.voters.insert(voter.clone()) {
            return Err(BallotError::AlreadyVoted(voter.clone()));
        }
        tally.record_vote();
        Ok(())
    }

    /// Whether `voter` has a recorded ballot. Never fails.
    #[must_use]
    pub fn has_voted(&self, voter: &VoterId) -> bool {
        self.voters.contains(voter)
    }

    /// Snapshot of a candidate. Read-only.
    pub fn candidate(&self, id: CandidateId) -> Result<Candidate, BallotError> {
        self.candidates
            .get(id)
            .cloned()
            .ok_or(BallotError::InvalidCandidate(id))
    }

    /// The configured window, `(UNSET, UNSET)` when none has been set.
    #[must_use]
    pub fn dates(&self) -> (Timestamp, Timestamp) {
        self.window.map_or((Timestamp::UNSET, Timestamp::UNSET), |w| {
            (w.start(), w.end())
        })
    }

    #[must_use]
    pub fn candidate_count(&self) -> u32 {
        self.candidates.len()
    }

    /// Snapshot of every candidate, in id order.
    #[must_use]
    pub fn candidates(&self) -> Vec<Candidate> {
        self.candidates.iter().cloned().collect()
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
