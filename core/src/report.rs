//! Reporting collaborator.
//!
//! Every state change a ledger accepts, and every mutation it rejects, is
//! handed to an [`EventSink`] as a structured event. The default sink logs
//! through `tracing`; [`MemorySink`] keeps the events for programmatic
//! inspection.

use std::mem;

use veriledger_types::{CandidateId, ItemId, Role, Timestamp, VoterId};

use crate::ballot::BallotError;
use crate::custody::CustodyError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustodyEvent {
    ItemAdded {
        id: ItemId,
        name: String,
        origin: String,
        owner: String,
    },
    OwnershipTransferred {
        id: ItemId,
        new_owner: String,
        new_role: Role,
    },
    TransferRejected {
        id: ItemId,
        reason: CustodyError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BallotEvent {
    CandidateAdded {
        id: CandidateId,
        name: String,
        party: String,
    },
    WindowConfigured {
        start: Timestamp,
        end: Timestamp,
    },
    WindowRejected {
        reason: BallotError,
    },
    VoteCast {
        voter: VoterId,
        candidate: CandidateId,
    },
    VoteRejected {
        voter: VoterId,
        candidate: CandidateId,
        reason: BallotError,
    },
}

pub trait EventSink<E> {
    fn emit(&mut self, event: &E);
}

/// Default sink: accepted operations at `info`, rejections at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink<CustodyEvent> for TracingSink {
    fn emit(&mut self, event: &CustodyEvent) {
        match event {
            CustodyEvent::ItemAdded {
                id,
                name,
                origin,
                owner,
            } => {
                tracing::info!(id = %id, name = %name, origin = %origin, owner = %owner, "item added");
            }
            CustodyEvent::OwnershipTransferred {
                id,
                new_owner,
                new_role,
            } => {
                tracing::info!(id = %id, owner = %new_owner, role = %new_role, "ownership transferred");
            }
            CustodyEvent::TransferRejected { id, reason } => {
                tracing::warn!(id = %id, reason = %reason, "transfer rejected");
            }
        }
    }
}

impl EventSink<BallotEvent> for TracingSink {
    fn emit(&mut self, event: &BallotEvent) {
        match event {
            BallotEvent::CandidateAdded { id, name, party } => {
                tracing::info!(id = %id, name = %name, party = %party, "candidate added");
            }
            BallotEvent::WindowConfigured { start, end } => {
                tracing::info!(start = %start, end = %end, "voting window configured");
            }
            BallotEvent::WindowRejected { reason } => {
                tracing::warn!(reason = %reason, "voting window rejected");
            }
            BallotEvent::VoteCast { voter, candidate } => {
                tracing::info!(voter = %voter, candidate = %candidate, "vote cast");
            }
            BallotEvent::VoteRejected {
                voter,
                candidate,
                reason,
            } => {
                tracing::warn!(voter = %voter, candidate = %candidate, reason = %reason, "vote rejected");
            }
        }
    }
}

/// Sink that retains every event, in emission order.
#[derive(Debug, Clone)]
pub struct MemorySink<E> {
    events: Vec<E>,
}

impl<E> MemorySink<E> {
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    #[must_use]
    pub fn events(&self) -> &[E] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<E> {
        mem::take(&mut self.events)
    }
}

impl<E> Default for MemorySink<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> EventSink<E> for MemorySink<E> {
    fn emit(&mut self, event: &E) {
        self.events.push(event.clone());
    }
}
