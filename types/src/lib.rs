//! Core domain types for veriledger.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies: the records tracked by the ledgers, the identifiers that key
//! them, and the validation errors their transitions can produce. Everything
//! here can be used from any layer of the application.

mod ballot;
mod custody;
mod ids;
mod role;
mod time;

pub use ballot::{Candidate, VotingWindow, WindowError};
pub use custody::{Item, RoleTransitionError};
pub use ids::{CandidateId, IdError, ItemId, VoterId};
pub use role::Role;
pub use time::Timestamp;
