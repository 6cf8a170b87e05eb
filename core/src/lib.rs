//! Ledger state machines for veriledger.
//!
//! Two independent in-memory registries built on one pattern: records keyed
//! by sequentially assigned ids, mutated only through operations that
//! validate an invariant first. [`CustodyLedger`] enforces monotonic role
//! advance on ownership transfers; [`VoteLedger`] enforces a single immutable
//! voting window and at-most-one ballot per voter.
//!
//! Both ledgers take their collaborators by injection: a [`Clock`] for
//! current time and an [`EventSink`] that observes every accepted and
//! rejected mutation.

mod ballot;
mod clock;
mod custody;
mod registry;
mod report;

pub use ballot::{BallotError, VoteLedger};
pub use clock::{Clock, ManualClock, SystemClock};
pub use custody::{CustodyError, CustodyLedger};
pub use registry::{Registry, SequentialId};
pub use report::{BallotEvent, CustodyEvent, EventSink, MemorySink, TracingSink};
