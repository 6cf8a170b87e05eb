//! veriledger CLI - scripted demonstration driver.
//!
//! Thin shell around the core ledgers: initializes logging, replays a
//! custody scenario and an election scenario against a deterministic clock
//! (so the voting window can be entered without sleeping), and prints a
//! machine-readable summary of the resulting records.
//!
//! Every accepted and rejected mutation is visible on stderr through the
//! default tracing sink; run with `RUST_LOG=warn` to see only rejections.

use std::io;

use anyhow::Result;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use veriledger_core::{Clock, CustodyLedger, ManualClock, SystemClock, TracingSink, VoteLedger};
use veriledger_types::{Candidate, Item, Role};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

#[derive(Serialize)]
struct Summary {
    items: Vec<Item>,
    candidates: Vec<Candidate>,
}

fn main() -> Result<()> {
    init_tracing();

    let summary = Summary {
        items: run_custody_demo()?,
        candidates: run_election_demo()?,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Two items move forward through the chain; a backward transfer is shown
/// being rejected.
fn run_custody_demo() -> Result<Vec<Item>> {
    let clock = ManualClock::starting_at(SystemClock.now().value());
    let mut ledger = CustodyLedger::with_parts(clock, TracingSink);

    let apple = ledger.add_item("Apple", "Farm A", "Farmer John");
    let banana = ledger.add_item("Banana", "Farm B", "Farmer Emily");

    ledger.clock().advance(60);
    ledger.transfer(apple, "Distributor Mike", Role::Distributor)?;
    ledger.transfer(banana, "Retailer Sarah", Role::Retailer)?;

    // Custody never moves backward; the rejection lands on stderr.
    let _ = ledger.transfer(apple, "Rogue Returner", Role::Producer);

    tracing::info!(items = ledger.item_count(), "custody demo complete");
    Ok(vec![ledger.item(apple)?, ledger.item(banana)?])
}

/// A two-candidate election: window configured, ballots cast once the
/// window opens, duplicates rejected.
fn run_election_demo() -> Result<Vec<Candidate>> {
    let clock = ManualClock::starting_at(SystemClock.now().value());
    let mut ledger = VoteLedger::with_parts(clock, TracingSink);

    let opens = ledger.clock().now().plus_seconds(10);
    let closes = ledger.clock().now().plus_seconds(1_000);
    ledger.set_dates(opens, closes)?;

    let alice = ledger.add_candidate("Alice", "Party A");
    let bob = ledger.add_candidate("Bob", "Party B");

    ledger.clock().advance(11);
    ledger.vote("0x1001", alice)?;
    ledger.vote("0x1002", bob)?;
    ledger.vote("0x1003", alice)?;

    // One ballot per voter; the duplicate is rejected.
    let _ = ledger.vote("0x1001", bob);

    tracing::info!(
        candidates = ledger.candidate_count(),
        "election demo complete"
    );
    Ok(ledger.candidates())
}
