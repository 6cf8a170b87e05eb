use thiserror::Error;

use veriledger_types::{Item, ItemId, Role, RoleTransitionError};

use crate::clock::{Clock, SystemClock};
use crate::registry::Registry;
use crate::report::{CustodyEvent, EventSink, TracingSink};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustodyError {
    #[error("item {0} does not exist")]
    NotFound(ItemId),
    #[error(transparent)]
    InvalidTransition(#[from] RoleTransitionError),
}

/// Registry of tracked items and their custody state.
///
/// Items enter in producer custody and move only forward through the role
/// ordering; a failed transfer leaves the ledger untouched. The injected
/// sink observes every accepted and rejected mutation.
#[derive(Debug)]
pub struct CustodyLedger<C = SystemClock, S = TracingSink> {
    items: Registry<ItemId, Item>,
    clock: C,
    sink: S,
}

impl CustodyLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(SystemClock, TracingSink)
    }
}

impl Default for CustodyLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, S: EventSink<CustodyEvent>> CustodyLedger<C, S> {
    pub fn with_parts(clock: C, sink: S) -> Self {
        Self {
            items: Registry::new(),
            clock,
            sink,
        }
    }

    /// Register a new item in producer custody. Always succeeds.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        origin: impl Into<String>,
        owner: impl Into<String>,
    ) -> ItemId {
        let name = name.into();
        let origin = origin.into();
        let owner = owner.into();
        let now = self.clock.now();

        let id = self
            .items
            .insert_with(|id| Item::new(id, name.clone(), origin.clone(), owner.clone(), now));
        self.sink.emit(&CustodyEvent::ItemAdded {
            id,
            name,
            origin,
            owner,
        });
        id
    }

    /// Hand an item to a new owner at a strictly later role.
    pub fn transfer(
        &mut self,
        id: ItemId,
        new_owner: impl Into<String>,
        new_role: Role,
    ) -> Result<(), CustodyError> {
        let new_owner = new_owner.into();
        let now = self.clock.now();

        let outcome = match self.items.get_mut(id) {
            None => Err(CustodyError::NotFound(id)),
            Some(item) => item
                .transfer(new_owner.clone(), new_role, now)
                .map_err(CustodyError::from),
        };
        match &outcome {
            Ok(()) => self.sink.emit(&CustodyEvent::OwnershipTransferred {
                id,
                new_owner,
                new_role,
            }),
            Err(reason) => self.sink.emit(&CustodyEvent::TransferRejected {
                id,
                reason: reason.clone(),
            }),
        }
        outcome
    }

    /// Snapshot of an item. Read-only.
    pub fn item(&self, id: ItemId) -> Result<Item, CustodyError> {
        self.items.get(id).cloned().ok_or(CustodyError::NotFound(id))
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.len()
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

#[cfg(test)]
mod tests {
    use super::{CustodyError, CustodyLedger};
    use crate::clock::ManualClock;
    use crate::report::{CustodyEvent, MemorySink};
    use veriledger_types::{ItemId, Role};

    fn ledger() -> CustodyLedger<ManualClock, MemorySink<CustodyEvent>> {
        CustodyLedger::with_parts(ManualClock::starting_at(1_000), MemorySink::new())
    }

    fn item_id(value: u32) -> ItemId {
        ItemId::try_new(value).expect("test fixture must use non-zero item ids")
    }

    #[test]
    fn add_item_assigns_sequential_ids() {
        let mut ledger = ledger();
        let apple = ledger.add_item("Apple", "Farm A", "Farmer John");
        let banana = ledger.add_item("Banana", "Farm B", "Farmer Emily");
        assert_eq!(apple.value(), 1);
        assert_eq!(banana.value(), 2);
        assert_eq!(ledger.item_count(), 2);
    }

    #[test]
    fn transfer_advances_custody() {
        let mut ledger = ledger();
        let id = ledger.add_item("Apple", "Farm A", "Farmer John");
        ledger.clock().advance(60);

        ledger.transfer(id, "Distributor Mike", Role::Distributor).unwrap();

        let item = ledger.item(id).unwrap();
        assert_eq!(item.current_role(), Role::Distributor);
        assert_eq!(item.current_owner(), "Distributor Mike");
        assert_eq!(item.last_updated_at().value(), 1_060);
        assert_eq!(item.created_at().value(), 1_000);
    }

    #[test]
    fn transfer_to_producer_fails_after_advance() {
        let mut ledger = ledger();
        let id = ledger.add_item("Apple", "Farm A", "Farmer John");
        ledger.transfer(id, "Distributor Mike", Role::Distributor).unwrap();

        let err = ledger.transfer(id, "Again", Role::Producer).unwrap_err();
        assert!(matches!(err, CustodyError::InvalidTransition(_)));
        assert_eq!(ledger.item(id).unwrap().current_owner(), "Distributor Mike");
    }

    #[test]
    fn transfer_unknown_item_is_not_found() {
        let mut ledger = ledger();
        let err = ledger
            .transfer(item_id(7), "Nobody", Role::Consumer)
            .unwrap_err();
        assert!(matches!(err, CustodyError::NotFound(id) if id.value() == 7));
    }

    #[test]
    fn failed_transfer_leaves_record_unchanged() {
        let mut ledger = ledger();
        let id = ledger.add_item("Apple", "Farm A", "Farmer John");
        let before = ledger.item(id).unwrap();
        ledger.clock().advance(60);

        assert!(ledger.transfer(id, "Lateral", Role::Producer).is_err());
        assert_eq!(ledger.item(id).unwrap(), before);
    }

    #[test]
    fn reads_are_idempotent() {
        let mut ledger = ledger();
        let id = ledger.add_item("Apple", "Farm A", "Farmer John");
        assert_eq!(ledger.item(id).unwrap(), ledger.item(id).unwrap());
        assert!(ledger.item(item_id(9)).is_err());
        assert!(ledger.item(item_id(9)).is_err());
    }

    #[test]
    fn every_mutation_is_reported() {
        let mut ledger = ledger();
        let id = ledger.add_item("Apple", "Farm A", "Farmer John");
        ledger.transfer(id, "Distributor Mike", Role::Distributor).unwrap();
        let _ = ledger.transfer(id, "Backward", Role::Producer);

        let events = ledger.sink().events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], CustodyEvent::ItemAdded { .. }));
        assert!(matches!(events[1], CustodyEvent::OwnershipTransferred { .. }));
        assert!(matches!(events[2], CustodyEvent::TransferRejected { .. }));
    }
}
