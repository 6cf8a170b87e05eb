use serde::Serialize;
use thiserror::Error;

use crate::ids::ItemId;
use crate::role::Role;
use crate::time::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid role transition from {from} to {to}")]
pub struct RoleTransitionError {
    pub from: Role,
    pub to: Role,
}

/// A tracked item and its custody state.
///
/// `name` and `origin` are fixed at creation. Custody moves only through
/// [`Item::transfer`], which requires the new role to be strictly ahead of
/// the current one in the fixed ordering; the role sequence of a record is
/// therefore strictly increasing over its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    name: String,
    origin: String,
    created_at: Timestamp,
    last_updated_at: Timestamp,
    current_owner: String,
    current_role: Role,
    authentic: bool,
}

impl Item {
    /// Create a new record in producer custody.
    #[must_use]
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        origin: impl Into<String>,
        owner: impl Into<String>,
        at: Timestamp,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            origin: origin.into(),
            created_at: at,
            last_updated_at: at,
            current_owner: owner.into(),
            current_role: Role::Producer,
            authentic: true,
        }
    }

    /// Hand the item to a new owner at a strictly later role.
    ///
    /// On rejection the record is unchanged.
    pub fn transfer(
        &mut self,
        new_owner: impl Into<String>,
        new_role: Role,
        at: Timestamp,
    ) -> Result<(), RoleTransitionError> {
        if new_role <= self.current_role {
            return Err(RoleTransitionError {
                from: self.current_role,
                to: new_role,
            });
        }
        self.current_owner = new_owner.into();
        self.current_role = new_role;
        self.last_updated_at = at;
        Ok(())
    }

    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    #[must_use]
    pub const fn last_updated_at(&self) -> Timestamp {
        self.last_updated_at
    }

    #[must_use]
    pub fn current_owner(&self) -> &str {
        &self.current_owner
    }

    #[must_use]
    pub const fn current_role(&self) -> Role {
        self.current_role
    }

    /// Reserved for future invalidation; always `true` for now.
    #[must_use]
    pub const fn is_authentic(&self) -> bool {
        self.authentic
    }
}
