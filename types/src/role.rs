use std::fmt;

use serde::{Deserialize, Serialize};

/// Custody stage of an item in the supply chain.
///
/// The declaration order is the one valid forward order; the derived `Ord`
/// gives the total order used by transfer validation. A transfer is legal
/// only when the target role is strictly greater than the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Producer,
    Distributor,
    Retailer,
    Consumer,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Producer => "Producer",
            Role::Distributor => "Distributor",
            Role::Retailer => "Retailer",
            Role::Consumer => "Consumer",
        }
    }

    /// Position in the fixed ordering, starting at 0 for `Producer`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Role::Producer => 0,
            Role::Distributor => 1,
            Role::Retailer => 2,
            Role::Consumer => 3,
        }
    }

    /// Parse a role from its display name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "producer" => Some(Role::Producer),
            "distributor" => Some(Role::Distributor),
            "retailer" => Some(Role::Retailer),
            "consumer" => Some(Role::Consumer),
            _ => None,
        }
    }

    /// All roles, in forward order.
    #[must_use]
    pub fn all() -> &'static [Role] {
        &[
            Role::Producer,
            Role::Distributor,
            Role::Retailer,
            Role::Consumer,
        ]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
