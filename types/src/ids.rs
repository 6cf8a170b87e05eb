use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("identifier must be a non-zero 32-bit integer")]
pub struct IdError;

/// Identifier of an item in the custody ledger.
///
/// Assigned sequentially starting at 1, never reused. Zero is structurally
/// unrepresentable via `NonZeroU32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(NonZeroU32);

impl ItemId {
    pub fn try_new(value: u32) -> Result<Self, IdError> {
        NonZeroU32::new(value).map(Self).ok_or(IdError)
    }

    #[must_use]
    pub const fn from_raw(value: NonZeroU32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for ItemId {
    type Error = IdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a candidate in the vote ledger.
///
/// Same shape as [`ItemId`]; the two are distinct types so an item id can
/// never be passed where a candidate id is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(NonZeroU32);

impl CandidateId {
    pub fn try_new(value: u32) -> Result<Self, IdError> {
        NonZeroU32::new(value).map(Self).ok_or(IdError)
    }

    #[must_use]
    pub const fn from_raw(value: NonZeroU32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for CandidateId {
    type Error = IdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque voter identifier supplied by the caller (an address, a username).
///
/// No format validation is performed; equality is plain string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterId(String);

impl VoterId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VoterId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for VoterId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for VoterId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{CandidateId, ItemId, VoterId};

    #[test]
    fn item_id_rejects_zero() {
        assert!(ItemId::try_new(0).is_err());
        assert_eq!(ItemId::try_new(1).unwrap().value(), 1);
    }

    #[test]
    fn candidate_id_deserialize_rejects_zero() {
        let parsed: Result<CandidateId, _> = serde_json::from_str("0");
        assert!(parsed.is_err());
        let parsed: CandidateId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed.value(), 7);
    }

    #[test]
    fn voter_id_is_plain_string_equality() {
        assert_eq!(VoterId::from("0xabc"), VoterId::new("0xabc"));
        assert_ne!(VoterId::from("0xabc"), VoterId::from("0xABC"));
    }
}
