//! Storage identifiers for todos.
//!
//! # Design
//! Records are keyed by MongoDB ObjectIds. `TodoId` wraps `bson`'s `ObjectId`
//! so both storage backends and the client agree on one parse rule: exactly
//! 24 hexadecimal characters. On the JSON wire the id is always its hex
//! string, never the extended-JSON `{"$oid": ...}` form.

use std::fmt;
use std::str::FromStr;

use bson::oid::ObjectId;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::IdError;

/// Identifier assigned to a todo when it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(ObjectId);

impl TodoId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    pub fn parse(s: &str) -> Result<Self, IdError> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| IdError::Malformed(s.to_string()))
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for TodoId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for TodoId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for TodoId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
