//! Identifiers used across the analysis.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scalar::{RawScalar, Scalar};

/// Identifier of a single analysis run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(Uuid);

impl RunId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for RunId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for RunId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// Stable key of an inventory item, shared by snapshot and sales rows.
///
/// Held in canonical form: ids are coerced like every other field, so `"1001"`,
/// `1001` and `"1001.0"` are the same item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryId(String);

impl InventoryId {
    /// Canonicalize a raw id. Returns `None` when the value is absent or blank.
    pub fn from_raw(raw: &RawScalar) -> Option<Self> {
        raw.coerce().map(|s| Self::from_scalar(&s))
    }

    pub fn from_scalar(scalar: &Scalar) -> Self {
        Self(scalar.to_text().trim().to_string())
    }

    /// Canonicalize an id given as text. Returns `None` when blank.
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_raw(&RawScalar::from(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for InventoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
