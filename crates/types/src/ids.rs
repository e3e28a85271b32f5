//! Newtype wrapper for region identifiers.
//!
//! Regions are addressed by stable string identifiers (typically the
//! host element id of a page section). The newtype keeps them from
//! being mixed up with other strings flowing through the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The stable identifier of a watched page region. Never changes after
/// registration.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(Arc<str>);

impl RegionId {
    /// Creates a new RegionId from a string.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this region ID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RegionId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for RegionId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for RegionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
