//! Identifier newtypes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable movie identifier assigned by the remote catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl MovieId {
    /// Raw numeric value, as used in catalog URLs.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MovieId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
