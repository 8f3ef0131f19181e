//! Process and resource identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Process identifier (`0..P-1`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessId(pub usize);

impl ProcessId {
    /// Create a new process identifier
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Row index into the allocation/request matrices
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for ProcessId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Resource identifier (`0..R-1`)
///
/// Only a column index; displayed one-based (`R1`, `R2`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub usize);

impl ResourceId {
    /// Create a new resource identifier
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Column index into the allocation/request matrices
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for ResourceId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0 + 1)
    }
}
