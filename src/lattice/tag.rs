//! Lattice points and their integer tags
//!
//! A tag packs the 1-based axis indices of a point as decimal digit groups:
//! `x * 1_000_000 + y * 1_000 + z`. Tags are the join key between nodes and
//! everything that references them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Offset added to 0-based axis indices when encoding a tag
pub const TAG_INDEX_BASE: usize = 1;

/// Multiplier of the X index
pub const X_STRIDE: u64 = 1_000_000;

/// Multiplier of the Y index
pub const Y_STRIDE: u64 = 1_000;

/// Largest 1-based index the Y and Z digit groups can hold
pub const MAX_MINOR_INDEX: usize = 999;

/// Integer identifier of a lattice point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(u64);

impl Tag {
    /// Wrap a raw tag value
    pub fn from_raw(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// Split into the 1-based (x, y, z) indices
    pub fn decode(self) -> (u64, u64, u64) {
        (self.0 / X_STRIDE, (self.0 / Y_STRIDE) % 1_000, self.0 % 1_000)
    }

    /// The lattice point this tag encodes, if it is a well-formed tag
    pub fn point(self) -> Option<LatticePoint> {
        let (x, y, z) = self.decode();
        let base = TAG_INDEX_BASE as u64;
        if x < base || y < base || z < base {
            return None;
        }
        Some(LatticePoint::new(
            (x - base) as usize,
            (y - base) as usize,
            (z - base) as usize,
        ))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A lattice intersection, addressed by 0-based indices into the X, Y and Z
/// axis lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LatticePoint {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

impl LatticePoint {
    pub fn new(i: usize, j: usize, k: usize) -> Self {
        Self { i, j, k }
    }

    /// Encode as a tag. `j` and `k` must be below [`MAX_MINOR_INDEX`];
    /// [`Lattice`](crate::lattice::Lattice) guarantees this for its points.
    pub fn tag(self) -> Tag {
        let base = TAG_INDEX_BASE as u64;
        Tag((self.i as u64 + base) * X_STRIDE
            + (self.j as u64 + base) * Y_STRIDE
            + (self.k as u64 + base))
    }
}
