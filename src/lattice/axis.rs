//! Axis lists - sorted unique coordinates along one dimension

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::math::Coord;

/// A spatial dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(name)
    }
}

/// Sorted, deduplicated coordinates along one axis. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisList {
    axis: Axis,
    values: Vec<Coord>,
}

impl AxisList {
    /// An axis with no coordinates
    pub fn empty(axis: Axis) -> Self {
        Self {
            axis,
            values: Vec::new(),
        }
    }

    /// Build from candidate values in any order, dropping duplicates
    pub fn from_candidates<I>(axis: Axis, candidates: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        let unique: BTreeSet<Coord> = candidates.into_iter().collect();
        Self {
            axis,
            values: unique.into_iter().collect(),
        }
    }

    /// Build from raw values; non-finite values are skipped
    pub fn from_values(axis: Axis, values: &[f64]) -> Self {
        Self::from_candidates(axis, values.iter().filter_map(|&v| Coord::new(v)))
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Coordinates in ascending order
    pub fn values(&self) -> &[Coord] {
        &self.values
    }

    /// Coordinate at a 0-based index
    pub fn get(&self, index: usize) -> Option<Coord> {
        self.values.get(index).copied()
    }

    /// 0-based index of a rounded coordinate
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.values.binary_search(&coord).ok()
    }

    /// Round a raw value and find its index
    pub fn lookup(&self, value: f64) -> Option<usize> {
        self.index_of(Coord::new(value)?)
    }

    /// Smallest coordinate
    pub fn min(&self) -> Option<Coord> {
        self.values.first().copied()
    }

    /// Largest coordinate
    pub fn max(&self) -> Option<Coord> {
        self.values.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(values: &[f64]) -> Vec<Coord> {
        values.iter().map(|&v| Coord::new(v).unwrap()).collect()
    }

    #[test]
    fn test_sorted_and_unique() {
        let axis = AxisList::from_values(Axis::X, &[5000.0, 0.0, 10000.0, 5000.001, 0.0]);
        assert_eq!(axis.values(), coords(&[0.0, 5000.0, 10000.0]).as_slice());
    }

    #[test]
    fn test_permutation_invariant() {
        let a = AxisList::from_values(Axis::Y, &[3.0, 1.0, 2.0, 1.0]);
        let b = AxisList::from_values(Axis::Y, &[1.0, 2.0, 1.0, 3.0]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_lookup() {
        let axis = AxisList::from_values(Axis::Z, &[0.0, 3000.0, 6000.0]);
        assert_eq!(axis.lookup(3000.004), Some(1));
        assert_eq!(axis.lookup(3000.02), None);
        assert_eq!(axis.lookup(f64::NAN), None);
        assert_eq!(axis.min(), Coord::new(0.0));
        assert_eq!(axis.max(), Coord::new(6000.0));
    }

    #[test]
    fn test_empty_axis() {
        let axis = AxisList::empty(Axis::X);
        assert!(axis.is_empty());
        assert_eq!(axis.min(), None);
        assert_eq!(axis.lookup(0.0), None);
    }
}
