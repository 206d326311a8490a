//! Usage mask - which lattice points are referenced by a member

use super::{Lattice, LatticePoint};

/// One flag per lattice point, set when a resolved member touches the point
#[derive(Debug, Clone)]
pub struct UsageMask {
    used: Vec<bool>,
    dims: (usize, usize, usize),
}

impl UsageMask {
    /// An all-unused mask sized for `lattice`
    pub fn new(lattice: &Lattice) -> Self {
        Self {
            used: vec![false; lattice.len()],
            dims: lattice.dims(),
        }
    }

    fn slot(&self, point: LatticePoint) -> Option<usize> {
        let (nx, ny, nz) = self.dims;
        if point.i >= nx || point.j >= ny || point.k >= nz {
            return None;
        }
        Some(point.i * ny * nz + point.j * nz + point.k)
    }

    /// Mark a point as used. Returns false if the point is outside the lattice.
    pub fn mark(&mut self, point: LatticePoint) -> bool {
        match self.slot(point) {
            Some(slot) => {
                self.used[slot] = true;
                true
            }
            None => false,
        }
    }

    pub fn is_used(&self, point: LatticePoint) -> bool {
        self.slot(point).is_some_and(|slot| self.used[slot])
    }

    /// Number of points in the lattice, used or not
    pub fn total(&self) -> usize {
        self.used.len()
    }

    pub fn used_count(&self) -> usize {
        self.used.iter().filter(|&&u| u).count()
    }

    pub fn unused_count(&self) -> usize {
        self.total() - self.used_count()
    }

    /// Used points in ascending tag order
    pub fn used_points<'a>(&'a self, lattice: &'a Lattice) -> impl Iterator<Item = LatticePoint> + 'a {
        lattice
            .points()
            .filter(move |p| self.is_used(*p))
    }

    /// Unused points in ascending tag order
    pub fn unused_points<'a>(&'a self, lattice: &'a Lattice) -> impl Iterator<Item = LatticePoint> + 'a {
        lattice
            .points()
            .filter(move |p| !self.is_used(*p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{Axis, AxisList};

    fn lattice() -> Lattice {
        Lattice::new(
            AxisList::from_values(Axis::X, &[0.0, 5000.0]),
            AxisList::from_values(Axis::Y, &[0.0]),
            AxisList::from_values(Axis::Z, &[0.0, 3000.0]),
        )
        .unwrap()
    }

    #[test]
    fn test_mark_and_count() {
        let lattice = lattice();
        let mut usage = UsageMask::new(&lattice);
        assert_eq!(usage.total(), 4);
        assert_eq!(usage.used_count(), 0);

        assert!(usage.mark(LatticePoint::new(1, 0, 1)));
        assert!(usage.mark(LatticePoint::new(1, 0, 1)));
        assert!(usage.is_used(LatticePoint::new(1, 0, 1)));
        assert!(!usage.is_used(LatticePoint::new(0, 0, 1)));
        assert_eq!(usage.used_count(), 1);
        assert_eq!(usage.unused_count(), 3);
    }

    #[test]
    fn test_out_of_range_mark_rejected() {
        let lattice = lattice();
        let mut usage = UsageMask::new(&lattice);
        assert!(!usage.mark(LatticePoint::new(0, 1, 0)));
        assert!(!usage.is_used(LatticePoint::new(0, 1, 0)));
    }

    #[test]
    fn test_used_and_unused_partition() {
        let lattice = lattice();
        let mut usage = UsageMask::new(&lattice);
        usage.mark(LatticePoint::new(0, 0, 0));
        usage.mark(LatticePoint::new(0, 0, 1));

        let used: Vec<u64> = usage.used_points(&lattice).map(|p| p.tag().value()).collect();
        let unused: Vec<u64> = usage.unused_points(&lattice).map(|p| p.tag().value()).collect();
        assert_eq!(used, vec![1001001, 1001002]);
        assert_eq!(unused, vec![2001001, 2001002]);
    }
}
