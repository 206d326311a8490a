//! The coordinate lattice built from grids and levels

mod axis;
mod collect;
mod tag;
mod usage;

pub use axis::{Axis, AxisList};
pub use collect::{collect_axes, CollectedAxes};
pub use tag::{LatticePoint, Tag, MAX_MINOR_INDEX, TAG_INDEX_BASE, X_STRIDE, Y_STRIDE};
pub use usage::UsageMask;

use nalgebra::Point3;
use serde::Serialize;

use crate::error::{LatticeError, LatticeResult};
use crate::math::Coord;

/// Dense 3-D lattice: the Cartesian product of the X, Y and Z axis lists
#[derive(Debug, Clone, Serialize)]
pub struct Lattice {
    x: AxisList,
    y: AxisList,
    z: AxisList,
}

impl Lattice {
    /// Create a lattice from three axis lists.
    ///
    /// Fails with [`LatticeError::TagOverflow`] when the Y or Z axis has more
    /// entries than its tag digit group can encode.
    pub fn new(x: AxisList, y: AxisList, z: AxisList) -> LatticeResult<Self> {
        for axis in [&y, &z] {
            if axis.len() > MAX_MINOR_INDEX {
                return Err(LatticeError::TagOverflow {
                    axis: axis.axis(),
                    len: axis.len(),
                    max: MAX_MINOR_INDEX,
                });
            }
        }
        Ok(Self { x, y, z })
    }

    /// A lattice with no points
    pub fn empty() -> Self {
        Self {
            x: AxisList::empty(Axis::X),
            y: AxisList::empty(Axis::Y),
            z: AxisList::empty(Axis::Z),
        }
    }

    pub fn axis(&self, axis: Axis) -> &AxisList {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Number of entries per axis as (x, y, z)
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.x.len(), self.y.len(), self.z.len())
    }

    /// Total number of lattice points
    pub fn len(&self) -> usize {
        self.x.len() * self.y.len() * self.z.len()
    }

    /// True when any axis has no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, point: LatticePoint) -> bool {
        point.i < self.x.len() && point.j < self.y.len() && point.k < self.z.len()
    }

    /// All points, X-major then Y then Z. This is ascending tag order.
    pub fn points(&self) -> impl Iterator<Item = LatticePoint> + '_ {
        let (nx, ny, nz) = self.dims();
        (0..nx).flat_map(move |i| {
            (0..ny).flat_map(move |j| (0..nz).map(move |k| LatticePoint::new(i, j, k)))
        })
    }

    /// Rounded coordinates of a point
    pub fn coords(&self, point: LatticePoint) -> Option<[Coord; 3]> {
        Some([
            self.x.get(point.i)?,
            self.y.get(point.j)?,
            self.z.get(point.k)?,
        ])
    }

    /// Position of a point in source units
    pub fn position(&self, point: LatticePoint) -> Option<Point3<f64>> {
        let [x, y, z] = self.coords(point)?;
        Some(Point3::new(x.value(), y.value(), z.value()))
    }

    /// Reverse lookup from a rounded coordinate triple
    pub fn locate(&self, x: Coord, y: Coord, z: Coord) -> Option<LatticePoint> {
        Some(LatticePoint::new(
            self.x.index_of(x)?,
            self.y.index_of(y)?,
            self.z.index_of(z)?,
        ))
    }

    /// Tag of the point at a rounded coordinate triple
    pub fn tag_at(&self, x: Coord, y: Coord, z: Coord) -> Option<Tag> {
        self.locate(x, y, z).map(LatticePoint::tag)
    }

    /// Tag of a point, if the point belongs to this lattice
    pub fn tag(&self, point: LatticePoint) -> Option<Tag> {
        self.contains(point).then(|| point.tag())
    }

    /// Point encoded by a tag, if it belongs to this lattice
    pub fn point(&self, tag: Tag) -> Option<LatticePoint> {
        tag.point().filter(|p| self.contains(*p))
    }

    /// Lowest level, where nodes are fixed
    pub fn foundation_level(&self) -> Option<Coord> {
        self.z.min()
    }
}
