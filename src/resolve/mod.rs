//! Member-to-lattice resolution
//!
//! Maps each member's rounded endpoints (or floor corners) onto lattice
//! points. A member resolves completely or not at all: any coordinate that
//! is not on a grid or level fails the member with
//! [`LatticeError::CoordinateLookupFailed`], it never falls back to a
//! neighbouring point.

mod floor;
mod linear;
mod orientation;
mod wall;

pub use orientation::Orientation;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, LatticeResult};
use crate::lattice::{Axis, Lattice, LatticePoint};
use crate::math::Coord;
use crate::records::{BoundingBox, LocationLine, MemberKind, MemberRecord};

/// First element tag handed out to walls
pub const DEFAULT_WALL_TAG_START: u64 = 77001;

/// Lattice points a member connects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connectivity {
    /// Two-node member (beam, column, wall)
    Line { start: LatticePoint, end: LatticePoint },
    /// Four-corner floor, ordered (maxX,maxY), (maxX,minY), (minX,minY), (minX,maxY)
    Quad([LatticePoint; 4]),
}

/// A successfully resolved member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub source_id: String,
    pub kind: MemberKind,
    pub connectivity: Connectivity,
    pub orientation: Orientation,
    /// Member length (beams, columns, walls)
    pub length: Option<f64>,
    /// Plan area (floors)
    pub area: Option<f64>,
    /// Wall mid-height centre or floor centre. Not a lattice point.
    pub synthetic_point: Option<Point3<f64>>,
    /// Wall element tag, from its own counter
    pub element_tag: Option<u64>,
}

impl Resolution {
    /// Every lattice point the member touches
    pub fn points(&self) -> Vec<LatticePoint> {
        match self.connectivity {
            Connectivity::Line { start, end } => vec![start, end],
            Connectivity::Quad(corners) => corners.to_vec(),
        }
    }

    /// Start point, or the first corner of a floor
    pub fn start(&self) -> LatticePoint {
        match self.connectivity {
            Connectivity::Line { start, .. } => start,
            Connectivity::Quad(corners) => corners[0],
        }
    }

    pub fn end(&self) -> Option<LatticePoint> {
        match self.connectivity {
            Connectivity::Line { end, .. } => Some(end),
            Connectivity::Quad(_) => None,
        }
    }

    pub fn corners(&self) -> Option<[LatticePoint; 4]> {
        match self.connectivity {
            Connectivity::Line { .. } => None,
            Connectivity::Quad(corners) => Some(corners),
        }
    }
}

/// Resolves members against a fixed lattice
#[derive(Debug)]
pub struct Resolver<'a> {
    lattice: &'a Lattice,
    /// `None` once the counter has handed out `u64::MAX`
    next_wall_tag: Option<u64>,
}

impl<'a> Resolver<'a> {
    pub fn new(lattice: &'a Lattice) -> Self {
        Self::with_wall_tag_start(lattice, DEFAULT_WALL_TAG_START)
    }

    /// Create a resolver whose wall element tags start at `wall_tag_start`
    pub fn with_wall_tag_start(lattice: &'a Lattice, wall_tag_start: u64) -> Self {
        Self {
            lattice,
            next_wall_tag: Some(wall_tag_start),
        }
    }

    pub fn lattice(&self) -> &Lattice {
        self.lattice
    }

    /// Resolve one member
    pub fn resolve(&mut self, member: &MemberRecord) -> LatticeResult<Resolution> {
        if self.lattice.is_empty() {
            return Err(LatticeError::EmptyLattice(member.source_id.clone()));
        }
        match member.kind {
            MemberKind::Beam => self.resolve_beam(member),
            MemberKind::Column => self.resolve_column(member),
            MemberKind::Wall => self.resolve_wall(member),
            MemberKind::Floor => self.resolve_floor(member),
        }
    }

    /// Round a raw coordinate; non-finite values cannot be on any axis
    fn round(&self, source_id: &str, axis: Axis, value: f64) -> LatticeResult<Coord> {
        Coord::new(value).ok_or_else(|| lookup_failed(source_id, axis, value))
    }

    /// Index of a rounded coordinate on one axis
    fn index(&self, source_id: &str, axis: Axis, coord: Coord) -> LatticeResult<usize> {
        self.lattice
            .axis(axis)
            .index_of(coord)
            .ok_or_else(|| lookup_failed(source_id, axis, coord.value()))
    }

    /// Lattice point at a rounded coordinate triple
    fn point(&self, source_id: &str, x: Coord, y: Coord, z: Coord) -> LatticeResult<LatticePoint> {
        Ok(LatticePoint::new(
            self.index(source_id, Axis::X, x)?,
            self.index(source_id, Axis::Y, y)?,
            self.index(source_id, Axis::Z, z)?,
        ))
    }

    fn take_wall_tag(&mut self, source_id: &str) -> LatticeResult<u64> {
        let tag = self
            .next_wall_tag
            .ok_or_else(|| LatticeError::ElementTagExhausted(source_id.to_string()))?;
        self.next_wall_tag = tag.checked_add(1);
        Ok(tag)
    }
}

fn lookup_failed(source_id: &str, axis: Axis, value: f64) -> LatticeError {
    LatticeError::CoordinateLookupFailed {
        source_id: source_id.to_string(),
        axis,
        value,
    }
}

fn require_line(member: &MemberRecord) -> LatticeResult<&LocationLine> {
    member.line.as_ref().ok_or_else(|| LatticeError::MissingGeometry {
        source_id: member.source_id.clone(),
        missing: "location line",
    })
}

fn require_box(member: &MemberRecord) -> LatticeResult<&BoundingBox> {
    member
        .bounding_box
        .as_ref()
        .ok_or_else(|| LatticeError::MissingGeometry {
            source_id: member.source_id.clone(),
            missing: "bounding box",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::AxisList;

    pub(super) fn bay_lattice() -> Lattice {
        Lattice::new(
            AxisList::from_values(Axis::X, &[0.0, 5000.0, 10000.0]),
            AxisList::from_values(Axis::Y, &[0.0, 4000.0]),
            AxisList::from_values(Axis::Z, &[0.0, 3000.0, 6000.0]),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_lattice_fails_every_member() {
        let lattice = Lattice::empty();
        let mut resolver = Resolver::new(&lattice);
        for member in [
            MemberRecord::beam("B1", [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], 5000.0),
            MemberRecord::column("C1", [0.0; 3], [0.0, 0.0, 3000.0]),
            MemberRecord::new("W1", MemberKind::Wall),
        ] {
            let err = resolver.resolve(&member).unwrap_err();
            assert!(matches!(err, LatticeError::EmptyLattice(ref id) if *id == member.source_id));
        }
    }

    #[test]
    fn test_missing_geometry() {
        let lattice = bay_lattice();
        let mut resolver = Resolver::new(&lattice);
        let err = resolver.resolve(&MemberRecord::new("B9", MemberKind::Beam)).unwrap_err();
        assert!(matches!(err, LatticeError::MissingGeometry { missing: "location line", .. }));
        let err = resolver.resolve(&MemberRecord::new("F9", MemberKind::Floor)).unwrap_err();
        assert!(matches!(err, LatticeError::MissingGeometry { missing: "bounding box", .. }));
    }

    #[test]
    fn test_resolution_accessors() {
        let lattice = bay_lattice();
        let mut resolver = Resolver::new(&lattice);
        let beam = resolver
            .resolve(&MemberRecord::beam("B1", [0.0, 0.0, 3000.0], [1.0, 0.0, 0.0], 5000.0))
            .unwrap();
        assert_eq!(beam.points().len(), 2);
        assert_eq!(resolver.lattice().len(), 18);
        assert_eq!(beam.start().tag().value(), 1001002);
        assert_eq!(beam.end().map(|p| p.tag().value()), Some(2001002));
        assert!(beam.corners().is_none());
    }
}
