//! Beams and columns

use crate::error::{LatticeError, LatticeResult};
use crate::lattice::Axis;
use crate::math::{self, Coord};
use crate::records::MemberRecord;

use super::orientation::{plan_axis, round_direction, unsupported, Orientation, PlanAxis};
use super::{require_line, Connectivity, Resolution, Resolver};

impl Resolver<'_> {
    /// A beam runs along X or Y at the elevation of its origin; only the
    /// running coordinate changes between start and end.
    pub(super) fn resolve_beam(&self, member: &MemberRecord) -> LatticeResult<Resolution> {
        let id = member.source_id.as_str();
        let line = require_line(member)?;
        let axis = plan_axis(id, &line.direction)?;
        let d = round_direction(id, &line.direction)?;

        let sx = self.round(id, Axis::X, line.origin.x)?;
        let sy = self.round(id, Axis::Y, line.origin.y)?;
        let sz = self.round(id, Axis::Z, line.origin.z)?;

        let (start, end, orientation) = match axis {
            PlanAxis::AlongX => {
                let ex = self.round(id, Axis::X, sx.value() + d.dx.value() * line.length)?;
                (
                    self.point(id, sx, sy, sz)?,
                    self.point(id, ex, sy, sz)?,
                    Orientation::along(axis, sx, ex),
                )
            }
            PlanAxis::AlongY => {
                let ey = self.round(id, Axis::Y, sy.value() + d.dy.value() * line.length)?;
                (
                    self.point(id, sx, sy, sz)?,
                    self.point(id, sx, ey, sz)?,
                    Orientation::along(axis, sy, ey),
                )
            }
        };

        Ok(Resolution {
            source_id: member.source_id.clone(),
            kind: member.kind,
            connectivity: Connectivity::Line { start, end },
            orientation,
            length: Some(math::round(line.length)),
            area: None,
            synthetic_point: None,
            element_tag: None,
        })
    }

    /// A column stands at the plan centre of its bounding box and spans the
    /// box's Z extent. Without a box, a vertical location line is accepted.
    pub(super) fn resolve_column(&self, member: &MemberRecord) -> LatticeResult<Resolution> {
        let id = member.source_id.as_str();

        let (x, y, bottom, top) = match (&member.bounding_box, &member.line) {
            (Some(bbox), _) => {
                let x = Coord::midpoint(
                    self.round(id, Axis::X, bbox.min.x)?,
                    self.round(id, Axis::X, bbox.max.x)?,
                );
                let y = Coord::midpoint(
                    self.round(id, Axis::Y, bbox.min.y)?,
                    self.round(id, Axis::Y, bbox.max.y)?,
                );
                let bottom = self.round(id, Axis::Z, bbox.min.z)?;
                let top = self.round(id, Axis::Z, bbox.max.z)?;
                (x, y, bottom, top)
            }
            (None, Some(line)) => {
                let d = round_direction(id, &line.direction)?;
                if !d.dx.is_zero() || !d.dy.is_zero() || d.dz.is_zero() {
                    return Err(unsupported(id, &line.direction));
                }
                let x = self.round(id, Axis::X, line.origin.x)?;
                let y = self.round(id, Axis::Y, line.origin.y)?;
                let z0 = self.round(id, Axis::Z, line.origin.z)?;
                let z1 = self.round(id, Axis::Z, z0.value() + d.dz.value() * line.length)?;
                (x, y, z0.min(z1), z0.max(z1))
            }
            (None, None) => {
                return Err(LatticeError::MissingGeometry {
                    source_id: member.source_id.clone(),
                    missing: "bounding box or location line",
                })
            }
        };

        let start = self.point(id, x, y, bottom)?;
        let end = self.point(id, x, y, top)?;

        Ok(Resolution {
            source_id: member.source_id.clone(),
            kind: member.kind,
            connectivity: Connectivity::Line { start, end },
            orientation: Orientation::Vertical,
            length: Some(bottom.span_to(top)),
            area: None,
            synthetic_point: None,
            element_tag: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::bay_lattice;
    use super::*;
    use crate::lattice::LatticePoint;
    use crate::records::{LocationLine, MemberKind};
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};

    fn tags(res: &Resolution) -> Vec<u64> {
        res.points().iter().map(|p| p.tag().value()).collect()
    }

    #[test]
    fn test_beam_along_x() {
        let lattice = bay_lattice();
        let resolver = Resolver::new(&lattice);
        let beam = MemberRecord::beam("B1", [0.0, 4000.0, 3000.0], [1.0, 0.0, 0.0], 5000.0);
        let res = resolver.resolve_beam(&beam).unwrap();
        assert_eq!(tags(&res), vec![1002002, 2002002]);
        assert_eq!(res.orientation, Orientation::PositiveX);
        assert_relative_eq!(res.length.unwrap(), 5000.0);
    }

    #[test]
    fn test_beam_along_negative_y() {
        let lattice = bay_lattice();
        let resolver = Resolver::new(&lattice);
        let beam = MemberRecord::beam("B2", [10000.0, 4000.0, 6000.0], [0.0, -1.0, 0.0], 4000.0);
        let res = resolver.resolve_beam(&beam).unwrap();
        assert_eq!(tags(&res), vec![3002003, 3001003]);
        assert_eq!(res.orientation, Orientation::NegativeY);
    }

    #[test]
    fn test_beam_noise_absorbed() {
        let lattice = bay_lattice();
        let resolver = Resolver::new(&lattice);
        let beam = MemberRecord::beam(
            "B3",
            [4999.9961, 0.0021, 2999.999],
            [0.999_999_9, 0.000_01, 0.0],
            5000.003,
        );
        let res = resolver.resolve_beam(&beam).unwrap();
        assert_eq!(tags(&res), vec![2001002, 3001002]);
    }

    #[test]
    fn test_beam_endpoint_off_grid_fails() {
        let lattice = bay_lattice();
        let resolver = Resolver::new(&lattice);
        let beam = MemberRecord::beam("B4", [0.0, 0.0, 3000.0], [1.0, 0.0, 0.0], 5000.02);
        let err = resolver.resolve_beam(&beam).unwrap_err();
        match err {
            LatticeError::CoordinateLookupFailed { source_id, axis, value } => {
                assert_eq!(source_id, "B4");
                assert_eq!(axis, Axis::X);
                assert_relative_eq!(value, 5000.02);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_diagonal_beam_unsupported() {
        let lattice = bay_lattice();
        let resolver = Resolver::new(&lattice);
        let beam = MemberRecord::beam("B5", [0.0, 0.0, 3000.0], [0.8, 0.6, 0.0], 5000.0);
        assert!(matches!(
            resolver.resolve_beam(&beam),
            Err(LatticeError::OrientationUnsupported { .. })
        ));
    }

    #[test]
    fn test_column_from_bounding_box() {
        let lattice = bay_lattice();
        let resolver = Resolver::new(&lattice);
        let column = MemberRecord::column("C1", [4750.0, -250.0, 0.0], [5250.0, 250.0, 3000.0]);
        let res = resolver.resolve_column(&column).unwrap();
        assert_eq!(res.start(), LatticePoint::new(1, 0, 0));
        assert_eq!(res.end(), Some(LatticePoint::new(1, 0, 1)));
        assert_eq!(res.orientation, Orientation::Vertical);
        assert_relative_eq!(res.length.unwrap(), 3000.0);
    }

    #[test]
    fn test_column_from_downward_line() {
        let lattice = bay_lattice();
        let resolver = Resolver::new(&lattice);
        let column = MemberRecord::new("C2", MemberKind::Column).with_line(LocationLine::new(
            Point3::new(10000.0, 4000.0, 6000.0),
            Vector3::new(0.0, 0.0, -1.0),
            3000.0,
        ));
        let res = resolver.resolve_column(&column).unwrap();
        assert_eq!(tags(&res), vec![3002002, 3002003]);
    }

    #[test]
    fn test_column_top_off_level_fails() {
        let lattice = bay_lattice();
        let resolver = Resolver::new(&lattice);
        let column = MemberRecord::column("C3", [-250.0, -250.0, 0.0], [250.0, 250.0, 3100.0]);
        assert!(matches!(
            resolver.resolve_column(&column),
            Err(LatticeError::CoordinateLookupFailed { axis: Axis::Z, .. })
        ));
    }
}
