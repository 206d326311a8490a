//! Floors

use nalgebra::Point3;

use crate::error::LatticeResult;
use crate::lattice::{Axis, LatticePoint};
use crate::math::Coord;
use crate::records::MemberRecord;

use super::orientation::Orientation;
use super::{require_box, Connectivity, Resolution, Resolver};

impl Resolver<'_> {
    /// A floor connects the four plan corners of its bounding box at the top
    /// elevation. Its plan centre is kept as a synthetic point.
    pub(super) fn resolve_floor(&self, member: &MemberRecord) -> LatticeResult<Resolution> {
        let id = member.source_id.as_str();
        let bbox = require_box(member)?;

        let max_x = self.round(id, Axis::X, bbox.max.x)?;
        let max_y = self.round(id, Axis::Y, bbox.max.y)?;
        let top = self.round(id, Axis::Z, bbox.max.z)?;
        let min_x = self.round(id, Axis::X, bbox.min.x)?;
        let min_y = self.round(id, Axis::Y, bbox.min.y)?;

        let i_max = self.index(id, Axis::X, max_x)?;
        let j_max = self.index(id, Axis::Y, max_y)?;
        let k = self.index(id, Axis::Z, top)?;
        let i_min = self.index(id, Axis::X, min_x)?;
        let j_min = self.index(id, Axis::Y, min_y)?;

        let corners = [
            LatticePoint::new(i_max, j_max, k),
            LatticePoint::new(i_max, j_min, k),
            LatticePoint::new(i_min, j_min, k),
            LatticePoint::new(i_min, j_max, k),
        ];
        let center = Point3::new(
            Coord::midpoint(min_x, max_x).value(),
            Coord::midpoint(min_y, max_y).value(),
            top.value(),
        );

        Ok(Resolution {
            source_id: member.source_id.clone(),
            kind: member.kind,
            connectivity: Connectivity::Quad(corners),
            orientation: Orientation::Horizontal,
            length: None,
            area: Some(min_x.span_to(max_x) * min_y.span_to(max_y)),
            synthetic_point: Some(center),
            element_tag: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::bay_lattice;
    use super::*;
    use crate::error::LatticeError;
    use approx::assert_relative_eq;

    #[test]
    fn test_floor_corners_and_center() {
        let lattice = bay_lattice();
        let resolver = Resolver::new(&lattice);
        let floor = MemberRecord::floor("F1", [0.0, 0.0, 2850.0], [10000.0, 4000.0, 3000.0]);
        let res = resolver.resolve_floor(&floor).unwrap();

        let corners: Vec<u64> = res.points().iter().map(|p| p.tag().value()).collect();
        assert_eq!(corners, vec![3002002, 3001002, 1001002, 1002002]);
        assert_eq!(res.synthetic_point, Some(Point3::new(5000.0, 2000.0, 3000.0)));
        assert_relative_eq!(res.area.unwrap(), 40_000_000.0);
        assert_eq!(res.start().tag().value(), 3002002);
        assert!(res.end().is_none());
    }

    #[test]
    fn test_floor_edge_off_grid_fails() {
        let lattice = bay_lattice();
        let resolver = Resolver::new(&lattice);
        let floor = MemberRecord::floor("F2", [-150.0, 0.0, 2850.0], [5000.0, 4000.0, 3000.0]);
        assert!(matches!(
            resolver.resolve_floor(&floor),
            Err(LatticeError::CoordinateLookupFailed { axis: Axis::X, .. })
        ));
    }
}
