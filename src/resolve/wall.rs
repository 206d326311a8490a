//! Walls

use nalgebra::Point3;

use crate::error::LatticeResult;
use crate::lattice::Axis;
use crate::math::{self, Coord};
use crate::records::MemberRecord;

use super::orientation::{plan_axis, round_direction, Orientation, PlanAxis};
use super::{require_box, require_line, Connectivity, Resolution, Resolver};

impl Resolver<'_> {
    /// A wall follows its location line in plan and its bounding box in
    /// elevation: the start sits on the bottom level, the end on the top
    /// level. The mid-height centre of the wall is kept as a synthetic point.
    pub(super) fn resolve_wall(&mut self, member: &MemberRecord) -> LatticeResult<Resolution> {
        let id = member.source_id.as_str();
        let line = require_line(member)?;
        let bbox = require_box(member)?;
        let axis = plan_axis(id, &line.direction)?;
        let d = round_direction(id, &line.direction)?;

        let bottom = self.round(id, Axis::Z, bbox.min.z)?;
        let top = self.round(id, Axis::Z, bbox.max.z)?;
        let sx = self.round(id, Axis::X, line.origin.x)?;
        let sy = self.round(id, Axis::Y, line.origin.y)?;

        let (ex, ey) = match axis {
            PlanAxis::AlongX => (
                self.round(id, Axis::X, sx.value() + d.dx.value() * line.length)?,
                sy,
            ),
            PlanAxis::AlongY => (
                sx,
                self.round(id, Axis::Y, sy.value() + d.dy.value() * line.length)?,
            ),
        };

        let start = self.point(id, sx, sy, bottom)?;
        let end = self.point(id, ex, ey, top)?;
        let orientation = match axis {
            PlanAxis::AlongX => Orientation::along(axis, sx, ex),
            PlanAxis::AlongY => Orientation::along(axis, sy, ey),
        };
        let element_tag = self.take_wall_tag(id)?;
        let center = Point3::new(
            Coord::midpoint(sx, ex).value(),
            Coord::midpoint(sy, ey).value(),
            Coord::midpoint(bottom, top).value(),
        );

        Ok(Resolution {
            source_id: member.source_id.clone(),
            kind: member.kind,
            connectivity: Connectivity::Line { start, end },
            orientation,
            length: Some(math::round(line.length)),
            area: None,
            synthetic_point: Some(center),
            element_tag: Some(element_tag),
        })
    }
}
