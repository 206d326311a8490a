//! Member orientation

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, LatticeResult};
use crate::math::Coord;

/// Direction sense of a resolved member.
///
/// Solvers pick the local axis transformation of a frame element from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Runs towards +X
    PositiveX,
    /// Runs towards -X
    NegativeX,
    /// Runs towards +Y
    PositiveY,
    /// Runs towards -Y
    NegativeY,
    /// Column, bottom to top
    Vertical,
    /// Floor plate
    Horizontal,
}

impl Orientation {
    /// Orientation of a plan member from its rounded start and end
    pub(crate) fn along(axis: PlanAxis, start: Coord, end: Coord) -> Self {
        match (axis, start < end) {
            (PlanAxis::AlongX, true) => Self::PositiveX,
            (PlanAxis::AlongX, false) => Self::NegativeX,
            (PlanAxis::AlongY, true) => Self::PositiveY,
            (PlanAxis::AlongY, false) => Self::NegativeY,
        }
    }
}

/// Which plan axis a horizontal member runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlanAxis {
    AlongX,
    AlongY,
}

/// Direction components rounded like coordinates
pub(crate) struct RoundedDirection {
    pub dx: Coord,
    pub dy: Coord,
    pub dz: Coord,
}

pub(crate) fn round_direction(source_id: &str, direction: &Vector3<f64>) -> LatticeResult<RoundedDirection> {
    match (Coord::new(direction.x), Coord::new(direction.y), Coord::new(direction.z)) {
        (Some(dx), Some(dy), Some(dz)) => Ok(RoundedDirection { dx, dy, dz }),
        _ => Err(unsupported(source_id, direction)),
    }
}

/// Classify a horizontal direction as running along X or Y
pub(crate) fn plan_axis(source_id: &str, direction: &Vector3<f64>) -> LatticeResult<PlanAxis> {
    let d = round_direction(source_id, direction)?;
    if !d.dz.is_zero() {
        return Err(unsupported(source_id, direction));
    }
    match (d.dx.is_zero(), d.dy.is_zero()) {
        (false, true) => Ok(PlanAxis::AlongX),
        (true, false) => Ok(PlanAxis::AlongY),
        _ => Err(unsupported(source_id, direction)),
    }
}

pub(crate) fn unsupported(source_id: &str, direction: &Vector3<f64>) -> LatticeError {
    LatticeError::OrientationUnsupported {
        source_id: source_id.to_string(),
        dx: direction.x,
        dy: direction.y,
        dz: direction.z,
    }
}
