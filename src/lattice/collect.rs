//! Coordinate collection from grids and levels

use crate::error::{LatticeError, LatticeResult};
use crate::math::Coord;
use crate::records::{GridRecord, LevelRecord};

use super::{Axis, AxisList};

/// Axis lists gathered from the input, plus the grid lines that were rejected
#[derive(Debug)]
pub struct CollectedAxes {
    pub x: AxisList,
    pub y: AxisList,
    pub z: AxisList,
    /// One `MalformedGridLine` per rejected grid, in input order
    pub errors: Vec<LatticeError>,
}

/// Collect X and Y from grid lines and Z from levels.
///
/// A grid that is neither horizontal nor vertical is reported in
/// [`CollectedAxes::errors`] and collection carries on. A level with a
/// non-finite elevation fails the whole collection.
pub fn collect_axes(grids: &[GridRecord], levels: &[LevelRecord]) -> LatticeResult<CollectedAxes> {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut errors = Vec::new();

    for (n, grid) in grids.iter().enumerate() {
        match grid.axes() {
            Ok(axes) => {
                xs.extend(axes.x);
                ys.extend(axes.y);
            }
            Err(mut err) => {
                if let LatticeError::MalformedGridLine { source_id, .. } = &mut err {
                    if source_id.is_empty() {
                        *source_id = format!("grid#{n}");
                    }
                }
                log::warn!("{err}");
                errors.push(err);
            }
        }
    }

    let mut zs = Vec::with_capacity(levels.len());
    for level in levels {
        let z = Coord::new(level.elevation).ok_or_else(|| {
            LatticeError::InvalidInput(format!(
                "level '{}' has elevation {}",
                level.source_id, level.elevation
            ))
        })?;
        zs.push(z);
    }

    let collected = CollectedAxes {
        x: AxisList::from_candidates(Axis::X, xs),
        y: AxisList::from_candidates(Axis::Y, ys),
        z: AxisList::from_candidates(Axis::Z, zs),
        errors,
    };
    log::debug!(
        "collected {} X, {} Y, {} Z coordinates ({} malformed grids)",
        collected.x.len(),
        collected.y.len(),
        collected.z.len(),
        collected.errors.len()
    );
    Ok(collected)
}
