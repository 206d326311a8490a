//! Grid line record - an architectural grid in plan

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, LatticeResult};
use crate::math::Coord;

/// A straight grid line in plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridRecord {
    /// Grid name or element id, for error reporting
    #[serde(default)]
    pub source_id: String,
    /// Start point (x, y)
    pub start: Point2<f64>,
    /// End point (x, y)
    pub end: Point2<f64>,
}

/// Axis values a grid line contributes after rounding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridAxes {
    /// Shared X value of a line running along Y
    pub x: Option<Coord>,
    /// Shared Y value of a line running along X
    pub y: Option<Coord>,
}

impl GridRecord {
    /// Create a grid line from its endpoints
    pub fn new(start: (f64, f64), end: (f64, f64)) -> Self {
        Self {
            source_id: String::new(),
            start: Point2::new(start.0, start.1),
            end: Point2::new(end.0, end.1),
        }
    }

    /// Set the grid name
    pub fn with_id(mut self, source_id: &str) -> Self {
        self.source_id = source_id.to_string();
        self
    }

    /// Classify the line by its rounded endpoints.
    ///
    /// Equal X values give an X-axis candidate, equal Y values a Y-axis
    /// candidate. A zero-length line satisfies both.
    pub fn axes(&self) -> LatticeResult<GridAxes> {
        let malformed = || LatticeError::MalformedGridLine {
            source_id: self.source_id.clone(),
            start_x: self.start.x,
            start_y: self.start.y,
            end_x: self.end.x,
            end_y: self.end.y,
        };

        let (sx, sy, ex, ey) = match (
            Coord::new(self.start.x),
            Coord::new(self.start.y),
            Coord::new(self.end.x),
            Coord::new(self.end.y),
        ) {
            (Some(sx), Some(sy), Some(ex), Some(ey)) => (sx, sy, ex, ey),
            _ => return Err(malformed()),
        };

        let axes = GridAxes {
            x: (sx == ex).then_some(sx),
            y: (sy == ey).then_some(sy),
        };
        if axes.x.is_none() && axes.y.is_none() {
            return Err(malformed());
        }
        Ok(axes)
    }
}
