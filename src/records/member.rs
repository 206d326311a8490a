//! Member record - a structural element with its placement geometry

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Kind of structural element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    Beam,
    Column,
    Wall,
    Floor,
}

impl MemberKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Beam => "beam",
            Self::Column => "column",
            Self::Wall => "wall",
            Self::Floor => "floor",
        }
    }
}

/// A straight location line: `origin + direction * length`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationLine {
    /// Start point
    pub origin: Point3<f64>,
    /// Unit direction
    pub direction: Vector3<f64>,
    /// Length along `direction`
    pub length: f64,
}

impl LocationLine {
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>, length: f64) -> Self {
        Self {
            origin,
            direction,
            length,
        }
    }

    /// Build a line running from `start` to `end`
    pub fn between(start: Point3<f64>, end: Point3<f64>) -> Self {
        let delta = end - start;
        let length = delta.norm();
        let direction = if length > 0.0 {
            delta / length
        } else {
            Vector3::zeros()
        };
        Self::new(start, direction, length)
    }

    /// End point of the line
    pub fn end(&self) -> Point3<f64> {
        self.origin + self.direction * self.length
    }
}

/// An axis-aligned bounding box. `min` is never above `max` on any axis,
/// including boxes read from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBoundingBox")]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

/// Corners as written, before normalisation
#[derive(Deserialize)]
struct RawBoundingBox {
    min: Point3<f64>,
    max: Point3<f64>,
}

impl From<RawBoundingBox> for BoundingBox {
    fn from(raw: RawBoundingBox) -> Self {
        Self::new(raw.min, raw.max)
    }
}

impl BoundingBox {
    /// Create a box from two opposite corners in any order
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Centre of the box
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }
}

/// A structural member as read from the building model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRecord {
    /// Element id in the source model, kept for traceability
    pub source_id: String,
    /// Element kind
    pub kind: MemberKind,
    /// Location line (beams, walls, optionally columns)
    #[serde(default)]
    pub line: Option<LocationLine>,
    /// Bounding box (columns, walls, floors)
    #[serde(default)]
    pub bounding_box: Option<BoundingBox>,
}

impl MemberRecord {
    /// Create a member with no geometry attached
    pub fn new(source_id: &str, kind: MemberKind) -> Self {
        Self {
            source_id: source_id.to_string(),
            kind,
            line: None,
            bounding_box: None,
        }
    }

    /// Create a beam from its location line
    pub fn beam(source_id: &str, origin: [f64; 3], direction: [f64; 3], length: f64) -> Self {
        Self::new(source_id, MemberKind::Beam).with_line(LocationLine::new(
            Point3::from(origin),
            Vector3::from(direction),
            length,
        ))
    }

    /// Create a column from its bounding box
    pub fn column(source_id: &str, min: [f64; 3], max: [f64; 3]) -> Self {
        Self::new(source_id, MemberKind::Column)
            .with_bounding_box(BoundingBox::new(Point3::from(min), Point3::from(max)))
    }

    /// Create a wall from its location line and bounding box
    pub fn wall(source_id: &str, line: LocationLine, bounding_box: BoundingBox) -> Self {
        Self::new(source_id, MemberKind::Wall)
            .with_line(line)
            .with_bounding_box(bounding_box)
    }

    /// Create a floor from its bounding box
    pub fn floor(source_id: &str, min: [f64; 3], max: [f64; 3]) -> Self {
        Self::new(source_id, MemberKind::Floor)
            .with_bounding_box(BoundingBox::new(Point3::from(min), Point3::from(max)))
    }

    /// Attach a location line
    pub fn with_line(mut self, line: LocationLine) -> Self {
        self.line = Some(line);
        self
    }

    /// Attach a bounding box
    pub fn with_bounding_box(mut self, bounding_box: BoundingBox) -> Self {
        self.bounding_box = Some(bounding_box);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_line_end() {
        let line = LocationLine::new(Point3::new(0.0, 4000.0, 3000.0), Vector3::new(1.0, 0.0, 0.0), 5000.0);
        let end = line.end();
        assert_relative_eq!(end.x, 5000.0);
        assert_relative_eq!(end.y, 4000.0);
    }

    #[test]
    fn test_line_between() {
        let line = LocationLine::between(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, -4000.0, 0.0));
        assert_relative_eq!(line.length, 4000.0);
        assert_relative_eq!(line.direction.y, -1.0);
    }

    #[test]
    fn test_bounding_box_normalises_corners() {
        let bbox = BoundingBox::new(Point3::new(5000.0, 0.0, 3000.0), Point3::new(0.0, 4000.0, 2800.0));
        assert_eq!(bbox.min, Point3::new(0.0, 0.0, 2800.0));
        assert_eq!(bbox.max, Point3::new(5000.0, 4000.0, 3000.0));
        assert_relative_eq!(bbox.center().x, 2500.0);
    }

    #[test]
    fn test_bounding_box_from_json_is_normalised() {
        let json = r#"{"min": [5000.0, 0.0, 3000.0], "max": [0.0, 4000.0, 2800.0]}"#;
        let bbox: BoundingBox = serde_json::from_str(json).unwrap();
        assert_eq!(bbox.min, Point3::new(0.0, 0.0, 2800.0));
        assert_eq!(bbox.max, Point3::new(5000.0, 4000.0, 3000.0));

        let back: BoundingBox = serde_json::from_str(&serde_json::to_string(&bbox).unwrap()).unwrap();
        assert_eq!(back, bbox);
    }

    #[test]
    fn test_member_deserialises_without_optional_geometry() {
        let json = r#"{"source_id": "F1", "kind": "Floor",
            "bounding_box": {"min": [0.0, 0.0, 2800.0], "max": [5000.0, 4000.0, 3000.0]}}"#;
        let member: MemberRecord = serde_json::from_str(json).unwrap();
        assert_eq!(member.kind, MemberKind::Floor);
        assert!(member.line.is_none());
        assert!(member.bounding_box.is_some());
    }
}
