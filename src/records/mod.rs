//! Input records supplied by the model extraction layer
//!
//! All values are in millimetres.

mod grid;
mod level;
mod member;

pub use grid::{GridAxes, GridRecord};
pub use level::LevelRecord;
pub use member::{BoundingBox, LocationLine, MemberKind, MemberRecord};
