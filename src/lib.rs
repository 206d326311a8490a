//! R2O Lattice - grid/level lattice builder for structural model export
//!
//! Turns records extracted from a building model (grid lines, levels and
//! structural members) into a consistent node/element numbering for a
//! structural solver:
//! - Deduplicated, sorted X/Y/Z axis lists from grids and levels
//! - A dense lattice of nodes tagged `x * 1_000_000 + y * 1_000 + z`
//! - Beams, columns, walls and floors resolved onto lattice tags
//! - Unused lattice points pruned from the emitted node set
//! - Optional gravity load and lumped mass per used node
//!
//! Coordinates are rounded to two decimals before comparison.
//!
//! ## Example
//! ```rust
//! use r2o_lattice::prelude::*;
//!
//! let mut model = LatticeModel::new();
//!
//! // Grids: 1 and 2 along Y, A and B along X
//! model.add_grid(GridRecord::new((0.0, 0.0), (0.0, 4000.0)).with_id("1"));
//! model.add_grid(GridRecord::new((5000.0, 0.0), (5000.0, 4000.0)).with_id("2"));
//! model.add_grid(GridRecord::new((0.0, 0.0), (5000.0, 0.0)).with_id("A"));
//! model.add_grid(GridRecord::new((0.0, 4000.0), (5000.0, 4000.0)).with_id("B"));
//!
//! // Levels
//! model.add_level(LevelRecord::new(0.0));
//! model.add_level(LevelRecord::new(3000.0));
//!
//! // A column on grid 1/A
//! model
//!     .add_member(MemberRecord::column("C1", [-250.0, -250.0, 0.0], [250.0, 250.0, 3000.0]))
//!     .unwrap();
//!
//! let output = model.build(&BuildOptions::default()).unwrap();
//! let column = output.member("C1").unwrap();
//! assert_eq!(column.start_tag.value(), 1001001);
//! assert_eq!(column.end_tag.unwrap().value(), 1001002);
//! ```

pub mod error;
pub mod lattice;
pub mod loads;
pub mod math;
pub mod model;
pub mod options;
pub mod records;
pub mod resolve;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::error::{ErrorReason, LatticeError, LatticeResult};
    pub use crate::lattice::{Axis, AxisList, Lattice, LatticePoint, Tag, UsageMask};
    pub use crate::loads::{GravityLoads, GravityOptions, SectionSize};
    pub use crate::math::Coord;
    pub use crate::model::LatticeModel;
    pub use crate::options::BuildOptions;
    pub use crate::records::{BoundingBox, GridRecord, LevelRecord, LocationLine, MemberKind, MemberRecord};
    pub use crate::resolve::{Orientation, Resolution, Resolver};
    pub use crate::results::{
        ErrorEntry, LatticeOutput, LatticeReport, MemberEntry, NodeEntry, ResolvedEntry,
    };
}
