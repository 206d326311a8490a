//! Gravity loads and lumped masses on used nodes

mod gravity;

pub use gravity::{GravityLoads, GravityOptions, NodalGravity, SectionSize};
