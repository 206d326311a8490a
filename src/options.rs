//! Build options

use serde::{Deserialize, Serialize};

use crate::error::LatticeResult;
use crate::loads::GravityOptions;
use crate::resolve::DEFAULT_WALL_TAG_START;

/// Options for a lattice build
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Gravity load estimate; `None` skips it
    pub gravity: Option<GravityOptions>,
    /// First element tag handed out to walls
    pub wall_tag_start: u64,
    /// Log progress at info level
    pub log: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            gravity: Some(GravityOptions::default()),
            wall_tag_start: DEFAULT_WALL_TAG_START,
            log: false,
        }
    }
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom gravity parameters
    pub fn with_gravity(mut self, gravity: GravityOptions) -> Self {
        self.gravity = Some(gravity);
        self
    }

    /// Skip the gravity load estimate
    pub fn without_gravity(mut self) -> Self {
        self.gravity = None;
        self
    }

    /// Set the first wall element tag
    pub fn with_wall_tag_start(mut self, start: u64) -> Self {
        self.wall_tag_start = start;
        self
    }

    /// Enable logging
    pub fn with_logging(mut self) -> Self {
        self.log = true;
        self
    }

    pub fn validate(&self) -> LatticeResult<()> {
        if let Some(gravity) = &self.gravity {
            gravity.validate()?;
        }
        Ok(())
    }
}
