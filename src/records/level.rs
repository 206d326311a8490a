//! Level record - a storey elevation

use serde::{Deserialize, Serialize};

/// A building level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelRecord {
    /// Level name or element id
    #[serde(default)]
    pub source_id: String,
    /// Elevation
    pub elevation: f64,
}

impl LevelRecord {
    pub fn new(elevation: f64) -> Self {
        Self {
            source_id: String::new(),
            elevation,
        }
    }

    /// Set the level name
    pub fn with_id(mut self, source_id: &str) -> Self {
        self.source_id = source_id.to_string();
        self
    }
}
