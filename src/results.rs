//! Output records of a lattice build

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::error::{ErrorReason, LatticeError};
use crate::lattice::{Lattice, Tag, UsageMask};
use crate::loads::GravityLoads;
use crate::records::MemberKind;
use crate::resolve::{Orientation, Resolution};

/// A lattice point that became a solver node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeEntry {
    pub tag: Tag,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Node sits on the lowest level and is fixed
    pub used_as_foundation: bool,
}

/// A resolved member, referencing nodes by tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberEntry {
    pub source_id: String,
    pub kind: MemberKind,
    /// Start node; the first corner for floors
    pub start_tag: Tag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_tag: Option<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_tags: Option<[Tag; 4]>,
    pub orientation: Orientation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    /// Wall centre or floor centre, identified by `source_id` rather than a tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synthetic_point: Option<Point3<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_tag: Option<u64>,
}

impl MemberEntry {
    pub fn from_resolution(res: &Resolution) -> Self {
        Self {
            source_id: res.source_id.clone(),
            kind: res.kind,
            start_tag: res.start().tag(),
            end_tag: res.end().map(|p| p.tag()),
            corner_tags: res.corners().map(|corners| corners.map(|p| p.tag())),
            orientation: res.orientation,
            length: res.length,
            area: res.area,
            synthetic_point: res.synthetic_point,
            element_tag: res.element_tag,
        }
    }
}

/// A record that could not be used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub source_id: String,
    pub reason: ErrorReason,
    pub message: String,
}

impl ErrorEntry {
    /// Build from a per-record error; `None` for errors without a record
    pub fn from_error(err: &LatticeError) -> Option<Self> {
        Some(Self {
            source_id: err.source_id()?.to_string(),
            reason: err.reason()?,
            message: err.to_string(),
        })
    }
}

/// One item of the ordered output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ResolvedEntry {
    Node(NodeEntry),
    Member(MemberEntry),
    Error(ErrorEntry),
}

/// Lattice size bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatticeReport {
    /// Entries per axis (x, y, z)
    pub axis_lengths: [usize; 3],
    /// Dense lattice size, used or not
    pub total_points: usize,
    pub used_points: usize,
    /// Points no member references, ascending
    pub unused_tags: Vec<Tag>,
    pub resolved_members: usize,
    pub failed_members: usize,
    pub malformed_grids: usize,
}

/// Everything a build produces
#[derive(Debug, Clone, Serialize)]
pub struct LatticeOutput {
    /// Grid errors, then used nodes by tag, then members in input order
    pub entries: Vec<ResolvedEntry>,
    pub report: LatticeReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravity: Option<GravityLoads>,
    pub lattice: Lattice,
    #[serde(skip)]
    pub(crate) usage: UsageMask,
}

impl LatticeOutput {
    pub fn nodes(&self) -> impl Iterator<Item = &NodeEntry> {
        self.entries.iter().filter_map(|e| match e {
            ResolvedEntry::Node(node) => Some(node),
            _ => None,
        })
    }

    pub fn members(&self) -> impl Iterator<Item = &MemberEntry> {
        self.entries.iter().filter_map(|e| match e {
            ResolvedEntry::Member(member) => Some(member),
            _ => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &ErrorEntry> {
        self.entries.iter().filter_map(|e| match e {
            ResolvedEntry::Error(error) => Some(error),
            _ => None,
        })
    }

    /// Tags of the emitted nodes, ascending. These are the nodes a solver
    /// script attaches displacement and acceleration recorders to.
    pub fn node_tags(&self) -> Vec<Tag> {
        self.nodes().map(|n| n.tag).collect()
    }

    /// Emitted node with the given tag
    pub fn node(&self, tag: Tag) -> Option<&NodeEntry> {
        self.nodes().find(|n| n.tag == tag)
    }

    /// Resolved member with the given source id
    pub fn member(&self, source_id: &str) -> Option<&MemberEntry> {
        self.members().find(|m| m.source_id == source_id)
    }

    /// Error reported for the given source id
    pub fn error(&self, source_id: &str) -> Option<&ErrorEntry> {
        self.errors().find(|e| e.source_id == source_id)
    }

    /// Whether a tag names a lattice point referenced by some member
    pub fn is_used(&self, tag: Tag) -> bool {
        self.lattice
            .point(tag)
            .is_some_and(|p| self.usage.is_used(p))
    }
}
