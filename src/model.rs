//! Lattice model - input records and the build pipeline
//!
//! A build runs Collect -> Index -> Resolve -> Prune once over the records.
//! Malformed grids and unresolvable members are reported as error entries
//! and the build carries on without them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, LatticeResult};
use crate::lattice::{collect_axes, Lattice, Tag, UsageMask};
use crate::loads::GravityLoads;
use crate::options::BuildOptions;
use crate::records::{GridRecord, LevelRecord, MemberRecord};
use crate::resolve::{Resolution, Resolver};
use crate::results::{ErrorEntry, LatticeOutput, LatticeReport, MemberEntry, NodeEntry, ResolvedEntry};

/// Grid, level and member records extracted from one building model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatticeModel {
    #[serde(default)]
    pub grids: Vec<GridRecord>,
    #[serde(default)]
    pub levels: Vec<LevelRecord>,
    #[serde(default)]
    pub members: Vec<MemberRecord>,
}

impl LatticeModel {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model from records, checking member ids are unique
    pub fn from_records(
        grids: Vec<GridRecord>,
        levels: Vec<LevelRecord>,
        members: Vec<MemberRecord>,
    ) -> LatticeResult<Self> {
        let model = Self {
            grids,
            levels,
            members,
        };
        model.check_member_ids()?;
        Ok(model)
    }

    /// Parse a model from JSON, checking member ids are unique
    pub fn from_json(json: &str) -> LatticeResult<Self> {
        let model: Self = serde_json::from_str(json)?;
        model.check_member_ids()?;
        Ok(model)
    }

    pub fn to_json(&self) -> LatticeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add a grid line
    pub fn add_grid(&mut self, grid: GridRecord) {
        self.grids.push(grid);
    }

    /// Add a level
    pub fn add_level(&mut self, level: LevelRecord) {
        self.levels.push(level);
    }

    /// Add a member; its source id must not be taken
    pub fn add_member(&mut self, member: MemberRecord) -> LatticeResult<()> {
        if self.members.iter().any(|m| m.source_id == member.source_id) {
            return Err(LatticeError::DuplicateMember(member.source_id));
        }
        self.members.push(member);
        Ok(())
    }

    fn check_member_ids(&self) -> LatticeResult<()> {
        let mut seen = HashSet::new();
        for member in &self.members {
            if !seen.insert(member.source_id.as_str()) {
                return Err(LatticeError::DuplicateMember(member.source_id.clone()));
            }
        }
        Ok(())
    }

    /// Build the lattice with default options
    pub fn build_default(&self) -> LatticeResult<LatticeOutput> {
        self.build(&BuildOptions::default())
    }

    /// Run the full pipeline.
    ///
    /// Returns `Err` only when the options are invalid, member ids clash, a
    /// level elevation is not a number, or the lattice is too large to tag.
    /// Everything else is reported per record in the output.
    pub fn build(&self, options: &BuildOptions) -> LatticeResult<LatticeOutput> {
        options.validate()?;
        self.check_member_ids()?;

        // Collect
        let collected = collect_axes(&self.grids, &self.levels)?;
        let grid_errors = collected.errors;

        // Index
        let lattice = Lattice::new(collected.x, collected.y, collected.z)?;
        if lattice.is_empty() {
            log::warn!("lattice is empty, no member can be resolved");
        }

        // Resolve
        let mut usage = UsageMask::new(&lattice);
        let mut resolver = Resolver::with_wall_tag_start(&lattice, options.wall_tag_start);
        let mut outcomes = Vec::with_capacity(self.members.len());
        for member in &self.members {
            match resolver.resolve(member) {
                Ok(res) => {
                    for point in res.points() {
                        usage.mark(point);
                    }
                    outcomes.push(Ok(res));
                }
                Err(err) => {
                    log::warn!("{err}");
                    outcomes.push(Err(err));
                }
            }
        }

        // Prune
        let foundation = lattice.foundation_level();
        let mut entries: Vec<ResolvedEntry> = Vec::new();
        for err in &grid_errors {
            entries.push(ResolvedEntry::Error(error_entry(err)?));
        }
        let mut used_tags: Vec<Tag> = Vec::with_capacity(usage.used_count());
        for point in usage.used_points(&lattice) {
            if let Some([x, y, z]) = lattice.coords(point) {
                let tag = point.tag();
                used_tags.push(tag);
                entries.push(ResolvedEntry::Node(NodeEntry {
                    tag,
                    x: x.value(),
                    y: y.value(),
                    z: z.value(),
                    used_as_foundation: Some(z) == foundation,
                }));
            }
        }

        let mut resolved: Vec<Resolution> = Vec::new();
        let mut failed_members = 0;
        for outcome in outcomes {
            match outcome {
                Ok(res) => {
                    entries.push(ResolvedEntry::Member(MemberEntry::from_resolution(&res)));
                    resolved.push(res);
                }
                Err(err) => {
                    failed_members += 1;
                    entries.push(ResolvedEntry::Error(error_entry(&err)?));
                }
            }
        }

        let report = LatticeReport {
            axis_lengths: {
                let (nx, ny, nz) = lattice.dims();
                [nx, ny, nz]
            },
            total_points: usage.total(),
            used_points: usage.used_count(),
            unused_tags: usage.unused_points(&lattice).map(|p| p.tag()).collect(),
            resolved_members: resolved.len(),
            failed_members,
            malformed_grids: grid_errors.len(),
        };

        let gravity = options
            .gravity
            .as_ref()
            .map(|g| GravityLoads::distribute(&resolved, &used_tags, g));

        if options.log {
            log::info!(
                "lattice {}x{}x{}: {} of {} points used, {} members resolved, {} failed",
                report.axis_lengths[0],
                report.axis_lengths[1],
                report.axis_lengths[2],
                report.used_points,
                report.total_points,
                report.resolved_members,
                report.failed_members
            );
        } else {
            log::debug!(
                "{} of {} lattice points used",
                report.used_points,
                report.total_points
            );
        }

        Ok(LatticeOutput {
            entries,
            report,
            gravity,
            lattice,
            usage,
        })
    }
}

/// Per-record errors become entries; anything else aborts the build
fn error_entry(err: &LatticeError) -> LatticeResult<ErrorEntry> {
    ErrorEntry::from_error(err)
        .ok_or_else(|| LatticeError::InvalidInput(format!("unexpected build error: {err}")))
}
