//! Self-weight and floor load, spread evenly over the used nodes
//!
//! Units are millimetres, newtons and seconds, so masses come out in tonnes.

use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, LatticeResult};
use crate::lattice::Tag;
use crate::records::MemberKind;
use crate::resolve::Resolution;

/// Rectangular cross-section dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionSize {
    /// Width (mm)
    pub width: f64,
    /// Depth (mm)
    pub depth: f64,
}

impl SectionSize {
    pub fn new(width: f64, depth: f64) -> Self {
        Self { width, depth }
    }

    /// Cross-section area (mm²)
    pub fn area(&self) -> f64 {
        self.width * self.depth
    }
}

/// Parameters of the gravity load estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityOptions {
    /// Unit weight of the frame material (N/mm³); 25 kN/m³ reinforced concrete
    pub unit_weight: f64,
    /// Section assumed for every beam
    pub beam_section: SectionSize,
    /// Section assumed for every column
    pub column_section: SectionSize,
    /// Area load on floors (N/mm²); 6 kN/m²
    pub floor_area_load: f64,
    /// Gravitational acceleration (mm/s²)
    pub gravity: f64,
}

impl Default for GravityOptions {
    fn default() -> Self {
        Self {
            unit_weight: 2.5e-5,
            beam_section: SectionSize::new(300.0, 500.0),
            column_section: SectionSize::new(500.0, 500.0),
            floor_area_load: 6.0e-3,
            gravity: 9810.0,
        }
    }
}

impl GravityOptions {
    /// Set the frame unit weight
    pub fn with_unit_weight(mut self, unit_weight: f64) -> Self {
        self.unit_weight = unit_weight;
        self
    }

    /// Set the beam and column sections
    pub fn with_sections(mut self, beam: SectionSize, column: SectionSize) -> Self {
        self.beam_section = beam;
        self.column_section = column;
        self
    }

    /// Set the floor area load
    pub fn with_floor_area_load(mut self, load: f64) -> Self {
        self.floor_area_load = load;
        self
    }

    pub fn validate(&self) -> LatticeResult<()> {
        let non_negative = [
            ("unit_weight", self.unit_weight),
            ("beam_section.width", self.beam_section.width),
            ("beam_section.depth", self.beam_section.depth),
            ("column_section.width", self.column_section.width),
            ("column_section.depth", self.column_section.depth),
            ("floor_area_load", self.floor_area_load),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(LatticeError::InvalidInput(format!(
                    "gravity option {name} must be a non-negative number, got {value}"
                )));
            }
        }
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(LatticeError::InvalidInput(format!(
                "gravity option gravity must be positive, got {}",
                self.gravity
            )));
        }
        Ok(())
    }

    /// Weight a resolved member contributes. Walls carry none.
    pub fn member_weight(&self, member: &Resolution) -> f64 {
        match member.kind {
            MemberKind::Beam => {
                member.length.unwrap_or(0.0) * self.beam_section.area() * self.unit_weight
            }
            MemberKind::Column => {
                member.length.unwrap_or(0.0) * self.column_section.area() * self.unit_weight
            }
            MemberKind::Floor => member.area.unwrap_or(0.0) * self.floor_area_load,
            MemberKind::Wall => 0.0,
        }
    }
}

/// Downward load and lumped mass at one node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodalGravity {
    pub tag: Tag,
    /// Vertical force (N), negative downward
    pub fz: f64,
    /// Translational mass (t)
    pub mass: f64,
}

/// Total gravity load and its even split over the used nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GravityLoads {
    /// Sum of member weights (N)
    pub total_weight: f64,
    /// Load on each used node (N)
    pub load_per_node: f64,
    /// Mass on each used node (t)
    pub mass_per_node: f64,
    pub nodes: Vec<NodalGravity>,
}

impl GravityLoads {
    /// Sum member weights and split them over `used_tags`.
    ///
    /// With no used nodes the total is still reported but nothing is
    /// distributed.
    pub fn distribute(members: &[Resolution], used_tags: &[Tag], options: &GravityOptions) -> Self {
        let total_weight: f64 = members.iter().map(|m| options.member_weight(m)).sum();

        if used_tags.is_empty() {
            return Self {
                total_weight,
                load_per_node: 0.0,
                mass_per_node: 0.0,
                nodes: Vec::new(),
            };
        }

        let load_per_node = total_weight / used_tags.len() as f64;
        let mass_per_node = load_per_node / options.gravity;
        let nodes = used_tags
            .iter()
            .map(|&tag| NodalGravity {
                tag,
                fz: -load_per_node,
                mass: mass_per_node,
            })
            .collect();

        Self {
            total_weight,
            load_per_node,
            mass_per_node,
            nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::LatticePoint;
    use crate::resolve::{Connectivity, Orientation};
    use approx::assert_relative_eq;

    fn resolution(kind: MemberKind, length: Option<f64>, area: Option<f64>) -> Resolution {
        Resolution {
            source_id: "M".to_string(),
            kind,
            connectivity: Connectivity::Line {
                start: LatticePoint::new(0, 0, 0),
                end: LatticePoint::new(0, 0, 1),
            },
            orientation: Orientation::Vertical,
            length,
            area,
            synthetic_point: None,
            element_tag: None,
        }
    }

    #[test]
    fn test_member_weights() {
        let options = GravityOptions::default();
        // 6 m of 300x500 concrete: 0.9 m³ * 25 kN/m³ = 22.5 kN
        let beam = resolution(MemberKind::Beam, Some(6000.0), None);
        assert_relative_eq!(options.member_weight(&beam), 22_500.0, epsilon = 1e-6);
        // 3 m of 500x500: 0.75 m³ -> 18.75 kN
        let column = resolution(MemberKind::Column, Some(3000.0), None);
        assert_relative_eq!(options.member_weight(&column), 18_750.0, epsilon = 1e-6);
        // 20 m² at 6 kN/m² -> 120 kN
        let floor = resolution(MemberKind::Floor, None, Some(20.0e6));
        assert_relative_eq!(options.member_weight(&floor), 120_000.0, epsilon = 1e-6);
        let wall = resolution(MemberKind::Wall, Some(5000.0), None);
        assert_eq!(options.member_weight(&wall), 0.0);
    }

    #[test]
    fn test_custom_sections_and_floor_load() {
        // Steel-ish frame: 78.5 kN/m³, 200x400 beams, 400x400 columns, 4 kN/m² floors
        let options = GravityOptions::default()
            .with_unit_weight(7.85e-5)
            .with_sections(SectionSize::new(200.0, 400.0), SectionSize::new(400.0, 400.0))
            .with_floor_area_load(4.0e-3);
        assert!(options.validate().is_ok());

        let beam = resolution(MemberKind::Beam, Some(5000.0), None);
        assert_relative_eq!(options.member_weight(&beam), 31_400.0, epsilon = 1e-6);
        let column = resolution(MemberKind::Column, Some(3000.0), None);
        assert_relative_eq!(options.member_weight(&column), 37_680.0, epsilon = 1e-6);
        let floor = resolution(MemberKind::Floor, None, Some(20.0e6));
        assert_relative_eq!(options.member_weight(&floor), 80_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_even_distribution() {
        let options = GravityOptions::default();
        let members = vec![resolution(MemberKind::Column, Some(3000.0), None)];
        let tags = vec![Tag::from_raw(1001001), Tag::from_raw(1001002)];
        let loads = GravityLoads::distribute(&members, &tags, &options);

        assert_relative_eq!(loads.total_weight, 18_750.0, epsilon = 1e-6);
        assert_relative_eq!(loads.load_per_node, 9_375.0, epsilon = 1e-6);
        assert_relative_eq!(loads.mass_per_node, 9_375.0 / 9810.0, epsilon = 1e-9);
        assert_eq!(loads.nodes.len(), 2);
        assert!(loads.nodes.iter().all(|n| n.fz < 0.0));
    }

    #[test]
    fn test_no_used_nodes_distributes_nothing() {
        let options = GravityOptions::default();
        let members = vec![resolution(MemberKind::Beam, Some(1000.0), None)];
        let loads = GravityLoads::distribute(&members, &[], &options);
        assert!(loads.nodes.is_empty());
        assert_eq!(loads.load_per_node, 0.0);
        assert!(loads.total_weight > 0.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(GravityOptions::default().validate().is_ok());
        let negative = GravityOptions::default().with_unit_weight(-1.0);
        assert!(negative.validate().is_err());
        let zero_g = GravityOptions {
            gravity: 0.0,
            ..GravityOptions::default()
        };
        assert!(zero_g.validate().is_err());
    }
}
