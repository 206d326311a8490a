//! R2O Lattice Example - Two-Bay, Two-Storey Frame
//!
//! Pass a JSON file of `{ "grids": [...], "levels": [...], "members": [...] }`
//! to resolve it instead of the built-in frame.

use anyhow::Context;
use r2o_lattice::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let model = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {path}"))?;
            LatticeModel::from_json(&text).with_context(|| format!("parsing {path}"))?
        }
        None => two_bay_frame()?,
    };

    println!("=== R2O Lattice Example ===\n");

    let output = model.build(&BuildOptions::default().with_logging())?;

    let [nx, ny, nz] = output.report.axis_lengths;
    println!("Axes: {} X, {} Y, {} Z -> {} lattice points", nx, ny, nz, output.report.total_points);
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let values: Vec<String> = output
            .lattice
            .axis(axis)
            .values()
            .iter()
            .map(|c| c.to_string())
            .collect();
        println!("  {}: [{}]", axis, values.join(", "));
    }

    println!("\nNodes ({} used, {} unused):", output.report.used_points, output.report.unused_tags.len());
    for node in output.nodes() {
        println!(
            "  {}: ({}, {}, {}){}",
            node.tag,
            node.x,
            node.y,
            node.z,
            if node.used_as_foundation { " fixed" } else { "" }
        );
    }

    println!("\nMembers:");
    for member in output.members() {
        match (member.end_tag, member.corner_tags) {
            (Some(end), _) => println!(
                "  {} {}: {} -> {} ({:?})",
                member.kind.name(),
                member.source_id,
                member.start_tag,
                end,
                member.orientation
            ),
            (None, Some(corners)) => println!(
                "  {} {}: [{}, {}, {}, {}]",
                member.kind.name(),
                member.source_id,
                corners[0],
                corners[1],
                corners[2],
                corners[3]
            ),
            (None, None) => println!("  {} {}: {}", member.kind.name(), member.source_id, member.start_tag),
        }
    }

    let errors: Vec<&ErrorEntry> = output.errors().collect();
    if !errors.is_empty() {
        println!("\nErrors:");
        for error in errors {
            println!("  {} ({:?}): {}", error.source_id, error.reason, error.message);
        }
    }

    if let Some(gravity) = &output.gravity {
        println!("\nGravity:");
        println!("  Total weight: {:.2}kN", gravity.total_weight / 1000.0);
        println!("  Per node:     {:.2}kN, {:.3}t", gravity.load_per_node / 1000.0, gravity.mass_per_node);
    }

    println!("\n=== Done ===");
    Ok(())
}

/// Grids 1-3 at 6 m, A-B at 5 m, three levels at 3.6 m
fn two_bay_frame() -> anyhow::Result<LatticeModel> {
    let span = 6000.0;
    let depth = 5000.0;
    let storey = 3600.0;

    let mut model = LatticeModel::new();
    for (n, name) in ["1", "2", "3"].iter().enumerate() {
        let x = n as f64 * span;
        model.add_grid(GridRecord::new((x, -1000.0), (x, depth + 1000.0)).with_id(name));
    }
    for (n, name) in ["A", "B"].iter().enumerate() {
        let y = n as f64 * depth;
        model.add_grid(GridRecord::new((-1000.0, y), (2.0 * span + 1000.0, y)).with_id(name));
    }
    for n in 0..3 {
        model.add_level(LevelRecord::new(n as f64 * storey).with_id(&format!("L{n}")));
    }

    for storey_n in 0..2 {
        let bottom = storey_n as f64 * storey;
        let top = bottom + storey;
        for bay in 0..3 {
            for row in 0..2 {
                let (x, y) = (bay as f64 * span, row as f64 * depth);
                model.add_member(MemberRecord::column(
                    &format!("C{storey_n}{bay}{row}"),
                    [x - 250.0, y - 250.0, bottom],
                    [x + 250.0, y + 250.0, top],
                ))?;
            }
        }
        for bay in 0..2 {
            for row in 0..2 {
                let (x, y) = (bay as f64 * span, row as f64 * depth);
                model.add_member(MemberRecord::beam(
                    &format!("BX{storey_n}{bay}{row}"),
                    [x, y, top],
                    [1.0, 0.0, 0.0],
                    span,
                ))?;
            }
            let x0 = bay as f64 * span;
            model.add_member(MemberRecord::floor(
                &format!("F{storey_n}{bay}"),
                [x0, 0.0, top - 150.0],
                [x0 + span, depth, top],
            ))?;
        }
    }

    // Off-grid beam to show error reporting
    model.add_member(MemberRecord::beam("BX-off", [0.0, 2500.0, storey], [1.0, 0.0, 0.0], span))?;

    Ok(model)
}
