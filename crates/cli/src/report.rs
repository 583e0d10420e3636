//! Text report for an analysis result.
//!
//! Mirrors the layout of the interactive tool's console output: one
//! line per box, then pallet-level tallies. Positions are printed as
//! raw floats; only placement IDs are zero-padded.

use pallet_reach_core::AnalysisResult;
use std::io::{self, Write};

/// Writes the per-box listing and the summary block.
pub fn print_report<W: Write>(out: &mut W, result: &AnalysisResult) -> io::Result<()> {
    writeln!(out, "\nResults:")?;
    for placement in &result.placements {
        let status = if placement.reachability.is_within_reach() {
            "Reachable"
        } else {
            "Not Reachable"
        };
        let position = placement.placement.position;
        writeln!(
            out,
            "Box ID: {}, Layer: {}, Status: {}, Position: ({}, {}, {})",
            placement.id(),
            placement.layer(),
            status,
            position.x,
            position.y,
            position.z
        )?;
    }

    let summary = result.summary();
    writeln!(out, "\nSummary:")?;
    writeln!(out, "Robot: {} (policy: {:?})", result.scenario.robot.class, result.policy)?;
    writeln!(out, "Total number of boxes: {}", summary.total_boxes)?;
    writeln!(out, "Number of boxes reachable: {}", summary.within_reach)?;
    writeln!(out, "Number of boxes not reachable: {}", summary.unreachable)?;

    for layer in result.layer_summaries() {
        writeln!(
            out,
            "Layer {}: {} reachable boxes",
            layer.layer,
            layer.within_reach()
        )?;
    }

    writeln!(
        out,
        "Number of fully reachable layers: {}",
        summary.fully_reachable_layers
    )?;
    writeln!(
        out,
        "Number of partially or not reachable layers: {}",
        summary.partial_layers
    )?;

    if summary.stand_height_raise > 0.0 {
        writeln!(
            out,
            "Recommended stand height increase: {} mm (7th axis), effective robot height: {} mm",
            summary.stand_height_raise,
            result.effective_robot_height()
        )?;
    }
    Ok(())
}
