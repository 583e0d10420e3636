//! Analysis result representation.

use crate::analyzer::Scenario;
use crate::classify::{Reachability, ReachPolicy};
use crate::placement::ClassifiedPlacement;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one reachability analysis pass.
///
/// Placements are stored in generation order (layer, then row-major
/// slot) and are immutable once classified.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisResult {
    /// The analyzed scenario, echoed for reporting and rendering.
    pub scenario: Scenario,

    /// The policy the classifications were made under.
    pub policy: ReachPolicy,

    /// Every classified placement, in generation order.
    pub placements: Vec<ClassifiedPlacement>,

    /// Slots per layer, computed once from the layout grid. Also the
    /// denominator for fully-reachable layer detection.
    pub slots_per_layer: u32,

    /// Recommended stand-height raise in mm: 0, or 700 when any
    /// two-tier classification came out difficult or unreachable.
    ///
    /// A pure reduction over the batch; the classifications themselves
    /// always use the unadjusted base height.
    pub stand_height_raise: f64,
}

impl AnalysisResult {
    /// Robot height to use for reporting and rendering: the base
    /// height plus any recommended stand raise.
    pub fn effective_robot_height(&self) -> f64 {
        self.scenario.robot.base_height + self.stand_height_raise
    }

    /// Total number of placed boxes.
    pub fn total_boxes(&self) -> usize {
        self.placements.len()
    }

    /// Number of placements in the given category.
    pub fn count(&self, category: Reachability) -> usize {
        self.placements
            .iter()
            .filter(|p| p.reachability == category)
            .count()
    }

    /// Number of boxes the robot can reach at all (everything except
    /// `Unreachable`).
    pub fn within_reach(&self) -> usize {
        self.placements
            .iter()
            .filter(|p| p.reachability.is_within_reach())
            .count()
    }

    /// Per-layer tallies, one entry per layer in ascending order.
    pub fn layer_summaries(&self) -> Vec<LayerSummary> {
        let mut summaries: Vec<LayerSummary> = (1..=self.scenario.layers)
            .map(|layer| LayerSummary {
                layer,
                slots: self.slots_per_layer,
                easy: 0,
                difficult: 0,
                unreachable: 0,
            })
            .collect();

        for placement in &self.placements {
            let summary = &mut summaries[(placement.layer() - 1) as usize];
            match placement.reachability {
                Reachability::Easy | Reachability::Reachable => summary.easy += 1,
                Reachability::Difficult => summary.difficult += 1,
                Reachability::Unreachable => summary.unreachable += 1,
            }
        }
        summaries
    }

    /// Number of layers where every slot is in easy reach.
    pub fn fully_reachable_layers(&self) -> u32 {
        self.layer_summaries()
            .iter()
            .filter(|s| s.is_fully_reachable())
            .count() as u32
    }

    /// Condensed statistics for reporting.
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary::from(self)
    }
}

/// Per-layer classification tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerSummary {
    /// Layer index, 1-based.
    pub layer: u32,
    /// Slots available in this layer.
    pub slots: u32,
    /// Placements classified `Easy` (two-tier) or `Reachable`
    /// (single-tier).
    pub easy: u32,
    /// Placements classified `Difficult` (two-tier only).
    pub difficult: u32,
    /// Placements classified `Unreachable`.
    pub unreachable: u32,
}

impl LayerSummary {
    /// Boxes in this layer the robot can reach at all.
    pub fn within_reach(&self) -> u32 {
        self.easy + self.difficult
    }

    /// True when every slot in the layer is in easy reach.
    ///
    /// Equivalent to every placement in the layer satisfying
    /// [`Reachability::is_easy_reach`]; an empty layer never counts.
    pub fn is_fully_reachable(&self) -> bool {
        self.slots > 0 && self.easy == self.slots
    }
}

/// Condensed pallet-level statistics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisSummary {
    /// Total boxes placed.
    pub total_boxes: usize,
    /// Boxes the robot can reach at all.
    pub within_reach: usize,
    /// Boxes beyond the reach envelope.
    pub unreachable: usize,
    /// Layers where every slot is in easy reach.
    pub fully_reachable_layers: u32,
    /// Layers that are only partially reachable or not reachable.
    pub partial_layers: u32,
    /// Recommended stand-height raise in mm.
    pub stand_height_raise: f64,
}

impl From<&AnalysisResult> for AnalysisSummary {
    fn from(result: &AnalysisResult) -> Self {
        let fully = result.fully_reachable_layers();
        let within = result.within_reach();
        Self {
            total_boxes: result.total_boxes(),
            within_reach: within,
            unreachable: result.total_boxes() - within,
            fully_reachable_layers: fully,
            partial_layers: result.scenario.layers - fully,
            stand_height_raise: result.stand_height_raise,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_summary_fully_reachable() {
        let summary = LayerSummary {
            layer: 1,
            slots: 9,
            easy: 9,
            difficult: 0,
            unreachable: 0,
        };
        assert!(summary.is_fully_reachable());
        assert_eq!(summary.within_reach(), 9);
    }

    #[test]
    fn test_layer_summary_difficult_blocks_fully_reachable() {
        let summary = LayerSummary {
            layer: 1,
            slots: 9,
            easy: 8,
            difficult: 1,
            unreachable: 0,
        };
        assert!(!summary.is_fully_reachable());
        assert_eq!(summary.within_reach(), 9);
    }

    #[test]
    fn test_empty_layer_never_fully_reachable() {
        let summary = LayerSummary {
            layer: 1,
            slots: 0,
            easy: 0,
            difficult: 0,
            unreachable: 0,
        };
        assert!(!summary.is_fully_reachable());
    }
}
