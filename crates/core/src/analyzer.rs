//! The reachability analyzer: layout enumeration plus classification.
//!
//! The whole placement set is generated and classified eagerly in a
//! single synchronous pass; the only batch-level output besides the
//! placements themselves is the stand-height raise, computed as a max
//! reduction over the classifications.

use crate::classify::{PolicyVariant, ReachPolicy};
use crate::error::{Error, Result};
use crate::geometry::{BoxSpec, PalletSpec};
use crate::layout::LayoutGenerator;
use crate::placement::ClassifiedPlacement;
use crate::result::AnalysisResult;
use crate::robot::RobotProfile;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Validated inputs for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scenario {
    /// Box dimensions.
    pub box_spec: BoxSpec,
    /// Pallet footprint and master point.
    pub pallet: PalletSpec,
    /// Number of stacked layers, at least 1.
    pub layers: u32,
    /// Robot class and base height.
    pub robot: RobotProfile,
}

impl Scenario {
    /// Bundles the inputs, rejecting a zero layer count.
    pub fn new(
        box_spec: BoxSpec,
        pallet: PalletSpec,
        layers: u32,
        robot: RobotProfile,
    ) -> Result<Self> {
        if layers == 0 {
            return Err(Error::InvalidLayerCount);
        }
        Ok(Self {
            box_spec,
            pallet,
            layers,
            robot,
        })
    }

    /// Re-checks all invariants (useful after deserialization).
    pub fn validate(&self) -> Result<()> {
        self.box_spec.validate()?;
        self.pallet.validate()?;
        if self.layers == 0 {
            return Err(Error::InvalidLayerCount);
        }
        Ok(())
    }
}

/// Analyzer configuration.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Which classification policy to build from the robot class.
    pub variant: PolicyVariant,
}

impl Config {
    /// Creates a configuration with the canonical two-tier variant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy variant.
    pub fn with_variant(mut self, variant: PolicyVariant) -> Self {
        self.variant = variant;
        self
    }
}

/// Computes reachability for every box placement in a scenario.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: Config,
}

impl Analyzer {
    /// Creates an analyzer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates an analyzer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Runs the full pass: enumerate placements, classify each against
    /// the robot's reach envelope, reduce the stand-height raise.
    ///
    /// Classification always uses the robot's original base height;
    /// the raise is a follow-up recommendation, never an input to the
    /// distance calculation. A degenerate layout (box larger than the
    /// pallet) yields an empty, error-free result.
    pub fn analyze(&self, scenario: &Scenario) -> Result<AnalysisResult> {
        scenario.validate()?;

        let policy = ReachPolicy::for_variant(self.config.variant, scenario.robot.class);
        let generator = LayoutGenerator::new(scenario.pallet, scenario.box_spec);
        let base = Point3::new(0.0, 0.0, scenario.robot.base_height);

        let mut placements = Vec::new();
        let mut stand_height_raise = 0.0_f64;

        for placement in generator.generate(scenario.layers) {
            let distance = (placement.center(&scenario.box_spec) - base).norm();
            let reachability = policy.classify(distance);
            stand_height_raise = stand_height_raise.max(policy.raise_for(reachability));
            placements.push(ClassifiedPlacement {
                placement,
                distance,
                reachability,
            });
        }

        Ok(AnalysisResult {
            scenario: *scenario,
            policy,
            placements,
            slots_per_layer: generator.grid().slots_per_layer(),
            stand_height_raise,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Reachability;
    use crate::robot::{RobotClass, SEVENTH_AXIS_RAISE_MM};
    use nalgebra::Point2;

    fn reference_scenario() -> Scenario {
        Scenario::new(
            BoxSpec::new(400.0, 300.0, 200.0).unwrap(),
            PalletSpec::new(1200.0, 1000.0, Point2::new(0.0, 0.0)).unwrap(),
            2,
            RobotProfile::new(RobotClass::Cs612, 500.0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_scenario_rejects_zero_layers() {
        let scenario = reference_scenario();
        assert!(Scenario::new(scenario.box_spec, scenario.pallet, 0, scenario.robot).is_err());
    }

    #[test]
    fn test_reference_scenario_first_box() {
        let result = Analyzer::default_config()
            .analyze(&reference_scenario())
            .unwrap();

        assert_eq!(result.slots_per_layer, 9);
        assert_eq!(result.placements.len(), 18);

        let first = &result.placements[0];
        assert_eq!(first.id().to_string(), "L01B01");
        let center = first.placement.center(&result.scenario.box_spec);
        assert_eq!(center, Point3::new(200.0, 150.0, 160.0));

        // sqrt(200^2 + 150^2 + 340^2) against the (1000, 1200) pair.
        let expected = (200.0_f64.powi(2) + 150.0_f64.powi(2) + 340.0_f64.powi(2)).sqrt();
        assert!((first.distance - expected).abs() < 1e-9);
        assert_eq!(first.reachability, Reachability::Easy);
    }

    #[test]
    fn test_raise_triggered_by_far_corner() {
        // The far corner of layer 2 is well past CS612's 1200 mm max.
        let result = Analyzer::default_config()
            .analyze(&reference_scenario())
            .unwrap();
        assert!(result.count(Reachability::Unreachable) > 0);
        assert_eq!(result.stand_height_raise, SEVENTH_AXIS_RAISE_MM);
        assert_eq!(result.effective_robot_height(), 500.0 + SEVENTH_AXIS_RAISE_MM);
    }

    #[test]
    fn test_raise_does_not_feed_back_into_classification() {
        let scenario = reference_scenario();
        let result = Analyzer::default_config().analyze(&scenario).unwrap();

        // Distances must match a fresh computation against the
        // original base height, not the raised one.
        let base = Point3::new(0.0, 0.0, scenario.robot.base_height);
        for placement in &result.placements {
            let expected = (placement.placement.center(&scenario.box_spec) - base).norm();
            assert!((placement.distance - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_single_tier_has_no_raise() {
        let config = Config::new().with_variant(PolicyVariant::SingleTier);
        let result = Analyzer::new(config).analyze(&reference_scenario()).unwrap();
        assert_eq!(result.stand_height_raise, 0.0);
        for placement in &result.placements {
            assert!(matches!(
                placement.reachability,
                Reachability::Reachable | Reachability::Unreachable
            ));
        }
    }

    #[test]
    fn test_degenerate_layout_is_empty_not_error() {
        let scenario = Scenario::new(
            BoxSpec::new(1500.0, 300.0, 200.0).unwrap(),
            PalletSpec::new(1200.0, 1000.0, Point2::origin()).unwrap(),
            3,
            RobotProfile::new(RobotClass::Cs625, 500.0).unwrap(),
        )
        .unwrap();

        let result = Analyzer::default_config().analyze(&scenario).unwrap();
        assert!(result.placements.is_empty());
        assert_eq!(result.slots_per_layer, 0);
        assert_eq!(result.summary().total_boxes, 0);
        assert_eq!(result.fully_reachable_layers(), 0);
    }
}
