//! Reachability categories and classification policies.
//!
//! Two policy variants exist and are expressed as one tagged
//! [`ReachPolicy`] type so the thresholds live in a single code path:
//!
//! - **Two-tier**: an (easy reach, max reach) pair yielding
//!   `easy` / `difficult` / `unreachable`, with a 7th-axis stand raise
//!   recommended whenever any box is not in easy reach.
//! - **Single-tier**: one radius yielding `reachable` / `unreachable`,
//!   with no side effect on the robot stand.
//!
//! All thresholds are inclusive: a distance exactly equal to a radius
//! classifies into the nearer category.

use crate::robot::{RobotClass, SEVENTH_AXIS_RAISE_MM};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reachability category for a single box.
///
/// The two-tier policy assigns `Easy`, `Difficult` or `Unreachable`;
/// the single-tier policy assigns `Reachable` or `Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Reachability {
    /// Within easy reach (two-tier).
    Easy,
    /// Reachable only with effort, between easy and max reach (two-tier).
    Difficult,
    /// Within reach (single-tier).
    Reachable,
    /// Beyond the robot's reach envelope.
    Unreachable,
}

impl Reachability {
    /// True for every category except `Unreachable`.
    ///
    /// Drives the box-level reachable/not-reachable tallies: a
    /// `Difficult` box still counts as reachable.
    pub fn is_within_reach(&self) -> bool {
        !matches!(self, Self::Unreachable)
    }

    /// True for `Easy` and `Reachable`.
    ///
    /// A layer is fully reachable only when every placement satisfies
    /// this predicate.
    pub fn is_easy_reach(&self) -> bool {
        matches!(self, Self::Easy | Self::Reachable)
    }

    /// True for `Difficult` and `Unreachable`, the categories that
    /// trigger a 7th-axis recommendation under the two-tier policy.
    pub fn needs_assist(&self) -> bool {
        matches!(self, Self::Difficult | Self::Unreachable)
    }

    /// Lowercase label as used in reports and scene exports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Difficult => "difficult",
            Self::Reachable => "reachable",
            Self::Unreachable => "unreachable",
        }
    }
}

impl std::fmt::Display for Reachability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Selects which policy the analyzer builds from a robot class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PolicyVariant {
    /// Easy/difficult/unreachable with stand-height feedback (canonical).
    #[default]
    TwoTier,
    /// Reachable/unreachable, no stand-height feedback.
    SingleTier,
}

/// Distance thresholds for classifying a box, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReachPolicy {
    /// (easy reach, max reach) pair.
    TwoTier {
        /// Everything at or under this distance is `Easy`.
        easy: f64,
        /// Everything at or under this distance (but past `easy`) is
        /// `Difficult`; beyond it, `Unreachable`.
        max: f64,
    },
    /// Single reach radius.
    SingleTier {
        /// Everything at or under this distance is `Reachable`.
        radius: f64,
    },
}

impl ReachPolicy {
    /// Two-tier policy from a robot class's reach table.
    pub fn two_tier(class: RobotClass) -> Self {
        let (easy, max) = class.two_tier_reach();
        Self::TwoTier { easy, max }
    }

    /// Single-tier policy from a robot class's reach radius.
    pub fn single_tier(class: RobotClass) -> Self {
        Self::SingleTier {
            radius: class.single_reach(),
        }
    }

    /// Builds the policy selected by `variant` for the given class.
    pub fn for_variant(variant: PolicyVariant, class: RobotClass) -> Self {
        match variant {
            PolicyVariant::TwoTier => Self::two_tier(class),
            PolicyVariant::SingleTier => Self::single_tier(class),
        }
    }

    /// Classifies a robot-to-box-center distance.
    pub fn classify(&self, distance: f64) -> Reachability {
        match *self {
            Self::TwoTier { easy, max } => {
                if distance <= easy {
                    Reachability::Easy
                } else if distance <= max {
                    Reachability::Difficult
                } else {
                    Reachability::Unreachable
                }
            }
            Self::SingleTier { radius } => {
                if distance <= radius {
                    Reachability::Reachable
                } else {
                    Reachability::Unreachable
                }
            }
        }
    }

    /// Stand-height raise a single classification calls for.
    ///
    /// Only the two-tier policy ever recommends a raise; the batch value
    /// is the maximum over all placements.
    pub fn raise_for(&self, reachability: Reachability) -> f64 {
        match self {
            Self::TwoTier { .. } if reachability.needs_assist() => SEVENTH_AXIS_RAISE_MM,
            _ => 0.0,
        }
    }

    /// The reach radii, outermost last. Used for the renderer's
    /// wireframe spheres.
    pub fn radii(&self) -> Vec<f64> {
        match *self {
            Self::TwoTier { easy, max } => vec![easy, max],
            Self::SingleTier { radius } => vec![radius],
        }
    }

    /// The outermost reach radius.
    pub fn max_radius(&self) -> f64 {
        match *self {
            Self::TwoTier { max, .. } => max,
            Self::SingleTier { radius } => radius,
        }
    }
}
