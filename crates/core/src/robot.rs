//! Robot classes and reach parameters.
//!
//! Three fixed robot classes are supported. Each carries a two-tier
//! (easy reach, max reach) pair and a single-tier reach radius, all in
//! millimeters. The robot base sits at world `(0, 0, base_height)`.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stand-height increment applied when a 7th axis is recommended.
pub const SEVENTH_AXIS_RAISE_MM: f64 = 700.0;

/// The three supported robot classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RobotClass {
    /// CS612, easy reach 1000 mm, max reach 1200 mm.
    Cs612,
    /// CS620, easy reach 1300 mm, max reach 1500 mm.
    Cs620,
    /// CS625, easy reach 1500 mm, max reach 1800 mm.
    Cs625,
}

impl RobotClass {
    /// Resolves a class from its numeric code (1, 2 or 3).
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Self::Cs612),
            2 => Ok(Self::Cs620),
            3 => Ok(Self::Cs625),
            other => Err(Error::InvalidRobotClass(other)),
        }
    }

    /// The numeric code for this class.
    pub fn code(&self) -> u8 {
        match self {
            Self::Cs612 => 1,
            Self::Cs620 => 2,
            Self::Cs625 => 3,
        }
    }

    /// Model name as printed in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cs612 => "CS612",
            Self::Cs620 => "CS620",
            Self::Cs625 => "CS625",
        }
    }

    /// (easy reach, max reach) thresholds for the two-tier policy.
    pub fn two_tier_reach(&self) -> (f64, f64) {
        match self {
            Self::Cs612 => (1000.0, 1200.0),
            Self::Cs620 => (1300.0, 1500.0),
            Self::Cs625 => (1500.0, 1800.0),
        }
    }

    /// Reach radius for the single-tier policy.
    pub fn single_reach(&self) -> f64 {
        match self {
            Self::Cs612 => 1200.0,
            Self::Cs620 => 1500.0,
            Self::Cs625 => 2000.0,
        }
    }
}

impl std::fmt::Display for RobotClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A robot class together with its base mounting height.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RobotProfile {
    /// The robot class.
    pub class: RobotClass,
    /// Height of the robot base above the world origin plane, in mm.
    pub base_height: f64,
}

impl RobotProfile {
    /// Creates a profile, validating the base height is positive.
    pub fn new(class: RobotClass, base_height: f64) -> Result<Self> {
        if !base_height.is_finite() || base_height <= 0.0 {
            return Err(Error::InvalidDimension {
                name: "robot height",
                value: base_height,
            });
        }
        Ok(Self { class, base_height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_from_code() {
        assert_eq!(RobotClass::from_code(1).unwrap(), RobotClass::Cs612);
        assert_eq!(RobotClass::from_code(2).unwrap(), RobotClass::Cs620);
        assert_eq!(RobotClass::from_code(3).unwrap(), RobotClass::Cs625);
        assert!(RobotClass::from_code(0).is_err());
        assert!(RobotClass::from_code(4).is_err());
    }

    #[test]
    fn test_code_round_trip() {
        for code in 1..=3u8 {
            assert_eq!(RobotClass::from_code(code).unwrap().code(), code);
        }
    }

    #[test]
    fn test_reach_tables() {
        assert_eq!(RobotClass::Cs612.two_tier_reach(), (1000.0, 1200.0));
        assert_eq!(RobotClass::Cs620.two_tier_reach(), (1300.0, 1500.0));
        assert_eq!(RobotClass::Cs625.two_tier_reach(), (1500.0, 1800.0));
        assert_eq!(RobotClass::Cs625.single_reach(), 2000.0);
    }

    #[test]
    fn test_profile_rejects_nonpositive_height() {
        assert!(RobotProfile::new(RobotClass::Cs612, 0.0).is_err());
        assert!(RobotProfile::new(RobotClass::Cs612, -500.0).is_err());
        assert!(RobotProfile::new(RobotClass::Cs612, 500.0).is_ok());
    }
}
