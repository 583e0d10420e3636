//! Box and pallet geometry.
//!
//! All dimensions are millimeters, stored as `f64`. Specs validate on
//! construction so the rest of the crate can assume strictly positive,
//! finite lengths.

use crate::error::{Error, Result};
use nalgebra::{Point2, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed pallet deck height in millimeters.
pub const PALLET_HEIGHT_MM: f64 = 60.0;

fn check_dimension(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidDimension { name, value })
    }
}

/// Dimensions of a single box to be palletized.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxSpec {
    /// Extent along the world X axis.
    pub width: f64,
    /// Extent along the world Y axis.
    pub length: f64,
    /// Extent along the world Z axis.
    pub height: f64,
}

impl BoxSpec {
    /// Creates a box spec, validating that all dimensions are positive.
    pub fn new(width: f64, length: f64, height: f64) -> Result<Self> {
        Ok(Self {
            width: check_dimension("box width", width)?,
            length: check_dimension("box length", length)?,
            height: check_dimension("box height", height)?,
        })
    }

    /// Validates the dimensions (useful after deserialization).
    pub fn validate(&self) -> Result<()> {
        check_dimension("box width", self.width)?;
        check_dimension("box length", self.length)?;
        check_dimension("box height", self.height)?;
        Ok(())
    }

    /// Half of each extent, the offset from a corner to the box center.
    pub fn half_extents(&self) -> Vector3<f64> {
        Vector3::new(self.width / 2.0, self.length / 2.0, self.height / 2.0)
    }

    /// Box volume in cubic millimeters.
    pub fn volume(&self) -> f64 {
        self.width * self.length * self.height
    }
}

/// Dimensions and world placement of the pallet.
///
/// The deck height is fixed at [`PALLET_HEIGHT_MM`]; the master point is
/// the pallet's minimum (x, y) corner in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletSpec {
    /// Extent along the world X axis.
    pub width: f64,
    /// Extent along the world Y axis.
    pub length: f64,
    /// World (x, y) of the pallet's origin corner.
    pub master: Point2<f64>,
}

impl PalletSpec {
    /// Creates a pallet spec, validating that the footprint is positive.
    ///
    /// The master point may be anywhere in the plane, including negative
    /// coordinates; only the footprint dimensions are constrained.
    pub fn new(width: f64, length: f64, master: Point2<f64>) -> Result<Self> {
        Ok(Self {
            width: check_dimension("pallet width", width)?,
            length: check_dimension("pallet length", length)?,
            master,
        })
    }

    /// Validates the footprint dimensions.
    pub fn validate(&self) -> Result<()> {
        check_dimension("pallet width", self.width)?;
        check_dimension("pallet length", self.length)?;
        Ok(())
    }

    /// The fixed deck height.
    pub fn height(&self) -> f64 {
        PALLET_HEIGHT_MM
    }
}
