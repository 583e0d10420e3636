//! Box placement records.
//!
//! A [`Placement`] is produced once per enumeration pass by the layout
//! generator and never mutated. Classification wraps it in a
//! [`ClassifiedPlacement`] rather than writing back into it.

use crate::classify::Reachability;
use crate::geometry::BoxSpec;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a box slot: 1-based layer and slot indices.
///
/// Displays as `L{layer:02}B{slot:02}`, e.g. `L01B09`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementId {
    /// Layer index, starting at 1 for the bottom layer.
    pub layer: u32,
    /// Slot index within the layer, starting at 1, row-major.
    pub slot: u32,
}

impl PlacementId {
    /// Creates an identifier from 1-based layer and slot indices.
    pub fn new(layer: u32, slot: u32) -> Self {
        Self { layer, slot }
    }
}

impl std::fmt::Display for PlacementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{:02}B{:02}", self.layer, self.slot)
    }
}

/// A single box position on the pallet stack.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Unique identifier within the result set.
    pub id: PlacementId,
    /// World position of the box's minimum corner.
    pub position: Point3<f64>,
}

impl Placement {
    /// Creates a placement at the given corner position.
    pub fn new(id: PlacementId, position: Point3<f64>) -> Self {
        Self { id, position }
    }

    /// Layer this placement belongs to (1-based).
    pub fn layer(&self) -> u32 {
        self.id.layer
    }

    /// World position of the box center for the given box dimensions.
    pub fn center(&self, box_spec: &BoxSpec) -> Point3<f64> {
        self.position + box_spec.half_extents()
    }
}

/// A placement together with its reachability verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassifiedPlacement {
    /// The underlying placement geometry.
    pub placement: Placement,
    /// Euclidean distance from the robot base to the box center, in mm.
    pub distance: f64,
    /// Assigned reachability category.
    pub reachability: Reachability,
}

impl ClassifiedPlacement {
    /// Identifier shorthand.
    pub fn id(&self) -> PlacementId {
        self.placement.id
    }

    /// Layer shorthand (1-based).
    pub fn layer(&self) -> u32 {
        self.placement.layer()
    }
}
