//! Deterministic enumeration of box placements on the pallet grid.
//!
//! Layers are filled in row-major order: the x offset advances by one
//! box width per slot and wraps to the next row when the running offset
//! would exceed the pallet width. Re-running with identical inputs
//! yields an identical ordered placement list.

use crate::geometry::{BoxSpec, PalletSpec};
use crate::placement::{Placement, PlacementId};
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grid dimensions of one layer, computed once up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutGrid {
    /// Boxes per row: `floor(pallet_width / box_width)`.
    pub columns: u32,
    /// Rows per layer: `floor(pallet_length / box_length)`.
    pub rows: u32,
}

impl LayoutGrid {
    /// Computes the grid for the given pallet and box footprints.
    ///
    /// A box larger than the pallet in either axis yields zero columns
    /// or rows; that is a degenerate layout, not an error.
    pub fn compute(pallet: &PalletSpec, box_spec: &BoxSpec) -> Self {
        Self {
            columns: (pallet.width / box_spec.width).floor() as u32,
            rows: (pallet.length / box_spec.length).floor() as u32,
        }
    }

    /// Number of box slots per layer.
    pub fn slots_per_layer(&self) -> u32 {
        self.columns * self.rows
    }
}

/// Enumerates box placements for a pallet/box pairing.
#[derive(Debug, Clone)]
pub struct LayoutGenerator {
    pallet: PalletSpec,
    box_spec: BoxSpec,
    grid: LayoutGrid,
}

impl LayoutGenerator {
    /// Creates a generator; the grid is computed once here.
    pub fn new(pallet: PalletSpec, box_spec: BoxSpec) -> Self {
        let grid = LayoutGrid::compute(&pallet, &box_spec);
        Self {
            pallet,
            box_spec,
            grid,
        }
    }

    /// The per-layer grid.
    pub fn grid(&self) -> LayoutGrid {
        self.grid
    }

    /// Generates every placement for `layers` stacked layers, in layer
    /// order then row-major slot order.
    ///
    /// Placements whose footprint would overhang the pallet are
    /// excluded; with the grid computed from floored divisions this
    /// guard only fires on non-integer division remainders.
    pub fn generate(&self, layers: u32) -> Vec<Placement> {
        let slots = self.grid.slots_per_layer();
        if slots == 0 {
            log::warn!(
                "box footprint {}x{} does not fit pallet {}x{}, layout is empty",
                self.box_spec.width,
                self.box_spec.length,
                self.pallet.width,
                self.pallet.length
            );
            return Vec::new();
        }

        let mut placements = Vec::with_capacity(layers as usize * slots as usize);
        for layer in 1..=layers {
            let z = crate::geometry::PALLET_HEIGHT_MM + self.box_spec.height * (layer - 1) as f64;
            for slot in 1..=slots {
                let col = (slot - 1) % self.grid.columns;
                let row = (slot - 1) / self.grid.columns;
                let x_rel = col as f64 * self.box_spec.width;
                let y_rel = row as f64 * self.box_spec.length;

                // Footprint guard against division remainders.
                if x_rel + self.box_spec.width > self.pallet.width
                    || y_rel + self.box_spec.length > self.pallet.length
                {
                    continue;
                }

                placements.push(Placement::new(
                    PlacementId::new(layer, slot),
                    Point3::new(
                        self.pallet.master.x + x_rel,
                        self.pallet.master.y + y_rel,
                        z,
                    ),
                ));
            }
        }
        placements
    }
}
