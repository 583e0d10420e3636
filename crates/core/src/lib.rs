//! # Pallet Reach Core
//!
//! Reachability analysis for palletized boxes under a fixed-base
//! industrial robot.
//!
//! Given box and pallet geometry plus a robot reach profile, the crate
//! enumerates every box position on the pallet stack, classifies each
//! box against the robot's reach envelope, and aggregates per-layer and
//! per-pallet statistics. Reach is approximated by radial distance
//! thresholds from the robot base; kinematics, collision detection and
//! path planning are out of scope.
//!
//! ## Core Components
//!
//! - **Geometry**: [`BoxSpec`], [`PalletSpec`] - validated millimeter dimensions
//! - **Robot**: [`RobotClass`], [`RobotProfile`] - the three supported classes and their reach tables
//! - **Layout**: [`LayoutGenerator`], [`LayoutGrid`] - deterministic row-major slot enumeration
//! - **Classification**: [`ReachPolicy`], [`Reachability`] - two-tier and single-tier threshold policies
//! - **Analysis**: [`Analyzer`], [`AnalysisResult`] - the eager end-to-end pass
//!
//! ## Policy Variants
//!
//! | Variant | Categories | Stand-height feedback |
//! |---------|------------|-----------------------|
//! | `TwoTier` (default) | easy / difficult / unreachable | 700 mm raise recommended when any box is not in easy reach |
//! | `SingleTier` | reachable / unreachable | none |
//!
//! ## Example
//!
//! ```rust
//! use nalgebra::Point2;
//! use pallet_reach_core::{
//!     Analyzer, BoxSpec, Config, PalletSpec, RobotClass, RobotProfile, Scenario,
//! };
//!
//! let scenario = Scenario::new(
//!     BoxSpec::new(400.0, 300.0, 200.0)?,
//!     PalletSpec::new(1200.0, 1000.0, Point2::new(0.0, 0.0))?,
//!     2,
//!     RobotProfile::new(RobotClass::Cs612, 500.0)?,
//! )?;
//!
//! let result = Analyzer::new(Config::new()).analyze(&scenario)?;
//! assert_eq!(result.placements.len(), 18);
//! # Ok::<(), pallet_reach_core::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod analyzer;
pub mod classify;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod placement;
pub mod result;
pub mod robot;

// Re-exports
pub use analyzer::{Analyzer, Config, Scenario};
pub use classify::{PolicyVariant, ReachPolicy, Reachability};
pub use error::{Error, Result};
pub use geometry::{BoxSpec, PalletSpec, PALLET_HEIGHT_MM};
pub use layout::{LayoutGenerator, LayoutGrid};
pub use placement::{ClassifiedPlacement, Placement, PlacementId};
pub use result::{AnalysisResult, AnalysisSummary, LayerSummary};
pub use robot::{RobotClass, RobotProfile, SEVENTH_AXIS_RAISE_MM};
