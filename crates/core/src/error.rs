//! Error types for the reachability analysis.

use thiserror::Error;

/// Errors that can occur when constructing or validating analysis inputs.
#[derive(Debug, Error)]
pub enum Error {
    /// A dimension was zero, negative, or not finite.
    #[error("invalid dimension `{name}`: {value} (must be a positive, finite length in mm)")]
    InvalidDimension {
        /// Name of the offending dimension (e.g. "box width").
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A robot class code outside the known 1..=3 range.
    #[error("invalid robot class code: {0} (expected 1, 2 or 3)")]
    InvalidRobotClass(u8),

    /// A scenario with zero layers.
    #[error("layer count must be at least 1")]
    InvalidLayerCount,
}

/// Convenience result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
