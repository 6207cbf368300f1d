//! Network error types.
//!
//! These errors are raised while building or querying the topology. They are
//! distinct from file/record errors, which live in the loaders.

use super::BusLineId;

/// Errors from building or looking up the transportation network.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// The name is not a known location
    #[error("unknown location: {0}")]
    NotFound(String),

    /// Location names must be non-empty
    #[error("location name must not be empty")]
    EmptyName,

    /// Road distance is negative, infinite or NaN
    #[error("invalid distance {value} on segment {from}-{to}: must be finite and non-negative")]
    InvalidDistance { from: String, to: String, value: f64 },

    /// A bus line lists fewer than two stops
    #[error("bus line {0} must list at least two stops")]
    TooFewStops(BusLineId),

    /// A bus line runs between two stops with no road segment joining them
    #[error("bus line {line} has no road segment between {from} and {to}")]
    NoRoadSegment {
        line: BusLineId,
        from: String,
        to: String,
    },
}
