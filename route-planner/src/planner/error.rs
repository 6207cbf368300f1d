//! Route query error types.

use super::Metric;

/// Errors answering a route query.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// The name is not a known location
    #[error("unknown location: {0}")]
    NotFound(String),

    /// Source and destination are the same location
    #[error("source and destination are both {0}")]
    SameEndpoints(String),

    /// The destination can't be reached under the chosen metric
    #[error("no {metric} route from {from} to {to}")]
    NoRouteFound {
        from: String,
        to: String,
        metric: Metric,
    },

    /// A segment cost is negative, infinite or NaN
    #[error("invalid cost {value} on segment {from}-{to}: must be finite and non-negative")]
    InvalidWeight { from: String, to: String, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RouteError::NotFound("Z".into());
        assert_eq!(err.to_string(), "unknown location: Z");

        let err = RouteError::SameEndpoints("A".into());
        assert_eq!(err.to_string(), "source and destination are both A");

        let err = RouteError::NoRouteFound {
            from: "A".into(),
            to: "C".into(),
            metric: Metric::Time,
        };
        assert_eq!(err.to_string(), "no bus time route from A to C");

        let err = RouteError::InvalidWeight {
            from: "A".into(),
            to: "B".into(),
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid cost -1 on segment A-B: must be finite and non-negative"
        );
    }
}
