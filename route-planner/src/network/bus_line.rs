//! Bus line identifier type.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid bus line identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bus line id: {reason}")]
pub struct InvalidBusLineId {
    reason: &'static str,
}

/// Identifier of a bus line, as it appears at the start of a bus-route record.
///
/// Bus line ids are non-empty and contain no whitespace, so they always
/// survive a round trip through the space-separated record format.
///
/// # Examples
///
/// ```
/// use route_planner::network::BusLineId;
///
/// let x1 = BusLineId::parse("X1").unwrap();
/// assert_eq!(x1.as_str(), "X1");
///
/// assert!(BusLineId::parse("").is_err());
/// assert!(BusLineId::parse("X 1").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BusLineId(String);

impl BusLineId {
    /// Parse a bus line id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidBusLineId> {
        if s.is_empty() {
            return Err(InvalidBusLineId {
                reason: "must not be empty",
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidBusLineId {
                reason: "must not contain whitespace",
            });
        }

        Ok(BusLineId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BusLineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BusLineId({})", self.0)
    }
}

impl fmt::Display for BusLineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Za-z0-9-]{1,8}") {
            let id = BusLineId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Anything containing a space is rejected
        #[test]
        fn spaces_rejected(a in "[A-Z0-9]{0,4}", b in "[A-Z0-9]{0,4}") {
            let s = format!("{a} {b}");
            prop_assert!(BusLineId::parse(&s).is_err());
        }
    }
}
