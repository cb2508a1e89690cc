//! Placement of the help bubble relative to its target field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlacementParseError;

/// Preferred side of the target field for the help bubble.
///
/// Wire names are the uppercase forms `RIGHT`, `LEFT`, `ABOVE`, `BELOW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Placement {
    /// To the right of the target field.
    Right,
    /// To the left of the target field.
    Left,
    /// Above the target field.
    Above,
    /// Below the target field.
    Below,
}

impl Placement {
    /// Fallback order tried by the peer when no placement is registered
    /// for the selected field. Fixed and non-configurable.
    pub const FALLBACK_ORDER: [Placement; 3] =
        [Placement::Right, Placement::Below, Placement::Above];

    /// Returns the wire name of this placement.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Placement::Right => "RIGHT",
            Placement::Left => "LEFT",
            Placement::Above => "ABOVE",
            Placement::Below => "BELOW",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = PlacementParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(PlacementParseError::EmptyInput),
            "RIGHT" => Ok(Placement::Right),
            "LEFT" => Ok(Placement::Left),
            "ABOVE" => Ok(Placement::Above),
            "BELOW" => Ok(Placement::Below),
            other => Err(PlacementParseError::UnknownPlacement(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wire_names_round_trip() {
        for placement in [
            Placement::Right,
            Placement::Left,
            Placement::Above,
            Placement::Below,
        ] {
            assert_eq!(placement.as_str().parse::<Placement>(), Ok(placement));
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "".parse::<Placement>(),
            Err(PlacementParseError::EmptyInput)
        );
        assert_eq!(
            "right".parse::<Placement>(),
            Err(PlacementParseError::UnknownPlacement("right".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Placement::Above).unwrap();
        assert_eq!(json, "\"ABOVE\"");
        let parsed: Placement = serde_json::from_str("\"BELOW\"").unwrap();
        assert_eq!(parsed, Placement::Below);
    }

    #[test]
    fn test_fallback_order() {
        assert_eq!(
            Placement::FALLBACK_ORDER,
            [Placement::Right, Placement::Below, Placement::Above]
        );
    }
}
