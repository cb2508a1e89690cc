//! Error types for contexthelp core operations.

use thiserror::Error;

/// Error type for parsing wire placement names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementParseError {
    /// Input string was empty.
    #[error("empty input")]
    EmptyInput,

    /// Unknown placement name.
    #[error("unknown placement name: {0} (expected RIGHT, LEFT, ABOVE, or BELOW)")]
    UnknownPlacement(String),
}
