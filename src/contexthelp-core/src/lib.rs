//! Core types and traits for the contexthelp suite.
//!
//! This crate provides the fundamental building blocks shared by the help
//! registry and the bubble peer:
//!
//! - [`id`]: monotonic help-identifier generation
//! - [`target`]: the capability trait linking UI elements to help entries
//! - [`placement`]: the bubble placement enum and its wire names
//! - [`geometry`]: cell-grid primitives used for bubble positioning
//! - [`error`]: error types for the core library
//!
//! # Examples
//!
//! ```
//! use contexthelp_core::id::HelpIdGenerator;
//! use contexthelp_core::placement::Placement;
//!
//! let ids = HelpIdGenerator::new();
//! assert_eq!(ids.next_id(), "help_0");
//! assert_eq!(ids.next_id(), "help_1");
//!
//! assert_eq!(Placement::Above.as_str(), "ABOVE");
//! ```

pub mod error;
pub mod geometry;
pub mod id;
pub mod placement;
pub mod target;

// Re-export commonly used types at the crate root for convenience
pub use error::PlacementParseError;
pub use geometry::{Rect, Size};
pub use id::HelpIdGenerator;
pub use placement::Placement;
pub use target::{FieldHandle, HelpTarget};
