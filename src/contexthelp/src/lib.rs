//! Contextual help registry.
//!
//! [`HelpRegistry`] lets a host application register help text (and a
//! preferred bubble placement) for arbitrary interface fields, then keeps
//! a rendering peer in sync: the registry pushes [`HelpSnapshot`]s, the
//! peer reports user interaction back as [`HelpUpdate`] batches.
//!
//! # Quick start
//!
//! ```
//! use contexthelp::HelpRegistry;
//! use contexthelp_core::{FieldHandle, Placement};
//!
//! let mut registry = HelpRegistry::new();
//! let mut username = FieldHandle::new();
//!
//! registry.add_help_with_placement(
//!     &mut username,
//!     "<b>Your login name.</b>",
//!     Placement::Right,
//! );
//! registry.show_help_for(&username);
//!
//! let snapshot = registry.take_snapshot().expect("state changed");
//! assert_eq!(snapshot.help_text.as_deref(), Some("<b>Your login name.</b>"));
//! ```
//!
//! [`HelpSnapshot`]: contexthelp_protocol::HelpSnapshot
//! [`HelpUpdate`]: contexthelp_protocol::HelpUpdate

pub mod registry;

// Re-exports
pub use registry::HelpRegistry;
