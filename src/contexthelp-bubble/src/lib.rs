//! Peer-side helpers for the contexthelp suite.
//!
//! The rendering peer that actually draws the help bubble is out of
//! scope, but its contract is not: this crate resolves where the bubble
//! goes (honoring the registered placement, falling back to
//! RIGHT → BELOW → ABOVE) and turns user interaction — trigger key,
//! dismissal, focus movement — into the [`HelpUpdate`] batches the
//! registry expects.
//!
//! [`HelpUpdate`]: contexthelp_protocol::HelpUpdate

pub mod driver;
pub mod placement;

// Re-exports
pub use driver::HelpBubbleDriver;
pub use placement::{bubble_area, resolve_placement};
