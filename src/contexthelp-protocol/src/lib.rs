//! Sync protocol between a help registry and its rendering peer.
//!
//! Two messages make up the whole contract:
//!
//! - [`HelpSnapshot`]: registry → peer, the full help state emitted after
//!   every change.
//! - [`HelpUpdate`]: peer → registry, a batch of field overwrites
//!   reporting user interaction (trigger key, dismissal, focus movement).
//!
//! The transport carrying these messages is out of scope; both types are
//! plain serde values with camelCase wire names.

pub mod snapshot;
pub mod update;

// Re-exports
pub use snapshot::HelpSnapshot;
pub use update::HelpUpdate;
