//! Inbound update batch, peer → registry.

use serde::{Deserialize, Serialize};

/// A batch of field overwrites reported by the rendering peer.
///
/// Only the keys that are present overwrite registry state; the registry
/// applies them verbatim without validating that the identifier is
/// registered (that happens lazily when the next snapshot is built).
/// Unknown keys in the serialized form are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpUpdate {
    /// New selection, empty string to clear it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_component_id: Option<String>,
    /// New visibility state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

impl HelpUpdate {
    /// A batch selecting the given identifier.
    #[must_use]
    pub fn select(id: impl Into<String>) -> Self {
        Self {
            selected_component_id: Some(id.into()),
            hidden: None,
        }
    }

    /// A batch only changing visibility.
    #[must_use]
    pub fn visibility(hidden: bool) -> Self {
        Self {
            selected_component_id: None,
            hidden: Some(hidden),
        }
    }

    /// Sets the visibility field on this batch.
    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    /// Returns whether the batch carries no updates at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_component_id.is_none() && self.hidden.is_none()
    }
}
