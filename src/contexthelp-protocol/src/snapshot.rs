//! Outbound state snapshot, registry → peer.

use contexthelp_core::Placement;
use serde::{Deserialize, Serialize};

/// The full help state the registry pushes to its rendering peer.
///
/// `selected_component_id`, `hidden`, and `follow_focus` are always
/// present. `help_text` is present only when the selection is non-empty
/// and registered; `placement` only additionally when a placement is
/// registered for the selected identifier. `hidden` never gates
/// inclusion — the peer decides visibility, the registry decides content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpSnapshot {
    /// Identifier of the selected field, or empty when nothing is selected.
    pub selected_component_id: String,
    /// Whether the peer should keep the bubble hidden.
    pub hidden: bool,
    /// Whether bubble visibility tracks input focus.
    pub follow_focus: bool,
    /// Resolved help content for the selected field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    /// Registered placement preference for the selected field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
}

impl HelpSnapshot {
    /// The state before anything was registered or selected: no
    /// selection, bubble hidden, follow-focus off.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            selected_component_id: String::new(),
            hidden: true,
            follow_focus: false,
            help_text: None,
            placement: None,
        }
    }

    /// Returns whether this snapshot carries displayable help content.
    #[must_use]
    pub fn has_help(&self) -> bool {
        self.help_text.is_some()
    }
}

impl Default for HelpSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
