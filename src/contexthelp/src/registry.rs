//! The help registry state machine and its synchronization contract.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use contexthelp_core::id::HelpIdGenerator;
use contexthelp_core::placement::Placement;
use contexthelp_core::target::HelpTarget;
use contexthelp_protocol::{HelpSnapshot, HelpUpdate};

/// Owns all contextual-help state for one UI container.
///
/// The registry maps field identifiers to help text and placement
/// preferences, tracks which entry is currently selected, and coalesces
/// outbound syncs behind a dirty flag the host drains with
/// [`take_snapshot`](HelpRegistry::take_snapshot).
///
/// Invalid references degrade to silent no-ops rather than errors: an
/// unknown identifier means "no help to show". Help text and placement
/// live in separate maps, so a placement may exist for an identifier
/// that has no help text yet.
#[derive(Debug)]
pub struct HelpRegistry {
    help_html: HashMap<String, String>,
    placements: HashMap<String, Placement>,
    selected_id: String,
    hidden: bool,
    follow_focus: bool,
    ids: Arc<HelpIdGenerator>,
    needs_sync: bool,
}

impl HelpRegistry {
    /// Creates a registry with its own identifier generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(HelpIdGenerator::new()))
    }

    /// Creates a registry using a shared identifier generator.
    ///
    /// Hosts running several registries that must never collide on
    /// generated identifiers pass the same generator to each.
    #[must_use]
    pub fn with_id_generator(ids: Arc<HelpIdGenerator>) -> Self {
        Self {
            help_html: HashMap::new(),
            placements: HashMap::new(),
            selected_id: String::new(),
            hidden: true,
            follow_focus: false,
            ids,
            // The peer needs the initial state.
            needs_sync: true,
        }
    }

    /// Registers help text for a field.
    ///
    /// The text is HTML and may be formatted and styled as such. If the
    /// field has no identifier yet, a fresh one is assigned. Registering
    /// twice for the same field reuses its identifier and overwrites the
    /// help text.
    pub fn add_help<T: HelpTarget + ?Sized>(&mut self, target: &mut T, help_html: impl Into<String>) {
        let id = self.ensure_id(target);
        trace!(%id, "registered help text");
        self.help_html.insert(id, help_html.into());
        self.needs_sync = true;
    }

    /// Registers help text and a placement preference in one call.
    pub fn add_help_with_placement<T: HelpTarget + ?Sized>(
        &mut self,
        target: &mut T,
        help_html: impl Into<String>,
        placement: Placement,
    ) {
        self.add_help(target, help_html);
        self.set_placement(target, placement);
    }

    /// Records where the help bubble should be placed for this field.
    ///
    /// Without a registered placement the peer falls back to trying
    /// RIGHT, then BELOW, then ABOVE. Silent no-op when the field has no
    /// identifier yet; an absent identifier is never used as a key.
    pub fn set_placement<T: HelpTarget + ?Sized>(&mut self, target: &T, placement: Placement) {
        let Some(id) = target.help_id() else {
            return;
        };
        self.placements.insert(id.to_string(), placement);
        self.needs_sync = true;
    }

    /// Programmatically shows the help bubble for a field.
    ///
    /// Silent no-op unless the field has an identifier and registered
    /// help text.
    pub fn show_help_for<T: HelpTarget + ?Sized>(&mut self, target: &T) {
        let Some(id) = target.help_id() else {
            return;
        };
        if !self.help_html.contains_key(id) {
            return;
        }
        debug!(id, "showing help bubble");
        self.selected_id = id.to_string();
        self.hidden = false;
        self.needs_sync = true;
    }

    /// Enables or disables follow-focus mode.
    ///
    /// While enabled, the peer shows the bubble for the focused field and
    /// moves it as focus moves. Switching modes always clears the
    /// selection so a stale one cannot drive the new display logic;
    /// `hidden` is left as is.
    pub fn set_follow_focus(&mut self, enabled: bool) {
        debug!(enabled, "follow-focus mode changed");
        self.follow_focus = enabled;
        self.selected_id.clear();
        self.needs_sync = true;
    }

    /// Returns whether the bubble follows focus or is opened by the
    /// trigger key.
    #[must_use]
    pub fn is_follow_focus(&self) -> bool {
        self.follow_focus
    }

    /// Applies a batch of updates reported by the peer.
    ///
    /// Present fields overwrite state verbatim; the selection is not
    /// validated here (validation happens lazily when the next snapshot
    /// is built). The registry always schedules a sync afterwards so the
    /// echoed state flows back, confirming acceptance.
    pub fn apply_update(&mut self, update: HelpUpdate) {
        if let Some(selected) = update.selected_component_id {
            trace!(%selected, "peer changed selection");
            self.selected_id = selected;
        }
        if let Some(hidden) = update.hidden {
            trace!(hidden, "peer changed visibility");
            self.hidden = hidden;
        }
        self.needs_sync = true;
    }

    /// Builds the outbound snapshot for the current state.
    ///
    /// `help_text` is included only when the selection is non-empty and
    /// registered, and `placement` only additionally when one is
    /// registered for that identifier — the peer must never render help
    /// for an unselected or unregistered field. `hidden` does not gate
    /// inclusion.
    #[must_use]
    pub fn snapshot(&self) -> HelpSnapshot {
        let mut snapshot = HelpSnapshot {
            selected_component_id: self.selected_id.clone(),
            hidden: self.hidden,
            follow_focus: self.follow_focus,
            help_text: None,
            placement: None,
        };
        if !self.selected_id.is_empty() {
            if let Some(help) = self.help_html.get(&self.selected_id) {
                snapshot.help_text = Some(help.clone());
                snapshot.placement = self.placements.get(&self.selected_id).copied();
            }
        }
        snapshot
    }

    /// Drains the pending sync, if any.
    ///
    /// Returns `Some` once per burst of changes; the host forwards the
    /// snapshot to the peer as a fire-and-forget notification. Changes
    /// between drains coalesce into a single snapshot.
    pub fn take_snapshot(&mut self) -> Option<HelpSnapshot> {
        if !self.needs_sync {
            return None;
        }
        self.needs_sync = false;
        Some(self.snapshot())
    }

    /// Returns the identifier of the selected field, or empty.
    #[must_use]
    pub fn selected_component_id(&self) -> &str {
        &self.selected_id
    }

    /// Returns whether the bubble is hidden.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Returns the registered help text for an identifier.
    #[must_use]
    pub fn help_for(&self, id: &str) -> Option<&str> {
        self.help_html.get(id).map(String::as_str)
    }

    /// Returns the registered placement for an identifier.
    #[must_use]
    pub fn placement_for(&self, id: &str) -> Option<Placement> {
        self.placements.get(id).copied()
    }

    fn ensure_id<T: HelpTarget + ?Sized>(&self, target: &mut T) -> String {
        if let Some(id) = target.help_id() {
            return id.to_string();
        }
        let id = self.ids.next_id();
        target.assign_help_id(id.clone());
        id
    }
}

impl Default for HelpRegistry {
    fn default() -> Self {
        Self::new()
    }
}
