//! Turns user interaction into update batches for the registry.

use tracing::debug;

use contexthelp_core::geometry::{Rect, Size};
use contexthelp_core::placement::Placement;
use contexthelp_protocol::{HelpSnapshot, HelpUpdate};

use crate::placement::resolve_placement;

/// Peer-side state machine for the help bubble.
///
/// The driver holds the last snapshot received from the registry and
/// answers two questions for the rendering layer: is there a bubble to
/// draw (and where), and which [`HelpUpdate`] batch should go back to
/// the registry for a given interaction. It never draws anything itself.
#[derive(Debug, Default)]
pub struct HelpBubbleDriver {
    state: HelpSnapshot,
}

impl HelpBubbleDriver {
    /// Creates a driver with no help state yet (bubble hidden).
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: HelpSnapshot::empty(),
        }
    }

    /// Replaces the held state with a snapshot from the registry.
    pub fn apply_snapshot(&mut self, snapshot: HelpSnapshot) {
        debug!(
            selected = %snapshot.selected_component_id,
            hidden = snapshot.hidden,
            "snapshot received"
        );
        self.state = snapshot;
    }

    /// Returns the last snapshot received.
    #[must_use]
    pub fn state(&self) -> &HelpSnapshot {
        &self.state
    }

    /// Returns whether a bubble should currently be drawn.
    ///
    /// Requires help content: a selection the registry did not resolve to
    /// a registered entry never produces a bubble.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.state.hidden && self.state.has_help()
    }

    /// Returns the help content to draw, when the bubble is open.
    #[must_use]
    pub fn help_text(&self) -> Option<&str> {
        if self.is_open() {
            self.state.help_text.as_deref()
        } else {
            None
        }
    }

    /// Resolves the side of the anchor field the bubble goes on,
    /// honoring the snapshot's placement preference.
    #[must_use]
    pub fn placement(&self, anchor: Rect, size: Size, viewport: Rect) -> Placement {
        resolve_placement(self.state.placement, anchor, size, viewport)
    }

    /// The trigger key (F1 by default in hosts) was pressed.
    ///
    /// Opens the bubble for the focused field, or closes an already open
    /// bubble. Returns `None` when there is nothing to do (no bubble open
    /// and no field focused).
    #[must_use]
    pub fn trigger_pressed(&self, focused: Option<&str>) -> Option<HelpUpdate> {
        if self.is_open() {
            debug!("trigger pressed, closing bubble");
            return Some(HelpUpdate::visibility(true));
        }
        let id = focused?;
        debug!(id, "trigger pressed, requesting help");
        Some(HelpUpdate::select(id).with_hidden(false))
    }

    /// The user dismissed the bubble (clicked it away, pressed Escape).
    ///
    /// The selection is left alone; only visibility changes. Returns
    /// `None` when no bubble is open.
    #[must_use]
    pub fn dismissed(&self) -> Option<HelpUpdate> {
        if !self.is_open() {
            return None;
        }
        debug!("bubble dismissed");
        Some(HelpUpdate::visibility(true))
    }

    /// Input focus moved to another field (or away from all fields).
    ///
    /// Only relevant in follow-focus mode: the bubble moves to the newly
    /// focused field, or hides when focus leaves all fields. Outside
    /// follow-focus mode this returns `None`.
    #[must_use]
    pub fn focus_moved(&self, focused: Option<&str>) -> Option<HelpUpdate> {
        if !self.state.follow_focus {
            return None;
        }
        match focused {
            Some(id) => {
                debug!(id, "focus moved, following");
                Some(HelpUpdate::select(id).with_hidden(false))
            }
            None => {
                debug!("focus left all fields, hiding bubble");
                Some(HelpUpdate::visibility(true))
            }
        }
    }
}
