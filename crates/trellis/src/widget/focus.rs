//! Keyboard focus.
//!
//! At most one node holds keyboard focus per [`InteractionContext`]. Focus
//! moves through [`WidgetTree::set_focus`], which gives the current holder a
//! chance to refuse, and is force-cleared when the holder stops being
//! enabled or is destroyed.
//!
//! # Focus Change Notifications
//!
//! When focus moves:
//! 1. The current holder's `lost_focus` hook is asked to yield
//! 2. If it yields, the focus reference is updated
//! 3. The new holder's `got_focus` hook runs
//!
//! When focus is force-cleared the reference is reset first and `lost_focus`
//! runs afterwards as a plain notification.
//!
//! A widget cannot receive a hook while one of its own hooks is running. If
//! the new holder is busy, its `got_focus` (or a forced `lost_focus`) runs as
//! soon as that hook returns. If the current holder is busy, the whole
//! transfer waits until its hook returns, so the holder is still asked and
//! can still refuse.

use trellis_core::FocusError;

use super::interaction::{Deferred, InteractionContext};
use super::tree::{NodeId, WidgetTree};

impl WidgetTree {
    /// Gives keyboard focus to `id`.
    ///
    /// Succeeds immediately if `id` already has focus. Fails with
    /// [`FocusError::Disabled`] if `id` or any ancestor is disabled, without
    /// consulting the current holder, and with [`FocusError::Refused`] if the
    /// current holder's `lost_focus` returns `false`. On failure the focus
    /// stays where it was.
    ///
    /// If the current holder is in the middle of one of its own hooks, the
    /// transfer is deferred until that hook returns and this returns `Ok`.
    /// The holder is asked at that point; a refusal then leaves focus where
    /// it was and is only logged.
    pub fn set_focus(&mut self, cx: &mut InteractionContext, id: NodeId) -> Result<(), FocusError> {
        if !self.is_alive(id) {
            return Err(FocusError::InvalidNode);
        }
        if cx.focus == Some(id) {
            return Ok(());
        }
        if !self.is_enabled_tree(id) {
            tracing::debug!(target: "trellis::focus", ?id, reason = %FocusError::Disabled, "set_focus failed");
            return Err(FocusError::Disabled);
        }

        if let Some(previous) = cx.focus.filter(|&f| self.is_alive(f)) {
            if self.is_busy(previous) {
                tracing::debug!(target: "trellis::focus", ?id, ?previous, "holder busy, focus change deferred");
                cx.defer(previous, Deferred::FocusRequest(id));
                return Ok(());
            }
            if !self.node_lost_focus(cx, previous) {
                tracing::debug!(target: "trellis::focus", ?id, ?previous, reason = %FocusError::Refused, "set_focus failed");
                return Err(FocusError::Refused);
            }
            // The holder's hook may have destroyed the requested node.
            if !self.is_alive(id) {
                return Err(FocusError::InvalidNode);
            }
        }

        tracing::debug!(target: "trellis::focus", ?id, previous = ?cx.focus, "focus moved");
        cx.focus = Some(id);
        self.node_got_focus(cx, id);
        Ok(())
    }

    /// Force-clears keyboard focus.
    ///
    /// The focus reference is reset first, then the former holder's
    /// `lost_focus` hook runs with its return value ignored.
    pub fn clear_focus(&mut self, cx: &mut InteractionContext) {
        let Some(previous) = cx.focus.take() else {
            return;
        };
        tracing::debug!(target: "trellis::focus", ?previous, "focus cleared");
        if self.is_alive(previous) {
            self.node_lost_focus(cx, previous);
        }
    }

    /// Returns true if `id` holds keyboard focus.
    pub fn has_focus(&self, cx: &InteractionContext, id: NodeId) -> bool {
        cx.focus == Some(id) && self.is_alive(id)
    }

    /// Asks `id` to yield focus. A busy node is notified later and counts as
    /// having yielded.
    pub(crate) fn node_lost_focus(&mut self, cx: &mut InteractionContext, id: NodeId) -> bool {
        if self.is_busy(id) {
            cx.defer(id, Deferred::LostFocus);
            return true;
        }
        self.with_widget(cx, id, |w, ecx| w.lost_focus(ecx))
    }

    pub(crate) fn node_got_focus(&mut self, cx: &mut InteractionContext, id: NodeId) {
        if self.is_busy(id) {
            cx.defer(id, Deferred::GotFocus);
            return;
        }
        self.with_widget(cx, id, |w, ecx| w.got_focus(ecx))
    }
}
