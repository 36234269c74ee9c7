//! Interaction state shared by every node of a tree.
//!
//! Keyboard focus and the drag session are not owned by any one node. They
//! live in an [`InteractionContext`] that the caller owns and passes into
//! every operation that can touch them, so independent trees (one per
//! window, or one per test) never interfere.

use super::drag_drop::DragSession;
use super::events::{DragArgs, Modifiers};
use super::tree::NodeId;

/// What happens to keyboard focus when the focus holder, or one of its
/// ancestors, is detached from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusRemovalPolicy {
    /// The detached node keeps focus. Keys keep reaching it while it stays
    /// alive, even though it is no longer under the root.
    #[default]
    Retain,
    /// Focus is cleared and the former holder is notified.
    Clear,
}

/// A notification held back because the widget it is meant for was running
/// one of its own hooks. Delivered once that hook returns.
#[derive(Debug, Clone)]
pub(crate) enum Deferred {
    GotFocus,
    LostFocus,
    /// A pointer or drag leave, in the node's local coordinates.
    Leave {
        x: f32,
        y: f32,
        args: Option<DragArgs>,
    },
    /// A request to move focus away from this holder to the given node.
    FocusRequest(NodeId),
}

/// Focus, drag session and pointer bookkeeping for one or more trees.
#[derive(Debug, Default)]
pub struct InteractionContext {
    pub(crate) focus: Option<NodeId>,
    pub(crate) drag: Option<DragSession>,
    focus_removal: FocusRemovalPolicy,
    /// Last pointer position seen by dispatch, in root-parent coordinates.
    pub(crate) pointer: (f32, f32),
    /// Last modifier mask seen by dispatch.
    pub(crate) modifiers: Modifiers,
    /// In arrival order.
    deferred: Vec<(NodeId, Deferred)>,
}

impl InteractionContext {
    /// Create a context with no focus and no drag session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the focus removal policy.
    pub fn with_focus_removal_policy(mut self, policy: FocusRemovalPolicy) -> Self {
        self.focus_removal = policy;
        self
    }

    pub fn focus_removal_policy(&self) -> FocusRemovalPolicy {
        self.focus_removal
    }

    pub fn set_focus_removal_policy(&mut self, policy: FocusRemovalPolicy) {
        self.focus_removal = policy;
    }

    /// The node holding keyboard focus.
    ///
    /// The id may be stale if the node was destroyed through another tree;
    /// check it with [`WidgetTree::is_alive`](super::WidgetTree::is_alive).
    pub fn focus(&self) -> Option<NodeId> {
        self.focus
    }

    /// The last pointer position seen by dispatch.
    pub fn pointer_position(&self) -> (f32, f32) {
        self.pointer
    }

    /// The last modifier mask seen by dispatch.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub(crate) fn defer(&mut self, id: NodeId, deferred: Deferred) {
        tracing::trace!(target: "trellis::dispatch", ?id, ?deferred, "widget busy, deferred");
        self.deferred.push((id, deferred));
    }

    /// Removes and returns the oldest entry held for `id`.
    pub(crate) fn take_deferred(&mut self, id: NodeId) -> Option<Deferred> {
        let index = self.deferred.iter().position(|(node, _)| *node == id)?;
        Some(self.deferred.remove(index).1)
    }
}
