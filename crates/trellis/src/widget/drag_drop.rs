//! Drag and drop.
//!
//! A drag session carries a [`Variant`] payload from a source node to a drop
//! target. At most one session is active per [`InteractionContext`].
//!
//! # Drag and Drop Flow
//!
//! 1. A widget calls [`EventCtx::begin_drag`](super::EventCtx::begin_drag),
//!    usually from a button-down hook. Every residency flag is cleared with a
//!    synthesized pointer-leave so the pointer is tracked afresh.
//! 2. Pointer moves deliver `drag_enter`, `drag_move` and `drag_leave`
//!    instead of their pointer counterparts; the wheel delivers `drag_wheel`.
//! 3. A modifier change (seen through a `KeyChar` event) re-enters the tree
//!    with the new modifiers: `drag_leave`, then `drag_enter`.
//! 4. Releasing a button delivers `left_drop`, `right_drop` or `middle_drop`
//!    at the pointer, then ends the session whether or not the drop was
//!    accepted.
//!
//! A drop target takes the payload from [`DragArgs`] and, if it wants to move
//! rather than copy, clears the value held by the source through
//! [`EventCtx::widget_mut`](super::EventCtx::widget_mut).

use trellis_core::{DragError, Variant};

use super::events::{DragArgs, Modifiers};
use super::interaction::InteractionContext;
use super::tree::{NodeId, WidgetTree};

/// The state of an active drag session.
#[derive(Debug, Clone)]
pub struct DragSession {
    payload: Variant,
    source: Option<NodeId>,
    pending_modifiers: Modifiers,
}

impl DragSession {
    pub fn payload(&self) -> &Variant {
        &self.payload
    }

    /// The node that started the drag; `None` once it has been destroyed.
    pub fn source(&self) -> Option<NodeId> {
        self.source
    }

    /// The modifier mask last seen during the drag.
    pub fn pending_modifiers(&self) -> Modifiers {
        self.pending_modifiers
    }

    fn args(&self) -> DragArgs {
        DragArgs {
            modifiers: self.pending_modifiers,
            payload: self.payload.clone(),
            source: self.source,
        }
    }
}

impl InteractionContext {
    /// Returns true while a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn drag_payload(&self) -> Option<&Variant> {
        self.drag.as_ref().map(|s| &s.payload)
    }

    pub fn drag_source(&self) -> Option<NodeId> {
        self.drag.as_ref().and_then(|s| s.source)
    }

    /// Ends the drag session, if any. Residency flags are left as they are;
    /// the next pointer move recomputes them.
    pub fn end_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            tracing::debug!(
                target: "trellis::drag",
                source = ?session.source,
                payload = ?session.payload,
                "drag ended"
            );
        }
    }

    pub(crate) fn drag_args(&self) -> Option<DragArgs> {
        self.drag.as_ref().map(DragSession::args)
    }

    /// Records a modifier mask seen during a drag. Returns true if a session
    /// is active and the mask changed.
    pub(crate) fn update_drag_modifiers(&mut self, modifiers: Modifiers) -> bool {
        match self.drag.as_mut() {
            Some(session) if session.pending_modifiers != modifiers => {
                session.pending_modifiers = modifiers;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn forget_drag_source(&mut self) {
        if let Some(session) = self.drag.as_mut() {
            tracing::debug!(target: "trellis::drag", source = ?session.source, "drag source destroyed");
            session.source = None;
        }
    }
}

impl WidgetTree {
    /// Starts a drag session carrying `payload`, with `source` as its origin.
    ///
    /// Fails if a session is already active, the payload is empty or the
    /// source does not exist; the existing session is left untouched. On
    /// success, the tree containing `source` receives a pointer-leave from
    /// its root so every residency flag is cleared.
    pub fn begin_drag(
        &mut self,
        cx: &mut InteractionContext,
        source: NodeId,
        payload: Variant,
    ) -> Result<(), DragError> {
        let check = if cx.is_dragging() {
            Err(DragError::AlreadyActive)
        } else if payload.is_empty() {
            Err(DragError::EmptyPayload)
        } else if !self.is_alive(source) {
            Err(DragError::InvalidSource)
        } else {
            Ok(())
        };
        if let Err(reason) = check {
            tracing::debug!(target: "trellis::drag", ?source, %reason, "begin_drag rejected");
            return Err(reason);
        }

        tracing::debug!(target: "trellis::drag", ?source, ?payload, "drag started");
        cx.drag = Some(DragSession {
            payload,
            source: Some(source),
            pending_modifiers: cx.modifiers,
        });

        if let Some(root) = self.root(source) {
            if self.has_pointer(root) {
                let (x, y) = self.outside_point(root);
                self.node_leave(cx, root, x, y, None);
            }
            self.clear_pointer_flags(root);
        }
        Ok(())
    }
}
