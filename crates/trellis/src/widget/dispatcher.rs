//! Event dispatching into a widget tree.
//!
//! [`WidgetTree::dispatch`] takes one normalized [`InputEvent`] and delivers
//! it to a root node. From there the widgets' own hooks carry it down the
//! tree: the base behaviour of each hook picks the child to forward to and
//! calls back into the engine functions of this module, which translate the
//! coordinates into the child's space and invoke the child's hook.
//!
//! # Event Flow
//!
//! 1. **Pointer buttons** go to the node under the pointer, recursing through
//!    `child_from_point`. During a drag session a button release delivers a
//!    drop instead and then ends the session.
//!
//! 2. **Pointer moves** update pointer residency. A node whose resident child
//!    changes sends a leave to the old child and an enter to the new one;
//!    otherwise it forwards the move. During a drag session the drag
//!    variants of these hooks fire instead.
//!
//! 3. **Wheel** events follow the residency flags, not the coordinates.
//!
//! 4. **Keys** go to the focus holder first, then, if unhandled, to the root
//!    as "unused" keys that travel front to back through the children.
//!
//! 5. **Timer ticks** are broadcast to every visible, enabled node.
//!
//! A disabled node refuses every event. Engine functions re-check liveness
//! before each call, so hooks may destroy or move any node, including the
//! one being visited.

use trellis_core::Rect;
use trellis_core::logging::{PerfSpan, span_names};

use super::events::{
    ButtonPhase, DispatchResult, DragArgs, InputEvent, KeyStroke, MouseButton,
};
use super::interaction::{Deferred, InteractionContext};
use super::tree::{NodeId, WidgetTree};

impl WidgetTree {
    /// Dispatches one event to `root`.
    ///
    /// Coordinates in `event` are in the space of `root`'s parent (usually
    /// the window, with the root's rectangle at its origin).
    pub fn dispatch(
        &mut self,
        cx: &mut InteractionContext,
        root: NodeId,
        event: &InputEvent,
    ) -> DispatchResult {
        let _span = PerfSpan::new(span_names::DISPATCH);

        if !self.is_alive(root) {
            tracing::debug!(target: "trellis::dispatch", ?root, ?event, "dispatch to missing node");
            end_drag_on_release(cx, event);
            return DispatchResult::NodeNotFound;
        }
        if !self.is_enabled(root) {
            tracing::trace!(target: "trellis::dispatch", ?root, ?event, "root disabled");
            end_drag_on_release(cx, event);
            return DispatchResult::Disabled;
        }

        let handled = match *event {
            InputEvent::PointerDown { button, x, y } => {
                cx.pointer = (x, y);
                self.dispatch_button(cx, root, button, ButtonPhase::Down, x, y)
            }
            InputEvent::PointerUp { button, x, y } => {
                cx.pointer = (x, y);
                match cx.drag_args() {
                    Some(args) => self.dispatch_drop(cx, root, button, x, y, &args),
                    None => self.dispatch_button(cx, root, button, ButtonPhase::Up, x, y),
                }
            }
            InputEvent::PointerMove { x, y, .. } => {
                cx.pointer = (x, y);
                self.dispatch_move(cx, root, x, y)
            }
            InputEvent::PointerWheel { z, w } => {
                if self.has_pointer(root) {
                    let args = cx.drag_args();
                    self.node_wheel(cx, root, z, w, args.as_ref())
                } else {
                    false
                }
            }
            InputEvent::KeyDown { keycode } => self.dispatch_key(cx, root, KeyStroke::Down(keycode)),
            InputEvent::KeyUp { keycode } => self.dispatch_key(cx, root, KeyStroke::Up(keycode)),
            InputEvent::KeyChar {
                keycode,
                unichar,
                modifiers,
            } => {
                cx.modifiers = modifiers;
                if cx.update_drag_modifiers(modifiers) {
                    self.reenter_drag(cx, root)
                } else {
                    self.dispatch_key(cx, root, KeyStroke::Char(keycode, unichar, modifiers))
                }
            }
            InputEvent::TimerTick { timestamp, count } => {
                self.node_timer(cx, root, timestamp, count)
            }
        };

        let result = DispatchResult::from_handled(handled);
        tracing::trace!(target: "trellis::dispatch", ?root, ?event, ?result, "dispatched");
        result
    }

    fn dispatch_button(
        &mut self,
        cx: &mut InteractionContext,
        root: NodeId,
        button: u32,
        phase: ButtonPhase,
        x: f32,
        y: f32,
    ) -> bool {
        match MouseButton::from_id(button) {
            Some(button) => self.node_button(cx, root, button, phase, x, y),
            None => false,
        }
    }

    /// Delivers a drop at the pointer, then ends the session whether or not
    /// the drop was accepted.
    fn dispatch_drop(
        &mut self,
        cx: &mut InteractionContext,
        root: NodeId,
        button: u32,
        x: f32,
        y: f32,
        args: &DragArgs,
    ) -> bool {
        let handled = match MouseButton::from_id(button) {
            Some(button) => self.node_drop(cx, root, button, x, y, args),
            None => false,
        };
        tracing::debug!(target: "trellis::drag", ?root, handled, "drop delivered");
        cx.end_drag();
        handled
    }

    /// Tracks residency on the root itself, then lets the root's hooks track
    /// its children.
    fn dispatch_move(&mut self, cx: &mut InteractionContext, root: NodeId, x: f32, y: f32) -> bool {
        let args = cx.drag_args();
        let args = args.as_ref();
        match (self.has_pointer(root), self.point_inside(root, x, y)) {
            (false, false) => false,
            (false, true) => self.node_enter(cx, root, x, y, args),
            (true, true) => self.node_move(cx, root, x, y, args),
            (true, false) => self.node_leave(cx, root, x, y, args),
        }
    }

    /// Offers a key to the focus holder, then to the root as an unused key.
    fn dispatch_key(&mut self, cx: &mut InteractionContext, root: NodeId, stroke: KeyStroke) -> bool {
        if let Some(focus) = cx.focus.filter(|&f| self.is_enabled_tree(f)) {
            if self.node_key(cx, focus, stroke, false) {
                return true;
            }
        }
        self.node_key(cx, root, stroke, true)
    }

    /// Leaves and re-enters the root at the last pointer position so every
    /// resident node sees the new drag modifiers.
    fn reenter_drag(&mut self, cx: &mut InteractionContext, root: NodeId) -> bool {
        let Some(args) = cx.drag_args() else {
            return false;
        };
        let (x, y) = cx.pointer;
        tracing::debug!(target: "trellis::drag", ?root, modifiers = ?args.modifiers, "drag modifiers changed");

        let mut handled = false;
        if self.has_pointer(root) {
            handled |= self.node_leave(cx, root, x, y, Some(&args));
        }
        if self.point_inside(root, x, y) {
            handled |= self.node_enter(cx, root, x, y, Some(&args));
        }
        handled
    }

    // =========================================================================
    // Engine functions
    //
    // Each takes a point in the space of the node's parent.
    // =========================================================================

    /// Converts a point into the local space of an enabled node.
    fn enabled_local(&self, id: NodeId, x: f32, y: f32) -> Option<(f32, f32)> {
        let data = self.node(id).filter(|d| d.enabled)?;
        Some((x - data.rect.left(), y - data.rect.top()))
    }

    /// Returns true if a point in the parent's space falls on the visible
    /// node.
    fn point_inside(&self, id: NodeId, x: f32, y: f32) -> bool {
        match self.node(id) {
            Some(data) if data.visible => {
                self.hit(id, x - data.rect.left(), y - data.rect.top())
            }
            _ => false,
        }
    }

    /// A point just outside the node's top-left corner, in the parent's
    /// space. Used for synthesized leaves.
    pub(crate) fn outside_point(&self, id: NodeId) -> (f32, f32) {
        let rect = self.rect(id).unwrap_or(Rect::EMPTY);
        (rect.left() - 1.0, rect.top() - 1.0)
    }

    pub(crate) fn node_button(
        &mut self,
        cx: &mut InteractionContext,
        id: NodeId,
        button: MouseButton,
        phase: ButtonPhase,
        x: f32,
        y: f32,
    ) -> bool {
        let Some((lx, ly)) = self.enabled_local(id, x, y) else {
            return false;
        };
        if !self.hit(id, lx, ly) {
            return false;
        }
        self.with_widget(cx, id, |w, ecx| match (button, phase) {
            (MouseButton::Left, ButtonPhase::Down) => w.left_button_down(ecx, lx, ly),
            (MouseButton::Right, ButtonPhase::Down) => w.right_button_down(ecx, lx, ly),
            (MouseButton::Middle, ButtonPhase::Down) => w.middle_button_down(ecx, lx, ly),
            (MouseButton::Left, ButtonPhase::Up) => w.left_button_up(ecx, lx, ly),
            (MouseButton::Right, ButtonPhase::Up) => w.right_button_up(ecx, lx, ly),
            (MouseButton::Middle, ButtonPhase::Up) => w.middle_button_up(ecx, lx, ly),
        })
    }

    pub(crate) fn node_drop(
        &mut self,
        cx: &mut InteractionContext,
        id: NodeId,
        button: MouseButton,
        x: f32,
        y: f32,
        args: &DragArgs,
    ) -> bool {
        let Some((lx, ly)) = self.enabled_local(id, x, y) else {
            return false;
        };
        if !self.hit(id, lx, ly) {
            return false;
        }
        self.with_widget(cx, id, |w, ecx| match button {
            MouseButton::Left => w.left_drop(ecx, lx, ly, args),
            MouseButton::Right => w.right_drop(ecx, lx, ly, args),
            MouseButton::Middle => w.middle_drop(ecx, lx, ly, args),
        })
    }

    /// Flags the node as resident, then runs its enter hook.
    pub(crate) fn node_enter(
        &mut self,
        cx: &mut InteractionContext,
        id: NodeId,
        x: f32,
        y: f32,
        args: Option<&DragArgs>,
    ) -> bool {
        let Some((lx, ly)) = self.enabled_local(id, x, y) else {
            return false;
        };
        if let Some(data) = self.node_mut(id) {
            data.has_pointer = true;
        }
        self.with_widget(cx, id, |w, ecx| match args {
            Some(args) => w.drag_enter(ecx, lx, ly, args),
            None => w.mouse_enter(ecx, lx, ly),
        })
    }

    pub(crate) fn node_move(
        &mut self,
        cx: &mut InteractionContext,
        id: NodeId,
        x: f32,
        y: f32,
        args: Option<&DragArgs>,
    ) -> bool {
        let Some((lx, ly)) = self.enabled_local(id, x, y) else {
            return false;
        };
        self.with_widget(cx, id, |w, ecx| match args {
            Some(args) => w.drag_move(ecx, lx, ly, args),
            None => w.mouse_move(ecx, lx, ly),
        })
    }

    /// Clears the node's residency, then runs its leave hook. A disabled node
    /// loses residency for its whole subtree without any hook running.
    ///
    /// If the node is busy, the base behaviour still carries the leave into
    /// its children right away and the node's own hook runs once it is free.
    pub(crate) fn node_leave(
        &mut self,
        cx: &mut InteractionContext,
        id: NodeId,
        x: f32,
        y: f32,
        args: Option<&DragArgs>,
    ) -> bool {
        let Some(data) = self.node_mut(id) else {
            return false;
        };
        data.has_pointer = false;
        if !data.enabled {
            self.clear_pointer_flags(id);
            return false;
        }
        let (lx, ly) = (x - data.rect.left(), y - data.rect.top());
        if self.is_busy(id) {
            cx.defer(
                id,
                Deferred::Leave {
                    x: lx,
                    y: ly,
                    args: args.cloned(),
                },
            );
        }
        self.with_widget(cx, id, |w, ecx| match args {
            Some(args) => w.drag_leave(ecx, lx, ly, args),
            None => w.mouse_leave(ecx, lx, ly),
        })
    }

    pub(crate) fn node_wheel(
        &mut self,
        cx: &mut InteractionContext,
        id: NodeId,
        z: i32,
        w: i32,
        args: Option<&DragArgs>,
    ) -> bool {
        if !self.is_enabled(id) {
            return false;
        }
        self.with_widget(cx, id, |widget, ecx| match args {
            Some(args) => widget.drag_wheel(ecx, z, w, args),
            None => widget.mouse_wheel(ecx, z, w),
        })
    }

    pub(crate) fn node_key(
        &mut self,
        cx: &mut InteractionContext,
        id: NodeId,
        stroke: KeyStroke,
        unused: bool,
    ) -> bool {
        if !self.is_enabled(id) {
            return false;
        }
        self.with_widget(cx, id, |w, ecx| match (stroke, unused) {
            (KeyStroke::Down(key), false) => w.key_down(ecx, key),
            (KeyStroke::Up(key), false) => w.key_up(ecx, key),
            (KeyStroke::Char(key, ch, mods), false) => w.key_char(ecx, key, ch, mods),
            (KeyStroke::Down(key), true) => w.unused_key_down(ecx, key),
            (KeyStroke::Up(key), true) => w.unused_key_up(ecx, key),
            (KeyStroke::Char(key, ch, mods), true) => w.unused_key_char(ecx, key, ch, mods),
        })
    }

    pub(crate) fn node_timer(
        &mut self,
        cx: &mut InteractionContext,
        id: NodeId,
        timestamp: f64,
        count: u64,
    ) -> bool {
        if !self.is_enabled(id) {
            return false;
        }
        self.with_widget(cx, id, |w, ecx| w.timer(ecx, timestamp, count))
    }

    /// Takes the pointer away from a node about to be detached: its leave
    /// hook runs at a point outside it (a drag-leave during a drag session)
    /// and every residency flag in its subtree is cleared.
    pub(crate) fn release_pointer(&mut self, cx: &mut InteractionContext, node: NodeId) {
        let (x, y) = self.outside_point(node);
        let args = cx.drag_args();
        tracing::trace!(target: "trellis::dispatch", ?node, "releasing pointer");
        self.node_leave(cx, node, x, y, args.as_ref());
        self.clear_pointer_flags(node);
    }
}

/// A button release ends the drag session even when it reaches no node.
fn end_drag_on_release(cx: &mut InteractionContext, event: &InputEvent) {
    if matches!(event, InputEvent::PointerUp { .. }) && cx.is_dragging() {
        tracing::debug!(target: "trellis::drag", "release not delivered");
        cx.end_drag();
    }
}
