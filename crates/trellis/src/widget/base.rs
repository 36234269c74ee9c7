//! Base behaviour for every widget hook.
//!
//! The capability traits call these functions from their default methods. An
//! override that still wants the stock behaviour (usually: forward to the
//! children) calls the matching function here explicitly.
//!
//! Loops over children work on a snapshot and skip any child that is no
//! longer a child of the node by the time its turn comes, so hooks are free
//! to restructure the tree while an event is in flight.

use trellis_core::{Rect, SkinSource};

use super::context::EventCtx;
use super::draw::{DrawCtx, VisualState};
use super::events::{ButtonPhase, DragArgs, KeyStroke, Modifiers, MouseButton};
use super::tree::NodeId;

// ============================================================================
// Hit testing
// ============================================================================

/// The default hit test: `0 <= x < width` and `0 <= y < height`.
pub fn intersects(rect: &Rect, x: f32, y: f32) -> bool {
    x >= 0.0 && x < rect.width() && y >= 0.0 && y < rect.height()
}

// ============================================================================
// Drawing
// ============================================================================

/// Draws the visible children, back to front. `(x, y)` is the absolute
/// position of the node being drawn.
pub fn draw(dcx: &mut DrawCtx<'_>, x: f32, y: f32, state: VisualState) {
    let tree = dcx.tree;
    for &child in tree.children(dcx.id) {
        tree.draw_node(&mut *dcx.renderer, child, x, y, state);
    }
}

// ============================================================================
// Pointer
// ============================================================================

fn is_child(ecx: &EventCtx<'_>, child: NodeId) -> bool {
    ecx.tree.parent(child) == Some(ecx.id)
}

fn button_to_child(
    ecx: &mut EventCtx<'_>,
    button: MouseButton,
    phase: ButtonPhase,
    x: f32,
    y: f32,
) -> bool {
    match ecx.tree.child_from_point(ecx.id, x, y) {
        Some(child) if ecx.tree.is_enabled(child) => {
            ecx.tree.node_button(ecx.interaction, child, button, phase, x, y)
        }
        _ => false,
    }
}

pub fn left_button_down(ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
    button_to_child(ecx, MouseButton::Left, ButtonPhase::Down, x, y)
}

pub fn right_button_down(ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
    button_to_child(ecx, MouseButton::Right, ButtonPhase::Down, x, y)
}

pub fn middle_button_down(ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
    button_to_child(ecx, MouseButton::Middle, ButtonPhase::Down, x, y)
}

pub fn left_button_up(ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
    button_to_child(ecx, MouseButton::Left, ButtonPhase::Up, x, y)
}

pub fn right_button_up(ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
    button_to_child(ecx, MouseButton::Right, ButtonPhase::Up, x, y)
}

pub fn middle_button_up(ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
    button_to_child(ecx, MouseButton::Middle, ButtonPhase::Up, x, y)
}

/// Enters the child under the point, if it is enabled.
fn enter_child(ecx: &mut EventCtx<'_>, x: f32, y: f32, args: Option<&DragArgs>) -> bool {
    match ecx.tree.child_from_point(ecx.id, x, y) {
        Some(child) => ecx.tree.node_enter(ecx.interaction, child, x, y, args),
        None => false,
    }
}

/// Leaves a resident child. A disabled child loses its residency silently.
fn leave_child(ecx: &mut EventCtx<'_>, child: NodeId, x: f32, y: f32, args: Option<&DragArgs>) -> bool {
    if ecx.tree.is_enabled(child) {
        ecx.tree.node_leave(ecx.interaction, child, x, y, args)
    } else {
        ecx.tree.clear_pointer_flags(child);
        false
    }
}

/// Compares the resident child with the child under the point and emits
/// leave/enter on a change, or forwards the move otherwise.
fn track_pointer(ecx: &mut EventCtx<'_>, x: f32, y: f32, args: Option<&DragArgs>) -> bool {
    let old = ecx.tree.pointer_child(ecx.id);
    let new = ecx.tree.child_from_point(ecx.id, x, y);

    if old == new {
        return match new {
            Some(child) => ecx.tree.node_move(ecx.interaction, child, x, y, args),
            None => false,
        };
    }

    let mut handled = false;
    if let Some(old) = old {
        handled |= leave_child(ecx, old, x, y, args);
    }
    if let Some(new) = new.filter(|&c| is_child(ecx, c)) {
        handled |= ecx.tree.node_enter(ecx.interaction, new, x, y, args);
    }
    handled
}

fn leave_resident(ecx: &mut EventCtx<'_>, x: f32, y: f32, args: Option<&DragArgs>) -> bool {
    match ecx.tree.pointer_child(ecx.id) {
        Some(child) => leave_child(ecx, child, x, y, args),
        None => false,
    }
}

fn wheel_resident(ecx: &mut EventCtx<'_>, z: i32, w: i32, args: Option<&DragArgs>) -> bool {
    match ecx.tree.pointer_child(ecx.id) {
        Some(child) => ecx.tree.node_wheel(ecx.interaction, child, z, w, args),
        None => false,
    }
}

pub fn mouse_enter(ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
    enter_child(ecx, x, y, None)
}

pub fn mouse_move(ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
    track_pointer(ecx, x, y, None)
}

pub fn mouse_leave(ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
    leave_resident(ecx, x, y, None)
}

/// Forwards the wheel to the resident child.
pub fn mouse_wheel(ecx: &mut EventCtx<'_>, z: i32, w: i32) -> bool {
    wheel_resident(ecx, z, w, None)
}

// ============================================================================
// Keyboard
// ============================================================================

/// Offers a key to the visible, enabled children, front to back, until one
/// handles it.
fn key_to_children(ecx: &mut EventCtx<'_>, stroke: KeyStroke, unused: bool) -> bool {
    let children = ecx.tree.children(ecx.id).to_vec();
    for child in children.into_iter().rev() {
        if !is_child(ecx, child) || !ecx.tree.is_visible(child) || !ecx.tree.is_enabled(child) {
            continue;
        }
        if ecx.tree.node_key(ecx.interaction, child, stroke, unused) {
            return true;
        }
    }
    false
}

pub fn key_down(ecx: &mut EventCtx<'_>, keycode: i32) -> bool {
    key_to_children(ecx, KeyStroke::Down(keycode), false)
}

pub fn key_up(ecx: &mut EventCtx<'_>, keycode: i32) -> bool {
    key_to_children(ecx, KeyStroke::Up(keycode), false)
}

pub fn key_char(ecx: &mut EventCtx<'_>, keycode: i32, unichar: Option<char>, modifiers: Modifiers) -> bool {
    key_to_children(ecx, KeyStroke::Char(keycode, unichar, modifiers), false)
}

pub fn unused_key_down(ecx: &mut EventCtx<'_>, keycode: i32) -> bool {
    key_to_children(ecx, KeyStroke::Down(keycode), true)
}

pub fn unused_key_up(ecx: &mut EventCtx<'_>, keycode: i32) -> bool {
    key_to_children(ecx, KeyStroke::Up(keycode), true)
}

pub fn unused_key_char(
    ecx: &mut EventCtx<'_>,
    keycode: i32,
    unichar: Option<char>,
    modifiers: Modifiers,
) -> bool {
    key_to_children(ecx, KeyStroke::Char(keycode, unichar, modifiers), true)
}

// ============================================================================
// Drag and drop
// ============================================================================

fn drop_to_child(ecx: &mut EventCtx<'_>, button: MouseButton, x: f32, y: f32, args: &DragArgs) -> bool {
    match ecx.tree.child_from_point(ecx.id, x, y) {
        Some(child) if ecx.tree.is_enabled(child) => {
            ecx.tree.node_drop(ecx.interaction, child, button, x, y, args)
        }
        _ => false,
    }
}

pub fn left_drop(ecx: &mut EventCtx<'_>, x: f32, y: f32, args: &DragArgs) -> bool {
    drop_to_child(ecx, MouseButton::Left, x, y, args)
}

pub fn right_drop(ecx: &mut EventCtx<'_>, x: f32, y: f32, args: &DragArgs) -> bool {
    drop_to_child(ecx, MouseButton::Right, x, y, args)
}

pub fn middle_drop(ecx: &mut EventCtx<'_>, x: f32, y: f32, args: &DragArgs) -> bool {
    drop_to_child(ecx, MouseButton::Middle, x, y, args)
}

pub fn drag_enter(ecx: &mut EventCtx<'_>, x: f32, y: f32, args: &DragArgs) -> bool {
    enter_child(ecx, x, y, Some(args))
}

pub fn drag_move(ecx: &mut EventCtx<'_>, x: f32, y: f32, args: &DragArgs) -> bool {
    track_pointer(ecx, x, y, Some(args))
}

pub fn drag_leave(ecx: &mut EventCtx<'_>, x: f32, y: f32, args: &DragArgs) -> bool {
    leave_resident(ecx, x, y, Some(args))
}

pub fn drag_wheel(ecx: &mut EventCtx<'_>, z: i32, w: i32, args: &DragArgs) -> bool {
    wheel_resident(ecx, z, w, Some(args))
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Stores the rectangle, clamping width and height to zero.
pub fn set_rect(ecx: &mut EventCtx<'_>, x: f32, y: f32, width: f32, height: f32) {
    if let Some(node) = ecx.tree.node_mut(ecx.id) {
        node.rect
            .set_position_and_size(x, y, width.max(0.0), height.max(0.0));
    }
}

pub fn set_visible(ecx: &mut EventCtx<'_>, visible: bool) {
    if let Some(node) = ecx.tree.node_mut(ecx.id) {
        node.visible = visible;
    }
}

pub fn set_enabled(ecx: &mut EventCtx<'_>, enabled: bool) {
    if let Some(node) = ecx.tree.node_mut(ecx.id) {
        node.enabled = enabled;
    }
}

/// Yields focus.
pub fn lost_focus(_ecx: &mut EventCtx<'_>) -> bool {
    true
}

pub fn got_focus(_ecx: &mut EventCtx<'_>) {}

/// Broadcasts the tick to every visible, enabled child. Handled if any child
/// handled it.
pub fn timer(ecx: &mut EventCtx<'_>, timestamp: f64, count: u64) -> bool {
    let children = ecx.tree.children(ecx.id).to_vec();
    let mut handled = false;
    for child in children {
        if is_child(ecx, child) && ecx.tree.is_visible(child) && ecx.tree.is_enabled(child) {
            handled |= ecx.tree.node_timer(ecx.interaction, child, timestamp, count);
        }
    }
    handled
}

pub fn pack(_ecx: &mut EventCtx<'_>) {}

pub fn layout(_ecx: &mut EventCtx<'_>) {}

pub fn apply_skin(_ecx: &mut EventCtx<'_>, _skin: &dyn SkinSource) {}
