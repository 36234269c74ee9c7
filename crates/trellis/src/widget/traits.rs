//! Capability traits implemented by widgets.
//!
//! A widget is any `'static` type that implements every capability trait.
//! Each trait method has a default that calls the matching free function in
//! [`base`](super::base), so an empty `impl` block gives the stock behaviour:
//! forward pointer events to the child under the pointer, forward key events
//! to children, broadcast timer ticks and so on.
//!
//! An override that wants to keep the stock behaviour for children calls the
//! base function explicitly:
//!
//! ```
//! use trellis::widget::{base, EventCtx, PointerTarget};
//!
//! struct ClickCounter {
//!     clicks: u32,
//! }
//!
//! impl PointerTarget for ClickCounter {
//!     fn left_button_down(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
//!         // Children get the first chance; count the click if none took it.
//!         if base::left_button_down(ecx, x, y) {
//!             return true;
//!         }
//!         self.clicks += 1;
//!         true
//!     }
//! }
//! ```

use std::any::Any;

use trellis_core::{Rect, SkinSource};

use super::base;
use super::context::EventCtx;
use super::draw::{DrawCtx, VisualState};
use super::events::{DragArgs, Modifiers};

/// Point-in-widget testing.
pub trait Hittable {
    /// Tests a point in the widget's local coordinates. `rect` is the
    /// widget's own rectangle in its parent's space.
    fn intersects(&self, rect: &Rect, x: f32, y: f32) -> bool {
        base::intersects(rect, x, y)
    }
}

/// Rendering.
pub trait Drawable {
    /// Draws the widget with its top-left corner at `(x, y)` in absolute
    /// coordinates, then its children.
    fn draw(&self, dcx: &mut DrawCtx<'_>, x: f32, y: f32, state: VisualState) {
        base::draw(dcx, x, y, state)
    }
}

/// Pointer input. Coordinates are local to the widget.
pub trait PointerTarget {
    fn left_button_down(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
        base::left_button_down(ecx, x, y)
    }

    fn right_button_down(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
        base::right_button_down(ecx, x, y)
    }

    fn middle_button_down(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
        base::middle_button_down(ecx, x, y)
    }

    fn left_button_up(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
        base::left_button_up(ecx, x, y)
    }

    fn right_button_up(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
        base::right_button_up(ecx, x, y)
    }

    fn middle_button_up(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
        base::middle_button_up(ecx, x, y)
    }

    /// The pointer entered the widget. Residency is already flagged.
    fn mouse_enter(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
        base::mouse_enter(ecx, x, y)
    }

    fn mouse_move(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
        base::mouse_move(ecx, x, y)
    }

    /// The pointer left the widget. Residency is already cleared.
    fn mouse_leave(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
        base::mouse_leave(ecx, x, y)
    }

    fn mouse_wheel(&mut self, ecx: &mut EventCtx<'_>, z: i32, w: i32) -> bool {
        base::mouse_wheel(ecx, z, w)
    }
}

/// Keyboard input.
///
/// The `key_*` hooks fire on the focus widget. The `unused_key_*` hooks fire
/// from the root downwards when the focus widget did not handle the key.
pub trait KeyTarget {
    fn key_down(&mut self, ecx: &mut EventCtx<'_>, keycode: i32) -> bool {
        base::key_down(ecx, keycode)
    }

    fn key_up(&mut self, ecx: &mut EventCtx<'_>, keycode: i32) -> bool {
        base::key_up(ecx, keycode)
    }

    fn key_char(
        &mut self,
        ecx: &mut EventCtx<'_>,
        keycode: i32,
        unichar: Option<char>,
        modifiers: Modifiers,
    ) -> bool {
        base::key_char(ecx, keycode, unichar, modifiers)
    }

    fn unused_key_down(&mut self, ecx: &mut EventCtx<'_>, keycode: i32) -> bool {
        base::unused_key_down(ecx, keycode)
    }

    fn unused_key_up(&mut self, ecx: &mut EventCtx<'_>, keycode: i32) -> bool {
        base::unused_key_up(ecx, keycode)
    }

    fn unused_key_char(
        &mut self,
        ecx: &mut EventCtx<'_>,
        keycode: i32,
        unichar: Option<char>,
        modifiers: Modifiers,
    ) -> bool {
        base::unused_key_char(ecx, keycode, unichar, modifiers)
    }
}

/// Drag-and-drop input, delivered while a drag session is active.
pub trait DragTarget {
    fn left_drop(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32, args: &DragArgs) -> bool {
        base::left_drop(ecx, x, y, args)
    }

    fn right_drop(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32, args: &DragArgs) -> bool {
        base::right_drop(ecx, x, y, args)
    }

    fn middle_drop(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32, args: &DragArgs) -> bool {
        base::middle_drop(ecx, x, y, args)
    }

    fn drag_enter(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32, args: &DragArgs) -> bool {
        base::drag_enter(ecx, x, y, args)
    }

    fn drag_move(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32, args: &DragArgs) -> bool {
        base::drag_move(ecx, x, y, args)
    }

    fn drag_leave(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32, args: &DragArgs) -> bool {
        base::drag_leave(ecx, x, y, args)
    }

    fn drag_wheel(&mut self, ecx: &mut EventCtx<'_>, z: i32, w: i32, args: &DragArgs) -> bool {
        base::drag_wheel(ecx, z, w, args)
    }
}

/// Geometry, state, focus, timer and layout hooks.
pub trait Lifecycle {
    /// Stores a new rectangle. Width and height are clamped to zero.
    fn set_rect(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32, width: f32, height: f32) {
        base::set_rect(ecx, x, y, width, height)
    }

    fn set_visible(&mut self, ecx: &mut EventCtx<'_>, visible: bool) {
        base::set_visible(ecx, visible)
    }

    fn set_enabled(&mut self, ecx: &mut EventCtx<'_>, enabled: bool) {
        base::set_enabled(ecx, enabled)
    }

    /// Asked before focus moves away. Return `false` to keep the focus.
    ///
    /// When focus is force-cleared (the widget was disabled or removed) the
    /// return value is ignored.
    fn lost_focus(&mut self, ecx: &mut EventCtx<'_>) -> bool {
        base::lost_focus(ecx)
    }

    fn got_focus(&mut self, ecx: &mut EventCtx<'_>) {
        base::got_focus(ecx)
    }

    fn timer(&mut self, ecx: &mut EventCtx<'_>, timestamp: f64, count: u64) -> bool {
        base::timer(ecx, timestamp, count)
    }

    /// Computes the widget's preferred size. Children are packed first.
    fn pack(&mut self, ecx: &mut EventCtx<'_>) {
        base::pack(ecx)
    }

    /// Positions the widget's children. Runs before the children lay out
    /// their own children.
    fn layout(&mut self, ecx: &mut EventCtx<'_>) {
        base::layout(ecx)
    }

    /// Reads configuration from a skin.
    fn apply_skin(&mut self, ecx: &mut EventCtx<'_>, skin: &dyn SkinSource) {
        base::apply_skin(ecx, skin)
    }
}

/// A node's behaviour. Blanket-implemented for every type that implements all
/// the capability traits.
pub trait Widget:
    Any + Hittable + Drawable + PointerTarget + KeyTarget + DragTarget + Lifecycle
{
}

impl<T> Widget for T where
    T: Any + Hittable + Drawable + PointerTarget + KeyTarget + DragTarget + Lifecycle
{
}
