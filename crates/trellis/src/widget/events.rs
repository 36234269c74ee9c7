//! Normalized input events and dispatch results.
//!
//! The platform layer translates whatever its windowing system produces into
//! [`InputEvent`] values and feeds them one at a time into
//! [`WidgetTree::dispatch`](super::WidgetTree::dispatch).

use bitflags::bitflags;
use trellis_core::Variant;

use super::NodeId;

bitflags! {
    /// Keyboard modifier bitmask.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        /// The Shift key is held.
        const SHIFT   = 0b0000_0001;
        /// The Control key is held.
        const CONTROL = 0b0000_0010;
        /// The Alt key is held.
        const ALT     = 0b0000_0100;
        /// The Meta/Super key is held.
        const META    = 0b0000_1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::empty()
    }
}

/// Pointer buttons, identified on the wire by ids 1, 2 and 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button, id 1.
    Left = 1,
    /// Secondary button, id 2.
    Right = 2,
    /// Middle button, id 3.
    Middle = 3,
}

impl MouseButton {
    /// Maps a raw button id to a button. Unknown ids map to `None` and such
    /// events are never handled.
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(Self::Left),
            2 => Some(Self::Right),
            3 => Some(Self::Middle),
            _ => None,
        }
    }

    /// Returns the raw id of the button.
    #[inline]
    pub fn id(self) -> u32 {
        self as u32
    }
}

/// A normalized input event.
///
/// Pointer coordinates are expressed in the coordinate space of the parent
/// of the node the event is dispatched to. For a root node that is usually
/// the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A pointer button was pressed.
    PointerDown { button: u32, x: f32, y: f32 },
    /// A pointer button was released.
    PointerUp { button: u32, x: f32, y: f32 },
    /// The pointer moved; `dx`/`dy` is the delta since the previous move.
    PointerMove { x: f32, y: f32, dx: f32, dy: f32 },
    /// The wheel turned. `z` is the vertical axis, `w` the horizontal one.
    PointerWheel { z: i32, w: i32 },
    /// A key was pressed.
    KeyDown { keycode: i32 },
    /// A key was released.
    KeyUp { keycode: i32 },
    /// A character was typed.
    KeyChar {
        keycode: i32,
        unichar: Option<char>,
        modifiers: Modifiers,
    },
    /// A timer ticked.
    TimerTick { timestamp: f64, count: u64 },
}

/// The arguments every drag hook receives.
#[derive(Debug, Clone)]
pub struct DragArgs {
    /// The modifier keys held when the hook fired.
    pub modifiers: Modifiers,
    /// The dragged value. Shares storage with the session payload.
    pub payload: Variant,
    /// The node that started the drag, if it is still alive.
    pub source: Option<NodeId>,
}

/// Result of dispatching an event into a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// A widget handled the event.
    Handled,
    /// No widget handled the event.
    Ignored,
    /// The root node is disabled and refused the event.
    Disabled,
    /// The root node does not exist.
    NodeNotFound,
}

impl DispatchResult {
    /// Check if the event was handled.
    pub fn was_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }

    pub(crate) fn from_handled(handled: bool) -> Self {
        if handled { Self::Handled } else { Self::Ignored }
    }
}

/// A key event as seen by the key hooks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum KeyStroke {
    Down(i32),
    Up(i32),
    Char(i32, Option<char>, Modifiers),
}

/// Whether a button event is a press or a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ButtonPhase {
    Down,
    Up,
}
