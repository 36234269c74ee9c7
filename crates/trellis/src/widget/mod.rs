//! The widget tree and everything that drives it.
//!
//! - [`WidgetTree`]: an arena of nodes arranged in one or more trees
//! - Capability traits ([`Hittable`], [`Drawable`], [`PointerTarget`],
//!   [`KeyTarget`], [`DragTarget`], [`Lifecycle`]) that give a node its
//!   behaviour, with defaults in [`base`]
//! - [`InteractionContext`]: keyboard focus and the drag session
//! - [`WidgetTree::dispatch`]: routes an [`InputEvent`] into a tree
//! - [`WidgetTree::draw`]: walks a tree for a [`Renderer`]
//!
//! # Creating a Widget
//!
//! A widget is a plain struct implementing every capability trait. Empty
//! `impl` blocks keep the base behaviour; overrides replace single hooks.
//!
//! ```
//! use trellis::widget::*;
//!
//! #[derive(Default)]
//! struct Button {
//!     clicks: u32,
//! }
//!
//! impl Hittable for Button {}
//! impl Drawable for Button {}
//! impl KeyTarget for Button {}
//! impl DragTarget for Button {}
//! impl Lifecycle for Button {}
//!
//! impl PointerTarget for Button {
//!     fn left_button_down(&mut self, ecx: &mut EventCtx<'_>, _x: f32, _y: f32) -> bool {
//!         self.clicks += 1;
//!         ecx.set_pushed(true);
//!         true
//!     }
//!
//!     fn left_button_up(&mut self, ecx: &mut EventCtx<'_>, _x: f32, _y: f32) -> bool {
//!         ecx.set_pushed(false);
//!         true
//!     }
//! }
//!
//! let mut cx = InteractionContext::new();
//! let mut tree = WidgetTree::new();
//! let window = tree.insert(Panel::new());
//! let button = tree.insert(Button::default());
//! tree.add_child(window, button, None).unwrap();
//! tree.set_rect(&mut cx, window, 0.0, 0.0, 200.0, 100.0).unwrap();
//! tree.set_rect(&mut cx, button, 10.0, 10.0, 80.0, 24.0).unwrap();
//!
//! let press = InputEvent::PointerDown { button: 1, x: 20.0, y: 20.0 };
//! assert!(tree.dispatch(&mut cx, window, &press).was_handled());
//! assert!(tree.is_pushed(button));
//! assert_eq!(tree.widget::<Button>(button).map(|b| b.clicks), Some(1));
//! ```

pub mod base;
mod context;
mod debug;
mod dispatcher;
mod drag_drop;
mod draw;
mod events;
mod focus;
mod interaction;
mod panel;
mod traits;
mod tree;

pub use context::EventCtx;
pub use debug::{TreeDebug, TreeFormatOptions, TreeStyle};
pub use drag_drop::DragSession;
pub use draw::{DrawCtx, Renderer, VisualState};
pub use events::{DispatchResult, DragArgs, InputEvent, Modifiers, MouseButton};
pub use interaction::{FocusRemovalPolicy, InteractionContext};
pub use panel::Panel;
pub use traits::{DragTarget, Drawable, Hittable, KeyTarget, Lifecycle, PointerTarget, Widget};
pub use tree::{NodeId, WidgetTree};
