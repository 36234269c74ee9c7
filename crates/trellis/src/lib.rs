//! Trellis - a retained-mode widget tree.
//!
//! This is the main crate. It re-exports the primitives of `trellis-core`
//! and provides the [`widget`] module: the tree arena, the capability traits
//! widgets implement, event dispatch, keyboard focus and drag and drop.
//!
//! # Example
//!
//! ```
//! use trellis::widget::{InputEvent, InteractionContext, Panel, WidgetTree};
//!
//! let mut cx = InteractionContext::new();
//! let mut tree = WidgetTree::new();
//! let window = tree.insert_named("window", Panel::new());
//! let sidebar = tree.insert_named("sidebar", Panel::new());
//! tree.add_child(window, sidebar, None).unwrap();
//! tree.set_rect(&mut cx, window, 0.0, 0.0, 800.0, 600.0).unwrap();
//! tree.set_rect(&mut cx, sidebar, 0.0, 0.0, 200.0, 600.0).unwrap();
//!
//! let over_sidebar = InputEvent::PointerMove { x: 50.0, y: 50.0, dx: 0.0, dy: 0.0 };
//! tree.dispatch(&mut cx, window, &over_sidebar);
//! assert!(tree.has_pointer(sidebar));
//! ```

pub use trellis_core::*;

pub mod widget;

pub use widget::{InputEvent, InteractionContext, NodeId, WidgetTree};
