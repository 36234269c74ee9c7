//! Drawing traversal.
//!
//! The tree never produces pixels itself. [`WidgetTree::draw`] walks the
//! visible nodes depth-first, computing each node's absolute position and
//! inherited [`VisualState`], and widgets hand regions to a [`Renderer`].

use trellis_core::Rect;
use trellis_core::logging::{PerfSpan, span_names};

use super::tree::{NodeId, WidgetTree};

/// The inherited visual state of a node.
///
/// `enabled_tree` is false if the node or any ancestor is disabled. The other
/// flags are set if the node or any ancestor has them set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualState {
    pub enabled_tree: bool,
    /// The pointer is over the node or one of its ancestors.
    pub highlighted: bool,
    pub pushed: bool,
    pub selected: bool,
}

impl VisualState {
    /// The state of a root drawn under an enabled parent.
    pub const ROOT: Self = Self {
        enabled_tree: true,
        highlighted: false,
        pushed: false,
        selected: false,
    };
}

/// The rendering backend.
pub trait Renderer {
    /// Renders one widget region in absolute coordinates.
    fn draw_region(&mut self, region: Rect, state: &VisualState);
}

/// Access to the tree and the renderer from inside a `draw` hook.
pub struct DrawCtx<'a> {
    pub(crate) tree: &'a WidgetTree,
    pub(crate) renderer: &'a mut dyn Renderer,
    pub(crate) id: NodeId,
}

impl<'a> DrawCtx<'a> {
    /// The node being drawn.
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &WidgetTree {
        self.tree
    }

    /// The node's region in absolute coordinates, given its absolute origin.
    pub fn region(&self, x: f32, y: f32) -> Rect {
        let rect = self.tree.rect(self.id).unwrap_or(Rect::EMPTY);
        Rect::from_xywh(x, y, rect.width(), rect.height())
    }

    pub fn draw_region(&mut self, region: Rect, state: &VisualState) {
        self.renderer.draw_region(region, state);
    }

    pub fn renderer(&mut self) -> &mut dyn Renderer {
        &mut *self.renderer
    }
}

impl WidgetTree {
    /// Draws the subtree rooted at `root`, with the root placed at its own
    /// rectangle's position.
    pub fn draw(&self, root: NodeId, renderer: &mut dyn Renderer) {
        let _span = PerfSpan::new(span_names::DRAW);
        let inherited = VisualState {
            enabled_tree: self.parent(root).is_none_or(|p| self.is_enabled_tree(p)),
            ..VisualState::ROOT
        };
        self.draw_node(renderer, root, 0.0, 0.0, inherited);
    }

    /// Draws one node given its parent's absolute origin and inherited state.
    /// Invisible nodes are skipped with their subtree.
    pub(crate) fn draw_node(
        &self,
        renderer: &mut dyn Renderer,
        id: NodeId,
        parent_x: f32,
        parent_y: f32,
        inherited: VisualState,
    ) {
        let Some(node) = self.node(id) else {
            return;
        };
        if !node.visible {
            return;
        }

        let x = parent_x + node.rect.left();
        let y = parent_y + node.rect.top();
        let state = VisualState {
            enabled_tree: inherited.enabled_tree && node.enabled,
            highlighted: inherited.highlighted || node.has_pointer,
            pushed: inherited.pushed || node.pushed,
            selected: inherited.selected || node.selected,
        };

        let mut dcx = DrawCtx {
            tree: self,
            renderer,
            id,
        };
        match node.widget.as_deref() {
            Some(widget) => widget.draw(&mut dcx, x, y, state),
            None => super::base::draw(&mut dcx, x, y, state),
        }
    }
}
