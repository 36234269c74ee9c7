//! The context handed to widget hooks.

use trellis_core::{DragError, FocusError, Rect, TreeResult, Variant};

use super::interaction::InteractionContext;
use super::traits::Widget;
use super::tree::{NodeId, WidgetTree};

/// Access to the tree and the interaction state from inside a hook.
///
/// The context is bound to the node whose hook is running. Hooks may freely
/// mutate the tree through it, including detaching or destroying the node
/// itself; the dispatch engine re-validates everything it visits afterwards.
pub struct EventCtx<'a> {
    pub(crate) tree: &'a mut WidgetTree,
    pub(crate) interaction: &'a mut InteractionContext,
    pub(crate) id: NodeId,
}

impl<'a> EventCtx<'a> {
    pub(crate) fn new(
        tree: &'a mut WidgetTree,
        interaction: &'a mut InteractionContext,
        id: NodeId,
    ) -> Self {
        Self {
            tree,
            interaction,
            id,
        }
    }

    /// The node whose hook is running.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &WidgetTree {
        self.tree
    }

    pub fn interaction(&self) -> &InteractionContext {
        self.interaction
    }

    /// Splits the context into the tree and the interaction state, for calls
    /// that target other nodes.
    pub fn parts(&mut self) -> (&mut WidgetTree, &mut InteractionContext) {
        (&mut *self.tree, &mut *self.interaction)
    }

    /// The node's rectangle in its parent's coordinates.
    pub fn rect(&self) -> Rect {
        self.tree.rect(self.id).unwrap_or(Rect::EMPTY)
    }

    pub fn children(&self) -> &[NodeId] {
        self.tree.children(self.id)
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.tree.parent(self.id)
    }

    pub fn has_pointer(&self) -> bool {
        self.tree.has_pointer(self.id)
    }

    pub fn is_pushed(&self) -> bool {
        self.tree.is_pushed(self.id)
    }

    pub fn is_selected(&self) -> bool {
        self.tree.is_selected(self.id)
    }

    pub fn is_enabled_tree(&self) -> bool {
        self.tree.is_enabled_tree(self.id)
    }

    pub fn has_focus(&self) -> bool {
        self.interaction.focus() == Some(self.id)
    }

    pub fn set_pushed(&mut self, pushed: bool) {
        if let Some(node) = self.tree.node_mut(self.id) {
            node.pushed = pushed;
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        if let Some(node) = self.tree.node_mut(self.id) {
            node.selected = selected;
        }
    }

    /// Moves keyboard focus to this node.
    pub fn set_focus(&mut self) -> Result<(), FocusError> {
        self.tree.set_focus(self.interaction, self.id)
    }

    /// Starts a drag session with this node as the source.
    pub fn begin_drag(&mut self, payload: Variant) -> Result<(), DragError> {
        self.tree.begin_drag(self.interaction, self.id, payload)
    }

    pub fn end_drag(&mut self) {
        self.interaction.end_drag();
    }

    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    /// Detaches a child of this node.
    pub fn remove_child(&mut self, child: NodeId) -> TreeResult<()> {
        self.tree.remove_child(self.interaction, self.id, child)
    }

    /// Detaches this node from its parent.
    pub fn remove_from_parent(&mut self) -> TreeResult<()> {
        self.tree.remove_from_parent(self.interaction, self.id)
    }

    /// Destroys a node and its subtree. May target this node itself.
    pub fn destroy(&mut self, node: NodeId) -> TreeResult<()> {
        self.tree.destroy(self.interaction, node)
    }

    /// Borrows another node's widget. See [`WidgetTree::widget_mut`].
    pub fn widget_mut<T: Widget>(&mut self, id: NodeId) -> Option<&mut T> {
        self.tree.widget_mut::<T>(id)
    }
}
