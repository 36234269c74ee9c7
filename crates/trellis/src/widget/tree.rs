//! The widget tree arena.
//!
//! Nodes live in a [`SlotMap`] keyed by [`NodeId`]. A node stores its place
//! in the tree (parent and ordered children), its geometry, its state flags
//! and the boxed [`Widget`] that gives it behaviour.
//!
//! Ids are generational: once a node is destroyed its id never resolves
//! again, even if the slot is reused. Everything that refers to a node from
//! outside the arena (focus, drag source, user code) holds a plain id and
//! checks liveness on use.
//!
//! The children sequence is the z-order: later children are drawn on top and
//! are hit-tested first.

use std::any::Any;
use std::fmt;

use slotmap::{SlotMap, new_key_type};
use trellis_core::logging::PerfSpan;
use trellis_core::logging::span_names;
use trellis_core::{Rect, SkinSource, TreeError, TreeResult};

use super::context::EventCtx;
use super::interaction::{Deferred, FocusRemovalPolicy, InteractionContext};
use super::traits::{DragTarget, Drawable, Hittable, KeyTarget, Lifecycle, PointerTarget, Widget};

new_key_type! {
    /// A handle to a node in a [`WidgetTree`].
    ///
    /// Handles stay valid while the node exists and never resolve again once
    /// it has been destroyed.
    pub struct NodeId;
}

impl NodeId {
    /// Convert the id to a raw u64 value.
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Rebuild an id from a raw u64 value. The id is not checked against any
    /// tree.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}

/// Per-node storage.
pub(crate) struct NodeData {
    /// Debug label.
    pub(crate) name: String,
    pub(crate) type_name: &'static str,
    pub(crate) parent: Option<NodeId>,
    /// Back to front.
    pub(crate) children: Vec<NodeId>,
    /// In parent-local coordinates.
    pub(crate) rect: Rect,
    pub(crate) visible: bool,
    pub(crate) enabled: bool,
    pub(crate) has_pointer: bool,
    pub(crate) pushed: bool,
    pub(crate) selected: bool,
    /// `None` while one of the widget's own hooks is running.
    pub(crate) widget: Option<Box<dyn Widget>>,
}

impl NodeData {
    fn new(widget: Box<dyn Widget>, type_name: &'static str) -> Self {
        Self {
            name: String::new(),
            type_name,
            parent: None,
            children: Vec::new(),
            rect: Rect::from_xywh(0.0, 0.0, 0.0, 0.0),
            visible: true,
            enabled: true,
            has_pointer: false,
            pushed: false,
            selected: false,
            widget: Some(widget),
        }
    }
}

/// Stand-in for a widget whose hooks are already running. Every hook falls
/// back to the base behaviour.
struct Busy;

impl Hittable for Busy {}
impl Drawable for Busy {}
impl PointerTarget for Busy {}
impl KeyTarget for Busy {}
impl DragTarget for Busy {}
impl Lifecycle for Busy {}

/// An arena of widgets arranged in one or more trees.
///
/// Structural queries and attaching need only the tree. Operations that can
/// notify widgets (detaching a node under the pointer, changing geometry or
/// enabled state, focus, drag and drop, dispatch) also take the
/// [`InteractionContext`] that holds the focus and drag state for the trees.
pub struct WidgetTree {
    nodes: SlotMap<NodeId, NodeData>,
}

impl WidgetTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a detached node driven by `widget`.
    pub fn insert<W: Widget>(&mut self, widget: W) -> NodeId {
        let type_name = std::any::type_name::<W>();
        let id = self.nodes.insert(NodeData::new(Box::new(widget), type_name));
        tracing::trace!(target: "trellis::tree", ?id, type_name, "inserted node");
        id
    }

    /// Adds a detached node with a debug label.
    pub fn insert_named<W: Widget>(&mut self, name: impl Into<String>, widget: W) -> NodeId {
        let id = self.insert(widget);
        if let Some(node) = self.nodes.get_mut(id) {
            node.name = name.into();
        }
        id
    }

    /// Returns true if the node exists.
    #[inline]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    fn ensure(&self, id: NodeId) -> TreeResult<&NodeData> {
        self.nodes.get(id).ok_or(TreeError::InvalidNode)
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// Attaches `node` as a child of `parent`.
    ///
    /// The node is inserted immediately before `insert_before`, or at the end
    /// (on top) when `insert_before` is `None`. On failure nothing changes.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        node: NodeId,
        insert_before: Option<NodeId>,
    ) -> TreeResult<()> {
        let result = self.check_attach(parent, node, insert_before);
        if let Err(reason) = result {
            tracing::debug!(target: "trellis::tree", ?parent, ?node, %reason, "add_child rejected");
            return Err(reason);
        }

        let children = &mut self.nodes[parent].children;
        let index = insert_before
            .and_then(|before| children.iter().position(|&c| c == before))
            .unwrap_or(children.len());
        children.insert(index, node);
        self.nodes[node].parent = Some(parent);

        tracing::trace!(target: "trellis::tree", ?parent, ?node, index, "attached node");
        Ok(())
    }

    fn check_attach(
        &self,
        parent: NodeId,
        node: NodeId,
        insert_before: Option<NodeId>,
    ) -> TreeResult<()> {
        self.ensure(parent)?;
        let data = self.ensure(node)?;
        if node == parent {
            return Err(TreeError::AttachSelf);
        }
        if insert_before == Some(node) {
            return Err(TreeError::AttachBeforeSelf);
        }
        if data.parent.is_some() {
            return Err(TreeError::AlreadyParented);
        }
        if let Some(before) = insert_before {
            if self.ensure(before)?.parent != Some(parent) {
                return Err(TreeError::NotAChild);
            }
        }
        if self.contains(node, parent) {
            return Err(TreeError::CircularParentage);
        }
        Ok(())
    }

    /// Detaches `node` from `parent`.
    ///
    /// If the node has the pointer it first receives a pointer-leave (or a
    /// drag-leave during a drag session) at coordinates outside itself. With
    /// [`FocusRemovalPolicy::Clear`], focus held inside the detached subtree
    /// is cleared.
    pub fn remove_child(
        &mut self,
        cx: &mut InteractionContext,
        parent: NodeId,
        node: NodeId,
    ) -> TreeResult<()> {
        self.ensure(parent)?;
        if self.ensure(node)?.parent != Some(parent) {
            tracing::debug!(target: "trellis::tree", ?parent, ?node, "remove_child rejected: not a child");
            return Err(TreeError::NotAChild);
        }

        if self.has_pointer(node) {
            self.release_pointer(cx, node);
            if self.parent(node) != Some(parent) {
                // The leave handler already moved or destroyed the node.
                return Ok(());
            }
        }

        self.detach(parent, node);
        tracing::trace!(target: "trellis::tree", ?parent, ?node, "detached node");

        if cx.focus_removal_policy() == FocusRemovalPolicy::Clear
            && cx.focus().is_some_and(|focus| self.contains(node, focus))
        {
            self.clear_focus(cx);
        }
        Ok(())
    }

    /// Detaches `node` from its parent. Does nothing for a root.
    pub fn remove_from_parent(&mut self, cx: &mut InteractionContext, node: NodeId) -> TreeResult<()> {
        let parent = self.ensure(node)?.parent;
        match parent {
            Some(parent) => self.remove_child(cx, parent, node),
            None => Ok(()),
        }
    }

    fn detach(&mut self, parent: NodeId, node: NodeId) {
        if let Some(parent_data) = self.nodes.get_mut(parent) {
            parent_data.children.retain(|&child| child != node);
        }
        if let Some(data) = self.nodes.get_mut(node) {
            data.parent = None;
        }
    }

    /// Removes `node` and its whole subtree from the arena.
    ///
    /// The node is detached first. Focus held inside the subtree is cleared
    /// (the holder is notified) and a drag source inside the subtree is
    /// forgotten. The widgets are dropped.
    pub fn destroy(&mut self, cx: &mut InteractionContext, node: NodeId) -> TreeResult<()> {
        let parent = self.ensure(node)?.parent;
        match parent {
            Some(parent) => self.remove_child(cx, parent, node)?,
            None if self.has_pointer(node) => self.release_pointer(cx, node),
            None => {}
        }
        if !self.is_alive(node) {
            return Ok(());
        }

        if cx.focus().is_some_and(|focus| self.contains(node, focus)) {
            self.clear_focus(cx);
        }
        if cx.drag_source().is_some_and(|source| self.contains(node, source)) {
            cx.forget_drag_source();
        }

        // A notification above may have re-attached the node.
        if let Some(parent) = self.parent(node) {
            self.detach(parent, node);
        }

        let doomed = self.preorder(node);
        for &id in &doomed {
            self.nodes.remove(id);
        }
        tracing::trace!(target: "trellis::tree", ?node, count = doomed.len(), "destroyed subtree");
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the parent of a node, or `None` for a root or a dead id.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|d| d.parent)
    }

    /// Returns the children of a node, back to front.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|d| d.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).last().copied()
    }

    /// Returns the sibling just behind this node.
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(id)?);
        let pos = siblings.iter().position(|&c| c == id)?;
        pos.checked_sub(1).map(|p| siblings[p])
    }

    /// Returns the sibling just in front of this node.
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(id)?);
        let pos = siblings.iter().position(|&c| c == id)?;
        siblings.get(pos + 1).copied()
    }

    /// Returns the root of the tree containing `id` (possibly `id` itself).
    pub fn root(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.nodes.contains_key(id).then_some(id)?;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        Some(current)
    }

    /// Returns true if `node` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.nodes.contains_key(node).then_some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// All nodes without a parent.
    pub fn roots(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, d)| d.parent.is_none())
            .map(|(id, _)| id)
            .collect()
    }

    /// The subtree rooted at `id`, parents before children.
    pub fn preorder(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        if self.nodes.contains_key(id) {
            self.preorder_into(id, &mut result);
        }
        result
    }

    fn preorder_into(&self, id: NodeId, result: &mut Vec<NodeId>) {
        result.push(id);
        for &child in self.children(id) {
            self.preorder_into(child, result);
        }
    }

    /// The subtree rooted at `id`, children before parents.
    pub fn postorder(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        if self.nodes.contains_key(id) {
            self.postorder_into(id, &mut result);
        }
        result
    }

    fn postorder_into(&self, id: NodeId, result: &mut Vec<NodeId>) {
        for &child in self.children(id) {
            self.postorder_into(child, result);
        }
        result.push(id);
    }

    /// Returns the debug label of a node.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).map(|d| d.name.as_str())
    }

    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) -> TreeResult<()> {
        let data = self.nodes.get_mut(id).ok_or(TreeError::InvalidNode)?;
        data.name = name.into();
        Ok(())
    }

    /// Finds the first node labelled `name` in the subtree rooted at `root`.
    pub fn find_by_name(&self, root: NodeId, name: &str) -> Option<NodeId> {
        self.preorder(root)
            .into_iter()
            .find(|&id| self.name(id) == Some(name))
    }

    /// Returns the Rust type name of the node's widget.
    pub fn type_name(&self, id: NodeId) -> Option<&'static str> {
        self.nodes.get(id).map(|d| d.type_name)
    }

    /// Returns the rectangle of a node in its parent's coordinates.
    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.nodes.get(id).map(|d| d.rect)
    }

    pub fn is_visible(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|d| d.visible)
    }

    /// Returns the node's own enabled flag.
    pub fn is_enabled(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|d| d.enabled)
    }

    /// Returns true if the node and all its ancestors are enabled.
    pub fn is_enabled_tree(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            match self.nodes.get(node) {
                Some(data) if data.enabled => current = data.parent,
                _ => return false,
            }
        }
        true
    }

    /// Returns the pointer residency flag.
    pub fn has_pointer(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|d| d.has_pointer)
    }

    pub fn is_pushed(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|d| d.pushed)
    }

    pub fn is_selected(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|d| d.selected)
    }

    pub fn set_pushed(&mut self, id: NodeId, pushed: bool) -> TreeResult<()> {
        self.nodes.get_mut(id).ok_or(TreeError::InvalidNode)?.pushed = pushed;
        Ok(())
    }

    pub fn set_selected(&mut self, id: NodeId, selected: bool) -> TreeResult<()> {
        self.nodes.get_mut(id).ok_or(TreeError::InvalidNode)?.selected = selected;
        Ok(())
    }

    /// Borrows the node's widget as `T`.
    ///
    /// Returns `None` for a dead id, a widget of another type, or a widget
    /// whose hooks are currently running (the target of the current event
    /// and its ancestors during dispatch).
    pub fn widget<T: Widget>(&self, id: NodeId) -> Option<&T> {
        let widget: &dyn Widget = self.nodes.get(id)?.widget.as_deref()?;
        let any: &dyn Any = widget;
        any.downcast_ref::<T>()
    }

    /// Mutably borrows the node's widget as `T`. See [`widget`](Self::widget).
    pub fn widget_mut<T: Widget>(&mut self, id: NodeId) -> Option<&mut T> {
        let widget: &mut dyn Widget = self.nodes.get_mut(id)?.widget.as_deref_mut()?;
        let any: &mut dyn Any = widget;
        any.downcast_mut::<T>()
    }

    /// Tests a point in `id`'s local coordinates against its widget.
    pub(crate) fn hit(&self, id: NodeId, x: f32, y: f32) -> bool {
        let Some(data) = self.nodes.get(id) else {
            return false;
        };
        match data.widget.as_deref() {
            Some(widget) => widget.intersects(&data.rect, x, y),
            None => Busy.intersects(&data.rect, x, y),
        }
    }

    /// Returns the topmost visible child of `id` under a point given in
    /// `id`'s local coordinates.
    pub fn child_from_point(&self, id: NodeId, x: f32, y: f32) -> Option<NodeId> {
        self.children(id).iter().rev().copied().find(|&child| {
            self.nodes.get(child).is_some_and(|data| {
                data.visible && self.hit(child, x - data.rect.left(), y - data.rect.top())
            })
        })
    }

    /// Returns the child of `id` currently flagged as under the pointer.
    pub fn pointer_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.has_pointer(child))
    }

    /// Clears the residency flags of a whole subtree without notifying.
    pub(crate) fn clear_pointer_flags(&mut self, id: NodeId) {
        for node in self.preorder(id) {
            if let Some(data) = self.nodes.get_mut(node) {
                data.has_pointer = false;
            }
        }
    }

    // =========================================================================
    // Hook invocation
    // =========================================================================

    /// Returns true while one of the node's own hooks is running.
    pub(crate) fn is_busy(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|data| data.widget.is_none())
    }

    /// Runs `f` against the widget of `id` with an event context for `id`.
    ///
    /// The widget is taken out of its slot for the duration of the call and
    /// put back afterwards, unless the node was destroyed meanwhile, in which
    /// case the widget is dropped. A widget that is already taken is replaced
    /// by a stand-in whose hooks all run the base behaviour; notifications
    /// that must reach the real widget are deferred through
    /// [`InteractionContext`] and delivered here once it is back.
    pub(crate) fn with_widget<R>(
        &mut self,
        cx: &mut InteractionContext,
        id: NodeId,
        f: impl FnOnce(&mut dyn Widget, &mut EventCtx<'_>) -> R,
    ) -> R {
        let taken = self.nodes.get_mut(id).and_then(|d| d.widget.take());
        let (result, widget) = {
            let mut ecx = EventCtx::new(self, cx, id);
            match taken {
                Some(mut widget) => {
                    let result = f(widget.as_mut(), &mut ecx);
                    (result, Some(widget))
                }
                None => {
                    let busy: &mut dyn Widget = &mut Busy;
                    (f(busy, &mut ecx), None)
                }
            }
        };
        if let Some(widget) = widget {
            match self.nodes.get_mut(id) {
                Some(data) => data.widget = Some(widget),
                None => tracing::trace!(target: "trellis::tree", ?id, "node destroyed during its own hook"),
            }
            self.flush_deferred(cx, id);
        }
        result
    }

    /// Delivers what was held back for `id` while its widget was busy. For a
    /// destroyed node only pending focus requests still run.
    fn flush_deferred(&mut self, cx: &mut InteractionContext, id: NodeId) {
        while let Some(deferred) = cx.take_deferred(id) {
            let alive = self.is_alive(id);
            match deferred {
                Deferred::FocusRequest(target) => {
                    if let Err(reason) = self.set_focus(cx, target) {
                        tracing::debug!(target: "trellis::focus", holder = ?id, requested = ?target, %reason, "deferred focus change failed");
                    }
                }
                _ if !alive => {}
                Deferred::GotFocus => self.with_widget(cx, id, |w, ecx| w.got_focus(ecx)),
                Deferred::LostFocus => {
                    self.with_widget(cx, id, |w, ecx| w.lost_focus(ecx));
                }
                Deferred::Leave { x, y, args } => {
                    self.with_widget(cx, id, |w, ecx| match &args {
                        Some(args) => w.drag_leave(ecx, x, y, args),
                        None => w.mouse_leave(ecx, x, y),
                    });
                }
            }
        }
    }

    // =========================================================================
    // Geometry and state
    // =========================================================================

    /// Sets the rectangle of a node through its `set_rect` hook. Width and
    /// height are clamped to zero by the base behaviour.
    pub fn set_rect(
        &mut self,
        cx: &mut InteractionContext,
        id: NodeId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> TreeResult<()> {
        self.ensure(id)?;
        self.with_widget(cx, id, |w, ecx| w.set_rect(ecx, x, y, width, height));
        Ok(())
    }

    pub fn set_x(&mut self, cx: &mut InteractionContext, id: NodeId, x: f32) -> TreeResult<()> {
        let r = self.ensure(id)?.rect;
        self.set_rect(cx, id, x, r.top(), r.width(), r.height())
    }

    pub fn set_y(&mut self, cx: &mut InteractionContext, id: NodeId, y: f32) -> TreeResult<()> {
        let r = self.ensure(id)?.rect;
        self.set_rect(cx, id, r.left(), y, r.width(), r.height())
    }

    pub fn set_width(&mut self, cx: &mut InteractionContext, id: NodeId, width: f32) -> TreeResult<()> {
        let r = self.ensure(id)?.rect;
        self.set_rect(cx, id, r.left(), r.top(), width, r.height())
    }

    pub fn set_height(&mut self, cx: &mut InteractionContext, id: NodeId, height: f32) -> TreeResult<()> {
        let r = self.ensure(id)?.rect;
        self.set_rect(cx, id, r.left(), r.top(), r.width(), height)
    }

    pub fn set_position(
        &mut self,
        cx: &mut InteractionContext,
        id: NodeId,
        x: f32,
        y: f32,
    ) -> TreeResult<()> {
        let r = self.ensure(id)?.rect;
        self.set_rect(cx, id, x, y, r.width(), r.height())
    }

    pub fn set_size(
        &mut self,
        cx: &mut InteractionContext,
        id: NodeId,
        width: f32,
        height: f32,
    ) -> TreeResult<()> {
        let r = self.ensure(id)?.rect;
        self.set_rect(cx, id, r.left(), r.top(), width, height)
    }

    /// Shows or hides a node through its `set_visible` hook.
    pub fn set_visible(&mut self, cx: &mut InteractionContext, id: NodeId, visible: bool) -> TreeResult<()> {
        self.ensure(id)?;
        self.with_widget(cx, id, |w, ecx| w.set_visible(ecx, visible));
        Ok(())
    }

    /// Enables or disables a node through its `set_enabled` hook.
    ///
    /// If the focus holder is no longer enabled afterwards (the node itself
    /// or one of its ancestors was disabled) focus is force-cleared: the
    /// focus reference is reset first, then the former holder is notified and
    /// cannot refuse.
    pub fn set_enabled(&mut self, cx: &mut InteractionContext, id: NodeId, enabled: bool) -> TreeResult<()> {
        self.ensure(id)?;
        self.with_widget(cx, id, |w, ecx| w.set_enabled(ecx, enabled));

        if cx.focus().is_some_and(|focus| !self.is_enabled_tree(focus)) {
            self.clear_focus(cx);
        }
        Ok(())
    }

    // =========================================================================
    // Layout and configuration
    // =========================================================================

    /// Runs the `pack` hook over a subtree, children before parents.
    pub fn pack(&mut self, cx: &mut InteractionContext, root: NodeId) -> TreeResult<()> {
        self.ensure(root)?;
        let _span = PerfSpan::new(span_names::LAYOUT);
        for id in self.postorder(root) {
            if self.is_alive(id) {
                self.with_widget(cx, id, |w, ecx| w.pack(ecx));
            }
        }
        Ok(())
    }

    /// Runs the `layout` hook over a subtree, parents before children.
    ///
    /// Children added by a parent's `layout` are laid out in the same pass.
    pub fn layout(&mut self, cx: &mut InteractionContext, root: NodeId) -> TreeResult<()> {
        self.ensure(root)?;
        let _span = PerfSpan::new(span_names::LAYOUT);
        let mut pending = vec![root];
        while let Some(id) = pending.pop() {
            if !self.is_alive(id) {
                continue;
            }
            self.with_widget(cx, id, |w, ecx| w.layout(ecx));
            pending.extend(self.children(id).iter().rev().copied());
        }
        Ok(())
    }

    /// Offers a skin to every widget of a subtree, parents first.
    pub fn apply_skin(
        &mut self,
        cx: &mut InteractionContext,
        root: NodeId,
        skin: &dyn SkinSource,
    ) -> TreeResult<()> {
        self.ensure(root)?;
        for id in self.preorder(root) {
            if self.is_alive(id) {
                self.with_widget(cx, id, |w, ecx| w.apply_skin(ecx, skin));
            }
        }
        Ok(())
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WidgetTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetTree")
            .field("nodes", &self.nodes.len())
            .field("roots", &self.roots())
            .finish()
    }
}
