//! Shared fixtures for the integration tests.
//!
//! [`Probe`] is a widget that writes every hook it receives into a shared
//! journal and then runs the base behaviour, unless a test installed an
//! action for that hook.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use trellis::widget::{
    base, DispatchResult, DragArgs, DragTarget, Drawable, EventCtx, FocusRemovalPolicy, Hittable,
    InputEvent, InteractionContext, KeyTarget, Lifecycle, Modifiers, NodeId, PointerTarget,
    WidgetTree,
};
use trellis::Variant;

pub type Journal = Rc<RefCell<Vec<String>>>;

/// Replaces the base behaviour of one hook. Returns the handled flag.
pub type Action = Box<dyn FnMut(&mut EventCtx<'_>) -> bool>;

/// What a probe does on its own when the base behaviour left an event
/// unhandled.
#[derive(Debug, Default, Clone, Copy)]
pub struct Behaviour {
    pub consume_buttons: bool,
    pub consume_keys: bool,
    pub consume_unused_keys: bool,
    pub consume_timer: bool,
    pub accept_drops: bool,
    pub refuse_focus: bool,
}

pub struct Probe {
    pub label: &'static str,
    journal: Journal,
    pub behaviour: Behaviour,
    actions: HashMap<&'static str, Action>,
    /// Payloads and sources of accepted drops.
    pub dropped: Vec<(Variant, Option<NodeId>)>,
    /// Modifier masks seen by the drag hooks.
    pub drag_modifiers: Vec<Modifiers>,
}

impl Probe {
    pub fn new(label: &'static str, journal: &Journal) -> Self {
        Self {
            label,
            journal: Rc::clone(journal),
            behaviour: Behaviour::default(),
            actions: HashMap::new(),
            dropped: Vec::new(),
            drag_modifiers: Vec::new(),
        }
    }

    pub fn behaving(mut self, behaviour: Behaviour) -> Self {
        self.behaviour = behaviour;
        self
    }

    pub fn on(
        mut self,
        hook: &'static str,
        action: impl FnMut(&mut EventCtx<'_>) -> bool + 'static,
    ) -> Self {
        self.actions.insert(hook, Box::new(action));
        self
    }

    /// Logs the hook and runs its action, if one is installed.
    fn record(&mut self, ecx: &mut EventCtx<'_>, hook: &'static str, detail: String) -> Option<bool> {
        let line = if detail.is_empty() {
            format!("{}.{}", self.label, hook)
        } else {
            format!("{}.{} {}", self.label, hook, detail)
        };
        self.journal.borrow_mut().push(line);
        self.actions.get_mut(hook).map(|action| action(ecx))
    }

    fn drag(&mut self, ecx: &mut EventCtx<'_>, hook: &'static str, detail: String, args: &DragArgs) -> Option<bool> {
        self.drag_modifiers.push(args.modifiers);
        self.record(ecx, hook, detail)
    }

    fn accept(&mut self, args: &DragArgs) -> bool {
        if self.behaviour.accept_drops {
            self.dropped.push((args.payload.clone(), args.source));
        }
        self.behaviour.accept_drops
    }
}

fn point(x: f32, y: f32) -> String {
    format!("{x},{y}")
}

fn key(keycode: i32, unichar: Option<char>) -> String {
    match unichar {
        Some(c) => format!("{keycode} {c}"),
        None => keycode.to_string(),
    }
}

impl Hittable for Probe {}
impl Drawable for Probe {}

impl PointerTarget for Probe {
    fn left_button_down(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
        if let Some(handled) = self.record(ecx, "left_button_down", point(x, y)) {
            return handled;
        }
        base::left_button_down(ecx, x, y) || self.behaviour.consume_buttons
    }

    fn right_button_down(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
        if let Some(handled) = self.record(ecx, "right_button_down", point(x, y)) {
            return handled;
        }
        base::right_button_down(ecx, x, y) || self.behaviour.consume_buttons
    }

    fn middle_button_down(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
        if let Some(handled) = self.record(ecx, "middle_button_down", point(x, y)) {
            return handled;
        }
        base::middle_button_down(ecx, x, y) || self.behaviour.consume_buttons
    }

    fn left_button_up(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
        if let Some(handled) = self.record(ecx, "left_button_up", point(x, y)) {
            return handled;
        }
        base::left_button_up(ecx, x, y) || self.behaviour.consume_buttons
    }

    fn right_button_up(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
        if let Some(handled) = self.record(ecx, "right_button_up", point(x, y)) {
            return handled;
        }
        base::right_button_up(ecx, x, y) || self.behaviour.consume_buttons
    }

    fn middle_button_up(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
        if let Some(handled) = self.record(ecx, "middle_button_up", point(x, y)) {
            return handled;
        }
        base::middle_button_up(ecx, x, y) || self.behaviour.consume_buttons
    }

    fn mouse_enter(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
        if let Some(handled) = self.record(ecx, "mouse_enter", point(x, y)) {
            return handled;
        }
        base::mouse_enter(ecx, x, y)
    }

    fn mouse_move(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
        if let Some(handled) = self.record(ecx, "mouse_move", point(x, y)) {
            return handled;
        }
        base::mouse_move(ecx, x, y)
    }

    fn mouse_leave(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32) -> bool {
        if let Some(handled) = self.record(ecx, "mouse_leave", point(x, y)) {
            return handled;
        }
        base::mouse_leave(ecx, x, y)
    }

    fn mouse_wheel(&mut self, ecx: &mut EventCtx<'_>, z: i32, w: i32) -> bool {
        if let Some(handled) = self.record(ecx, "mouse_wheel", format!("{z},{w}")) {
            return handled;
        }
        base::mouse_wheel(ecx, z, w)
    }
}

impl KeyTarget for Probe {
    fn key_down(&mut self, ecx: &mut EventCtx<'_>, keycode: i32) -> bool {
        if let Some(handled) = self.record(ecx, "key_down", key(keycode, None)) {
            return handled;
        }
        base::key_down(ecx, keycode) || self.behaviour.consume_keys
    }

    fn key_up(&mut self, ecx: &mut EventCtx<'_>, keycode: i32) -> bool {
        if let Some(handled) = self.record(ecx, "key_up", key(keycode, None)) {
            return handled;
        }
        base::key_up(ecx, keycode) || self.behaviour.consume_keys
    }

    fn key_char(
        &mut self,
        ecx: &mut EventCtx<'_>,
        keycode: i32,
        unichar: Option<char>,
        modifiers: Modifiers,
    ) -> bool {
        if let Some(handled) = self.record(ecx, "key_char", key(keycode, unichar)) {
            return handled;
        }
        base::key_char(ecx, keycode, unichar, modifiers) || self.behaviour.consume_keys
    }

    fn unused_key_down(&mut self, ecx: &mut EventCtx<'_>, keycode: i32) -> bool {
        if let Some(handled) = self.record(ecx, "unused_key_down", key(keycode, None)) {
            return handled;
        }
        base::unused_key_down(ecx, keycode) || self.behaviour.consume_unused_keys
    }

    fn unused_key_up(&mut self, ecx: &mut EventCtx<'_>, keycode: i32) -> bool {
        if let Some(handled) = self.record(ecx, "unused_key_up", key(keycode, None)) {
            return handled;
        }
        base::unused_key_up(ecx, keycode) || self.behaviour.consume_unused_keys
    }

    fn unused_key_char(
        &mut self,
        ecx: &mut EventCtx<'_>,
        keycode: i32,
        unichar: Option<char>,
        modifiers: Modifiers,
    ) -> bool {
        if let Some(handled) = self.record(ecx, "unused_key_char", key(keycode, unichar)) {
            return handled;
        }
        base::unused_key_char(ecx, keycode, unichar, modifiers) || self.behaviour.consume_unused_keys
    }
}

impl DragTarget for Probe {
    fn left_drop(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32, args: &DragArgs) -> bool {
        if let Some(handled) = self.drag(ecx, "left_drop", point(x, y), args) {
            return handled;
        }
        base::left_drop(ecx, x, y, args) || self.accept(args)
    }

    fn right_drop(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32, args: &DragArgs) -> bool {
        if let Some(handled) = self.drag(ecx, "right_drop", point(x, y), args) {
            return handled;
        }
        base::right_drop(ecx, x, y, args) || self.accept(args)
    }

    fn middle_drop(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32, args: &DragArgs) -> bool {
        if let Some(handled) = self.drag(ecx, "middle_drop", point(x, y), args) {
            return handled;
        }
        base::middle_drop(ecx, x, y, args) || self.accept(args)
    }

    fn drag_enter(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32, args: &DragArgs) -> bool {
        if let Some(handled) = self.drag(ecx, "drag_enter", point(x, y), args) {
            return handled;
        }
        base::drag_enter(ecx, x, y, args)
    }

    fn drag_move(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32, args: &DragArgs) -> bool {
        if let Some(handled) = self.drag(ecx, "drag_move", point(x, y), args) {
            return handled;
        }
        base::drag_move(ecx, x, y, args)
    }

    fn drag_leave(&mut self, ecx: &mut EventCtx<'_>, x: f32, y: f32, args: &DragArgs) -> bool {
        if let Some(handled) = self.drag(ecx, "drag_leave", point(x, y), args) {
            return handled;
        }
        base::drag_leave(ecx, x, y, args)
    }

    fn drag_wheel(&mut self, ecx: &mut EventCtx<'_>, z: i32, w: i32, args: &DragArgs) -> bool {
        if let Some(handled) = self.drag(ecx, "drag_wheel", format!("{z},{w}"), args) {
            return handled;
        }
        base::drag_wheel(ecx, z, w, args)
    }
}

impl Lifecycle for Probe {
    fn lost_focus(&mut self, ecx: &mut EventCtx<'_>) -> bool {
        self.record(ecx, "lost_focus", String::new())
            .unwrap_or(!self.behaviour.refuse_focus)
    }

    fn got_focus(&mut self, ecx: &mut EventCtx<'_>) {
        self.record(ecx, "got_focus", String::new());
    }

    fn timer(&mut self, ecx: &mut EventCtx<'_>, timestamp: f64, count: u64) -> bool {
        if let Some(handled) = self.record(ecx, "timer", count.to_string()) {
            return handled;
        }
        base::timer(ecx, timestamp, count) || self.behaviour.consume_timer
    }
}

/// A tree, its interaction context and the journal its probes write to.
pub struct Fixture {
    pub tree: WidgetTree,
    pub cx: InteractionContext,
    pub journal: Journal,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_policy(FocusRemovalPolicy::default())
    }

    pub fn with_policy(policy: FocusRemovalPolicy) -> Self {
        Self {
            tree: WidgetTree::new(),
            cx: InteractionContext::new().with_focus_removal_policy(policy),
            journal: Journal::default(),
        }
    }

    /// A fresh probe writing to this fixture's journal.
    pub fn probe(&self, label: &'static str) -> Probe {
        Probe::new(label, &self.journal)
    }

    /// Inserts a probe with the given geometry, under `parent` if given.
    pub fn add(&mut self, parent: Option<NodeId>, probe: Probe, rect: (f32, f32, f32, f32)) -> NodeId {
        let id = self.tree.insert_named(probe.label, probe);
        let (x, y, w, h) = rect;
        self.tree.set_rect(&mut self.cx, id, x, y, w, h).unwrap();
        if let Some(parent) = parent {
            self.tree.add_child(parent, id, None).unwrap();
        }
        id
    }

    /// Shorthand for a plain probe.
    pub fn node(&mut self, parent: Option<NodeId>, label: &'static str, rect: (f32, f32, f32, f32)) -> NodeId {
        let probe = self.probe(label);
        self.add(parent, probe, rect)
    }

    /// Drains the journal.
    pub fn log(&self) -> Vec<String> {
        self.journal.borrow_mut().drain(..).collect()
    }

    /// Drains the journal, keeping only the entries of one probe.
    pub fn log_of(&self, label: &str) -> Vec<String> {
        let prefix = format!("{label}.");
        self.log()
            .into_iter()
            .filter(|line| line.starts_with(&prefix))
            .collect()
    }

    pub fn probe_ref(&self, id: NodeId) -> &Probe {
        self.tree.widget::<Probe>(id).unwrap()
    }

    pub fn probe_mut(&mut self, id: NodeId) -> &mut Probe {
        self.tree.widget_mut::<Probe>(id).unwrap()
    }

    pub fn send(&mut self, root: NodeId, event: InputEvent) -> DispatchResult {
        self.tree.dispatch(&mut self.cx, root, &event)
    }

    pub fn move_to(&mut self, root: NodeId, x: f32, y: f32) -> DispatchResult {
        let (px, py) = self.cx.pointer_position();
        self.send(root, InputEvent::PointerMove { x, y, dx: x - px, dy: y - py })
    }

    pub fn press(&mut self, root: NodeId, button: u32, x: f32, y: f32) -> DispatchResult {
        self.send(root, InputEvent::PointerDown { button, x, y })
    }

    pub fn release(&mut self, root: NodeId, button: u32, x: f32, y: f32) -> DispatchResult {
        self.send(root, InputEvent::PointerUp { button, x, y })
    }

    pub fn key_down(&mut self, root: NodeId, keycode: i32) -> DispatchResult {
        self.send(root, InputEvent::KeyDown { keycode })
    }

    pub fn key_char(&mut self, root: NodeId, keycode: i32, unichar: Option<char>, modifiers: Modifiers) -> DispatchResult {
        self.send(root, InputEvent::KeyChar { keycode, unichar, modifiers })
    }

    pub fn wheel(&mut self, root: NodeId, z: i32, w: i32) -> DispatchResult {
        self.send(root, InputEvent::PointerWheel { z, w })
    }

    pub fn tick(&mut self, root: NodeId, count: u64) -> DispatchResult {
        self.send(root, InputEvent::TimerTick { timestamp: count as f64 * 0.016, count })
    }
}
