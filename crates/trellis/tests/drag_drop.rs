//! The drag-and-drop protocol, end to end.

mod common;

use common::{Behaviour, Fixture};
use trellis::widget::{DispatchResult, Modifiers};
use trellis::{DragError, NodeId, Variant};

/// A root with a drag source on the left and a drop target on the right.
/// Pressing the left button on the source starts a drag carrying `"card"`.
fn board(fx: &mut Fixture) -> (NodeId, NodeId, NodeId) {
    let root = fx.node(None, "root", (0.0, 0.0, 100.0, 100.0));
    let source = fx.probe("source").on("left_button_down", |ecx| {
        ecx.begin_drag(Variant::new("card")).is_ok()
    });
    let source = fx.add(Some(root), source, (0.0, 0.0, 40.0, 40.0));
    let target = fx.probe("target").behaving(Behaviour {
        accept_drops: true,
        ..Behaviour::default()
    });
    let target = fx.add(Some(root), target, (50.0, 0.0, 40.0, 40.0));
    (root, source, target)
}

fn start_drag(fx: &mut Fixture, root: NodeId) {
    fx.move_to(root, 10.0, 10.0);
    assert!(fx.press(root, 1, 10.0, 10.0).was_handled());
    assert!(fx.cx.is_dragging());
    fx.log();
}

#[test]
fn test_drag_round_trip() {
    let mut fx = Fixture::new();
    let (root, source, target) = board(&mut fx);
    start_drag(&mut fx, root);

    fx.move_to(root, 60.0, 10.0);
    fx.move_to(root, 65.0, 12.0);
    assert_eq!(fx.release(root, 1, 65.0, 12.0), DispatchResult::Handled);

    assert_eq!(
        fx.log_of("target"),
        ["target.drag_enter 10,10", "target.drag_move 15,12", "target.left_drop 15,12"]
    );
    let dropped = &fx.probe_ref(target).dropped;
    assert_eq!(dropped.len(), 1);
    assert_eq!(dropped[0].0.downcast::<&str>(), Some(&"card"));
    assert_eq!(dropped[0].1, Some(source));

    assert!(!fx.cx.is_dragging());
    assert!(fx.cx.drag_payload().is_none());
    assert_eq!(fx.cx.drag_source(), None);

    // A new session can start right away.
    fx.tree
        .begin_drag(&mut fx.cx, source, Variant::new(2_u32))
        .unwrap();
    assert!(fx.cx.is_dragging());
}

#[test]
fn test_begin_drag_clears_residency() {
    let mut fx = Fixture::new();
    let (root, source, _target) = board(&mut fx);
    start_drag(&mut fx, root);

    assert!(!fx.tree.has_pointer(root));
    assert!(!fx.tree.has_pointer(source));

    // Residency is rebuilt with drag hooks.
    fx.move_to(root, 12.0, 10.0);
    assert_eq!(fx.log(), ["root.drag_enter 12,10", "source.drag_enter 12,10"]);
    assert!(fx.tree.has_pointer(source));
}

#[test]
fn test_begin_drag_from_outside_a_hook_sends_leaves() {
    let mut fx = Fixture::new();
    let (root, source, target) = board(&mut fx);
    fx.move_to(root, 60.0, 10.0);
    fx.log();

    fx.tree
        .begin_drag(&mut fx.cx, source, Variant::new(1_i32))
        .unwrap();

    assert_eq!(fx.log(), ["root.mouse_leave -1,-1", "target.mouse_leave -51,-1"]);
    assert!(!fx.tree.has_pointer(root));
    assert!(!fx.tree.has_pointer(target));
}

#[test]
fn test_begin_drag_from_source_hook_sends_leaves() {
    let mut fx = Fixture::new();
    let (root, source, _target) = board(&mut fx);
    fx.move_to(root, 10.0, 10.0);
    assert_eq!(fx.log(), ["root.mouse_enter 10,10", "source.mouse_enter 10,10"]);

    fx.press(root, 1, 10.0, 10.0);

    // Each leave runs once the receiving widget's own hook has returned.
    assert_eq!(
        fx.log(),
        [
            "root.left_button_down 10,10",
            "source.left_button_down 10,10",
            "source.mouse_leave -1,-1",
            "root.mouse_leave -1,-1",
        ]
    );
    assert!(!fx.tree.has_pointer(root));
    assert!(!fx.tree.has_pointer(source));
}

#[test]
fn test_release_on_disabled_root_ends_session() {
    let mut fx = Fixture::new();
    let (root, source, _target) = board(&mut fx);
    start_drag(&mut fx, root);

    fx.tree.set_enabled(&mut fx.cx, root, false).unwrap();
    assert_eq!(fx.release(root, 1, 10.0, 10.0), DispatchResult::Disabled);
    assert!(!fx.cx.is_dragging());

    fx.tree.set_enabled(&mut fx.cx, root, true).unwrap();
    assert_eq!(
        fx.tree.begin_drag(&mut fx.cx, source, Variant::new("again")),
        Ok(())
    );
}

#[test]
fn test_second_drag_is_rejected() {
    let mut fx = Fixture::new();
    let (root, source, target) = board(&mut fx);
    start_drag(&mut fx, root);

    assert_eq!(
        fx.tree.begin_drag(&mut fx.cx, target, Variant::new("other")),
        Err(DragError::AlreadyActive)
    );
    assert_eq!(fx.cx.drag_source(), Some(source));
    assert_eq!(
        fx.cx.drag_payload().and_then(|p| p.downcast::<&str>()),
        Some(&"card")
    );
}

#[test]
fn test_empty_payload_is_rejected() {
    let mut fx = Fixture::new();
    let (_root, source, _target) = board(&mut fx);
    assert_eq!(
        fx.tree.begin_drag(&mut fx.cx, source, Variant::empty()),
        Err(DragError::EmptyPayload)
    );
    assert!(!fx.cx.is_dragging());
}

#[test]
fn test_refused_drop_still_ends_session() {
    let mut fx = Fixture::new();
    let (root, _source, target) = board(&mut fx);
    fx.probe_mut(target).behaviour.accept_drops = false;
    start_drag(&mut fx, root);

    fx.move_to(root, 60.0, 10.0);
    assert_eq!(fx.release(root, 1, 60.0, 10.0), DispatchResult::Ignored);
    assert!(!fx.cx.is_dragging());
    assert!(fx.probe_ref(target).dropped.is_empty());
}

#[test]
fn test_drop_outside_root_ends_session() {
    let mut fx = Fixture::new();
    let (root, _source, _target) = board(&mut fx);
    start_drag(&mut fx, root);

    assert_eq!(fx.release(root, 1, 500.0, 500.0), DispatchResult::Ignored);
    assert!(!fx.cx.is_dragging());
    assert!(fx.log().is_empty());
}

#[test]
fn test_drop_routes_by_button() {
    let mut fx = Fixture::new();
    let (root, _source, target) = board(&mut fx);
    start_drag(&mut fx, root);
    fx.move_to(root, 60.0, 10.0);
    fx.log();

    fx.release(root, 3, 60.0, 10.0);
    assert_eq!(fx.log_of("target"), ["target.middle_drop 10,10"]);
    assert_eq!(fx.probe_ref(target).dropped.len(), 1);
}

#[test]
fn test_drag_leave_between_children() {
    let mut fx = Fixture::new();
    let (root, _source, _target) = board(&mut fx);
    start_drag(&mut fx, root);

    fx.move_to(root, 60.0, 10.0);
    fx.move_to(root, 20.0, 10.0);
    assert_eq!(
        fx.log(),
        [
            "root.drag_enter 60,10",
            "target.drag_enter 10,10",
            "root.drag_move 20,10",
            "target.drag_leave -30,10",
            "source.drag_enter 20,10",
        ]
    );
}

#[test]
fn test_wheel_during_drag() {
    let mut fx = Fixture::new();
    let (root, _source, _target) = board(&mut fx);
    start_drag(&mut fx, root);
    fx.move_to(root, 60.0, 10.0);
    fx.log();

    fx.wheel(root, 1, 0);
    assert_eq!(fx.log(), ["root.drag_wheel 1,0", "target.drag_wheel 1,0"]);
}

#[test]
fn test_modifier_change_reenters() {
    let mut fx = Fixture::new();
    let (root, _source, target) = board(&mut fx);
    start_drag(&mut fx, root);
    fx.move_to(root, 60.0, 10.0);
    fx.log();

    // A changed mask re-enters at the pointer instead of typing.
    fx.key_char(root, 0, None, Modifiers::CONTROL);
    assert_eq!(
        fx.log(),
        [
            "root.drag_leave 60,10",
            "target.drag_leave 10,10",
            "root.drag_enter 60,10",
            "target.drag_enter 10,10",
        ]
    );
    assert_eq!(fx.probe_ref(target).drag_modifiers.last(), Some(&Modifiers::CONTROL));
    assert_eq!(
        fx.cx.drag_session().map(|s| s.pending_modifiers()),
        Some(Modifiers::CONTROL)
    );

    // The same mask again is an ordinary character.
    fx.key_char(root, 0, None, Modifiers::CONTROL);
    assert_eq!(fx.log_of("root"), ["root.unused_key_char 0"]);

    // The drop carries the latest mask.
    fx.release(root, 1, 60.0, 10.0);
    assert_eq!(fx.probe_ref(target).drag_modifiers.last(), Some(&Modifiers::CONTROL));
}

#[test]
fn test_removing_resident_target_during_drag_sends_drag_leave() {
    let mut fx = Fixture::new();
    let (root, _source, target) = board(&mut fx);
    start_drag(&mut fx, root);
    fx.move_to(root, 60.0, 10.0);
    fx.log();

    fx.tree.remove_child(&mut fx.cx, root, target).unwrap();
    assert_eq!(fx.log(), ["target.drag_leave -1,-1"]);
    assert!(fx.cx.is_dragging());
}

#[test]
fn test_target_can_move_payload_out_of_source() {
    let mut fx = Fixture::new();
    let root = fx.node(None, "root", (0.0, 0.0, 100.0, 100.0));
    let source = fx.node(Some(root), "source", (0.0, 0.0, 40.0, 40.0));
    let target = fx.probe("target").on("left_drop", |ecx| {
        // Claim the drop and empty the source's inventory.
        let source = ecx.interaction().drag_source();
        match source.and_then(|s| ecx.widget_mut::<common::Probe>(s)) {
            Some(probe) => {
                probe.dropped.clear();
                true
            }
            None => false,
        }
    });
    fx.add(Some(root), target, (50.0, 0.0, 40.0, 40.0));
    fx.probe_mut(source).dropped.push((Variant::new(7_u8), None));

    fx.tree.begin_drag(&mut fx.cx, source, Variant::new(7_u8)).unwrap();
    fx.move_to(root, 60.0, 10.0);
    assert!(fx.release(root, 1, 60.0, 10.0).was_handled());

    assert!(fx.probe_ref(source).dropped.is_empty());
}
