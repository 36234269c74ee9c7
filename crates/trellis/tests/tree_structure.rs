//! Structural invariants, hit testing and pointer release on detach.

mod common;

use common::Fixture;
use trellis::TreeError;
use trellis::widget::{FocusRemovalPolicy, NodeId, WidgetTree};

/// Every node has at most one parent and appears in its parent's children
/// exactly once.
fn assert_consistent(tree: &WidgetTree, nodes: &[NodeId]) {
    for &node in nodes {
        if let Some(parent) = tree.parent(node) {
            let count = tree.children(parent).iter().filter(|&&c| c == node).count();
            assert_eq!(count, 1, "{node:?} listed {count} times under its parent");
        }
        for &child in tree.children(node) {
            assert_eq!(tree.parent(child), Some(node));
        }
        let listed: usize = nodes
            .iter()
            .map(|&p| tree.children(p).iter().filter(|&&c| c == node).count())
            .sum();
        assert!(listed <= 1);
    }
}

#[test]
fn test_attach_detach_sequences_keep_tree_consistent() {
    let mut fx = Fixture::new();
    let nodes: Vec<NodeId> = ["n0", "n1", "n2", "n3", "n4", "n5"]
        .into_iter()
        .map(|label| fx.node(None, label, (0.0, 0.0, 10.0, 10.0)))
        .collect();

    // A fixed pseudo-random walk of attach and detach calls, including
    // invalid ones.
    let mut seed = 0x2545_f491_u32;
    for _ in 0..200 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let parent = nodes[(seed % 6) as usize];
        let child = nodes[((seed >> 8) % 6) as usize];
        if seed & 0x8000 == 0 {
            let before = fx.tree.last_child(parent);
            let before = if seed & 0x10000 == 0 { before } else { None };
            let _ = fx.tree.add_child(parent, child, before);
        } else {
            let _ = fx.tree.remove_child(&mut fx.cx, parent, child);
        }
        assert_consistent(&fx.tree, &nodes);
        for &node in &nodes {
            // Acyclic: every root walk terminates at a parentless node.
            let root = fx.tree.root(node).unwrap();
            assert_eq!(fx.tree.parent(root), None);
        }
    }
}

#[test]
fn test_rejected_attach_leaves_tree_unchanged() {
    let mut fx = Fixture::new();
    let root = fx.node(None, "root", (0.0, 0.0, 100.0, 100.0));
    let a = fx.node(Some(root), "a", (0.0, 0.0, 10.0, 10.0));
    let b = fx.node(None, "b", (0.0, 0.0, 10.0, 10.0));
    let stranger = fx.node(None, "stranger", (0.0, 0.0, 10.0, 10.0));

    assert_eq!(fx.tree.add_child(root, root, None), Err(TreeError::AttachSelf));
    assert_eq!(fx.tree.add_child(stranger, a, None), Err(TreeError::AlreadyParented));
    assert_eq!(fx.tree.add_child(root, b, Some(stranger)), Err(TreeError::NotAChild));
    assert_eq!(fx.tree.add_child(a, root, None), Err(TreeError::CircularParentage));

    assert_eq!(fx.tree.children(root), &[a]);
    assert_eq!(fx.tree.parent(a), Some(root));
    assert_eq!(fx.tree.parent(b), None);
    assert_eq!(fx.tree.parent(root), None);
    assert!(fx.tree.children(stranger).is_empty());
}

#[test]
fn test_topmost_child_wins_hit_test() {
    let mut fx = Fixture::new();
    let root = fx.node(None, "root", (0.0, 0.0, 100.0, 100.0));
    let a = fx.node(Some(root), "a", (0.0, 0.0, 10.0, 10.0));
    let b = fx.node(Some(root), "b", (5.0, 5.0, 10.0, 10.0));

    assert_eq!(fx.tree.child_from_point(root, 7.0, 7.0), Some(b));
    assert_eq!(fx.tree.child_from_point(root, 2.0, 2.0), Some(a));
    assert_eq!(fx.tree.child_from_point(root, 20.0, 20.0), None);
}

#[test]
fn test_removing_resident_child_sends_leave() {
    let mut fx = Fixture::new();
    let root = fx.node(None, "root", (0.0, 0.0, 100.0, 100.0));
    let a = fx.node(Some(root), "a", (10.0, 10.0, 40.0, 40.0));
    let a1 = fx.node(Some(a), "a1", (0.0, 0.0, 10.0, 10.0));
    let b = fx.node(Some(root), "b", (60.0, 10.0, 30.0, 30.0));

    fx.move_to(root, 15.0, 15.0);
    assert!(fx.tree.has_pointer(a) && fx.tree.has_pointer(a1));
    fx.log();

    fx.tree.remove_child(&mut fx.cx, root, a).unwrap();

    // Local coordinates just outside the top-left corner.
    assert_eq!(fx.log(), ["a.mouse_leave -1,-1", "a1.mouse_leave -1,-1"]);
    assert!(!fx.tree.has_pointer(a));
    assert!(!fx.tree.has_pointer(a1));
    assert_eq!(fx.tree.parent(a), None);

    // Residency is recomputed from scratch for the remaining children.
    fx.move_to(root, 70.0, 20.0);
    assert_eq!(fx.log_of("b"), ["b.mouse_enter 10,10"]);
    assert!(fx.tree.has_pointer(b));
}

#[test]
fn test_removing_non_resident_child_is_silent() {
    let mut fx = Fixture::new();
    let root = fx.node(None, "root", (0.0, 0.0, 100.0, 100.0));
    let a = fx.node(Some(root), "a", (0.0, 0.0, 10.0, 10.0));
    fx.log();

    fx.tree.remove_from_parent(&mut fx.cx, a).unwrap();
    assert!(fx.log().is_empty());
}

#[test]
fn test_destroy_resident_subtree() {
    let mut fx = Fixture::new();
    let root = fx.node(None, "root", (0.0, 0.0, 100.0, 100.0));
    let a = fx.node(Some(root), "a", (0.0, 0.0, 50.0, 50.0));
    let a1 = fx.node(Some(a), "a1", (0.0, 0.0, 10.0, 10.0));

    fx.move_to(root, 5.0, 5.0);
    fx.tree.set_focus(&mut fx.cx, a1).unwrap();
    fx.log();

    fx.tree.destroy(&mut fx.cx, a).unwrap();

    assert_eq!(
        fx.log(),
        ["a.mouse_leave -1,-1", "a1.mouse_leave -1,-1", "a1.lost_focus"]
    );
    assert!(!fx.tree.is_alive(a));
    assert!(!fx.tree.is_alive(a1));
    assert_eq!(fx.cx.focus(), None);
    assert!(fx.tree.children(root).is_empty());
}

#[test]
fn test_destroying_root_with_pointer() {
    let mut fx = Fixture::new();
    let root = fx.node(None, "root", (0.0, 0.0, 100.0, 100.0));
    fx.move_to(root, 5.0, 5.0);
    fx.log();

    fx.tree.destroy(&mut fx.cx, root).unwrap();
    assert_eq!(fx.log(), ["root.mouse_leave -1,-1"]);
    assert!(fx.tree.is_empty());
}

#[test]
fn test_focus_retained_on_removal_by_default() {
    let mut fx = Fixture::new();
    assert_eq!(fx.cx.focus_removal_policy(), FocusRemovalPolicy::Retain);
    let root = fx.node(None, "root", (0.0, 0.0, 100.0, 100.0));
    let field = fx.node(Some(root), "field", (0.0, 0.0, 10.0, 10.0));
    fx.tree.set_focus(&mut fx.cx, field).unwrap();
    fx.log();

    fx.tree.remove_child(&mut fx.cx, root, field).unwrap();

    assert_eq!(fx.cx.focus(), Some(field));
    assert!(fx.log().is_empty());

    // The detached holder still receives keys.
    fx.key_down(root, 13);
    assert_eq!(fx.log_of("field"), ["field.key_down 13"]);
}

#[test]
fn test_focus_cleared_on_removal_with_clear_policy() {
    let mut fx = Fixture::with_policy(FocusRemovalPolicy::Clear);
    let root = fx.node(None, "root", (0.0, 0.0, 100.0, 100.0));
    let group = fx.node(Some(root), "group", (0.0, 0.0, 50.0, 50.0));
    let field = fx.node(Some(group), "field", (0.0, 0.0, 10.0, 10.0));
    let other = fx.node(Some(root), "other", (60.0, 0.0, 10.0, 10.0));
    fx.tree.set_focus(&mut fx.cx, field).unwrap();
    fx.log();

    // Detaching an unrelated node keeps focus.
    fx.tree.remove_child(&mut fx.cx, root, other).unwrap();
    assert_eq!(fx.cx.focus(), Some(field));

    // Detaching an ancestor of the holder clears it.
    fx.tree.remove_child(&mut fx.cx, root, group).unwrap();
    assert_eq!(fx.cx.focus(), None);
    assert_eq!(fx.log(), ["field.lost_focus"]);
}
